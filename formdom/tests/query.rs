use formdom::query::{self, By, QueryError, TextMatch};
use formdom::{Element, Role};

fn sample() -> Element {
    Element::col()
        .id("root")
        .child(Element::heading(1, "Contact Form").id("title"))
        .child(
            Element::row()
                .child(Element::label("First Name*", "firstName"))
                .child(Element::text_input("abcde").id("firstName")),
        )
        .child(Element::text("firstName is too short").test_id("error"))
        .child(
            Element::row()
                .child(Element::label("Message", "message"))
                .child(Element::text_area("").id("message")),
        )
        .child(Element::text("second error").test_id("error"))
        .child(Element::button("Submit").id("submit"))
}

// ============================================================================
// Text
// ============================================================================

#[test]
fn test_text_pattern_is_case_insensitive() {
    let root = sample();
    let by = By::text_pattern("contact form").unwrap();

    let heading = query::get(&root, &by).unwrap();
    assert_eq!(heading.id, "title");
    assert_eq!(heading.role(), Role::Heading);
}

#[test]
fn test_exact_text_requires_whole_match() {
    let root = sample();

    assert!(query::query(&root, &By::text("Contact")).is_none());
    assert!(query::query(&root, &By::text("  Contact   Form ")).is_some());
}

#[test]
fn test_input_values_are_not_text() {
    let root = sample();

    assert!(query::query(&root, &By::text("abcde")).is_none());
}

#[test]
fn test_text_match_display() {
    assert_eq!(TextMatch::exact("abc").to_string(), "\"abc\"");
    assert_eq!(TextMatch::pattern("first name").unwrap().to_string(), "/first name/i");
}

#[test]
fn test_invalid_pattern() {
    let result = By::text_pattern("(unclosed");
    assert!(matches!(result, Err(QueryError::InvalidPattern(_))));
}

// ============================================================================
// Labels, roles and test ids
// ============================================================================

#[test]
fn test_label_text_finds_input() {
    let root = sample();

    let input = query::get(&root, &By::label_text("first name*").unwrap()).unwrap();
    assert_eq!(input.id, "firstName");
    assert_eq!(input.value(), Some("abcde"));

    let message = query::get(&root, &By::label_text("message").unwrap()).unwrap();
    assert_eq!(message.id, "message");
}

#[test]
fn test_label_pointing_at_missing_input() {
    let root = Element::col().child(Element::label("Orphan", "nowhere"));

    assert!(query::query_all(&root, &By::label_text("orphan").unwrap()).is_empty());
}

#[test]
fn test_role_button() {
    let root = sample();

    let button = query::get(&root, &By::role(Role::Button)).unwrap();
    assert_eq!(button.own_text(), Some("Submit"));
    assert_eq!(query::query_all(&root, &By::role(Role::TextBox)).len(), 2);
}

#[test]
fn test_test_id_all() {
    let root = sample();

    let errors = query::get_all(&root, &By::test_id("error")).unwrap();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].own_text(), Some("firstName is too short"));
}

#[test]
fn test_get_errors() {
    let root = sample();

    match query::get(&root, &By::test_id("error")) {
        Err(QueryError::Multiple { count, .. }) => assert_eq!(count, 2),
        other => panic!("expected Multiple, got {other:?}"),
    }

    let missing = query::get(&root, &By::test_id("messageDisplay"));
    assert!(matches!(missing, Err(QueryError::NotFound(_))));
    assert!(query::get_all(&root, &By::test_id("messageDisplay")).is_err());
}

// ============================================================================
// Tree helpers
// ============================================================================

#[test]
fn test_find_element_and_text_content() {
    let root = sample();

    let found = formdom::find_element(&root, "submit").unwrap();
    assert_eq!(found.role(), Role::Button);

    let row = Element::row()
        .child(Element::text("First Name:"))
        .child(Element::text_input("ignored"))
        .child(Element::text("abcde"));
    assert_eq!(row.text_content(), "First Name:abcde");
}

#[test]
fn test_walk_visits_in_document_order() {
    let root = Element::col()
        .id("a")
        .child(Element::col().id("b").child(Element::text("c").id("c")))
        .child(Element::text("d").id("d"));

    let mut ids = Vec::new();
    formdom::walk(&root, &mut |el: &Element| ids.push(el.id.clone()));
    assert_eq!(ids, ["a", "b", "c", "d"]);
}

#[test]
fn test_builder_children_and_data() {
    let root = Element::box_()
        .data("section", "contact")
        .children([Element::text("a"), Element::text("b")])
        .child(Element::row().direction(formdom::Direction::Column).id("stacked"));

    assert_eq!(root.get_data("section").map(String::as_str), Some("contact"));
    assert_eq!(root.child_elements().len(), 3);
    assert_eq!(root.child_elements()[2].direction, formdom::Direction::Column);
    assert_eq!(root.text_content(), "ab");
}
