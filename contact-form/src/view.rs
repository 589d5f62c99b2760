//! Pure projection of the form into a `formdom` tree.

use formdom::Element;

use crate::config::FormConfig;
use crate::field::Field;
use crate::state::FormState;
use crate::submitted::SubmittedData;
use crate::validation::ValidationErrors;

/// Test marker carried by every displayed validation error.
pub const ERROR_TEST_ID: &str = "error";

/// Test marker of the submitted message, present only when one was given.
pub const MESSAGE_DISPLAY_TEST_ID: &str = "messageDisplay";

pub fn render(
    config: &FormConfig,
    state: &FormState,
    errors: &ValidationErrors,
    submitted: Option<&SubmittedData>,
) -> Element {
    let mut root = Element::col()
        .id("contact-form")
        .child(Element::heading(1, config.title.as_str()).id("contact-form-title"));

    for field in Field::ALL {
        root = root.child(field_group(field, state.get(field), errors.get(field)));
    }

    root = root.child(Element::button(config.submit_label.as_str()).id("submit"));

    if let Some(data) = submitted {
        root = root.child(submitted_display(data));
    }

    root
}

fn field_group(field: Field, value: &str, error: Option<&str>) -> Element {
    let input = match field {
        Field::Message => Element::text_area(value),
        _ => Element::text_input(value),
    };

    let mut group = Element::col().id(format!("{field}-group")).child(
        Element::row()
            .child(Element::label(field.label(), field.name()).id(format!("{field}-label")))
            .child(input.id(field.name())),
    );

    if let Some(message) = error {
        group = group.child(
            Element::text(message)
                .id(format!("{field}-error"))
                .test_id(ERROR_TEST_ID),
        );
    }

    group
}

fn submitted_display(data: &SubmittedData) -> Element {
    let mut display = Element::col()
        .id("submitted")
        .test_id("displayComponent")
        .child(Element::heading(2, "You Submitted:"))
        .child(display_row("First Name:", &data.first_name, "firstnameDisplay"))
        .child(display_row("Last Name:", &data.last_name, "lastnameDisplay"))
        .child(display_row("Email:", &data.email, "emailDisplay"));

    if let Some(message) = &data.message {
        display = display.child(display_row("Message:", message, MESSAGE_DISPLAY_TEST_ID));
    }

    display
}

fn display_row(caption: &str, value: &str, test_id: &str) -> Element {
    Element::row()
        .test_id(test_id)
        .child(Element::text(caption))
        .child(Element::text(value))
}
