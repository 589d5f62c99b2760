#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<super::Element>),
    /// Editable value of an input. Never part of the element's text content.
    Input {
        value: String,
        placeholder: Option<String>,
    },
}
