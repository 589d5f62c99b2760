use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// What an element is, independent of its content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Kind {
    Box,
    Heading(u8),
    /// Caption for the input whose ID is `for_id`.
    Label {
        for_id: String,
    },
    TextInput,
    TextArea,
    Button,
    Text,
}

/// Accessible role, derived from the element kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Generic,
    Heading,
    Label,
    TextBox,
    Button,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Column,
    Row,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    // Identity
    pub id: String,
    pub kind: Kind,
    /// Stable marker for tests, independent of the generated ID.
    pub test_id: Option<String>,

    // Content
    pub content: Content,

    // Layout
    pub direction: Direction,

    // Custom data storage
    pub data: HashMap<String, String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            kind: Kind::Box,
            test_id: None,
            content: Content::None,
            direction: Direction::Column,
            data: HashMap::new(),
        }
    }
}

impl Element {
    pub fn box_() -> Self {
        Self {
            id: generate_id("box"),
            ..Default::default()
        }
    }

    pub fn col() -> Self {
        Self {
            id: generate_id("col"),
            direction: Direction::Column,
            ..Default::default()
        }
    }

    pub fn row() -> Self {
        Self {
            id: generate_id("row"),
            direction: Direction::Row,
            ..Default::default()
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            kind: Kind::Text,
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    /// Create a heading. Level 1 is the most prominent.
    pub fn heading(level: u8, content: impl Into<String>) -> Self {
        Self {
            id: generate_id("heading"),
            kind: Kind::Heading(level.max(1)),
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    /// Create a label captioning the input with ID `for_id`.
    pub fn label(content: impl Into<String>, for_id: impl Into<String>) -> Self {
        Self {
            id: generate_id("label"),
            kind: Kind::Label {
                for_id: for_id.into(),
            },
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    /// Create a single-line text input element.
    pub fn text_input(value: impl Into<String>) -> Self {
        Self {
            id: generate_id("input"),
            kind: Kind::TextInput,
            content: Content::Input {
                value: value.into(),
                placeholder: None,
            },
            ..Default::default()
        }
    }

    /// Create a multi-line text input element.
    pub fn text_area(value: impl Into<String>) -> Self {
        Self {
            id: generate_id("textarea"),
            kind: Kind::TextArea,
            content: Content::Input {
                value: value.into(),
                placeholder: None,
            },
            ..Default::default()
        }
    }

    pub fn button(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("button"),
            kind: Kind::Button,
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn test_id(mut self, test_id: impl Into<String>) -> Self {
        self.test_id = Some(test_id.into());
        self
    }

    // Layout
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Set the placeholder text for an input.
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        if let Content::Input { placeholder, .. } = &mut self.content {
            *placeholder = Some(text.into());
        }
        self
    }

    // Custom data
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn get_data(&self, key: &str) -> Option<&String> {
        self.data.get(key)
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    // Inspection

    pub fn role(&self) -> Role {
        match self.kind {
            Kind::Box | Kind::Text => Role::Generic,
            Kind::Heading(_) => Role::Heading,
            Kind::Label { .. } => Role::Label,
            Kind::TextInput | Kind::TextArea => Role::TextBox,
            Kind::Button => Role::Button,
        }
    }

    /// Text held directly by this element, if any.
    pub fn own_text(&self) -> Option<&str> {
        match &self.content {
            Content::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Concatenated text of this element and its descendants.
    /// Input values are excluded.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        super::walk(self, &mut |el: &Element| {
            if let Some(text) = el.own_text() {
                out.push_str(text);
            }
        });
        out
    }

    /// Current value of an input element.
    pub fn value(&self) -> Option<&str> {
        match &self.content {
            Content::Input { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }
}
