//! Queries for locating elements the way a user would: by visible text, by
//! label, by role, or by a test marker.
//!
//! Every query comes in four forms:
//! - [`query_all`]: all matches, possibly none.
//! - [`query`]: the first match, if any.
//! - [`get`]: exactly one match, otherwise an error.
//! - [`get_all`]: at least one match, otherwise an error.
//!
//! # Example
//!
//! ```ignore
//! let heading = query::get(&root, &By::text_pattern("contact form")?)?;
//! let errors = query::query_all(&root, &By::test_id("error"));
//! ```

use std::fmt;

use regex::{Regex, RegexBuilder};
use thiserror::Error;

use crate::element::{find_element, walk, Element, Kind, Role};
use crate::text::normalize_whitespace;

/// Errors produced by the `get` family of queries.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("unable to find an element {0}")]
    NotFound(String),
    #[error("found {count} elements {description}, expected exactly one")]
    Multiple { description: String, count: usize },
    #[error("invalid text pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// How candidate text is compared.
#[derive(Debug, Clone)]
pub enum TextMatch {
    /// The whole normalized text must equal the string.
    Exact(String),
    /// The pattern must match somewhere in the normalized text (case-insensitive).
    Pattern(Regex),
}

impl TextMatch {
    pub fn exact(text: impl Into<String>) -> Self {
        Self::Exact(text.into())
    }

    pub fn pattern(pattern: &str) -> Result<Self, QueryError> {
        let regex = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        Ok(Self::Pattern(regex))
    }

    pub fn matches(&self, text: &str) -> bool {
        let text = normalize_whitespace(text);
        match self {
            Self::Exact(expected) => text == normalize_whitespace(expected),
            Self::Pattern(regex) => regex.is_match(&text),
        }
    }
}

impl From<&str> for TextMatch {
    fn from(text: &str) -> Self {
        Self::exact(text)
    }
}

impl fmt::Display for TextMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(text) => write!(f, "{text:?}"),
            Self::Pattern(regex) => write!(f, "/{}/i", regex.as_str()),
        }
    }
}

/// What to look for.
#[derive(Debug, Clone)]
pub enum By {
    /// Elements holding text directly (headings, labels, buttons, text).
    Text(TextMatch),
    /// Inputs captioned by a matching label.
    LabelText(TextMatch),
    Role(Role),
    TestId(String),
}

impl By {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(TextMatch::exact(text))
    }

    pub fn text_pattern(pattern: &str) -> Result<Self, QueryError> {
        Ok(Self::Text(TextMatch::pattern(pattern)?))
    }

    pub fn label_text(pattern: &str) -> Result<Self, QueryError> {
        Ok(Self::LabelText(TextMatch::pattern(pattern)?))
    }

    pub fn role(role: Role) -> Self {
        Self::Role(role)
    }

    pub fn test_id(test_id: impl Into<String>) -> Self {
        Self::TestId(test_id.into())
    }
}

impl fmt::Display for By {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "with text {text}"),
            Self::LabelText(text) => write!(f, "with label {text}"),
            Self::Role(role) => write!(f, "with role {role:?}"),
            Self::TestId(id) => write!(f, "with test id {id:?}"),
        }
    }
}

/// All elements matching `by`, in document order.
pub fn query_all<'a>(root: &'a Element, by: &By) -> Vec<&'a Element> {
    let mut found = Vec::new();

    match by {
        By::Text(text) => walk(root, &mut |el: &'a Element| {
            if el.own_text().is_some_and(|t| text.matches(t)) {
                found.push(el);
            }
        }),
        By::LabelText(text) => walk(root, &mut |el: &'a Element| {
            if let Kind::Label { for_id } = &el.kind {
                if !el.own_text().is_some_and(|t| text.matches(t)) {
                    return;
                }
                match find_element(root, for_id) {
                    Some(input) if input.role() == Role::TextBox => found.push(input),
                    Some(_) => log::warn!("Label {} points at non-input {for_id}", el.id),
                    None => log::warn!("Label {} points at missing element {for_id}", el.id),
                }
            }
        }),
        By::Role(role) => walk(root, &mut |el: &'a Element| {
            if el.role() == *role {
                found.push(el);
            }
        }),
        By::TestId(id) => walk(root, &mut |el: &'a Element| {
            if el.test_id.as_deref() == Some(id.as_str()) {
                found.push(el);
            }
        }),
    }

    found
}

/// First element matching `by`.
pub fn query<'a>(root: &'a Element, by: &By) -> Option<&'a Element> {
    query_all(root, by).into_iter().next()
}

/// The single element matching `by`.
pub fn get<'a>(root: &'a Element, by: &By) -> Result<&'a Element, QueryError> {
    let mut found = query_all(root, by);
    match found.len() {
        0 => Err(QueryError::NotFound(by.to_string())),
        1 => Ok(found.remove(0)),
        count => Err(QueryError::Multiple {
            description: by.to_string(),
            count,
        }),
    }
}

/// All elements matching `by`; at least one is required.
pub fn get_all<'a>(root: &'a Element, by: &By) -> Result<Vec<&'a Element>, QueryError> {
    let found = query_all(root, by);
    if found.is_empty() {
        return Err(QueryError::NotFound(by.to_string()));
    }
    Ok(found)
}
