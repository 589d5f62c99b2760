use std::collections::BTreeMap;

use crate::field::Field;

/// A single field's validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

/// Errors for every failing field, at most one per field.
///
/// Iterates in field display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<Field, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error, keeping an existing one for the same field.
    pub fn insert(&mut self, error: FieldError) {
        self.errors.entry(error.field).or_insert(error.message);
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    /// Only the errors for fields accepted by `keep`.
    pub fn filtered(&self, mut keep: impl FnMut(Field) -> bool) -> Self {
        Self {
            errors: self
                .errors
                .iter()
                .filter(|(field, _)| keep(**field))
                .map(|(field, msg)| (*field, msg.clone()))
                .collect(),
        }
    }

    pub fn first(&self) -> Option<FieldError> {
        self.errors.iter().next().map(|(field, message)| FieldError {
            field: *field,
            message: message.clone(),
        })
    }
}

impl FromIterator<FieldError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        let mut errors = Self::new();
        for error in iter {
            errors.insert(error);
        }
        errors
    }
}
