//! Validator builder for fluent validation API.

use regex::Regex;

use super::result::{FieldError, ValidationErrors};
use super::rule::Rule;
use crate::config::FormConfig;
use crate::field::Field;
use crate::state::FormState;

/// Rules attached to one field.
#[derive(Debug, Clone)]
struct FieldEntry {
    field: Field,
    rules: Vec<Rule>,
}

/// A set of per-field rules, evaluated against a [`FormState`].
///
/// # Example
///
/// ```ignore
/// let validator = Validator::new()
///     .field(Field::LastName)
///         .required()
///         .min_length(5)
///     .build();
///
/// assert!(validator.validate(&state).contains(Field::LastName));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Validator {
    fields: Vec<FieldEntry>,
}

impl Validator {
    /// Create a validator with no rules.
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// The contact form's rules: first and last name required with a
    /// minimum length, email required and well-formed, message free.
    pub fn contact(config: &FormConfig) -> Self {
        Self::new()
            .field(Field::FirstName)
            .required()
            .min_length(config.first_name_min_length)
            .field(Field::LastName)
            .required()
            .min_length(config.last_name_min_length)
            .field(Field::Email)
            .required()
            .email()
            .build()
    }

    /// Start adding rules for a field.
    pub fn field(self, field: Field) -> FieldBuilder {
        FieldBuilder {
            validator: self,
            field,
            rules: Vec::new(),
        }
    }

    /// Validate every field with rules.
    pub fn validate(&self, state: &FormState) -> ValidationErrors {
        let errors: ValidationErrors = self
            .fields
            .iter()
            .filter_map(|entry| check_entry(entry, state))
            .collect();

        log::debug!("Validated form: {} error(s)", errors.len());
        errors
    }

    /// Validate a single field. Fields without rules always pass.
    pub fn validate_field(&self, field: Field, state: &FormState) -> Option<FieldError> {
        self.fields
            .iter()
            .find(|entry| entry.field == field)
            .and_then(|entry| check_entry(entry, state))
    }

    /// Fields that have at least one rule.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.fields.iter().map(|entry| entry.field)
    }
}

/// First failing rule of the entry, if any.
fn check_entry(entry: &FieldEntry, state: &FormState) -> Option<FieldError> {
    let value = state.get(entry.field);
    entry
        .rules
        .iter()
        .find_map(|rule| rule.check(entry.field, value).err())
        .map(|message| FieldError {
            field: entry.field,
            message,
        })
}

/// Builder for adding validation rules to a single field.
pub struct FieldBuilder {
    validator: Validator,
    field: Field,
    rules: Vec<Rule>,
}

impl FieldBuilder {
    /// Add a rule.
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Require the field to be non-empty.
    pub fn required(self) -> Self {
        self.rule(Rule::Required)
    }

    /// Require minimum length (in characters).
    pub fn min_length(self, min: usize) -> Self {
        self.rule(Rule::MinLength(min))
    }

    /// Require maximum length (in characters).
    pub fn max_length(self, max: usize) -> Self {
        self.rule(Rule::MaxLength(max))
    }

    /// Require a valid email address.
    pub fn email(self) -> Self {
        self.rule(Rule::Email)
    }

    /// Require the value to match a regex pattern.
    pub fn pattern(self, regex: Regex, message: impl Into<String>) -> Self {
        self.rule(Rule::Pattern {
            regex,
            message: message.into(),
        })
    }

    /// Continue to the next field.
    pub fn field(self, field: Field) -> FieldBuilder {
        self.finalize().field(field)
    }

    /// Finish building.
    pub fn build(self) -> Validator {
        self.finalize()
    }

    /// Finalize this field and return the validator.
    fn finalize(self) -> Validator {
        let mut validator = self.validator;

        if let Some(entry) = validator.fields.iter_mut().find(|e| e.field == self.field) {
            entry.rules.extend(self.rules);
        } else if !self.rules.is_empty() {
            validator.fields.push(FieldEntry {
                field: self.field,
                rules: self.rules,
            });
        }

        validator
    }
}
