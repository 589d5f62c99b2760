//! The contact form component.
//!
//! Holds the field values, the set of touched fields, the current errors and
//! the last accepted submit. Every change recomputes all errors from scratch;
//! only errors of touched fields are shown.

use std::collections::BTreeSet;

use formdom::Element;

use crate::config::FormConfig;
use crate::field::Field;
use crate::state::FormState;
use crate::submitted::SubmittedData;
use crate::validation::{ValidationErrors, Validator};
use crate::view;

/// Result of a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// All fields valid; a new snapshot was published.
    Accepted,
    /// Some fields invalid; nothing was published.
    Rejected { errors: usize },
}

#[derive(Debug, Clone)]
pub struct ContactForm {
    config: FormConfig,
    validator: Validator,
    state: FormState,
    touched: BTreeSet<Field>,
    errors: ValidationErrors,
    submitted: Option<SubmittedData>,
    submit_count: u32,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new(FormConfig::default())
    }
}

impl ContactForm {
    pub fn new(config: FormConfig) -> Self {
        let validator = Validator::contact(&config);
        Self::with_validator(config, validator)
    }

    /// Create a form with custom rules.
    pub fn with_validator(config: FormConfig, validator: Validator) -> Self {
        let state = FormState::new();
        let errors = validator.validate(&state);
        Self {
            config,
            validator,
            state,
            touched: BTreeSet::new(),
            errors,
            submitted: None,
            submit_count: 0,
        }
    }

    /// Replace the value of a field and revalidate.
    pub fn on_field_change(&mut self, field: Field, value: impl Into<String>) {
        self.state.set(field, value);
        self.touched.insert(field);
        self.revalidate();
        log::debug!(
            "{field} changed ({} chars), {} visible error(s)",
            self.state.get(field).chars().count(),
            self.visible_errors().len()
        );
    }

    /// Type `text` into a field one character at a time.
    pub fn on_type(&mut self, field: Field, text: &str) {
        for ch in text.chars() {
            let mut value = self.state.get(field).to_string();
            value.push(ch);
            self.on_field_change(field, value);
        }
    }

    pub fn on_clear(&mut self, field: Field) {
        self.on_field_change(field, String::new());
    }

    /// Validate every field and publish a snapshot if all pass.
    pub fn on_submit(&mut self) -> SubmitOutcome {
        self.submit_count += 1;
        self.touched.extend(Field::ALL);
        self.revalidate();

        if self.errors.is_empty() {
            self.submitted = Some(SubmittedData::from_state(&self.state));
            log::info!("Submit #{} accepted", self.submit_count);
            SubmitOutcome::Accepted
        } else {
            let errors = self.errors.len();
            log::warn!("Submit #{} rejected with {errors} error(s)", self.submit_count);
            SubmitOutcome::Rejected { errors }
        }
    }

    /// Clear all values, errors and the submitted snapshot.
    pub fn reset(&mut self) {
        self.state = FormState::new();
        self.touched.clear();
        self.submitted = None;
        self.submit_count = 0;
        self.revalidate();
        log::debug!("Form reset");
    }

    fn revalidate(&mut self) {
        self.errors = self.validator.validate(&self.state);
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Errors of every field, touched or not.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Errors of touched fields only.
    pub fn visible_errors(&self) -> ValidationErrors {
        self.errors.filtered(|field| self.touched.contains(&field))
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    pub fn submitted(&self) -> Option<&SubmittedData> {
        self.submitted.as_ref()
    }

    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    /// Project the current state into a document tree.
    pub fn render(&self) -> Element {
        view::render(
            &self.config,
            &self.state,
            &self.visible_errors(),
            self.submitted.as_ref(),
        )
    }
}
