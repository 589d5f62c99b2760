//! A contact form with client-side validation.
//!
//! [`ContactForm`] owns the field values and decides, after every keystroke
//! and submit, which validation errors to show and which submitted values to
//! display. [`ContactForm::render`] projects that state into a
//! [`formdom::Element`] tree that can be queried or printed as text.

pub mod component;
pub mod config;
pub mod error;
pub mod event;
pub mod field;
pub mod state;
pub mod submitted;
pub mod validation;
pub mod view;

pub use component::{ContactForm, SubmitOutcome};
pub use config::FormConfig;
pub use error::Error;
pub use event::{parse_script, FormEvent};
pub use field::Field;
pub use state::FormState;
pub use submitted::SubmittedData;
pub use validation::{FieldError, Rule, ValidationErrors, Validator};
