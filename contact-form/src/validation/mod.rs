//! Field validation for the contact form.
//!
//! Rules are attached to fields through a fluent builder and evaluated as a
//! pure function of the form state. Each field reports at most one error: the
//! first rule that fails, in the order the rules were added.
//!
//! # Example
//!
//! ```ignore
//! use contact_form::validation::Validator;
//!
//! let validator = Validator::new()
//!     .field(Field::FirstName)
//!         .required()
//!         .min_length(5)
//!     .field(Field::Email)
//!         .required()
//!         .email()
//!     .build();
//!
//! let errors = validator.validate(&state);
//! if errors.is_empty() {
//!     // Accept the submit
//! }
//! ```

mod result;
mod rule;
mod validator;

pub use result::{FieldError, ValidationErrors};
pub use rule::Rule;
pub use validator::{FieldBuilder, Validator};
