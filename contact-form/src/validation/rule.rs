use regex::Regex;

use crate::field::Field;

/// A single check applied to a field value.
///
/// Every rule except [`Rule::Required`] accepts an empty value, so emptiness
/// is only ever reported by the required rule.
#[derive(Debug, Clone)]
pub enum Rule {
    /// Non-empty after trimming whitespace.
    Required,
    /// At least this many characters.
    MinLength(usize),
    /// At most this many characters.
    MaxLength(usize),
    /// A syntactically valid email address.
    Email,
    /// Must match the pattern. `{field}` in the message is replaced by the
    /// field's wire name.
    Pattern { regex: Regex, message: String },
}

impl Rule {
    /// Check `value`, returning the message to display on failure.
    pub fn check(&self, field: Field, value: &str) -> Result<(), String> {
        let passed = match self {
            Self::Required => !value.trim().is_empty(),
            _ if value.is_empty() => true,
            Self::MinLength(min) => value.chars().count() >= *min,
            Self::MaxLength(max) => value.chars().count() <= *max,
            Self::Email => email_address::EmailAddress::is_valid(value),
            Self::Pattern { regex, .. } => regex.is_match(value),
        };

        if passed {
            Ok(())
        } else {
            Err(self.message(field))
        }
    }

    fn message(&self, field: Field) -> String {
        match self {
            Self::Required => format!("{field} is a required field"),
            Self::MinLength(min) => format!("{field} must have at least {min} characters"),
            Self::MaxLength(max) => format!("{field} must have at most {max} characters"),
            Self::Email => format!("{field} must be a valid email address"),
            Self::Pattern { message, .. } => message.replace("{field}", field.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        assert!(Rule::Required.check(Field::LastName, "smith").is_ok());
        assert_eq!(
            Rule::Required.check(Field::LastName, "").unwrap_err(),
            "lastName is a required field"
        );
        assert!(Rule::Required.check(Field::LastName, "   ").is_err());
    }

    #[test]
    fn test_min_length_counts_characters() {
        let rule = Rule::MinLength(5);
        assert!(rule.check(Field::FirstName, "abcde").is_ok());
        assert!(rule.check(Field::FirstName, "ééééé").is_ok());
        assert_eq!(
            rule.check(Field::FirstName, "aaa").unwrap_err(),
            "firstName must have at least 5 characters"
        );
    }

    #[test]
    fn test_optional_rules_accept_empty() {
        assert!(Rule::MinLength(5).check(Field::FirstName, "").is_ok());
        assert!(Rule::Email.check(Field::Email, "").is_ok());
    }

    #[test]
    fn test_email() {
        assert!(Rule::Email.check(Field::Email, "test@test.com").is_ok());
        assert_eq!(
            Rule::Email.check(Field::Email, "hqhqhqhqik").unwrap_err(),
            "email must be a valid email address"
        );
        assert!(Rule::Email.check(Field::Email, "a@").is_err());
    }

    #[test]
    fn test_pattern_message_substitutes_field() {
        let rule = Rule::Pattern {
            regex: Regex::new("^[a-z]+$").unwrap(),
            message: "{field} must be lowercase letters".into(),
        };
        assert!(rule.check(Field::LastName, "smith").is_ok());
        assert_eq!(
            rule.check(Field::LastName, "Smith").unwrap_err(),
            "lastName must be lowercase letters"
        );
    }
}
