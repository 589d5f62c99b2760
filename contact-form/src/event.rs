//! User events and the line-based script format used to replay them.
//!
//! ```text
//! # comments and blank lines are skipped
//! type firstName abcde
//! set email test@test.com
//! clear message
//! submit
//! reset
//! ```

use std::str::FromStr;

use crate::component::ContactForm;
use crate::error::Error;
use crate::field::Field;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// Keystrokes appended to the field, one change per character.
    Type { field: Field, text: String },
    /// A single change replacing the field value.
    Change { field: Field, value: String },
    Clear { field: Field },
    Submit,
    Reset,
}

impl FormEvent {
    pub fn apply(&self, form: &mut ContactForm) {
        match self {
            Self::Type { field, text } => form.on_type(*field, text),
            Self::Change { field, value } => form.on_field_change(*field, value.as_str()),
            Self::Clear { field } => form.on_clear(*field),
            Self::Submit => {
                form.on_submit();
            }
            Self::Reset => form.reset(),
        }
    }
}

impl FromStr for FormEvent {
    type Err = String;

    /// Parse one script line. Text after the field name is taken verbatim,
    /// minus the single separating space.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_start();
        let (command, rest) = split_word(line);

        match command {
            "submit" | "reset" if !rest.trim().is_empty() => {
                Err(format!("'{command}' takes no arguments"))
            }
            "submit" => Ok(Self::Submit),
            "reset" => Ok(Self::Reset),
            "type" | "set" | "clear" => {
                let (name, text) = split_word(rest);
                if name.is_empty() {
                    return Err(format!("'{command}' needs a field name"));
                }
                let field = name.parse::<Field>().map_err(|e| e.to_string())?;

                match command {
                    "type" if text.is_empty() => Err("'type' needs text to type".to_string()),
                    "type" => Ok(Self::Type {
                        field,
                        text: text.to_string(),
                    }),
                    "set" => Ok(Self::Change {
                        field,
                        value: text.to_string(),
                    }),
                    _ if !text.trim().is_empty() => Err("'clear' takes only a field name".to_string()),
                    _ => Ok(Self::Clear { field }),
                }
            }
            "" => Err("empty event".to_string()),
            other => Err(format!("unknown command '{other}'")),
        }
    }
}

/// Split off the first space-delimited word.
fn split_word(s: &str) -> (&str, &str) {
    match s.split_once(' ') {
        Some((word, rest)) => (word, rest),
        None => (s.trim_end(), ""),
    }
}

/// Parse a whole script, skipping blank lines and `#` comments.
pub fn parse_script(script: &str) -> Result<Vec<FormEvent>, Error> {
    let mut events = Vec::new();

    for (index, line) in script.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let event = line.parse::<FormEvent>().map_err(|reason| Error::Script {
            line: index + 1,
            reason,
        })?;
        events.push(event);
    }

    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_type_keeps_spaces() {
        let event: FormEvent = "type message testing the message field".parse().unwrap();
        assert_eq!(
            event,
            FormEvent::Type {
                field: Field::Message,
                text: "testing the message field".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_set_without_value_is_empty() {
        let event: FormEvent = "set email".parse().unwrap();
        assert_eq!(
            event,
            FormEvent::Change {
                field: Field::Email,
                value: String::new(),
            }
        );
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!("submit".parse::<FormEvent>().unwrap(), FormEvent::Submit);
        assert_eq!("  reset".parse::<FormEvent>().unwrap(), FormEvent::Reset);
        assert_eq!(
            "clear lastName".parse::<FormEvent>().unwrap(),
            FormEvent::Clear {
                field: Field::LastName
            }
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "jump firstName".parse::<FormEvent>().unwrap_err(),
            "unknown command 'jump'"
        );
        assert_eq!(
            "type nickname bob".parse::<FormEvent>().unwrap_err(),
            "unknown field 'nickname'"
        );
        assert_eq!(
            "type firstName".parse::<FormEvent>().unwrap_err(),
            "'type' needs text to type"
        );
        assert_eq!(
            "submit now".parse::<FormEvent>().unwrap_err(),
            "'submit' takes no arguments"
        );
        assert!("clear".parse::<FormEvent>().is_err());
    }

    #[test]
    fn test_parse_script_reports_line_numbers() {
        let script = "# fill in\ntype firstName abcde\n\nbogus\n";
        let err = parse_script(script).unwrap_err();
        match err {
            Error::Script { line, reason } => {
                assert_eq!(line, 4);
                assert_eq!(reason, "unknown command 'bogus'");
            }
            other => panic!("expected script error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_script_skips_comments() {
        let events = parse_script("# hi\n\ntype firstName abc\nsubmit\n").unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[1], FormEvent::Submit);
    }
}
