//! Identifier grammar checks for schema-bound names.
//!
//! The resource management service only accepts object type and attribute
//! names drawn from a restricted identifier grammar: an ASCII letter
//! followed by ASCII letters or digits. Whether a name actually exists in
//! the live schema is the service's business; this module enforces the
//! lexical grammar, which is all that can be checked before a request is
//! built.

use thiserror::Error;

/// Errors raised when a name falls outside the schema identifier grammar.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NameValidationError {
    /// The name is empty.
    #[error("schema identifier is empty")]
    Empty,

    /// The name does not start with an ASCII letter.
    #[error("schema identifier '{name}' must start with an ASCII letter")]
    InvalidLeadingCharacter {
        /// The rejected name.
        name: String,
    },

    /// The name contains a character outside the identifier grammar.
    #[error("schema identifier '{name}' contains invalid character '{character}'")]
    InvalidCharacter {
        /// The rejected name.
        name: String,
        /// The first offending character.
        character: char,
    },
}

impl NameValidationError {
    /// Creates an invalid leading character error.
    pub fn invalid_leading_character(name: impl Into<String>) -> Self {
        NameValidationError::InvalidLeadingCharacter { name: name.into() }
    }

    /// Creates an invalid character error.
    pub fn invalid_character(name: impl Into<String>, character: char) -> Self {
        NameValidationError::InvalidCharacter {
            name: name.into(),
            character,
        }
    }
}

/// Checks a name against the schema identifier grammar.
///
/// Object type and attribute names share the same grammar: an ASCII
/// letter followed by any number of ASCII letters or digits.
///
/// # Example
/// ```
/// use ldap_xpath_rs::schema::validate_object_type_name;
///
/// assert!(validate_object_type_name("ExplicitMember").is_ok());
/// assert!(validate_object_type_name("display-name").is_err());
/// ```
pub fn validate_object_type_name(name: &str) -> Result<(), NameValidationError> {
    let mut chars = name.chars();

    match chars.next() {
        None => return Err(NameValidationError::Empty),
        Some(first) if !first.is_ascii_alphabetic() => {
            return Err(NameValidationError::invalid_leading_character(name));
        }
        Some(_) => {}
    }

    if let Some(character) = chars.find(|c| !c.is_ascii_alphanumeric()) {
        return Err(NameValidationError::invalid_character(name, character));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_plain_names() {
        assert!(validate_object_type_name("Person").is_ok());
        assert!(validate_object_type_name("ExplicitMember").is_ok());
        assert!(validate_object_type_name("a").is_ok());
        assert!(validate_object_type_name("Attr2Value").is_ok());
    }

    #[test]
    fn test_validate_empty_name() {
        assert_eq!(
            validate_object_type_name(""),
            Err(NameValidationError::Empty)
        );
    }

    #[test]
    fn test_validate_leading_digit() {
        assert_eq!(
            validate_object_type_name("2fast"),
            Err(NameValidationError::InvalidLeadingCharacter {
                name: "2fast".to_string()
            })
        );
    }

    #[test]
    fn test_validate_leading_underscore() {
        assert_eq!(
            validate_object_type_name("_hidden"),
            Err(NameValidationError::InvalidLeadingCharacter {
                name: "_hidden".to_string()
            })
        );
    }

    #[test]
    fn test_validate_invalid_character_reports_first_offender() {
        assert_eq!(
            validate_object_type_name("display-name"),
            Err(NameValidationError::InvalidCharacter {
                name: "display-name".to_string(),
                character: '-'
            })
        );
    }

    #[test]
    fn test_validate_rejects_whitespace() {
        assert_eq!(
            validate_object_type_name("Account Name"),
            Err(NameValidationError::InvalidCharacter {
                name: "Account Name".to_string(),
                character: ' '
            })
        );
    }

    #[test]
    fn test_validate_rejects_non_ascii_letter() {
        assert_eq!(
            validate_object_type_name("Persön"),
            Err(NameValidationError::InvalidCharacter {
                name: "Persön".to_string(),
                character: 'ö'
            })
        );
    }
}
