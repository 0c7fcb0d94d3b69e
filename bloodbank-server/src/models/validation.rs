//! Presence validation for write payloads
//!
//! Every required field is checked the same way, by JavaScript truthiness:
//! absent, `null`, `""`, `0` and `false` count as missing. Any other value is
//! kept exactly as the client sent it, so a phone number sent as a JSON
//! number is stored as a number. Whitespace-only strings are accepted.

use std::fmt;

use serde_json::Value;

/// Validation error for write payloads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more required fields were not supplied
    MissingFields { fields: Vec<&'static str> },
}

impl ValidationError {
    /// Names of the fields that failed the presence check.
    pub fn fields(&self) -> &[&'static str] {
        match self {
            Self::MissingFields { fields } => fields,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFields { .. } => write!(f, "Missing required fields"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Collects required fields and remembers which ones were missing.
///
/// ```
/// use bloodbank_server::models::RequiredFields;
///
/// let mut required = RequiredFields::default();
/// let name = required.take("name", Some("Asha".into()));
/// let contact = required.take("contact", None);
/// assert_eq!(name, "Asha");
/// assert!(contact.is_null());
/// assert_eq!(required.finish().unwrap_err().fields(), ["contact"]);
/// ```
#[derive(Debug, Default)]
pub struct RequiredFields {
    missing: Vec<&'static str>,
}

impl RequiredFields {
    /// Take a field value, recording it as missing when it is not truthy.
    pub fn take(&mut self, field: &'static str, value: Option<Value>) -> Value {
        match value.filter(is_truthy) {
            Some(v) => v,
            None => {
                self.missing.push(field);
                Value::Null
            }
        }
    }

    /// Fail if any field taken so far was missing.
    pub fn finish(self) -> Result<(), ValidationError> {
        if self.missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::MissingFields {
                fields: self.missing,
            })
        }
    }
}

/// JavaScript truthiness of a JSON value. Empty arrays and objects are truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn error_display() {
        let err = ValidationError::MissingFields {
            fields: vec!["name", "contact"],
        };
        assert_eq!(err.to_string(), "Missing required fields");
        assert_eq!(err.fields(), ["name", "contact"]);
    }

    #[test]
    fn empty_string_counts_as_missing() {
        let mut required = RequiredFields::default();
        required.take("district", Some(json!("")));
        let err = required.finish().unwrap_err();
        assert_eq!(err.fields(), ["district"]);
    }

    #[test]
    fn falsy_values_count_as_missing() {
        for value in [json!(null), json!(0), json!(0.0), json!(-0.0), json!(false), json!("")] {
            assert!(!is_truthy(&value), "{value} should be missing");
        }
    }

    #[test]
    fn other_values_are_kept_as_sent() {
        let mut required = RequiredFields::default();
        assert_eq!(required.take("contact", Some(json!(711111111))), json!(711111111));
        assert_eq!(required.take("name", Some(json!(true))), json!(true));
        assert_eq!(required.take("district", Some(json!([]))), json!([]));
        assert_eq!(required.take("hospital", Some(json!(-1.5))), json!(-1.5));
        assert!(required.finish().is_ok());
    }

    #[test]
    fn whitespace_is_present() {
        let mut required = RequiredFields::default();
        assert_eq!(required.take("district", Some(json!("  "))), "  ");
        assert!(required.finish().is_ok());
    }

    #[test]
    fn missing_fields_keep_order() {
        let mut required = RequiredFields::default();
        required.take("a", None);
        required.take("b", Some(json!("x")));
        required.take("c", None);
        assert_eq!(required.finish().unwrap_err().fields(), ["a", "c"]);
    }
}
