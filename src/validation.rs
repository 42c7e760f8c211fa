//! Required-field checks run before a form is handed to its submit handler

use serde::Serialize;

pub const REQUIRED_MESSAGE: &str = "This field is required";

/// A form field as seen at submit time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field<'a> {
    pub name: &'a str,
    pub value: &'a str,
    pub required: bool,
}

impl<'a> Field<'a> {
    pub fn required(name: &'a str, value: &'a str) -> Self {
        Self { name, value, required: true }
    }

    pub fn optional(name: &'a str, value: &'a str) -> Self {
        Self { name, value, required: false }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: &'static str,
}

/// Errors for every required field left blank (whitespace counts as blank),
/// in field order. An empty result means the form may be submitted.
pub fn validate_required(fields: &[Field<'_>]) -> Vec<FieldError> {
    fields
        .iter()
        .filter(|f| f.required && f.value.trim().is_empty())
        .map(|f| FieldError {
            field: f.name.to_string(),
            message: REQUIRED_MESSAGE,
        })
        .collect()
}

pub fn is_valid(fields: &[Field<'_>]) -> bool {
    validate_required(fields).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_required_fields() {
        let fields = [
            Field::required("policy-number", "PN-1001"),
            Field::required("incident-date", "   "),
            Field::optional("notes", ""),
            Field::required("description", ""),
        ];
        let errors = validate_required(&fields);

        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "incident-date");
        assert_eq!(errors[1].field, "description");
        assert_eq!(errors[0].message, REQUIRED_MESSAGE);
        assert!(!is_valid(&fields));
    }

    #[test]
    fn test_all_filled() {
        let fields = [Field::required("name", "Jane"), Field::optional("phone", "")];
        assert!(is_valid(&fields));
    }
}
