use crate::models::PassengerRecord;
use chrono::NaiveDate;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-zÁÉÍÓÚÜÑáéíóúüñ ]+$").expect("valid pattern"));
static DNI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{7,8}$").expect("valid pattern"));
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassengerField {
    FirstName,
    LastName,
    Nationality,
    DocumentNumber,
    BirthDate,
    Email,
}

impl fmt::Display for PassengerField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PassengerField::FirstName => "first name",
            PassengerField::LastName => "last name",
            PassengerField::Nationality => "nationality",
            PassengerField::DocumentNumber => "document number",
            PassengerField::BirthDate => "birth date",
            PassengerField::Email => "email",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: PassengerField,
    pub message: String,
}

impl FieldError {
    fn new(field: PassengerField, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }
}

fn check_name(value: &str, field: PassengerField, errors: &mut Vec<FieldError>) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, "required"));
    } else if !NAME_RE.is_match(value) {
        errors.push(FieldError::new(field, "letters and spaces only"));
    }
}

/// Validate one passenger record. Every rule runs; errors are collected,
/// not short-circuited, so the form can mark all offending fields at once.
pub fn validate_passenger(record: &PassengerRecord, today: NaiveDate) -> Vec<FieldError> {
    let mut errors = Vec::new();

    check_name(&record.first_name, PassengerField::FirstName, &mut errors);
    check_name(&record.last_name, PassengerField::LastName, &mut errors);
    check_name(&record.nationality, PassengerField::Nationality, &mut errors);

    if !DNI_RE.is_match(&record.document_number.0) {
        errors.push(FieldError::new(
            PassengerField::DocumentNumber,
            "must be 7 or 8 digits",
        ));
    }

    match record.birth_date {
        None => errors.push(FieldError::new(PassengerField::BirthDate, "required")),
        Some(birth_date) if birth_date > today => {
            errors.push(FieldError::new(
                PassengerField::BirthDate,
                "cannot be in the future",
            ));
        }
        Some(_) => {}
    }

    if !EMAIL_RE.is_match(&record.email) {
        errors.push(FieldError::new(PassengerField::Email, "invalid email"));
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use rumbo_shared::pii::Masked;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 20).unwrap()
    }

    fn valid_record() -> PassengerRecord {
        PassengerRecord {
            first_name: "José María".to_string(),
            last_name: "Gutiérrez".to_string(),
            nationality: "Argentina".to_string(),
            document_number: Masked("12345678".to_string()),
            birth_date: NaiveDate::from_ymd_opt(1991, 3, 14),
            email: "jose@example.com".to_string(),
        }
    }

    fn has_error(errors: &[FieldError], field: PassengerField) -> bool {
        errors.iter().any(|e| e.field == field)
    }

    #[test]
    fn test_valid_record_passes() {
        assert!(validate_passenger(&valid_record(), today()).is_empty());
    }

    #[test]
    fn test_name_rejects_digits() {
        let mut record = valid_record();
        record.first_name = "Jo3".to_string();
        let errors = validate_passenger(&record, today());
        assert!(has_error(&errors, PassengerField::FirstName));
    }

    #[test]
    fn test_name_allows_accents_and_spaces() {
        let mut record = valid_record();
        record.first_name = "José María".to_string();
        record.last_name = "Ñandú".to_string();
        assert!(validate_passenger(&record, today()).is_empty());
    }

    #[test]
    fn test_dni_length_bounds() {
        let mut record = valid_record();

        record.document_number = Masked("1234".to_string());
        assert!(has_error(&validate_passenger(&record, today()), PassengerField::DocumentNumber));

        record.document_number = Masked("1234567".to_string());
        assert!(!has_error(&validate_passenger(&record, today()), PassengerField::DocumentNumber));

        record.document_number = Masked("12345678".to_string());
        assert!(!has_error(&validate_passenger(&record, today()), PassengerField::DocumentNumber));

        record.document_number = Masked("123456789".to_string());
        assert!(has_error(&validate_passenger(&record, today()), PassengerField::DocumentNumber));

        record.document_number = Masked("1234567a".to_string());
        assert!(has_error(&validate_passenger(&record, today()), PassengerField::DocumentNumber));
    }

    #[test]
    fn test_birth_date_rules() {
        let mut record = valid_record();

        record.birth_date = None;
        assert!(has_error(&validate_passenger(&record, today()), PassengerField::BirthDate));

        record.birth_date = NaiveDate::from_ymd_opt(2026, 1, 1);
        assert!(has_error(&validate_passenger(&record, today()), PassengerField::BirthDate));

        record.birth_date = Some(today());
        assert!(!has_error(&validate_passenger(&record, today()), PassengerField::BirthDate));
    }

    #[test]
    fn test_email_pattern() {
        let mut record = valid_record();

        record.email = "no-at-sign".to_string();
        assert!(has_error(&validate_passenger(&record, today()), PassengerField::Email));

        record.email = "a@b".to_string();
        assert!(has_error(&validate_passenger(&record, today()), PassengerField::Email));

        record.email = "a@b.co".to_string();
        assert!(!has_error(&validate_passenger(&record, today()), PassengerField::Email));
    }

    #[test]
    fn test_all_errors_collected_together() {
        let record = PassengerRecord::default();
        let errors = validate_passenger(&record, today());
        // Every empty field reports; validation never stops at the first.
        assert!(has_error(&errors, PassengerField::FirstName));
        assert!(has_error(&errors, PassengerField::LastName));
        assert!(has_error(&errors, PassengerField::Nationality));
        assert!(has_error(&errors, PassengerField::DocumentNumber));
        assert!(has_error(&errors, PassengerField::BirthDate));
        assert!(has_error(&errors, PassengerField::Email));
    }
}
