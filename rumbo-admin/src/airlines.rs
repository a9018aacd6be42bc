use crate::panel::{AdminEntity, DraftError};
use regex::Regex;
use rumbo_shared::AirlineAccount;
use std::sync::LazyLock;
use uuid::Uuid;

/// CUIT format: two digits, eight digits, one check digit.
static TAX_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}-\d{8}-\d{1}$").expect("valid pattern"));
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid pattern"));

impl AdminEntity for AirlineAccount {
    type Draft = AirlineDraft;

    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AirlineDraft {
    pub name: String,
    pub tax_id: String,
    pub email: String,
}

impl AirlineDraft {
    pub fn from_airline(airline: &AirlineAccount) -> Self {
        Self {
            name: airline.name.clone(),
            tax_id: airline.tax_id.clone(),
            email: airline.email.clone(),
        }
    }

    /// Format checks before any request. Duplicate tax ids are the
    /// backend's call; its message is surfaced verbatim.
    pub fn validate(&self) -> Vec<DraftError> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(DraftError::new("name", "required"));
        }
        if !TAX_ID_RE.is_match(&self.tax_id) {
            errors.push(DraftError::new("taxId", "expected format NN-NNNNNNNN-N"));
        }
        if !EMAIL_RE.is_match(&self.email) {
            errors.push(DraftError::new("email", "invalid email"));
        }

        errors
    }
}
