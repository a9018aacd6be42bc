use crate::panel::{AdminEntity, DraftError};
use regex::Regex;
use rumbo_shared::{Role, UserAccount};
use std::sync::LazyLock;
use uuid::Uuid;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid pattern"));

impl AdminEntity for UserAccount {
    type Draft = AccountDraft;

    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountDraft {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Option<Role>,
}

impl AccountDraft {
    pub fn from_account(account: &UserAccount) -> Self {
        Self {
            name: account.name.clone(),
            email: account.email.clone(),
            password: String::new(),
            confirm_password: String::new(),
            role: Some(account.role),
        }
    }

    pub fn validate(&self) -> Vec<DraftError> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(DraftError::new("name", "required"));
        }
        if !EMAIL_RE.is_match(&self.email) {
            errors.push(DraftError::new("email", "invalid email"));
        }
        if self.password.is_empty() {
            errors.push(DraftError::new("password", "required"));
        } else if self.password != self.confirm_password {
            errors.push(DraftError::new("confirmPassword", "passwords do not match"));
        }
        if self.role.is_none() {
            errors.push(DraftError::new("role", "required"));
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> AccountDraft {
        AccountDraft {
            name: "Ana Pérez".to_string(),
            email: "ana@example.com".to_string(),
            password: "hunter42".to_string(),
            confirm_password: "hunter42".to_string(),
            role: Some(Role::User),
        }
    }

    #[test]
    fn test_valid_draft_passes() {
        assert!(valid_draft().validate().is_empty());
    }

    #[test]
    fn test_password_confirmation_must_match() {
        let mut draft = valid_draft();
        draft.confirm_password = "hunter43".to_string();
        assert!(draft.validate().iter().any(|e| e.field == "confirmPassword"));
    }

    #[test]
    fn test_missing_fields_all_reported() {
        let errors = AccountDraft::default().validate();
        assert!(errors.iter().any(|e| e.field == "name"));
        assert!(errors.iter().any(|e| e.field == "email"));
        assert!(errors.iter().any(|e| e.field == "password"));
        assert!(errors.iter().any(|e| e.field == "role"));
    }
}
