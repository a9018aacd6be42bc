use thiserror::Error;

/// Errors surfaced by the REST client.
///
/// Any 401 becomes `SessionExpired`, regardless of endpoint; the UI treats
/// it uniformly as "log in again". Rejections carry the backend's own
/// message verbatim so duplicate-tax-id style conflicts read exactly as the
/// server phrased them.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Session expired")]
    SessionExpired,

    #[error("Request failed: {0}")]
    Network(String),

    #[error("Response parsing failed: {0}")]
    Parse(String),

    #[error("{message}")]
    Rejected {
        /// HTTP status the backend answered with.
        status: u16,
        /// The backend's message field, or the raw body when it has none.
        message: String,
    },

    #[error("Draft is missing required fields")]
    IncompleteDraft,
}

impl ApiError {
    pub fn is_conflict(&self) -> bool {
        matches!(self, ApiError::Rejected { status: 409, .. })
    }
}
