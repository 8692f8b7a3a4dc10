use actix_web::{HttpResponse, ResponseError, http::StatusCode};

use super::super::helpers::error_chain_fmt;

/// Every way a waitlist submission can fail.
///
/// `Display` is the message shown to the visitor; the cause chain only ever
/// reaches the logs through `Debug`.
#[derive(thiserror::Error)]
pub enum WaitlistError {
    #[error("Invalid submission")]
    HoneypotTripped,
    #[error("Please enter a valid email address")]
    InvalidEmail(#[source] anyhow::Error),
    #[error("Security verification required")]
    MissingToken,
    #[error("Security verification failed. Please try again.")]
    VerificationFailed(#[source] anyhow::Error),
    #[error("Server configuration error")]
    ConfigurationError(#[source] anyhow::Error),
    #[error("Something went wrong. Please try again.")]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for WaitlistError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for WaitlistError {
    fn status_code(&self) -> StatusCode {
        match self {
            WaitlistError::HoneypotTripped
            | WaitlistError::InvalidEmail(_)
            | WaitlistError::MissingToken
            | WaitlistError::VerificationFailed(_) => StatusCode::BAD_REQUEST,
            WaitlistError::ConfigurationError(_) | WaitlistError::UnexpectedError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.to_string()
        }))
    }
}
