//! Error responses for the sync API.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contactsync_domain::ContactSyncError;
use serde::{Deserialize, Serialize};

// Response messages
pub const CONTACT_CREATED_MESSAGE: &str = "Contact created successfully";
pub const CONTACT_NOT_FOUND_MESSAGE: &str = "Contact not found";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Body of every response the API sends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    /// Successful response carrying `message`.
    pub fn ok(message: impl Into<String>) -> Self {
        Self { success: true, message: message.into() }
    }

    /// Failed response carrying `message`.
    pub fn failed(message: impl Into<String>) -> Self {
        Self { success: false, message: message.into() }
    }
}

/// Error type for the sync API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No customer matched the requested ids.
    #[error("Contact not found")]
    NotFound,

    /// The request body could not be parsed.
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Resolution, formatting or datastore access failed.
    #[error("Internal server error: {0}")]
    Internal(ContactSyncError),
}

impl From<ContactSyncError> for ApiError {
    fn from(err: ContactSyncError) -> Self {
        match err {
            ContactSyncError::NotFound(_) => Self::NotFound,
            other => Self::Internal(other),
        }
    }
}

impl ApiError {
    /// HTTP status this error is answered with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::InvalidBody(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self {
            Self::NotFound => CONTACT_NOT_FOUND_MESSAGE,
            Self::InvalidBody(detail) => {
                tracing::error!(error = %detail, "Error syncing contact: invalid request body");
                INTERNAL_ERROR_MESSAGE
            }
            Self::Internal(err) => {
                tracing::error!(error = %err, kind = err.label(), "Error syncing contact");
                INTERNAL_ERROR_MESSAGE
            }
        };

        (self.status_code(), Json(MessageResponse::failed(message))).into_response()
    }
}
