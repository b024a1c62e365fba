//! Error types for the AdoteAI API client.
//!
//! # Design
//! The backend reports failures in more than one shape: sometimes a non-2xx
//! status with a JSON `message`, sometimes a bare status, sometimes nothing
//! at all because the server was unreachable. All of them are folded into
//! `ApiError` here, and `ApiError::user_message` is the single place that
//! turns one into the text a form shows.

use thiserror::Error;

/// Shown whenever no structured message is available.
pub const CONNECTION_ERROR_MESSAGE: &str = "Erro ao conectar com o servidor";

/// Shown when the match endpoint answers but finds no suitable animal.
pub const NO_MATCH_MESSAGE: &str = "Não foi possível encontrar um match. Tente novamente.";

/// Errors returned by `AdoteClient` and `Transport` implementations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404. `message` holds
    /// the `message` field of a JSON body when the backend sent one.
    #[error("HTTP {status}: {body}")]
    Http {
        status: u16,
        message: Option<String>,
        body: String,
    },

    /// The request never produced a response.
    #[error("transport failed: {0}")]
    Transport(String),

    /// The match endpoint answered with `success: false`.
    #[error("no match found")]
    NoMatch,

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl ApiError {
    /// Build the error for a non-success response.
    pub(crate) fn from_status(status: u16, body: String) -> Self {
        if status == 404 {
            return ApiError::NotFound;
        }
        ApiError::Http {
            status,
            message: structured_message(&body),
            body,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound)
    }

    /// The text a view shows for this error: the backend's own message when
    /// it sent one, otherwise the generic connectivity message.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Http {
                message: Some(message),
                ..
            } => message.clone(),
            ApiError::NoMatch => NO_MATCH_MESSAGE.to_string(),
            _ => CONNECTION_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Pull a non-empty `message` string out of a JSON error body.
pub(crate) fn structured_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")?
        .as_str()
        .filter(|message| !message.trim().is_empty())
        .map(str::to_string)
}
