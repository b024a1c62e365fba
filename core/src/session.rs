//! The session store: at most one authenticated user and its token.
//!
//! # Design
//! `SessionStore` owns a storage handle and mirrors two records from it,
//! `USER_KEY` and `TOKEN_KEY`. The lifecycle is explicit:
//! `restore` once at start-up, then `login` / `logout`. Storage is written
//! before memory changes, so a failed write never leaves the two out of
//! step. Favorites live in their own store and are never touched here.

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::client::AdoteClient;
use crate::error::ApiError;
use crate::storage::{self, KeyValueStore, StorageError, TOKEN_KEY, USER_KEY};
use crate::transport::Transport;
use crate::types::{LoginRequest, User};
use crate::validation::{self, LoginFieldErrors};

/// Shown when the backend rejects a login without saying why.
pub const LOGIN_FAILED_MESSAGE: &str = "Erro ao fazer login";

/// Why a login attempt did not produce a session.
#[derive(Debug, Error)]
pub enum LoginError {
    /// Client-side validation failed; nothing was sent.
    #[error("invalid login form: {0}")]
    Invalid(LoginFieldErrors),

    /// The backend answered with `success: false` or without a user.
    #[error("login rejected: {0}")]
    Rejected(String),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("failed to persist session: {0}")]
    Storage(#[from] StorageError),
}

impl LoginError {
    /// The general form error to display.
    pub fn message(&self) -> String {
        match self {
            LoginError::Invalid(errors) => errors.to_string(),
            LoginError::Rejected(message) => message.clone(),
            LoginError::Api(err) => err.user_message(),
            LoginError::Storage(_) => LOGIN_FAILED_MESSAGE.to_string(),
        }
    }

    pub fn field_errors(&self) -> Option<&LoginFieldErrors> {
        match self {
            LoginError::Invalid(errors) => Some(errors),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct SessionStore<S> {
    storage: S,
    user: Option<User>,
    token: Option<String>,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Load the persisted session. A missing or corrupt user record yields
    /// an empty session; a token without a user is dropped with it.
    pub fn restore(storage: S) -> Self {
        let user: Option<User> = storage::load_json(&storage, USER_KEY);
        let token = match &user {
            Some(_) => storage.get(TOKEN_KEY).unwrap_or_else(|e| {
                warn!(error = %e, "failed to read stored token");
                None
            }),
            None => {
                if let Err(e) = storage.remove(TOKEN_KEY) {
                    warn!(error = %e, "failed to remove orphan token");
                }
                None
            }
        };
        debug!(authenticated = user.is_some(), "session restored");
        Self { storage, user, token }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Validate `credentials`, call the login endpoint and, on success,
    /// persist and adopt the returned user and token. Any failure leaves the
    /// current session as it was.
    pub fn login<T: Transport + ?Sized>(
        &mut self,
        client: &AdoteClient,
        transport: &T,
        credentials: &LoginRequest,
    ) -> Result<&User, LoginError> {
        validation::validate_login(credentials).map_err(LoginError::Invalid)?;

        info!(email = %credentials.email, "logging in");
        let response = client.login(transport, credentials).map_err(|e| {
            warn!(error = %e, "login request failed");
            e
        })?;

        let user = match (response.success, response.user) {
            (true, Some(user)) => user,
            _ => {
                let message = response
                    .message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| LOGIN_FAILED_MESSAGE.to_string());
                info!(%message, "login rejected");
                return Err(LoginError::Rejected(message));
            }
        };

        self.persist(&user, response.token.as_deref())?;

        info!(user_id = user.id, "logged in");
        self.token = response.token;
        let user = self.user.insert(user);
        Ok(&*user)
    }

    /// Write user then token. If the token write fails the user record is
    /// put back to what memory still holds, so a restart never pairs the
    /// new user with the previous token.
    fn persist(&self, user: &User, token: Option<&str>) -> Result<(), StorageError> {
        storage::save_json(&self.storage, USER_KEY, user)?;
        let written = match token {
            Some(token) => self.storage.set(TOKEN_KEY, token),
            None => self.storage.remove(TOKEN_KEY),
        };
        if let Err(e) = written {
            warn!(error = %e, "failed to persist token, rolling back user record");
            let rollback = match &self.user {
                Some(previous) => storage::save_json(&self.storage, USER_KEY, previous),
                None => self.storage.remove(USER_KEY),
            };
            if let Err(rollback_err) = rollback {
                warn!(error = %rollback_err, "failed to roll back user record");
            }
            return Err(e);
        }
        Ok(())
    }

    /// End the session. Idempotent; storage failures are logged, never
    /// returned.
    pub fn logout(&mut self) {
        self.user = None;
        self.token = None;
        for key in [USER_KEY, TOKEN_KEY] {
            if let Err(e) = self.storage.remove(key) {
                warn!(key, error = %e, "failed to remove session record");
            }
        }
        debug!("logged out");
    }
}
