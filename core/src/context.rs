//! Application root: the client plus the two stores, wired once.
//!
//! Views receive an `AppContext` instead of reaching for globals. The
//! session and favorites stores share a storage backend but not records,
//! and the client's bearer token follows the session. The session is only
//! reachable read-only from outside, so `login` / `logout` always go through
//! the context and the token cannot go stale.

use thiserror::Error;

use crate::client::AdoteClient;
use crate::error::ApiError;
use crate::favorites::FavoritesStore;
use crate::session::{LoginError, SessionStore};
use crate::storage::KeyValueStore;
use crate::transport::Transport;
use crate::types::{Animal, LoginRequest, MatchRequest, MatchResult, User};
use crate::validation::{self, MatchFieldErrors};

/// Why the match questionnaire did not produce a result.
#[derive(Debug, Error)]
pub enum MatchError {
    /// Client-side validation failed; nothing was sent.
    #[error("invalid match form: {0}")]
    Invalid(MatchFieldErrors),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl MatchError {
    pub fn message(&self) -> String {
        match self {
            MatchError::Invalid(errors) => errors.to_string(),
            MatchError::Api(err) => err.user_message(),
        }
    }

    pub fn field_errors(&self) -> Option<&MatchFieldErrors> {
        match self {
            MatchError::Invalid(errors) => Some(errors),
            MatchError::Api(_) => None,
        }
    }
}

pub struct AppContext<S, T> {
    client: AdoteClient,
    transport: T,
    session: SessionStore<S>,
    favorites: FavoritesStore<S>,
}

impl<S, T> AppContext<S, T>
where
    S: KeyValueStore + Clone,
    T: Transport,
{
    /// Restore both stores from `storage` and hand the restored token to the
    /// client.
    pub fn restore(client: AdoteClient, transport: T, storage: S) -> Self {
        let session = SessionStore::restore(storage.clone());
        let favorites = FavoritesStore::restore(storage);
        let client = client.with_token(session.token().map(str::to_string));
        Self {
            client,
            transport,
            session,
            favorites,
        }
    }

    pub fn client(&self) -> &AdoteClient {
        &self.client
    }

    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    pub fn favorites(&self) -> &FavoritesStore<S> {
        &self.favorites
    }

    pub fn favorites_mut(&mut self) -> &mut FavoritesStore<S> {
        &mut self.favorites
    }

    pub fn login(&mut self, credentials: &LoginRequest) -> Result<User, LoginError> {
        let user = self.session.login(&self.client, &self.transport, credentials)?.clone();
        self.client.set_token(self.session.token().map(str::to_string));
        Ok(user)
    }

    pub fn logout(&mut self) {
        self.session.logout();
        self.client.set_token(None);
    }

    /// Validate the questionnaire, then ask the backend for a match.
    pub fn find_match(&self, request: &MatchRequest) -> Result<MatchResult, MatchError> {
        validation::validate_match(request).map_err(MatchError::Invalid)?;
        Ok(self.client.find_match(&self.transport, request)?)
    }

    pub fn list_animals(&self) -> Result<Vec<Animal>, ApiError> {
        self.client.list_animals(&self.transport)
    }

    pub fn get_animal(&self, id: i64) -> Result<Animal, ApiError> {
        self.client.get_animal(&self.transport, id)
    }
}
