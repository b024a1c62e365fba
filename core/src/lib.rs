//! Client core of the AdoteAI pet-adoption app.
//!
//! # Overview
//! Everything a view needs that is not markup: the session and favorites
//! stores, the typed API client for the backend (auth, AI match, animals),
//! pre-flight form validation and the adoption visit form.
//!
//! # Design
//! - `AdoteClient` builds `HttpRequest` values and parses `HttpResponse`
//!   values; a `Transport` performs the round trip (host-does-IO).
//! - `SessionStore` and `FavoritesStore` are plain values with an explicit
//!   restore / mutate / persist lifecycle over a `KeyValueStore`.
//!   `AppContext` wires both to the client at the application root.
//! - Backend error shapes are normalized into `ApiError` at the client
//!   boundary; stored records are schema-checked on load.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod adoption;
pub mod animals;
pub mod client;
pub mod config;
pub mod context;
pub mod error;
pub mod favorites;
pub mod http;
pub mod session;
pub mod storage;
pub mod transport;
pub mod types;
pub mod validation;

pub use adoption::{schedule_visit, ScheduledVisit, VisitError, VisitRequest};
pub use animals::find_animal;
pub use client::AdoteClient;
pub use config::ClientConfig;
pub use context::{AppContext, MatchError};
pub use error::ApiError;
pub use favorites::FavoritesStore;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use session::{LoginError, SessionStore};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
pub use transport::Transport;
#[cfg(feature = "ureq")]
pub use transport::UreqTransport;
pub use types::{Animal, LoginRequest, LoginResponse, MatchRequest, MatchResponse, MatchResult, Temperament, User};
pub use validation::{validate_login, validate_match, LoginFieldErrors, MatchFieldErrors};
