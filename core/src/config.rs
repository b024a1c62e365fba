//! Client configuration from the environment.

use std::env;
use std::path::PathBuf;

use tracing::info;

use crate::client::AdoteClient;
use crate::storage::{FileStore, StorageError};

pub const DEFAULT_API_URL: &str = "http://localhost:3000";
pub const DEFAULT_DATA_DIR: &str = ".adoteai";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend origin; the client appends `/api`.
    pub api_url: String,
    /// Directory holding the persisted session and favorites.
    pub data_dir: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
        }
    }
}

impl ClientConfig {
    /// Read `ADOTEAI_API_URL` and `ADOTEAI_DATA_DIR`, falling back to the
    /// defaults for anything unset or blank.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            api_url: load(&lookup, "ADOTEAI_API_URL", DEFAULT_API_URL),
            data_dir: PathBuf::from(load(&lookup, "ADOTEAI_DATA_DIR", DEFAULT_DATA_DIR)),
        }
    }

    pub fn client(&self) -> AdoteClient {
        AdoteClient::new(&self.api_url)
    }

    pub fn open_storage(&self) -> Result<FileStore, StorageError> {
        FileStore::open(&self.data_dir)
    }
}

fn load(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    match lookup(key).filter(|value| !value.trim().is_empty()) {
        Some(value) => value,
        None => {
            info!("{key} not set, using default: {default}");
            default.to_string()
        }
    }
}
