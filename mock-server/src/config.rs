use std::env;

use tracing::{info, warn};

pub const DEFAULT_PORT: u16 = 3000;

pub struct Config {
    pub port: u16,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: port_from(env::var("PORT").ok().as_deref()),
        }
    }
}

/// An unset or unparsable `PORT` falls back to the default.
fn port_from(raw: Option<&str>) -> u16 {
    match raw.map(str::parse::<u16>) {
        Some(Ok(port)) => port,
        Some(Err(e)) => {
            warn!("invalid PORT value, using {DEFAULT_PORT}: {e}");
            DEFAULT_PORT
        }
        None => {
            info!("PORT not set, using default: {DEFAULT_PORT}");
            DEFAULT_PORT
        }
    }
}
