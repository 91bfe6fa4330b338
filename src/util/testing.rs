// src/util/testing.rs

use std::env;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Logging setup only runs once; subsequent calls do nothing if `tracing` is
/// already set.
pub fn setup_test_logging() {
    debug!("Attempting logger init from testing.rs");
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
        return;
    }

    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "debug");
    }

    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer())
        .with(EnvFilter::from_default_env())
        .init();
}

/// Saves and restores the `VOWSYNC_*` environment variables so config tests
/// cannot leak state into each other.
pub struct EnvGuard {
    store_path: Option<String>,
    tenant: Option<String>,
}

impl Default for EnvGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvGuard {
    pub fn new() -> Self {
        let guard = Self {
            store_path: env::var("VOWSYNC_STORE_PATH").ok(),
            tenant: env::var("VOWSYNC_TENANT").ok(),
        };
        env::remove_var("VOWSYNC_STORE_PATH");
        env::remove_var("VOWSYNC_TENANT");
        guard
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        env::remove_var("VOWSYNC_STORE_PATH");
        env::remove_var("VOWSYNC_TENANT");
        if let Some(val) = &self.store_path {
            env::set_var("VOWSYNC_STORE_PATH", val);
        }
        if let Some(val) = &self.tenant {
            env::set_var("VOWSYNC_TENANT", val);
        }
    }
}
