//! Process configuration for the solver.
//!
//! The host application owns a [`ConfigStore`] and hands it (usually behind
//! an `Arc`) to the solver. Updates replace the credential and target
//! language together; a call in flight keeps the snapshot it captured at
//! entry.

use crate::{Error, Result};
use std::sync::RwLock;
use tracing::{info, warn};

/// Target language used when the caller or environment does not supply one.
pub const DEFAULT_LANGUAGE: &str = "Python";

/// A fully-formed configuration pair. Both fields are replaced atomically.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    pub api_key: String,
    pub language: String,
}

/// Last-write-wins store for the live [`SolverConfig`].
///
/// Starts unconfigured; callers hitting the solver before a successful
/// update receive [`Error::NotConfigured`].
#[derive(Debug, Default)]
pub struct ConfigStore {
    inner: RwLock<Option<SolverConfig>>,
}

impl ConfigStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(None),
        }
    }

    /// Construct a store and attempt to seed it from the environment
    /// (`GEMINI_API_KEY`, `LANGUAGE`, with `.env` support via dotenvy).
    ///
    /// A missing or empty key is reported but non-fatal: the store comes
    /// back unconfigured and the first solve fails with `NotConfigured`.
    pub fn bootstrap_from_env() -> Self {
        dotenvy::dotenv().ok();

        let store = Self::new();
        if let Ok(api_key) = std::env::var("GEMINI_API_KEY") {
            let language = std::env::var("LANGUAGE").ok();
            match store.update(&api_key, language.as_deref()) {
                Ok(()) => info!("Solver configured from environment"),
                Err(e) => warn!("Ignoring environment configuration: {}", e),
            }
        }
        store
    }

    /// Replace the stored configuration.
    ///
    /// The credential is trimmed and must be non-empty; the language falls
    /// back to [`DEFAULT_LANGUAGE`] when absent or empty. On failure the
    /// previous configuration (if any) is left untouched.
    pub fn update(&self, api_key: &str, language: Option<&str>) -> Result<()> {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(Error::InvalidConfiguration(
                "API key is required".to_string(),
            ));
        }

        let language = match language.map(str::trim) {
            Some(lang) if !lang.is_empty() => lang.to_string(),
            _ => DEFAULT_LANGUAGE.to_string(),
        };

        let mut guard = self.inner.write().expect("config lock poisoned");
        *guard = Some(SolverConfig {
            api_key: api_key.to_string(),
            language,
        });
        Ok(())
    }

    /// Capture the current configuration for one call.
    pub fn snapshot(&self) -> Result<SolverConfig> {
        self.inner
            .read()
            .expect("config lock poisoned")
            .clone()
            .ok_or(Error::NotConfigured)
    }

    pub fn is_configured(&self) -> bool {
        self.inner.read().expect("config lock poisoned").is_some()
    }
}
