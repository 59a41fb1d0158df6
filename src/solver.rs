//! Pipeline facade tying the pieces together.
//!
//! One call runs: configuration snapshot, parallel screenshot loading,
//! message assembly, schema-constrained generation, and mapping to the
//! public result. Calls are independent; the only shared state is the
//! [`ConfigStore`].

use crate::ai::{GeminiSolverClient, SolutionService};
use crate::config::ConfigStore;
use crate::prompt::build_solver_message;
use crate::screenshots::load_screenshots;
use crate::solution::ProcessedSolution;
use crate::{Error, Result};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

pub struct ScreenshotSolver {
    store: Arc<ConfigStore>,
    service: Box<dyn SolutionService>,
}

impl ScreenshotSolver {
    /// Solver backed by the real Gemini client, sharing one HTTP pool
    /// across calls.
    pub fn new(store: Arc<ConfigStore>) -> Self {
        Self::with_service(
            store,
            Box::new(GeminiSolverClient::new_with_client(reqwest::Client::new())),
        )
    }

    /// Inject a [`SolutionService`] - used by tests and offline harnesses.
    pub fn with_service(store: Arc<ConfigStore>, service: Box<dyn SolutionService>) -> Self {
        Self { store, service }
    }

    /// Turn the screenshots of one interview question into a structured
    /// solution.
    ///
    /// The configuration is captured before any I/O: an unconfigured store
    /// fails with [`Error::NotConfigured`] without touching the filesystem
    /// or the network, and a concurrent `update()` never affects a call
    /// already past this point.
    pub async fn process_screenshots(&self, paths: &[PathBuf]) -> Result<ProcessedSolution> {
        let config = self.store.snapshot()?;

        if paths.is_empty() {
            return Err(Error::InvalidConfiguration(
                "at least one screenshot path is required".to_string(),
            ));
        }

        debug!(
            "Solving from {} screenshot(s), target language {}",
            paths.len(),
            config.language
        );

        let images = load_screenshots(paths).await?;
        let message = build_solver_message(&config.language, &images);
        let payload = self
            .service
            .generate_solution(&config.api_key, &message)
            .await?;

        let solution = ProcessedSolution::try_from(payload)?;
        info!("Generated solution in {}", config.language);
        Ok(solution)
    }
}
