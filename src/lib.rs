//! Snapsolve - turns screenshots of a coding interview question into a
//! structured solution by delegating to Gemini's multimodal API.
//!
//! The crate is a library-level adapter: a host application configures an API
//! key and target language, hands over screenshot paths, and receives back an
//! approach narrative, solution code, and complexity analysis - or a typed
//! failure.

pub mod ai;
pub mod config;
pub mod error;
pub mod prompt;
pub mod prompts;
pub mod screenshots;
pub mod solution;
pub mod solver;

pub use config::{ConfigStore, SolverConfig};
pub use error::{Error, Result};
pub use solution::ProcessedSolution;
pub use solver::ScreenshotSolver;
