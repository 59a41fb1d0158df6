pub mod client;
pub mod solver;
pub mod types;

pub use solver::GeminiSolverClient;
