use anyhow::Result;
use clap::Parser;
use snapsolve::{ConfigStore, ScreenshotSolver};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Thin host harness around the snapsolve library: configures the solver
/// from the environment (plus flag overrides) and prints the solution as
/// JSON.
#[derive(Debug, Parser)]
#[command(name = "snapsolve")]
#[command(about = "Solve a coding interview question from screenshots")]
struct CliArgs {
    /// Screenshot paths, in the order the question should be read.
    #[arg(value_name = "SCREENSHOT", required = true)]
    screenshots: Vec<PathBuf>,

    /// Target language for the solution (overrides LANGUAGE).
    #[arg(long)]
    language: Option<String>,

    /// Gemini API key (overrides GEMINI_API_KEY).
    #[arg(long)]
    api_key: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "snapsolve=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = CliArgs::parse();

    let store = Arc::new(ConfigStore::bootstrap_from_env());
    if let Some(api_key) = &args.api_key {
        store.update(api_key, args.language.as_deref())?;
    } else if let Some(language) = &args.language {
        // Re-apply the environment key with the requested language.
        let config = store.snapshot()?;
        store.update(&config.api_key, Some(language))?;
    }

    let solver = ScreenshotSolver::new(store);
    match solver.process_screenshots(&args.screenshots).await {
        Ok(solution) => {
            info!("Solution generated");
            println!("{}", serde_json::to_string_pretty(&solution)?);
            Ok(())
        }
        Err(e) => {
            error!("Failed to solve: {}", e);
            std::process::exit(1);
        }
    }
}
