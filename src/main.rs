//! Entry point: mounts the application of the current directory.

use std::process::ExitCode;

use app_i18n::bootstrap;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let root = match std::env::current_dir() {
        Ok(root) => root,
        Err(e) => {
            tracing::error!("Failed to resolve the current directory: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match bootstrap(&root) {
        Ok(mounted) => {
            tracing::info!(mount_target = %mounted.target(), markup = mounted.markup(), "Rendered");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Bootstrap failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
