//! repo-init: interactive bulk management of GitHub repositories.

use repo_init_core::secret::SecretStore;
use repo_init_core::session::Session;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod errors;
mod menu;
mod prompts;

#[tokio::main]
async fn main() {
    // Log lines double as the operator-facing per-item output, so default to
    // `info` when REPO_INIT_LOG is not set.
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_env("REPO_INIT_LOG")
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let store = SecretStore::new();
    let session = Session::new();

    if let Err(e) = menu::run(session, &store).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
