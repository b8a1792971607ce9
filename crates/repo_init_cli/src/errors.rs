use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors surfaced by the interactive front end.
///
/// Any of these reaching `main` is fatal: the message is printed and the
/// process exits nonzero.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] repo_init_core::Error),

    #[error(transparent)]
    GitHub(#[from] github_client::Error),

    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}
