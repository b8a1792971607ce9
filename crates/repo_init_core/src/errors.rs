use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors produced by the core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The operator submitted an empty or all-whitespace repository list.
    #[error("No repository names were provided.")]
    EmptyRepositoryList,

    /// The operator submitted an empty secret.
    #[error("The GitHub secret must not be empty.")]
    EmptySecret,

    /// A remote call failed.
    #[error("GitHub request failed: {0}")]
    GitHub(#[from] github_client::Error),

    /// The local clone command could not be run or exited unsuccessfully.
    #[error("Failed to clone {url}: {reason}")]
    CloneFailed { url: String, reason: String },

    /// The secret file could not be written.
    #[error("Failed to write the secret file at {path}: {source}")]
    SecretStore {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
