//! Error types for GitHub client operations.

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur during GitHub client operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A generic API request failure.
    ///
    /// This error occurs when a GitHub API request fails for unspecified reasons.
    /// Check the GitHub API status and ensure your request parameters are correct.
    #[error("API request failed")]
    ApiError(),

    /// Authentication or GitHub client initialization failure.
    #[error("Failed to authenticate or initialize GitHub client: {0}")]
    AuthError(String),

    /// The GitHub API returned an error or a response in an unexpected format.
    ///
    /// The underlying cause is logged at the call site; common causes are a
    /// revoked or under-scoped token, a repository that does not exist, or a
    /// name collision on creation.
    #[error("Invalid response format")]
    InvalidResponse,
}
