//! Crate for interacting with the GitHub REST API.
//!
//! This crate provides a client for making authenticated requests to GitHub,
//! authenticating with a personal access token. It covers the small surface
//! repo-init needs: creating, deleting, and looking up repositories, and
//! resolving the authenticated user.

use async_trait::async_trait;
use octocrab::{Octocrab, Result as OctocrabResult};
use serde::Serialize;
use tracing::{error, instrument};

pub mod errors;
pub use errors::Error;

pub mod models;
pub use models::{Repository, User};

// Reference the tests module in the separate file
#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// A client for interacting with the GitHub API, authenticated with a
/// personal access token.
#[derive(Debug)]
pub struct GitHubClient {
    client: Octocrab,
}

impl GitHubClient {
    /// Creates a new `GitHubClient` wrapping an already-authenticated
    /// `Octocrab` handle. Use [`create_token_client`] to build the handle
    /// from a personal access token.
    pub fn new(client: Octocrab) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RepositoryClient for GitHubClient {
    /// Creates a new repository within a specified organization using the REST API directly.
    ///
    /// # Arguments
    ///
    /// * `org_name` - The name of the organization.
    /// * `payload` - A `RepositoryCreatePayload` struct containing the repository details.
    ///
    /// # Errors
    /// Returns `Error::InvalidResponse` if the API call fails or the response cannot be parsed.
    async fn create_org_repository(
        &self,
        org_name: &str,
        payload: &RepositoryCreatePayload,
    ) -> Result<Repository, Error> {
        let path = format!("/orgs/{}/repos", org_name);
        let response: OctocrabResult<octocrab::models::Repository> =
            self.client.post(path, Some(payload)).await;
        match response {
            Ok(r) => Ok(Repository::from(r)),
            Err(e) => {
                log_octocrab_error("Failed to create repository for organisation", e);
                Err(Error::InvalidResponse)
            }
        }
    }

    /// Creates a new repository for the authenticated user using the REST API directly.
    ///
    /// # Arguments
    ///
    /// * `payload` - A `RepositoryCreatePayload` struct containing the repository details.
    ///
    /// # Errors
    /// Returns `Error::InvalidResponse` if the API call fails or the response cannot be parsed.
    async fn create_user_repository(
        &self,
        payload: &RepositoryCreatePayload,
    ) -> Result<Repository, Error> {
        let path = "/user/repos";
        let response: OctocrabResult<octocrab::models::Repository> =
            self.client.post(path, Some(payload)).await;
        match response {
            Ok(r) => Ok(Repository::from(r)),
            Err(e) => {
                log_octocrab_error("Failed to create repository for user", e);
                Err(Error::InvalidResponse)
            }
        }
    }

    /// Deletes a repository.
    ///
    /// Deletion is permanent; callers are expected to have confirmed the
    /// operation with the user before issuing it.
    ///
    /// # Arguments
    ///
    /// * `owner` - The owner of the repository (user or organization name).
    /// * `repo` - The name of the repository.
    ///
    /// # Errors
    /// Returns `Error::InvalidResponse` if the API call fails.
    #[instrument(skip(self), fields(owner = %owner, repo = %repo))]
    async fn delete_repository(&self, owner: &str, repo: &str) -> Result<(), Error> {
        let result = self.client.repos(owner, repo).delete().await;
        match result {
            Ok(()) => Ok(()),
            Err(e) => {
                log_octocrab_error("Failed to delete repository", e);
                Err(Error::InvalidResponse)
            }
        }
    }

    /// Fetches details for a specific repository.
    ///
    /// # Arguments
    ///
    /// * `owner` - The owner of the repository (user or organization name).
    /// * `repo` - The name of the repository.
    ///
    /// # Errors
    /// Returns `Error::InvalidResponse` if the API call fails.
    #[instrument(skip(self), fields(owner = %owner, repo = %repo))]
    async fn get_repository(&self, owner: &str, repo: &str) -> Result<Repository, Error> {
        let result = self.client.repos(owner, repo).get().await;
        match result {
            Ok(r) => Ok(Repository::from(r)),
            Err(e) => {
                log_octocrab_error("Failed to get repository", e);
                Err(Error::InvalidResponse)
            }
        }
    }

    /// Fetches the currently authenticated user.
    ///
    /// Used to resolve the owner scope for operations that are not targeted
    /// at an organization.
    ///
    /// # Errors
    /// Returns `Error::InvalidResponse` if the API call fails.
    #[instrument(skip(self))]
    async fn get_authenticated_user(&self) -> Result<User, Error> {
        let result = self.client.current().user().await;
        match result {
            Ok(user) => Ok(User::from(user)),
            Err(e) => {
                log_octocrab_error("Failed to get the authenticated user", e);
                Err(Error::InvalidResponse)
            }
        }
    }
}

/// Represents the payload for creating a new repository via the REST API.
/// Use `Default::default()` and modify fields as needed.
#[derive(Serialize, Default, Debug, Clone)]
pub struct RepositoryCreatePayload {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>, // Defaults to false if None
}

/// Trait for repository operations (creation, deletion, lookup).
///
/// The interactive front end drives this trait so that the batch operations
/// can be exercised against a fake client in tests.
#[async_trait]
pub trait RepositoryClient: Send + Sync {
    /// Creates a repository in the named organization.
    async fn create_org_repository(
        &self,
        org_name: &str,
        payload: &RepositoryCreatePayload,
    ) -> Result<Repository, Error>;

    /// Creates a repository in the authenticated user's personal namespace.
    async fn create_user_repository(
        &self,
        payload: &RepositoryCreatePayload,
    ) -> Result<Repository, Error>;

    /// Permanently deletes `owner/repo`.
    async fn delete_repository(&self, owner: &str, repo: &str) -> Result<(), Error>;

    /// Fetches `owner/repo`, including its clone URLs.
    async fn get_repository(&self, owner: &str, repo: &str) -> Result<Repository, Error>;

    /// Returns the user the access token belongs to.
    async fn get_authenticated_user(&self) -> Result<User, Error>;
}

/// Creates an `Octocrab` client authenticated with a personal access token.
///
/// The token is used as a static bearer credential on every request. There is
/// no refresh logic: an invalid token only surfaces when the first operation
/// is attempted.
///
/// # Errors
/// Returns `Error::ApiError` if the client cannot be built.
#[instrument(skip(token))]
pub fn create_token_client(token: &str) -> Result<Octocrab, Error> {
    Octocrab::builder()
        .personal_token(token.to_string())
        .build()
        .map_err(|_| Error::ApiError())
}

fn log_octocrab_error(message: &str, e: octocrab::Error) {
    match e {
        octocrab::Error::GitHub { source, backtrace } => {
            let err = source;
            error!(
                error_message = err.message,
                backtrace = backtrace.to_string(),
                "{}. Received an error from GitHub",
                message
            )
        }
        octocrab::Error::UriParse { source, backtrace } => error!(
            error_message = source.to_string(),
            backtrace = backtrace.to_string(),
            "{}. Failed to parse URI.",
            message
        ),
        _ => error!(error_message = e.to_string(), message),
    };
}
