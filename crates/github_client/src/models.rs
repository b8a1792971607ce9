//! Domain models for the slice of the GitHub API this crate consumes.
//!
//! These models are deliberately narrow: they carry only the fields the
//! repository operations need, converted from octocrab's wire models.

use serde::{Deserialize, Serialize};
use url::Url;

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;

/// Represents a GitHub repository.
///
/// # Examples
///
/// ```rust
/// use github_client::Repository;
///
/// let repo = Repository::new(
///     "my-repo".to_string(),
///     "owner/my-repo".to_string(),
///     false,
///     None,
/// );
///
/// println!("Repository: {}", repo.name());
/// println!("Clone from: {}", repo.clone_source());
/// ```
#[derive(Debug, Deserialize)]
pub struct Repository {
    /// The full name of the repository (owner/name)
    full_name: String,
    /// The name of the repository
    name: String,
    /// Whether the repository is private
    private: bool,
    /// The SSH remote reported by the API, when present
    ssh_url: Option<String>,
}

impl Repository {
    /// Creates a new Repository instance.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the repository
    /// * `full_name` - The full name including owner (owner/repo)
    /// * `private` - Whether the repository is private
    /// * `ssh_url` - The SSH remote, if known
    pub fn new(name: String, full_name: String, private: bool, ssh_url: Option<String>) -> Self {
        Self {
            full_name,
            name,
            private,
            ssh_url,
        }
    }

    /// Returns the name of the repository (without owner).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the full name of the repository (owner/name).
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Returns whether the repository is private.
    pub fn is_private(&self) -> bool {
        self.private
    }

    /// Returns the address `git clone` should use for this repository,
    /// preferring the SSH remote when the API provided one.
    pub fn clone_source(&self) -> String {
        match &self.ssh_url {
            Some(ssh) => ssh.clone(),
            None => self.url().to_string(),
        }
    }

    /// Returns the HTTPS Git clone URL for the repository.
    ///
    /// # Panics
    ///
    /// Panics if the repository full name cannot be formatted into a valid URL.
    /// This should not happen with valid GitHub repository names.
    pub fn url(&self) -> Url {
        Url::parse(&format!("https://github.com/{}.git", self.full_name))
            .expect("Valid GitHub repository URL")
    }
}

impl From<octocrab::models::Repository> for Repository {
    fn from(value: octocrab::models::Repository) -> Self {
        Self {
            name: value.name.clone(),
            full_name: value.full_name.unwrap_or(value.name.clone()),
            private: value.private.unwrap_or(false),
            ssh_url: value.ssh_url.map(|u| u.to_string()),
        }
    }
}

/// Represents a GitHub user account.
///
/// Used to resolve the personal namespace when no organization scope is set.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct User {
    /// The unique numeric ID of the user
    pub id: u64,
    /// The login name of the user
    pub login: String,
}

impl From<octocrab::models::Author> for User {
    fn from(value: octocrab::models::Author) -> Self {
        Self {
            id: *value.id,
            login: value.login,
        }
    }
}
