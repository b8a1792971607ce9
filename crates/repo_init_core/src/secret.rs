//! On-disk cache for the GitHub access token.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::errors::Error;

#[cfg(test)]
#[path = "secret_tests.rs"]
mod tests;

/// Name of the secret file, relative to the working directory.
pub const SECRET_FILE_NAME: &str = "repo-init_github-secret.txt";

/// A plaintext single-token store.
///
/// The file holds the raw token with no delimiters and is overwritten
/// wholesale on every save. There is no encryption; the file lives next to
/// the repositories the operator is working on.
#[derive(Debug, Clone)]
pub struct SecretStore {
    path: PathBuf,
}

impl SecretStore {
    /// Creates a store over [`SECRET_FILE_NAME`] in the working directory.
    pub fn new() -> Self {
        Self::at_path(SECRET_FILE_NAME)
    }

    /// Creates a store over an explicit path. Used by tests.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the cached token, or `None` when the file is absent or empty.
    ///
    /// Never fails: an unreadable file is treated the same as a missing one.
    pub fn load(&self) -> Option<String> {
        let content = fs::read_to_string(&self.path).ok()?;
        if content.is_empty() {
            debug!(path = %self.path.display(), "Secret file is empty");
            return None;
        }
        Some(content)
    }

    /// Persists the token verbatim, replacing any previous content.
    ///
    /// On Unix the file keeps the permissive mode the original tool used, so
    /// repeated saves behave identically regardless of the process umask.
    ///
    /// # Errors
    /// Returns `Error::SecretStore` if the file cannot be written.
    pub fn save(&self, secret: &str) -> Result<(), Error> {
        fs::write(&self.path, secret).map_err(|source| Error::SecretStore {
            path: self.path.display().to_string(),
            source,
        })?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o777)).map_err(
                |source| Error::SecretStore {
                    path: self.path.display().to_string(),
                    source,
                },
            )?;
        }

        debug!(path = %self.path.display(), "Saved secret");
        Ok(())
    }
}

impl Default for SecretStore {
    fn default() -> Self {
        Self::new()
    }
}
