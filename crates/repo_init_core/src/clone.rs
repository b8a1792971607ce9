//! Local clone step, delegated to the `git` executable.

use std::process::Command;

use tracing::debug;

use crate::errors::Error;

#[cfg(test)]
#[path = "clone_tests.rs"]
mod tests;

/// Runs the local clone step for one repository.
///
/// Split out as a trait so the batch operations can be tested without
/// spawning processes.
pub trait CloneRunner {
    /// Clones `url` into the current working directory.
    fn clone_repository(&self, url: &str) -> Result<(), Error>;
}

/// Invokes `git clone <url>` in the current working directory.
///
/// The subprocess inherits stdout/stderr, so `git`'s own progress output is
/// what the operator sees while the clone runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct GitCloneRunner;

impl CloneRunner for GitCloneRunner {
    fn clone_repository(&self, url: &str) -> Result<(), Error> {
        debug!(url = url, "Running git clone");
        let status = Command::new("git")
            .arg("clone")
            .arg(url)
            .status()
            .map_err(|e| Error::CloneFailed {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        if !status.success() {
            return Err(Error::CloneFailed {
                url: url.to_string(),
                reason: format!("git exited with {status}"),
            });
        }
        Ok(())
    }
}
