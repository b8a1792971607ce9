//! Batch repository operations.
//!
//! Every operation walks an ordered list of repository names and issues one
//! remote call per name, strictly in input order. Nothing is retried and
//! nothing runs in parallel. The owner scope (organization or the
//! authenticated user's login) is re-derived at the start of each operation
//! rather than cached across operations.

use github_client::{RepositoryClient, RepositoryCreatePayload};
use tracing::{error, info, warn};

use crate::clone::CloneRunner;
use crate::errors::Error;
use crate::session::Session;

#[cfg(test)]
#[path = "operations_tests.rs"]
mod tests;

/// Splits operator input into repository names on whitespace.
///
/// Consecutive whitespace yields no empty tokens; duplicates pass through
/// unchanged.
///
/// # Errors
/// Returns `Error::EmptyRepositoryList` for empty or all-whitespace input.
pub fn parse_repository_names(input: &str) -> Result<Vec<String>, Error> {
    let names: Vec<String> = input.split_whitespace().map(str::to_string).collect();
    if names.is_empty() {
        return Err(Error::EmptyRepositoryList);
    }
    Ok(names)
}

/// The result of one item in a create batch.
#[derive(Debug)]
pub struct CreateOutcome {
    /// The requested repository name.
    pub name: String,
    /// Whether the create call for this name succeeded.
    pub result: Result<(), Error>,
}

/// Creates one repository per name, scoped to the session's organization or
/// the personal namespace.
///
/// A failing item does not stop the batch: each name gets exactly one
/// outcome, in input order, and the caller decides what to do with the
/// failures. Pre-existing repositories are not checked for; a name collision
/// surfaces as that item's error.
pub async fn create_repositories(
    client: &dyn RepositoryClient,
    session: &Session,
    names: &[String],
    private: bool,
) -> Vec<CreateOutcome> {
    let mut outcomes = Vec::with_capacity(names.len());
    for name in names {
        let payload = RepositoryCreatePayload {
            name: name.clone(),
            private: Some(private),
        };
        let result = match session.organization() {
            Some(org) => client.create_org_repository(org, &payload).await,
            None => client.create_user_repository(&payload).await,
        };
        let result = match result {
            Ok(_) => {
                match session.organization() {
                    Some(org) => info!(organization = org, repository = name.as_str(), "Created repository"),
                    None => info!(repository = name.as_str(), "Created repository"),
                }
                Ok(())
            }
            Err(e) => {
                error!(repository = name.as_str(), error = %e, "Failed to create repository");
                Err(Error::from(e))
            }
        };
        outcomes.push(CreateOutcome {
            name: name.clone(),
            result,
        });
    }
    outcomes
}

/// Deletes one repository per name under the resolved owner scope.
///
/// Stops at the first failure and returns it; names already deleted stay
/// deleted. The caller is responsible for having confirmed the batch with
/// the operator first.
///
/// # Errors
/// Returns the first remote error encountered, including a failed owner
/// lookup.
pub async fn delete_repositories(
    client: &dyn RepositoryClient,
    session: &Session,
    names: &[String],
) -> Result<(), Error> {
    let owner = resolve_owner(client, session).await?;
    for name in names {
        client.delete_repository(&owner, name).await?;
        info!(owner = owner.as_str(), repository = name.as_str(), "Deleted repository");
    }
    Ok(())
}

/// Clones one repository per name into the current working directory.
///
/// Each name is looked up remotely to obtain its clone URL; a lookup failure
/// aborts the remaining batch. A failing clone command is only logged as a
/// warning and the batch continues, so one bad checkout cannot block the
/// rest.
///
/// # Errors
/// Returns the first lookup error encountered, including a failed owner
/// lookup.
pub async fn initialize_repositories(
    client: &dyn RepositoryClient,
    runner: &dyn CloneRunner,
    session: &Session,
    names: &[String],
) -> Result<(), Error> {
    let owner = resolve_owner(client, session).await?;
    for name in names {
        let repository = client.get_repository(&owner, name).await?;
        let source = repository.clone_source();
        match runner.clone_repository(&source) {
            Ok(()) => info!(repository = name.as_str(), source = source.as_str(), "Cloned repository"),
            Err(e) => warn!(repository = name.as_str(), error = %e, "Clone command failed"),
        }
    }
    Ok(())
}

/// Resolves the owner scope for delete and lookup calls: the organization
/// when one is set, otherwise the authenticated user's login. The user
/// endpoint is only consulted when no organization is set.
async fn resolve_owner(
    client: &dyn RepositoryClient,
    session: &Session,
) -> Result<String, Error> {
    match session.organization() {
        Some(org) => Ok(org.to_string()),
        None => Ok(client.get_authenticated_user().await?.login),
    }
}
