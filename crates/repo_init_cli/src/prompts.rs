//! Prompt wrappers around `dialoguer` and the operator-facing message text.
//!
//! Everything that talks to the terminal lives here; the message builders
//! are kept as plain functions so the wording can be tested.

use dialoguer::{Confirm, Input};
use repo_init_core::operations::parse_repository_names;
use repo_init_core::secret::SecretStore;
use repo_init_core::Error as CoreError;

use crate::errors::Error;

#[cfg(test)]
#[path = "prompts_tests.rs"]
mod tests;

/// Asks for the list of repository names to work on.
///
/// # Errors
/// Returns `Error::Core(EmptyRepositoryList)` for empty or all-whitespace
/// input; fatal at the caller.
pub fn ask_repository_names() -> Result<Vec<String>, Error> {
    let input: String = Input::new()
        .with_prompt("Enter the repository names to work on (separated by spaces)")
        .allow_empty(true)
        .interact_text()?;
    Ok(parse_repository_names(&input)?)
}

pub fn ask_private() -> Result<bool, Error> {
    Ok(Confirm::new()
        .with_prompt("Should these repositories be visible to you only (private)?")
        .default(false)
        .interact()?)
}

/// Offered right after a create pass: clone the new repositories now.
pub fn ask_initialize_now() -> Result<bool, Error> {
    Ok(Confirm::new()
        .with_prompt("Do you want to clone these repositories locally now?")
        .default(false)
        .interact()?)
}

/// Asks for the organization scope; empty input means the personal account.
pub fn ask_organization() -> Result<String, Error> {
    Ok(Input::new()
        .with_prompt(
            "Enter the target organization name (leave empty to use your personal account)",
        )
        .allow_empty(true)
        .interact_text()?)
}

/// Prompts for the access token, pre-filled with the cached value, and
/// persists the submission.
///
/// The file is overwritten even when the submitted value matches the cached
/// one.
///
/// # Errors
/// Returns `Error::Core(EmptySecret)` when the operator submits an empty
/// token; fatal at the caller.
pub fn prompt_and_save_secret(store: &SecretStore) -> Result<String, Error> {
    let cached = store.load().unwrap_or_default();
    let mut prompt = Input::new()
        .with_prompt(
            "Enter your GitHub personal access token (create one at https://github.com/settings/tokens/new)",
        )
        .allow_empty(true);
    if !cached.is_empty() {
        prompt = prompt.default(cached);
    }
    let secret: String = prompt.interact_text()?;
    if secret.is_empty() {
        return Err(CoreError::EmptySecret.into());
    }
    store.save(&secret)?;
    Ok(secret)
}

/// Returns the cached secret when present, otherwise prompts and saves.
pub fn get_or_prompt_secret(store: &SecretStore) -> Result<String, Error> {
    match store.load() {
        Some(secret) => Ok(secret),
        None => prompt_and_save_secret(store),
    }
}

/// One pass of the confirmation gate guarding destructive batches.
pub fn confirm_repositories(
    names: &[String],
    organization: Option<&str>,
    second_pass: bool,
) -> Result<bool, Error> {
    Ok(Confirm::new()
        .with_prompt(confirm_message(names, organization, second_pass))
        .default(false)
        .interact()?)
}

/// Builds the confirmation-gate message: names every target repository,
/// names the organization when scoped, and escalates on the second pass.
fn confirm_message(names: &[String], organization: Option<&str>, second_pass: bool) -> String {
    let list = names.join(", ");
    if second_pass {
        return format!(
            "Asking again! Are you really sure you want to change these repositories: {list}"
        );
    }
    match organization {
        Some(org) => format!(
            "This will change the following repositories in the \"{org}\" organization: {list}. Continue?"
        ),
        None => format!("This will change the following repositories: {list}. Continue?"),
    }
}
