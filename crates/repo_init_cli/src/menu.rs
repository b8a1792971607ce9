//! The interactive menu loop.

use dialoguer::Select;
use github_client::{create_token_client, GitHubClient};
use repo_init_core::clone::GitCloneRunner;
use repo_init_core::operations;
use repo_init_core::secret::SecretStore;
use repo_init_core::session::Session;
use tracing::debug;

use crate::errors::Error;
use crate::prompts;

#[cfg(test)]
#[path = "menu_tests.rs"]
mod tests;

/// The six actions offered by the main menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Create,
    Delete,
    Initialize,
    SetSecret,
    SetOrganization,
    Exit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 6] = [
        MenuAction::Create,
        MenuAction::Delete,
        MenuAction::Initialize,
        MenuAction::SetSecret,
        MenuAction::SetOrganization,
        MenuAction::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuAction::Create => "Create repositories",
            MenuAction::Delete => "Delete repositories",
            MenuAction::Initialize => "Initialize (clone) repositories",
            MenuAction::SetSecret => "Set GitHub secret",
            MenuAction::SetOrganization => "Set organization",
            MenuAction::Exit => "Exit",
        }
    }
}

/// Runs the menu until the operator exits or an action fails fatally.
///
/// Cancelling the selection (Esc) is treated the same as choosing Exit.
///
/// # Errors
/// Returns the first fatal error from an action; `main` turns it into a
/// nonzero exit.
pub async fn run(mut session: Session, store: &SecretStore) -> Result<(), Error> {
    loop {
        let labels: Vec<&str> = MenuAction::ALL.iter().map(|a| a.label()).collect();
        let selection = Select::new()
            .with_prompt("What would you like to do?")
            .items(&labels)
            .default(0)
            .interact_opt()?;
        let action = match selection {
            Some(index) => MenuAction::ALL[index],
            None => MenuAction::Exit,
        };
        debug!(action = ?action, "Dispatching menu action");

        match action {
            MenuAction::Create => run_create(&mut session, store).await?,
            MenuAction::Delete => run_delete(&mut session, store).await?,
            MenuAction::Initialize => run_initialize(&mut session, store).await?,
            MenuAction::SetSecret => {
                let secret = prompts::prompt_and_save_secret(store)?;
                session.set_secret(secret);
            }
            MenuAction::SetOrganization => {
                let name = prompts::ask_organization()?;
                session.set_organization(&name);
            }
            MenuAction::Exit => return Ok(()),
        }
    }
}

/// Builds an authenticated client, prompting for the secret on first use.
fn authenticated_client(
    session: &mut Session,
    store: &SecretStore,
) -> Result<GitHubClient, Error> {
    if !session.has_secret() {
        let secret = prompts::get_or_prompt_secret(store)?;
        session.set_secret(secret);
    }
    let octocrab = create_token_client(session.secret())?;
    Ok(GitHubClient::new(octocrab))
}

async fn run_create(session: &mut Session, store: &SecretStore) -> Result<(), Error> {
    let client = authenticated_client(session, store)?;
    let names = prompts::ask_repository_names()?;
    let private = prompts::ask_private()?;

    let outcomes = operations::create_repositories(&client, session, &names, private).await;
    let created = outcomes.iter().filter(|o| o.result.is_ok()).count();
    println!("Created {created} of {} repositories.", outcomes.len());

    if prompts::ask_initialize_now()? {
        operations::initialize_repositories(&client, &GitCloneRunner, session, &names).await?;
    }
    Ok(())
}

async fn run_delete(session: &mut Session, store: &SecretStore) -> Result<(), Error> {
    let client = authenticated_client(session, store)?;
    let names = prompts::ask_repository_names()?;

    // Two-pass gate: any "no" skips the whole batch without another prompt.
    if prompts::confirm_repositories(&names, session.organization(), false)?
        && prompts::confirm_repositories(&names, session.organization(), true)?
    {
        operations::delete_repositories(&client, session, &names).await?;
    }
    Ok(())
}

async fn run_initialize(session: &mut Session, store: &SecretStore) -> Result<(), Error> {
    let client = authenticated_client(session, store)?;
    let names = prompts::ask_repository_names()?;
    operations::initialize_repositories(&client, &GitCloneRunner, session, &names).await?;
    Ok(())
}
