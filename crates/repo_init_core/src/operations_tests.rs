//! Unit tests for the batch operations, driven through fake collaborators.

use super::*;
use async_trait::async_trait;
use github_client::{Repository, User};
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    CreateOrg { org: String, name: String, private: bool },
    CreateUser { name: String, private: bool },
    Delete { owner: String, name: String },
    Get { owner: String, name: String },
    CurrentUser,
}

/// Records every call and fails any operation touching a name in
/// `fail_names`.
#[derive(Default)]
struct FakeClient {
    login: String,
    fail_names: Vec<String>,
    calls: Mutex<Vec<Call>>,
}

impl FakeClient {
    fn new(login: &str) -> Self {
        Self {
            login: login.to_string(),
            ..Default::default()
        }
    }

    fn failing_on(mut self, name: &str) -> Self {
        self.fail_names.push(name.to_string());
        self
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn check(&self, name: &str) -> Result<(), github_client::Error> {
        if self.fail_names.iter().any(|n| n == name) {
            return Err(github_client::Error::InvalidResponse);
        }
        Ok(())
    }
}

fn fake_repository(owner: &str, name: &str) -> Repository {
    Repository::new(
        name.to_string(),
        format!("{owner}/{name}"),
        false,
        Some(format!("ssh://git@github.com/{owner}/{name}.git")),
    )
}

#[async_trait]
impl RepositoryClient for FakeClient {
    async fn create_org_repository(
        &self,
        org_name: &str,
        payload: &RepositoryCreatePayload,
    ) -> Result<Repository, github_client::Error> {
        self.record(Call::CreateOrg {
            org: org_name.to_string(),
            name: payload.name.clone(),
            private: payload.private.unwrap_or(false),
        });
        self.check(&payload.name)?;
        Ok(fake_repository(org_name, &payload.name))
    }

    async fn create_user_repository(
        &self,
        payload: &RepositoryCreatePayload,
    ) -> Result<Repository, github_client::Error> {
        self.record(Call::CreateUser {
            name: payload.name.clone(),
            private: payload.private.unwrap_or(false),
        });
        self.check(&payload.name)?;
        Ok(fake_repository(&self.login, &payload.name))
    }

    async fn delete_repository(&self, owner: &str, repo: &str) -> Result<(), github_client::Error> {
        self.record(Call::Delete {
            owner: owner.to_string(),
            name: repo.to_string(),
        });
        self.check(repo)
    }

    async fn get_repository(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Repository, github_client::Error> {
        self.record(Call::Get {
            owner: owner.to_string(),
            name: repo.to_string(),
        });
        self.check(repo)?;
        Ok(fake_repository(owner, repo))
    }

    async fn get_authenticated_user(&self) -> Result<User, github_client::Error> {
        self.record(Call::CurrentUser);
        Ok(User {
            id: 1,
            login: self.login.clone(),
        })
    }
}

/// Records clone URLs and fails any URL in `fail_urls`.
#[derive(Default)]
struct FakeRunner {
    fail_urls: Vec<String>,
    cloned: Mutex<Vec<String>>,
}

impl FakeRunner {
    fn failing_on(mut self, url: &str) -> Self {
        self.fail_urls.push(url.to_string());
        self
    }

    fn cloned(&self) -> Vec<String> {
        self.cloned.lock().unwrap().clone()
    }
}

impl CloneRunner for FakeRunner {
    fn clone_repository(&self, url: &str) -> Result<(), Error> {
        self.cloned.lock().unwrap().push(url.to_string());
        if self.fail_urls.iter().any(|u| u == url) {
            return Err(Error::CloneFailed {
                url: url.to_string(),
                reason: "git exited with exit status: 128".to_string(),
            });
        }
        Ok(())
    }
}

fn names(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

// --- parse_repository_names ---

#[test]
fn test_parse_splits_on_any_whitespace() {
    let parsed = parse_repository_names("alpha  beta\tgamma\n").unwrap();
    assert_eq!(parsed, names(&["alpha", "beta", "gamma"]));
}

#[test]
fn test_parse_keeps_duplicates_in_order() {
    let parsed = parse_repository_names("alpha alpha beta").unwrap();
    assert_eq!(parsed, names(&["alpha", "alpha", "beta"]));
}

#[test]
fn test_parse_rejects_empty_input() {
    assert!(matches!(
        parse_repository_names(""),
        Err(Error::EmptyRepositoryList)
    ));
}

#[test]
fn test_parse_rejects_all_whitespace_input() {
    assert!(matches!(
        parse_repository_names("  \t \n"),
        Err(Error::EmptyRepositoryList)
    ));
}

// --- create_repositories ---

#[tokio::test]
async fn test_create_targets_personal_namespace_in_input_order() {
    let client = FakeClient::new("octocat");
    let session = Session::new();

    let outcomes =
        create_repositories(&client, &session, &names(&["alpha", "beta"]), true).await;

    assert_eq!(
        client.calls(),
        vec![
            Call::CreateUser {
                name: "alpha".to_string(),
                private: true
            },
            Call::CreateUser {
                name: "beta".to_string(),
                private: true
            },
        ]
    );
    assert_eq!(outcomes.len(), 2);
    assert_eq!(outcomes[0].name, "alpha");
    assert_eq!(outcomes[1].name, "beta");
    assert!(outcomes.iter().all(|o| o.result.is_ok()));
}

#[tokio::test]
async fn test_create_targets_organization_when_scoped() {
    let client = FakeClient::new("octocat");
    let mut session = Session::new();
    session.set_organization("acme");

    let outcomes = create_repositories(&client, &session, &names(&["alpha"]), false).await;

    assert_eq!(
        client.calls(),
        vec![Call::CreateOrg {
            org: "acme".to_string(),
            name: "alpha".to_string(),
            private: false
        }]
    );
    assert!(outcomes[0].result.is_ok());
}

#[tokio::test]
async fn test_create_continues_past_failures_with_one_outcome_per_name() {
    let client = FakeClient::new("octocat").failing_on("alpha");
    let session = Session::new();

    let outcomes =
        create_repositories(&client, &session, &names(&["alpha", "beta"]), false).await;

    // Both names were attempted, in order, despite the first failing.
    assert_eq!(client.calls().len(), 2);
    assert_eq!(outcomes.len(), 2);
    assert!(outcomes[0].result.is_err());
    assert!(outcomes[1].result.is_ok());
}

#[tokio::test]
async fn test_create_never_consults_the_user_endpoint() {
    let client = FakeClient::new("octocat");
    let session = Session::new();

    create_repositories(&client, &session, &names(&["alpha"]), false).await;

    assert!(!client.calls().contains(&Call::CurrentUser));
}

// --- delete_repositories ---

#[tokio::test]
async fn test_delete_resolves_owner_from_authenticated_user() {
    let client = FakeClient::new("octocat");
    let session = Session::new();

    delete_repositories(&client, &session, &names(&["alpha", "beta"]))
        .await
        .unwrap();

    assert_eq!(
        client.calls(),
        vec![
            Call::CurrentUser,
            Call::Delete {
                owner: "octocat".to_string(),
                name: "alpha".to_string()
            },
            Call::Delete {
                owner: "octocat".to_string(),
                name: "beta".to_string()
            },
        ]
    );
}

#[tokio::test]
async fn test_delete_targets_organization_without_user_lookup() {
    let client = FakeClient::new("octocat");
    let mut session = Session::new();
    session.set_organization("acme");

    delete_repositories(&client, &session, &names(&["alpha"]))
        .await
        .unwrap();

    assert_eq!(
        client.calls(),
        vec![Call::Delete {
            owner: "acme".to_string(),
            name: "alpha".to_string()
        }]
    );
}

#[tokio::test]
async fn test_delete_stops_at_first_error() {
    let client = FakeClient::new("octocat").failing_on("alpha");
    let session = Session::new();

    let result = delete_repositories(&client, &session, &names(&["alpha", "beta"])).await;

    assert!(result.is_err());
    // No continuation: beta was never attempted.
    assert_eq!(
        client.calls(),
        vec![
            Call::CurrentUser,
            Call::Delete {
                owner: "octocat".to_string(),
                name: "alpha".to_string()
            },
        ]
    );
}

// --- initialize_repositories ---

#[tokio::test]
async fn test_initialize_clones_each_repository_via_ssh_source() {
    let client = FakeClient::new("octocat");
    let runner = FakeRunner::default();
    let session = Session::new();

    initialize_repositories(&client, &runner, &session, &names(&["alpha", "beta"]))
        .await
        .unwrap();

    assert_eq!(
        runner.cloned(),
        vec![
            "ssh://git@github.com/octocat/alpha.git".to_string(),
            "ssh://git@github.com/octocat/beta.git".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_initialize_aborts_remaining_batch_on_lookup_failure() {
    let client = FakeClient::new("octocat").failing_on("alpha");
    let runner = FakeRunner::default();
    let session = Session::new();

    let result =
        initialize_repositories(&client, &runner, &session, &names(&["alpha", "beta"])).await;

    assert!(result.is_err());
    // Nothing was cloned and beta was never looked up.
    assert!(runner.cloned().is_empty());
    assert_eq!(
        client.calls(),
        vec![
            Call::CurrentUser,
            Call::Get {
                owner: "octocat".to_string(),
                name: "alpha".to_string()
            },
        ]
    );
}

#[tokio::test]
async fn test_initialize_continues_past_clone_command_failure() {
    let client = FakeClient::new("octocat");
    let runner = FakeRunner::default().failing_on("ssh://git@github.com/octocat/alpha.git");
    let session = Session::new();

    let result =
        initialize_repositories(&client, &runner, &session, &names(&["alpha", "beta"])).await;

    // A failed clone is logged but does not fail the batch.
    assert!(result.is_ok());
    assert_eq!(runner.cloned().len(), 2);
}

#[tokio::test]
async fn test_initialize_uses_organization_scope_for_lookups() {
    let client = FakeClient::new("octocat");
    let runner = FakeRunner::default();
    let mut session = Session::new();
    session.set_organization("acme");

    initialize_repositories(&client, &runner, &session, &names(&["alpha"]))
        .await
        .unwrap();

    assert_eq!(
        client.calls(),
        vec![Call::Get {
            owner: "acme".to_string(),
            name: "alpha".to_string()
        }]
    );
}
