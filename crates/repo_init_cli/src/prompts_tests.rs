//! Unit tests for the prompt message builders and secret flow.

use super::*;
use repo_init_core::secret::SecretStore;
use tempfile::tempdir;

fn names(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn test_confirm_message_names_every_repository() {
    let message = confirm_message(&names(&["alpha", "beta"]), None, false);
    assert_eq!(
        message,
        "This will change the following repositories: alpha, beta. Continue?"
    );
}

#[test]
fn test_confirm_message_names_the_organization_when_scoped() {
    let message = confirm_message(&names(&["alpha"]), Some("acme"), false);
    assert_eq!(
        message,
        "This will change the following repositories in the \"acme\" organization: alpha. Continue?"
    );
}

#[test]
fn test_confirm_message_escalates_on_second_pass() {
    let message = confirm_message(&names(&["alpha", "beta"]), Some("acme"), true);
    assert_eq!(
        message,
        "Asking again! Are you really sure you want to change these repositories: alpha, beta"
    );
}

#[test]
fn test_get_or_prompt_uses_cached_secret_without_prompting() {
    let dir = tempdir().unwrap();
    let store = SecretStore::at_path(dir.path().join("secret.txt"));
    store.save("ghp_cached").unwrap();

    // No terminal is attached in tests; reaching the prompt would fail, so
    // a successful return proves the cache was used.
    let secret = get_or_prompt_secret(&store).unwrap();
    assert_eq!(secret, "ghp_cached");
}
