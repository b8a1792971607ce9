//! Unit tests for the menu action table.

use super::*;

#[test]
fn test_menu_offers_six_actions_in_fixed_order() {
    assert_eq!(MenuAction::ALL.len(), 6);
    assert_eq!(
        MenuAction::ALL,
        [
            MenuAction::Create,
            MenuAction::Delete,
            MenuAction::Initialize,
            MenuAction::SetSecret,
            MenuAction::SetOrganization,
            MenuAction::Exit,
        ]
    );
}

#[test]
fn test_menu_labels_match_display_order() {
    let labels: Vec<&str> = MenuAction::ALL.iter().map(|a| a.label()).collect();
    assert_eq!(
        labels,
        vec![
            "Create repositories",
            "Delete repositories",
            "Initialize (clone) repositories",
            "Set GitHub secret",
            "Set organization",
            "Exit",
        ]
    );
}

#[test]
fn test_exit_is_the_last_action() {
    assert_eq!(*MenuAction::ALL.last().unwrap(), MenuAction::Exit);
}
