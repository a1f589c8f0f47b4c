#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use seatrs::{MenuAction, SettingsAction, get_menu_options, get_settings_options};

#[test]
fn test_menu_options_count() {
    assert_eq!(get_menu_options().len(), 6);
    assert_eq!(get_settings_options().len(), 4);
}

#[test]
fn test_menu_options_labels_are_unique() {
    let options = get_menu_options();
    let labels: Vec<_> = options.iter().map(|o| o.label).collect();

    let mut unique_labels = labels.clone();
    unique_labels.sort_unstable();
    unique_labels.dedup();
    assert_eq!(labels.len(), unique_labels.len());
}

#[test]
fn test_menu_keys_are_unique_and_contiguous() {
    for mut keys in [
        get_menu_options().iter().map(|o| o.key).collect::<Vec<_>>(),
        get_settings_options().iter().map(|o| o.key).collect(),
    ] {
        keys.sort_unstable();
        let expected: Vec<i64> = (0..).take(keys.len()).collect();
        assert_eq!(keys, expected);
    }
}

#[test]
fn test_menu_options_labels_not_empty() {
    for option in &get_menu_options() {
        assert!(!option.label.is_empty());
    }
    for option in &get_settings_options() {
        assert!(!option.label.is_empty());
    }
}

#[test]
fn test_settings_is_listed_last_under_zero() {
    let options = get_menu_options();
    let last = options.last().unwrap();

    assert_eq!(last.action, MenuAction::Settings);
    assert_eq!(last.key, 0);
    assert_eq!(options[0].action, MenuAction::ShowLayout);
}

#[test]
fn test_settings_zero_returns() {
    let found = get_settings_options()
        .into_iter()
        .find(|o| o.key == 0)
        .map(|o| o.action);

    assert_eq!(found, Some(SettingsAction::Return));
}

#[test]
fn test_menu_lookup_unknown_key_returns_none() {
    let found = get_menu_options()
        .into_iter()
        .find(|o| o.key == 9)
        .map(|o| o.action);

    assert_eq!(found, None);
}
