// SPDX-License-Identifier: MPL-2.0
use iced_alert::alert::{AnyLocalizedError, Localize};
use iced_alert::config::{self, Config};
use iced_alert::i18n::fluent::I18n;
use iced_alert::ui::theming::ThemeMode;
use tempfile::tempdir;

#[test]
fn language_change_via_config_switches_translations() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        language: Some("en-US".to_string()),
        theme: Some(ThemeMode::System),
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("alert-fallback-message"), "Try again later.");

    // 2. Change config to fr
    let french_config = Config {
        language: Some("fr".to_string()),
        theme: Some(ThemeMode::System),
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("alert-fallback-message"), "Réessayez plus tard.");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn cli_language_overrides_config_language() {
    let config = Config {
        language: Some("fr".to_string()),
        theme: None,
    };

    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn failed_config_load_normalizes_into_a_presentable_error() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let missing = dir.path().join("missing").join("settings.toml");

    let error = config::load_from_path(&missing).expect_err("load of missing file should fail");

    let localized = error.to_localized_with(|error| {
        Some(
            AnyLocalizedError::new()
                .with_description("Settings could not be loaded")
                .with_failure_reason(error.to_string())
                .with_recovery_suggestion("Check the configuration directory, then try again."),
        )
    });

    assert_eq!(
        localized.error_description.as_deref(),
        Some("Settings could not be loaded")
    );
    assert!(localized
        .failure_reason
        .as_deref()
        .is_some_and(|reason| reason.starts_with("I/O Error:")));
    assert_eq!(
        localized.recovery_suggestion.as_deref(),
        Some("Check the configuration directory, then try again.")
    );
}

#[test]
fn unmapped_config_error_keeps_the_generic_representation() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let missing = dir.path().join("missing").join("settings.toml");

    let error = config::load_from_path(&missing).expect_err("load of missing file should fail");
    let localized = error.to_localized();

    assert!(localized
        .error_description
        .as_deref()
        .is_some_and(|description| description.starts_with("I/O Error:")));
    assert!(localized.recovery_suggestion.is_none());
    assert!(localized.help_anchor.is_none());
}
