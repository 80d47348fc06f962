// SPDX-License-Identifier: MPL-2.0
//! Integration tests for configuration and localization working together.

use std::collections::BTreeSet;
use submission_lens::config::{self, ApiConfig, Config, GeneralConfig};
use submission_lens::i18n::fluent::I18n;
use tempfile::tempdir;

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let english = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
        },
        ..Config::default()
    };
    config::save_to_path(&english, &path).expect("Failed to write initial config file");

    let loaded = config::load_from_path(&path).expect("Failed to load initial config");
    let i18n_en = I18n::new(None, None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    let french = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
        },
        ..Config::default()
    };
    config::save_to_path(&french, &path).expect("Failed to write french config file");

    let loaded = config::load_from_path(&path).expect("Failed to load french config");
    let i18n_fr = I18n::new(None, None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
}

#[test]
fn cli_language_overrides_the_config_file() {
    let config = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
        },
        ..Config::default()
    };

    let i18n = I18n::new(Some("en-US".to_string()), None, &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn credentials_survive_a_save_and_load_round_trip() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let config = Config {
        api: ApiConfig {
            domain: Some("https://school.instructure.com".to_string()),
            access_token: Some("secret-token".to_string()),
        },
        ..Config::default()
    };
    config::save_to_path(&config, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(
        loaded.api.domain.as_deref(),
        Some("https://school.instructure.com")
    );
    assert_eq!(loaded.api.access_token.as_deref(), Some("secret-token"));
}

/// Extracts the message keys from a Fluent catalog on disk.
fn catalog_keys(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .filter_map(|line| {
            let (key, _) = line.split_once('=')?;
            let key = key.trim();
            let mut chars = key.chars();
            let starts_lower = chars.next().is_some_and(|c| c.is_ascii_lowercase());
            let valid = key
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
            (starts_lower && valid).then(|| key.to_string())
        })
        .collect()
}

#[test]
fn all_catalogs_carry_the_same_keys() {
    let english = std::fs::read_to_string("assets/i18n/en-US.ftl").expect("read en-US catalog");
    let french = std::fs::read_to_string("assets/i18n/fr.ftl").expect("read fr catalog");

    let english_keys = catalog_keys(&english);
    let french_keys = catalog_keys(&french);

    let missing_in_french: Vec<_> = english_keys.difference(&french_keys).collect();
    let missing_in_english: Vec<_> = french_keys.difference(&english_keys).collect();

    assert!(
        missing_in_french.is_empty(),
        "keys missing from fr.ftl: {missing_in_french:?}"
    );
    assert!(
        missing_in_english.is_empty(),
        "keys missing from en-US.ftl: {missing_in_english:?}"
    );
}

#[test]
fn every_catalog_key_resolves_at_runtime() {
    let english = std::fs::read_to_string("assets/i18n/en-US.ftl").expect("read en-US catalog");
    let keys = catalog_keys(&english);
    assert!(!keys.is_empty(), "catalog should not be empty");

    for lang in ["en-US", "fr"] {
        let i18n = I18n::new(Some(lang.to_string()), None, &Config::default());
        for key in &keys {
            // Keys with mandatory arguments still resolve through tr_with_args.
            let direct = i18n.tr(key);
            let with_args = i18n.tr_with_args(
                key,
                &[
                    ("status", "503"),
                    ("count", "2"),
                    ("grade", "B+"),
                    ("points", "3"),
                    ("possible", "10"),
                ],
            );
            assert!(
                !direct.starts_with("MISSING:") || !with_args.starts_with("MISSING:"),
                "key {key:?} does not resolve in {lang}"
            );
        }
    }
}
