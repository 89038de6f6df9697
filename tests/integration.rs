// SPDX-License-Identifier: MPL-2.0
use iced_lingo::app::config::{self, Config, GeneralConfig, TranslatorConfig};
use iced_lingo::catalog::CatalogService;
use iced_lingo::i18n::fluent::I18n;
use iced_lingo::ui::theming::ThemeMode;
use iced_lingo::ui::translator;
use tempfile::tempdir;

#[test]
fn preferences_survive_a_simulated_restart() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let base = dir.path().to_path_buf();

    // First session: the user picks the light theme and a language pair.
    let session_one = Config {
        general: GeneralConfig {
            language: None,
            theme_mode: ThemeMode::Light,
        },
        translator: TranslatorConfig {
            source_language: Some("es".to_string()),
            target_language: Some("de".to_string()),
        },
    };
    config::save_with_override(&session_one, Some(base.clone()))
        .expect("Failed to write config file");

    // Second session: the same values come back.
    let (session_two, warning) = config::load_with_override(Some(base));
    assert!(warning.is_none());
    assert_eq!(session_two.general.theme_mode, ThemeMode::Light);
    assert_eq!(session_two.source_language(), "es");
    assert_eq!(session_two.target_language(), "de");
}

#[test]
fn ui_locale_follows_the_config_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let english = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    config::save_to_path(&english, &config_path).expect("Failed to write initial config");

    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    let french = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    config::save_to_path(&french, &config_path).expect("Failed to write french config");

    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
}

#[test]
fn bundled_catalog_feeds_the_translator_selection_correction() {
    // Load the real bundled catalog the way the startup task does.
    let catalog = CatalogService::load();
    assert!(catalog.is_loaded());
    assert!(!catalog.targets().is_empty());

    // A stale persisted selection gets corrected against the fresh lists.
    let mut screen = translator::State::new("auto".to_string(), "not-a-language".to_string());
    screen.apply_catalog(catalog.supported(), catalog.targets());

    assert_eq!(screen.source_code, "auto");
    assert_eq!(
        screen.target_code,
        catalog.targets()[0].code(),
        "invalid target should fall back to the first target entry"
    );
}

#[test]
fn fallback_catalog_still_supports_the_request_flow() {
    let mut catalog = CatalogService::new();
    catalog.load_once_with(|| Some("definitely not json".to_string()));

    let mut screen = translator::State::new("auto".to_string(), "xx".to_string());
    screen.apply_catalog(catalog.supported(), catalog.targets());

    // Even on the degraded catalog the screen ends up with a usable pair.
    assert_eq!(screen.source_code, "auto");
    assert_eq!(screen.target_code, "en");

    screen.input = "hello".to_string();
    let seq = screen.begin_request();
    assert!(screen.is_loading);

    let settlement = screen.settle(seq, Ok("hallo".to_string()));
    assert_eq!(settlement, translator::Settlement::Success);
    assert!(!screen.is_loading);
}
