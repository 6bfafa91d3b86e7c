use crate::Config;
use crate::tests::setup_config_dir;

use googletest::assert_that;
use googletest::prelude::{anything, ok};
use serial_test::serial;

#[test]
#[serial]
fn given_no_config_file_when_load_then_defaults_apply() {
    // Given
    let (_temp, _guard) = setup_config_dir();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_eq!(config.reconciler.profile_fetch_timeout_ms, 5_000);
    assert_eq!(config.reconciler.sign_in_timeout_ms, 15_000);
    assert_eq!(*config.logging.level, log::LevelFilter::Info);
    assert!(config.logging.colored);
    assert!(config.logging.file.is_none());
}

#[test]
#[serial]
fn given_defaults_when_validate_then_ok() {
    // Given
    let (_temp, _guard) = setup_config_dir();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), ok(anything()));
}

#[test]
#[serial]
fn given_toml_file_when_load_then_values_from_file() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
[reconciler]
profile_fetch_timeout_ms = 2500

[logging]
level = "debug"
colored = false
"#,
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_eq!(config.reconciler.profile_fetch_timeout_ms, 2_500);
    // Untouched sections keep defaults
    assert_eq!(config.reconciler.sign_in_timeout_ms, 15_000);
    assert_eq!(*config.logging.level, log::LevelFilter::Debug);
    assert!(!config.logging.colored);
}
