use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};
use serial_test::serial;

#[test]
#[serial]
fn given_fetch_timeout_below_min_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _timeout = EnvGuard::set("PORTAL_PROFILE_FETCH_TIMEOUT_MS", "50");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_fetch_timeout_over_max_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _timeout = EnvGuard::set("PORTAL_PROFILE_FETCH_TIMEOUT_MS", "120000");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_sign_in_timeout_below_fetch_timeout_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _fetch = EnvGuard::set("PORTAL_PROFILE_FETCH_TIMEOUT_MS", "5000");
    let _sign_in = EnvGuard::set("PORTAL_SIGN_IN_TIMEOUT_MS", "2000");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_valid_custom_timeouts_when_validate_then_ok() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _fetch = EnvGuard::set("PORTAL_PROFILE_FETCH_TIMEOUT_MS", "3000");
    let _sign_in = EnvGuard::set("PORTAL_SIGN_IN_TIMEOUT_MS", "10000");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}
