//! Tests for the centralized configuration constants.

use super::*;

/// Ensures the default options are strict and can hold every command.
///
/// # Examples
/// ```
/// use config::constants::DecoderConfig;
/// let cfg = DecoderConfig::default();
/// assert!(cfg.max_arguments >= 8);
/// ```
#[test]
fn default_config_is_valid() {
    let cfg = DecoderConfig::default();
    assert!(cfg.strict);
    assert!(cfg.max_arguments >= MIN_ARGUMENT_CAP);
}

/// Validates the constructor rejects an argument cap below eight.
#[test]
fn new_validates_inputs() {
    assert_eq!(
        DecoderConfig::new(true, 7).unwrap_err(),
        ConfigError::ArgumentCapTooSmall(7)
    );
    assert!(DecoderConfig::new(false, 8).is_ok());
}

#[test]
fn config_error_display_names_limit() {
    let message = ConfigError::ArgumentCapTooSmall(2).to_string();
    assert!(message.contains(">= 8"));
    assert!(message.contains('2'));
}
