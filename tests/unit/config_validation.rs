//! Unit tests for configuration validation.

use blinds_motion::config::{validate_config, SystemConfig};
use blinds_motion::error::{ConfigError, Error};

/// Test validation of a valid configuration.
#[test]
fn test_valid_config_passes_validation() {
    let toml_str = r#"
[blinds.office]
name = "Office"
up_pin = 5
down_pin = 6
stop_pin = 13
preset_position = 50
motion_time_ms = 20000
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert!(validate_config(&config).is_ok());
}

/// Test validation fails when two relays share a pin.
#[test]
fn test_shared_pin_rejected() {
    let toml_str = r#"
[blinds.office]
name = "Office"
up_pin = 5
down_pin = 6
stop_pin = 6
preset_position = 50
motion_time_ms = 20000
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let result = validate_config(&config);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::DuplicatePin { pin: 6, .. }))
    ));
}

/// Test validation fails for a travel time below one millisecond per percent.
#[test]
fn test_motion_time_too_short() {
    let toml_str = r#"
[blinds.office]
name = "Office"
up_pin = 5
down_pin = 6
stop_pin = 13
preset_position = 50
motion_time_ms = 50
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let result = validate_config(&config);
    assert_eq!(
        result,
        Err(Error::Config(ConfigError::MotionTimeTooShort(50)))
    );
}

/// Test validation fails for a zero pulse duration.
#[test]
fn test_zero_pulse_rejected() {
    let toml_str = r#"
[blinds.office]
name = "Office"
up_pin = 5
down_pin = 6
stop_pin = 13
preset_position = 50
motion_time_ms = 20000
pulse_ms = 0
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert!(validate_config(&config).is_err());
}

/// Test that empty configuration is valid.
#[test]
fn test_empty_config_is_valid() {
    let config = SystemConfig::default();
    assert!(validate_config(&config).is_ok());
}
