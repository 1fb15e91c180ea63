//! Unit tests for TOML configuration parsing.

use blinds_motion::config::{BlindTiming, Millis, Percent, SystemConfig};

/// Test parsing a valid blind configuration from TOML.
#[test]
fn test_parse_blind_config() {
    let toml_str = r#"
[blinds.bedroom]
name = "Bedroom"
up_pin = 17
down_pin = 27
stop_pin = 22
preset_position = 40
motion_time_ms = 15000
motion_lag_ms = 300
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let blind = config.blind("bedroom").expect("Blind not found");

    assert_eq!(blind.name.as_str(), "Bedroom");
    assert_eq!(blind.up_pin, 17);
    assert_eq!(blind.down_pin, 27);
    assert_eq!(blind.stop_pin, 22);
    assert_eq!(blind.preset_position.value(), 40);
    assert_eq!(blind.motion_time, Millis(15_000));
    assert_eq!(blind.motion_lag, Millis(300));
}

/// Test timing derivation from parsed configuration.
#[test]
fn test_timing_from_config() {
    let toml_str = r#"
[blinds.bedroom]
name = "Bedroom"
up_pin = 17
down_pin = 27
stop_pin = 22
preset_position = 25
motion_time_ms = 15000
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let timing = BlindTiming::from_config(config.blind("bedroom").unwrap());

    assert_eq!(timing.tick_period, Millis(150));
    assert_eq!(timing.motion_lag, Millis::ZERO);
    assert_eq!(timing.preset, Percent::new(25).unwrap());
    assert!(!timing.has_motion_lag());
}

/// Test parsing several blinds in one file.
#[test]
fn test_parse_multiple_blinds() {
    let toml_str = r#"
[blinds.east]
name = "East"
up_pin = 2
down_pin = 3
stop_pin = 4
preset_position = 50
motion_time_ms = 9000

[blinds.west]
name = "West"
up_pin = 5
down_pin = 6
stop_pin = 7
preset_position = 20
motion_time_ms = 11000
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let names: Vec<_> = config.blind_names().collect();

    assert_eq!(names, vec!["east", "west"]);
    assert!(config.blind("north").is_none());
}

/// Test that out-of-range presets are rejected during parsing.
#[test]
fn test_invalid_preset_rejected() {
    let toml_str = r#"
[blinds.bad]
name = "Bad"
up_pin = 2
down_pin = 3
stop_pin = 4
preset_position = 101
motion_time_ms = 9000
"#;

    let result: Result<SystemConfig, _> = toml::from_str(toml_str);
    assert!(result.is_err(), "Should reject preset above 100");
}

/// Test that a missing required field is rejected.
#[test]
fn test_missing_stop_pin_rejected() {
    let toml_str = r#"
[blinds.bad]
name = "Bad"
up_pin = 2
down_pin = 3
preset_position = 50
motion_time_ms = 9000
"#;

    let result: Result<SystemConfig, _> = toml::from_str(toml_str);
    assert!(result.is_err(), "Should require stop_pin");
}
