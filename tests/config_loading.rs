//! TOML configuration parsing and validation.

use std::io::Write;

use plotter_motion::config::{load_config, parse_config, Microseconds, PlotterConfig};
use plotter_motion::error::ConfigError;
use plotter_motion::Error;

/// Test that the homing section alone is enough and the rest defaults.
#[test]
fn test_defaults_fill_optional_sections() {
    let toml_str = r#"
[homing]
over_travel_steps = 100000
back_off_x_steps = 40000
back_off_y_steps = 10000
slow_step_delay_us = 50
"#;

    let config = parse_config(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.motion.step_delay, Microseconds(100));
    assert_eq!(config.driver.run_current_percent.value(), 20);
    assert_eq!(config.driver.hold_current_percent.value(), 10);
    assert_eq!(config.driver.hold_delay_percent.value(), 10);
    assert!(config.driver.power_saving);
    assert_eq!(config.driver.power_level, 120);
    assert!(!config.axes.x.invert_direction);
    assert_eq!(config, PlotterConfig::reference_rig());
}

/// Test that homing calibration has no silent defaults.
#[test]
fn test_homing_fields_are_required() {
    let toml_str = r#"
[homing]
over_travel_steps = 100000
back_off_x_steps = 40000
slow_step_delay_us = 50
"#;

    let result = parse_config(toml_str);
    assert!(
        matches!(result, Err(Error::Config(ConfigError::ParseError(_)))),
        "Missing back_off_y_steps should be rejected"
    );
}

/// Test that a back-off longer than the over-travel fails validation.
#[test]
fn test_over_travel_must_cover_back_off() {
    let toml_str = r#"
[homing]
over_travel_steps = 1000
back_off_x_steps = 4000
back_off_y_steps = 100
slow_step_delay_us = 50
"#;

    let result = parse_config(toml_str);
    assert_eq!(
        result,
        Err(Error::Config(ConfigError::OverTravelTooShort {
            over_travel: 1000,
            back_off: 4000,
        }))
    );
}

/// Test that a zero step delay is rejected.
#[test]
fn test_zero_step_delay_rejected() {
    let toml_str = r#"
[motion]
step_delay_us = 0

[homing]
over_travel_steps = 100
back_off_x_steps = 10
back_off_y_steps = 10
slow_step_delay_us = 50
"#;

    assert!(matches!(
        parse_config(toml_str),
        Err(Error::Config(ConfigError::InvalidStepDelay(0)))
    ));
}

/// Test loading from a file on disk.
#[test]
fn test_load_config_from_file() {
    let path = std::env::temp_dir().join(format!("plotter-motion-{}.toml", std::process::id()));
    {
        let mut file = std::fs::File::create(&path).expect("create temp config");
        writeln!(
            file,
            "[homing]\nover_travel_steps = 500\nback_off_x_steps = 100\nback_off_y_steps = 50\nslow_step_delay_us = 25"
        )
        .expect("write temp config");
    }

    let config = load_config(&path).expect("config should load");
    let _ = std::fs::remove_file(&path);

    assert_eq!(config.homing.over_travel_steps, 500);
    assert_eq!(config.homing.slow_step_delay, Microseconds(25));
}
