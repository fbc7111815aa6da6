// tests/config.rs

use life_in_parallel::{ExperimentConfig, InitialCondition, LifeError, StepMethod};

#[test]
fn missing_fields_take_defaults() {
    let cfg = ExperimentConfig::from_json_str(r#"{ "size": 64, "seed": 9 }"#).unwrap();
    assert_eq!(cfg.size, 64);
    assert_eq!(cfg.seed, Some(9));
    assert_eq!(cfg.max_sweeps, 1000);
    assert_eq!(cfg.initial, InitialCondition::Random);
    assert_eq!(cfg.step_method, StepMethod::Direct);
}

#[test]
fn enums_are_lowercase_strings() {
    let cfg = ExperimentConfig::from_json_str(
        r#"{ "initial": "glider", "step_method": "shifted_sum", "size": 30 }"#,
    )
    .unwrap();
    assert_eq!(cfg.initial, InitialCondition::Glider);
    assert_eq!(cfg.step_method, StepMethod::ShiftedSum);

    let json = serde_json::to_string(&cfg).unwrap();
    assert_eq!(ExperimentConfig::from_json_str(&json).unwrap(), cfg);
}

#[test]
fn bad_values_are_invalid_config() {
    for text in [
        r#"{ "size": 0 }"#,
        r#"{ "max_sweeps": 0 }"#,
        r#"{ "trials": 0 }"#,
        r#"{ "bin_width": 0 }"#,
        r#"{ "initial": "glider", "size": 4 }"#,
    ] {
        assert!(
            matches!(ExperimentConfig::from_json_str(text), Err(LifeError::InvalidConfig(_))),
            "{text}"
        );
    }
}

#[test]
fn malformed_json_and_unknown_modes_are_parse_errors() {
    assert!(matches!(ExperimentConfig::from_json_str("{ size: 3"), Err(LifeError::Json(_))));
    assert!(matches!(ExperimentConfig::from_json_str(r#"{ "initial": "pulsar" }"#), Err(LifeError::Json(_))));
    assert!(matches!(ExperimentConfig::from_json_str(r#"{ "sweeps": 10 }"#), Err(LifeError::Json(_))));
}

#[test]
fn missing_file_is_io_error() {
    let err = ExperimentConfig::from_path("/nonexistent/life_in_parallel.json").unwrap_err();
    assert!(matches!(err, LifeError::Io(_)));
}
