//! Configurations and scenes through JSON.

#![cfg(feature = "serde")]

use roomsim_params::{GeneratorConfig, Interval, ParameterGenerator, Scene};

mod test_support;
use test_support::usage_config;

#[test]
fn test_config_reads_like_the_reference_dictionary() {
    let json = r#"{
        "room": { "x": [3, 10], "y": [3, 8], "z": [2.5, 6] },
        "target": { "azimuth": [-180, 180], "elevation": [-30, 180] },
        "noise": { "number": 3, "azimuth": [-180, 180], "elevation": [-30, 180] }
    }"#;
    let config: GeneratorConfig = serde_json::from_str(json).expect("valid configuration");
    assert_eq!(config, usage_config());
    assert_eq!(config.room.z, Interval::new(2.5, 6.0));
}

#[test]
fn test_interval_is_a_pair() {
    let json = serde_json::to_string(&Interval::new(0.5, 7.5)).expect("serializable");
    assert_eq!(json, "[0.5,7.5]");
}

#[test]
fn test_missing_key_is_rejected() {
    let json = r#"{ "room": { "x": [3, 10], "y": [3, 8], "z": [2.5, 6] } }"#;
    assert!(serde_json::from_str::<GeneratorConfig>(json).is_err());
}

#[test]
fn test_scene_round_trips() {
    let mut generator = ParameterGenerator::new(10, 42, usage_config());
    let scene = generator
        .samples()
        .flatten()
        .next()
        .expect("at least one of ten samples succeeds");
    let json = serde_json::to_string(&scene).expect("serializable");
    let back: Scene = serde_json::from_str(&json).expect("deserializable");
    assert_eq!(back, scene);
}
