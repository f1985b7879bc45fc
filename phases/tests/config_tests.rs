//! Config file loading.

use std::fs;

use geophase_phases::PhaseConfig;
use geophase_phases::PhaseError;
use pretty_assertions::assert_eq;

#[test]
fn loads_thresholds_from_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("geophase.toml");
    fs::write(
        &path,
        "[classifier]\nreflection_travel_time_s = 450.0\ndiffraction_far_distance_deg = 90.0\n",
    )
    .expect("write config");

    let cfg = PhaseConfig::load_from_path(&path).expect("load config");
    assert_eq!(cfg.classifier.reflection_travel_time_s, 450.0);
    assert_eq!(cfg.classifier.diffraction_far_distance_deg, 90.0);
    assert_eq!(cfg.classifier.refraction_depth_km, 409.9);
}

#[test]
fn missing_file_is_a_config_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = PhaseConfig::load_from_path(&dir.path().join("absent.toml"));
    assert!(matches!(err, Err(PhaseError::Config { source: Some(_), .. })));
}

#[test]
fn invalid_toml_is_a_config_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[classifier\n").expect("write config");
    let err = PhaseConfig::load_from_path(&path).expect_err("should fail");
    assert!(err.to_string().starts_with("config error"));
}

#[test]
fn inverted_diffraction_distances_are_rejected() {
    let err = PhaseConfig::parse(
        "[classifier]\ndiffraction_near_distance_deg = 90.0\ndiffraction_far_distance_deg = 80.0\n",
    );
    assert!(matches!(err, Err(PhaseError::Config { source: None, .. })));
}
