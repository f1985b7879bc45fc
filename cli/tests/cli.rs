//! geophase CLI Integration Tests
//!
//! ## Exit Codes
//! - 0: Success
//! - 1: Lookup found nothing, or the command failed

use std::fs;

use anyhow::Result;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::Value as JsonValue;

fn geophase() -> Result<assert_cmd::Command> {
    let mut cmd = assert_cmd::Command::cargo_bin("geophase")?;
    cmd.env_remove("GEOPHASE_CONFIG");
    cmd.env_remove("RUST_LOG");
    Ok(cmd)
}

#[test]
fn interfaces_prints_both_tables() -> Result<()> {
    geophase()?
        .arg("interfaces")
        .assert()
        .success()
        .stdout(predicate::str::contains("Core-Mantle Boundary"))
        .stdout(predicate::str::contains("SEDIMENTS"))
        .stdout(predicate::str::contains("Not an Interface").not());
    Ok(())
}

#[test]
fn resolve_alias() -> Result<()> {
    geophase()?
        .args(["resolve", "outer_core"])
        .assert()
        .success()
        .stdout("CMB\n");
    Ok(())
}

#[test]
fn resolve_unknown_exits_one() -> Result<()> {
    geophase()?
        .args(["resolve", "lithosphere"])
        .assert()
        .code(1)
        .stdout("not found\n");
    Ok(())
}

#[test]
fn resolve_json() -> Result<()> {
    let output = geophase()?.args(["--json", "resolve", "mantle"]).output()?;
    assert!(output.status.success());
    let value: JsonValue = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["name"], "MOHO");
    assert_eq!(value["group"], "MANTLE");
    assert_eq!(value["ordinal"], 5);
    Ok(())
}

#[test]
fn neighbor_walks_in_both_directions() -> Result<()> {
    geophase()?
        .args(["neighbor", "M410", "--defined", "M660,MANTLE,CRUST"])
        .assert()
        .success()
        .stdout("MOHO\n");
    geophase()?
        .args(["neighbor", "M410", "--defined", "M660,MOHO", "--direction", "down"])
        .assert()
        .success()
        .stdout("M660\n");
    geophase()?
        .args(["neighbor", "MOHO", "--defined", "SURFACE"])
        .assert()
        .code(1)
        .stdout("not found\n");
    Ok(())
}

#[test]
fn neighbor_warns_about_unknown_defined_names() -> Result<()> {
    geophase()?
        .args(["neighbor", "M410", "--defined", "LITHOSPHERE,MOHO"])
        .assert()
        .success()
        .stdout("MOHO\n")
        .stderr(predicate::str::contains("LITHOSPHERE"))
        .stderr(predicate::str::contains(
            "ignoring defined name that is not an EarthInterface or alias",
        ));
    Ok(())
}

#[test]
fn neighbor_rejects_unknown_start() -> Result<()> {
    geophase()?
        .args(["neighbor", "MANTLE", "--defined", "MOHO"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid EarthInterface name"));
    Ok(())
}

#[test]
fn phase_shows_descriptor() -> Result<()> {
    geophase()?
        .args(["phase", "PcS"])
        .assert()
        .success()
        .stdout(predicate::str::contains("P -> S"))
        .stdout(predicate::str::contains("PSLOWNESS, CMB, SSLOWNESS"));
    geophase()?
        .args(["phase", "pcs"])
        .assert()
        .code(1);
    Ok(())
}

#[test]
fn phases_filter_by_wave_type() -> Result<()> {
    let output = geophase()?
        .args(["--json", "phases", "--wave-type", "S"])
        .output()?;
    assert!(output.status.success());
    let value: JsonValue = serde_json::from_slice(&output.stdout)?;
    let names: Vec<&str> = value
        .as_array()
        .into_iter()
        .flatten()
        .filter_map(|phase| phase["name"].as_str())
        .collect();
    assert!(names.contains(&"Sn"));
    assert!(!names.contains(&"Pn"));
    Ok(())
}

#[test]
fn classify_reflection() -> Result<()> {
    geophase()?
        .args([
            "classify",
            "--ray-type",
            "REFLECTION",
            "--depth",
            "650",
            "--distance",
            "30",
            "--travel-time",
            "400",
            "--wave-type",
            "S",
        ])
        .assert()
        .success()
        .stdout("S660S\n");
    Ok(())
}

#[test]
fn classify_not_available_depth_and_null() -> Result<()> {
    geophase()?
        .args([
            "classify",
            "--ray-type",
            "refraction",
            "--depth",
            "-999999",
            "--distance",
            "12",
            "--travel-time",
            "180",
            "--wave-type",
            "P",
        ])
        .assert()
        .success()
        .stdout("Pn\n");
    geophase()?
        .args([
            "classify",
            "--ray-type",
            "INVALID",
            "--distance",
            "12",
            "--travel-time",
            "180",
            "--wave-type",
            "P",
        ])
        .assert()
        .success()
        .stdout("NULL\n");
    Ok(())
}

#[test]
fn classify_honours_config_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("geophase.toml");
    fs::write(&path, "[classifier]\nrefraction_distance_deg = 10.0\n")?;
    geophase()?
        .arg("--config")
        .arg(&path)
        .args([
            "classify",
            "--ray-type",
            "REFRACTION",
            "--distance",
            "12",
            "--travel-time",
            "180",
            "--wave-type",
            "P",
        ])
        .assert()
        .success()
        .stdout("P\n");
    Ok(())
}

#[test]
fn remap_uses_layer_map() -> Result<()> {
    geophase()?
        .args([
            "remap",
            "Pn",
            "--layers",
            "CMB,LOWER_MANTLE,MANTLE,CRUST",
            "--layer-map",
            "LOWER_MANTLE M660",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "BOTTOM at M410 => MOHO (nearest_above_in_group)",
        ));
    Ok(())
}

#[test]
fn remap_reports_unsupported_models() -> Result<()> {
    geophase()?
        .args(["remap", "P410P", "--layers", "CMB,MOHO,SURFACE"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot remap P410P"));
    Ok(())
}
