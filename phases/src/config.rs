//! Classifier configuration loading
//!
//! Loads `[classifier]` thresholds from a TOML file named by
//! `GEOPHASE_CONFIG`. Every field defaults to the standard threshold, so an
//! empty file and a missing file both classify identically.

use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

use crate::error::PhaseError;
use crate::error::Result;

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PhaseConfig {
    /// Depth, distance and time thresholds used by the classifier
    #[serde(default)]
    pub classifier: ClassifierThresholds,
}

/// Thresholds separating phase names. Depths in km, distances in degrees,
/// times in seconds.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ClassifierThresholds {
    /// Refracted rays turning shallower than this are Pn/Sn
    #[serde(default = "default_refraction_depth_km")]
    pub refraction_depth_km: f64,

    /// Refracted rays without a turning depth closer than this are Pn/Sn
    #[serde(default = "default_refraction_distance_deg")]
    pub refraction_distance_deg: f64,

    /// Reflections without a depth faster than this are PmP/SmS, else PcP/ScS
    #[serde(default = "default_reflection_travel_time_s")]
    pub reflection_travel_time_s: f64,

    #[serde(default = "default_reflection_moho_max_km")]
    pub reflection_moho_max_km: f64,

    #[serde(default = "default_reflection_m210_max_km")]
    pub reflection_m210_max_km: f64,

    #[serde(default = "default_reflection_m410_max_km")]
    pub reflection_m410_max_km: f64,

    #[serde(default = "default_reflection_m660_max_km")]
    pub reflection_m660_max_km: f64,

    /// Reflections deeper than this come off the inner core boundary
    #[serde(default = "default_reflection_cmb_max_km")]
    pub reflection_cmb_max_km: f64,

    #[serde(default = "default_diffraction_near_distance_deg")]
    pub diffraction_near_distance_deg: f64,

    #[serde(default = "default_diffraction_far_distance_deg")]
    pub diffraction_far_distance_deg: f64,

    #[serde(default = "default_diffraction_mantle_depth_km")]
    pub diffraction_mantle_depth_km: f64,

    #[serde(default = "default_diffraction_core_depth_km")]
    pub diffraction_core_depth_km: f64,
}

fn default_refraction_depth_km() -> f64 {
    409.9
}
fn default_refraction_distance_deg() -> f64 {
    20.0
}
fn default_reflection_travel_time_s() -> f64 {
    500.0
}
fn default_reflection_moho_max_km() -> f64 {
    100.0
}
fn default_reflection_m210_max_km() -> f64 {
    300.0
}
fn default_reflection_m410_max_km() -> f64 {
    500.0
}
fn default_reflection_m660_max_km() -> f64 {
    700.0
}
fn default_reflection_cmb_max_km() -> f64 {
    3000.0
}
fn default_diffraction_near_distance_deg() -> f64 {
    25.0
}
fn default_diffraction_far_distance_deg() -> f64 {
    85.0
}
fn default_diffraction_mantle_depth_km() -> f64 {
    410.1
}
fn default_diffraction_core_depth_km() -> f64 {
    2800.0
}

impl Default for ClassifierThresholds {
    fn default() -> Self {
        Self {
            refraction_depth_km: default_refraction_depth_km(),
            refraction_distance_deg: default_refraction_distance_deg(),
            reflection_travel_time_s: default_reflection_travel_time_s(),
            reflection_moho_max_km: default_reflection_moho_max_km(),
            reflection_m210_max_km: default_reflection_m210_max_km(),
            reflection_m410_max_km: default_reflection_m410_max_km(),
            reflection_m660_max_km: default_reflection_m660_max_km(),
            reflection_cmb_max_km: default_reflection_cmb_max_km(),
            diffraction_near_distance_deg: default_diffraction_near_distance_deg(),
            diffraction_far_distance_deg: default_diffraction_far_distance_deg(),
            diffraction_mantle_depth_km: default_diffraction_mantle_depth_km(),
            diffraction_core_depth_km: default_diffraction_core_depth_km(),
        }
    }
}

impl ClassifierThresholds {
    fn named_values(&self) -> [(&'static str, f64); 12] {
        [
            ("refraction_depth_km", self.refraction_depth_km),
            ("refraction_distance_deg", self.refraction_distance_deg),
            ("reflection_travel_time_s", self.reflection_travel_time_s),
            ("reflection_moho_max_km", self.reflection_moho_max_km),
            ("reflection_m210_max_km", self.reflection_m210_max_km),
            ("reflection_m410_max_km", self.reflection_m410_max_km),
            ("reflection_m660_max_km", self.reflection_m660_max_km),
            ("reflection_cmb_max_km", self.reflection_cmb_max_km),
            ("diffraction_near_distance_deg", self.diffraction_near_distance_deg),
            ("diffraction_far_distance_deg", self.diffraction_far_distance_deg),
            ("diffraction_mantle_depth_km", self.diffraction_mantle_depth_km),
            ("diffraction_core_depth_km", self.diffraction_core_depth_km),
        ]
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in self.named_values() {
            if !value.is_finite() || value <= 0.0 {
                return Err(PhaseError::config(format!(
                    "classifier.{name} must be a positive finite number, got {value}"
                )));
            }
        }

        let bands = [
            self.reflection_moho_max_km,
            self.reflection_m210_max_km,
            self.reflection_m410_max_km,
            self.reflection_m660_max_km,
            self.reflection_cmb_max_km,
        ];
        if bands.windows(2).any(|pair| pair[1] <= pair[0]) {
            return Err(PhaseError::config(
                "classifier reflection depth bands must be strictly increasing",
            ));
        }
        if self.diffraction_far_distance_deg <= self.diffraction_near_distance_deg {
            return Err(PhaseError::config(
                "classifier.diffraction_far_distance_deg must exceed diffraction_near_distance_deg",
            ));
        }
        if self.diffraction_core_depth_km <= self.diffraction_mantle_depth_km {
            return Err(PhaseError::config(
                "classifier.diffraction_core_depth_km must exceed diffraction_mantle_depth_km",
            ));
        }
        Ok(())
    }
}

impl PhaseConfig {
    /// Environment variable naming the config file
    pub const ENV_CONFIG_PATH: &'static str = "GEOPHASE_CONFIG";

    /// Load configuration from the file named by `GEOPHASE_CONFIG`.
    ///
    /// Returns defaults if the variable is unset or the file doesn't exist.
    pub fn load() -> Result<Self> {
        let Some(path) = std::env::var_os(Self::ENV_CONFIG_PATH).map(PathBuf::from) else {
            tracing::debug!("GEOPHASE_CONFIG not set, using default classifier thresholds");
            return Ok(Self::default());
        };

        if !path.exists() {
            tracing::warn!(
                path = %path.display(),
                "classifier config not found, using defaults"
            );
            return Ok(Self::default());
        }

        Self::load_from_path(&path)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            PhaseError::config_with_source(
                format!("failed to read config at {}", path.display()),
                e,
            )
        })?;

        Self::parse(&contents)
    }

    /// Parse configuration from TOML string
    pub fn parse(contents: &str) -> Result<Self> {
        let cfg: PhaseConfig = toml::from_str(contents)
            .map_err(|e| PhaseError::config_with_source("failed to parse config", e))?;

        cfg.classifier.validate()?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_document_yields_defaults() {
        let cfg = PhaseConfig::parse("").ok();
        assert_eq!(cfg, Some(PhaseConfig::default()));
    }

    #[test]
    fn partial_table_keeps_other_defaults() {
        let cfg = PhaseConfig::parse("[classifier]\nrefraction_distance_deg = 18.5\n")
            .ok()
            .map(|c| c.classifier);
        let expected = ClassifierThresholds {
            refraction_distance_deg: 18.5,
            ..ClassifierThresholds::default()
        };
        assert_eq!(cfg, Some(expected));
    }

    #[test]
    fn rejects_non_positive_values() {
        let err = PhaseConfig::parse("[classifier]\nreflection_travel_time_s = 0.0\n");
        assert!(matches!(err, Err(PhaseError::Config { message, .. }) if message.contains("reflection_travel_time_s")));
    }

    #[test]
    fn rejects_overlapping_reflection_bands() {
        let err = PhaseConfig::parse("[classifier]\nreflection_m210_max_km = 90.0\n");
        assert!(matches!(err, Err(PhaseError::Config { .. })));
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = PhaseConfig::parse("[classifier]\nrefraction_depth = 400.0\n");
        assert!(matches!(err, Err(PhaseError::Config { source: Some(_), .. })));
    }
}
