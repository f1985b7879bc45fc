//! Ray-to-phase classifier.
//!
//! Maps a computed ray's type, turning depth, distance and travel time to
//! the phase name it represents. Classification is total: ray types that do
//! not name a recognised path produce [`PhaseName::Null`].

use std::fmt;

use serde::Serialize;
use serde_with::DeserializeFromStr;
use serde_with::SerializeDisplay;
use strum_macros::Display;
use strum_macros::EnumIter;
use strum_macros::EnumString;
use strum_macros::IntoStaticStr;

use crate::config::ClassifierThresholds;
use crate::descriptor::SeismicPhaseDescriptor;
use crate::registry::PhaseRegistry;
use crate::wave::WaveType;

/// Turning depth value ray computations report when no depth exists.
pub const TURNING_DEPTH_NOT_AVAILABLE: f64 = -999999.0;

/// Ray type reported by a ray computation.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    SerializeDisplay,
    DeserializeFromStr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum RayType {
    Refraction,
    Reflection,
    TopSideDiffraction,
    BottomSideDiffraction,
    /// Diffraction of unspecified side.
    Diffraction,
    Invalid,
    Error,
}

/// Observables of one computed ray.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RayObservation {
    pub ray_type: RayType,
    pub turning_depth_km: Option<f64>,
    pub distance_deg: f64,
    pub travel_time_s: f64,
    pub wave_type: WaveType,
}

impl RayObservation {
    /// Builds an observation from a raw turning depth, treating NaN and
    /// [`TURNING_DEPTH_NOT_AVAILABLE`] as "no depth".
    pub fn with_raw_turning_depth(
        ray_type: RayType,
        raw_turning_depth_km: f64,
        distance_deg: f64,
        travel_time_s: f64,
        wave_type: WaveType,
    ) -> Self {
        let unavailable = raw_turning_depth_km.is_nan()
            || raw_turning_depth_km == TURNING_DEPTH_NOT_AVAILABLE;
        Self {
            ray_type,
            turning_depth_km: (!unavailable).then_some(raw_turning_depth_km),
            distance_deg,
            travel_time_s,
            wave_type,
        }
    }
}

/// Classifier output: a registry phase name or the NULL sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SerializeDisplay)]
pub enum PhaseName {
    Named(&'static str),
    Null,
}

impl PhaseName {
    pub const NULL: &'static str = "NULL";

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Named(name) => name,
            Self::Null => Self::NULL,
        }
    }

    pub fn is_null(self) -> bool {
        self == Self::Null
    }

    /// Descriptor for a named phase; `None` for the NULL sentinel.
    pub fn descriptor(self, registry: &PhaseRegistry) -> Option<&SeismicPhaseDescriptor> {
        match self {
            Self::Named(name) => registry.lookup(name),
            Self::Null => None,
        }
    }
}

impl fmt::Display for PhaseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Phase names of one wave type's branch.
struct BranchNames {
    head: &'static str,
    direct: &'static str,
    moho: &'static str,
    m210: &'static str,
    m410: &'static str,
    m660: &'static str,
    cmb: &'static str,
    icb: &'static str,
    diffracted: &'static str,
}

const P_BRANCH: BranchNames = BranchNames {
    head: "Pn",
    direct: "P",
    moho: "PmP",
    m210: "P210P",
    m410: "P410P",
    m660: "P660P",
    cmb: "PcP",
    icb: "PKiKP",
    diffracted: "Pdiff",
};

const S_BRANCH: BranchNames = BranchNames {
    head: "Sn",
    direct: "S",
    moho: "SmS",
    m210: "S210S",
    m410: "S410S",
    m660: "S660S",
    cmb: "ScS",
    icb: "SKiKS",
    diffracted: "Sdiff",
};

/// Every name [`PhaseClassifier::classify`] can return besides NULL.
pub fn classifier_outputs() -> impl Iterator<Item = &'static str> {
    [&P_BRANCH, &S_BRANCH].into_iter().flat_map(|branch| {
        [
            branch.head,
            branch.direct,
            branch.moho,
            branch.m210,
            branch.m410,
            branch.m660,
            branch.cmb,
            branch.icb,
            branch.diffracted,
        ]
    })
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhaseClassifier {
    thresholds: ClassifierThresholds,
}

impl PhaseClassifier {
    pub fn new(thresholds: ClassifierThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &ClassifierThresholds {
        &self.thresholds
    }

    pub fn classify(&self, ray: &RayObservation) -> PhaseName {
        let branch = match ray.wave_type {
            WaveType::P => &P_BRANCH,
            WaveType::S => &S_BRANCH,
        };
        let t = &self.thresholds;
        let name = match ray.ray_type {
            RayType::Refraction | RayType::BottomSideDiffraction => match ray.turning_depth_km {
                None if ray.distance_deg < t.refraction_distance_deg => branch.head,
                None => branch.direct,
                Some(depth) if depth < t.refraction_depth_km => branch.head,
                Some(_) => branch.direct,
            },
            RayType::Reflection => match ray.turning_depth_km {
                None if ray.travel_time_s < t.reflection_travel_time_s => branch.moho,
                None => branch.cmb,
                Some(depth) if depth < t.reflection_moho_max_km => branch.moho,
                Some(depth) if depth < t.reflection_m210_max_km => branch.m210,
                Some(depth) if depth < t.reflection_m410_max_km => branch.m410,
                Some(depth) if depth < t.reflection_m660_max_km => branch.m660,
                Some(depth) if depth < t.reflection_cmb_max_km => branch.cmb,
                Some(_) => branch.icb,
            },
            RayType::TopSideDiffraction => match ray.turning_depth_km {
                None if ray.distance_deg < t.diffraction_near_distance_deg => branch.head,
                None if ray.distance_deg < t.diffraction_far_distance_deg => branch.direct,
                None => branch.diffracted,
                Some(depth) if depth > t.diffraction_core_depth_km => branch.diffracted,
                Some(depth) if depth > t.diffraction_mantle_depth_km => branch.direct,
                Some(_) => branch.head,
            },
            RayType::Diffraction | RayType::Invalid | RayType::Error => {
                tracing::debug!(ray_type = %ray.ray_type, "ray type has no phase");
                return PhaseName::Null;
            }
        };
        PhaseName::Named(name)
    }
}
