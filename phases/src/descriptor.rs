//! Seismic phase descriptors and the compiled-in definition format.

use serde::Serialize;

use crate::error::Result;
use crate::sequence::RayEventSequence;
use crate::sequence::WaveTypeSequence;
use crate::wave::WaveType;

/// Approximate distance range, in degrees, over which a phase is observed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DistanceRange {
    pub min: f64,
    pub max: f64,
}

impl DistanceRange {
    pub const FULL: Self = Self {
        min: 0.0,
        max: 180.0,
    };

    pub fn contains(&self, distance: f64) -> bool {
        (self.min..=self.max).contains(&distance)
    }
}

impl Default for DistanceRange {
    fn default() -> Self {
        Self::FULL
    }
}

/// One row of the compiled-in phase table, before parsing.
#[derive(Debug, Clone, Copy)]
pub struct PhaseDefinition {
    pub name: &'static str,
    pub primary_wave_type: Option<WaveType>,
    pub wave_types: Option<&'static str>,
    pub ray_events: Option<&'static str>,
    pub description: &'static str,
    pub distance: DistanceRange,
    pub file_name: Option<&'static str>,
}

impl PhaseDefinition {
    pub const fn new(
        name: &'static str,
        primary_wave_type: Option<WaveType>,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            primary_wave_type,
            wave_types: None,
            ray_events: None,
            description,
            distance: DistanceRange::FULL,
            file_name: None,
        }
    }

    pub const fn waves(mut self, list: &'static str) -> Self {
        self.wave_types = Some(list);
        self
    }

    pub const fn events(mut self, list: &'static str) -> Self {
        self.ray_events = Some(list);
        self
    }

    pub const fn distance(mut self, min: f64, max: f64) -> Self {
        self.distance = DistanceRange { min, max };
        self
    }

    pub const fn file_name(mut self, file_name: &'static str) -> Self {
        self.file_name = Some(file_name);
        self
    }
}

/// A validated phase: typed sequences plus the wave types deduced from its
/// name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeismicPhaseDescriptor {
    pub name: &'static str,
    pub primary_wave_type: Option<WaveType>,
    pub source_wave_type: Option<WaveType>,
    pub receiver_wave_type: Option<WaveType>,
    pub wave_types: Option<WaveTypeSequence>,
    pub ray_events: Option<RayEventSequence>,
    pub description: &'static str,
    pub distance: DistanceRange,
    pub file_name: &'static str,
}

impl SeismicPhaseDescriptor {
    /// Parses both sequences, resolving every interface token.
    pub fn from_definition(def: &PhaseDefinition) -> Result<Self> {
        let wave_types = def
            .wave_types
            .map(|text| WaveTypeSequence::parse(def.name, text))
            .transpose()?;
        let ray_events = def
            .ray_events
            .map(|text| RayEventSequence::parse(def.name, text))
            .transpose()?;
        let (source_wave_type, receiver_wave_type) = deduce_wave_types(def.name);
        Ok(Self {
            name: def.name,
            primary_wave_type: def.primary_wave_type,
            source_wave_type,
            receiver_wave_type,
            wave_types,
            ray_events,
            description: def.description,
            distance: def.distance,
            file_name: def.file_name.unwrap_or(def.name),
        })
    }

    /// Ray-traceable phases carry both sequences.
    pub fn is_ray_traceable(&self) -> bool {
        self.wave_types.is_some() && self.ray_events.is_some()
    }
}

/// Source and receiver wave types implied by a phase name.
///
/// `Lg` and `nP` are fixed. Otherwise the source type comes from the first
/// character and the receiver type from the last `P`/`S` found scanning
/// backward, both ignoring case.
pub fn deduce_wave_types(name: &str) -> (Option<WaveType>, Option<WaveType>) {
    match name {
        "Lg" => return (Some(WaveType::S), Some(WaveType::S)),
        "nP" => return (Some(WaveType::P), Some(WaveType::P)),
        _ => {}
    }
    let source = name.chars().next().and_then(WaveType::from_char);
    let receiver = name.chars().rev().find_map(WaveType::from_char);
    (source, receiver)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geophase_interfaces::EarthInterface;
    use pretty_assertions::assert_eq;

    use crate::sequence::InterfaceToken;

    #[test]
    fn deduction_cases() {
        let p = Some(WaveType::P);
        let s = Some(WaveType::S);
        assert_eq!(deduce_wave_types("PcS"), (p, s));
        assert_eq!(deduce_wave_types("Lg"), (s, s));
        assert_eq!(deduce_wave_types("nP"), (p, p));
        assert_eq!(deduce_wave_types("SKS"), (s, s));
        assert_eq!(deduce_wave_types("pPKiKP"), (p, p));
        assert_eq!(deduce_wave_types("sPdiff"), (s, p));
        assert_eq!(deduce_wave_types("SKSac"), (s, s));
        assert_eq!(deduce_wave_types("LR"), (None, None));
        assert_eq!(deduce_wave_types("Is"), (None, s));
        assert_eq!(deduce_wave_types(""), (None, None));
    }

    #[test]
    fn definition_defaults() {
        const DEF: PhaseDefinition =
            PhaseDefinition::new("PcS", None, "P reflected off the CMB as S")
                .waves("PSLOWNESS, CMB, SSLOWNESS")
                .events("TOP_SIDE_REFLECTION, CMB");
        let Ok(desc) = SeismicPhaseDescriptor::from_definition(&DEF) else {
            panic!("PcS should build");
        };
        assert_eq!(desc.file_name, "PcS");
        assert_eq!(desc.distance, DistanceRange::FULL);
        assert_eq!(desc.source_wave_type, Some(WaveType::P));
        assert_eq!(desc.receiver_wave_type, Some(WaveType::S));
        assert!(desc.is_ray_traceable());
        let events = desc.ray_events.map(|seq| seq.events).unwrap_or_default();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].at, InterfaceToken::Interface(EarthInterface::Cmb));
    }

    #[test]
    fn non_traceable_phases_have_no_sequences() {
        let def = PhaseDefinition::new("LR", None, "Rayleigh wave").distance(0.0, 180.0);
        let Ok(desc) = SeismicPhaseDescriptor::from_definition(&def) else {
            panic!("LR should build");
        };
        assert!(!desc.is_ray_traceable());
        assert_eq!(desc.wave_types, None);
    }

    #[test]
    fn distance_range_is_inclusive() {
        let range = DistanceRange { min: 0.0, max: 20.0 };
        assert!(range.contains(20.0));
        assert!(!range.contains(20.5));
    }
}
