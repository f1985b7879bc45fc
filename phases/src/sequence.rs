//! Typed wave-type and ray-event sequences.
//!
//! Compiled-in phase definitions write these as token lists such as
//! `"PSLOWNESS, CMB, SSLOWNESS"` or
//! `"BOTTOM_SIDE_REFLECTION, FREE_SURFACE, TOP_SIDE_REFLECTION, CMB"`.
//! They are parsed once, when the registry is built, and every interface
//! token is resolved through the catalog.

use std::fmt;

use geophase_interfaces::EarthInterface;
use geophase_interfaces::catalog;
use serde::Serialize;
use serde_with::SerializeDisplay;
use strum_macros::Display;
use strum_macros::EnumString;
use strum_macros::IntoStaticStr;

use crate::error::PhaseError;
use crate::error::Result;
use crate::wave::WaveType;

const FREE_SURFACE: &str = "FREE_SURFACE";

/// An interface a sequence entry happens at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SerializeDisplay)]
pub enum InterfaceToken {
    Interface(EarthInterface),
    /// The model's free surface, whichever interface that turns out to be.
    FreeSurface,
}

impl InterfaceToken {
    /// `FREE_SURFACE` or any name [`catalog::resolve`] accepts.
    pub fn parse(token: &str) -> Option<Self> {
        if token.eq_ignore_ascii_case(FREE_SURFACE) {
            return Some(Self::FreeSurface);
        }
        catalog::resolve(token).map(Self::Interface)
    }

    pub fn interface(self) -> Option<EarthInterface> {
        match self {
            Self::Interface(iface) => Some(iface),
            Self::FreeSurface => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Interface(iface) => iface.name(),
            Self::FreeSurface => FREE_SURFACE,
        }
    }
}

impl fmt::Display for InterfaceToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The wave type switches to `wave_type` on crossing `at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WaveTypeChange {
    pub at: InterfaceToken,
    pub wave_type: WaveType,
}

/// Slowness type at the source followed by every conversion on the way to
/// the receiver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WaveTypeSequence {
    pub initial: WaveType,
    pub changes: Vec<WaveTypeChange>,
}

impl WaveTypeSequence {
    const LABEL: &'static str = "wave type";

    pub fn parse(phase: &str, text: &str) -> Result<Self> {
        let tokens = tokenize(text);
        let Some((first, rest)) = tokens.split_first() else {
            return Err(PhaseError::malformed(phase, Self::LABEL, "empty list"));
        };
        let initial = parse_wave_type(phase, first)?;
        if rest.len() % 2 != 0 {
            return Err(PhaseError::malformed(
                phase,
                Self::LABEL,
                format!("interface \"{}\" has no wave type", rest[rest.len() - 1]),
            ));
        }
        let changes = rest
            .chunks_exact(2)
            .map(|pair| -> Result<WaveTypeChange> {
                Ok(WaveTypeChange {
                    at: parse_interface(phase, pair[0])?,
                    wave_type: parse_wave_type(phase, pair[1])?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { initial, changes })
    }

    /// Wave type arriving at the receiver.
    pub fn final_wave_type(&self) -> WaveType {
        self.changes
            .last()
            .map_or(self.initial, |change| change.wave_type)
    }

    pub fn interfaces(&self) -> impl Iterator<Item = InterfaceToken> + '_ {
        self.changes.iter().map(|change| change.at)
    }
}

impl fmt::Display for WaveTypeSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.initial.slowness_attribute())?;
        for change in &self.changes {
            write!(f, ", {}, {}", change.at, change.wave_type.slowness_attribute())?;
        }
        Ok(())
    }
}

/// How a ray interacts with an interface.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, SerializeDisplay,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum RayEventKind {
    /// Turning point; the ray stays above the interface.
    Bottom,
    TopSideReflection,
    BottomSideReflection,
    /// Bottom-side reflection off the free surface.
    FreeSurface,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RayEvent {
    pub kind: RayEventKind,
    pub at: InterfaceToken,
}

/// Ordered turning and reflection events from source to receiver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RayEventSequence {
    pub events: Vec<RayEvent>,
}

impl RayEventSequence {
    const LABEL: &'static str = "ray event";

    pub fn parse(phase: &str, text: &str) -> Result<Self> {
        let tokens = tokenize(text);
        if tokens.is_empty() || tokens.len() % 2 != 0 {
            return Err(PhaseError::malformed(
                phase,
                Self::LABEL,
                "expected (kind, interface) pairs",
            ));
        }
        let events = tokens
            .chunks_exact(2)
            .map(|pair| -> Result<RayEvent> {
                let kind = match pair[0].parse::<RayEventKind>() {
                    Ok(RayEventKind::FreeSurface) | Err(_) => {
                        return Err(PhaseError::malformed(
                            phase,
                            Self::LABEL,
                            format!("unknown event kind \"{}\"", pair[0]),
                        ));
                    }
                    Ok(kind) => kind,
                };
                let at = parse_interface(phase, pair[1])?;
                let kind = match (kind, at) {
                    (RayEventKind::BottomSideReflection, InterfaceToken::FreeSurface) => {
                        RayEventKind::FreeSurface
                    }
                    (kind, _) => kind,
                };
                Ok(RayEvent { kind, at })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { events })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RayEvent> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl fmt::Display for RayEventSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, event) in self.events.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            // Free-surface events are written the way definitions spell them.
            let kind = match event.kind {
                RayEventKind::FreeSurface => RayEventKind::BottomSideReflection,
                kind => kind,
            };
            write!(f, "{kind}, {}", event.at)?;
        }
        Ok(())
    }
}

fn tokenize(text: &str) -> Vec<&str> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .collect()
}

fn parse_wave_type(phase: &str, token: &str) -> Result<WaveType> {
    token.parse::<WaveType>().map_err(|_| {
        PhaseError::malformed(
            phase,
            WaveTypeSequence::LABEL,
            format!("unknown wave type \"{token}\""),
        )
    })
}

fn parse_interface(phase: &str, token: &str) -> Result<InterfaceToken> {
    InterfaceToken::parse(token).ok_or_else(|| PhaseError::UnknownInterfaceReference {
        phase: phase.to_string(),
        token: token.to_string(),
    })
}
