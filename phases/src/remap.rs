//! Resolving a phase's requested interfaces against a specific model.
//!
//! Phase definitions name the interfaces a ray interacts with, but a model
//! rarely defines all of them. Each requested interface is either used as
//! is, substituted with a nearby interface the model does define, or
//! rejected when no substitute keeps the ray path meaningful.

use geophase_interfaces::EarthInterface;
use geophase_interfaces::InterfaceGroup;
use geophase_interfaces::ModelInterfaces;
use geophase_interfaces::catalog;
use serde::Serialize;
use strum_macros::Display;

use crate::descriptor::SeismicPhaseDescriptor;
use crate::error::PhaseError;
use crate::error::Result;
use crate::sequence::InterfaceToken;
use crate::sequence::RayEventKind;
use crate::wave::WaveType;

/// Why a requested interface resolved the way it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum RemapReason {
    /// The model defines the requested interface.
    Defined,
    /// The free surface is the model's shallowest CRUST interface.
    FreeSurface,
    /// Closest defined interface above the request, in the same group.
    NearestAboveInGroup,
    /// No CRUST interface above the request; the shallowest CRUST one.
    TopMostCrust,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InterfaceRemap {
    pub requested: InterfaceToken,
    pub resolved: EarthInterface,
    pub reason: RemapReason,
}

impl InterfaceRemap {
    pub fn is_substitution(&self) -> bool {
        self.reason != RemapReason::Defined
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RemappedRayEvent {
    pub kind: RayEventKind,
    #[serde(flatten)]
    pub remap: InterfaceRemap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RemappedWaveTypeChange {
    pub wave_type: WaveType,
    #[serde(flatten)]
    pub remap: InterfaceRemap,
}

/// A phase's sequences with every interface resolved for one model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhaseRemap {
    pub phase: &'static str,
    pub initial_wave_type: WaveType,
    pub wave_type_changes: Vec<RemappedWaveTypeChange>,
    pub ray_events: Vec<RemappedRayEvent>,
}

impl PhaseRemap {
    pub fn substitutions(&self) -> impl Iterator<Item = &InterfaceRemap> + '_ {
        self.wave_type_changes
            .iter()
            .map(|change| &change.remap)
            .chain(self.ray_events.iter().map(|event| &event.remap))
            .filter(|remap| remap.is_substitution())
    }
}

/// Resolves both sequences of `phase`. Fails if either is missing.
pub fn remap_phase(phase: &SeismicPhaseDescriptor, model: &ModelInterfaces) -> Result<PhaseRemap> {
    let Some(wave_types) = &phase.wave_types else {
        return Err(missing(phase, "wave type"));
    };
    let ray_events = remap_ray_events(phase, model)?;
    let wave_type_changes = remap_wave_type_changes(phase, model)?;
    Ok(PhaseRemap {
        phase: phase.name,
        initial_wave_type: wave_types.initial,
        wave_type_changes,
        ray_events,
    })
}

pub fn remap_ray_events(
    phase: &SeismicPhaseDescriptor,
    model: &ModelInterfaces,
) -> Result<Vec<RemappedRayEvent>> {
    let Some(events) = &phase.ray_events else {
        return Err(missing(phase, "ray event"));
    };
    events
        .iter()
        .map(|event| -> Result<RemappedRayEvent> {
            let remap = match (event.kind, event.at) {
                (RayEventKind::FreeSurface, at)
                | (RayEventKind::BottomSideReflection, at @ InterfaceToken::FreeSurface) => {
                    free_surface(phase, model, at)?
                }
                (_, InterfaceToken::FreeSurface) => {
                    return Err(PhaseError::unsupported(
                        phase.name,
                        event.at.name(),
                        format!("{} cannot occur at the free surface", event.kind),
                    ));
                }
                (RayEventKind::BottomSideReflection, InterfaceToken::Interface(iface)) => {
                    bottom_side_reflection(phase, model, iface)?
                }
                (RayEventKind::TopSideReflection, InterfaceToken::Interface(iface)) => {
                    require_defined(phase, model, iface, "top-side reflection interfaces")?
                }
                (RayEventKind::Bottom, InterfaceToken::Interface(iface)) => {
                    turning(phase, model, iface)?
                }
            };
            log_substitution(phase, &remap, event.kind);
            Ok(RemappedRayEvent {
                kind: event.kind,
                remap,
            })
        })
        .collect()
}

pub fn remap_wave_type_changes(
    phase: &SeismicPhaseDescriptor,
    model: &ModelInterfaces,
) -> Result<Vec<RemappedWaveTypeChange>> {
    let Some(wave_types) = &phase.wave_types else {
        return Err(missing(phase, "wave type"));
    };
    wave_types
        .changes
        .iter()
        .map(|change| -> Result<RemappedWaveTypeChange> {
            let remap = match change.at {
                InterfaceToken::FreeSurface => free_surface(phase, model, change.at)?,
                InterfaceToken::Interface(iface) if model.contains(iface) => defined(iface),
                InterfaceToken::Interface(iface) if iface.group() != InterfaceGroup::Crust => {
                    return Err(PhaseError::unsupported(
                        phase.name,
                        iface.name(),
                        "WATER, MANTLE and CORE wave type conversions must be defined by the model",
                    ));
                }
                InterfaceToken::Interface(iface) => nearest_crust(phase, model, iface)?,
            };
            if remap.is_substitution() {
                tracing::info!(
                    phase = phase.name,
                    requested = %remap.requested,
                    resolved = %remap.resolved,
                    reason = %remap.reason,
                    "remapped wave type conversion interface"
                );
            }
            Ok(RemappedWaveTypeChange {
                wave_type: change.wave_type,
                remap,
            })
        })
        .collect()
}

fn defined(iface: EarthInterface) -> InterfaceRemap {
    InterfaceRemap {
        requested: InterfaceToken::Interface(iface),
        resolved: iface,
        reason: RemapReason::Defined,
    }
}

fn free_surface(
    phase: &SeismicPhaseDescriptor,
    model: &ModelInterfaces,
    requested: InterfaceToken,
) -> Result<InterfaceRemap> {
    let resolved = top_most_crust(phase, model, requested)?;
    Ok(InterfaceRemap {
        requested,
        resolved,
        reason: RemapReason::FreeSurface,
    })
}

fn top_most_crust(
    phase: &SeismicPhaseDescriptor,
    model: &ModelInterfaces,
    requested: InterfaceToken,
) -> Result<EarthInterface> {
    model.top_most(InterfaceGroup::Crust).ok_or_else(|| {
        PhaseError::unsupported(phase.name, requested.name(), "model defines no CRUST interface")
    })
}

fn bottom_side_reflection(
    phase: &SeismicPhaseDescriptor,
    model: &ModelInterfaces,
    iface: EarthInterface,
) -> Result<InterfaceRemap> {
    if model.contains(iface) {
        return Ok(defined(iface));
    }
    if iface <= EarthInterface::Moho {
        return Err(PhaseError::unsupported(
            phase.name,
            iface.name(),
            "MANTLE and CORE bottom-side reflection interfaces must be defined by the model",
        ));
    }
    if iface.group() != InterfaceGroup::Crust {
        return Err(PhaseError::unsupported(
            phase.name,
            iface.name(),
            "WATER bottom-side reflection interfaces must be defined by the model",
        ));
    }
    nearest_crust(phase, model, iface)
}

fn nearest_crust(
    phase: &SeismicPhaseDescriptor,
    model: &ModelInterfaces,
    iface: EarthInterface,
) -> Result<InterfaceRemap> {
    let requested = InterfaceToken::Interface(iface);
    if let Some(resolved) = catalog::find_lowest_defined_above_in_group(iface, model) {
        return Ok(InterfaceRemap {
            requested,
            resolved,
            reason: RemapReason::NearestAboveInGroup,
        });
    }
    Ok(InterfaceRemap {
        requested,
        resolved: top_most_crust(phase, model, requested)?,
        reason: RemapReason::TopMostCrust,
    })
}

fn require_defined(
    phase: &SeismicPhaseDescriptor,
    model: &ModelInterfaces,
    iface: EarthInterface,
    what: &str,
) -> Result<InterfaceRemap> {
    if model.contains(iface) {
        Ok(defined(iface))
    } else {
        Err(PhaseError::unsupported(
            phase.name,
            iface.name(),
            format!("{what} must be defined by the model"),
        ))
    }
}

fn turning(
    phase: &SeismicPhaseDescriptor,
    model: &ModelInterfaces,
    iface: EarthInterface,
) -> Result<InterfaceRemap> {
    if model.contains(iface) {
        return Ok(defined(iface));
    }
    match catalog::find_lowest_defined_above_in_group(iface, model) {
        Some(resolved) => Ok(InterfaceRemap {
            requested: InterfaceToken::Interface(iface),
            resolved,
            reason: RemapReason::NearestAboveInGroup,
        }),
        None => Err(PhaseError::unsupported(
            phase.name,
            iface.name(),
            format!(
                "no model interface in the {} group lies above it",
                iface.group()
            ),
        )),
    }
}

fn log_substitution(phase: &SeismicPhaseDescriptor, remap: &InterfaceRemap, kind: RayEventKind) {
    if remap.is_substitution() {
        tracing::info!(
            phase = phase.name,
            %kind,
            requested = %remap.requested,
            resolved = %remap.resolved,
            reason = %remap.reason,
            "remapped ray event interface"
        );
    }
}

fn missing(phase: &SeismicPhaseDescriptor, sequence: &'static str) -> PhaseError {
    PhaseError::MissingSequence {
        phase: phase.name.to_string(),
        sequence,
    }
}
