//! Seismic phase descriptors, registry and classifier.
//!
//! Each named phase is described by the wave type it propagates with
//! between source and receiver and by the turning points and reflections it
//! undergoes at named Earth interfaces. The registry builds every
//! descriptor once from a compiled-in table; the classifier maps a computed
//! ray back to a phase name.

pub mod classifier;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod registry;
pub mod remap;
pub mod sequence;
mod table;
pub mod wave;

pub use classifier::PhaseClassifier;
pub use classifier::PhaseName;
pub use classifier::RayObservation;
pub use classifier::RayType;
pub use config::ClassifierThresholds;
pub use config::PhaseConfig;
pub use descriptor::DistanceRange;
pub use descriptor::PhaseDefinition;
pub use descriptor::SeismicPhaseDescriptor;
pub use descriptor::deduce_wave_types;
pub use error::PhaseError;
pub use error::Result;
pub use registry::PhaseRegistry;
pub use sequence::InterfaceToken;
pub use sequence::RayEvent;
pub use sequence::RayEventKind;
pub use sequence::RayEventSequence;
pub use sequence::WaveTypeChange;
pub use sequence::WaveTypeSequence;
pub use wave::WaveType;
