//! Error types for interface catalog operations.
//!
//! Only explicit validation can fail. Lookups that find nothing return
//! `None` because sparse models rarely define every interface.

use thiserror::Error;

use crate::interface::EarthInterface;
use crate::interface::InterfaceGroup;

/// Result type for interface catalog operations
pub type Result<T> = std::result::Result<T, InterfaceError>;

/// Interface catalog error taxonomy
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InterfaceError {
    /// An ordered interface list is not strictly deepest-first.
    #[error(
        "interface order is invalid between interface {later} (later) and interface {earlier} (earlier)"
    )]
    OutOfOrder {
        later: EarthInterface,
        earlier: EarthInterface,
    },

    /// A start interface name given to a string entry point does not exist.
    #[error("\"{0}\" is not a valid EarthInterface name")]
    UnknownName(String),

    #[error("model layer \"{layer}\" (layer index = {index}) is not a valid EarthInterface name and has not been remapped")]
    UnmappedLayer { layer: String, index: usize },

    #[error("EarthInterface {interface} cannot be defined twice (layer # {first} and # {second})")]
    DuplicateInterface {
        interface: EarthInterface,
        first: usize,
        second: usize,
    },

    #[error("invalid layer remap \"{entry}\": {reason}")]
    InvalidRemap { entry: String, reason: String },

    #[error("model layer ordering is invalid relative to the EarthInterface ordering: {0}")]
    ModelOrder(Box<InterfaceError>),

    #[error("model does not define an interface in the {0} group")]
    MissingGroup(InterfaceGroup),
}

impl InterfaceError {
    pub(crate) fn invalid_remap(entry: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRemap {
            entry: entry.into(),
            reason: reason.into(),
        }
    }
}
