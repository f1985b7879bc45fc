//! Error types for phase descriptors, the registry and remapping.
//!
//! Classification never fails: unknown ray types map to the NULL phase.
//! Errors here come from malformed compiled-in definitions, explicit
//! lookups by name, model remapping and configuration loading.

use thiserror::Error;

/// Result type for phase operations
pub type Result<T> = std::result::Result<T, PhaseError>;

/// Phase error taxonomy
#[derive(Debug, Error)]
pub enum PhaseError {
    /// A definition references a token that is neither an interface, an
    /// alias nor `FREE_SURFACE`.
    #[error("phase {phase} references unknown interface \"{token}\"")]
    UnknownInterfaceReference { phase: String, token: String },

    #[error("\"{0}\" is not a defined seismic phase")]
    UnknownPhaseName(String),

    #[error("phase {0} is defined more than once")]
    DuplicatePhase(String),

    #[error("phase {phase} has a malformed {sequence} list: {reason}")]
    MalformedSequence {
        phase: String,
        sequence: &'static str,
        reason: String,
    },

    #[error("phase {phase} defines no {sequence} list")]
    MissingSequence {
        phase: String,
        sequence: &'static str,
    },

    /// The model cannot supply an interface the phase requires.
    #[error("phase {phase} cannot use interface {interface} with this model: {reason}")]
    UnsupportedInterface {
        phase: String,
        interface: String,
        reason: String,
    },

    #[error("config error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PhaseError {
    pub(crate) fn malformed(
        phase: &str,
        sequence: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        Self::MalformedSequence {
            phase: phase.to_string(),
            sequence,
            reason: reason.into(),
        }
    }

    pub(crate) fn unsupported(
        phase: &str,
        interface: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::UnsupportedInterface {
            phase: phase.to_string(),
            interface: interface.into(),
            reason: reason.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Create a config error with source
    pub fn config_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
