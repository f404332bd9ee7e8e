//! Errors for rejected player actions and for configuration loading.

use crate::character::ResourceKind;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A player action the rules refused. State is left unchanged whenever one
/// of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("security measure '{0}' not found")]
    UnknownMeasure(String),
    #[error("not enough preparation points to implement {measure} (needs {needed}, have {available})")]
    InsufficientPreparationPoints {
        measure: String,
        needed: u32,
        available: u32,
    },
    #[error("spell '{0}' not found")]
    UnknownSpell(String),
    #[error("not enough {resource} (needs {needed}, have {available})")]
    InsufficientResources {
        resource: ResourceKind,
        needed: u32,
        available: u32,
    },
    #[error("at least one security measure must be implemented before proceeding")]
    NoActiveMeasures,
    #[error("no player in seat {0}")]
    UnknownSeat(usize),
    #[error("invalid player name: {0}")]
    InvalidName(String),
    #[error("the board has no region to land on")]
    NoLanding,
}

/// Failure to read or validate a config or catalog file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse {what}: {source}")]
    Parse {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to read {what} from {path:?}: {source}")]
    Read {
        what: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid {what}: {reason}")]
    Invalid { what: &'static str, reason: String },
}
