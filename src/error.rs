//! Error types for MirrorBox

use crate::constants::RecordKind;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MirrorBoxError {
    #[error("Capacity exceeded: {kind} already holds {capacity} record(s)")]
    CapacityExceeded { kind: RecordKind, capacity: usize },

    #[error("Degenerate basis: {0}")]
    DegenerateBasis(String),

    #[error("Index out of range: {kind} index {index} (count {count})")]
    IndexOutOfRange {
        kind: RecordKind,
        index: usize,
        count: usize,
    },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, MirrorBoxError>;
