// File: crates/plotline-core/src/error.rs
// Summary: Error taxonomy for scale algebra and keyed collection operations.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ChartError {
    /// Inverting through a range whose endpoints coincide.
    #[error("cannot invert through a zero-width range at {min}")]
    DegenerateRange { min: f64 },

    /// The operation needs a domain but none has been established yet.
    #[error("no domain has been established")]
    EmptyDomain,

    /// Structural operation the keyed collection does not support.
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),

    /// Wrong kind of child inserted into a specialized collection.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("invalid value: {0}")]
    InvalidValue(String),
}

pub type Result<T> = std::result::Result<T, ChartError>;
