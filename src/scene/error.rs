//! Error taxonomy for scene construction
//!
//! The core has a narrow failure surface: a bad entry in the body table or a
//! bad belt range. Both are caught while building the scene, before any
//! geometry is generated; the per-frame path cannot fail.

use thiserror::Error;

/// Result type for scene construction.
pub type SceneResult<T> = Result<T, SceneError>;

#[derive(Error, Debug)]
pub enum SceneError {
    /// A body table entry carries a non-positive magnitude. The whole table
    /// is rejected rather than skipping the entry, since the rendered set
    /// is assumed complete.
    #[error("invalid body spec `{name}`: {field} must be positive, got {value}")]
    InvalidSpec {
        name: String,
        field: &'static str,
        value: f64,
    },

    /// A belt range is inverted or its size scale is negative.
    #[error("invalid belt config `{name}`: {reason}")]
    InvalidBeltConfig { name: String, reason: String },
}
