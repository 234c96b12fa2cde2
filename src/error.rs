//! Error types for gearsim.
//!
//! Engine math never errors for ordinary gameplay values; degenerate numeric
//! inputs are treated as "nothing to do" by the simulator. Errors only
//! surface at the serialization boundary.

use thiserror::Error;

/// Result type alias for gearsim operations.
pub type GearResult<T> = Result<T, GearError>;

/// Unified error type for the crate's fallible surfaces.
#[derive(Debug, Error)]
pub enum GearError {
    /// A request or snapshot failed to deserialize.
    #[error("malformed payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    /// A loadout referenced a slot position outside its configured shape.
    #[error("slot position {position} out of range for {slots} {kind} slots")]
    SlotOutOfRange {
        /// Slot kind name.
        kind: &'static str,
        /// Offending positional index.
        position: usize,
        /// Configured slot count for the kind.
        slots: usize,
    },
}
