// Chunk: docs/chunks/two_segment_buffer - Two-segment buffer with reserve bookkeeping

use thiserror::Error;

/// Internal invariant breaks reported by [`GapBuffer`](crate::GapBuffer).
///
/// Boundary conditions (deleting at either end, moving past an edge) are
/// never errors. These variants describe genuine defects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantError {
    /// The tracked capacity fell below the text length, i.e. the reserve
    /// would be negative.
    #[error("total capacity {total_capacity} is smaller than text length {len}")]
    CapacityUnderflow { len: usize, total_capacity: usize },

    /// A strict cursor move was asked to go outside `[0, len]`.
    #[error("cursor target {target} is outside 0..={len}")]
    TargetOutOfRange { target: usize, len: usize },
}
