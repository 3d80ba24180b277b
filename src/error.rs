use thiserror::Error;

use crate::entities::room::{MAX_ROOM_DIM, MIN_ROOM_DIM};

/// Errors signalling caller-side misuse. Placement infeasibility is never an
/// error: generators report it through [`crate::entities::LayoutPlan::ok`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// The furniture catalog has no entry for the requested key.
    #[error("unknown furniture type: {0:?}")]
    UnknownFurniture(String),

    /// Room dimensions outside the supported range.
    #[error(
        "invalid room dimensions: {w}x{d}mm (both must be within {MIN_ROOM_DIM}..={MAX_ROOM_DIM}mm)"
    )]
    InvalidRoom { w: i64, d: i64 },
}
