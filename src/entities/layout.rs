use serde::{Deserialize, Serialize};

use crate::entities::item::PlacementItem;
use crate::entities::room::WallSide;
use crate::geometry::primitives::Rect;

/// The constructive strategy that produced a plan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pattern {
    /// Interleaved rows on the left and right walls.
    DoubleWall,
    /// Interleaved rows on the top and bottom walls.
    DoubleWallTopBottom,
    /// A single row on one wall.
    SingleWall(WallSide),
    /// Mirrored rows back-to-back at the room center.
    FaceToFace,
    /// Wall segment combined with a face-to-face block.
    Mixed,
}

impl Pattern {
    /// True for patterns containing a face-to-face component.
    pub fn is_face_to_face(&self) -> bool {
        matches!(self, Pattern::FaceToFace | Pattern::Mixed)
    }
}

/// Result of one generator invocation. Built append-only during the walk,
/// immutable afterwards. `ok` is false when the seat quota could not be met;
/// the items then hold the best partial arrangement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutPlan {
    pub ok: bool,
    pub seats_placed: usize,
    pub seats_required: usize,
    pub equipment_placed: usize,
    pub equipment_target: usize,
    /// Catalog key of the desk type used for the seat units.
    pub desk_key: String,
    pub pattern: Pattern,
    pub items: Vec<PlacementItem>,
}

impl LayoutPlan {
    pub fn desk_rects(&self) -> impl Iterator<Item = Rect> + '_ {
        self.items.iter().filter(|i| i.is_desk()).map(|i| i.rect())
    }

    pub fn chair_rects(&self) -> impl Iterator<Item = Rect> + '_ {
        self.items.iter().filter(|i| i.is_chair()).map(|i| i.rect())
    }

    /// Total floor area occupied by furniture.
    pub fn furniture_area(&self) -> i64 {
        self.items.iter().map(|i| i.rect().area()).sum()
    }
}
