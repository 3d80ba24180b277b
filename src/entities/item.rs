use serde::{Deserialize, Serialize};

use crate::entities::catalog::ItemKind;
use crate::entities::room::WallSide;
use crate::geometry::primitives::Rect;

/// A single placed furniture piece. The closed set of variants lets every
/// downstream consumer match exhaustively.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementItem {
    Desk {
        rect: Rect,
        label: String,
    },
    Chair {
        rect: Rect,
        label: String,
        /// Direction the seated occupant faces (towards the desk).
        facing: WallSide,
    },
    Storage {
        rect: Rect,
        label: String,
    },
    Equipment {
        rect: Rect,
        label: String,
    },
    Meeting {
        rect: Rect,
        label: String,
    },
}

impl PlacementItem {
    pub fn from_kind(kind: ItemKind, rect: Rect, label: String) -> Self {
        match kind {
            ItemKind::Storage => PlacementItem::Storage { rect, label },
            ItemKind::Equipment => PlacementItem::Equipment { rect, label },
            ItemKind::Meeting => PlacementItem::Meeting { rect, label },
        }
    }

    pub fn rect(&self) -> Rect {
        match self {
            PlacementItem::Desk { rect, .. }
            | PlacementItem::Chair { rect, .. }
            | PlacementItem::Storage { rect, .. }
            | PlacementItem::Equipment { rect, .. }
            | PlacementItem::Meeting { rect, .. } => *rect,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            PlacementItem::Desk { label, .. }
            | PlacementItem::Chair { label, .. }
            | PlacementItem::Storage { label, .. }
            | PlacementItem::Equipment { label, .. }
            | PlacementItem::Meeting { label, .. } => label,
        }
    }

    pub fn is_desk(&self) -> bool {
        matches!(self, PlacementItem::Desk { .. })
    }

    pub fn is_chair(&self) -> bool {
        matches!(self, PlacementItem::Chair { .. })
    }

    /// True for storage, equipment and meeting pieces.
    pub fn is_fill(&self) -> bool {
        matches!(
            self,
            PlacementItem::Storage { .. }
                | PlacementItem::Equipment { .. }
                | PlacementItem::Meeting { .. }
        )
    }
}
