use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::PlanError;

/// Workstation desk dimensions. `w` runs along the wall, `d` is the desk's
/// own depth; `chair_space` is the extra depth reserved behind the desk for
/// the chair and its pull-out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeskSpec {
    pub w: i64,
    pub d: i64,
    pub chair_space: i64,
}

impl DeskSpec {
    /// Full depth a seat unit claims from the wall: desk plus chair space.
    pub fn unit_d(&self) -> i64 {
        self.d + self.chair_space
    }

    /// Desk surface area.
    pub fn area(&self) -> i64 {
        self.w * self.d
    }
}

/// Kind of a non-seat catalog entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    Storage,
    Equipment,
    Meeting,
}

/// Storage/equipment/meeting furniture dimensions. `clear_front` is the
/// access strip required on the item's room-facing side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSpec {
    pub w: i64,
    pub d: i64,
    pub clear_front: i64,
    pub kind: ItemKind,
}

/// Furniture catalog, resolved by an external collaborator before any core
/// call and read-only for the duration of a run. A missing key is a lookup
/// failure, never a silent default.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub desks: BTreeMap<String, DeskSpec>,
    pub items: BTreeMap<String, ItemSpec>,
}

impl Catalog {
    pub fn desk(&self, key: &str) -> Result<&DeskSpec, PlanError> {
        self.desks
            .get(key)
            .ok_or_else(|| PlanError::UnknownFurniture(key.to_string()))
    }

    pub fn item(&self, key: &str) -> Result<&ItemSpec, PlanError> {
        self.items
            .get(key)
            .ok_or_else(|| PlanError::UnknownFurniture(key.to_string()))
    }
}

impl Default for Catalog {
    /// The built-in catalog: three workstation sizes, three storage classes,
    /// a multifunction printer and a 2-person meeting spot.
    fn default() -> Self {
        let desks = BTreeMap::from([
            ("ws_1200x700".to_string(), DeskSpec { w: 1200, d: 700, chair_space: 600 }),
            ("ws_1200x600".to_string(), DeskSpec { w: 1200, d: 600, chair_space: 600 }),
            ("ws_1000x600".to_string(), DeskSpec { w: 1000, d: 600, chair_space: 600 }),
        ]);
        let items = BTreeMap::from([
            ("storage_S".to_string(), ItemSpec { w: 900, d: 350, clear_front: 600, kind: ItemKind::Storage }),
            ("storage_M".to_string(), ItemSpec { w: 900, d: 450, clear_front: 600, kind: ItemKind::Storage }),
            ("storage_D".to_string(), ItemSpec { w: 900, d: 600, clear_front: 600, kind: ItemKind::Storage }),
            ("mfp".to_string(), ItemSpec { w: 600, d: 650, clear_front: 900, kind: ItemKind::Equipment }),
            ("meet2p".to_string(), ItemSpec { w: 750, d: 750, clear_front: 600, kind: ItemKind::Meeting }),
        ]);
        Catalog { desks, items }
    }
}
