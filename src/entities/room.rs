use serde::{Deserialize, Serialize};

use crate::error::PlanError;
use crate::geometry::primitives::{Point, Rect};
use crate::util::PlanConfig;

/// Smallest supported room dimension (mm).
pub const MIN_ROOM_DIM: i64 = 2_000;
/// Largest supported room dimension (mm).
pub const MAX_ROOM_DIM: i64 = 50_000;

/// One of the four walls of the room.
/// The coordinate origin sits in the top-left corner, so `Top` is y = 0 and
/// `Left` is x = 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WallSide {
    Top,
    Bottom,
    Left,
    Right,
}

impl WallSide {
    pub fn opposite(self) -> WallSide {
        match self {
            WallSide::Top => WallSide::Bottom,
            WallSide::Bottom => WallSide::Top,
            WallSide::Left => WallSide::Right,
            WallSide::Right => WallSide::Left,
        }
    }

    /// Unit normal pointing from the wall into the room.
    pub fn inward(self) -> (i64, i64) {
        match self {
            WallSide::Top => (0, 1),
            WallSide::Bottom => (0, -1),
            WallSide::Left => (1, 0),
            WallSide::Right => (-1, 0),
        }
    }

    /// True for walls that run along the x-axis (`Top` and `Bottom`).
    pub fn is_horizontal(self) -> bool {
        matches!(self, WallSide::Top | WallSide::Bottom)
    }
}

/// A rectangular room, in millimeters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub w: i64,
    pub d: i64,
}

impl Room {
    /// Validating constructor; both dimensions must lie within
    /// [`MIN_ROOM_DIM`]..=[`MAX_ROOM_DIM`].
    pub fn try_new(w: i64, d: i64) -> Result<Self, PlanError> {
        if !(MIN_ROOM_DIM..=MAX_ROOM_DIM).contains(&w) || !(MIN_ROOM_DIM..=MAX_ROOM_DIM).contains(&d)
        {
            return Err(PlanError::InvalidRoom { w, d });
        }
        Ok(Room { w, d })
    }

    pub fn area(&self) -> i64 {
        self.w * self.d
    }

    /// True iff `r` lies entirely inside the room.
    pub fn contains(&self, r: &Rect) -> bool {
        r.x >= 0 && r.y >= 0 && r.x2() <= self.w && r.y2() <= self.d
    }

    /// Length of the given wall.
    pub fn wall_len(&self, wall: WallSide) -> i64 {
        match wall {
            WallSide::Top | WallSide::Bottom => self.w,
            WallSide::Left | WallSide::Right => self.d,
        }
    }
}

/// Door specification: which wall it sits on, its width along that wall and
/// an optional offset from the wall's starting corner. A `None` offset
/// centers the door on its wall.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Door {
    pub side: WallSide,
    pub width: i64,
    pub offset: Option<i64>,
}

/// The door's clearance obstacle, as built by [`ObstacleField::build`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoorZone {
    /// Buffer rectangle: the door's footprint expanded inward by the
    /// configured buffer depth. Always part of the obstacle blocks.
    pub rect: Rect,
    pub side: WallSide,
    /// In-room extent of the clearance: midpoint of the buffer's inner edge.
    pub tip: Point,
}

impl DoorZone {
    /// The free corridor in front of the door: the buffer rectangle extended
    /// inward by `extra` mm. Pattern generators keep this strip clear.
    pub fn corridor(&self, extra: i64) -> Rect {
        let r = self.rect;
        match self.side {
            WallSide::Top => Rect::new(r.x, r.y, r.w, r.d + extra),
            WallSide::Bottom => Rect::new(r.x, r.y - extra, r.w, r.d + extra),
            WallSide::Left => Rect::new(r.x, r.y, r.w + extra, r.d),
            WallSide::Right => Rect::new(r.x - extra, r.y, r.w + extra, r.d),
        }
    }
}

/// The forbidden zones of a run: door buffer first, then the pillars in
/// input order. Built once, read-only afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObstacleField {
    pub blocks: Vec<Rect>,
    pub door: Option<DoorZone>,
}

impl ObstacleField {
    pub fn build(room: Room, door: Option<Door>, pillars: &[Rect], cfg: &PlanConfig) -> Self {
        let mut blocks = Vec::with_capacity(pillars.len() + 1);

        let door = door.map(|door| {
            let zone = build_door_zone(room, door, cfg);
            blocks.push(zone.rect);
            zone
        });
        blocks.extend_from_slice(pillars);

        ObstacleField { blocks, door }
    }

    pub fn door_tip(&self) -> Option<Point> {
        self.door.map(|d| d.tip)
    }

    /// Door corridor under the given clearance depth, if there is a door.
    pub fn door_corridor(&self, extra: i64) -> Option<Rect> {
        self.door.map(|d| d.corridor(extra))
    }
}

fn build_door_zone(room: Room, door: Door, cfg: &PlanConfig) -> DoorZone {
    let depth = cfg.door_buffer_depth;
    let max_offset = i64::max(0, room.wall_len(door.side) - door.width);
    let offset = match door.offset {
        // an unspecified offset centers the door on its wall
        None => max_offset / 2,
        Some(o) => o.clamp(0, max_offset),
    };

    let rect = match door.side {
        WallSide::Top => Rect::new(offset, 0, door.width, depth),
        WallSide::Bottom => Rect::new(offset, room.d - depth, door.width, depth),
        WallSide::Left => Rect::new(0, offset, depth, door.width),
        WallSide::Right => Rect::new(room.w - depth, offset, depth, door.width),
    };

    // midpoint of the buffer's room-facing edge
    let tip = match door.side {
        WallSide::Top => Point(rect.x + rect.w / 2, rect.y2()),
        WallSide::Bottom => Point(rect.x + rect.w / 2, rect.y),
        WallSide::Left => Point(rect.x2(), rect.y + rect.d / 2),
        WallSide::Right => Point(rect.x, rect.y + rect.d / 2),
    };

    DoorZone {
        rect,
        side: door.side,
        tip,
    }
}
