//! Desk+chair unit builder: derives chair rectangles from desks, validates
//! whole units and appends them to a growing item sequence.

use crate::collision;
use crate::entities::catalog::DeskSpec;
use crate::entities::item::PlacementItem;
use crate::entities::room::{Room, WallSide};
use crate::geometry::primitives::Rect;
use crate::util::PlanConfig;

/// Chair rectangle for a desk, with the chair sitting on the desk edge named
/// by `side`, offset by the configured desk gap. On `Top`/`Bottom` the chair
/// is centered on the desk's width, on `Left`/`Right` on its depth.
pub fn chair_rect(desk: Rect, side: WallSide, cfg: &PlanConfig) -> Rect {
    let chair = cfg.chair_size;
    let gap = cfg.chair_desk_gap;
    let (x, y) = match side {
        WallSide::Top => (desk.x + (desk.w - chair) / 2, desk.y - gap - chair),
        WallSide::Bottom => (desk.x + (desk.w - chair) / 2, desk.y2() + gap),
        WallSide::Left => (desk.x - gap - chair, desk.y + (desk.d - chair) / 2),
        WallSide::Right => (desk.x2() + gap, desk.y + (desk.d - chair) / 2),
    };
    Rect::new(x, y, chair, chair)
}

/// Desk and chair rectangles for a unit anchored to `wall` at offset `pos`
/// along it. The wall fixes the desk orientation (horizontal run on
/// top/bottom walls, vertical run on left/right walls) and puts the chair on
/// the desk's room-facing side. Returns `(desk, chair, chair_side)`.
pub fn wall_unit(
    room: Room,
    desk: &DeskSpec,
    wall: WallSide,
    pos: i64,
    cfg: &PlanConfig,
) -> (Rect, Rect, WallSide) {
    let (desk_rect, chair_side) = match wall {
        WallSide::Top => (Rect::new(pos, 0, desk.w, desk.d), WallSide::Bottom),
        WallSide::Bottom => (
            Rect::new(pos, room.d - desk.d, desk.w, desk.d),
            WallSide::Top,
        ),
        WallSide::Left => (Rect::new(0, pos, desk.d, desk.w), WallSide::Right),
        WallSide::Right => (
            Rect::new(room.w - desk.d, pos, desk.d, desk.w),
            WallSide::Left,
        ),
    };
    let chair = chair_rect(desk_rect, chair_side, cfg);
    (desk_rect, chair, chair_side)
}

/// Validates desk and chair independently against room containment and the
/// obstacle set. A desk that fits but whose chair collides rejects the unit
/// as a whole.
pub fn can_place_unit(desk: &Rect, chair: &Rect, room: &Room, blocks: &[Rect]) -> bool {
    collision::can_place(desk, room, blocks) && collision::can_place(chair, room, blocks)
}

/// Appends a seat unit (desk first, then chair) with `WS<n>_D` / `WS<n>_C`
/// labels. The chair's occupant faces the desk.
pub fn push_unit(
    items: &mut Vec<PlacementItem>,
    seat_no: usize,
    desk_rect: Rect,
    chair_side: WallSide,
    cfg: &PlanConfig,
) {
    items.push(PlacementItem::Desk {
        rect: desk_rect,
        label: format!("WS{seat_no}_D"),
    });
    items.push(PlacementItem::Chair {
        rect: chair_rect(desk_rect, chair_side, cfg),
        label: format!("WS{seat_no}_C"),
        facing: chair_side.opposite(),
    });
}
