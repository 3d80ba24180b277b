use itertools::Itertools;
use log::debug;

use crate::collision;
use crate::entities::catalog::{Catalog, ItemSpec};
use crate::entities::item::PlacementItem;
use crate::entities::layout::LayoutPlan;
use crate::entities::room::{DoorZone, ObstacleField, Room, WallSide};
use crate::error::PlanError;
use crate::geometry::primitives::Rect;
use crate::patterns::cursor::WallCursor;
use crate::util::PlanConfig;

/// Offers the free wall-adjacent space of a seat plan to storage/equipment
/// items. Walls are tried in a fixed order with the door's wall last; on the
/// door's wall the walk starts from the corner farther from the door. Items
/// are rotated so their long side runs along the wall, and each item needs
/// its front-clearance strip (an exclusive no-place strip on its room-facing
/// side) free in addition to the standard collision rule. Items that fit
/// nowhere are skipped, never an error.
pub fn fill_equipment(
    mut plan: LayoutPlan,
    room: Room,
    catalog: &Catalog,
    keys: &[String],
    field: &ObstacleField,
    cfg: &PlanConfig,
) -> Result<LayoutPlan, PlanError> {
    plan.equipment_target = keys.len();
    plan.equipment_placed = 0;
    if keys.is_empty() {
        return Ok(plan);
    }

    // resolve every key up front: an unknown key fails fast
    let specs: Vec<ItemSpec> = keys
        .iter()
        .map(|k| catalog.item(k).copied())
        .collect::<Result<_, _>>()?;

    let mut placed: Vec<_> = field
        .blocks
        .iter()
        .copied()
        .chain(plan.items.iter().map(|i| i.rect()))
        .collect();
    // strips are no-place zones: items must stay out of them, but two strips
    // may overlap each other
    let mut strips: Vec<Rect> = Vec::new();
    let desk_rects = plan.desk_rects().collect_vec();

    let mut walls = vec![
        WallSide::Left,
        WallSide::Right,
        WallSide::Top,
        WallSide::Bottom,
    ];
    if let Some(zone) = field.door {
        walls.retain(|w| *w != zone.side);
        walls.push(zone.side);
    }

    let mut remaining = specs;
    let mut eq_no = 1usize;

    for wall in walls {
        if remaining.is_empty() {
            break;
        }
        let wall_desks = desk_rects
            .iter()
            .copied()
            .filter(|r| touches_wall(r, room, wall))
            .collect_vec();
        let from_end = matches!(
            field.door,
            Some(zone) if zone.side == wall && door_in_near_half(&zone, room, wall)
        );

        let mut next_start = 0i64;
        let mut unplaced = Vec::new();
        for spec in remaining {
            let attempt = try_place_on_wall(
                &spec, wall, from_end, next_start, &mut placed, &mut strips, &wall_desks, room, cfg,
            );
            match attempt {
                Some((rect, walk_end)) => {
                    plan.items
                        .push(PlacementItem::from_kind(spec.kind, rect, format!("EQ{eq_no}")));
                    eq_no += 1;
                    plan.equipment_placed += 1;
                    next_start = walk_end;
                }
                None => unplaced.push(spec),
            }
        }
        remaining = unplaced;
    }

    debug!(
        "equipment fill: {}/{} placed",
        plan.equipment_placed, plan.equipment_target
    );
    Ok(plan)
}

#[allow(clippy::too_many_arguments)]
fn try_place_on_wall(
    spec: &ItemSpec,
    wall: WallSide,
    from_end: bool,
    start: i64,
    placed: &mut Vec<Rect>,
    strips: &mut Vec<Rect>,
    wall_desks: &[Rect],
    room: Room,
    cfg: &PlanConfig,
) -> Option<(Rect, i64)> {
    // long side along the wall, short side out of it
    let along = i64::max(spec.w, spec.d);
    let depth = i64::min(spec.w, spec.d);
    let max_pos = room.wall_len(wall) - along;
    if max_pos < 0 {
        return None;
    }

    let mut cursor = match from_end {
        false => WallCursor::forward_from(start, max_pos, cfg.equipment_probe),
        true => WallCursor::reverse(max_pos, cfg.equipment_probe),
    };

    while let Some(pos) = cursor.current() {
        let rect = wall_rect(wall, pos, along, depth, room);
        let strip = front_strip(wall, &rect, spec.clear_front);
        let strip_free = strip
            .as_ref()
            .is_none_or(|s| collision::can_place(s, &room, placed));
        if collision::can_place(&rect, &room, placed)
            && !collision::collides_any(&rect, strips)
            && strip_free
            && side_clearance_ok(&rect, wall_desks, wall, cfg.desk_side_clearance)
        {
            placed.push(rect);
            if let Some(s) = strip {
                strips.push(s);
            }
            return Some((rect, pos + along + cfg.equipment_clearance));
        }
        cursor.reject();
    }
    None
}

fn wall_rect(
    wall: WallSide,
    pos: i64,
    along: i64,
    depth: i64,
    room: Room,
) -> Rect {
    match wall {
        WallSide::Left => Rect::new(0, pos, depth, along),
        WallSide::Right => Rect::new(room.w - depth, pos, depth, along),
        WallSide::Top => Rect::new(pos, 0, along, depth),
        WallSide::Bottom => Rect::new(pos, room.d - depth, along, depth),
    }
}

/// The exclusive access strip on the item's room-facing side.
fn front_strip(
    wall: WallSide,
    rect: &Rect,
    clear_front: i64,
) -> Option<Rect> {
    if clear_front <= 0 {
        return None;
    }
    Some(match wall {
        WallSide::Left => Rect::new(rect.x2(), rect.y, clear_front, rect.d),
        WallSide::Right => Rect::new(rect.x - clear_front, rect.y, clear_front, rect.d),
        WallSide::Top => Rect::new(rect.x, rect.y2(), rect.w, clear_front),
        WallSide::Bottom => Rect::new(rect.x, rect.y - clear_front, rect.w, clear_front),
    })
}

/// Along-wall gap to every desk row on the same wall must be at least
/// `clearance`.
fn side_clearance_ok(
    rect: &Rect,
    wall_desks: &[Rect],
    wall: WallSide,
    clearance: i64,
) -> bool {
    if clearance <= 0 {
        return true;
    }
    wall_desks.iter().all(|d| {
        let gap = match wall.is_horizontal() {
            true => axis_gap(rect.x, rect.x2(), d.x, d.x2()),
            false => axis_gap(rect.y, rect.y2(), d.y, d.y2()),
        };
        gap >= clearance
    })
}

fn axis_gap(a1: i64, a2: i64, b1: i64, b2: i64) -> i64 {
    if a1 >= b2 {
        a1 - b2
    } else if b1 >= a2 {
        b1 - a2
    } else {
        0
    }
}

fn touches_wall(r: &Rect, room: Room, wall: WallSide) -> bool {
    match wall {
        WallSide::Left => r.x == 0,
        WallSide::Right => r.x2() == room.w,
        WallSide::Top => r.y == 0,
        WallSide::Bottom => r.y2() == room.d,
    }
}

/// True when the door sits in the half of its wall nearer the starting
/// corner; the equipment walk then starts from the far corner.
fn door_in_near_half(zone: &DoorZone, room: Room, wall: WallSide) -> bool {
    match wall.is_horizontal() {
        true => (zone.rect.x + zone.rect.w / 2) * 2 < room.w,
        false => (zone.rect.y + zone.rect.d / 2) * 2 < room.d,
    }
}
