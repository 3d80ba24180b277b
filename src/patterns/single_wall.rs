use crate::entities::catalog::Catalog;
use crate::entities::layout::{LayoutPlan, Pattern};
use crate::entities::room::{ObstacleField, Room, WallSide};
use crate::error::PlanError;
use crate::patterns::cursor::WallCursor;
use crate::patterns::walk::SeatWalk;
use crate::util::PlanConfig;

/// Seat-unit walk restricted to one wall. Used when the room depth forces a
/// single row, or when a priority policy asks for maximal corridor width.
/// `from_end` walks from the wall's far corner instead of its starting
/// corner.
pub fn place_single_wall(
    room: Room,
    catalog: &Catalog,
    desk_key: &str,
    seats_required: usize,
    field: &ObstacleField,
    cfg: &PlanConfig,
    side: WallSide,
    from_end: bool,
) -> Result<LayoutPlan, PlanError> {
    let desk = *catalog.desk(desk_key)?;

    // the corridor cannot constrain a row on the wall opposite the door
    let corridor = match field.door {
        Some(zone) if zone.side == side.opposite() => None,
        _ => field.door_corridor(cfg.door_clear_depth),
    };
    let mut walk = SeatWalk::new(room, cfg, desk_key, desk, field, corridor, seats_required);

    let stride = desk.w;
    let max_pos = room.wall_len(side) - stride;
    let mut cursor = match from_end {
        false => WallCursor::forward(max_pos, stride),
        true => WallCursor::reverse(max_pos, stride),
    };

    while !walk.quota_met() {
        let Some(pos) = cursor.current() else { break };
        match walk.try_wall_unit(side, pos) {
            true => cursor.accept(stride),
            false => cursor.reject(),
        }
    }

    Ok(walk.into_plan(Pattern::SingleWall(side)))
}
