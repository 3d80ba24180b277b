use crate::entities::catalog::Catalog;
use crate::entities::layout::{LayoutPlan, Pattern};
use crate::entities::room::{ObstacleField, Room, WallSide};
use crate::error::PlanError;
use crate::patterns::cursor::WallCursor;
use crate::patterns::walk::SeatWalk;
use crate::util::PlanConfig;

/// Interleaved seat-unit walk on the left and right walls, alternating which
/// wall receives the next unit; each wall stops independently on exhaustion
/// or quota.
pub fn place_double_wall(
    room: Room,
    catalog: &Catalog,
    desk_key: &str,
    seats_required: usize,
    field: &ObstacleField,
    cfg: &PlanConfig,
) -> Result<LayoutPlan, PlanError> {
    double_walk(
        room,
        catalog,
        desk_key,
        seats_required,
        field,
        cfg,
        [WallSide::Left, WallSide::Right],
        false,
    )
}

/// Top/bottom-wall variant of [`place_double_wall`]. `from_end` walks both
/// walls from the right corner instead (used when the door sits in the left
/// half of the room).
pub fn place_double_wall_top_bottom(
    room: Room,
    catalog: &Catalog,
    desk_key: &str,
    seats_required: usize,
    field: &ObstacleField,
    cfg: &PlanConfig,
    from_end: bool,
) -> Result<LayoutPlan, PlanError> {
    double_walk(
        room,
        catalog,
        desk_key,
        seats_required,
        field,
        cfg,
        [WallSide::Top, WallSide::Bottom],
        from_end,
    )
}

fn double_walk(
    room: Room,
    catalog: &Catalog,
    desk_key: &str,
    seats_required: usize,
    field: &ObstacleField,
    cfg: &PlanConfig,
    walls: [WallSide; 2],
    from_end: bool,
) -> Result<LayoutPlan, PlanError> {
    let desk = *catalog.desk(desk_key)?;
    let mut walk = SeatWalk::new(
        room,
        cfg,
        desk_key,
        desk,
        field,
        field.door_corridor(cfg.door_clear_depth),
        seats_required,
    );

    let stride = desk.w;
    let max_pos = room.wall_len(walls[0]) - stride;
    let new_cursor = || match from_end {
        false => WallCursor::forward(max_pos, stride),
        true => WallCursor::reverse(max_pos, stride),
    };
    let mut cursors = [new_cursor(), new_cursor()];

    while !walk.quota_met() && cursors.iter().any(|c| c.current().is_some()) {
        for (wall, cursor) in walls.iter().zip(cursors.iter_mut()) {
            if walk.quota_met() {
                break;
            }
            if let Some(pos) = cursor.current() {
                match walk.try_wall_unit(*wall, pos) {
                    true => cursor.accept(stride),
                    false => cursor.reject(),
                }
            }
        }
    }

    let pattern = match walls[0].is_horizontal() {
        true => Pattern::DoubleWallTopBottom,
        false => Pattern::DoubleWall,
    };
    Ok(walk.into_plan(pattern))
}
