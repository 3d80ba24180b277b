use crate::entities::catalog::Catalog;
use crate::entities::layout::{LayoutPlan, Pattern};
use crate::entities::room::{ObstacleField, Room, WallSide};
use crate::error::PlanError;
use crate::patterns::cursor::WallCursor;
use crate::patterns::face_to_face::FACE_TO_FACE_DOOR_CLEARANCE;
use crate::patterns::walk::SeatWalk;
use crate::util::PlanConfig;

/// Gap between the wall segment and the face-to-face block (mm).
const WALL_BLOCK_GAP: i64 = 100;

/// Wall segment plus a face-to-face block for the remaining quota. The wall
/// sub-plan places at most `wall_seats` units on `wall_side`; its committed
/// units are obstacles for the face-to-face sub-plan, so the two regions
/// cannot overlap.
pub fn place_mixed(
    room: Room,
    catalog: &Catalog,
    desk_key: &str,
    seats_required: usize,
    wall_side: WallSide,
    wall_seats: usize,
    field: &ObstacleField,
    cfg: &PlanConfig,
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

    // wall segment first
    let stride = desk.w;
    let mut cursor = WallCursor::forward(room.wall_len(wall_side) - stride, stride);
    let wall_quota = usize::min(wall_seats, seats_required);
    let mut on_wall = 0usize;
    while on_wall < wall_quota {
        let Some(pos) = cursor.current() else { break };
        match walk.try_wall_unit(wall_side, pos) {
            true => {
                on_wall += 1;
                cursor.accept(stride);
            }
            false => cursor.reject(),
        }
    }

    // face-to-face block for the remainder, offset past the wall segment
    let block_d = desk.unit_d() * 2;
    if !walk.quota_met() && room.d >= block_d {
        walk.set_corridor(field.door_corridor(FACE_TO_FACE_DOOR_CLEARANCE));
        let y0 = (room.d - block_d) / 2;
        let x_start = match wall_side {
            WallSide::Left => desk.unit_d() + WALL_BLOCK_GAP,
            _ => 0,
        };
        let mut cursor = WallCursor::forward_from(x_start, room.w - desk.w, desk.w);
        while !walk.quota_met() {
            let Some(x) = cursor.current() else { break };
            match walk.try_pair_column(x, y0) {
                true => cursor.accept(desk.w),
                false => cursor.reject(),
            }
        }
    }

    Ok(walk.into_plan(Pattern::Mixed))
}
