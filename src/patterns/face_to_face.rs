use crate::entities::catalog::Catalog;
use crate::entities::layout::{LayoutPlan, Pattern};
use crate::entities::room::{ObstacleField, Room, WallSide};
use crate::error::PlanError;
use crate::patterns::cursor::WallCursor;
use crate::patterns::walk::SeatWalk;
use crate::util::PlanConfig;

/// Reduced door clearance for the centered face-to-face block (mm). Policy
/// constant: the block is set back from every wall by construction, so the
/// full corridor depth is not required in front of it.
pub const FACE_TO_FACE_DOOR_CLEARANCE: i64 = 200;

/// Mirrored desk rows back-to-back at the room's horizontal center, chairs
/// facing outward. Expands sideways by pair columns until the quota is met
/// or the width is exhausted; an odd quota leaves a single desk in the last
/// column.
pub fn place_face_to_face(
    room: Room,
    catalog: &Catalog,
    desk_key: &str,
    seats_required: usize,
    field: &ObstacleField,
    cfg: &PlanConfig,
) -> Result<LayoutPlan, PlanError> {
    let desk = *catalog.desk(desk_key)?;
    let block_d = desk.unit_d() * 2;
    let mut walk = SeatWalk::new(
        room,
        cfg,
        desk_key,
        desk,
        field,
        field.door_corridor(FACE_TO_FACE_DOOR_CLEARANCE),
        seats_required,
    );

    if room.d < block_d {
        return Ok(walk.into_plan(Pattern::FaceToFace));
    }

    // vertical band: biased away from a top/bottom door, then clamped so
    // the chairs keep their back clearance to the walls
    let mut y0 = (room.d - block_d) / 2;
    match field.door.map(|z| z.side) {
        Some(WallSide::Top) => y0 = room.d - block_d,
        Some(WallSide::Bottom) => y0 = 0,
        _ => {}
    }
    let min_back = i64::max(cfg.chair_reach(), cfg.min_back_clearance);
    let y0_max = room.d - block_d - min_back;
    if y0_max < min_back {
        return Ok(walk.into_plan(Pattern::FaceToFace));
    }
    y0 = y0.clamp(min_back, y0_max);

    // shift the band off a left/right door when it overlaps it
    if let Some(zone) = field.door {
        if !zone.side.is_horizontal() {
            let dr = zone.rect;
            if !(y0 + block_d <= dr.y || y0 >= dr.y2()) {
                if dr.y2() + block_d <= room.d {
                    y0 = dr.y2();
                } else if dr.y - block_d >= 0 {
                    y0 = dr.y - block_d;
                }
            }
        }
    }

    // columns start on the side away from the door, centered without one
    let columns = seats_required.div_ceil(2) as i64;
    let total_w = columns * desk.w;
    let x_start = match field.door.map(|z| z.side) {
        Some(WallSide::Left) => room.w - total_w,
        Some(_) => 0,
        None => (room.w - total_w) / 2,
    };

    let mut cursor = WallCursor::forward_from(x_start, room.w - desk.w, desk.w);
    while !walk.quota_met() {
        let Some(x) = cursor.current() else { break };
        match walk.try_pair_column(x, y0) {
            true => cursor.accept(desk.w),
            false => cursor.reject(),
        }
    }

    Ok(walk.into_plan(Pattern::FaceToFace))
}
