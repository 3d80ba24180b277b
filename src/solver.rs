//! Fans the pattern generators out across the acceptable desk types and
//! picks the best candidate under the placement priority token. The
//! candidate batch can also be handed to [`crate::scoring::compare_layouts`]
//! for multi-criteria ranking.

use log::debug;

use crate::entities::catalog::Catalog;
use crate::entities::layout::LayoutPlan;
use crate::entities::room::{Door, ObstacleField, Room, WallSide};
use crate::error::PlanError;
use crate::geometry::primitives::Rect;
use crate::patterns::{
    fill_equipment, place_double_wall, place_double_wall_top_bottom, place_face_to_face,
    place_mixed, place_single_wall,
};
use crate::util::PlanConfig;

/// Placement priority token: what to maximize first when candidates tie on
/// feasibility and seat count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Priority {
    /// Prefer plans that fit more equipment.
    Equipment,
    /// Prefer plans with larger desk surfaces.
    Desk,
    /// Like [`Priority::Desk`], restricted to 1200mm-wide desk types.
    Desk1200,
}

/// One placement request, fully resolved: the catalog and configuration are
/// supplied separately and all values are read-only for the run.
#[derive(Clone, Debug)]
pub struct PlanRequest {
    pub room: Room,
    pub door: Option<Door>,
    pub pillars: Vec<Rect>,
    pub seats_required: usize,
    /// Acceptable desk types, in preference order. Empty means the default
    /// candidate list for the priority token.
    pub desk_keys: Vec<String>,
    pub equipment_keys: Vec<String>,
    pub priority: Priority,
}

/// Default desk candidate list for a priority token.
pub fn default_desk_candidates(priority: Priority) -> Vec<String> {
    let keys: &[&str] = match priority {
        Priority::Desk1200 => &["ws_1200x600", "ws_1200x700"],
        _ => &["ws_1200x600", "ws_1000x600", "ws_1200x700"],
    };
    keys.iter().map(|k| k.to_string()).collect()
}

/// Generates the full candidate batch for a request: the door-side-aware
/// wall patterns plus face-to-face and mixed, for every acceptable desk
/// type, each offered the requested equipment afterwards.
pub fn generate_candidates(
    req: &PlanRequest,
    catalog: &Catalog,
    cfg: &PlanConfig,
) -> Result<Vec<LayoutPlan>, PlanError> {
    let room = Room::try_new(req.room.w, req.room.d)?;
    let field = ObstacleField::build(room, req.door, &req.pillars, cfg);
    let seats = req.seats_required;

    let desk_keys = match req.desk_keys.is_empty() {
        true => default_desk_candidates(req.priority),
        false => req.desk_keys.clone(),
    };

    let mut out = Vec::new();
    for key in &desk_keys {
        let mut candidates = Vec::new();

        match req.door.map(|d| d.side) {
            Some(side @ (WallSide::Left | WallSide::Right)) => {
                // rows on the long walls, walked away from the door corner
                let from_end = side == WallSide::Left;
                candidates.push(place_double_wall_top_bottom(
                    room, catalog, key, seats, &field, cfg, from_end,
                )?);
            }
            Some(side @ (WallSide::Top | WallSide::Bottom)) => {
                // a single row on the wall opposite the door, walked from
                // the corner farther from it
                let from_end = match req.door.and_then(|d| d.offset) {
                    Some(offset) => offset * 2 < room.w,
                    None => false,
                };
                candidates.push(place_single_wall(
                    room,
                    catalog,
                    key,
                    seats,
                    &field,
                    cfg,
                    side.opposite(),
                    from_end,
                )?);
            }
            None => {
                candidates.push(place_double_wall(room, catalog, key, seats, &field, cfg)?);
                candidates.push(place_double_wall_top_bottom(
                    room, catalog, key, seats, &field, cfg, false,
                )?);
                candidates.push(place_single_wall(
                    room,
                    catalog,
                    key,
                    seats,
                    &field,
                    cfg,
                    WallSide::Left,
                    false,
                )?);
                candidates.push(place_single_wall(
                    room,
                    catalog,
                    key,
                    seats,
                    &field,
                    cfg,
                    WallSide::Right,
                    false,
                )?);
            }
        }

        candidates.push(place_face_to_face(room, catalog, key, seats, &field, cfg)?);

        let mixed_wall = match req.door.map(|d| d.side) {
            Some(side) => side.opposite(),
            None => WallSide::Left,
        };
        let wall_seats = usize::max(1, seats / 2);
        candidates.push(place_mixed(
            room, catalog, key, seats, mixed_wall, wall_seats, &field, cfg,
        )?);

        for candidate in candidates {
            let filled =
                fill_equipment(candidate, room, catalog, &req.equipment_keys, &field, cfg)?;
            debug!(
                "candidate {:?}/{}: ok={} seats={}/{} equipment={}/{}",
                filled.pattern,
                filled.desk_key,
                filled.ok,
                filled.seats_placed,
                filled.seats_required,
                filled.equipment_placed,
                filled.equipment_target,
            );
            out.push(filled);
        }
    }
    Ok(out)
}

/// Solves a request: the best candidate under the priority token. The
/// result may be infeasible (`ok == false`); it is then the best partial
/// arrangement, so the caller can present "partially satisfied" instead of
/// aborting.
pub fn solve(
    req: &PlanRequest,
    catalog: &Catalog,
    cfg: &PlanConfig,
) -> Result<LayoutPlan, PlanError> {
    let candidates = generate_candidates(req, catalog, cfg)?;
    let mut best: Option<LayoutPlan> = None;
    for candidate in candidates {
        let better = match &best {
            None => true,
            // strictly greater: earlier candidates win ties
            Some(b) => {
                priority_key(&candidate, req.priority, catalog)
                    > priority_key(b, req.priority, catalog)
            }
        };
        if better {
            best = Some(candidate);
        }
    }
    Ok(best.expect("candidate batch is never empty"))
}

/// Lexicographic comparison key for a plan under a priority token.
fn priority_key(plan: &LayoutPlan, priority: Priority, catalog: &Catalog) -> (i64, i64, i64, i64) {
    let ok = plan.ok as i64;
    let seats = plan.seats_placed as i64;
    let equipment = plan.equipment_placed as i64;
    let desk_area = catalog
        .desks
        .get(&plan.desk_key)
        .map(|d| d.area())
        .unwrap_or(0);
    match priority {
        Priority::Desk | Priority::Desk1200 => (ok, seats, desk_area, equipment),
        Priority::Equipment => (ok, seats, equipment, desk_area),
    }
}
