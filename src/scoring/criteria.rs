use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::entities::layout::LayoutPlan;
use crate::entities::room::{ObstacleField, Room, WallSide};
use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::{Point, Rect, Segment};
use crate::scoring::weights::WeightProfile;
use crate::util::PlanConfig;

// Reference values for grading, in mm. Passage minimums come from the run
// configuration; the rest are layout-design reference figures.
const SUB_AISLE_MIN: i64 = 900;
const ONE_PERSON_MIN: i64 = 600;
const WINDOW_PROXIMITY_OPTIMAL: f64 = 2_000.0;
const WINDOW_PROXIMITY_MAX: f64 = 5_000.0;
const AREA_PER_SEAT_OPTIMAL: i64 = 10_000_000; // 10 m² per seat
const SEAT_CLEARANCE: i64 = 300; // inflation of a chair rect into its clearance zone

/// Walls carrying windows when the caller does not specify them.
pub const DEFAULT_WINDOW_WALLS: [WallSide; 2] = [WallSide::Top, WallSide::Right];

/// Per-criterion normalized scores of one plan. Every field except `total`
/// lies in `[0, 1]`; `total` is the weighted sum.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub seat_count: f64,
    pub passage_width: f64,
    pub natural_light: f64,
    pub traffic_flow: f64,
    pub face_to_face_bonus: f64,
    pub space_efficiency: f64,
    pub total: f64,
}

/// Everything the scoring engine needs to know about the surroundings of a
/// plan.
#[derive(Clone, Copy, Debug)]
pub struct ScoreContext<'a> {
    pub room: Room,
    pub door_tip: Option<Point>,
    pub window_walls: &'a [WallSide],
    pub cfg: &'a PlanConfig,
}

impl<'a> ScoreContext<'a> {
    /// Context with the conventional window walls (top and right).
    pub fn new(room: Room, field: &ObstacleField, cfg: &'a PlanConfig) -> Self {
        ScoreContext {
            room,
            door_tip: field.door_tip(),
            window_walls: &DEFAULT_WINDOW_WALLS,
            cfg,
        }
    }
}

/// Scores one plan. An infeasible plan scores zero across the board.
pub fn score_plan(
    plan: &LayoutPlan,
    ctx: &ScoreContext,
    weights: &WeightProfile,
) -> ScoreBreakdown {
    if !plan.ok {
        return ScoreBreakdown::default();
    }

    let mut b = ScoreBreakdown {
        seat_count: seat_count_score(plan, &ctx.room),
        passage_width: passage_score(plan, ctx),
        natural_light: natural_light_score(plan, ctx),
        traffic_flow: traffic_flow_score(plan, ctx),
        face_to_face_bonus: match plan.pattern.is_face_to_face() {
            true => 1.0,
            false => 0.0,
        },
        space_efficiency: space_efficiency_score(plan, &ctx.room),
        total: 0.0,
    };
    b.total = b.seat_count * weights.seat_count
        + b.passage_width * weights.passage_width
        + b.natural_light * weights.natural_light
        + b.traffic_flow * weights.traffic_flow
        + b.face_to_face_bonus * weights.face_to_face_bonus
        + b.space_efficiency * weights.space_efficiency;
    b
}

/// Achieved fraction of the theoretical seat capacity of the room at the
/// recommended area per seat.
fn seat_count_score(plan: &LayoutPlan, room: &Room) -> f64 {
    if plan.seats_placed == 0 {
        return 0.0;
    }
    let theoretical_max = i64::max(1, room.area() / AREA_PER_SEAT_OPTIMAL);
    f64::min(plan.seats_placed as f64 / theoretical_max as f64, 1.0)
}

/// Widest contiguous free corridor between opposing desk rows, graded
/// against the configured passage widths.
fn passage_score(plan: &LayoutPlan, ctx: &ScoreContext) -> f64 {
    let desks = plan.desk_rects().collect_vec();
    if desks.is_empty() {
        return 1.0;
    }
    let room = ctx.room;

    let gap_between = |lo: Vec<&Rect>, hi: Vec<&Rect>, full: i64, horizontal: bool| -> i64 {
        if lo.is_empty() || hi.is_empty() {
            return full;
        }
        let (lo_edge, hi_edge) = match horizontal {
            true => (
                lo.iter().map(|r| r.x2()).max().unwrap(),
                hi.iter().map(|r| r.x).min().unwrap(),
            ),
            false => (
                lo.iter().map(|r| r.y2()).max().unwrap(),
                hi.iter().map(|r| r.y).min().unwrap(),
            ),
        };
        i64::max(0, hi_edge - lo_edge)
    };

    // corridor between the left and right halves
    let (left, right): (Vec<_>, Vec<_>) = desks.iter().partition(|r| r.x < room.w / 2);
    let gap_x = gap_between(left, right, room.w, true);

    // corridor between the top and bottom halves
    let (top, bottom): (Vec<_>, Vec<_>) = desks.iter().partition(|r| r.y < room.d / 2);
    let gap_y = gap_between(top, bottom, room.d, false);

    grade_corridor(i64::max(gap_x, gap_y), ctx.cfg)
}

fn grade_corridor(gap: i64, cfg: &PlanConfig) -> f64 {
    let main_min = cfg.min_passage_width;
    let main_opt = cfg.recommended_passage_width;
    if gap >= main_opt {
        1.0
    } else if gap >= main_min {
        0.7 + 0.3 * (gap - main_min) as f64 / (main_opt - main_min) as f64
    } else if gap >= SUB_AISLE_MIN {
        0.4 + 0.3 * (gap - SUB_AISLE_MIN) as f64 / (main_min - SUB_AISLE_MIN) as f64
    } else if gap >= ONE_PERSON_MIN {
        0.2 + 0.2 * (gap - ONE_PERSON_MIN) as f64 / (SUB_AISLE_MIN - ONE_PERSON_MIN) as f64
    } else {
        0.0
    }
}

/// Mean per-desk proximity to the nearest window wall.
fn natural_light_score(plan: &LayoutPlan, ctx: &ScoreContext) -> f64 {
    let desks = plan.desk_rects().collect_vec();
    if desks.is_empty() {
        return 0.5;
    }
    let room = ctx.room;

    let total: f64 = desks
        .iter()
        .map(|desk| {
            let c = desk.center();
            let dist = ctx
                .window_walls
                .iter()
                .map(|wall| match wall {
                    WallSide::Top => c.y(),
                    WallSide::Bottom => room.d - c.y(),
                    WallSide::Left => c.x(),
                    WallSide::Right => room.w - c.x(),
                })
                .min();
            match dist {
                None => 0.5,
                Some(d) => grade_window_distance(d as f64),
            }
        })
        .sum();
    total / desks.len() as f64
}

fn grade_window_distance(dist: f64) -> f64 {
    if dist <= WINDOW_PROXIMITY_OPTIMAL {
        1.0
    } else if dist <= WINDOW_PROXIMITY_MAX {
        0.3 + 0.7 * (WINDOW_PROXIMITY_MAX - dist) / (WINDOW_PROXIMITY_MAX - WINDOW_PROXIMITY_OPTIMAL)
    } else {
        f64::max(
            0.0,
            0.3 * (1.0 - (dist - WINDOW_PROXIMITY_MAX) / WINDOW_PROXIMITY_MAX),
        )
    }
}

/// Fraction of seats whose straight path to the door stays clear of every
/// other seat's clearance zone. Neutral without a door.
fn traffic_flow_score(plan: &LayoutPlan, ctx: &ScoreContext) -> f64 {
    let Some(tip) = ctx.door_tip else {
        return 0.5;
    };
    let chairs = plan.chair_rects().collect_vec();
    if chairs.is_empty() {
        return 0.5;
    }
    let zones = chairs
        .iter()
        .map(|c| {
            c.expand(SEAT_CLEARANCE, SEAT_CLEARANCE)
                .expect("inflating a chair rect cannot degenerate")
        })
        .collect_vec();

    let clear = chairs
        .iter()
        .enumerate()
        .filter(|(i, chair)| {
            let path = Segment::new(chair.center(), tip);
            zones
                .iter()
                .enumerate()
                .all(|(j, zone)| j == *i || !zone.collides_with(&path))
        })
        .count();
    clear as f64 / chairs.len() as f64
}

/// Occupied furniture area over room area, graded against the ideal
/// 25-45 % occupancy band.
fn space_efficiency_score(plan: &LayoutPlan, room: &Room) -> f64 {
    if plan.items.is_empty() {
        return 0.0;
    }
    let ratio = plan.furniture_area() as f64 / room.area() as f64;
    if (0.25..=0.45).contains(&ratio) {
        1.0
    } else if ratio < 0.15 {
        ratio / 0.15 * 0.5
    } else if ratio < 0.25 {
        0.5 + (ratio - 0.15) / 0.10 * 0.5
    } else if ratio <= 0.55 {
        1.0 - (ratio - 0.45) / 0.10 * 0.3
    } else {
        f64::max(0.3, 0.7 - (ratio - 0.55) / 0.20 * 0.4)
    }
}
