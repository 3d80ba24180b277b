use log::debug;

use crate::collision;
use crate::entities::catalog::DeskSpec;
use crate::entities::item::PlacementItem;
use crate::entities::layout::{LayoutPlan, Pattern};
use crate::entities::room::{ObstacleField, Room, WallSide};
use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::Rect;
use crate::patterns::unit;
use crate::util::{PlanConfig, assertions};

/// Shared state of a constructive seat walk. Committed unit rectangles
/// double as obstacles for all subsequent placement attempts. Chairs reach
/// slightly beyond their unit rectangle, so committed chair rectangles are
/// tracked as obstacles as well.
pub(crate) struct SeatWalk<'a> {
    room: Room,
    cfg: &'a PlanConfig,
    desk_key: &'a str,
    desk: DeskSpec,
    /// Door buffer + pillars; never grows.
    fixed: Vec<Rect>,
    /// Door corridor this pattern keeps free, if any.
    corridor: Option<Rect>,
    /// Fixed blocks plus every committed unit and chair rectangle.
    placed: Vec<Rect>,
    items: Vec<PlacementItem>,
    seats_placed: usize,
    seats_required: usize,
}

impl<'a> SeatWalk<'a> {
    pub fn new(
        room: Room,
        cfg: &'a PlanConfig,
        desk_key: &'a str,
        desk: DeskSpec,
        field: &ObstacleField,
        corridor: Option<Rect>,
        seats_required: usize,
    ) -> Self {
        SeatWalk {
            room,
            cfg,
            desk_key,
            desk,
            fixed: field.blocks.clone(),
            corridor,
            placed: field.blocks.clone(),
            items: Vec::new(),
            seats_placed: 0,
            seats_required,
        }
    }

    pub fn quota_met(&self) -> bool {
        self.seats_placed >= self.seats_required
    }

    pub fn set_corridor(&mut self, corridor: Option<Rect>) {
        self.corridor = corridor;
    }

    fn corridor_clear(&self, r: &Rect) -> bool {
        match &self.corridor {
            Some(c) => !r.collides_with(c),
            None => true,
        }
    }

    /// Attempts one seat unit anchored to `wall` at `pos`. On success the
    /// unit is committed and becomes an obstacle for later attempts.
    pub fn try_wall_unit(&mut self, wall: WallSide, pos: i64) -> bool {
        let unit_rect = self.wall_unit_rect(wall, pos);
        if !collision::can_place(&unit_rect, &self.room, &self.placed)
            || !self.corridor_clear(&unit_rect)
        {
            return false;
        }
        let (desk_rect, chair, chair_side) =
            unit::wall_unit(self.room, &self.desk, wall, pos, self.cfg);
        if !unit::can_place_unit(&desk_rect, &chair, &self.room, &self.fixed)
            || collision::collides_any(&chair, &self.placed)
        {
            debug!("unit at {wall:?}/{pos} rejected: desk or chair blocked");
            return false;
        }
        self.placed.push(unit_rect);
        self.placed.push(chair);
        self.seats_placed += 1;
        unit::push_unit(&mut self.items, self.seats_placed, desk_rect, chair_side, self.cfg);
        true
    }

    /// Attempts a face-to-face pair column at `x`, spanning two unit depths
    /// from `y0`. Places up to two mirrored seats, bounded by the remaining
    /// quota.
    pub fn try_pair_column(&mut self, x: i64, y0: i64) -> bool {
        let unit_d = self.desk.unit_d();
        let column = Rect::new(x, y0, self.desk.w, unit_d * 2);
        if !collision::can_place(&column, &self.room, &self.placed)
            || !self.corridor_clear(&column)
        {
            return false;
        }

        let mid = y0 + unit_d;
        let top_desk = Rect::new(x, mid - self.desk.d, self.desk.w, self.desk.d);
        let bottom_desk = Rect::new(x, mid, self.desk.w, self.desk.d);
        let top_chair = unit::chair_rect(top_desk, WallSide::Top, self.cfg);
        let bottom_chair = unit::chair_rect(bottom_desk, WallSide::Bottom, self.cfg);
        if !unit::can_place_unit(&top_desk, &top_chair, &self.room, &self.fixed)
            || !unit::can_place_unit(&bottom_desk, &bottom_chair, &self.room, &self.fixed)
            || collision::collides_any(&top_chair, &self.placed)
            || collision::collides_any(&bottom_chair, &self.placed)
        {
            return false;
        }

        self.placed.push(column);
        self.placed.push(top_chair);
        self.seats_placed += 1;
        unit::push_unit(&mut self.items, self.seats_placed, top_desk, WallSide::Top, self.cfg);
        if !self.quota_met() {
            self.placed.push(bottom_chair);
            self.seats_placed += 1;
            unit::push_unit(
                &mut self.items,
                self.seats_placed,
                bottom_desk,
                WallSide::Bottom,
                self.cfg,
            );
        }
        true
    }

    fn wall_unit_rect(&self, wall: WallSide, pos: i64) -> Rect {
        let depth = self.desk.unit_d();
        let along = self.desk.w;
        match wall {
            WallSide::Top => Rect::new(pos, 0, along, depth),
            WallSide::Bottom => Rect::new(pos, self.room.d - depth, along, depth),
            WallSide::Left => Rect::new(0, pos, depth, along),
            WallSide::Right => Rect::new(self.room.w - depth, pos, depth, along),
        }
    }

    /// Freezes the walk into a plan. `ok` reflects whether the quota was met.
    pub fn into_plan(self, pattern: Pattern) -> LayoutPlan {
        debug_assert!(assertions::items_pairwise_disjoint(&self.items));
        debug_assert!(assertions::items_inside_room(&self.items, &self.room));
        debug!(
            "{pattern:?} walk done: {}/{} seats ({})",
            self.seats_placed, self.seats_required, self.desk_key
        );
        LayoutPlan {
            ok: self.seats_placed >= self.seats_required,
            seats_placed: self.seats_placed,
            seats_required: self.seats_required,
            equipment_placed: 0,
            equipment_target: 0,
            desk_key: self.desk_key.to_string(),
            pattern,
            items: self.items,
        }
    }
}
