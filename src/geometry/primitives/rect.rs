use anyhow::Result;
use anyhow::ensure;
use serde::{Deserialize, Serialize};

use crate::geometry::geo_traits::{CollidesWith, DistanceTo};
use crate::geometry::primitives::Point;

/// Axis-aligned rectangle in integer millimeters.
/// `x`/`y` is the top-left corner, `w` runs along the x-axis, `d` (depth)
/// along the y-axis. Invariant: `w > 0 && d > 0`.
#[derive(Clone, Debug, PartialEq, Eq, Copy, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub w: i64,
    pub d: i64,
}

impl Rect {
    /// Validating constructor for externally supplied dimensions.
    pub fn try_new(x: i64, y: i64, w: i64, d: i64) -> Result<Self> {
        ensure!(
            w > 0 && d > 0,
            "invalid rectangle, w: {w}, d: {d} (both must be positive)"
        );
        Ok(Rect { x, y, w, d })
    }

    /// Constructor for dimensions that are known to be positive.
    pub fn new(x: i64, y: i64, w: i64, d: i64) -> Self {
        debug_assert!(w > 0 && d > 0, "invalid rectangle, w: {w}, d: {d}");
        Rect { x, y, w, d }
    }

    #[inline(always)]
    pub fn x2(&self) -> i64 {
        self.x + self.w
    }

    #[inline(always)]
    pub fn y2(&self) -> i64 {
        self.y + self.d
    }

    pub fn area(&self) -> i64 {
        self.w * self.d
    }

    /// Center of the rectangle, rounded down to whole millimeters.
    pub fn center(&self) -> Point {
        Point(self.x + self.w / 2, self.y + self.d / 2)
    }

    /// Returns a new rectangle expanded by `dx` on both x-sides and `dy` on
    /// both y-sides. Negative values shrink; `None` if the result would be
    /// degenerate.
    pub fn expand(mut self, dx: i64, dy: i64) -> Option<Self> {
        self.x -= dx;
        self.y -= dy;
        self.w += 2 * dx;
        self.d += 2 * dy;
        (self.w > 0 && self.d > 0).then_some(self)
    }

    /// Returns the largest rectangle contained in both `a` and `b`.
    pub fn intersection(a: Rect, b: Rect) -> Option<Rect> {
        let x = i64::max(a.x, b.x);
        let y = i64::max(a.y, b.y);
        let x2 = i64::min(a.x2(), b.x2());
        let y2 = i64::min(a.y2(), b.y2());
        (x < x2 && y < y2).then(|| Rect::new(x, y, x2 - x, y2 - y))
    }

    /// Returns the smallest rectangle containing both `a` and `b`.
    pub fn bounding(a: Rect, b: Rect) -> Rect {
        let x = i64::min(a.x, b.x);
        let y = i64::min(a.y, b.y);
        let x2 = i64::max(a.x2(), b.x2());
        let y2 = i64::max(a.y2(), b.y2());
        Rect::new(x, y, x2 - x, y2 - y)
    }

    pub fn corners(&self) -> [Point; 4] {
        [
            Point(self.x, self.y),
            Point(self.x2(), self.y),
            Point(self.x2(), self.y2()),
            Point(self.x, self.y2()),
        ]
    }
}

impl CollidesWith<Rect> for Rect {
    /// True iff the rectangles overlap with positive area.
    /// Rectangles that merely touch along an edge or corner do not collide.
    #[inline(always)]
    fn collides_with(&self, other: &Rect) -> bool {
        !(self.x2() <= other.x
            || self.x >= other.x2()
            || self.y2() <= other.y
            || self.y >= other.y2())
    }
}

impl CollidesWith<Point> for Rect {
    #[inline(always)]
    fn collides_with(&self, point: &Point) -> bool {
        let Point(x, y) = *point;
        x >= self.x && x <= self.x2() && y >= self.y && y <= self.y2()
    }
}

impl DistanceTo<Point> for Rect {
    #[inline(always)]
    fn distance_to(&self, point: &Point) -> f64 {
        self.sq_distance_to(point).sqrt()
    }

    #[inline(always)]
    fn sq_distance_to(&self, point: &Point) -> f64 {
        let Point(x, y) = *point;
        let dx = if x < self.x {
            self.x - x
        } else if x > self.x2() {
            x - self.x2()
        } else {
            0
        };
        let dy = if y < self.y {
            self.y - y
        } else if y > self.y2() {
            y - self.y2()
        } else {
            0
        };
        (dx * dx + dy * dy) as f64
    }
}
