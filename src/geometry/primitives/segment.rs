use serde::{Deserialize, Serialize};

use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::{Point, Rect};

/// Straight line segment between two points, in integer millimeters.
#[derive(Clone, Debug, PartialEq, Eq, Copy, Hash, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Self {
        Segment { start, end }
    }

    pub fn x_min(&self) -> i64 {
        i64::min(self.start.x(), self.end.x())
    }

    pub fn x_max(&self) -> i64 {
        i64::max(self.start.x(), self.end.x())
    }

    pub fn y_min(&self) -> i64 {
        i64::min(self.start.y(), self.end.y())
    }

    pub fn y_max(&self) -> i64 {
        i64::max(self.start.y(), self.end.y())
    }
}

impl CollidesWith<Segment> for Rect {
    fn collides_with(&self, seg: &Segment) -> bool {
        // bounding box rejection
        if seg.x_max() < self.x
            || seg.x_min() > self.x2()
            || seg.y_max() < self.y
            || seg.y_min() > self.y2()
        {
            return false;
        }

        // either endpoint inside the rectangle
        if self.collides_with(&seg.start) || self.collides_with(&seg.end) {
            return true;
        }

        // 2D cross product determines which side of the segment's carrier
        // line a point lies on; if all corners are strictly on one side the
        // segment cannot enter the rectangle.
        let Point(sx, sy) = seg.start;
        let dx = seg.end.x() - sx;
        let dy = seg.end.y() - sy;
        let side = |p: &Point| (p.x() - sx) * dy - (p.y() - sy) * dx;

        let sides = self.corners().map(|c| side(&c));
        let all_positive = sides.iter().all(|&s| s > 0);
        let all_negative = sides.iter().all(|&s| s < 0);
        !(all_positive || all_negative)
    }
}
