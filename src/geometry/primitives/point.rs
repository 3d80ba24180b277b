use serde::{Deserialize, Serialize};

use crate::geometry::geo_traits::DistanceTo;

/// A point in the floor plane, in integer millimeters.
/// The origin is the room's top-left corner, y grows towards the bottom wall.
#[derive(Clone, Debug, PartialEq, Eq, Copy, Hash, Serialize, Deserialize)]
pub struct Point(pub i64, pub i64);

impl Point {
    pub fn x(&self) -> i64 {
        self.0
    }

    pub fn y(&self) -> i64 {
        self.1
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Point(x, y)
    }
}

impl DistanceTo<Point> for Point {
    fn distance_to(&self, other: &Point) -> f64 {
        self.sq_distance_to(other).sqrt()
    }

    fn sq_distance_to(&self, other: &Point) -> f64 {
        let dx = (self.0 - other.0) as f64;
        let dy = (self.1 - other.1) as f64;
        dx * dx + dy * dy
    }
}
