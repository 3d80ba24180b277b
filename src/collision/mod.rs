//! Collision queries against the room boundary and an obstacle set.
//!
//! Obstacle counts stay in the tens here, so a linear scan beats any spatial
//! index.

use crate::entities::room::Room;
use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::Rect;

/// True iff `r` collides with any rectangle in `blocks`.
pub fn collides_any(r: &Rect, blocks: &[Rect]) -> bool {
    blocks.iter().any(|b| r.collides_with(b))
}

/// True iff `r` lies inside the room and collides with none of `blocks`.
/// Cost is O(|blocks|).
pub fn can_place(r: &Rect, room: &Room, blocks: &[Rect]) -> bool {
    room.contains(r) && !collides_any(r, blocks)
}
