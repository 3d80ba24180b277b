use itertools::Itertools;
use log::error;

use crate::entities::item::PlacementItem;
use crate::entities::room::Room;
use crate::geometry::geo_traits::CollidesWith;

//Various checks to verify the validity of generated plans.
//Used in debug_assert!() blocks and in tests.

/// True iff no two items overlap with positive area.
pub fn items_pairwise_disjoint(items: &[PlacementItem]) -> bool {
    for (a, b) in items.iter().tuple_combinations() {
        if a.rect().collides_with(&b.rect()) {
            error!(
                "overlapping items: {} {:?} vs {} {:?}",
                a.label(),
                a.rect(),
                b.label(),
                b.rect()
            );
            return false;
        }
    }
    true
}

/// True iff every item lies entirely inside the room.
pub fn items_inside_room(items: &[PlacementItem], room: &Room) -> bool {
    items.iter().all(|i| room.contains(&i.rect()))
}
