/// Trait for geometric primitives that can collide with other primitives.
pub trait CollidesWith<T> {
    fn collides_with(&self, other: &T) -> bool;
}

/// Trait for geometric primitives that can calculate the distance to another primitive.
pub trait DistanceTo<T> {
    /// Minimum distance. 0 in case of a collision.
    fn distance_to(&self, other: &T) -> f64;

    /// Squared version of [`DistanceTo::distance_to`]
    fn sq_distance_to(&self, other: &T) -> f64;
}
