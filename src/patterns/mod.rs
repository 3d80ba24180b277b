pub mod cursor;
pub mod unit;

mod double_wall;
mod equipment;
mod face_to_face;
mod mixed;
mod single_wall;
mod walk;

#[doc(inline)]
pub use double_wall::place_double_wall;

#[doc(inline)]
pub use double_wall::place_double_wall_top_bottom;

#[doc(inline)]
pub use equipment::fill_equipment;

#[doc(inline)]
pub use face_to_face::FACE_TO_FACE_DOOR_CLEARANCE;

#[doc(inline)]
pub use face_to_face::place_face_to_face;

#[doc(inline)]
pub use mixed::place_mixed;

#[doc(inline)]
pub use single_wall::place_single_wall;
