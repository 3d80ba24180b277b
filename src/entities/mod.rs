pub mod catalog;
pub mod item;
pub mod layout;
pub mod room;

#[doc(inline)]
pub use catalog::Catalog;

#[doc(inline)]
pub use catalog::DeskSpec;

#[doc(inline)]
pub use catalog::ItemSpec;

#[doc(inline)]
pub use item::PlacementItem;

#[doc(inline)]
pub use layout::LayoutPlan;

#[doc(inline)]
pub use layout::Pattern;

#[doc(inline)]
pub use room::Door;

#[doc(inline)]
pub use room::DoorZone;

#[doc(inline)]
pub use room::ObstacleField;

#[doc(inline)]
pub use room::Room;

#[doc(inline)]
pub use room::WallSide;
