mod criteria;
mod rank;
mod weights;

#[doc(inline)]
pub use criteria::ScoreBreakdown;

#[doc(inline)]
pub use criteria::ScoreContext;

#[doc(inline)]
pub use criteria::score_plan;

#[doc(inline)]
pub use rank::Ranked;

#[doc(inline)]
pub use rank::compare_layouts;

#[doc(inline)]
pub use rank::get_best_layout;

#[doc(inline)]
pub use weights::WeightProfile;
