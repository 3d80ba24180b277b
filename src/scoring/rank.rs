use std::cmp::Reverse;

use itertools::Itertools;
use ordered_float::OrderedFloat;

use crate::entities::layout::LayoutPlan;
use crate::scoring::criteria::{ScoreBreakdown, ScoreContext, score_plan};
use crate::scoring::weights::WeightProfile;

/// One scored candidate: its index in the input batch, its weighted total
/// and the per-criterion breakdown.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ranked {
    pub index: usize,
    pub total: f64,
    pub breakdown: ScoreBreakdown,
}

/// Scores every candidate and ranks them by total, descending. The sort is
/// stable: candidates with equal totals keep their input order.
pub fn compare_layouts(
    plans: &[LayoutPlan],
    ctx: &ScoreContext,
    weights: &WeightProfile,
) -> Vec<Ranked> {
    let mut ranked = plans
        .iter()
        .enumerate()
        .map(|(index, plan)| {
            let breakdown = score_plan(plan, ctx, weights);
            Ranked {
                index,
                total: breakdown.total,
                breakdown,
            }
        })
        .collect_vec();
    ranked.sort_by_key(|r| Reverse(OrderedFloat(r.total)));
    ranked
}

/// The best-scoring candidate, or `None` for an empty batch.
pub fn get_best_layout(
    plans: &[LayoutPlan],
    ctx: &ScoreContext,
    weights: &WeightProfile,
) -> Option<Ranked> {
    compare_layouts(plans, ctx, weights).into_iter().next()
}
