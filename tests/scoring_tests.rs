#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;

    use roomnest::entities::{Catalog, Door, LayoutPlan, ObstacleField, Room, WallSide};
    use roomnest::patterns::{place_double_wall_top_bottom, place_face_to_face};
    use roomnest::scoring::{
        ScoreContext, WeightProfile, compare_layouts, get_best_layout, score_plan,
    };
    use roomnest::solver::{PlanRequest, Priority, generate_candidates};
    use roomnest::util::PlanConfig;

    const WS: &str = "ws_1200x600";

    fn wall_plan_with_door() -> (LayoutPlan, Room, ObstacleField, PlanConfig) {
        let room = Room::try_new(5000, 4000).unwrap();
        let door = Door {
            side: WallSide::Left,
            width: 850,
            offset: None,
        };
        let cfg = PlanConfig::default();
        let catalog = Catalog::default();
        let field = ObstacleField::build(room, Some(door), &[], &cfg);
        let plan =
            place_double_wall_top_bottom(room, &catalog, WS, 8, &field, &cfg, true).unwrap();
        assert!(plan.ok);
        (plan, room, field, cfg)
    }

    #[test]
    fn breakdown_fields_are_normalized() {
        let (plan, room, field, cfg) = wall_plan_with_door();
        let ctx = ScoreContext::new(room, &field, &cfg);
        let b = score_plan(&plan, &ctx, &WeightProfile::default());

        for value in [
            b.seat_count,
            b.passage_width,
            b.natural_light,
            b.traffic_flow,
            b.face_to_face_bonus,
            b.space_efficiency,
        ] {
            assert!((0.0..=1.0).contains(&value), "{value} out of range: {b:?}");
        }
        assert!(b.total > 0.0);
    }

    #[test]
    fn infeasible_plans_score_zero() {
        let room = Room::try_new(5000, 4000).unwrap();
        let cfg = PlanConfig::default();
        let catalog = Catalog::default();
        let field = ObstacleField::build(room, None, &[], &cfg);
        // the room is too shallow for a face-to-face block
        let plan = place_face_to_face(room, &catalog, WS, 4, &field, &cfg).unwrap();
        assert!(!plan.ok);

        let ctx = ScoreContext::new(room, &field, &cfg);
        let b = score_plan(&plan, &ctx, &WeightProfile::default());
        assert_eq!(b.total, 0.0);
        assert_eq!(b.seat_count, 0.0);
    }

    #[test]
    fn face_to_face_bonus_is_binary() {
        let room = Room::try_new(5000, 4400).unwrap();
        let cfg = PlanConfig::default();
        let catalog = Catalog::default();
        let field = ObstacleField::build(room, None, &[], &cfg);
        let ctx = ScoreContext::new(room, &field, &cfg);
        let weights = WeightProfile::default();

        let face = place_face_to_face(room, &catalog, WS, 8, &field, &cfg).unwrap();
        assert!(face.ok);
        assert_eq!(score_plan(&face, &ctx, &weights).face_to_face_bonus, 1.0);

        let (wall, room, field, cfg) = wall_plan_with_door();
        let ctx = ScoreContext::new(room, &field, &cfg);
        assert_eq!(score_plan(&wall, &ctx, &weights).face_to_face_bonus, 0.0);
    }

    #[test]
    fn unknown_preset_resolves_to_the_default_profile() {
        let fallback = WeightProfile::resolve(None, Some("penthouse_suite"));
        assert_eq!(fallback, WeightProfile::default());
        assert_eq!(fallback, WeightProfile::resolve(None, None));
    }

    #[test]
    fn explicit_weights_win_over_presets() {
        let custom = WeightProfile {
            seat_count: 9.0,
            ..WeightProfile::default()
        };
        let resolved = WeightProfile::resolve(Some(&custom), Some("comfort"));
        assert_eq!(resolved, custom);
    }

    #[test]
    fn seat_term_dominates_under_max_seats() {
        let (plan, room, field, cfg) = wall_plan_with_door();
        let ctx = ScoreContext::new(room, &field, &cfg);

        let w_max = WeightProfile::resolve(None, Some("max_seats"));
        let w_comfort = WeightProfile::resolve(None, Some("comfort"));
        assert_eq!(w_max.seat_count, 2.0);
        assert_eq!(w_comfort.seat_count, 0.5);

        let b_max = score_plan(&plan, &ctx, &w_max);
        let b_comfort = score_plan(&plan, &ctx, &w_comfort);
        assert!(b_max.seat_count > 0.0);

        // same normalized seat score, strictly larger share of the total
        let share_max = b_max.seat_count * w_max.seat_count / b_max.total;
        let share_comfort = b_comfort.seat_count * w_comfort.seat_count / b_comfort.total;
        assert!(share_max > share_comfort);
    }

    #[test]
    fn compare_layouts_sorts_stably_and_permutes_indices() {
        let req = PlanRequest {
            room: Room::try_new(6000, 4800).unwrap(),
            door: None,
            pillars: vec![],
            seats_required: 6,
            desk_keys: vec![WS.to_string(), "ws_1000x600".to_string()],
            equipment_keys: vec!["storage_M".to_string()],
            priority: Priority::Equipment,
        };
        let catalog = Catalog::default();
        let cfg = PlanConfig::default();
        let plans = generate_candidates(&req, &catalog, &cfg).unwrap();
        assert!(plans.len() > 4);

        let field = ObstacleField::build(req.room, req.door, &req.pillars, &cfg);
        let ctx = ScoreContext::new(req.room, &field, &cfg);
        let ranked = compare_layouts(&plans, &ctx, &WeightProfile::default());

        assert_eq!(ranked.len(), plans.len());
        for pair in ranked.windows(2) {
            assert!(pair[0].total >= pair[1].total);
        }
        let mut indices: Vec<usize> = ranked.iter().map(|r| r.index).collect();
        indices.sort_unstable();
        assert_eq!(indices, (0..plans.len()).collect::<Vec<_>>());
    }

    #[test]
    fn equal_scores_keep_input_order() {
        let (plan, room, field, cfg) = wall_plan_with_door();
        let ctx = ScoreContext::new(room, &field, &cfg);
        let batch = vec![plan.clone(), plan];

        let ranked = compare_layouts(&batch, &ctx, &WeightProfile::default());
        assert!(approx_eq!(f64, ranked[0].total, ranked[1].total, ulps = 2));
        assert_eq!(ranked[0].index, 0);
        assert_eq!(ranked[1].index, 1);
    }

    #[test]
    fn best_of_empty_batch_is_none() {
        let room = Room::try_new(5000, 4000).unwrap();
        let cfg = PlanConfig::default();
        let field = ObstacleField::build(room, None, &[], &cfg);
        let ctx = ScoreContext::new(room, &field, &cfg);

        assert!(get_best_layout(&[], &ctx, &WeightProfile::default()).is_none());
    }

    #[test]
    fn best_layout_heads_the_ranking() {
        let req = PlanRequest {
            room: Room::try_new(5000, 4400).unwrap(),
            door: None,
            pillars: vec![],
            seats_required: 8,
            desk_keys: vec![WS.to_string()],
            equipment_keys: vec![],
            priority: Priority::Desk,
        };
        let catalog = Catalog::default();
        let cfg = PlanConfig::default();
        let plans = generate_candidates(&req, &catalog, &cfg).unwrap();

        let field = ObstacleField::build(req.room, req.door, &req.pillars, &cfg);
        let ctx = ScoreContext::new(req.room, &field, &cfg);
        let weights = WeightProfile::default();

        let ranked = compare_layouts(&plans, &ctx, &weights);
        let best = get_best_layout(&plans, &ctx, &weights).unwrap();
        assert_eq!(best, ranked[0]);
        assert!(best.total >= ranked[ranked.len() - 1].total);
    }
}
