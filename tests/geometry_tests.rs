#[cfg(test)]
mod tests {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use roomnest::collision;
    use roomnest::entities::Room;
    use roomnest::geometry::geo_traits::CollidesWith;
    use roomnest::geometry::primitives::{Point, Rect, Segment};
    use roomnest::patterns::cursor::WallCursor;

    const N_RANDOM: usize = 1000;

    fn random_rect(rng: &mut SmallRng) -> Rect {
        Rect::new(
            rng.random_range(-2000..8000),
            rng.random_range(-2000..8000),
            rng.random_range(1..3000),
            rng.random_range(1..3000),
        )
    }

    #[test]
    fn rect_collision_is_symmetric() {
        let mut rng = SmallRng::seed_from_u64(0);
        for _ in 0..N_RANDOM {
            let a = random_rect(&mut rng);
            let b = random_rect(&mut rng);
            assert_eq!(a.collides_with(&b), b.collides_with(&a));
        }
    }

    #[test]
    fn edge_touching_rects_do_not_collide() {
        let a = Rect::new(0, 0, 100, 100);
        let b = Rect::new(100, 0, 100, 100);
        assert!(!a.collides_with(&b));
        assert!(!b.collides_with(&a));

        // one shared corner only
        let c = Rect::new(100, 100, 50, 50);
        assert!(!a.collides_with(&c));

        // actual overlap of a single millimeter
        let d = Rect::new(99, 0, 100, 100);
        assert!(a.collides_with(&d));
    }

    #[test]
    fn rect_try_new_rejects_degenerate_dimensions() {
        assert!(Rect::try_new(0, 0, 0, 100).is_err());
        assert!(Rect::try_new(0, 0, 100, -5).is_err());
        assert!(Rect::try_new(-50, -50, 100, 100).is_ok());
    }

    #[test]
    fn room_containment_matches_coordinate_bounds() {
        let mut rng = SmallRng::seed_from_u64(1);
        for _ in 0..N_RANDOM {
            let room = Room {
                w: rng.random_range(2000..10_000),
                d: rng.random_range(2000..10_000),
            };
            let r = random_rect(&mut rng);
            let expected = r.x >= 0 && r.y >= 0 && r.x + r.w <= room.w && r.y + r.d <= room.d;
            assert_eq!(room.contains(&r), expected);
        }
    }

    #[test]
    fn can_place_is_monotone_in_the_block_set() {
        let mut rng = SmallRng::seed_from_u64(2);
        let room = Room { w: 8000, d: 8000 };
        for _ in 0..N_RANDOM {
            let r = random_rect(&mut rng);
            let mut blocks: Vec<Rect> = (0..rng.random_range(0..5))
                .map(|_| random_rect(&mut rng))
                .collect();
            let before = collision::can_place(&r, &room, &blocks);
            blocks.push(random_rect(&mut rng));
            let after = collision::can_place(&r, &room, &blocks);
            // adding a block can only turn true into false, never the reverse
            assert!(before || !after);
        }
    }

    #[test]
    fn segment_rect_crossing() {
        let zone = Rect::new(1000, 1000, 500, 500);

        // straight through
        assert!(zone.collides_with(&Segment::new(Point(0, 1200), Point(3000, 1200))));
        // diagonal through
        assert!(zone.collides_with(&Segment::new(Point(500, 500), Point(2000, 2000))));
        // endpoint inside
        assert!(zone.collides_with(&Segment::new(Point(1200, 1200), Point(5000, 5000))));
        // passes beside
        assert!(!zone.collides_with(&Segment::new(Point(0, 2000), Point(3000, 2000))));
        // stops short
        assert!(!zone.collides_with(&Segment::new(Point(0, 1200), Point(900, 1200))));
    }

    #[test]
    fn cursor_visits_positions_from_the_starting_corner() {
        let mut cursor = WallCursor::forward(3800, 1200);
        assert_eq!(cursor.current(), Some(0));
        cursor.reject();
        assert_eq!(cursor.current(), Some(1200));
        cursor.accept(1200);
        assert_eq!(cursor.current(), Some(2400));
        cursor.accept(1200);
        assert_eq!(cursor.current(), Some(3600));
        cursor.reject();
        assert_eq!(cursor.current(), None);
    }

    #[test]
    fn reversed_cursor_walks_from_the_far_corner() {
        let mut cursor = WallCursor::reverse(3800, 1200);
        assert_eq!(cursor.current(), Some(3800));
        cursor.accept(1200);
        assert_eq!(cursor.current(), Some(2600));
        cursor.reject();
        cursor.reject();
        assert_eq!(cursor.current(), Some(200));
        cursor.reject();
        assert_eq!(cursor.current(), None);
    }

    #[test]
    fn cursor_on_a_too_short_wall_is_immediately_exhausted() {
        let cursor = WallCursor::forward(-400, 1200);
        assert_eq!(cursor.current(), None);
        let cursor = WallCursor::reverse(-400, 1200);
        assert_eq!(cursor.current(), None);
    }
}
