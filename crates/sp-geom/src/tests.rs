//! Unit tests for sp-geom.

#[cfg(test)]
mod segment {
    use sp_core::Vec2;

    use crate::Segment;

    #[test]
    fn crossing_segments_hit_once() {
        let s1 = Segment::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let s2 = Segment::new(Vec2::new(0.0, 10.0), Vec2::new(10.0, 0.0));
        let hit = s1.intersect(s2).expect("diagonals of a square cross");
        assert!((hit.point.x - 5.0).abs() < 1e-9);
        assert!((hit.point.y - 5.0).abs() < 1e-9);
        assert!((hit.t_self - 0.5).abs() < 1e-9);
        assert!((hit.t_other - 0.5).abs() < 1e-9);
    }

    #[test]
    fn parallel_segments_miss() {
        let s1 = Segment::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0));
        let s2 = Segment::new(Vec2::new(0.0, 5.0), Vec2::new(10.0, 5.0));
        assert!(s1.intersect(s2).is_none());
    }

    #[test]
    fn disjoint_segments_miss() {
        let s1 = Segment::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0));
        let s2 = Segment::new(Vec2::new(5.0, -1.0), Vec2::new(5.0, 1.0));
        assert!(s1.intersect(s2).is_none());
    }

    #[test]
    fn endpoint_contact_counts() {
        let s1 = Segment::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0));
        let s2 = Segment::new(Vec2::new(10.0, 0.0), Vec2::new(10.0, 5.0));
        let hit = s1.intersect(s2).expect("shared endpoint registers");
        assert!((hit.t_self - 1.0).abs() < 1e-6);
    }

    #[test]
    fn closest_point_clamps_to_ends() {
        let s = Segment::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0));
        assert_eq!(s.closest_point(Vec2::new(5.0, 3.0)), Vec2::new(5.0, 0.0));
        assert_eq!(s.closest_point(Vec2::new(-4.0, 3.0)), Vec2::new(0.0, 0.0));
        assert_eq!(s.closest_point(Vec2::new(14.0, -2.0)), Vec2::new(10.0, 0.0));
    }

    #[test]
    fn extended_grows_both_ends() {
        let s = Segment::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0)).extended(1.0);
        assert_eq!(s.a, Vec2::new(-1.0, 0.0));
        assert_eq!(s.b, Vec2::new(11.0, 0.0));
    }
}

#[cfg(test)]
mod polygon {
    use sp_core::{Rect, Vec2};

    use crate::{GeomError, Polygon, Segment};

    fn square(side: f64) -> Polygon {
        Polygon::rectangle(Rect::new(Vec2::ZERO, Vec2::new(side, side)))
    }

    /// L-shape: a 4×4 square with its upper-right 2×2 corner removed.
    fn l_shape() -> Polygon {
        Polygon::new(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(4.0, 0.0),
            Vec2::new(4.0, 2.0),
            Vec2::new(2.0, 2.0),
            Vec2::new(2.0, 4.0),
            Vec2::new(0.0, 4.0),
        ])
        .expect("valid L-shape")
    }

    #[test]
    fn new_rejects_degenerate_loops() {
        assert!(matches!(
            Polygon::new(vec![Vec2::ZERO, Vec2::new(1.0, 0.0)]),
            Err(GeomError::TooFewVertices { got: 2 })
        ));
        // three coincident points collapse to one
        assert!(matches!(
            Polygon::new(vec![Vec2::ZERO, Vec2::ZERO, Vec2::ZERO]),
            Err(GeomError::TooFewVertices { got: 1 })
        ));
    }

    #[test]
    fn new_drops_closing_vertex_and_duplicates() {
        let p = Polygon::new(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(4.0, 0.0),
            Vec2::new(4.0, 0.0), // duplicate
            Vec2::new(4.0, 4.0),
            Vec2::new(0.0, 4.0),
            Vec2::new(0.0, 0.0), // explicit closure
        ])
        .unwrap();
        assert_eq!(p.vertex_count(), 4);
    }

    #[test]
    fn area_and_signed_area() {
        let sq = square(4.0);
        assert!((sq.area() - 16.0).abs() < 1e-9);
        // Rect::corners is counter-clockwise, so the signed area is positive.
        assert!(sq.signed_area() > 0.0);
        assert!((l_shape().area() - 12.0).abs() < 1e-9);
    }

    #[test]
    fn centroid_of_square() {
        let c = square(4.0).centroid();
        assert!((c.x - 2.0).abs() < 1e-9);
        assert!((c.y - 2.0).abs() < 1e-9);
    }

    #[test]
    fn contains_handles_concavity() {
        let l = l_shape();
        assert!(l.contains(Vec2::new(1.0, 1.0)));
        assert!(l.contains(Vec2::new(3.0, 1.0)));
        assert!(l.contains(Vec2::new(1.0, 3.0)));
        assert!(!l.contains(Vec2::new(3.0, 3.0)), "the notch is outside");
        assert!(!l.contains(Vec2::new(5.0, 1.0)));
        assert!(!l.contains(Vec2::new(-1.0, -1.0)));
    }

    #[test]
    fn closest_point_snaps_to_nearest_edge() {
        let sq = square(4.0);
        let cp = sq.closest_point(Vec2::new(2.0, 1.0));
        assert_eq!(cp, Vec2::new(2.0, 0.0));
        let cp = sq.closest_point(Vec2::new(7.0, 2.0));
        assert_eq!(cp, Vec2::new(4.0, 2.0));
    }

    #[test]
    fn point_at_walks_edges() {
        let sq = square(4.0);
        assert_eq!(sq.point_at(0.0), Vec2::new(0.0, 0.0));
        assert_eq!(sq.point_at(0.5), Vec2::new(2.0, 0.0));
        assert_eq!(sq.point_at(2.5), Vec2::new(2.0, 4.0));
        // params wrap
        assert_eq!(sq.point_at(4.0), sq.point_at(0.0));
    }

    #[test]
    fn probe_through_square_hits_twice() {
        let sq = square(4.0);
        let probe = Segment::new(Vec2::new(1.0, -1.0), Vec2::new(1.0, 5.0));
        let hits = sq.intersections_with(probe);
        assert_eq!(hits.len(), 2, "a through-cut crosses twice");
        assert!(hits[0].param < hits[1].param, "hits sorted by boundary param");
        assert_eq!(hits[0].point, Vec2::new(1.0, 0.0));
        assert_eq!(hits[1].point, Vec2::new(1.0, 4.0));
    }

    #[test]
    fn probe_hits_depend_on_height() {
        // y=3 crosses only the left leg of the L
        let hits = l_shape().intersections_with(Segment::new(
            Vec2::new(-1.0, 3.0),
            Vec2::new(5.0, 3.0),
        ));
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].point, Vec2::new(2.0, 3.0));
        assert_eq!(hits[1].point, Vec2::new(0.0, 3.0));

        // y=1 crosses the full base
        let hits = l_shape().intersections_with(Segment::new(
            Vec2::new(-1.0, 1.0),
            Vec2::new(5.0, 1.0),
        ));
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn vertex_contact_reported_once() {
        let sq = square(4.0);
        // diagonal aimed exactly through the (0, 0) corner
        let probe = Segment::new(Vec2::new(-1.0, -1.0), Vec2::new(1.0, 1.0));
        let hits = sq.intersections_with(probe);
        assert_eq!(hits.len(), 1, "corner contact must not double-count");
        assert!(hits[0].point.distance(Vec2::ZERO) < 1e-6);
    }

    #[test]
    fn split_at_mid_edges_gives_two_halves() {
        let sq = square(4.0);
        let (a, b) = sq.split_at(0.5, 2.5).unwrap();
        assert!((a.area() - 8.0).abs() < 1e-9, "half area, got {}", a.area());
        assert!((b.area() - 8.0).abs() < 1e-9, "half area, got {}", b.area());
        assert_eq!(a.vertex_count(), 4);
        assert_eq!(b.vertex_count(), 4);
    }

    #[test]
    fn split_at_vertices_gives_triangles() {
        let sq = square(4.0);
        let (a, b) = sq.split_at(1.0, 3.0).unwrap();
        assert_eq!(a.vertex_count(), 3);
        assert_eq!(b.vertex_count(), 3);
        assert!((a.area() + b.area() - 16.0).abs() < 1e-9);
    }

    #[test]
    fn split_at_coincident_params_degenerates() {
        let sq = square(4.0);
        assert!(matches!(sq.split_at(0.5, 0.5), Err(GeomError::DegenerateCut)));
    }

    #[test]
    fn bbox_covers_all_vertices() {
        let bb = l_shape().bbox();
        assert_eq!(bb.min, Vec2::ZERO);
        assert_eq!(bb.max, Vec2::new(4.0, 4.0));
    }
}
