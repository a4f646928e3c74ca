#[cfg(test)]
mod shape_tests {
    use crackitos::math::{Quaternion, Vec2, Vec3, Vec4, approx};
    use crackitos::shape::{Aabb, Bounded, Circle, Polygon, Shape, ShapeType};
    use float_cmp::assert_approx_eq;
    use std::f32::consts::FRAC_PI_2;
    use test_case::test_case;

    fn triangle() -> Polygon {
        Polygon::new(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(4.0, 0.0),
            Vec2::new(1.0, 3.0),
        ])
    }

    #[test]
    fn aabb_from_centre_size_round_trip() {
        let aabb = Aabb::from_centre_size(Vec2::new(3.0, -2.0), 4.0, 6.0);

        assert_eq!(aabb.centre(), Vec2::new(3.0, -2.0));
        assert_eq!(aabb.half_size_vec(), Vec2::new(2.0, 3.0));
        assert_eq!(aabb.min_bound(), Vec2::new(1.0, -5.0));
        assert_eq!(aabb.max_bound(), Vec2::new(5.0, 1.0));
        assert_approx_eq!(f32, aabb.half_size_length(), 13.0f32.sqrt(), ulps = 2);
        assert_approx_eq!(f32, aabb.width(), 4.0, ulps = 2);
        assert_approx_eq!(f32, aabb.height(), 6.0, ulps = 2);
    }

    #[test]
    fn aabb_half_extents_are_made_positive() {
        let aabb = Aabb::from_centre_half_extents(Vec2::ZERO, Vec2::new(-1.0, 2.0));
        assert_eq!(aabb.min_bound(), Vec2::new(-1.0, -2.0));
        assert_eq!(aabb.max_bound(), Vec2::new(1.0, 2.0));
        assert_eq!(aabb, Aabb::new(Vec2::new(-1.0, -2.0), Vec2::new(1.0, 2.0)));
    }

    #[test]
    fn aabb_setters_refresh_derived_fields() {
        let mut aabb = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(2.0, 2.0));

        aabb.set_max_bound(Vec2::new(4.0, 6.0));
        assert_eq!(aabb.centre(), Vec2::new(2.0, 3.0));
        assert_eq!(aabb.half_size_vec(), Vec2::new(2.0, 3.0));

        aabb.set_min_bound(Vec2::new(2.0, 2.0));
        assert_eq!(aabb.centre(), Vec2::new(3.0, 4.0));
        assert_eq!(aabb.half_size_vec(), Vec2::new(1.0, 2.0));
        assert_approx_eq!(f32, aabb.half_size_length(), 5.0f32.sqrt(), ulps = 2);
    }

    #[test]
    fn aabb_bounding_box_is_itself() {
        let aabb = Aabb::new(Vec2::new(-1.0, 0.5), Vec2::new(3.0, 2.0));
        assert_eq!(aabb.bounding_box(), aabb);
        assert_eq!(aabb.bounding_box().bounding_box(), aabb.bounding_box());
    }

    #[test]
    fn aabb_update_position_keeps_size() {
        let mut aabb = Aabb::from_centre_size(Vec2::ZERO, 2.0, 4.0);
        aabb.update_position(Vec2::new(10.0, -10.0));

        assert_eq!(aabb.centre(), Vec2::new(10.0, -10.0));
        assert_eq!(aabb.min_bound(), Vec2::new(9.0, -12.0));
        assert_eq!(aabb.max_bound(), Vec2::new(11.0, -8.0));
        assert_eq!(aabb.half_size_vec(), Vec2::new(1.0, 2.0));
    }

    #[test]
    fn aabb_update_position_recomputes_derived_fields() {
        let mut aabb = Aabb::new(Vec2::new(0.1, 0.2), Vec2::new(0.7, 1.9));
        let half = aabb.half_size_vec();
        aabb.update_position(Vec2::new(3.3, -7.1));

        let (min, max) = (aabb.min_bound(), aabb.max_bound());
        assert_eq!(aabb.centre(), (min + max) * 0.5);
        assert_eq!(aabb.half_size_vec(), (max - min) * 0.5);
        assert_approx_eq!(f32, aabb.half_size_vec().x, half.x, epsilon = 1e-5);
        assert_approx_eq!(f32, aabb.half_size_vec().y, half.y, epsilon = 1e-5);
    }

    #[test]
    fn aabb_with_non_finite_bounds_does_not_panic() {
        let unbounded = Aabb::new(
            Vec2::new(f32::NEG_INFINITY, 0.0),
            Vec2::new(f32::INFINITY, 1.0),
        );
        assert!(unbounded.contains(Vec2::new(1.0e30, 0.5)));

        let huge = Aabb::new(Vec2::new(-f32::MAX, -f32::MAX), Vec2::new(f32::MAX, f32::MAX));
        assert!(huge.contains(Vec2::ZERO));

        let mut nan = Aabb::new(Vec2::new(f32::NAN, 0.0), Vec2::ONE);
        nan.set_max_bound(Vec2::new(2.0, 2.0));
        nan.update_position(Vec2::ZERO);
        assert!(nan.centre().x.is_nan());
    }

    #[test_case(Vec2::new(0.5, 0.5), true; "inside")]
    #[test_case(Vec2::new(0.0, 1.0), true; "corner")]
    #[test_case(Vec2::new(1.0, 0.3), true; "edge")]
    #[test_case(Vec2::new(1.0001, 0.3), false; "just outside")]
    #[test_case(Vec2::new(-3.0, 0.5), false; "far left")]
    fn aabb_contains_is_inclusive(point: Vec2, expected: bool) {
        let aabb = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0));
        assert_eq!(aabb.contains(point), expected);
    }

    #[test]
    fn aabb_closest_point_clamps_per_axis() {
        let aabb = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(2.0, 2.0));
        assert_eq!(aabb.closest_point(Vec2::new(5.0, 1.0)), Vec2::new(2.0, 1.0));
        assert_eq!(aabb.closest_point(Vec2::new(-1.0, -1.0)), Vec2::new(0.0, 0.0));
        assert_eq!(aabb.closest_point(Vec2::new(1.5, 0.5)), Vec2::new(1.5, 0.5));
    }

    #[test]
    fn aabb_corners_form_a_ring() {
        let aabb = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(2.0, 1.0));
        assert_eq!(
            aabb.to_polygon().vertices(),
            &[
                Vec2::new(0.0, 0.0),
                Vec2::new(0.0, 1.0),
                Vec2::new(2.0, 1.0),
                Vec2::new(2.0, 0.0)
            ]
        );
        assert_eq!(Polygon::from(aabb).bounding_box(), aabb);
    }

    #[test]
    fn circle_bounding_box_and_contains() {
        let circle = Circle::new(Vec2::new(1.0, 2.0), 3.0);
        assert_eq!(
            circle.bounding_box(),
            Aabb::new(Vec2::new(-2.0, -1.0), Vec2::new(4.0, 5.0))
        );
        assert!(circle.contains(Vec2::new(4.0, 2.0)));
        assert!(circle.contains(Vec2::new(1.0, 2.0)));
        assert!(!circle.contains(Vec2::new(3.5, 4.5)));
    }

    #[test]
    fn circle_with_negative_radius_does_not_panic() {
        let circle = Circle::new(Vec2::new(1.0, 1.0), -2.0);
        assert_eq!(circle.radius(), -2.0);
        let _bbox = circle.bounding_box();
        let _inside = circle.contains(Vec2::ZERO);
    }

    #[test]
    fn circle_update_position_keeps_radius() {
        let mut circle = Circle::from_radius(2.0);
        assert_eq!(circle.centre(), Vec2::ZERO);

        circle.update_position(Vec2::new(-4.0, 4.0));
        assert_eq!(circle, Circle::new(Vec2::new(-4.0, 4.0), 2.0));

        circle.set_radius(0.5);
        circle.set_centre(Vec2::ONE);
        assert_eq!(circle, Circle::new(Vec2::ONE, 0.5));
    }

    #[test]
    fn polygon_bounding_box() {
        assert_eq!(
            triangle().bounding_box(),
            Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(4.0, 3.0))
        );
    }

    #[test]
    #[should_panic]
    fn polygon_without_vertices_has_no_bounding_box() {
        Polygon::new(vec![]).bounding_box();
    }

    #[test]
    fn polygon_update_position_is_a_no_op() {
        let mut polygon = triangle();
        polygon.update_position(Vec2::new(100.0, 100.0));
        assert_eq!(polygon, triangle());
    }

    #[test]
    fn polygon_equality_is_order_sensitive() {
        let rotated = Polygon::new(vec![
            Vec2::new(4.0, 0.0),
            Vec2::new(1.0, 3.0),
            Vec2::new(0.0, 0.0),
        ]);
        assert_ne!(triangle(), rotated);
        assert_eq!(triangle(), triangle());
    }

    #[test]
    fn polygon_edges_close_the_ring() {
        let edges = triangle().edges().collect::<Vec<_>>();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[2], (Vec2::new(1.0, 3.0), Vec2::new(0.0, 0.0)));
    }

    #[test_case(Vec2::new(1.0, 1.0), true; "inside")]
    #[test_case(Vec2::new(2.0, 0.0), true; "on edge")]
    #[test_case(Vec2::new(4.0, 0.0), true; "on vertex")]
    #[test_case(Vec2::new(3.0, 2.0), false; "outside")]
    fn polygon_contains_either_winding(point: Vec2, expected: bool) {
        let ccw = triangle();
        let cw = Polygon::new(ccw.vertices().iter().rev().copied().collect());
        assert_eq!(ccw.contains(point), expected);
        assert_eq!(cw.contains(point), expected);
    }

    #[test]
    fn shape_forwards_capabilities() {
        let mut shapes: Vec<Shape> = vec![
            Aabb::from_centre_size(Vec2::ZERO, 2.0, 2.0).into(),
            Circle::new(Vec2::ZERO, 1.0).into(),
            triangle().into(),
        ];
        let types = shapes.iter().map(|s| s.shape_type()).collect::<Vec<_>>();
        assert_eq!(types, vec![ShapeType::Aabb, ShapeType::Circle, ShapeType::Polygon]);

        for s in shapes.iter_mut() {
            s.update_position(Vec2::new(1.0, 1.0));
        }
        assert_eq!(shapes[0].bounding_box(), Aabb::new(Vec2::ZERO, Vec2::new(2.0, 2.0)));
        assert_eq!(shapes[1].bounding_box(), Aabb::new(Vec2::ZERO, Vec2::new(2.0, 2.0)));
        assert_eq!(shapes[2], Shape::Polygon(triangle()));
        assert!(shapes.iter().all(|s| s.contains(Vec2::new(1.0, 1.0))));
    }

    #[test]
    fn vec2_helpers() {
        let v = Vec2::new(3.0, 4.0);
        assert_eq!(v.perpendicular(), Vec2::new(-4.0, 3.0));
        assert_eq!(v.perpendicular().dot(v), 0.0);
        assert_eq!(v.cross(Vec2::new(1.0, 0.0)), -4.0);
        assert_eq!(v.magnitude(), 5.0);
        assert_eq!(v.normalized(), Vec2::new(0.6, 0.8));
        assert_eq!(Vec2::ZERO.normalized(), Vec2::ZERO);
        assert_eq!(v / 0.0, Vec2::ZERO);
        assert_eq!(v.lerp(Vec2::ZERO, 0.5), Vec2::new(1.5, 2.0));
        assert_eq!(2.0 * v, v * 2.0);
    }

    #[test]
    fn vec3_cross_is_right_handed() {
        let x = Vec3::new(1.0, 0.0, 0.0);
        let y = Vec3::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(y), Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(y.cross(x), Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(Vec3::ZERO.normalized(), Vec3::ZERO);
    }

    #[test]
    fn vec4_zero_guards() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v / 0.0, Vec4::ZERO);
        assert_eq!(Vec4::ZERO.normalized(), Vec4::ZERO);
        assert_approx_eq!(f32, v.normalized().magnitude(), 1.0, ulps = 4);
    }

    #[test]
    fn vec4_indexing() {
        let mut v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!([v[0], v[1], v[2], v[3]], v.to_array());
        v[2] = 9.0;
        assert_eq!(v.z, 9.0);
        assert_eq!(v.get(3), Some(4.0));
        assert_eq!(v.get(4), None);
    }

    #[test]
    #[should_panic(expected = "index out of range")]
    fn vec4_index_out_of_range_panics() {
        let v = Vec4::ONE;
        let _value = v[4];
    }

    #[test]
    fn quaternion_rotates_around_z() {
        let q = Quaternion::from_euler(0.0, 0.0, FRAC_PI_2);
        let rotated = q.rotate(Vec3::new(1.0, 0.0, 0.0));

        assert!(approx(rotated.x, 0.0));
        assert!(approx(rotated.y, 1.0));
        assert!(approx(rotated.z, 0.0));
        assert!(approx(q.square_magnitude(), 1.0));
    }

    #[test]
    fn quaternion_identity_and_conjugate() {
        let q = Quaternion::from_euler(0.3, -0.2, 0.9);
        let p = Vec3::new(1.0, 2.0, 3.0);

        assert_eq!(Quaternion::identity().rotate(p), p);
        assert_eq!(Quaternion::default(), Quaternion::IDENTITY);

        let product = q * q.conjugate();
        assert!(approx(product.w, 1.0));
        assert!(approx(product.v.magnitude(), 0.0));
    }
}
