#[cfg(test)]
mod integration_tests {
    use crackitos::config::DEFAULT_CRACKITOS_CONFIG;
    use crackitos::intersect::Intersects;
    use crackitos::scene::{Scene, regular_polygon};
    use crackitos::shape::{Aabb, Bounded, Circle, Shape};
    use crackitos::util::io;
    use crackitos::util::svg_exporter::scene_to_svg;
    use crackitos::{Polygon, Vec2};
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;
    use std::path::Path;
    use test_case::test_case;

    const RNG_SEED: u64 = 0; // fix seed for reproducibility

    fn unit_square_at(x: f32, y: f32) -> Polygon {
        Polygon::new(vec![
            Vec2::new(x, y),
            Vec2::new(x + 1.0, y),
            Vec2::new(x + 1.0, y + 1.0),
            Vec2::new(x, y + 1.0),
        ])
    }

    fn handmade_scene() -> Scene {
        Scene::new(
            "handmade",
            vec![
                Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0)).into(),
                Aabb::new(Vec2::new(1.0, 0.0), Vec2::new(2.0, 1.0)).into(),
                Circle::new(Vec2::new(5.0, 5.0), 1.0).into(),
                unit_square_at(5.5, 5.5).into(),
                Circle::new(Vec2::new(-10.0, -10.0), 0.5).into(),
            ],
        )
    }

    #[test]
    fn handmade_scene_overlaps() {
        let scene = handmade_scene();
        assert_eq!(scene.overlapping_pairs(), vec![(0, 1), (2, 3)]);

        let report = scene.report();
        assert_eq!(report.name, "handmade");
        assert_eq!(report.n_shapes, 5);
        assert_eq!(report.overlapping_pairs, scene.overlapping_pairs());
    }

    #[test_case(0; "seed 0")]
    #[test_case(1; "seed 1")]
    #[test_case(42; "seed 42")]
    fn random_scene_overlaps_are_symmetric(seed: u64) {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        let scene = Scene::random(&mut rng, &DEFAULT_CRACKITOS_CONFIG.scene_gen);
        assert_eq!(scene.shapes.len(), DEFAULT_CRACKITOS_CONFIG.scene_gen.n_shapes);

        for s1 in &scene.shapes {
            for s2 in &scene.shapes {
                assert_eq!(s1.intersects(s2), s2.intersects(s1), "{:?} vs {:?}", s1, s2);
            }
        }
    }

    #[test]
    fn overlapping_shapes_have_overlapping_bounding_boxes() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(RNG_SEED);
        let scene = Scene::random(&mut rng, &DEFAULT_CRACKITOS_CONFIG.scene_gen);

        for (i, j) in scene.overlapping_pairs() {
            let (b1, b2) = (scene.shapes[i].bounding_box(), scene.shapes[j].bounding_box());
            assert!(b1.intersects(&b2), "#{} and #{} overlap, their boxes do not", i, j);
        }
    }

    #[test]
    fn random_scene_is_reproducible() {
        let config = DEFAULT_CRACKITOS_CONFIG.scene_gen;
        let s1 = Scene::random(&mut Xoshiro256PlusPlus::seed_from_u64(RNG_SEED), &config);
        let s2 = Scene::random(&mut Xoshiro256PlusPlus::seed_from_u64(RNG_SEED), &config);
        assert_eq!(s1, s2);
    }

    #[test]
    fn shape_json_is_tagged_and_rebuilds_aabb() -> anyhow::Result<()> {
        let json = r#"{
            "name": "tagged",
            "shapes": [
                {"type": "aabb", "min": {"x": 1.0, "y": 2.0}, "max": {"x": 3.0, "y": 6.0}},
                {"type": "circle", "centre": {"x": 0.0, "y": 0.0}, "radius": 2.5},
                {"type": "polygon", "vertices": [{"x": 0.0, "y": 0.0}, {"x": 1.0, "y": 0.0}, {"x": 0.0, "y": 1.0}]}
            ]
        }"#;
        let scene: Scene = serde_json::from_str(json)?;

        match &scene.shapes[0] {
            Shape::Aabb(a) => {
                assert_eq!(a.centre(), Vec2::new(2.0, 4.0));
                assert_eq!(a.half_size_vec(), Vec2::new(1.0, 2.0));
            }
            other => panic!("expected an aabb, got {:?}", other),
        }
        assert_eq!(scene.shapes[1], Shape::Circle(Circle::new(Vec2::ZERO, 2.5)));
        assert_eq!(
            scene.shapes[2],
            Shape::Polygon(Polygon::new(vec![
                Vec2::new(0.0, 0.0),
                Vec2::new(1.0, 0.0),
                Vec2::new(0.0, 1.0)
            ]))
        );

        let reparsed: Scene = serde_json::from_str(&serde_json::to_string(&scene)?)?;
        assert_eq!(reparsed, scene);
        Ok(())
    }

    #[test]
    fn scene_file_round_trip() -> anyhow::Result<()> {
        let dir = std::env::temp_dir().join(format!("crackitos_test_{}", std::process::id()));
        std::fs::create_dir_all(&dir)?;
        let path = dir.join("scene.json");

        let scene = handmade_scene();
        io::write_json(&scene, &path, log::Level::Debug)?;
        let loaded = io::read_scene_json(&path)?;
        assert_eq!(loaded, scene);

        assert!(io::read_scene_json(Path::new("does/not/exist.json")).is_err());
        std::fs::remove_dir_all(&dir)?;
        Ok(())
    }

    #[test]
    fn svg_contains_every_shape_kind() {
        let mut scene = handmade_scene();
        scene
            .shapes
            .push(regular_polygon(Vec2::new(-3.0, 2.0), 1.0, 6, 0.0).into());
        let svg = scene_to_svg(&scene, &scene.overlapping_pairs(), DEFAULT_CRACKITOS_CONFIG.draw)
            .to_string();

        assert!(svg.contains("<rect"));
        assert!(svg.contains("<circle"));
        assert!(svg.contains("<polygon"));
        assert!(svg.contains(DEFAULT_CRACKITOS_CONFIG.draw.theme.overlap_fill));
    }
}
