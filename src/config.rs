use crate::consts::DRAW_OPTIONS;
use crate::util::svg_exporter::DrawOptions;
use std::time::Duration;

#[derive(Debug, Clone, Copy)]
pub struct CrackitosConfig {
    pub rng_seed: Option<u64>,
    /// Step size of the fixed-rate simulation clock, see [`Timer`](crate::timer::Timer)
    pub fixed_delta_time: Duration,
    /// Configuration for generating random scenes.
    /// See [`SceneGenConfig`] for more details.
    pub scene_gen: SceneGenConfig,
    pub draw: DrawOptions,
}

/// Parameters of [`Scene::random`](crate::scene::Scene::random)
#[derive(Debug, Clone, Copy)]
pub struct SceneGenConfig {
    pub n_shapes: usize,
    /// Shapes are centred inside `[0, extent]²`
    pub extent: f32,
    /// Range of the characteristic size (box side, circle diameter, polygon circumdiameter)
    pub size_range: (f32, f32),
    /// Generated polygons are regular with `3..=max_polygon_vertices` vertices
    pub max_polygon_vertices: usize,
}

pub const DEFAULT_CRACKITOS_CONFIG: CrackitosConfig = CrackitosConfig {
    rng_seed: None,
    fixed_delta_time: Duration::from_millis(16),
    scene_gen: SceneGenConfig {
        n_shapes: 64,
        extent: 100.0,
        size_range: (2.0, 12.0),
        max_polygon_vertices: 8,
    },
    draw: DRAW_OPTIONS,
};
