use crate::scene::Scene;
use crate::shape::{Aabb, Bounded, Shape};
use anyhow::{Context, Result};
use itertools::Itertools;
use log::{Level, log};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use svg::Document;
use svg::node::element::{Circle as SvgCircle, Group, Polygon as SvgPolygon, Rectangle};

#[derive(Debug, Clone, Copy)]
pub struct DrawOptions {
    pub theme: SvgTheme,
    /// Fill shapes taking part in at least one overlap with the theme's overlap color
    pub highlight_overlaps: bool,
    /// Outline the bounding box of every shape
    pub draw_bounding_boxes: bool,
    /// Empty border around the scene, relative to its largest dimension
    pub margin_ratio: f32,
}

#[derive(Debug, Clone, Copy)]
pub struct SvgTheme {
    pub background: &'static str,
    pub shape_fill: &'static str,
    pub overlap_fill: &'static str,
    pub stroke: &'static str,
    pub bbox_stroke: &'static str,
    pub fill_opacity: f32,
    /// Stroke width relative to the largest dimension of the scene
    pub stroke_width_ratio: f32,
}

impl SvgTheme {
    pub const GRAY: SvgTheme = SvgTheme {
        background: "#FFFFFF",
        shape_fill: "#C3C3C3",
        overlap_fill: "#D2042D",
        stroke: "#3A3A3A",
        bbox_stroke: "#00A3E0",
        fill_opacity: 0.6,
        stroke_width_ratio: 0.002,
    };
}

/// Draws all shapes of the scene, with `overlapping_pairs` as computed by
/// [`Scene::overlapping_pairs`].
pub fn scene_to_svg(
    scene: &Scene,
    overlapping_pairs: &[(usize, usize)],
    options: DrawOptions,
) -> Document {
    let theme = options.theme;

    // polygons without vertices have no bounding box and are not drawn
    let drawable = |s: &Shape| !matches!(s, Shape::Polygon(p) if p.vertex_count() == 0);

    let scene_bbox = scene
        .shapes
        .iter()
        .filter(|s| drawable(*s))
        .map(|s| s.bounding_box())
        .reduce(|a, b| Aabb::new(a.min_bound().min(b.min_bound()), a.max_bound().max(b.max_bound())))
        .unwrap_or_else(|| Aabb::from_centre_size(Default::default(), 1.0, 1.0));

    let max_dim = f32::max(scene_bbox.width(), scene_bbox.height()).max(f32::EPSILON);
    let margin = max_dim * options.margin_ratio;
    let stroke_width = max_dim * theme.stroke_width_ratio;

    let overlapping: HashSet<usize> = match options.highlight_overlaps {
        true => overlapping_pairs.iter().flat_map(|&(i, j)| [i, j]).collect(),
        false => HashSet::new(),
    };

    // y-axis points up in the scene, down in svg: flip the content and the view box with it
    let (x, y) = (scene_bbox.min_bound().x - margin, -scene_bbox.max_bound().y - margin);
    let (w, h) = (scene_bbox.width() + 2.0 * margin, scene_bbox.height() + 2.0 * margin);

    let background = Rectangle::new()
        .set("x", x)
        .set("y", y)
        .set("width", w)
        .set("height", h)
        .set("fill", theme.background);

    let mut shapes_group = Group::new()
        .set("id", scene.name.as_str())
        .set("transform", "scale(1, -1)")
        .set("stroke", theme.stroke)
        .set("stroke-width", stroke_width)
        .set("fill-opacity", theme.fill_opacity);

    for (i, shape) in scene.shapes.iter().enumerate().filter(|(_, s)| drawable(*s)) {
        let fill = match overlapping.contains(&i) {
            true => theme.overlap_fill,
            false => theme.shape_fill,
        };
        shapes_group = match shape {
            Shape::Aabb(a) => shapes_group.add(rect_node(a).set("fill", fill)),
            Shape::Circle(c) => shapes_group.add(
                SvgCircle::new()
                    .set("cx", c.centre().x)
                    .set("cy", c.centre().y)
                    .set("r", c.radius())
                    .set("fill", fill),
            ),
            Shape::Polygon(p) => {
                let points = p
                    .vertices()
                    .iter()
                    .map(|v| format!("{},{}", v.x, v.y))
                    .join(" ");
                shapes_group.add(SvgPolygon::new().set("points", points).set("fill", fill))
            }
        };
        if options.draw_bounding_boxes {
            shapes_group = shapes_group.add(
                rect_node(&shape.bounding_box())
                    .set("fill", "none")
                    .set("stroke", theme.bbox_stroke)
                    .set("stroke-dasharray", format!("{} {}", 4.0 * stroke_width, 2.0 * stroke_width)),
            );
        }
    }

    Document::new()
        .set("viewBox", (x, y, w, h))
        .add(background)
        .add(shapes_group)
}

fn rect_node(aabb: &Aabb) -> Rectangle {
    Rectangle::new()
        .set("x", aabb.min_bound().x)
        .set("y", aabb.min_bound().y)
        .set("width", aabb.width())
        .set("height", aabb.height())
}

pub fn write_svg(document: &Document, path: &Path, log_lvl: Level) -> Result<()> {
    //make sure the parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("could not create parent directory for svg file")?;
    }
    svg::save(path, document)?;
    log!(
        log_lvl,
        "[IO] svg exported to file://{}",
        fs::canonicalize(path)
            .context("could not canonicalize path")?
            .display()
    );
    Ok(())
}
