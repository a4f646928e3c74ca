use crate::util::svg_exporter::{DrawOptions, SvgTheme};

pub const PI: f32 = std::f32::consts::PI;

/// Tolerance used by [`approx`](crate::math::approx) and the assertion helpers
pub const EPSILON: f32 = 0.000001;

/// Slack added to the squared radius in the box/circle test so a circle centred on a box edge still registers
pub const BOX_CIRCLE_EPSILON: f32 = f32::EPSILON;

/// Number of independent vectors processed by one [`FourVec4`](crate::batch::FourVec4)
pub const LANES: usize = 4;

/// A polygon needs at least this many vertices to enclose an area
pub const MIN_POLYGON_VERTICES: usize = 3;

/// Number of whole fixed steps the timer may fall behind before it starts warning
pub const FIXED_STEP_BACKLOG_WARN: u32 = 8;

pub const LOG_LEVEL_FILTER_RELEASE: log::LevelFilter = log::LevelFilter::Info;

pub const LOG_LEVEL_FILTER_DEBUG: log::LevelFilter = log::LevelFilter::Debug;

pub const DRAW_OPTIONS: DrawOptions = DrawOptions {
    theme: SvgTheme::GRAY,
    highlight_overlaps: true,
    draw_bounding_boxes: false,
    margin_ratio: 0.05,
};
