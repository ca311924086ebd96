//! Default sizes and ratios (all in canvas points)

pub const WIDTH: f64 = 500.0;
pub const HEIGHT: f64 = 260.0;
pub const Y_TICK_COUNT: usize = 5;
/// Upper bound on a requested tick count
pub const MAX_Y_TICKS: usize = 50;

// Cartesian margins. Fixed, not measured from the rendered text.
pub const MARGIN_LEFT: f64 = 40.0;
pub const MARGIN_RIGHT: f64 = 10.0;
pub const MARGIN_TOP: f64 = 10.0;
pub const MARGIN_BOTTOM: f64 = 24.0;
/// Uniform margin for pie and donut charts
pub const MARGIN_ARC: f64 = 10.0;

/// Fraction of the y range added above the largest value
pub const HEADROOM: f64 = 0.08;

/// Share of each bar group left empty between groups
pub const GROUP_GAP: f64 = 0.25;
/// Bars shorter than this get no value label
pub const MIN_LABELED_BAR: f64 = 10.0;

/// Width of the category label column of a horizontal bar chart
pub const HBAR_LABEL_COLUMN: f64 = 60.0;
/// Share of a horizontal row filled by its bar
pub const HBAR_FILL: f64 = 0.6;

/// Catmull-Rom tension for smoothed lines
pub const TENSION: f64 = 0.4;
/// Control point offset per unit of neighbor-to-neighbor distance
pub const CONTROL_FACTOR: f64 = TENSION / 2.0;
pub const AREA_OPACITY: f64 = 0.2;
pub const LINE_WIDTH: f64 = 1.5;
pub const DOT_RADIUS: f64 = 2.5;

pub const DONUT_INNER_RATIO: f64 = 0.52;
/// Outer radius as a share of half the chart's smaller side, leaves room for outside labels
pub const ARC_RADIUS_RATIO: f64 = 0.78;
pub const SLICE_LABEL_RADIUS: f64 = 1.18;
/// Slices with a smaller sweep get no outside label
pub const MIN_LABELED_SWEEP: f64 = 15.0;
/// Largest drawable sweep, a full 360 degree arc has coincident endpoints
pub const MAX_SWEEP: f64 = 359.999;

pub const FONT_SIZE: f64 = 7.0;
pub const VALUE_FONT_SIZE: f64 = 6.0;
pub const CENTER_FONT_SIZE: f64 = 11.0;
/// Rough advance of one character at `FONT_SIZE`, used to fit category labels
pub const CHAR_WIDTH: f64 = 4.2;
pub const SLICE_LABEL_CHARS: usize = 14;
pub const LEGEND_LABEL_CHARS: usize = 18;

pub const GRID_STROKE_WIDTH: f64 = 0.5;
pub const AXIS_STROKE_WIDTH: f64 = 0.75;

pub const LEGEND_BOTTOM_STRIP: f64 = 20.0;
pub const LEGEND_RIGHT_STRIP: f64 = 110.0;
pub const LEGEND_SWATCH: f64 = 7.0;
pub const LEGEND_ROW: f64 = 12.0;
pub const LEGEND_ITEM_GAP: f64 = 12.0;
