//! Input data model: data points, series and the graph configuration.

use serde::{Deserialize, Serialize};

use crate::defaults;
use crate::theme::Theme;

/// A color as understood by the drawing backend (`"#2563eb"`, `"tomato"`, ...)
pub type ColorRef = String;

/// One labelled value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub value: f64,
    /// Overrides palette assignment for this point only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorRef>,
}

impl DataPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            color: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<ColorRef>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// A named run of data points. Series drawn together on a cartesian chart
/// are expected to be index-aligned by category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub data: Vec<DataPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorRef>,
}

impl Series {
    pub fn new(name: impl Into<String>, data: Vec<DataPoint>) -> Self {
        Self {
            name: name.into(),
            data,
            color: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<ColorRef>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Value at category `i`, 0 when this series is shorter than its siblings
    pub fn value_at(&self, i: usize) -> f64 {
        self.data.get(i).map_or(0.0, |p| p.value)
    }
}

/// Chart input before normalization: a bare list of points or a list of series.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphData {
    Points(Vec<DataPoint>),
    Series(Vec<Series>),
}

impl Default for GraphData {
    fn default() -> Self {
        GraphData::Series(Vec::new())
    }
}

impl From<Vec<DataPoint>> for GraphData {
    fn from(points: Vec<DataPoint>) -> Self {
        GraphData::Points(points)
    }
}

impl From<Vec<Series>> for GraphData {
    fn from(series: Vec<Series>) -> Self {
        GraphData::Series(series)
    }
}

/// Chart variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    #[default]
    Bar,
    HorizontalBar,
    Line,
    Area,
    Pie,
    Donut,
}

impl Variant {
    /// Pie and donut charts: no axes, no legend
    pub fn is_circular(self) -> bool {
        matches!(self, Variant::Pie | Variant::Donut)
    }

    pub fn name(self) -> &'static str {
        match self {
            Variant::Bar => "bar",
            Variant::HorizontalBar => "horizontal-bar",
            Variant::Line => "line",
            Variant::Area => "area",
            Variant::Pie => "pie",
            Variant::Donut => "donut",
        }
    }
}

/// Where the legend goes relative to the chart canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    #[default]
    Bottom,
    Right,
    None,
}

/// Immutable description of the chart to synthesize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GraphConfig {
    pub variant: Variant,
    pub width: f64,
    pub height: f64,
    /// Replaces the theme palette when non-empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<ColorRef>>,
    pub show_values: bool,
    pub show_grid: bool,
    pub legend_position: LegendPosition,
    /// Text in the hole of a donut chart
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center_label: Option<String>,
    pub show_dots: bool,
    pub smooth: bool,
    pub y_tick_count: usize,
    /// Keep-on-one-page hint for the host compositor. Not interpreted here.
    pub no_wrap: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            variant: Variant::Bar,
            width: defaults::WIDTH,
            height: defaults::HEIGHT,
            colors: None,
            show_values: false,
            show_grid: true,
            legend_position: LegendPosition::Bottom,
            center_label: None,
            show_dots: true,
            smooth: false,
            y_tick_count: defaults::Y_TICK_COUNT,
            no_wrap: true,
            theme: None,
        }
    }
}

impl GraphConfig {
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_colors(mut self, colors: Vec<ColorRef>) -> Self {
        self.colors = Some(colors);
        self
    }

    pub fn with_values(mut self, show: bool) -> Self {
        self.show_values = show;
        self
    }

    pub fn with_grid(mut self, show: bool) -> Self {
        self.show_grid = show;
        self
    }

    pub fn with_legend(mut self, position: LegendPosition) -> Self {
        self.legend_position = position;
        self
    }

    pub fn with_center_label(mut self, label: impl Into<String>) -> Self {
        self.center_label = Some(label.into());
        self
    }

    pub fn with_dots(mut self, show: bool) -> Self {
        self.show_dots = show;
        self
    }

    pub fn with_smooth(mut self, smooth: bool) -> Self {
        self.smooth = smooth;
        self
    }

    pub fn with_y_ticks(mut self, count: usize) -> Self {
        self.y_tick_count = count;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Canvas width, or the default when the configured one is unusable
    pub fn canvas_width(&self) -> f64 {
        usable_dimension(self.width, defaults::WIDTH)
    }

    /// Canvas height, or the default when the configured one is unusable
    pub fn canvas_height(&self) -> f64 {
        usable_dimension(self.height, defaults::HEIGHT)
    }
}

fn usable_dimension(v: f64, fallback: f64) -> f64 {
    if v.is_finite() && v > 0.0 {
        v
    } else {
        crate::log::warn!(value = v, fallback, "unusable canvas dimension");
        fallback
    }
}
