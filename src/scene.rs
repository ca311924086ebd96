//! Backend-agnostic scene description: typed draw commands and path data.
//!
//! A scene is an ordered list; later commands paint over earlier ones.
//! Synthesis collects commands per [`Layer`] and flattens them in layer order,
//! so the grid always sits under the data and labels always sit on top.

use std::fmt;

use serde::Serialize;

use crate::model::{ColorRef, LegendPosition};
use crate::types::Point;

/// Format a coordinate with at most two decimals and no trailing zeros.
pub fn coord(v: f64) -> String {
    let r = (v * 100.0).round() / 100.0;
    if r == 0.0 || !r.is_finite() {
        "0".to_string()
    } else {
        format!("{r}")
    }
}

fn pair(p: Point) -> String {
    format!("{},{}", coord(p.x), coord(p.y))
}

/// One segment of an SVG-style path
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    MoveTo(Point),
    LineTo(Point),
    CubicTo(Point, Point, Point),
    /// Circular arc of radius `r` ending at `to`
    ArcTo {
        r: f64,
        large_arc: bool,
        clockwise: bool,
        to: Point,
    },
    Close,
}

/// Builder for path data, rendered in SVG path syntax by `Display`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathData {
    segments: Vec<PathSegment>,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn m(mut self, p: Point) -> Self {
        self.segments.push(PathSegment::MoveTo(p));
        self
    }

    pub fn l(mut self, p: Point) -> Self {
        self.segments.push(PathSegment::LineTo(p));
        self
    }

    pub fn c(mut self, c1: Point, c2: Point, p: Point) -> Self {
        self.segments.push(PathSegment::CubicTo(c1, c2, p));
        self
    }

    pub fn a(mut self, r: f64, large_arc: bool, clockwise: bool, to: Point) -> Self {
        self.segments.push(PathSegment::ArcTo {
            r,
            large_arc,
            clockwise,
            to,
        });
        self
    }

    pub fn z(mut self) -> Self {
        self.segments.push(PathSegment::Close);
        self
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Whether every point and radius in the path is finite
    pub fn is_finite(&self) -> bool {
        self.segments.iter().all(|s| match *s {
            PathSegment::ArcTo { r, .. } => r.is_finite(),
            _ => true,
        }) && self.points().all(|p| p.is_finite())
    }

    /// Every point the path passes through or uses as a control point
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.segments.iter().flat_map(|s| match *s {
            PathSegment::MoveTo(p) | PathSegment::LineTo(p) => vec![p],
            PathSegment::CubicTo(a, b, p) => vec![a, b, p],
            PathSegment::ArcTo { to, .. } => vec![to],
            PathSegment::Close => vec![],
        })
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, seg) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match *seg {
                PathSegment::MoveTo(p) => write!(f, "M{}", pair(p))?,
                PathSegment::LineTo(p) => write!(f, "L{}", pair(p))?,
                PathSegment::CubicTo(a, b, p) => write!(f, "C{} {} {}", pair(a), pair(b), pair(p))?,
                PathSegment::ArcTo {
                    r,
                    large_arc,
                    clockwise,
                    to,
                } => write!(
                    f,
                    "A{} {} 0 {} {} {}",
                    coord(r),
                    coord(r),
                    u8::from(large_arc),
                    u8::from(clockwise),
                    pair(to)
                )?,
                PathSegment::Close => f.write_str("Z")?,
            }
        }
        Ok(())
    }
}

/// Serialized as its SVG path string
impl Serialize for PathData {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Horizontal text alignment relative to the anchor point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_str(self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// A single drawing primitive with absolute coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum DrawCommand {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: ColorRef,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: ColorRef,
        stroke_width: f64,
    },
    Path {
        d: PathData,
        #[serde(skip_serializing_if = "Option::is_none")]
        fill: Option<ColorRef>,
        fill_opacity: f64,
        #[serde(skip_serializing_if = "Option::is_none")]
        stroke: Option<ColorRef>,
        stroke_width: f64,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        fill: ColorRef,
    },
    Text {
        x: f64,
        y: f64,
        content: String,
        anchor: TextAnchor,
        size: f64,
        fill: ColorRef,
        bold: bool,
    },
}

impl DrawCommand {
    pub fn rect(x: f64, y: f64, width: f64, height: f64, fill: impl Into<ColorRef>) -> Self {
        DrawCommand::Rect {
            x,
            y,
            width,
            height,
            fill: fill.into(),
        }
    }

    pub fn line(from: Point, to: Point, stroke: impl Into<ColorRef>, stroke_width: f64) -> Self {
        DrawCommand::Line {
            x1: from.x,
            y1: from.y,
            x2: to.x,
            y2: to.y,
            stroke: stroke.into(),
            stroke_width,
        }
    }

    /// A stroked, unfilled path
    pub fn stroked_path(d: &PathData, stroke: impl Into<ColorRef>, stroke_width: f64) -> Self {
        DrawCommand::Path {
            d: d.clone(),
            fill: None,
            fill_opacity: 1.0,
            stroke: Some(stroke.into()),
            stroke_width,
        }
    }

    /// A filled, unstroked path
    pub fn filled_path(d: &PathData, fill: impl Into<ColorRef>, fill_opacity: f64) -> Self {
        DrawCommand::Path {
            d: d.clone(),
            fill: Some(fill.into()),
            fill_opacity,
            stroke: None,
            stroke_width: 0.0,
        }
    }

    pub fn circle(center: Point, r: f64, fill: impl Into<ColorRef>) -> Self {
        DrawCommand::Circle {
            cx: center.x,
            cy: center.y,
            r,
            fill: fill.into(),
        }
    }

    pub fn text(
        at: Point,
        content: impl Into<String>,
        anchor: TextAnchor,
        size: f64,
        fill: impl Into<ColorRef>,
    ) -> Self {
        DrawCommand::Text {
            x: at.x,
            y: at.y,
            content: content.into(),
            anchor,
            size,
            fill: fill.into(),
            bold: false,
        }
    }

    /// Same command with bold text; other commands are returned unchanged
    pub fn bold(mut self) -> Self {
        if let DrawCommand::Text { bold, .. } = &mut self {
            *bold = true;
        }
        self
    }

    /// Whether every number the command carries is finite.
    pub fn is_finite(&self) -> bool {
        match self {
            DrawCommand::Rect { x, y, width, height, .. } => {
                [x, y, width, height].iter().all(|v| v.is_finite())
            }
            DrawCommand::Line { x1, y1, x2, y2, stroke_width, .. } => {
                [x1, y1, x2, y2, stroke_width].iter().all(|v| v.is_finite())
            }
            DrawCommand::Path { d, fill_opacity, stroke_width, .. } => {
                fill_opacity.is_finite() && stroke_width.is_finite() && d.is_finite()
            }
            DrawCommand::Circle { cx, cy, r, .. } => [cx, cy, r].iter().all(|v| v.is_finite()),
            DrawCommand::Text { x, y, size, .. } => [x, y, size].iter().all(|v| v.is_finite()),
        }
    }
}

/// Paint order of command groups, bottom to top
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Layer {
    Grid,
    Data,
    Labels,
    Legend,
}

/// Commands collected per layer during synthesis.
#[derive(Debug, Default)]
pub struct LayeredCommands {
    grid: Vec<DrawCommand>,
    data: Vec<DrawCommand>,
    labels: Vec<DrawCommand>,
    legend: Vec<DrawCommand>,
}

impl LayeredCommands {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, layer: Layer, cmd: DrawCommand) {
        self.layer_mut(layer).push(cmd);
    }

    pub fn extend(&mut self, layer: Layer, cmds: impl IntoIterator<Item = DrawCommand>) {
        self.layer_mut(layer).extend(cmds);
    }

    pub fn layer(&self, layer: Layer) -> &[DrawCommand] {
        match layer {
            Layer::Grid => &self.grid,
            Layer::Data => &self.data,
            Layer::Labels => &self.labels,
            Layer::Legend => &self.legend,
        }
    }

    fn layer_mut(&mut self, layer: Layer) -> &mut Vec<DrawCommand> {
        match layer {
            Layer::Grid => &mut self.grid,
            Layer::Data => &mut self.data,
            Layer::Labels => &mut self.labels,
            Layer::Legend => &mut self.legend,
        }
    }

    pub fn len(&self) -> usize {
        self.grid.len() + self.data.len() + self.labels.len() + self.legend.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flatten in paint order: grid, data, labels, legend
    pub fn into_commands(self) -> Vec<DrawCommand> {
        let mut out = self.grid;
        out.extend(self.data);
        out.extend(self.labels);
        out.extend(self.legend);
        out
    }
}

/// Legend item handed to hosts that lay legends out themselves
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub name: String,
    pub color: ColorRef,
}

/// The immutable result of one synthesis call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    /// Total canvas width, including a right-hand legend strip
    pub width: f64,
    /// Total canvas height, including a bottom legend strip
    pub height: f64,
    pub background: ColorRef,
    pub font_family: String,
    pub commands: Vec<DrawCommand>,
    pub legend: Vec<LegendEntry>,
    pub legend_position: LegendPosition,
    /// Keep-on-one-page hint forwarded untouched to the host compositor
    pub no_wrap: bool,
}

impl Scene {
    pub fn to_json(&self) -> Result<String, crate::errors::ChartError> {
        serde_json::to_string(self).map_err(|source| crate::errors::ChartError::Encode { source })
    }

    /// Commands of one kind, e.g. `scene.count(|c| matches!(c, DrawCommand::Rect { .. }))`
    pub fn count(&self, pred: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(c)).count()
    }
}
