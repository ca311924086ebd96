//! SVG adapter: translates a [`Scene`] into an SVG document.
//!
//! The scene is mapped onto a `facet_svg` DOM and serialized with
//! `facet_xml`. This is one thin backend among possible others; it reads the
//! scene and never feeds anything back into synthesis.

use std::collections::BTreeSet;

use facet_svg::facet_xml::SerializeOptions;
use facet_svg::{
    Circle as SvgCircle, Group, Line, Path, PathData as SvgPathData, Rect, Style, Svg, SvgNode, Text, facet_xml,
};

use crate::errors::ChartError;
use crate::scene::{DrawCommand, PathData, PathSegment, Scene, coord};

/// Render a scene to an SVG string.
pub fn to_svg(scene: &Scene) -> Result<String, ChartError> {
    let svg = build_svg(scene);

    fn format_float(value: f64, writer: &mut dyn std::io::Write) -> Result<(), std::io::Error> {
        write!(writer, "{}", coord(value))
    }

    let options = SerializeOptions {
        float_formatter: Some(format_float),
        ..Default::default()
    };
    facet_xml::to_string_with_options(&svg, &options).map_err(|e| ChartError::Svg {
        message: e.to_string(),
    })
}

/// The scene as an SVG DOM, one element per draw command.
///
/// Paths with a fill opacity below 1 are wrapped in a `<g>` whose class sets
/// `fill-opacity` from the leading `<style>` sheet.
pub fn build_svg(scene: &Scene) -> Svg {
    let (w, h) = (coord(scene.width), coord(scene.height));
    let mut children = vec![SvgNode::Style(style_sheet(scene))];
    children.extend(scene.commands.iter().map(command_node));

    Svg {
        width: Some(w.clone()),
        height: Some(h.clone()),
        view_box: Some(format!("0 0 {w} {h}")),
        children,
        ..Default::default()
    }
}

/// Document-wide presentation that has no per-element attribute
fn style_sheet(scene: &Scene) -> Style {
    let mut css = format!(
        "svg {{ font-family: {}; }}\npath {{ stroke-linejoin: round; }}\n",
        scene.font_family
    );
    let opacities: BTreeSet<u32> = scene
        .commands
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Path { fill_opacity, .. } => opacity_percent(*fill_opacity),
            _ => None,
        })
        .collect();
    for pct in opacities {
        css.push_str(&format!(
            ".{} {{ fill-opacity: {}; }}\n",
            opacity_class(pct),
            coord(f64::from(pct) / 100.0)
        ));
    }

    Style {
        type_: Some("text/css".to_string()),
        content: Some(css),
    }
}

/// Whole-percent opacity for a translucent fill, `None` when fully opaque
fn opacity_percent(fill_opacity: f64) -> Option<u32> {
    if !fill_opacity.is_finite() || fill_opacity >= 1.0 {
        return None;
    }
    Some((fill_opacity.max(0.0) * 100.0).round() as u32)
}

fn opacity_class(pct: u32) -> String {
    format!("fill-{pct}")
}

fn command_node(cmd: &DrawCommand) -> SvgNode {
    match cmd {
        DrawCommand::Rect { x, y, width, height, fill } => SvgNode::Rect(Rect {
            x: Some(*x),
            y: Some(*y),
            width: Some(*width),
            height: Some(*height),
            fill: Some(fill.clone()),
            ..Default::default()
        }),
        DrawCommand::Line { x1, y1, x2, y2, stroke, stroke_width } => SvgNode::Line(Line {
            x1: Some(*x1),
            y1: Some(*y1),
            x2: Some(*x2),
            y2: Some(*y2),
            stroke: Some(stroke.clone()),
            stroke_width: Some(coord(*stroke_width)),
            ..Default::default()
        }),
        DrawCommand::Path {
            d,
            fill,
            fill_opacity,
            stroke,
            stroke_width,
        } => {
            let path = SvgNode::Path(Path {
                d: Some(svg_path_data(d)),
                fill: Some(fill.clone().unwrap_or_else(|| "none".to_string())),
                stroke: stroke.clone(),
                stroke_width: stroke.as_ref().map(|_| coord(*stroke_width)),
                ..Default::default()
            });
            match opacity_percent(*fill_opacity) {
                Some(pct) => SvgNode::G(Group {
                    class: Some(opacity_class(pct)),
                    children: vec![path],
                    ..Default::default()
                }),
                None => path,
            }
        }
        DrawCommand::Circle { cx, cy, r, fill } => SvgNode::Circle(SvgCircle {
            cx: Some(*cx),
            cy: Some(*cy),
            r: Some(*r),
            fill: Some(fill.clone()),
            ..Default::default()
        }),
        DrawCommand::Text {
            x,
            y,
            content,
            anchor,
            size,
            fill,
            bold,
        } => SvgNode::Text(Text {
            x: Some(*x),
            y: Some(*y),
            fill: Some(fill.clone()),
            font_size: Some(coord(*size)),
            font_weight: bold.then(|| "bold".to_string()),
            text_anchor: Some(anchor.as_str().to_string()),
            content: Some(content.clone()),
            ..Default::default()
        }),
    }
}

/// Path geometry with every coordinate cut to two decimals
fn svg_path_data(d: &PathData) -> SvgPathData {
    let r2 = |v: f64| if v.is_finite() { (v * 100.0).round() / 100.0 } else { 0.0 };
    d.segments().iter().fold(SvgPathData::new(), |out, seg| match *seg {
        PathSegment::MoveTo(p) => out.m(r2(p.x), r2(p.y)),
        PathSegment::LineTo(p) => out.l(r2(p.x), r2(p.y)),
        PathSegment::CubicTo(a, b, p) => out.c(r2(a.x), r2(a.y), r2(b.x), r2(b.y), r2(p.x), r2(p.y)),
        PathSegment::ArcTo {
            r,
            large_arc,
            clockwise,
            to,
        } => out.a(r2(r), r2(r), 0.0, large_arc, clockwise, r2(to.x), r2(to.y)),
        PathSegment::Close => out.z(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LegendPosition;
    use crate::scene::TextAnchor;
    use glam::dvec2;

    fn scene(commands: Vec<DrawCommand>) -> Scene {
        Scene {
            width: 100.0,
            height: 50.0,
            background: "#fff".into(),
            font_family: "Inter".into(),
            commands,
            legend: Vec::new(),
            legend_position: LegendPosition::None,
            no_wrap: true,
        }
    }

    fn one_of_each() -> Scene {
        let d = PathData::new().m(dvec2(0.0, 0.0)).l(dvec2(1.0, 1.0));
        scene(vec![
            DrawCommand::rect(1.0, 2.0, 3.0, 4.5, "red"),
            DrawCommand::line(dvec2(0.0, 0.0), dvec2(10.0, 0.0), "#ccc", 0.5),
            DrawCommand::filled_path(&d, "blue", 0.2),
            DrawCommand::stroked_path(&d, "navy", 1.5),
            DrawCommand::circle(dvec2(5.0, 5.0), 2.5, "green"),
            DrawCommand::text(dvec2(1.0, 9.0), "A&B", TextAnchor::End, 7.0, "#333").bold(),
        ])
    }

    #[test]
    fn empty_scene_has_size_and_style_only() {
        let svg = build_svg(&scene(vec![]));
        assert_eq!(svg.width.as_deref(), Some("100"));
        assert_eq!(svg.height.as_deref(), Some("50"));
        assert_eq!(svg.view_box.as_deref(), Some("0 0 100 50"));
        assert_eq!(svg.children.len(), 1);
        match &svg.children[0] {
            SvgNode::Style(style) => assert!(style.content.as_deref().unwrap_or_default().contains("font-family: Inter;")),
            _ => panic!("expected the style sheet first"),
        }
    }

    #[test]
    fn one_node_per_command() {
        let svg = build_svg(&one_of_each());
        let kinds: Vec<&str> = svg.children[1..]
            .iter()
            .map(|n| match n {
                SvgNode::Rect(_) => "rect",
                SvgNode::Line(_) => "line",
                SvgNode::Path(_) => "path",
                SvgNode::G(_) => "g",
                SvgNode::Circle(_) => "circle",
                SvgNode::Text(_) => "text",
                _ => "other",
            })
            .collect();
        assert_eq!(kinds, vec!["rect", "line", "g", "path", "circle", "text"]);

        match &svg.children[6] {
            SvgNode::Text(t) => {
                assert_eq!(t.content.as_deref(), Some("A&B"));
                assert_eq!(t.text_anchor.as_deref(), Some("end"));
                assert_eq!(t.font_weight.as_deref(), Some("bold"));
            }
            _ => unreachable!(),
        }
        match &svg.children[4] {
            SvgNode::Path(p) => {
                assert_eq!(p.fill.as_deref(), Some("none"));
                assert_eq!(p.stroke_width.as_deref(), Some("1.5"));
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn translucent_fills_get_a_class_rule() {
        let svg = build_svg(&one_of_each());
        match (&svg.children[0], &svg.children[3]) {
            (SvgNode::Style(style), SvgNode::G(g)) => {
                assert_eq!(g.class.as_deref(), Some("fill-20"));
                assert_eq!(g.children.len(), 1);
                assert!(style.content.as_deref().unwrap_or_default().contains(".fill-20 { fill-opacity: 0.2; }"));
            }
            _ => panic!("expected a style sheet and a wrapped path"),
        }
    }

    #[test]
    fn serialized_markup_is_escaped_and_trimmed() {
        let out = to_svg(&one_of_each()).unwrap();
        assert!(out.starts_with("<svg"));
        assert!(out.contains("A&amp;B"));
        assert!(!out.contains("A&B"));
        assert!(out.contains(r#"height="4.5""#));
        assert!(!out.contains("4.50"));
    }
}
