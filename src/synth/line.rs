//! Line and area charts.

use glam::dvec2;

use super::geometry::{close_to_baseline, linear_path, smooth_path};
use super::{Synthesize, SynthContext, x_axis_labels, y_axis};
use crate::defaults;
use crate::format::fmt_num;
use crate::scene::{DrawCommand, Layer, LayeredCommands, TextAnchor};
use crate::types::Point;

/// One polyline (or smoothed curve) per series; `fill_area` adds a
/// translucent fill down to the baseline.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineChart {
    pub fill_area: bool,
}

impl Synthesize for LineChart {
    fn synthesize(&self, ctx: &SynthContext<'_>) -> LayeredCommands {
        let mut out = LayeredCommands::new();
        y_axis(ctx, &mut out);

        let layout = ctx.layout;
        let frame = layout.frame();
        let n = layout.categories();
        if n == 0 {
            return out;
        }

        // A single category sits on the left edge
        let xs: Vec<f64> = (0..n)
            .map(|i| {
                if n > 1 {
                    frame.x + i as f64 / (n - 1) as f64 * frame.w
                } else {
                    frame.x
                }
            })
            .collect();

        for (s_idx, series) in ctx.series.iter().enumerate() {
            let color = ctx.styles.palette.series_color(series, s_idx);
            let points: Vec<Point> = xs
                .iter()
                .enumerate()
                .map(|(i, &x)| dvec2(x, layout.y_of(series.value_at(i))))
                .collect();

            let path = if ctx.config.smooth {
                smooth_path(&points)
            } else if points.len() > 1 {
                linear_path(&points)
            } else {
                Default::default()
            };

            if !path.is_empty() {
                if self.fill_area {
                    let area = close_to_baseline(path.clone(), &points, frame.bottom());
                    out.push(
                        Layer::Data,
                        DrawCommand::filled_path(&area, color.clone(), defaults::AREA_OPACITY),
                    );
                }
                out.push(
                    Layer::Data,
                    DrawCommand::stroked_path(&path, color.clone(), defaults::LINE_WIDTH),
                );
            }

            // A lone point is only visible as a dot
            if ctx.config.show_dots || points.len() == 1 {
                for (i, p) in points.iter().enumerate() {
                    let fill = ctx
                        .styles
                        .palette
                        .point_color(series.data.get(i), Some(series), s_idx);
                    out.push(Layer::Data, DrawCommand::circle(*p, defaults::DOT_RADIUS, fill));
                }
            }

            if ctx.config.show_values {
                for (i, p) in points.iter().enumerate() {
                    out.push(
                        Layer::Labels,
                        DrawCommand::text(
                            dvec2(p.x, p.y - 5.0),
                            fmt_num(series.value_at(i)),
                            TextAnchor::Middle,
                            defaults::VALUE_FONT_SIZE,
                            ctx.styles.foreground.clone(),
                        ),
                    );
                }
            }
        }

        let slot = if n > 1 { frame.w / (n - 1) as f64 } else { frame.w };
        x_axis_labels(ctx, &xs, slot, &mut out);
        out
    }
}
