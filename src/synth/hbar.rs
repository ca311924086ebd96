//! Horizontal bars, one row per category of the first series.

use glam::dvec2;

use super::{Synthesize, SynthContext};
use crate::defaults;
use crate::format::{fmt_num, truncate};
use crate::scene::{DrawCommand, Layer, LayeredCommands, TextAnchor};

/// Single-series horizontal bars with a label column on the left.
#[derive(Debug, Clone, Copy, Default)]
pub struct HorizontalBarChart;

impl Synthesize for HorizontalBarChart {
    fn synthesize(&self, ctx: &SynthContext<'_>) -> LayeredCommands {
        let mut out = LayeredCommands::new();
        let Some(series) = ctx.series.first() else {
            return out;
        };
        if ctx.series.len() > 1 {
            crate::log::warn!(
                ignored = ctx.series.len() - 1,
                "horizontal bar charts draw only the first series"
            );
        }

        let frame = ctx.layout.frame();
        let n = series.data.len();
        if n == 0 {
            return out;
        }

        let row_h = frame.h / n as f64;
        let bar_h = row_h * defaults::HBAR_FILL;
        let bars_x = frame.x + defaults::HBAR_LABEL_COLUMN;
        let available = (frame.w - defaults::HBAR_LABEL_COLUMN).max(0.0);
        let max_value = series.data.iter().fold(1.0_f64, |m, p| m.max(p.value));
        let label_chars = ((defaults::HBAR_LABEL_COLUMN - 4.0) / defaults::CHAR_WIDTH).floor() as usize;
        let palette = &ctx.styles.palette;

        out.push(
            Layer::Grid,
            DrawCommand::line(
                dvec2(bars_x, frame.y),
                dvec2(bars_x, frame.bottom()),
                ctx.styles.grid.clone(),
                defaults::AXIS_STROKE_WIDTH,
            ),
        );

        for (i, point) in series.data.iter().enumerate() {
            let row_y = frame.y + row_h * i as f64;
            let mid_y = row_y + row_h / 2.0;
            let length = point.value.max(0.0) / max_value * available;
            let color = palette.point_color(Some(point), Some(series), 0);

            out.push(
                Layer::Grid,
                DrawCommand::text(
                    dvec2(bars_x - 4.0, mid_y + 2.5),
                    truncate(&point.label, label_chars),
                    TextAnchor::End,
                    defaults::FONT_SIZE,
                    ctx.styles.muted.clone(),
                ),
            );
            out.push(
                Layer::Data,
                DrawCommand::rect(bars_x, mid_y - bar_h / 2.0, length, bar_h, color),
            );
            if ctx.config.show_values {
                out.push(
                    Layer::Labels,
                    DrawCommand::text(
                        dvec2(bars_x + length + 3.0, mid_y + 2.5),
                        fmt_num(point.value),
                        TextAnchor::Start,
                        defaults::VALUE_FONT_SIZE,
                        ctx.styles.foreground.clone(),
                    ),
                );
            }
        }
        out
    }
}
