//! Vertical grouped bars.

use glam::dvec2;

use super::{Synthesize, SynthContext, x_axis_labels, y_axis};
use crate::defaults;
use crate::format::fmt_num;
use crate::scene::{DrawCommand, Layer, LayeredCommands, TextAnchor};

/// Categories side by side, one bar per series inside each category group.
#[derive(Debug, Clone, Copy, Default)]
pub struct BarChart;

impl Synthesize for BarChart {
    fn synthesize(&self, ctx: &SynthContext<'_>) -> LayeredCommands {
        let mut out = LayeredCommands::new();
        y_axis(ctx, &mut out);

        let layout = ctx.layout;
        let frame = layout.frame();
        let n_cat = layout.categories();
        let n_series = ctx.series.len();
        if n_cat == 0 || n_series == 0 {
            return out;
        }

        let group_w = frame.w / n_cat as f64;
        let gap = group_w * defaults::GROUP_GAP;
        let bar_w = (group_w - gap) / n_series as f64;
        let palette = &ctx.styles.palette;

        let mut centers = Vec::with_capacity(n_cat);
        for i in 0..n_cat {
            let group_x = frame.x + group_w * i as f64;
            centers.push(group_x + group_w / 2.0);

            for (s_idx, series) in ctx.series.iter().enumerate() {
                let value = series.value_at(i);
                let height = layout.bar_height(value).max(0.0);
                let x = group_x + gap / 2.0 + bar_w * s_idx as f64;
                let y = frame.bottom() - height;
                let color = palette.point_color(series.data.get(i), Some(series), s_idx);
                out.push(Layer::Data, DrawCommand::rect(x, y, bar_w, height, color));

                if ctx.config.show_values && height > defaults::MIN_LABELED_BAR {
                    out.push(
                        Layer::Labels,
                        DrawCommand::text(
                            dvec2(x + bar_w / 2.0, y - 3.0),
                            fmt_num(value),
                            TextAnchor::Middle,
                            defaults::VALUE_FONT_SIZE,
                            ctx.styles.foreground.clone(),
                        ),
                    );
                }
            }
        }

        x_axis_labels(ctx, &centers, group_w, &mut out);
        out
    }
}
