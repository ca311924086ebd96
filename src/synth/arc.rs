//! Pie and donut charts.

use glam::dvec2;

use super::geometry::{polar_to_cartesian, slice_angles, slice_path};
use super::{Synthesize, SynthContext};
use crate::defaults;
use crate::format::{fmt_num, truncate};
use crate::scene::{DrawCommand, Layer, LayeredCommands, TextAnchor};

/// Slices of the first series around the chart center. `donut` cuts a hole
/// of `DONUT_INNER_RATIO` times the radius.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArcChart {
    pub donut: bool,
}

impl Synthesize for ArcChart {
    fn synthesize(&self, ctx: &SynthContext<'_>) -> LayeredCommands {
        let mut out = LayeredCommands::new();
        let frame = ctx.layout.frame();
        let center = frame.center();
        let r = frame.w.min(frame.h) / 2.0 * defaults::ARC_RADIUS_RATIO;
        let inner = self.donut.then(|| r * defaults::DONUT_INNER_RATIO);
        let styles = ctx.styles;

        let Some(series) = ctx.series.first() else {
            self.center_label(ctx, &mut out);
            return out;
        };

        let values: Vec<f64> = series.data.iter().map(|p| p.value).collect();
        let slices = slice_angles(&values);
        if slices.iter().all(|s| s.sweep.raw() == 0.0) {
            crate::log::warn!(slices = slices.len(), "pie total is zero, no slices drawn");
        }

        for (i, (point, slice)) in series.data.iter().zip(&slices).enumerate() {
            if slice.sweep.raw() <= 0.0 {
                continue;
            }
            let fill = point
                .color
                .clone()
                .unwrap_or_else(|| styles.palette.at(i).to_string());
            let d = slice_path(center, r, inner, slice);
            out.push(
                Layer::Data,
                DrawCommand::Path {
                    d,
                    fill: Some(fill),
                    fill_opacity: 1.0,
                    stroke: Some(styles.background.clone()),
                    stroke_width: 1.0,
                },
            );

            if slice.sweep.raw() <= defaults::MIN_LABELED_SWEEP {
                continue;
            }

            let at = polar_to_cartesian(center, r * defaults::SLICE_LABEL_RADIUS, slice.mid());
            let anchor = if at.x >= center.x {
                TextAnchor::Start
            } else {
                TextAnchor::End
            };
            out.push(
                Layer::Labels,
                DrawCommand::text(
                    dvec2(at.x, at.y + 2.5),
                    truncate(&point.label, defaults::SLICE_LABEL_CHARS),
                    anchor,
                    defaults::FONT_SIZE,
                    styles.foreground.clone(),
                ),
            );

            if ctx.config.show_values {
                let value_r = match inner {
                    Some(ir) => (r + ir) / 2.0,
                    None => r * 0.62,
                };
                let at = polar_to_cartesian(center, value_r, slice.mid());
                out.push(
                    Layer::Labels,
                    DrawCommand::text(
                        dvec2(at.x, at.y + 2.5),
                        fmt_num(point.value),
                        TextAnchor::Middle,
                        defaults::VALUE_FONT_SIZE,
                        styles.background.clone(),
                    )
                    .bold(),
                );
            }
        }

        self.center_label(ctx, &mut out);
        out
    }
}

impl ArcChart {
    /// Donut center text over a background-colored disc, so it reads cleanly
    /// against the slices.
    fn center_label(&self, ctx: &SynthContext<'_>, out: &mut LayeredCommands) {
        let Some(label) = ctx.config.center_label.as_deref().filter(|l| !l.is_empty()) else {
            return;
        };
        if !self.donut {
            return;
        }
        let frame = ctx.layout.frame();
        let center = frame.center();
        let r = frame.w.min(frame.h) / 2.0 * defaults::ARC_RADIUS_RATIO;
        let inner = r * defaults::DONUT_INNER_RATIO;

        out.push(
            Layer::Labels,
            DrawCommand::circle(center, inner, ctx.styles.background.clone()),
        );
        out.push(
            Layer::Labels,
            DrawCommand::text(
                dvec2(center.x, center.y + defaults::CENTER_FONT_SIZE / 3.0),
                label,
                TextAnchor::Middle,
                defaults::CENTER_FONT_SIZE,
                ctx.styles.foreground.clone(),
            )
            .bold(),
        );
    }
}
