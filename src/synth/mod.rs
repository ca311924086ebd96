//! Per-variant geometry synthesis.
//!
//! Each chart variant is its own strategy type implementing [`Synthesize`];
//! [`Synthesizer`] dispatches to them without any shared mutable layout state.
//! Strategies return commands grouped by [`Layer`], which the orchestrator
//! flattens into paint order.

use enum_dispatch::enum_dispatch;
use glam::dvec2;

use crate::defaults;
use crate::format::{fmt_num, truncate};
use crate::layout::ChartLayout;
use crate::model::{GraphConfig, Series, Variant};
use crate::scene::{DrawCommand, Layer, LayeredCommands, TextAnchor};
use crate::theme::ChartStyles;

mod arc;
mod bar;
pub mod geometry;
mod hbar;
mod line;

pub use arc::ArcChart;
pub use bar::BarChart;
pub use hbar::HorizontalBarChart;
pub use line::LineChart;

/// Everything a strategy reads. Borrowed, never mutated.
#[derive(Debug, Clone, Copy)]
pub struct SynthContext<'a> {
    pub config: &'a GraphConfig,
    pub series: &'a [Series],
    pub layout: &'a ChartLayout,
    pub styles: &'a ChartStyles,
}

/// Common behavior for all chart variants
#[enum_dispatch]
pub trait Synthesize {
    /// Draw commands for the chart body: axes, data shapes and their labels.
    fn synthesize(&self, ctx: &SynthContext<'_>) -> LayeredCommands;
}

/// Dispatch table from variant to strategy.
#[enum_dispatch(Synthesize)]
#[derive(Debug, Clone, Copy)]
pub enum Synthesizer {
    BarChart,
    HorizontalBarChart,
    LineChart,
    ArcChart,
}

impl Synthesizer {
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Bar => BarChart.into(),
            Variant::HorizontalBar => HorizontalBarChart.into(),
            Variant::Line => LineChart { fill_area: false }.into(),
            Variant::Area => LineChart { fill_area: true }.into(),
            Variant::Pie => ArcChart { donut: false }.into(),
            Variant::Donut => ArcChart { donut: true }.into(),
        }
    }
}

/// Horizontal grid lines and tick labels for the y axis, plus the baseline.
fn y_axis(ctx: &SynthContext<'_>, out: &mut LayeredCommands) {
    let layout = ctx.layout;
    let frame = layout.frame();

    for &tick in &layout.y_ticks {
        let y = layout.y_of(tick);
        if ctx.config.show_grid {
            out.push(
                Layer::Grid,
                DrawCommand::line(
                    dvec2(frame.x, y),
                    dvec2(frame.right(), y),
                    ctx.styles.grid.clone(),
                    defaults::GRID_STROKE_WIDTH,
                ),
            );
        }
        out.push(
            Layer::Grid,
            DrawCommand::text(
                dvec2(frame.x - 4.0, y + 2.5),
                fmt_num(tick),
                TextAnchor::End,
                defaults::FONT_SIZE,
                ctx.styles.muted.clone(),
            ),
        );
    }

    out.push(
        Layer::Grid,
        DrawCommand::line(
            dvec2(frame.x, frame.bottom()),
            dvec2(frame.right(), frame.bottom()),
            ctx.styles.grid.clone(),
            defaults::AXIS_STROKE_WIDTH,
        ),
    );
}

/// Category labels under the chart, centered on `xs`, each cut to fit `slot` points.
fn x_axis_labels(ctx: &SynthContext<'_>, xs: &[f64], slot: f64, out: &mut LayeredCommands) {
    let max_chars = ((slot / defaults::CHAR_WIDTH).floor() as usize).max(3);
    let y = ctx.layout.frame().bottom() + 14.0;
    for (label, &x) in ctx.layout.x_labels.iter().zip(xs) {
        out.push(
            Layer::Grid,
            DrawCommand::text(
                dvec2(x, y),
                truncate(label, max_chars),
                TextAnchor::Middle,
                defaults::FONT_SIZE,
                ctx.styles.muted.clone(),
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::compute_layout;
    use crate::model::DataPoint;

    #[test]
    fn every_variant_has_a_strategy() {
        let series = vec![Series::new(
            "s",
            vec![DataPoint::new("a", 1.0), DataPoint::new("b", 3.0)],
        )];
        let styles = ChartStyles::for_config(&GraphConfig::default());
        for variant in [
            Variant::Bar,
            Variant::HorizontalBar,
            Variant::Line,
            Variant::Area,
            Variant::Pie,
            Variant::Donut,
        ] {
            let config = GraphConfig::new(variant);
            let layout = compute_layout(&config, &series);
            let ctx = SynthContext {
                config: &config,
                series: &series,
                layout: &layout,
                styles: &styles,
            };
            let cmds = Synthesizer::for_variant(variant).synthesize(&ctx);
            assert!(!cmds.layer(Layer::Data).is_empty(), "{variant:?} drew no data");
        }
    }

    #[test]
    fn grid_toggle() {
        let series = vec![Series::new("s", vec![DataPoint::new("a", 10.0)])];
        let styles = ChartStyles::for_config(&GraphConfig::default());
        let count_lines = |show_grid: bool| {
            let config = GraphConfig::new(Variant::Bar).with_grid(show_grid);
            let layout = compute_layout(&config, &series);
            let ctx = SynthContext {
                config: &config,
                series: &series,
                layout: &layout,
                styles: &styles,
            };
            let mut out = LayeredCommands::new();
            y_axis(&ctx, &mut out);
            out.layer(Layer::Grid)
                .iter()
                .filter(|c| matches!(c, DrawCommand::Line { .. }))
                .count()
        };
        // Five tick lines plus the baseline, or just the baseline
        assert_eq!(count_lines(true), 6);
        assert_eq!(count_lines(false), 1);
    }
}
