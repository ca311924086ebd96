//! Legend entries and their placement in a strip beside the chart.

use glam::dvec2;

use crate::defaults;
use crate::format::truncate;
use crate::layout::ChartLayout;
use crate::model::{GraphConfig, LegendPosition, Series};
use crate::scene::{DrawCommand, LegendEntry, TextAnchor};
use crate::theme::ChartStyles;

/// One entry per series with its resolved color. Pie and donut charts and
/// `LegendPosition::None` get no legend.
pub fn build_legend(config: &GraphConfig, series: &[Series], styles: &ChartStyles) -> Vec<LegendEntry> {
    if config.variant.is_circular() || config.legend_position == LegendPosition::None {
        return Vec::new();
    }
    series
        .iter()
        .enumerate()
        .map(|(i, s)| LegendEntry {
            name: s.name.clone(),
            color: styles.palette.series_color(s, i),
        })
        .collect()
}

/// Legend drawn into a strip outside the chart canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendStrip {
    pub commands: Vec<DrawCommand>,
    /// Extra canvas width the strip needs
    pub extra_width: f64,
    /// Extra canvas height the strip needs
    pub extra_height: f64,
}

/// Lay the entries out: rows under the chart for `Bottom`, wrapping at the
/// chart's right edge, a column to its right for `Right`.
pub fn legend_strip(
    entries: &[LegendEntry],
    position: LegendPosition,
    layout: &ChartLayout,
    styles: &ChartStyles,
) -> LegendStrip {
    let mut strip = LegendStrip {
        commands: Vec::new(),
        extra_width: 0.0,
        extra_height: 0.0,
    };
    if entries.is_empty() {
        return strip;
    }

    let swatch = defaults::LEGEND_SWATCH;
    let labels: Vec<(String, f64)> = entries
        .iter()
        .map(|entry| {
            let name = truncate(&entry.name, defaults::LEGEND_LABEL_CHARS);
            let width = swatch + 4.0 + name.chars().count() as f64 * defaults::CHAR_WIDTH;
            (name, width)
        })
        .collect();
    let mut item = |x: f64, y: f64, entry: &LegendEntry, name: &str| {
        strip
            .commands
            .push(DrawCommand::rect(x, y, swatch, swatch, entry.color.clone()));
        strip.commands.push(DrawCommand::text(
            dvec2(x + swatch + 4.0, y + swatch - 0.5),
            name,
            TextAnchor::Start,
            defaults::FONT_SIZE,
            styles.muted.clone(),
        ));
    };

    match position {
        LegendPosition::Bottom => {
            // Items flow left to right and wrap at the chart's right edge
            let right = layout.chart_x + layout.chart_w;
            let mut y = layout.svg_h + (defaults::LEGEND_BOTTOM_STRIP - swatch) / 2.0;
            let mut x = layout.chart_x;
            let mut rows = 1;
            for (entry, (name, width)) in entries.iter().zip(&labels) {
                if x > layout.chart_x && x + width > right {
                    x = layout.chart_x;
                    y += defaults::LEGEND_ROW;
                    rows += 1;
                }
                item(x, y, entry, name);
                x += width + defaults::LEGEND_ITEM_GAP;
            }
            strip.extra_height = defaults::LEGEND_BOTTOM_STRIP + defaults::LEGEND_ROW * (rows - 1) as f64;
        }
        LegendPosition::Right => {
            let x = layout.svg_w + 8.0;
            for (i, (entry, (name, _))) in entries.iter().zip(&labels).enumerate() {
                item(x, layout.chart_y + defaults::LEGEND_ROW * i as f64, entry, name);
            }
            strip.extra_width = defaults::LEGEND_RIGHT_STRIP;
        }
        LegendPosition::None => {}
    }
    strip
}
