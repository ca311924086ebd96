//! Chart rectangle, margins and axis values per variant.

use crate::defaults;
use crate::model::{GraphConfig, Series, Variant};
use crate::scale::{compute_domain, compute_ticks};
use crate::types::{Domain, Frame};

/// Space reserved around the plotting area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Margins {
    pub const fn uniform(m: f64) -> Self {
        Self {
            left: m,
            right: m,
            top: m,
            bottom: m,
        }
    }

    /// Margins for a variant. Fixed values, not measured from the text they
    /// make room for.
    pub fn for_variant(variant: Variant) -> Self {
        if variant.is_circular() {
            Self::uniform(defaults::MARGIN_ARC)
        } else {
            Self {
                left: defaults::MARGIN_LEFT,
                right: defaults::MARGIN_RIGHT,
                top: defaults::MARGIN_TOP,
                bottom: defaults::MARGIN_BOTTOM,
            }
        }
    }
}

/// Derived geometry shared by every synthesis strategy.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub svg_w: f64,
    pub svg_h: f64,
    pub chart_x: f64,
    pub chart_y: f64,
    pub chart_w: f64,
    pub chart_h: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub y_ticks: Vec<f64>,
    pub x_labels: Vec<String>,
}

impl ChartLayout {
    pub fn frame(&self) -> Frame {
        Frame::new(self.chart_x, self.chart_y, self.chart_w, self.chart_h)
    }

    pub fn domain(&self) -> Domain {
        Domain::new(self.y_min, self.y_max)
    }

    /// Canvas y of a value on the y axis
    pub fn y_of(&self, value: f64) -> f64 {
        self.chart_y + self.chart_h - self.domain().fraction(value) * self.chart_h
    }

    /// Height of a bar reaching `value`, measured from the bottom of the chart
    pub fn bar_height(&self, value: f64) -> f64 {
        self.domain().fraction(value) * self.chart_h
    }

    /// Number of categories on the x axis
    pub fn categories(&self) -> usize {
        self.x_labels.len()
    }
}

/// Compute the layout for a normalized series list.
///
/// Categories are taken from the first series; an empty list yields no
/// categories and the fallback domain.
pub fn compute_layout(config: &GraphConfig, series: &[Series]) -> ChartLayout {
    let svg_w = config.canvas_width();
    let svg_h = config.canvas_height();
    let m = Margins::for_variant(config.variant);

    let domain = compute_domain(series);
    let y_ticks = compute_ticks(domain.min, domain.max, config.y_tick_count);
    let x_labels = series
        .first()
        .map(|s| s.data.iter().map(|p| p.label.clone()).collect())
        .unwrap_or_default();

    ChartLayout {
        svg_w,
        svg_h,
        chart_x: m.left,
        chart_y: m.top,
        chart_w: (svg_w - m.left - m.right).max(0.0),
        chart_h: (svg_h - m.top - m.bottom).max(0.0),
        y_min: domain.min,
        y_max: domain.max,
        y_ticks,
        x_labels,
    }
}
