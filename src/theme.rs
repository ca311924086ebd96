//! Theme tokens and deterministic color assignment.
//!
//! The host theming system supplies semantic color tokens; the palette is
//! built from them once per synthesis call. Nothing here is global: callers
//! that want to reuse derived styles across calls hold a [`StyleCache`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::{ColorRef, DataPoint, GraphConfig, Series};

/// Hex colors appended after the theme's semantic colors
pub const PALETTE_FALLBACKS: [&str; 3] = ["#8b5cf6", "#ec4899", "#14b8a6"];

/// Semantic tokens requested from the host theme.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Theme {
    pub primary: ColorRef,
    pub info: ColorRef,
    pub success: ColorRef,
    pub warning: ColorRef,
    pub destructive: ColorRef,
    pub background: ColorRef,
    pub foreground: ColorRef,
    pub muted_foreground: ColorRef,
    pub border: ColorRef,
    pub font_family: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: "#2563eb".into(),
            info: "#0ea5e9".into(),
            success: "#16a34a".into(),
            warning: "#f59e0b".into(),
            destructive: "#dc2626".into(),
            background: "#ffffff".into(),
            foreground: "#0a0a0a".into(),
            muted_foreground: "#737373".into(),
            border: "#e5e5e5".into(),
            font_family: "Helvetica".into(),
        }
    }
}

/// Colors and typography derived from a theme for one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyles {
    pub palette: Palette,
    pub background: ColorRef,
    pub foreground: ColorRef,
    pub muted: ColorRef,
    pub grid: ColorRef,
    pub font_family: String,
}

impl ChartStyles {
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            palette: Palette::from_theme(theme),
            background: theme.background.clone(),
            foreground: theme.foreground.clone(),
            muted: theme.muted_foreground.clone(),
            grid: theme.border.clone(),
            font_family: theme.font_family.clone(),
        }
    }

    /// Styles for a config: its theme (or the built-in one), with the
    /// config's palette override applied.
    pub fn for_config(config: &GraphConfig) -> Self {
        let mut styles = match &config.theme {
            Some(theme) => Self::from_theme(theme),
            None => Self::from_theme(&Theme::default()),
        };
        if let Some(colors) = config.colors.as_ref().filter(|c| !c.is_empty()) {
            styles.palette = Palette::new(colors.clone());
        }
        styles
    }
}

/// Ordered list of colors handed out by index, wrapping around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<ColorRef>,
}

impl Palette {
    /// Build a palette; an empty list falls back to the built-in theme's.
    pub fn new(colors: Vec<ColorRef>) -> Self {
        if colors.is_empty() {
            return Self::from_theme(&Theme::default());
        }
        Self { colors }
    }

    pub fn from_theme(theme: &Theme) -> Self {
        let mut colors = vec![
            theme.primary.clone(),
            theme.info.clone(),
            theme.success.clone(),
            theme.warning.clone(),
            theme.destructive.clone(),
        ];
        colors.extend(PALETTE_FALLBACKS.iter().map(|c| c.to_string()));
        Self { colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color at `index`, wrapping so any number of items gets a color
    pub fn at(&self, index: usize) -> &str {
        &self.colors[index % self.colors.len()]
    }

    /// Color of a whole series: its own color, else the palette slot.
    pub fn series_color(&self, series: &Series, index: usize) -> ColorRef {
        series
            .color
            .clone()
            .unwrap_or_else(|| self.at(index).to_string())
    }

    /// Color of one point: point color, then series color, then palette slot.
    pub fn point_color(&self, point: Option<&DataPoint>, series: Option<&Series>, index: usize) -> ColorRef {
        point
            .and_then(|p| p.color.clone())
            .or_else(|| series.and_then(|s| s.color.clone()))
            .unwrap_or_else(|| self.at(index).to_string())
    }
}

/// Caller-owned memo of derived styles, keyed by whatever the caller uses to
/// identify a theme (a tenant id, a document id, ...).
#[derive(Debug, Default)]
pub struct StyleCache<K> {
    entries: HashMap<K, (Theme, ChartStyles)>,
}

impl<K: std::hash::Hash + Eq> StyleCache<K> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Derived styles for `theme` under `key`. A different theme under an
    /// existing key replaces the entry.
    pub fn get_or_compute(&mut self, key: K, theme: &Theme) -> &ChartStyles {
        let entry = self
            .entries
            .entry(key)
            .or_insert_with(|| (theme.clone(), ChartStyles::from_theme(theme)));
        if entry.0 != *theme {
            *entry = (theme.clone(), ChartStyles::from_theme(theme));
        }
        &entry.1
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette_has_eight_colors() {
        let p = Palette::from_theme(&Theme::default());
        assert_eq!(p.len(), 8);
        assert_eq!(p.at(0), "#2563eb");
        assert_eq!(p.at(8), p.at(0));
        assert_eq!(p.at(13), p.at(5));
    }

    #[test]
    fn resolution_order() {
        let p = Palette::from_theme(&Theme::default());
        let series = Series::new("s", vec![]).with_color("#111111");
        let point = DataPoint::new("a", 1.0).with_color("#222222");
        let plain = DataPoint::new("b", 1.0);

        assert_eq!(p.point_color(Some(&point), Some(&series), 3), "#222222");
        assert_eq!(p.point_color(Some(&plain), Some(&series), 3), "#111111");
        assert_eq!(p.point_color(Some(&plain), None, 3), p.at(3));
        assert_eq!(p.point_color(None, None, 9), p.at(1));
    }

    #[test]
    fn config_colors_override_palette() {
        let cfg = GraphConfig::default().with_colors(vec!["red".into(), "blue".into()]);
        let styles = ChartStyles::for_config(&cfg);
        assert_eq!(styles.palette.len(), 2);
        assert_eq!(styles.palette.at(3), "blue");

        let empty = GraphConfig::default().with_colors(vec![]);
        assert_eq!(ChartStyles::for_config(&empty).palette.len(), 8);
    }

    #[test]
    fn style_cache_is_keyed_by_caller() {
        let mut cache = StyleCache::new();
        let light = Theme::default();
        let dark = Theme {
            background: "#000000".into(),
            ..Theme::default()
        };

        assert_eq!(cache.get_or_compute("a", &light).background, "#ffffff");
        assert_eq!(cache.get_or_compute("b", &dark).background, "#000000");
        assert_eq!(cache.get_or_compute("a", &light).background, "#ffffff");
        assert_eq!(cache.len(), 2);

        // Same key, new theme: recomputed rather than served stale
        assert_eq!(cache.get_or_compute("a", &dark).background, "#000000");
    }
}
