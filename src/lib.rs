//! Backend-agnostic chart geometry.
//!
//! Given a [`GraphConfig`] and a snapshot of data, [`synthesize`] computes the
//! axis scale, the layout rectangle and every drawable primitive of a bar,
//! horizontal bar, line, area, pie or donut chart, returned as an ordered
//! [`Scene`]. Rendering is left to a backend; [`svg::to_svg`] is one.
//!
//! ```
//! use chartscene::{DataPoint, GraphConfig, Variant, synthesize};
//!
//! let config = GraphConfig::new(Variant::Bar).with_size(480.0, 260.0);
//! let data = vec![DataPoint::new("Jan", 42000.0), DataPoint::new("Feb", 38000.0)];
//! let scene = synthesize(&config, data);
//! let svg = chartscene::svg::to_svg(&scene)?;
//! assert!(svg.starts_with("<svg"));
//! # Ok::<(), chartscene::ChartError>(())
//! ```

pub mod defaults;
pub mod errors;
pub mod format;
pub mod layout;
pub mod legend;
mod log;
pub mod model;
pub mod normalize;
pub mod scale;
pub mod scene;
pub mod svg;
pub mod synth;
pub mod theme;
pub mod types;

pub use errors::ChartError;
pub use layout::{ChartLayout, compute_layout};
pub use model::{ColorRef, DataPoint, GraphConfig, GraphData, LegendPosition, Series, Variant};
pub use scene::{DrawCommand, LegendEntry, PathData, Scene, TextAnchor};
pub use theme::{ChartStyles, Palette, StyleCache, Theme};

use scene::Layer;
use synth::{SynthContext, Synthesize, Synthesizer};

/// Compute the scene for `data` drawn as `config` describes.
///
/// Pure: the same inputs always give an identical scene.
pub fn synthesize(config: &GraphConfig, data: impl Into<GraphData>) -> Scene {
    let series = normalize::normalize(data.into());
    synthesize_series(config, &series)
}

/// [`synthesize`] for input that is already a list of series.
pub fn synthesize_series(config: &GraphConfig, series: &[Series]) -> Scene {
    let styles = ChartStyles::for_config(config);
    synthesize_with_styles(config, series, &styles)
}

/// [`synthesize_series`] with styles the caller derived (or cached) itself.
pub fn synthesize_with_styles(config: &GraphConfig, series: &[Series], styles: &ChartStyles) -> Scene {
    if series.iter().all(|s| s.data.is_empty()) {
        log::warn!(variant = config.variant.name(), "no data to chart");
    }

    let layout = compute_layout(config, series);
    let ctx = SynthContext {
        config,
        series,
        layout: &layout,
        styles,
    };
    let mut layers = Synthesizer::for_variant(config.variant).synthesize(&ctx);

    let legend = legend::build_legend(config, series, styles);
    let strip = legend::legend_strip(&legend, config.legend_position, &layout, styles);
    layers.extend(Layer::Legend, strip.commands);

    log::debug!(
        variant = config.variant.name(),
        series = series.len(),
        commands = layers.len(),
        "synthesized scene"
    );

    Scene {
        width: layout.svg_w + strip.extra_width,
        height: layout.svg_h + strip.extra_height,
        background: styles.background.clone(),
        font_family: styles.font_family.clone(),
        commands: layers.into_commands(),
        legend,
        legend_position: config.legend_position,
        no_wrap: config.no_wrap,
    }
}

/// Decode a JSON config and JSON data (`DataPoint[]` or `Series[]`) and
/// synthesize their scene.
pub fn synthesize_json(config_json: &str, data_json: &str) -> Result<Scene, ChartError> {
    let config: GraphConfig =
        serde_json::from_str(config_json).map_err(|source| ChartError::InvalidConfig { source })?;
    let data: serde_json::Value =
        serde_json::from_str(data_json).map_err(|source| ChartError::InvalidData { source })?;
    let series = normalize::normalize_json(&data)?;
    Ok(synthesize_series(&config, &series))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn months() -> Vec<DataPoint> {
        vec![DataPoint::new("Jan", 42000.0), DataPoint::new("Feb", 38000.0)]
    }

    #[test]
    fn deterministic() {
        let config = GraphConfig::new(Variant::Area).with_smooth(true).with_values(true);
        let a = synthesize(&config, months());
        let b = synthesize(&config, months());
        assert_eq!(a, b);
        assert_eq!(svg::to_svg(&a).unwrap(), svg::to_svg(&b).unwrap());
    }

    #[test]
    fn legend_grows_the_canvas() {
        let bottom = synthesize(&GraphConfig::new(Variant::Bar).with_size(480.0, 260.0), months());
        assert_eq!((bottom.width, bottom.height), (480.0, 280.0));
        assert_eq!(bottom.legend.len(), 1);
        assert_eq!(bottom.legend[0].name, "Series 1");

        let none = synthesize(
            &GraphConfig::new(Variant::Bar)
                .with_size(480.0, 260.0)
                .with_legend(LegendPosition::None),
            months(),
        );
        assert_eq!((none.width, none.height), (480.0, 260.0));

        let pie = synthesize(&GraphConfig::new(Variant::Pie).with_size(480.0, 260.0), months());
        assert_eq!((pie.width, pie.height), (480.0, 260.0));
        assert!(pie.legend.is_empty());
    }

    #[test]
    fn no_wrap_is_forwarded() {
        let mut config = GraphConfig::default();
        assert!(synthesize(&config, months()).no_wrap);
        config.no_wrap = false;
        assert!(!synthesize(&config, months()).no_wrap);
    }

    #[test]
    fn json_entry_point() {
        let scene = synthesize_json(
            r#"{"variant":"donut","centerLabel":"80K"}"#,
            r#"[{"label":"Jan","value":42000},{"label":"Feb","value":38000}]"#,
        )
        .unwrap();
        assert_eq!(scene.count(|c| matches!(c, DrawCommand::Path { .. })), 2);

        let err = synthesize_json("{", "[]").unwrap_err();
        assert!(matches!(err, ChartError::InvalidConfig { .. }));
        let err = synthesize_json("{}", "42").unwrap_err();
        assert!(matches!(err, ChartError::DataNotArray { found: "a number" }));
    }

    #[test]
    fn huge_tick_count_is_clamped() {
        let scene = synthesize_json(
            r#"{"variant":"bar","yTickCount":18446744073709551615}"#,
            r#"[{"label":"a","value":1}]"#,
        )
        .unwrap();
        let is_tick_label = |c: &DrawCommand| matches!(c, DrawCommand::Text { anchor: TextAnchor::End, .. });
        assert_eq!(scene.count(is_tick_label), defaults::MAX_Y_TICKS);
    }

    #[test]
    fn cached_styles_match_fresh_ones() {
        let config = GraphConfig::new(Variant::Line);
        let series = normalize::normalize(months().into());
        let mut cache = StyleCache::new();
        let styles = cache.get_or_compute("doc-1", &Theme::default()).clone();
        assert_eq!(
            synthesize_with_styles(&config, &series, &styles),
            synthesize_series(&config, &series)
        );
    }
}
