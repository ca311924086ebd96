//! Error types with diagnostics using miette
//!
//! Geometry never fails: malformed numbers degrade to visual fallbacks. The
//! fallible surfaces are decoding caller-supplied JSON and encoding output.

use miette::Diagnostic;
use thiserror::Error;

/// Errors raised while decoding chart input or encoding a scene
#[derive(Error, Diagnostic, Debug)]
pub enum ChartError {
    #[error("invalid graph config JSON")]
    #[diagnostic(
        code(chartscene::decode::config),
        help("the config is an object such as {{\"variant\": \"bar\", \"width\": 480}}")
    )]
    InvalidConfig {
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid chart data JSON")]
    #[diagnostic(code(chartscene::decode::data))]
    InvalidData {
        #[source]
        source: serde_json::Error,
    },

    #[error("chart data must be an array, got {found}")]
    #[diagnostic(
        code(chartscene::decode::data_not_array),
        help("pass either [{{\"label\", \"value\"}}, ...] or [{{\"name\", \"data\": [...]}}, ...]")
    )]
    DataNotArray { found: &'static str },

    #[error("failed to encode scene")]
    #[diagnostic(code(chartscene::encode::scene))]
    Encode {
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize SVG: {message}")]
    #[diagnostic(code(chartscene::encode::svg))]
    Svg { message: String },
}

/// Name of a JSON value's kind, for error messages
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
