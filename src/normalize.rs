//! Canonicalize chart input into a list of series.
//!
//! A bare list of points becomes one implicit series named `"Series 1"`.
//! The JSON entry point mirrors the typed one but is lenient about the
//! numbers it finds: anything missing or non-numeric reads as 0.

use serde_json::Value;

use crate::errors::{ChartError, json_kind};
use crate::model::{DataPoint, GraphData, Series};
use crate::types::finite_or_zero;

pub const IMPLICIT_SERIES_NAME: &str = "Series 1";

/// Normalize typed input. Non-finite values are replaced by 0.
pub fn normalize(data: GraphData) -> Vec<Series> {
    let mut series = match data {
        GraphData::Points(points) if points.is_empty() => Vec::new(),
        GraphData::Points(points) => vec![Series::new(IMPLICIT_SERIES_NAME, points)],
        GraphData::Series(series) => series,
    };
    for s in &mut series {
        for p in &mut s.data {
            p.value = finite_or_zero(p.value);
        }
    }
    series
}

/// Normalize JSON input: `[{label, value}, ...]` or `[{name, data}, ...]`.
///
/// The shape is decided by the first element alone: when it has both a
/// `label` and a `value` key the whole array is read as points.
pub fn normalize_json(data: &Value) -> Result<Vec<Series>, ChartError> {
    let items = match data {
        Value::Array(items) => items,
        other => {
            return Err(ChartError::DataNotArray {
                found: json_kind(other),
            });
        }
    };

    let Some(first) = items.first() else {
        return Ok(Vec::new());
    };

    let is_points = first
        .as_object()
        .is_some_and(|o| o.contains_key("label") && o.contains_key("value"));

    if is_points {
        let points = items.iter().map(point_from_json).collect();
        Ok(vec![Series::new(IMPLICIT_SERIES_NAME, points)])
    } else {
        Ok(items.iter().map(series_from_json).collect())
    }
}

fn point_from_json(v: &Value) -> DataPoint {
    DataPoint {
        label: string_field(v, "label"),
        value: number_field(v, "value"),
        color: color_field(v),
    }
}

fn series_from_json(v: &Value) -> Series {
    let data = v
        .get("data")
        .and_then(Value::as_array)
        .map(|points| points.iter().map(point_from_json).collect())
        .unwrap_or_default();
    Series {
        name: string_field(v, "name"),
        data,
        color: color_field(v),
    }
}

fn string_field(v: &Value, key: &str) -> String {
    match v.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

fn number_field(v: &Value, key: &str) -> f64 {
    let n = match v.get(key) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    };
    finite_or_zero(n)
}

fn color_field(v: &Value) -> Option<String> {
    v.get("color")
        .and_then(Value::as_str)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
}
