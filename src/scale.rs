//! Value domain and tick computation for the y axis.

use crate::defaults;
use crate::model::Series;
use crate::types::Domain;

/// Domain covering every value plus headroom above the top.
///
/// The floor is 0 unless some value is negative; the raw top is at least 1 so
/// empty or all-zero data still gets a usable range.
pub fn compute_domain(series: &[Series]) -> Domain {
    let values = series.iter().flat_map(|s| s.data.iter().map(|p| p.value));
    let (raw_min, raw_max) = values.fold((0.0_f64, 1.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));

    let y_min = if raw_min >= 0.0 { 0.0 } else { raw_min };
    let y_max = raw_max + (raw_max - y_min) * defaults::HEADROOM;
    Domain::new(y_min, y_max)
}

/// `count` evenly spaced ticks over `[min, max]`, rounded to 2 decimals.
///
/// `count` is capped at [`defaults::MAX_Y_TICKS`].
pub fn compute_ticks(min: f64, max: f64, count: usize) -> Vec<f64> {
    if count > defaults::MAX_Y_TICKS {
        crate::log::warn!(requested = count, max = defaults::MAX_Y_TICKS, "tick count clamped");
    }
    let count = count.min(defaults::MAX_Y_TICKS);
    if min == max {
        return vec![0.0, if max != 0.0 { max } else { 1.0 }];
    }
    if count <= 1 {
        return vec![min, max];
    }
    let step = (max - min) / (count - 1) as f64;
    (0..count)
        .map(|i| round2(min + step * i as f64))
        .collect()
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
