//! Number abbreviation and label truncation for axis and value text.

/// Round to one decimal, ties away from zero (`7.25` becomes `7.3`).
fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Abbreviate a number for display: `1500` → `"1.5K"`, `2_400_000` → `"2.4M"`,
/// `7` → `"7"`, `7.25` → `"7.3"`.
///
/// Non-finite input renders as `"0"`.
pub fn fmt_num(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let abs = v.abs();
    let s = if abs >= 1_000_000.0 {
        format!("{:.1}M", round1(v / 1_000_000.0))
    } else if abs >= 1_000.0 {
        format!("{:.1}K", round1(v / 1_000.0))
    } else if v.fract() != 0.0 {
        format!("{:.1}", round1(v))
    } else {
        format!("{}", v as i64)
    };
    // round1 can produce -0.0 for tiny negatives
    if s == "-0.0" { "0.0".to_string() } else { s }
}

/// Shorten `s` to at most `max_len` characters, marking the cut with `…`.
///
/// Counts characters, not bytes. A `max_len` of zero still yields the
/// ellipsis alone.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max_len.saturating_sub(1)).collect();
    out.push('…');
    out
}
