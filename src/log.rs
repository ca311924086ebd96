//! Crate-private logging macros.
//!
//! Synthesis logs one `debug!` line per scene (variant, series and command
//! counts) and a `warn!` for every degraded input: empty data, a zero pie
//! total, an unusable canvas size, extra series on a horizontal bar chart,
//! a clamped tick count.
//! Built with the `tracing` feature these are the `tracing` macros; without
//! it they expand to nothing and their arguments are never evaluated.

#[cfg(feature = "tracing")]
pub(crate) use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
macro_rules! noop_debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
macro_rules! noop_warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub(crate) use {noop_debug as debug, noop_warn as warn};

#[cfg(test)]
mod tests {
    #[test]
    fn macros_accept_fields_and_messages() {
        crate::log::warn!(count = 3, fallback = 1.5, "something degraded");
        crate::log::debug!(variant = "bar", "synthesized scene");
        super::warn!("bare message");
    }
}
