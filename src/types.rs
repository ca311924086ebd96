//! Small typed numeric primitives for chart geometry.
//!
//! Points are `glam::DVec2` in canvas points, y growing downward. Angles and
//! value domains get newtypes so a degree never meets a radian by accident and
//! a zero-width domain cannot divide by zero.

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Sub};

use glam::{DVec2, dvec2};

/// A position on the canvas, in points, y down
pub type Point = DVec2;

/// Replace NaN and infinities with zero
#[inline]
pub fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}

/// Angle in degrees, clockwise from 12 o'clock.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Degrees(pub f64);

impl Degrees {
    pub const ZERO: Degrees = Degrees(0.0);

    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    /// Radians in the standard math convention, where 0 degrees maps to -90.
    #[inline]
    pub fn to_math_radians(self) -> f64 {
        (self.0 - 90.0).to_radians()
    }

    #[inline]
    pub fn min(self, other: Degrees) -> Degrees {
        Degrees(self.0.min(other.0))
    }
}

impl Add for Degrees {
    type Output = Degrees;
    fn add(self, rhs: Degrees) -> Degrees {
        Degrees(self.0 + rhs.0)
    }
}

impl Sub for Degrees {
    type Output = Degrees;
    fn sub(self, rhs: Degrees) -> Degrees {
        Degrees(self.0 - rhs.0)
    }
}

impl Mul<f64> for Degrees {
    type Output = Degrees;
    fn mul(self, rhs: f64) -> Degrees {
        Degrees(self.0 * rhs)
    }
}

impl Div<f64> for Degrees {
    type Output = Degrees;
    fn div(self, rhs: f64) -> Degrees {
        Degrees(self.0 / rhs)
    }
}

impl AddAssign for Degrees {
    fn add_assign(&mut self, rhs: Degrees) {
        self.0 += rhs.0;
    }
}

impl fmt::Display for Degrees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

/// Axis-aligned rectangle on the canvas
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Frame {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    #[inline]
    pub fn center(&self) -> Point {
        dvec2(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}

/// Closed value range mapped onto one chart axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Domain {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Width of the range, `None` when it is empty or not finite.
    #[inline]
    pub fn checked_span(&self) -> Option<f64> {
        let span = self.max - self.min;
        if span.is_finite() && span > 0.0 { Some(span) } else { None }
    }

    /// Position of `v` inside the range as a 0..1 fraction (unclamped).
    /// Degenerate ranges map everything to 0.
    #[inline]
    pub fn fraction(&self, v: f64) -> f64 {
        match self.checked_span() {
            Some(span) => (finite_or_zero(v) - self.min) / span,
            None => 0.0,
        }
    }

    #[inline]
    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && v <= self.max
    }
}
