#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use crate::config::FieldConfig;

/// A point in viewport pixel space (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The point `dist` pixels away from `self` in direction `deg`.
    ///
    /// Angles follow screen convention: 0° points right, -90° points up.
    #[must_use]
    pub fn polar(self, deg: f64, dist: f64) -> Self {
        let rad = deg.to_radians();
        Self {
            x: self.x + rad.cos() * dist,
            y: self.y + rad.sin() * dist,
        }
    }

    /// Linear interpolation from `self` toward `other`.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }

    #[must_use]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }

    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// Drawing surface size in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { width: 0.0, height: 0.0 }
    }
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Size the field for a container of `container_width` CSS pixels.
    ///
    /// Width is capped at `max_width`; height follows the width by
    /// `height_ratio` and is capped at `max_height`. Non-finite or negative
    /// input collapses to zero.
    #[must_use]
    pub fn fit(container_width: f64, config: &FieldConfig) -> Self {
        let width = sanitize(container_width).min(config.max_width);
        let height = (width * config.height_ratio).min(config.max_height);
        Self { width, height: sanitize(height) }
    }

    /// The smaller side, never negative.
    #[must_use]
    pub fn min_side(&self) -> f64 {
        sanitize(self.width).min(sanitize(self.height))
    }

    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.min_side() <= 0.0
    }
}

/// Map NaN, infinities and negatives to zero.
#[must_use]
pub fn sanitize(v: f64) -> f64 {
    if v.is_finite() { v.max(0.0) } else { 0.0 }
}
