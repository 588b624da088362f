use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

/// Round a float to the nearest integer board unit, half-up.
///
/// Downstream containment and intersection tolerances are tuned against
/// half-up rounding; do not replace with `f64::round` (half-away) or
/// banker's rounding.
pub fn round_units(v: f64) -> i64 {
    (v + 0.5).floor() as i64
}

/// 2D point or direction in integer board units (nanometers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: i64,
    pub y: i64,
}

impl Vec2 {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Rotated 90 degrees counterclockwise, length preserved.
    pub fn perpendicular(self) -> Self {
        Self::new(-self.y, self.x)
    }

    pub fn length(self) -> f64 {
        (self.x as f64).hypot(self.y as f64)
    }

    /// Scaled to the given length, preserving direction.
    ///
    /// The zero vector has no direction; callers must guard against it
    /// (zero-length tracks never reach this code).
    pub fn resize(self, length: f64) -> Self {
        let norm = self.length();
        let scale = length / norm;
        Self::new(
            round_units(self.x as f64 * scale),
            round_units(self.y as f64 * scale),
        )
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<i64> for Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: i64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

/// Ordered pair of points. Several operations below deliberately treat it
/// as the infinite line through `a` and `b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub a: Vec2,
    pub b: Vec2,
}

impl Segment {
    pub const fn new(a: Vec2, b: Vec2) -> Self {
        Self { a, b }
    }

    pub fn direction(&self) -> Vec2 {
        self.b - self.a
    }

    /// Orthogonal projection of `p` onto the infinite line through the
    /// segment. Not clamped to the endpoints: tangent points are allowed
    /// to fall outside the literal track segment.
    pub fn nearest_point(&self, p: Vec2) -> Vec2 {
        let d = self.direction();
        let dx = d.x as f64;
        let dy = d.y as f64;
        let t = ((p.x - self.a.x) as f64 * dx + (p.y - self.a.y) as f64 * dy)
            / (dx * dx + dy * dy);
        Vec2::new(
            round_units(self.a.x as f64 + dx * t),
            round_units(self.a.y as f64 + dy * t),
        )
    }

    /// Perpendicular distance from `p` to the infinite line through the
    /// segment.
    pub fn line_distance(&self, p: Vec2) -> f64 {
        let d = self.direction();
        let cross = d.x as f64 * (p.y - self.a.y) as f64
            - d.y as f64 * (p.x - self.a.x) as f64;
        cross.abs() / d.length()
    }

    /// Segment with the same direction, translated so its line passes
    /// through `p`.
    pub fn parallel_through(&self, p: Vec2) -> Segment {
        Segment::new(p, p + self.direction())
    }
}
