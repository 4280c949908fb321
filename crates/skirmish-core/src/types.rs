//! Fundamental geometric and simulation types.

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// 2D point or direction in simulation space.
/// x = right, y = down (screen convention), so a positive rotation turns clockwise on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

/// Stable identifier of a unit. Never reused within one engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UnitId(pub u32);

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Vector2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const X: Self = Self::new(1.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Scalar 2D cross product. Positive when `other` lies clockwise of `self` on screen.
    pub fn cross(self, other: Self) -> f64 {
        self.x * other.y - other.x * self.y
    }

    pub fn length(self) -> f64 {
        DVec2::from(self).length()
    }

    pub fn length_squared(self) -> f64 {
        self.dot(self)
    }

    pub fn distance(self, other: Self) -> f64 {
        (other - self).length()
    }

    pub fn distance_squared(self, other: Self) -> f64 {
        (other - self).length_squared()
    }

    /// Unit vector in the same direction, or `None` for zero-length and non-finite input.
    pub fn try_normalize(self) -> Option<Self> {
        DVec2::from(self).try_normalize().map(Self::from)
    }

    pub fn normalize_or_zero(self) -> Self {
        self.try_normalize().unwrap_or(Self::ZERO)
    }

    /// Rescale to `length`. A zero vector has no direction and is returned unchanged.
    pub fn to_length(self, length: f64) -> Self {
        match self.try_normalize() {
            Some(unit) => unit * length,
            None => self,
        }
    }

    /// Unsigned angle to `other` in [0, π]. Zero when either vector has no direction.
    pub fn angle_between(self, other: Self) -> f64 {
        match (self.try_normalize(), other.try_normalize()) {
            (Some(a), Some(b)) => a.dot(b).clamp(-1.0, 1.0).acos(),
            _ => 0.0,
        }
    }

    /// Rotate by `angle` radians about the origin.
    pub fn rotated(self, angle: f64) -> Self {
        DVec2::from_angle(angle).rotate(self.into()).into()
    }

    /// Rotate by `angle` radians about `pivot`.
    pub fn rotated_about(self, angle: f64, pivot: Self) -> Self {
        (self - pivot).rotated(angle) + pivot
    }

    /// The vector turned a quarter turn counter-clockwise on screen: `(y, -x)`.
    pub fn perpendicular(self) -> Self {
        Self::new(self.y, -self.x)
    }

    /// Snap to the heading of `other`. Ignored when `other` has no direction.
    pub fn align_with(&mut self, other: Self) {
        if let Some(heading) = other.try_normalize() {
            *self = heading;
        }
    }

    /// Turn toward the heading of `target` by at most `max_delta` radians.
    ///
    /// `clockwise` picks the rotation sense (on screen); callers derive it from
    /// the sign of `self.cross(target)`. When the remaining angle is within
    /// `max_delta` the heading snaps onto `target` instead of overshooting.
    pub fn lerp_align_fixed(&mut self, max_delta: f64, clockwise: bool, target: Self) {
        if self.angle_between(target) <= max_delta {
            self.align_with(target);
            return;
        }
        let step = if clockwise { max_delta } else { -max_delta };
        *self = self.rotated(step);
    }

    /// Squared distance from `point` to the closest point of segment `start..end`.
    pub fn segment_distance_squared(start: Self, end: Self, point: Self) -> f64 {
        let segment = end - start;
        let len_sq = segment.length_squared();
        if len_sq <= f64::EPSILON {
            return point.distance_squared(start);
        }
        let t = ((point - start).dot(segment) / len_sq).clamp(0.0, 1.0);
        point.distance_squared(start + segment * t)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<DVec2> for Vector2 {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2> for DVec2 {
    fn from(v: Vector2) -> Self {
        DVec2::new(v.x, v.y)
    }
}

impl From<(f64, f64)> for Vector2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl Add for Vector2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vector2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vector2 {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<f64> for Vector2 {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl MulAssign<f64> for Vector2 {
    fn mul_assign(&mut self, rhs: f64) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl Div<f64> for Vector2 {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Vector2 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unit#{}", self.0)
    }
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}
