//! Planar vector utilities
//!
//! This module provides a minimal 2-D vector used for epicycle centres,
//! arm endpoints and the chain tip. Coordinates are in world units (the
//! same units as the harmonic radii); mapping to pixels is left to the
//! renderer.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Sub};

/// A point or displacement in world space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ORIGIN: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `radius` along the direction `angle` (radians).
    #[inline]
    pub fn from_polar(radius: f64, angle: f64) -> Self {
        Self {
            x: radius * angle.cos(),
            y: radius * angle.sin(),
        }
    }

    #[inline]
    pub fn mag(&self) -> f64 {
        self.mag_sq().sqrt()
    }
    #[inline]
    pub fn mag_sq(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }
    #[inline]
    pub fn scale(&self, f: f64) -> Self {
        Self {
            x: self.x * f,
            y: self.y * f,
        }
    }
    #[inline]
    pub fn distance(&self, other: Vec2) -> f64 {
        (*self - other).mag()
    }
}

impl Add for Vec2 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl From<(f64, f64)> for Vec2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_polar_quarter_turn() {
        let v = Vec2::from_polar(2.0, std::f64::consts::FRAC_PI_2);
        assert!(v.x.abs() < 1e-12);
        assert!((v.y - 2.0).abs() < 1e-12);
    }

    #[test]
    fn add_and_sub_are_inverse() {
        let a = Vec2::new(1.5, -2.0);
        let b = Vec2::new(0.25, 4.0);
        let back = (a + b) - b;
        assert_eq!(back, a);
        assert!((Vec2::new(3.0, 4.0).mag() - 5.0).abs() < 1e-12);
    }
}
