//! Fixed-point geometry primitives.
//!
//! Positions are stored as integer nanometers and angles as integer
//! millidegrees, so translation and quarter-turn rotation are exact and
//! undoing a command restores the document bit-for-bit. The editing engine
//! only ever rotates by multiples of 90°; arbitrary angles round through f64.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A point (or displacement vector) in nanometers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Construct from millimeters (1 mm = 1_000_000 nm).
    pub const fn from_mm(x: i64, y: i64) -> Self {
        Self {
            x: x * 1_000_000,
            y: y * 1_000_000,
        }
    }

    pub const fn translated(self, delta: Point) -> Self {
        Self {
            x: self.x + delta.x,
            y: self.y + delta.y,
        }
    }

    /// Rotate counter-clockwise around `center`.
    ///
    /// Multiples of 90° use exact integer arithmetic; any other angle falls
    /// back to f64 and rounds to the nearest nanometer.
    pub fn rotated(self, angle: Angle, center: Point) -> Self {
        let rel = self - center;
        match angle.quarter_turns() {
            Some(turns) => {
                let mut p = rel;
                for _ in 0..turns {
                    // one exact 90° ccw turn: (x, y) -> (-y, x)
                    p = Point { x: -p.y, y: p.x };
                }
                center + p
            }
            None => {
                let rad = angle.to_degrees() * std::f64::consts::PI / 180.0;
                let (sin, cos) = rad.sin_cos();
                let x = (rel.x as f64) * cos - (rel.y as f64) * sin;
                let y = (rel.x as f64) * sin + (rel.y as f64) * cos;
                center
                    + Point {
                        x: x.round() as i64,
                        y: y.round() as i64,
                    }
            }
        }
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        self.translated(rhs)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        *self = *self + rhs;
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Point) {
        *self = *self - rhs;
    }
}

impl Neg for Point {
    type Output = Point;
    fn neg(self) -> Point {
        Point {
            x: -self.x,
            y: -self.y,
        }
    }
}

/// A rotation angle in millidegrees, counter-clockwise positive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Angle(pub i32);

impl Angle {
    pub const ZERO: Angle = Angle(0);

    pub const fn deg90() -> Angle {
        Angle(90_000)
    }

    pub const fn deg180() -> Angle {
        Angle(180_000)
    }

    pub const fn deg270() -> Angle {
        Angle(270_000)
    }

    pub const fn from_millideg(mdeg: i32) -> Angle {
        Angle(mdeg)
    }

    pub const fn millideg(self) -> i32 {
        self.0
    }

    pub fn to_degrees(self) -> f64 {
        self.0 as f64 / 1000.0
    }

    /// Normalize into `[0°, 360°)`.
    pub const fn normalized(self) -> Angle {
        Angle(self.0.rem_euclid(360_000))
    }

    /// Number of exact ccw quarter turns, if this angle is a multiple of 90°.
    pub const fn quarter_turns(self) -> Option<u32> {
        let n = self.0.rem_euclid(360_000);
        if n % 90_000 == 0 {
            Some((n / 90_000) as u32)
        } else {
            None
        }
    }
}

impl Add for Angle {
    type Output = Angle;
    // raw accumulation: adding an angle and then its negation must restore
    // the original value exactly, whatever range it was in
    fn add(self, rhs: Angle) -> Angle {
        Angle(self.0.wrapping_add(rhs.0))
    }
}

impl Neg for Angle {
    type Output = Angle;
    fn neg(self) -> Angle {
        Angle(-self.0)
    }
}

/// A scalar length in nanometers (pin lengths, line widths, text heights).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Length(pub i64);

impl Length {
    pub const fn nm(value: i64) -> Length {
        Length(value)
    }

    pub const fn from_mm(value: i64) -> Length {
        Length(value * 1_000_000)
    }

    pub const fn get(self) -> i64 {
        self.0
    }
}
