// Copyright 2026 the Dubins Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An oriented position in the plane.

use core::fmt;
use core::ops::Add;

use crate::common::normalize_angle;
use crate::{Point, Vec2};

/// A planar configuration: position plus heading.
///
/// The heading is in radians, measured counter-clockwise from the positive
/// x axis. Any value is accepted at rest; the path engine wraps headings
/// into `[0, 2π)` whenever it computes with them, and every pose it returns
/// is wrapped that way.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pose {
    /// The x coordinate.
    pub x: f64,
    /// The y coordinate.
    pub y: f64,
    /// The heading, in radians.
    pub heading: f64,
}

impl Pose {
    /// Create a new pose.
    #[inline(always)]
    pub const fn new(x: f64, y: f64, heading: f64) -> Pose {
        Pose { x, y, heading }
    }

    /// Create a pose at `position` facing `heading`.
    #[inline]
    pub fn from_point(position: impl Into<Point>, heading: f64) -> Pose {
        let Point { x, y } = position.into();
        Pose { x, y, heading }
    }

    /// The position of this pose.
    #[inline(always)]
    pub const fn position(self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Unit vector pointing along the heading.
    #[inline]
    pub fn direction(self) -> Vec2 {
        Vec2::from_angle(self.heading)
    }

    /// The same pose with its heading wrapped into `[0, 2π)`.
    #[must_use]
    #[inline]
    pub fn normalized(self) -> Pose {
        Pose::new(self.x, self.y, normalize_angle(self.heading))
    }

    /// Rotate this pose counter-clockwise by `angle` radians about `center`.
    ///
    /// Both the position and the heading turn by `angle`, so the result is
    /// the same configuration seen from a rotated frame.
    #[must_use]
    pub fn rotate_about(self, center: Point, angle: f64) -> Pose {
        let offset = (self.position() - center).rotate(angle);
        Pose::from_point(center + offset, self.heading + angle)
    }
}

impl From<(f64, f64, f64)> for Pose {
    #[inline(always)]
    fn from((x, y, heading): (f64, f64, f64)) -> Pose {
        Pose { x, y, heading }
    }
}

impl From<[f64; 3]> for Pose {
    #[inline(always)]
    fn from([x, y, heading]: [f64; 3]) -> Pose {
        Pose { x, y, heading }
    }
}

impl From<Pose> for [f64; 3] {
    #[inline(always)]
    fn from(q: Pose) -> [f64; 3] {
        [q.x, q.y, q.heading]
    }
}

/// Translate the position, keeping the heading.
impl Add<Vec2> for Pose {
    type Output = Pose;

    #[inline]
    fn add(self, other: Vec2) -> Pose {
        Pose::from_point(self.position() + other, self.heading)
    }
}

impl fmt::Display for Pose {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "(")?;
        fmt::Display::fmt(&self.x, formatter)?;
        write!(formatter, ", ")?;
        fmt::Display::fmt(&self.y, formatter)?;
        write!(formatter, "; ")?;
        fmt::Display::fmt(&self.heading, formatter)?;
        write!(formatter, " rad)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::{FRAC_PI_2, PI, TAU};

    #[test]
    fn normalized_heading() {
        let q = Pose::new(1.0, 2.0, -FRAC_PI_2).normalized();
        assert_eq!(q.position(), Point::new(1.0, 2.0));
        assert!((q.heading - 1.5 * PI).abs() < 1e-12);
        assert_eq!(Pose::new(0.0, 0.0, TAU).normalized().heading, 0.0);
    }

    #[test]
    fn rotate_about_center() {
        let q = Pose::new(2.0, 1.0, 0.0).rotate_about(Point::new(1.0, 1.0), FRAC_PI_2);
        assert!(q.position().distance(Point::new(1.0, 2.0)) < 1e-12, "{q:?}");
        assert!((q.heading - FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn conversions() {
        let q: Pose = [1.0, 2.0, 3.0].into();
        assert_eq!(q, Pose::from((1.0, 2.0, 3.0)));
        let arr: [f64; 3] = q.into();
        assert_eq!(arr, [1.0, 2.0, 3.0]);
        assert_eq!(q + Vec2::new(1.0, -1.0), Pose::new(2.0, 1.0, 3.0));
    }

    #[test]
    fn display() {
        let q = Pose::new(0.5, -1.25, 2.0);
        assert_eq!(format!("{q:.2}"), "(0.50, -1.25; 2.00 rad)");
    }
}
