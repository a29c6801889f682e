// Copyright 2026 the Dubins Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A transformation that includes both scale and translation.

use core::ops::Mul;

use crate::{Point, Pose, Vec2};

/// A transformation including uniform scaling and translation.
///
/// If the translation is `(x, y)` and the scale is `s`, then this
/// transformation represents this augmented matrix:
///
/// ```text
/// | s 0 x |
/// | 0 s y |
/// | 0 0 1 |
/// ```
///
/// Path geometry is computed for a unit turning radius at the origin; this
/// is the transform that carries it back out to the caller's radius and start
/// position. Headings are invariant under it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TranslateScale {
    translation: Vec2,
    scale: f64,
}

impl TranslateScale {
    /// Create a new transformation from translation and scale.
    #[inline]
    pub const fn new(translation: Vec2, scale: f64) -> TranslateScale {
        TranslateScale { translation, scale }
    }

    /// Create a new transformation with scale only.
    #[inline]
    pub const fn scale(s: f64) -> TranslateScale {
        TranslateScale::new(Vec2::ZERO, s)
    }

    /// Create a new transformation with translation only.
    #[inline]
    pub const fn translate(t: Vec2) -> TranslateScale {
        TranslateScale::new(t, 1.0)
    }

    /// The translation applied after scaling.
    #[inline]
    pub fn translation(self) -> Vec2 {
        self.translation
    }

    /// The uniform scale factor.
    #[inline]
    pub fn scale_factor(self) -> f64 {
        self.scale
    }
}

impl Default for TranslateScale {
    #[inline]
    fn default() -> TranslateScale {
        TranslateScale::scale(1.0)
    }
}

impl Mul<Point> for TranslateScale {
    type Output = Point;

    #[inline]
    fn mul(self, other: Point) -> Point {
        (self.scale * other.to_vec2()).to_point() + self.translation
    }
}

/// Scales and translates the position; the heading is unchanged.
impl Mul<Pose> for TranslateScale {
    type Output = Pose;

    #[inline]
    fn mul(self, other: Pose) -> Pose {
        Pose::from_point(self * other.position(), other.heading)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Point, Pose, TranslateScale, Vec2};

    fn assert_near(p0: Point, p1: Point) {
        assert!((p1 - p0).hypot() < 1e-9, "{p0:?} != {p1:?}");
    }

    #[test]
    fn translate_scale() {
        let p = Point::new(3.0, 4.0);
        let ts = TranslateScale::new(Vec2::new(5.0, 6.0), 2.0);

        assert_near(ts * p, Point::new(11.0, 14.0));
    }

    #[test]
    fn constructors() {
        let ts = TranslateScale::scale(2.0);
        assert_eq!(ts.translation(), Vec2::ZERO);
        assert_eq!(ts.scale_factor(), 2.0);
        let ts = TranslateScale::translate(Vec2::new(1.0, -1.0));
        assert_near(ts * Point::new(1.0, 1.0), Point::new(2.0, 0.0));
        assert_eq!(TranslateScale::default().scale_factor(), 1.0);
    }

    #[test]
    fn pose_heading_untouched() {
        let ts = TranslateScale::new(Vec2::new(-1.0, 1.0), 3.0);
        let q = ts * Pose::new(1.0, 1.0, 2.5);
        assert_near(q.position(), Point::new(2.0, 4.0));
        assert_eq!(q.heading, 2.5);
    }
}
