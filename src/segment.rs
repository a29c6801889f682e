// Copyright 2026 the Dubins Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The three segment shapes and pose propagation along them.

use core::fmt;

use crate::{Pose, Vec2};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// The shape of one segment of a path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SegmentType {
    /// A counter-clockwise arc at the minimum turning radius.
    Left,
    /// A straight line.
    Straight,
    /// A clockwise arc at the minimum turning radius.
    Right,
}

impl SegmentType {
    /// Signed curvature for a unit turning radius: `1` left, `0` straight, `-1` right.
    #[inline]
    pub const fn curvature(self) -> f64 {
        match self {
            SegmentType::Left => 1.0,
            SegmentType::Straight => 0.0,
            SegmentType::Right => -1.0,
        }
    }

    /// Is this segment a circular arc?
    #[inline]
    pub const fn is_arc(self) -> bool {
        !matches!(self, SegmentType::Straight)
    }

    /// The single-letter name of this segment: `L`, `S` or `R`.
    pub const fn letter(self) -> char {
        match self {
            SegmentType::Left => 'L',
            SegmentType::Straight => 'S',
            SegmentType::Right => 'R',
        }
    }
}

impl fmt::Display for SegmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Advance `pose` by `param` along one segment of unit turning radius.
///
/// `param` is the normalized length of travel: the swept angle in radians for
/// an arc, the distance for a straight line. Arcs turn about a center one unit
/// to the left (for [`SegmentType::Left`]) or right of the heading.
///
/// The returned heading is not wrapped; callers wrap once at the end so that
/// chained segments lose no precision.
///
/// ```
/// use dubins::{propagate, Pose, SegmentType};
/// use std::f64::consts::PI;
///
/// // Half a left turn from the origin, facing +x, ends at (0, 2) facing -x.
/// let q = propagate(Pose::new(0.0, 0.0, 0.0), PI, SegmentType::Left);
/// assert!(q.x.abs() < 1e-12 && (q.y - 2.0).abs() < 1e-12);
/// assert!((q.heading - PI).abs() < 1e-12);
/// ```
pub fn propagate(pose: Pose, param: f64, segment: SegmentType) -> Pose {
    let h = pose.heading;
    let (sin_h, cos_h) = h.sin_cos();
    match segment {
        SegmentType::Left => {
            let (sin_end, cos_end) = (h + param).sin_cos();
            pose_offset(pose, Vec2::new(sin_end - sin_h, cos_h - cos_end), param)
        }
        SegmentType::Right => {
            let (sin_end, cos_end) = (h - param).sin_cos();
            pose_offset(pose, Vec2::new(sin_h - sin_end, cos_end - cos_h), -param)
        }
        SegmentType::Straight => pose_offset(pose, Vec2::new(cos_h, sin_h) * param, 0.0),
    }
}

#[inline]
fn pose_offset(pose: Pose, displacement: Vec2, turn: f64) -> Pose {
    Pose::from_point(pose.position() + displacement, pose.heading + turn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::{FRAC_PI_2, PI, TAU};

    fn assert_pose_near(q0: Pose, q1: Pose) {
        assert!(
            q0.position().distance(q1.position()) < 1e-9 && (q0.heading - q1.heading).abs() < 1e-9,
            "{q0:?} != {q1:?}"
        );
    }

    #[test]
    fn straight() {
        let q = propagate(Pose::new(1.0, 1.0, FRAC_PI_2), 3.0, SegmentType::Straight);
        assert_pose_near(q, Pose::new(1.0, 4.0, FRAC_PI_2));
    }

    #[test]
    fn quarter_turns() {
        let start = Pose::new(0.0, 0.0, 0.0);
        assert_pose_near(
            propagate(start, FRAC_PI_2, SegmentType::Left),
            Pose::new(1.0, 1.0, FRAC_PI_2),
        );
        assert_pose_near(
            propagate(start, FRAC_PI_2, SegmentType::Right),
            Pose::new(1.0, -1.0, -FRAC_PI_2),
        );
    }

    #[test]
    fn full_circle_returns_home() {
        let start = Pose::new(3.0, -2.0, 0.7);
        for segment in [SegmentType::Left, SegmentType::Right] {
            let q = propagate(start, TAU, segment);
            assert!(q.position().distance(start.position()) < 1e-9, "{segment:?}");
        }
    }

    #[test]
    fn arc_stays_on_circle() {
        let start = Pose::new(0.5, 0.25, 1.1);
        // Left turns circle the point one unit to the left of the heading.
        let center = start.position() + start.direction().rotate(FRAC_PI_2);
        for i in 0..16 {
            let q = propagate(start, f64::from(i) * 0.4, SegmentType::Left);
            assert!((q.position().distance(center) - 1.0).abs() < 1e-9);
        }
        let center = start.position() + start.direction().rotate(-FRAC_PI_2);
        for i in 0..16 {
            let q = propagate(start, f64::from(i) * 0.4, SegmentType::Right);
            assert!((q.position().distance(center) - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn zero_param_is_identity() {
        let start = Pose::new(-4.0, 7.5, PI / 3.0);
        for segment in [SegmentType::Left, SegmentType::Straight, SegmentType::Right] {
            assert_pose_near(propagate(start, 0.0, segment), start);
        }
    }

    #[test]
    fn curvature_and_letters() {
        assert_eq!(SegmentType::Left.curvature(), 1.0);
        assert_eq!(SegmentType::Right.curvature(), -1.0);
        assert!(!SegmentType::Straight.is_arc());
        assert_eq!(format!("{}", SegmentType::Straight), "S");
    }
}
