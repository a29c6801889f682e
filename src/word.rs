// Copyright 2026 the Dubins Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The six path words and their closed-form solutions.
//!
//! Every word is solved in a normalized frame: the start and goal positions
//! lie on the x axis, a distance `d` apart (in units of the turning radius),
//! and the headings are given relative to that axis as `alpha` and `beta`.
//! Those three numbers fully determine the shape of the path; translation,
//! rotation and scale are put back by the caller.

use core::f64::consts::TAU;
use core::fmt;

use crate::common::{normalize_angle, FEASIBILITY_EPSILON};
use crate::{DubinsError, Pose, SegmentType};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// Normalized lengths of the three segments of a path, in path order.
pub type SegmentParams = [f64; 3];

/// One of the six canonical segment sequences.
///
/// The shortest path between any two poses is always one of these words
/// (with some segments possibly of zero length).
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathType {
    /// Left, straight, left.
    LSL,
    /// Left, straight, right.
    LSR,
    /// Right, straight, left.
    RSL,
    /// Right, straight, right.
    RSR,
    /// Right, left, right.
    RLR,
    /// Left, right, left.
    LRL,
}

const SEGMENT_TYPES: [[SegmentType; 3]; 6] = {
    use SegmentType::{Left as L, Right as R, Straight as S};
    [
        [L, S, L],
        [L, S, R],
        [R, S, L],
        [R, S, R],
        [R, L, R],
        [L, R, L],
    ]
};

impl PathType {
    /// All six words, in the order synthesis tries them.
    ///
    /// When two words tie on length, the one earlier in this list wins.
    pub const ALL: [PathType; 6] = [
        PathType::LSL,
        PathType::LSR,
        PathType::RSL,
        PathType::RSR,
        PathType::RLR,
        PathType::LRL,
    ];

    /// The curve-straight-curve words.
    pub const CSC: [PathType; 4] = [PathType::LSL, PathType::LSR, PathType::RSL, PathType::RSR];

    /// The curve-curve-curve words.
    pub const CCC: [PathType; 2] = [PathType::RLR, PathType::LRL];

    /// The segment shapes of this word, in path order.
    #[inline]
    pub const fn segment_types(self) -> [SegmentType; 3] {
        SEGMENT_TYPES[self as usize]
    }

    /// Is this a curve-straight-curve word?
    #[inline]
    pub const fn is_csc(self) -> bool {
        matches!(
            self,
            PathType::LSL | PathType::LSR | PathType::RSL | PathType::RSR
        )
    }

    /// Is this a curve-curve-curve word?
    #[inline]
    pub const fn is_ccc(self) -> bool {
        !self.is_csc()
    }

    /// The name of this word, for example `"LSR"`.
    pub const fn name(self) -> &'static str {
        match self {
            PathType::LSL => "LSL",
            PathType::LSR => "LSR",
            PathType::RSL => "RSL",
            PathType::RSR => "RSR",
            PathType::RLR => "RLR",
            PathType::LRL => "LRL",
        }
    }

    /// Solve this word for a normalized boundary.
    ///
    /// Returns the normalized segment lengths `[t, p, q]`, or `None` when no
    /// path of this shape connects the boundary poses.
    ///
    /// For the curve-straight-curve words all three lengths are non-negative;
    /// for the curve-curve-curve words the middle arc lies in `[0, 2π)`.
    ///
    /// ```
    /// use dubins::{NormalizedBoundary, PathType};
    ///
    /// // Four radii apart, both facing along the line: drive straight.
    /// let boundary = NormalizedBoundary::new(0.0, 0.0, 4.0);
    /// assert_eq!(PathType::LSL.solve(&boundary), Some([0.0, 4.0, 0.0]));
    /// ```
    pub fn solve(self, boundary: &NormalizedBoundary) -> Option<SegmentParams> {
        match self {
            PathType::LSL => lsl(boundary),
            PathType::LSR => lsr(boundary),
            PathType::RSL => rsl(boundary),
            PathType::RSR => rsr(boundary),
            PathType::RLR => rlr(boundary),
            PathType::LRL => lrl(boundary),
        }
    }
}

impl fmt::Display for PathType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A start/goal pair reduced to the three numbers that determine path shape.
///
/// `alpha` and `beta` are the start and goal headings measured from the line
/// joining the two positions, wrapped into `[0, 2π)`. `d` is the distance
/// between the positions divided by the turning radius.
///
/// The sines and cosines every solver needs are computed once here.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormalizedBoundary {
    alpha: f64,
    beta: f64,
    d: f64,
    sa: f64,
    sb: f64,
    ca: f64,
    cb: f64,
    c_ab: f64,
}

impl NormalizedBoundary {
    /// Create a boundary from relative headings and normalized distance.
    ///
    /// The headings are wrapped into `[0, 2π)`.
    pub fn new(alpha: f64, beta: f64, d: f64) -> NormalizedBoundary {
        let alpha = normalize_angle(alpha);
        let beta = normalize_angle(beta);
        let (sa, ca) = alpha.sin_cos();
        let (sb, cb) = beta.sin_cos();
        NormalizedBoundary {
            alpha,
            beta,
            d,
            sa,
            sb,
            ca,
            cb,
            c_ab: (alpha - beta).cos(),
        }
    }

    /// Reduce a pair of poses and a turning radius to normalized form.
    ///
    /// # Errors
    ///
    /// Returns [`DubinsError::InvalidRadius`] unless `turning_radius` is
    /// strictly positive and finite.
    pub fn from_poses(
        start: Pose,
        goal: Pose,
        turning_radius: f64,
    ) -> Result<NormalizedBoundary, DubinsError> {
        if !is_valid_radius(turning_radius) {
            return Err(DubinsError::InvalidRadius);
        }
        let delta = goal.position() - start.position();
        let d = delta.hypot() / turning_radius;
        let theta = normalize_angle(delta.atan2());
        Ok(NormalizedBoundary::new(
            start.heading - theta,
            goal.heading - theta,
            d,
        ))
    }

    /// Start heading relative to the line joining the positions, in `[0, 2π)`.
    #[inline]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Goal heading relative to the line joining the positions, in `[0, 2π)`.
    #[inline]
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Distance between the positions in units of the turning radius.
    #[inline]
    pub fn d(&self) -> f64 {
        self.d
    }
}

/// A turning radius must be a positive real number; this rejects NaN and infinity.
pub(crate) fn is_valid_radius(turning_radius: f64) -> bool {
    turning_radius > 0.0 && turning_radius.is_finite()
}

/// Length of the straight segment from its square, if it exists.
fn straight_length(p_squared: f64) -> Option<f64> {
    // Also rejects NaN.
    if !(p_squared >= -FEASIBILITY_EPSILON) {
        return None;
    }
    Some(p_squared.max(0.0).sqrt())
}

/// Length of the middle arc of a curve-curve-curve word from its cosine relation.
fn middle_arc(tmp: f64) -> Option<f64> {
    if !(tmp.abs() <= 1.0) {
        return None;
    }
    Some(normalize_angle(TAU - tmp.acos()))
}

fn lsl(b: &NormalizedBoundary) -> Option<SegmentParams> {
    let tmp0 = b.d + b.sa - b.sb;
    let p = straight_length(2.0 + b.d * b.d - 2.0 * b.c_ab + 2.0 * b.d * (b.sa - b.sb))?;
    let tmp1 = (b.cb - b.ca).atan2(tmp0);
    let t = normalize_angle(tmp1 - b.alpha);
    let q = normalize_angle(b.beta - tmp1);
    Some([t, p, q])
}

fn rsr(b: &NormalizedBoundary) -> Option<SegmentParams> {
    let tmp0 = b.d - b.sa + b.sb;
    let p = straight_length(2.0 + b.d * b.d - 2.0 * b.c_ab + 2.0 * b.d * (b.sb - b.sa))?;
    let tmp1 = (b.ca - b.cb).atan2(tmp0);
    let t = normalize_angle(b.alpha - tmp1);
    let q = normalize_angle(tmp1 - b.beta);
    Some([t, p, q])
}

fn lsr(b: &NormalizedBoundary) -> Option<SegmentParams> {
    let p = straight_length(-2.0 + b.d * b.d + 2.0 * b.c_ab + 2.0 * b.d * (b.sa + b.sb))?;
    let tmp2 = (-b.ca - b.cb).atan2(b.d + b.sa + b.sb) - (-2.0_f64).atan2(p);
    let t = normalize_angle(tmp2 - b.alpha);
    let q = normalize_angle(tmp2 - b.beta);
    Some([t, p, q])
}

fn rsl(b: &NormalizedBoundary) -> Option<SegmentParams> {
    let p = straight_length(b.d * b.d - 2.0 + 2.0 * b.c_ab - 2.0 * b.d * (b.sa + b.sb))?;
    let tmp2 = (b.ca + b.cb).atan2(b.d - b.sa - b.sb) - 2.0_f64.atan2(p);
    let t = normalize_angle(b.alpha - tmp2);
    let q = normalize_angle(b.beta - tmp2);
    Some([t, p, q])
}

fn rlr(b: &NormalizedBoundary) -> Option<SegmentParams> {
    let tmp = (6.0 - b.d * b.d + 2.0 * b.c_ab + 2.0 * b.d * (b.sa - b.sb)) / 8.0;
    let p = middle_arc(tmp)?;
    let t = normalize_angle(
        b.alpha - (b.ca - b.cb).atan2(b.d - b.sa + b.sb) + normalize_angle(p / 2.0),
    );
    let q = normalize_angle(b.alpha - b.beta - t + p);
    Some([t, p, q])
}

fn lrl(b: &NormalizedBoundary) -> Option<SegmentParams> {
    let tmp = (6.0 - b.d * b.d + 2.0 * b.c_ab + 2.0 * b.d * (b.sb - b.sa)) / 8.0;
    let p = middle_arc(tmp)?;
    let t = normalize_angle(-b.alpha - (b.ca - b.cb).atan2(b.d + b.sa - b.sb) + p / 2.0);
    let q = normalize_angle(b.beta - b.alpha - t + p);
    Some([t, p, q])
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::{FRAC_PI_2, PI};

    fn assert_params_near(actual: SegmentParams, expected: SegmentParams) {
        for i in 0..3 {
            assert!(
                (actual[i] - expected[i]).abs() < 1e-9,
                "{actual:?} != {expected:?}"
            );
        }
    }

    #[test]
    fn segment_table() {
        use SegmentType::{Left as L, Right as R, Straight as S};
        assert_eq!(PathType::LSL.segment_types(), [L, S, L]);
        assert_eq!(PathType::LSR.segment_types(), [L, S, R]);
        assert_eq!(PathType::RSL.segment_types(), [R, S, L]);
        assert_eq!(PathType::RSR.segment_types(), [R, S, R]);
        assert_eq!(PathType::RLR.segment_types(), [R, L, R]);
        assert_eq!(PathType::LRL.segment_types(), [L, R, L]);
        for word in PathType::ALL {
            assert_eq!(word.is_csc(), word.segment_types()[1] == S, "{word}");
            assert_eq!(word.is_ccc(), PathType::CCC.contains(&word));
        }
    }

    #[test]
    fn straight_ahead() {
        let b = NormalizedBoundary::new(0.0, 0.0, 4.0);
        assert_params_near(PathType::LSL.solve(&b).unwrap(), [0.0, 4.0, 0.0]);
        assert_params_near(PathType::RSR.solve(&b).unwrap(), [0.0, 4.0, 0.0]);
        assert_eq!(PathType::LSR.solve(&b).map(|p| p[1] > 0.0), Some(true));
        // Four radii is the widest gap three tangent circles can span.
        assert_params_near(PathType::RLR.solve(&b).unwrap(), [FRAC_PI_2, PI, FRAC_PI_2]);
        let b = NormalizedBoundary::new(0.0, 0.0, 5.0);
        assert_eq!(PathType::RLR.solve(&b), None);
        assert_eq!(PathType::LRL.solve(&b), None);
    }

    #[test]
    fn turn_around_in_place() {
        // Same position, opposite heading.
        let b = NormalizedBoundary::new(0.0, PI, 0.0);
        assert_eq!(PathType::LSR.solve(&b), None);
        assert_eq!(PathType::RSL.solve(&b), None);
        assert_params_near(PathType::LSL.solve(&b).unwrap(), [1.5 * PI, 2.0, 1.5 * PI]);
        let third = PI / 3.0;
        assert_params_near(PathType::RLR.solve(&b).unwrap(), [third, 5.0 * third, third]);
        assert_params_near(PathType::LRL.solve(&b).unwrap(), [third, 5.0 * third, third]);
    }

    #[test]
    fn csc_params_non_negative() {
        for ia in 0..12 {
            for ib in 0..12 {
                for id in 0..8 {
                    let b = NormalizedBoundary::new(
                        f64::from(ia) * 0.55,
                        f64::from(ib) * 0.55,
                        f64::from(id) * 0.7,
                    );
                    for word in PathType::ALL {
                        if let Some(params) = word.solve(&b) {
                            assert!(params.iter().all(|p| *p >= 0.0), "{word} {params:?}");
                            if word.is_ccc() {
                                assert!(params[1] < TAU, "{word} {params:?}");
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn round_off_clamped_to_tangent() {
        assert_eq!(straight_length(-0.5 * FEASIBILITY_EPSILON), Some(0.0));
        assert_eq!(straight_length(-2.0 * FEASIBILITY_EPSILON), None);
        assert_eq!(straight_length(f64::NAN), None);
        assert_eq!(middle_arc(1.0 + 1e-12), None);
        assert_eq!(middle_arc(f64::NAN), None);
    }

    #[test]
    fn boundary_from_poses() {
        let b = NormalizedBoundary::from_poses(
            Pose::new(1.0, 1.0, FRAC_PI_2),
            Pose::new(1.0, 5.0, PI),
            2.0,
        )
        .unwrap();
        assert!((b.d() - 2.0).abs() < 1e-12);
        assert!(b.alpha().abs() < 1e-12);
        assert!((b.beta() - FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn boundary_rejects_bad_radius() {
        let q = Pose::new(0.0, 0.0, 0.0);
        for rho in [0.0, -1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(
                NormalizedBoundary::from_poses(q, q, rho),
                Err(DubinsError::InvalidRadius)
            );
        }
    }

    #[test]
    fn names() {
        assert_eq!(format!("{}", PathType::RLR), "RLR");
        assert_eq!(PathType::LSR.name(), "LSR");
    }
}
