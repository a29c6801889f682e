// Copyright 2026 the Dubins Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shortest paths and the queries built on them.

use core::ops::{ControlFlow, Range};

use arrayvec::ArrayVec;
use log::{debug, trace};

use crate::common::normalize_angle;
use crate::word::is_valid_radius;
use crate::{
    propagate, DubinsError, NormalizedBoundary, PathType, Pose, SegmentParams, SegmentType,
    TranslateScale,
};

/// A shortest path of bounded curvature between two poses.
///
/// A path is made of three segments, each a left arc, a right arc or a
/// straight line, in the order given by its [`PathType`]. Arcs all have the
/// same turning radius. Segment lengths are stored normalized (divided by the
/// turning radius), so the same path shape serves every scale.
///
/// Paths are immutable once constructed; every query derives a new value.
///
/// # Examples
///
/// ```
/// use dubins::{DubinsPath, PathType, Pose};
///
/// let start = Pose::new(0.0, 0.0, 0.0);
/// let goal = Pose::new(4.0, 0.0, 0.0);
/// let path = DubinsPath::shortest(start, goal, 1.0).unwrap();
///
/// assert_eq!(path.path_type(), PathType::LSL);
/// assert!((path.length() - 4.0).abs() < 1e-12);
///
/// let halfway = path.sample(2.0).unwrap();
/// assert!((halfway.x - 2.0).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "PathParts")
)]
pub struct DubinsPath {
    start: Pose,
    turning_radius: f64,
    path_type: PathType,
    params: SegmentParams,
}

/// Find the shortest path from `start` to `goal` with the given turning radius.
///
/// This is the same as [`DubinsPath::shortest`].
///
/// # Errors
///
/// See [`DubinsPath::shortest`].
pub fn synthesize(start: Pose, goal: Pose, turning_radius: f64) -> Result<DubinsPath, DubinsError> {
    DubinsPath::shortest(start, goal, turning_radius)
}

impl DubinsPath {
    /// Find the shortest path from `start` to `goal` with the given turning radius.
    ///
    /// All six words are tried in the order of [`PathType::ALL`]; the
    /// feasible one of least length wins, and on an exact tie the earlier
    /// word is kept.
    ///
    /// # Errors
    ///
    /// [`DubinsError::InvalidRadius`] if `turning_radius` is not positive and finite,
    /// [`DubinsError::NoPath`] if no word is feasible. With finite inputs a
    /// path always exists; non-finite poses yield `NoPath`.
    pub fn shortest(start: Pose, goal: Pose, turning_radius: f64) -> Result<Self, DubinsError> {
        Self::shortest_in(start, goal, turning_radius, &PathType::ALL)
    }

    /// Find the shortest path using only the given words.
    ///
    /// Ties go to the word that appears first in `words`.
    ///
    /// ```
    /// use dubins::{DubinsPath, PathType, Pose};
    ///
    /// let start = Pose::new(0.0, 0.0, 0.0);
    /// let goal = Pose::new(1.0, 1.0, 3.0);
    /// let path = DubinsPath::shortest_in(start, goal, 1.0, &PathType::CSC).unwrap();
    /// assert!(path.path_type().is_csc());
    /// ```
    ///
    /// # Errors
    ///
    /// [`DubinsError::InvalidRadius`] if `turning_radius` is not positive and finite,
    /// [`DubinsError::NoPath`] if none of `words` is feasible.
    pub fn shortest_in(
        start: Pose,
        goal: Pose,
        turning_radius: f64,
        words: &[PathType],
    ) -> Result<Self, DubinsError> {
        let boundary = Self::boundary(start, goal, turning_radius)?;
        Self::select(start, turning_radius, &boundary, words)
    }

    /// The path of one specific word.
    ///
    /// # Errors
    ///
    /// [`DubinsError::InvalidRadius`] if `turning_radius` is not positive and finite,
    /// [`DubinsError::NoPath`] if `word` cannot connect the two poses.
    pub fn with_word(
        start: Pose,
        goal: Pose,
        turning_radius: f64,
        word: PathType,
    ) -> Result<Self, DubinsError> {
        Self::shortest_in(start, goal, turning_radius, &[word])
    }

    /// Find the shortest path for a boundary that has already been normalized.
    ///
    /// `start` and `turning_radius` place the resulting path in the plane;
    /// its shape depends only on `boundary`.
    ///
    /// # Errors
    ///
    /// As for [`DubinsPath::shortest`].
    pub fn from_normalized(
        start: Pose,
        turning_radius: f64,
        boundary: &NormalizedBoundary,
    ) -> Result<Self, DubinsError> {
        if !is_valid_radius(turning_radius) {
            debug!("[Dubins] FAILED: InvalidRadius {turning_radius}");
            return Err(DubinsError::InvalidRadius);
        }
        Self::select(start, turning_radius, boundary, &PathType::ALL)
    }

    /// Reassemble a path from the parts its accessors return.
    ///
    /// The parts need not describe a shortest path, or reach any particular
    /// goal; any word with any valid segment lengths is accepted. This is
    /// also how deserialized paths are checked.
    ///
    /// # Errors
    ///
    /// [`DubinsError::InvalidRadius`] if `turning_radius` is not positive and
    /// finite, [`DubinsError::InvalidSegment`] if any of `params` is negative,
    /// infinite or NaN.
    pub fn from_parts(
        start: Pose,
        turning_radius: f64,
        path_type: PathType,
        params: SegmentParams,
    ) -> Result<Self, DubinsError> {
        if !is_valid_radius(turning_radius) {
            return Err(DubinsError::InvalidRadius);
        }
        if !params.iter().all(|p| *p >= 0.0 && p.is_finite()) {
            return Err(DubinsError::InvalidSegment);
        }
        Ok(DubinsPath {
            start,
            turning_radius,
            path_type,
            params,
        })
    }

    /// Every feasible path between the poses, one per word, in the order of
    /// [`PathType::ALL`].
    ///
    /// The result is empty when no word is feasible.
    ///
    /// # Errors
    ///
    /// [`DubinsError::InvalidRadius`] if `turning_radius` is not positive and finite.
    pub fn candidates(
        start: Pose,
        goal: Pose,
        turning_radius: f64,
    ) -> Result<ArrayVec<Self, 6>, DubinsError> {
        let boundary = Self::boundary(start, goal, turning_radius)?;
        Ok(PathType::ALL
            .iter()
            .filter_map(|&path_type| {
                path_type.solve(&boundary).map(|params| DubinsPath {
                    start,
                    turning_radius,
                    path_type,
                    params,
                })
            })
            .collect())
    }

    fn boundary(
        start: Pose,
        goal: Pose,
        turning_radius: f64,
    ) -> Result<NormalizedBoundary, DubinsError> {
        NormalizedBoundary::from_poses(start, goal, turning_radius).inspect_err(|_| {
            debug!("[Dubins] FAILED: InvalidRadius {turning_radius}");
        })
    }

    fn select(
        start: Pose,
        turning_radius: f64,
        boundary: &NormalizedBoundary,
        words: &[PathType],
    ) -> Result<Self, DubinsError> {
        trace!(
            "[Dubins] select: alpha={:.6} beta={:.6} d={:.6}",
            boundary.alpha(),
            boundary.beta(),
            boundary.d()
        );
        let mut best = None;
        let mut best_cost = f64::INFINITY;
        for &path_type in words {
            let Some(params) = path_type.solve(boundary) else {
                trace!("[Dubins] {path_type}: infeasible");
                continue;
            };
            let cost = params[0] + params[1] + params[2];
            trace!("[Dubins] {path_type}: params={params:?} cost={cost:.6}");
            // NaN costs never compare less, so non-finite input cannot win.
            if cost < best_cost {
                best_cost = cost;
                best = Some((path_type, params));
            }
        }
        match best {
            Some((path_type, params)) => {
                debug!(
                    "[Dubins] selected {path_type}, length {:.6}",
                    best_cost * turning_radius
                );
                Ok(DubinsPath {
                    start,
                    turning_radius,
                    path_type,
                    params,
                })
            }
            None => {
                debug!("[Dubins] FAILED: NoPath among {} words", words.len());
                Err(DubinsError::NoPath)
            }
        }
    }

    /// The initial pose, exactly as given at construction.
    #[inline]
    pub fn start(&self) -> Pose {
        self.start
    }

    /// The turning radius of every arc.
    #[inline]
    pub fn turning_radius(&self) -> f64 {
        self.turning_radius
    }

    /// The word naming this path's segment sequence.
    #[inline]
    pub fn path_type(&self) -> PathType {
        self.path_type
    }

    /// The segment shapes, in path order.
    #[inline]
    pub fn segment_types(&self) -> [SegmentType; 3] {
        self.path_type.segment_types()
    }

    /// The normalized segment lengths, in path order.
    #[inline]
    pub fn params(&self) -> SegmentParams {
        self.params
    }

    /// Total length of the path.
    #[inline]
    pub fn length(&self) -> f64 {
        self.normalized_length() * self.turning_radius
    }

    /// Total length of the path in units of the turning radius.
    #[inline]
    pub fn normalized_length(&self) -> f64 {
        self.params[0] + self.params[1] + self.params[2]
    }

    /// Length of segment `i`.
    ///
    /// # Errors
    ///
    /// [`DubinsError::IndexOutOfRange`] unless `i` is 0, 1 or 2.
    pub fn segment_length(&self, i: usize) -> Result<f64, DubinsError> {
        Ok(self.segment_length_normalized(i)? * self.turning_radius)
    }

    /// Length of segment `i` in units of the turning radius.
    ///
    /// # Errors
    ///
    /// [`DubinsError::IndexOutOfRange`] unless `i` is 0, 1 or 2.
    pub fn segment_length_normalized(&self, i: usize) -> Result<f64, DubinsError> {
        self.params
            .get(i)
            .copied()
            .ok_or(DubinsError::IndexOutOfRange)
    }

    /// Length of segment `i`, or infinity when `i` is out of range.
    ///
    /// This keeps the convention of callers that treat a missing segment as
    /// infinitely long; prefer [`DubinsPath::segment_length`].
    pub fn segment_length_or_inf(&self, i: usize) -> f64 {
        self.segment_length(i).unwrap_or(f64::INFINITY)
    }

    /// The pose at distance `t` along the path.
    ///
    /// # Errors
    ///
    /// [`DubinsError::ParamOutOfRange`] unless `0 <= t < self.length()`.
    pub fn sample(&self, t: f64) -> Result<Pose, DubinsError> {
        if !(t >= 0.0 && t < self.length()) {
            return Err(DubinsError::ParamOutOfRange);
        }
        Ok(self.sample_with(&self.joints(), t))
    }

    /// The final pose of the path.
    ///
    /// Computed in closed form by running all three segments to completion,
    /// so it is exact up to rounding and never fails, even for a path of
    /// zero length.
    pub fn endpoint(&self) -> Pose {
        let [_, _, q2] = self.joints();
        let end = propagate(q2, self.params[2], self.segment_types()[2]);
        self.to_world(end)
    }

    /// The poses where the first segment meets the second, and the second
    /// meets the third.
    pub fn breakpoints(&self) -> [Pose; 2] {
        let [_, q1, q2] = self.joints();
        [self.to_world(q1), self.to_world(q2)]
    }

    /// Iterate over poses at distances `0, step, 2 * step, …` below the length.
    ///
    /// Each item is the pose together with its distance along the path.
    ///
    /// ```
    /// use dubins::{DubinsPath, Pose};
    ///
    /// let path = DubinsPath::shortest(Pose::new(0.0, 0.0, 0.0), Pose::new(4.0, 0.0, 0.0), 1.0)?;
    /// let xs: Vec<f64> = path.samples(1.0)?.map(|(q, _)| q.x).collect();
    /// assert_eq!(xs, [0.0, 1.0, 2.0, 3.0]);
    /// # Ok::<(), dubins::DubinsError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// [`DubinsError::InvalidStep`] unless `step` is positive.
    pub fn samples(&self, step: f64) -> Result<Samples, DubinsError> {
        self.samples_in(step, 0.0..self.length())
    }

    /// Iterate over poses at distances `range.start + i * step` that lie
    /// below both `range.end` and the length of the path.
    ///
    /// # Errors
    ///
    /// [`DubinsError::InvalidStep`] unless `step` is positive,
    /// [`DubinsError::ParamOutOfRange`] if `range.start` is negative or NaN.
    pub fn samples_in(&self, step: f64, range: Range<f64>) -> Result<Samples, DubinsError> {
        if !(step > 0.0) {
            debug!("[Dubins] FAILED: InvalidStep {step}");
            return Err(DubinsError::InvalidStep);
        }
        if !(range.start >= 0.0) {
            debug!("[Dubins] FAILED: ParamOutOfRange start {}", range.start);
            return Err(DubinsError::ParamOutOfRange);
        }
        Ok(Samples {
            path: *self,
            joints: self.joints(),
            step,
            start: range.start,
            end: range.end.min(self.length()),
            index: 0,
        })
    }

    /// Visit poses at distances `0, step, 2 * step, …` below the length.
    ///
    /// `visit` receives each pose and its distance along the path. Returning
    /// [`ControlFlow::Break`] stops the walk at once, and the break value is
    /// handed back to the caller; otherwise the result is
    /// `ControlFlow::Continue(())` after the last sample.
    ///
    /// ```
    /// use core::ops::ControlFlow;
    /// use dubins::{DubinsPath, Pose};
    ///
    /// let path = DubinsPath::shortest(Pose::new(0.0, 0.0, 0.0), Pose::new(10.0, 0.0, 0.0), 1.0)?;
    /// // Stop at the first pose past x = 5.
    /// let hit = path.sample_many(0.5, |q, s| {
    ///     if q.x > 5.0 { ControlFlow::Break(s) } else { ControlFlow::Continue(()) }
    /// })?;
    /// assert_eq!(hit, ControlFlow::Break(5.5));
    /// # Ok::<(), dubins::DubinsError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// [`DubinsError::InvalidStep`] unless `step` is positive.
    pub fn sample_many<B>(
        &self,
        step: f64,
        visit: impl FnMut(Pose, f64) -> ControlFlow<B>,
    ) -> Result<ControlFlow<B>, DubinsError> {
        Ok(drive(self.samples(step)?, visit))
    }

    /// Like [`DubinsPath::sample_many`], restricted to distances in `range`.
    ///
    /// # Errors
    ///
    /// As for [`DubinsPath::samples_in`].
    pub fn sample_many_range<B>(
        &self,
        step: f64,
        range: Range<f64>,
        visit: impl FnMut(Pose, f64) -> ControlFlow<B>,
    ) -> Result<ControlFlow<B>, DubinsError> {
        Ok(drive(self.samples_in(step, range)?, visit))
    }

    /// The leading part of this path, up to distance `t`.
    ///
    /// The start pose, radius and word are kept; segments are consumed in
    /// order until their lengths add up to `t`. If `t` is at least the
    /// length, the path is returned unchanged. A negative or NaN `t` gives
    /// a path of zero length.
    #[must_use]
    pub fn extract_subpath(&self, t: f64) -> DubinsPath {
        let tprime = (t / self.turning_radius).max(0.0);
        let p0 = self.params[0].min(tprime);
        let p1 = self.params[1].min(tprime - p0);
        let p2 = self.params[2].min(tprime - p0 - p1);
        DubinsPath {
            params: [p0, p1, p2],
            ..*self
        }
    }

    /// Unit-radius poses at the start of each segment, with the start
    /// position moved to the origin.
    fn joints(&self) -> [Pose; 3] {
        let [s0, s1, _] = self.segment_types();
        let q0 = Pose::new(0.0, 0.0, self.start.heading);
        let q1 = propagate(q0, self.params[0], s0);
        let q2 = propagate(q1, self.params[1], s1);
        [q0, q1, q2]
    }

    /// The pose at distance `t`, which must lie in `[0, length)`.
    fn sample_with(&self, joints: &[Pose; 3], t: f64) -> Pose {
        let tprime = t / self.turning_radius;
        let [p0, p1, _] = self.params;
        let [s0, s1, s2] = self.segment_types();
        let q = if tprime < p0 {
            propagate(joints[0], tprime, s0)
        } else if tprime < p0 + p1 {
            propagate(joints[1], tprime - p0, s1)
        } else {
            propagate(joints[2], tprime - p0 - p1, s2)
        };
        self.to_world(q)
    }

    /// Scale a unit-radius pose and move it back to the start position.
    fn to_world(&self, q: Pose) -> Pose {
        let transform =
            TranslateScale::new(self.start.position().to_vec2(), self.turning_radius);
        let q = transform * q;
        Pose::new(q.x, q.y, normalize_angle(q.heading))
    }
}

fn drive<B>(
    samples: Samples,
    mut visit: impl FnMut(Pose, f64) -> ControlFlow<B>,
) -> ControlFlow<B> {
    for (pose, offset) in samples {
        if let ControlFlow::Break(b) = visit(pose, offset) {
            return ControlFlow::Break(b);
        }
    }
    ControlFlow::Continue(())
}

/// The serialized fields of a [`DubinsPath`], before validation.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
struct PathParts {
    start: Pose,
    turning_radius: f64,
    path_type: PathType,
    params: SegmentParams,
}

#[cfg(feature = "serde")]
impl TryFrom<PathParts> for DubinsPath {
    type Error = DubinsError;

    fn try_from(parts: PathParts) -> Result<Self, DubinsError> {
        DubinsPath::from_parts(
            parts.start,
            parts.turning_radius,
            parts.path_type,
            parts.params,
        )
    }
}

/// Evenly spaced poses along a [`DubinsPath`].
///
/// Created by [`DubinsPath::samples`] and [`DubinsPath::samples_in`].
/// Distances are computed as `start + index * step` rather than accumulated,
/// so they do not drift however small the step.
#[derive(Clone, Debug)]
pub struct Samples {
    path: DubinsPath,
    joints: [Pose; 3],
    step: f64,
    start: f64,
    end: f64,
    index: u64,
}

impl Iterator for Samples {
    type Item = (Pose, f64);

    fn next(&mut self) -> Option<Self::Item> {
        let offset = self.start + self.index as f64 * self.step;
        if !(offset < self.end) {
            return None;
        }
        self.index += 1;
        Some((self.path.sample_with(&self.joints, offset), offset))
    }
}
