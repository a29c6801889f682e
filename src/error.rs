// Copyright 2026 the Dubins Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by path synthesis and queries.

use core::fmt;

/// An error from constructing or querying a [`DubinsPath`](crate::DubinsPath).
///
/// All operations are deterministic, so retrying with the same inputs
/// reproduces the same error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DubinsError {
    /// The turning radius was zero, negative, infinite or NaN.
    InvalidRadius,
    /// None of the candidate words connects the two poses.
    NoPath,
    /// A sample was requested outside `[0, length)`.
    ParamOutOfRange,
    /// A sampling step was zero, negative or NaN.
    InvalidStep,
    /// A segment index outside `0..3` was given.
    IndexOutOfRange,
    /// A segment length was negative, infinite or NaN.
    InvalidSegment,
}

impl fmt::Display for DubinsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DubinsError::InvalidRadius => write!(f, "turning radius must be positive and finite"),
            DubinsError::NoPath => write!(f, "no path connects the given poses"),
            DubinsError::ParamOutOfRange => write!(f, "sample distance is outside the path"),
            DubinsError::InvalidStep => write!(f, "sampling step must be positive"),
            DubinsError::IndexOutOfRange => write!(f, "segment index must be 0, 1 or 2"),
            DubinsError::InvalidSegment => {
                write!(f, "segment lengths must be finite and non-negative")
            }
        }
    }
}

impl core::error::Error for DubinsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            DubinsError::InvalidStep.to_string(),
            "sampling step must be positive"
        );
        assert_eq!(
            DubinsError::NoPath.to_string(),
            "no path connects the given poses"
        );
        assert_eq!(
            DubinsError::InvalidRadius.to_string(),
            "turning radius must be positive and finite"
        );
    }

    #[test]
    fn boxed_error() {
        let err: Box<dyn std::error::Error> = Box::new(DubinsError::IndexOutOfRange);
        assert_eq!(err.to_string(), "segment index must be 0, 1 or 2");
    }
}
