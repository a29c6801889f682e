// Copyright 2026 the Dubins Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Common mathematical operations

#![allow(missing_docs)]

use core::f64::consts::TAU;

/// Defines a trait that chooses between libstd or libm implementations of float methods.
macro_rules! define_float_funcs {
    ($(
        fn $name:ident(self $(,$arg:ident: $arg_ty:ty)*) -> $ret:ty
        => $lname:ident;
    )+) => {
        #[cfg(not(feature = "std"))]
        pub(crate) trait FloatFuncs : Sized {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret;)+
        }

        #[cfg(not(feature = "std"))]
        impl FloatFuncs for f64 {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret {
                #[cfg(feature = "libm")]
                return libm::$lname(self $(,$arg as _)*);

                #[cfg(not(feature = "libm"))]
                compile_error!("dubins requires either the `std` or `libm` feature")
            })+
        }
    }
}

define_float_funcs! {
    fn abs(self) -> Self => fabs;
    fn acos(self) -> Self => acos;
    fn atan2(self, other: Self) -> Self => atan2;
    fn cos(self) -> Self => cos;
    fn floor(self) -> Self => floor;
    fn sin_cos(self) -> (Self, Self) => sincos;
    fn sqrt(self) -> Self => sqrt;
}

/// Tolerance below zero within which a squared segment length is treated as zero.
///
/// Floating point round-off can push the discriminant of a curve-straight-curve
/// word slightly negative in tangent configurations (for example, a straight
/// drive with no turning). Values in `[-FEASIBILITY_EPSILON, 0)` are clamped to
/// zero instead of reporting the word as infeasible.
pub const FEASIBILITY_EPSILON: f64 = 1e-9;

/// The representative of `x` in `[0, y)` under modulus `y`.
///
/// Unlike the `%` operator, the result takes the sign of the modulus, so
/// negative inputs wrap around instead of staying negative.
///
/// ```
/// use dubins::common::ring_mod;
///
/// assert_eq!(ring_mod(7.0, 3.0), 1.0);
/// assert_eq!(ring_mod(-1.0, 3.0), 2.0);
/// ```
#[inline]
pub fn ring_mod(x: f64, y: f64) -> f64 {
    x - y * (x / y).floor()
}

/// Wrap an angle in radians into `[0, 2π)`.
///
/// Every angle fed into or produced by the word solvers passes through here.
#[inline]
pub fn normalize_angle(theta: f64) -> f64 {
    let wrapped = ring_mod(theta, TAU);
    // `x - y * floor(x / y)` can round up to exactly `y` for tiny negative `x`.
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}
