// Copyright 2026 the Dubins Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shortest paths for vehicles that only drive forward and turn no tighter
//! than a fixed radius.
//!
//! Given a start [`Pose`], a goal `Pose` and a minimum turning radius, a
//! [`DubinsPath`] is the shortest curve joining them made of circular arcs of
//! that radius and straight lines. Every such path is one of six words
//! ([`PathType`]): three segments, each a left arc, a right arc or a straight
//! line. Synthesis solves each word in closed form and keeps the shortest.
//!
//! Once built, a path can be measured, sampled at any distance, walked at a
//! fixed step, and cut short.
//!
//! # Examples
//!
//! ```
//! use core::ops::ControlFlow;
//! use dubins::{DubinsPath, Pose};
//!
//! let start = Pose::new(0.0, 0.0, 0.0);
//! let goal = Pose::new(4.0, 4.0, core::f64::consts::FRAC_PI_2);
//! let path = DubinsPath::shortest(start, goal, 1.0)?;
//!
//! // The end of the path is the goal, up to rounding.
//! let end = path.endpoint();
//! assert!(end.position().distance(goal.position()) < 1e-9);
//!
//! // Walk the path every 0.25 units, stopping early if a pose leaves the box.
//! let walk = path.sample_many(0.25, |q, _| {
//!     if q.x.abs() > 10.0 || q.y.abs() > 10.0 {
//!         ControlFlow::Break(q)
//!     } else {
//!         ControlFlow::Continue(())
//!     }
//! })?;
//! assert!(walk.is_continue());
//! # Ok::<(), dubins::DubinsError>(())
//! ```
//!
//! # Feature Flags
//!
//! The following crate [feature flags](https://doc.rust-lang.org/cargo/reference/features.html#dependency-features) are available:
//!
//! - `std` (enabled by default): Get floating point functions from the standard library
//!   (likely using your target's libc).
//! - `libm`: Use floating point implementations from [libm][].
//!   This is useful for `no_std` environments.
//!   However, note that the `libm` crate is not as efficient as the standard library.
//! - `mint`: Enable `From`/`Into` conversion of [`Point`] and [`Vec2`] with [mint][] types.
//! - `serde`: Implement `serde::Deserialize` and `serde::Serialize` on poses, paths and
//!   related types.
//! - `schemars`: Add best-effort support for using these types in JSON schemas using [schemars][].
//!
//! At least one of `std` and `libm` is required; `std` overrides `libm`.
//! No allocator is needed.
//!
//! Synthesis reports its decisions through the [log][] facade: each word it
//! tries at `trace` level, the word it picks (or the reason it failed) at
//! `debug` level.
//!
//! [libm]: https://docs.rs/libm
//! [mint]: https://docs.rs/mint
//! [schemars]: https://docs.rs/schemars
//! [log]: https://docs.rs/log

// LINEBENDER LINT SET - lib.rs - v1
// See https://linebender.org/wiki/canonical-lints/
// These lints aren't included in Cargo.toml because they
// shouldn't apply to examples and tests
#![warn(unused_crate_dependencies)]
#![warn(clippy::print_stdout, clippy::print_stderr)]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![allow(clippy::many_single_char_names)]
// Linebender lints this crate opts out of: impls name their own type, tests
// reuse short names and bare asserts, the path words and segment shapes are
// closed sets, and modules are re-exported wholesale below.
#![allow(
    clippy::use_self,
    clippy::shadow_unrelated,
    clippy::missing_assert_message,
    clippy::exhaustive_enums,
    clippy::wildcard_imports,
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason
)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("dubins requires either the `std` or `libm` feature");

// Suppress the unused_crate_dependencies lint when both std and libm are specified.
#[cfg(all(feature = "std", feature = "libm"))]
use libm as _;

// Only the benches use criterion.
#[cfg(test)]
use criterion as _;

pub mod common;
mod error;
mod path;
mod point;
mod pose;
mod segment;
mod translate_scale;
mod vec2;
mod word;

pub use crate::error::*;
pub use crate::path::*;
pub use crate::point::*;
pub use crate::pose::*;
pub use crate::segment::*;
pub use crate::translate_scale::*;
pub use crate::vec2::*;
pub use crate::word::*;
