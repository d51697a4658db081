//! `murmuration`, named after the swirling flocks of starlings, is a particle swarm optimization
//! (PSO) library. PSO is a population-based stochastic optimizer which minimizes a scalar function
//! over a bounded region of $`\mathbb{R}^n`$ without using gradients, which makes it a reasonable
//! choice for objectives which are non-convex, multi-modal, or non-differentiable. The user
//! implements the [`CostFunction`](`crate::traits::CostFunction`) trait on some struct which takes
//! a vector of parameters and returns a single-valued [`Result`] ($`f(\mathbb{R}^n) \to
//! \mathbb{R}`$, lower is better), and the [`PSO`](`crate::swarm::PSO`) optimizer does the rest.
//!
//! # Quick Start
//!
//! This crate provides some common test functions in the [`test_functions`] module. To minimize
//! the sum-of-squares (sphere) function over a box, we can run a swarm of 15 particles for 30
//! iterations:
//!
//! ```rust
//! use std::convert::Infallible;
//!
//! use fastrand::Rng;
//! use murmuration::prelude::*;
//! use murmuration::test_functions::Sphere;
//!
//! fn main() -> Result<(), Infallible> {
//!     let bounds: Bounds = vec![(-10.0, 10.0), (-10.0, 10.0)].into();
//!     let mut pso = PSO::new(15, 30, Rng::with_seed(0));
//!     let summary = pso.minimize(&Sphere, &[5.0, 5.0], &bounds, &mut ())?;
//!     println!("{}", summary);
//!     assert!(summary.best.fx_checked() < 50.0);
//!     Ok(())
//! }
//! ```
//!
//! # Bounds
//!
//! Every dimension of the search space carries a [`Bound`](`crate::core::Bound`). After each
//! position update, coordinates are clamped to their bound like a hard wall: a particle which
//! oversteps a limit is placed exactly on it and keeps its velocity, so it may push against the
//! same wall on the next iteration. A degenerate bound with equal limits is legal and collapses
//! that dimension to a constant. Unbounded sides can be expressed with infinite limits.
//!
//! # Determinism
//!
//! All randomness flows through a single [`fastrand::Rng`] handed to the optimizer at
//! construction. Two runs with identical configurations and identical seeds produce bit-identical
//! results, which makes stochastic optimization results reproducible and testable.
#![warn(
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::doc_markdown,
    clippy::doc_link_with_quotes,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::perf,
    clippy::style,
    missing_docs
)]

/// Module containing the [`Bound`](`crate::core::Bound`), [`Point`](`crate::core::Point`), and
/// [`SwarmSummary`](`crate::core::SwarmSummary`) types.
pub mod core;
/// Module containing the particle swarm and the [`PSO`](`crate::swarm::PSO`) optimizer.
pub mod swarm;
/// Module containing standard functions for testing the optimizer.
pub mod test_functions;
/// Module containing the [`CostFunction`](`crate::traits::CostFunction`) and
/// [`SwarmObserver`](`crate::traits::SwarmObserver`) traits.
pub mod traits;
/// Module containing random sampling helpers.
pub mod utils;

/// A module containing the most commonly used types and traits in this crate.
pub mod prelude {
    pub use crate::core::{Bound, Bounds, Point, SwarmSummary};
    pub use crate::swarm::{Particle, Swarm, PSO};
    pub use crate::traits::{CostFunction, SwarmObserver};
    pub use crate::{DVector, Float, PI};
}

pub use nalgebra::DVector;

/// A floating-point number type (defaults to [`f64`], see `f32` feature).
#[cfg(not(feature = "f32"))]
pub type Float = f64;

/// A floating-point number type (defaults to [`f64`], see `f32` feature).
#[cfg(feature = "f32")]
pub type Float = f32;

/// The mathematical constant $`\pi`$.
#[cfg(not(feature = "f32"))]
pub const PI: Float = std::f64::consts::PI;

/// The mathematical constant $`\pi`$.
#[cfg(feature = "f32")]
pub const PI: Float = std::f32::consts::PI;
