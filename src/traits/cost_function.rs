use std::convert::Infallible;

use crate::{DVector, Float};

/// A trait which describes a function $`f(\mathbb{R}^n) \to \mathbb{R}`$ (lower is better).
///
/// Such a function may also take a `user_data: &mut U` field which can be used to pass external
/// arguments to the function during optimization, or can be modified by the function itself.
///
/// The `CostFunction` trait takes a generic `U` representing the type of user data/arguments
/// and a generic `E` representing any possible errors that might be returned during function
/// execution. The function must not mutate its input and must be deterministic given identical
/// input; any randomness belongs to the optimizer, not the objective.
pub trait CostFunction<U = (), E = Infallible> {
    /// The evaluation of the function at a point `x` with the given arguments/user data.
    ///
    /// # Errors
    ///
    /// Returns an `Err(E)` if the evaluation fails. Users should implement this trait to return a
    /// [`std::convert::Infallible`] if the function evaluation never fails. An error aborts the
    /// entire optimization run; no partial result is recovered.
    fn evaluate(&self, x: &DVector<Float>, user_data: &mut U) -> Result<Float, E>;
}
