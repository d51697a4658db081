use crate::{traits::CostFunction, DVector, Float};
use std::convert::Infallible;

/// The sphere function, a convex bowl with a single global minimum of zero at the origin.
///
/// ```math
/// f(\vec{x}) = \sum_{i=1}^n x_i^2
/// ```
pub struct Sphere;
impl CostFunction for Sphere {
    fn evaluate(&self, x: &DVector<Float>, _user_data: &mut ()) -> Result<Float, Infallible> {
        Ok(x.iter().map(|xi| xi.powi(2)).sum())
    }
}
