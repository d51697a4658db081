use crate::{traits::CostFunction, DVector, Float};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Describes a point in the parameter space along with its (possibly pending) evaluation.
///
/// An unevaluated point (`fx == None`) compares greater than any evaluated one in
/// [`Point::total_cmp`], which lets "no evaluation yet" act as a sentinel that any real score
/// improves upon.
#[derive(Clone, Default, Debug, Serialize, Deserialize)]
pub struct Point {
    /// the point's position
    pub x: DVector<Float>,
    /// the point's evaluation (`None` if the point has not yet been evaluated)
    pub fx: Option<Float>,
}
impl Point {
    /// Convert the [`Point`] into a position-value tuple.
    ///
    /// # Panics
    ///
    /// This method will panic if the point is unevaluated.
    pub fn destructure(self) -> (DVector<Float>, Float) {
        let fx = self.fx_checked();
        (self.x, fx)
    }
    /// Compare two points by their `fx` value.
    pub fn total_cmp(&self, other: &Self) -> std::cmp::Ordering {
        match (&self.fx, &other.fx) {
            (None, None) => std::cmp::Ordering::Equal,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (Some(_), None) => std::cmp::Ordering::Less,
            (Some(s), Some(o)) => s.total_cmp(o),
        }
    }
    /// Move the point to a new position, resetting the evaluation of the point.
    pub fn set_position(&mut self, x: DVector<Float>) {
        self.x = x;
        self.fx = None;
    }
    /// Get the current evaluation of the point, if it has been evaluated.
    ///
    /// # Panics
    ///
    /// This method will panic if the point is unevaluated.
    pub fn fx_checked(&self) -> Float {
        #[allow(clippy::expect_used)]
        self.fx.expect("Point value requested before evaluation")
    }
    /// Evaluate the given function at the point's coordinate and set the `fx` value to the result.
    ///
    /// Re-evaluation is skipped if the point already holds a value; moving the point with
    /// [`Point::set_position`] re-arms it.
    ///
    /// # Errors
    ///
    /// Returns an `Err(E)` if the evaluation fails. Users should implement the trait to return a
    /// [`std::convert::Infallible`] if the function evaluation never fails.
    pub fn evaluate<U, E>(
        &mut self,
        func: &dyn CostFunction<U, E>,
        user_data: &mut U,
    ) -> Result<(), E> {
        if self.fx.is_none() {
            self.fx = Some(func.evaluate(&self.x, user_data)?);
        }
        Ok(())
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "x: {:?}, f(x): {:?}", self.x.as_slice(), self.fx)
    }
}

impl From<&[Float]> for Point {
    fn from(value: &[Float]) -> Self {
        Self {
            x: DVector::from_column_slice(value),
            fx: None,
        }
    }
}
impl From<Vec<Float>> for Point {
    fn from(value: Vec<Float>) -> Self {
        Self {
            x: DVector::from_vec(value),
            fx: None,
        }
    }
}
impl From<DVector<Float>> for Point {
    fn from(value: DVector<Float>) -> Self {
        Self { x: value, fx: None }
    }
}
impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.fx == other.fx
    }
}
impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.fx.partial_cmp(&other.fx)
    }
}
