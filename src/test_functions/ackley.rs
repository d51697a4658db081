use crate::{traits::CostFunction, DVector, Float, PI};
use std::convert::Infallible;

/// The Ackley function, characterized by a nearly flat outer region and a large hole at the
/// centre. Its many local minima make it a standard stress test for optimizers prone to getting
/// trapped by hill-climbing behavior. The global minimum is zero at the origin.
///
/// ```math
/// f(\vec{x}) = -a \exp\left(-b\sqrt{\frac{1}{n}\sum_{i=1}^n x_i^2}\right)
///              - \exp\left(\frac{1}{n}\sum_{i=1}^n \cos(c x_i)\right) + a + e
/// ```
pub struct Ackley {
    /// The height of the outer plateau (recommended value `20`).
    pub a: Float,
    /// The decay rate of the radial term (recommended value `0.2`).
    pub b: Float,
    /// The frequency of the cosine ripples (recommended value $`2\pi`$).
    pub c: Float,
}
impl Default for Ackley {
    fn default() -> Self {
        Self {
            a: 20.0,
            b: 0.2,
            c: 2.0 * PI,
        }
    }
}
impl CostFunction for Ackley {
    fn evaluate(&self, x: &DVector<Float>, _user_data: &mut ()) -> Result<Float, Infallible> {
        let n = x.len() as Float;
        let sum_sq = x.iter().map(|xi| xi.powi(2)).sum::<Float>();
        let sum_cos = x.iter().map(|xi| Float::cos(self.c * xi)).sum::<Float>();
        Ok(-self.a * Float::exp(-self.b * Float::sqrt(sum_sq / n)) - Float::exp(sum_cos / n)
            + self.a
            + Float::exp(1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ackley_minimum_at_origin() {
        let origin = DVector::zeros(2);
        let fx = Ackley::default().evaluate(&origin, &mut ()).unwrap();
        assert_relative_eq!(fx, 0.0, epsilon = Float::EPSILON.sqrt());
    }

    #[test]
    fn test_ackley_is_positive_away_from_origin() {
        for x in [[1.0, 1.0], [5.0, 5.0], [-3.0, 7.0]] {
            let x = DVector::from_column_slice(&x);
            assert!(Ackley::default().evaluate(&x, &mut ()).unwrap() > 0.0);
        }
    }
}
