use std::cmp::Ordering;

use fastrand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    core::{Bounds, Point},
    traits::CostFunction,
    utils::generate_random_vector,
    DVector, Float,
};

/// Implementation of the Particle Swarm Optimization (PSO) algorithm.
pub mod pso;
pub use pso::PSO;

/// A particle with a position, velocity, and best known position.
///
/// A particle owns its state exclusively; all cross-particle influence flows through the swarm's
/// global best during velocity updates. The personal best is a deep copy of the position that
/// produced it, never an alias of the working position.
#[derive(Clone, Serialize, Deserialize, Default)]
pub struct Particle {
    /// The position of the particle, along with its most recent evaluation.
    pub position: Point,
    /// The velocity of the particle.
    pub velocity: DVector<Float>,
    /// The best position of the particle (as measured by the minimum value of `fx`).
    pub best: Point,
}
impl Particle {
    /// Create a new particle at the given starting position with a velocity drawn uniformly from
    /// $`[-1, 1)`$ in each dimension. The personal best starts unset; the first evaluation always
    /// claims it.
    pub fn new(x0: &[Float], rng: &mut Rng) -> Self {
        let position = Point::from(x0);
        let velocity = generate_random_vector(x0.len(), -1.0, 1.0, rng);
        Self {
            best: Point {
                x: position.x.clone(),
                fx: None,
            },
            position,
            velocity,
        }
    }
    /// Compare the best position to another particle.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.best.total_cmp(&other.best)
    }
    /// Evaluate the cost function at the particle's current position and update the personal best
    /// if the new value strictly improves on it (or if no evaluation has happened yet).
    ///
    /// # Errors
    ///
    /// Returns an `Err(E)` if the evaluation fails. See [`CostFunction::evaluate`] for more
    /// information.
    pub fn evaluate<U, E>(
        &mut self,
        func: &dyn CostFunction<U, E>,
        user_data: &mut U,
    ) -> Result<(), E> {
        self.position.evaluate(func, user_data)?;
        if self.position.total_cmp(&self.best) == Ordering::Less {
            self.best = self.position.clone();
        }
        Ok(())
    }
    /// Update the particle's velocity, pulling it towards its personal best (weighted by `c1`)
    /// and the swarm's best known position (weighted by `c2`) while retaining a fraction `omega`
    /// of its previous velocity:
    ///
    /// ```math
    /// v_i^{t+1} = \omega v_i^t + c_1 r_{1,i}^{t+1}(p^t_i - x^t_i) + c_2 r_{2,i}^{t+1}(g^t - x^t_i)
    /// ```
    ///
    /// where $`r_1`$ and $`r_2`$ are fresh uniformly distributed random vectors in $`[0, 1)`$
    /// which keep the particles from collapsing onto a single deterministic trajectory.
    ///
    /// The particle must have been evaluated at least once before this is called, since the
    /// cognitive term pulls towards the personal best.
    pub fn update_velocity(
        &mut self,
        gbest: &DVector<Float>,
        omega: Float,
        c1: Float,
        c2: Float,
        rng: &mut Rng,
    ) {
        let dim = self.position.x.len();
        let rv1 = generate_random_vector(dim, 0.0, 1.0, rng);
        let rv2 = generate_random_vector(dim, 0.0, 1.0, rng);
        self.velocity = self.velocity.scale(omega)
            + rv1
                .component_mul(&(&self.best.x - &self.position.x))
                .scale(c1)
            + rv2.component_mul(&(gbest - &self.position.x)).scale(c2);
    }
    /// Step the particle's position along its velocity, clamping each coordinate into its bound.
    /// The velocity is not reflected or zeroed on collision. This resets the cached evaluation of
    /// the position.
    pub fn update_position(&mut self, bounds: &Bounds) {
        let new_position = bounds.clamp_vec(&(&self.position.x + &self.velocity));
        self.position.set_position(new_position);
    }
}

/// A swarm of particles along with the global best position found by any of them.
#[derive(Clone, Serialize, Deserialize, Default)]
pub struct Swarm {
    /// A list of the particles in the swarm.
    pub particles: Vec<Particle>,
    /// The best position found by any particle so far (unset until the first evaluation phase).
    pub gbest: Point,
    /// The per-dimension bounds of the search space.
    pub bounds: Bounds,
}

impl Swarm {
    /// Create a swarm of `n_particles` particles, every one starting at the *same* position `x0`.
    /// Only the randomly drawn velocities differ between particles, so all initial diversity
    /// comes from the first round of position updates.
    ///
    /// # Panics
    ///
    /// This method will panic if `n_particles` is zero or if the lengths of `x0` and `bounds`
    /// differ.
    pub fn new(x0: &[Float], bounds: Bounds, n_particles: usize, rng: &mut Rng) -> Self {
        assert!(n_particles > 0, "swarm needs at least one particle");
        assert_eq!(
            x0.len(),
            bounds.len(),
            "dimension of `x0` must match the number of bounds"
        );
        let particles = (0..n_particles).map(|_| Particle::new(x0, rng)).collect();
        Self {
            particles,
            gbest: Point::default(),
            bounds,
        }
    }
    /// The dimension of the search space.
    pub fn dimension(&self) -> usize {
        self.bounds.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_functions::Sphere;
    use nalgebra::dvector;

    fn unit_bounds(dim: usize) -> Bounds {
        vec![(-10.0, 10.0); dim].into()
    }

    #[test]
    fn test_particle_initialization() {
        let mut rng = Rng::with_seed(0);
        let x0 = [5.0, 5.0];
        let particle = Particle::new(&x0, &mut rng);
        assert_eq!(particle.position.x, dvector![5.0, 5.0]);
        assert!(particle.position.fx.is_none());
        assert!(particle.best.fx.is_none());
        assert_eq!(particle.velocity.len(), 2);
        assert!(particle.velocity.iter().all(|v| (-1.0..1.0).contains(v)));
    }

    #[test]
    fn test_first_evaluation_claims_personal_best() {
        let mut rng = Rng::with_seed(0);
        let mut particle = Particle::new(&[3.0, 4.0], &mut rng);
        particle.evaluate(&Sphere, &mut ()).unwrap();
        assert_eq!(particle.position.fx, Some(25.0));
        assert_eq!(particle.best.fx, Some(25.0));
        assert_eq!(particle.best.x, dvector![3.0, 4.0]);
    }

    #[test]
    fn test_personal_best_is_monotonically_non_increasing() {
        let mut rng = Rng::with_seed(0);
        let mut particle = Particle::new(&[3.0, 4.0], &mut rng);
        let mut best_scores = vec![];
        for x in [
            dvector![3.0, 4.0],
            dvector![1.0, 1.0],
            dvector![2.0, 2.0],
            dvector![0.0, 1.0],
            dvector![5.0, 5.0],
        ] {
            particle.position.set_position(x);
            particle.evaluate(&Sphere, &mut ()).unwrap();
            best_scores.push(particle.best.fx_checked());
        }
        assert!(best_scores.windows(2).all(|w| w[1] <= w[0]));
        assert_eq!(particle.best.fx, Some(1.0));
        assert_eq!(particle.best.x, dvector![0.0, 1.0]);
    }

    #[test]
    fn test_personal_best_updates_only_on_strict_improvement() {
        let mut rng = Rng::with_seed(0);
        let mut particle = Particle::new(&[1.0, 0.0], &mut rng);
        particle.evaluate(&Sphere, &mut ()).unwrap();
        // an equally good position elsewhere must not displace the recorded best
        particle.position.set_position(dvector![0.0, 1.0]);
        particle.evaluate(&Sphere, &mut ()).unwrap();
        assert_eq!(particle.best.x, dvector![1.0, 0.0]);
        assert_eq!(particle.best.fx, Some(1.0));
    }

    #[test]
    fn test_personal_best_is_a_deep_copy() {
        let mut rng = Rng::with_seed(0);
        let mut particle = Particle::new(&[1.0, 1.0], &mut rng);
        particle.evaluate(&Sphere, &mut ()).unwrap();
        particle.update_position(&unit_bounds(2));
        assert_eq!(particle.best.x, dvector![1.0, 1.0]);
        assert_ne!(particle.position.x, particle.best.x);
    }

    #[test]
    fn test_update_position_clamps_to_bounds() {
        let mut rng = Rng::with_seed(0);
        let mut particle = Particle::new(&[9.9, -9.9], &mut rng);
        particle.velocity = dvector![5.0, -5.0];
        particle.update_position(&unit_bounds(2));
        assert_eq!(particle.position.x, dvector![10.0, -10.0]);
        // velocity is untouched by the wall
        assert_eq!(particle.velocity, dvector![5.0, -5.0]);
        assert!(particle.position.fx.is_none());
    }

    #[test]
    fn test_degenerate_bound_pins_position() {
        let mut rng = Rng::with_seed(0);
        let bounds: Bounds = vec![(0.0, 0.0)].into();
        let mut particle = Particle::new(&[3.0], &mut rng);
        for _ in 0..5 {
            particle.update_position(&bounds);
            assert_eq!(particle.position.x[0], 0.0);
        }
    }

    #[test]
    fn test_update_velocity_moves_towards_bests() {
        let mut rng = Rng::with_seed(0);
        let mut particle = Particle::new(&[5.0, 5.0], &mut rng);
        particle.velocity = dvector![0.0, 0.0];
        particle.evaluate(&Sphere, &mut ()).unwrap();
        // with zero inertia and the personal best at the current position, the only pull left is
        // towards the global best
        let gbest = dvector![0.0, 0.0];
        particle.update_velocity(&gbest, 0.0, 1.0, 2.0, &mut rng);
        assert!(particle.velocity.iter().all(|v| *v <= 0.0));
    }

    #[test]
    fn test_swarm_starts_all_particles_at_x0() {
        let mut rng = Rng::with_seed(0);
        let swarm = Swarm::new(&[5.0, 5.0], unit_bounds(2), 10, &mut rng);
        assert_eq!(swarm.particles.len(), 10);
        assert_eq!(swarm.dimension(), 2);
        assert!(swarm.gbest.fx.is_none());
        for particle in &swarm.particles {
            assert_eq!(particle.position.x, dvector![5.0, 5.0]);
        }
        assert_ne!(swarm.particles[0].velocity, swarm.particles[1].velocity);
    }

    #[test]
    #[should_panic(expected = "at least one particle")]
    fn test_swarm_rejects_empty_swarm() {
        let mut rng = Rng::with_seed(0);
        let _ = Swarm::new(&[5.0], unit_bounds(1), 0, &mut rng);
    }

    #[test]
    #[should_panic(expected = "must match the number of bounds")]
    fn test_swarm_rejects_dimension_mismatch() {
        let mut rng = Rng::with_seed(0);
        let _ = Swarm::new(&[5.0, 5.0], unit_bounds(3), 5, &mut rng);
    }
}
