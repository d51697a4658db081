use std::cmp::Ordering;
use std::sync::Arc;

use fastrand::Rng;
use parking_lot::RwLock;

use crate::{
    core::{Bounds, SwarmSummary},
    swarm::Swarm,
    traits::{observer::VerboseObserver, CostFunction, SwarmObserver},
    DVector, Float,
};

/// Particle Swarm Optimizer
///
/// The PSO algorithm involves an ensemble of particles which are aware of the best position found
/// by any particle in the swarm. Each iteration runs two phases: first every particle is
/// evaluated and the personal and global bests are updated, then every particle's velocity is
/// updated against the iteration's final global best before its position steps along the new
/// velocity (clamped to the bounds). The velocity update is
///
/// ```math
/// v_i^{t+1} = \omega v_i^t + c_1 r_{1,i}^{t+1}(p^t_i - x^t_i) + c_2 r_{2,i}^{t+1}(g^t - x^t_i)
/// ```
/// where $`r_1`$ and $`r_2`$ are uniformly distributed random vectors in $`[0,1)`$, $`\omega`$ is
/// an inertial weight parameter, and $`c_1`$ and $`c_2`$ are cognitive and social weights
/// respectively. See [^1] for more information.
///
/// The optimizer runs for a fixed number of iterations; it has no convergence criterion and no
/// early stopping. It makes no attempt to adapt its hyperparameters during a run, and it does not
/// guarantee finding the global optimum.
///
/// [^1]: [Houssein, E. H., Gad, A. G., Hussain, K., & Suganthan, P. N. (2021). Major Advances in Particle Swarm Optimization: Theory, Analysis, and Application. In Swarm and Evolutionary Computation (Vol. 63, p. 100868). Elsevier BV.](https://doi.org/10.1016/j.swevo.2021.100868)
#[derive(Clone)]
pub struct PSO {
    n_particles: usize,
    max_iterations: usize,
    omega: Float,
    c1: Float,
    c2: Float,
    rng: Rng,
    observers: Vec<Arc<RwLock<dyn SwarmObserver>>>,
}

impl PSO {
    /// Construct a new particle swarm optimizer with `n_particles` particles and a budget of
    /// `max_iterations` iterations, using the given random number generator for every stochastic
    /// draw (seed it for reproducible runs).
    ///
    /// # Panics
    ///
    /// This method will panic if `n_particles` is zero.
    pub fn new(n_particles: usize, max_iterations: usize, rng: Rng) -> Self {
        assert!(n_particles > 0, "swarm needs at least one particle");
        Self {
            n_particles,
            max_iterations,
            omega: 0.5,
            c1: 1.0,
            c2: 2.0,
            rng,
            observers: Vec::default(),
        }
    }
    /// Sets the inertial weight $`\omega`$, the fraction of previous velocity retained each
    /// update (default = `0.5`).
    ///
    /// # Panics
    ///
    /// This method will panic if $`\omega < 0`$.
    pub fn with_omega(mut self, value: Float) -> Self {
        assert!(value >= 0.0);
        self.omega = value;
        self
    }
    /// Sets the cognitive weight $`c_1`$ which controls the particle's tendency to move towards
    /// its personal best (default = `1.0`).
    ///
    /// # Panics
    ///
    /// This method will panic if $`c_1 < 0`$.
    pub fn with_c1(mut self, value: Float) -> Self {
        assert!(value >= 0.0);
        self.c1 = value;
        self
    }
    /// Sets the social weight $`c_2`$ which controls the particle's tendency to move towards the
    /// swarm's best known position (default = `2.0`).
    ///
    /// # Panics
    ///
    /// This method will panic if $`c_2 < 0`$.
    pub fn with_c2(mut self, value: Float) -> Self {
        assert!(value >= 0.0);
        self.c2 = value;
        self
    }
    /// Adds a single [`SwarmObserver`] to the optimizer. Observers are called at the start of
    /// each iteration, before that iteration's evaluation phase.
    pub fn with_observer(mut self, observer: Arc<RwLock<dyn SwarmObserver>>) -> Self {
        self.observers.push(observer);
        self
    }
    /// Registers a [`VerboseObserver`] which prints one progress line per iteration (off by
    /// default).
    pub fn verbose(self) -> Self {
        self.with_observer(VerboseObserver::build())
    }

    /// Minimize the given [`CostFunction`] over the `bounds`, starting every particle at `x0`.
    ///
    /// The loop runs exactly `max_iterations` times. Each iteration fully completes its
    /// evaluation phase (every particle evaluated, global best fully updated) before any particle
    /// updates its velocity, so velocity updates always see the iteration's final global best.
    /// With `max_iterations` of zero, no evaluation is performed at all and the summary's best
    /// point is unset.
    ///
    /// # Errors
    ///
    /// Returns an `Err(E)` if any evaluation fails, aborting the run with no partial result. See
    /// [`CostFunction::evaluate`] for more information.
    ///
    /// # Panics
    ///
    /// This method will panic if the lengths of `x0` and `bounds` differ.
    pub fn minimize<U, E>(
        &mut self,
        func: &dyn CostFunction<U, E>,
        x0: &[Float],
        bounds: &Bounds,
        user_data: &mut U,
    ) -> Result<SwarmSummary, E> {
        let mut swarm = Swarm::new(x0, bounds.clone(), self.n_particles, &mut self.rng);
        let mut n_f_evals = 0;
        for step in 0..self.max_iterations {
            for observer in &self.observers {
                observer.write().observe(step, &swarm);
            }
            for particle in &mut swarm.particles {
                particle.evaluate(func, user_data)?;
                n_f_evals += 1;
                if particle.best.total_cmp(&swarm.gbest) == Ordering::Less {
                    swarm.gbest = particle.best.clone();
                }
            }
            let gbest_x = swarm.gbest.x.clone();
            for particle in &mut swarm.particles {
                particle.update_velocity(&gbest_x, self.omega, self.c1, self.c2, &mut self.rng);
                particle.update_position(&swarm.bounds);
            }
        }
        Ok(SwarmSummary {
            x0: DVector::from_column_slice(x0),
            best: swarm.gbest,
            bounds: bounds.clone(),
            n_particles: self.n_particles,
            n_iterations: self.max_iterations,
            n_f_evals,
        })
    }
}
