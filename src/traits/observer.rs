use std::sync::Arc;

use parking_lot::RwLock;

use crate::{
    core::Point,
    swarm::{Particle, Swarm},
    Float,
};

/// A trait which holds an [`observe`](`SwarmObserver::observe`) function that can be used to watch
/// the state of a [`Swarm`] during an optimization.
///
/// Observers are called once per iteration *before* the evaluation phase, so they see the best
/// known result prior to that iteration's evaluations. Observers cannot terminate a run;
/// termination is purely iteration-count based.
pub trait SwarmObserver {
    /// A function that is called at the start of every iteration of the
    /// [`PSO`](`crate::swarm::PSO`) optimizer.
    fn observe(&mut self, step: usize, swarm: &Swarm);
}

/// An observer which prints one progress line per iteration, reporting the iteration index and
/// the best score known before that iteration's evaluations (`NaN` until the first evaluation
/// phase has completed).
pub struct VerboseObserver;
impl VerboseObserver {
    /// Finalize the observer by wrapping it in an [`Arc`] and [`RwLock`].
    pub fn build() -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(Self))
    }
}
impl SwarmObserver for VerboseObserver {
    fn observe(&mut self, step: usize, swarm: &Swarm) {
        println!(
            "iter: {:>4}, best solution: {:>10.6}",
            step,
            swarm.gbest.fx.unwrap_or(Float::NAN)
        );
    }
}

/// An observer which stores the swarm particles' history as well as the history of global best
/// positions, snapshotted at the start of each iteration.
#[derive(Default, Clone)]
pub struct TrackingObserver {
    /// The history of the swarm particles
    pub history: Vec<Vec<Particle>>,
    /// The history of the best position in the swarm
    pub best_history: Vec<Point>,
}
impl TrackingObserver {
    /// Finalize the observer by wrapping it in an [`Arc`] and [`RwLock`].
    pub fn build() -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(Self::default()))
    }
}
impl SwarmObserver for TrackingObserver {
    fn observe(&mut self, _step: usize, swarm: &Swarm) {
        self.history.push(swarm.particles.clone());
        self.best_history.push(swarm.gbest.clone());
    }
}
