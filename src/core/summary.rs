use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{
    core::{Bounds, Point},
    DVector, Float,
};

/// A summary containing all information about the result of a swarm optimization.
///
/// If the optimizer ran for zero iterations, no evaluation was ever performed and
/// [`SwarmSummary::best`] is an unset [`Point`] (its position is empty and its value displays as
/// `NaN`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SwarmSummary {
    /// The initial position shared by every particle in the swarm.
    pub x0: DVector<Float>,
    /// The best position found by any particle, along with its evaluation.
    pub best: Point,
    /// The bounds used for the optimization.
    pub bounds: Bounds,
    /// The number of particles in the swarm.
    pub n_particles: usize,
    /// The number of iterations the swarm was run for.
    pub n_iterations: usize,
    /// The total number of function evaluations performed.
    pub n_f_evals: usize,
}

impl Display for SwarmSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let title = format!(
            "╒═══════════════════════════════════════════════════════════════════════════════╕
│{:^79}│",
            "SWARM RESULTS",
        );
        let status = format!(
            "╞══════════════════════╤═══════════════════╤═════════════════╤══════════════════╡
│ f(x): {:>+14.3E} │ particles: {:>6} │ iters: {:>8} │ f evals: {:>7} │",
            self.best.fx.unwrap_or(Float::NAN),
            self.n_particles,
            self.n_iterations,
            self.n_f_evals,
        );
        let initial = format!(
            "├──────────────────────┴───────────────────┴─────────────────┴──────────────────┤
│ x0: {:<73.73} │",
            format!("{:?}", self.x0.as_slice()),
        );
        let header = "├───────╥──────────────╥──────────────┬──────────────┬──────────────┬───────────┤
│ Par # ║        Value ║      Initial │       -Bound │       +Bound │ At Limit? │
├───────╫──────────────╫──────────────┼──────────────┼──────────────┼───────────┤"
            .to_string();
        let mut res_list: Vec<String> = vec![];
        for i in 0..self.x0.len() {
            let value = self.best.x.get(i).copied().unwrap_or(Float::NAN);
            let row = format!(
                "│ {:>5} ║ {:>+12.3E} ║ {:>+12.3E} │ {:>+12.3E} │ {:>+12.3E} │ {:^9} │",
                i,
                value,
                self.x0[i],
                self.bounds[i].lower(),
                self.bounds[i].upper(),
                if self.bounds[i].at_bound(value) {
                    "yes"
                } else {
                    ""
                }
            );
            res_list.push(row);
        }
        let bottom =
            "└───────╨──────────────╨──────────────┴──────────────┴──────────────┴───────────┘"
                .to_string();
        let out = [title, status, initial, header, res_list.join("\n"), bottom].join("\n");
        write!(f, "{}", out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::dvector;

    #[test]
    fn test_summary_display() {
        let summary = SwarmSummary {
            x0: dvector![5.0, 5.0],
            best: Point {
                x: dvector![0.1, -0.2],
                fx: Some(0.05),
            },
            bounds: vec![(-10.0, 10.0), (-10.0, 10.0)].into(),
            n_particles: 15,
            n_iterations: 30,
            n_f_evals: 450,
        };
        let s = format!("{}", summary);
        assert!(s.contains("SWARM RESULTS"));
        assert!(s.contains("f evals:"));
        assert!(s.contains("450"));
        assert_eq!(s.lines().count(), 12);
    }

    #[test]
    fn test_summary_display_with_unset_best() {
        let summary = SwarmSummary {
            x0: dvector![1.0],
            best: Point::default(),
            bounds: vec![(-1.0, 1.0)].into(),
            n_particles: 5,
            n_iterations: 0,
            n_f_evals: 0,
        };
        let s = format!("{}", summary);
        assert!(s.contains("NaN"));
    }
}
