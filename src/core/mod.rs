/// [`Bound`] and [`Bounds`] types for limiting the search space.
pub mod bound;
/// [`Point`] type for defining an evaluated position in the parameter space.
pub mod point;
/// [`SwarmSummary`] type for the result of an optimization.
pub mod summary;

pub use bound::{Bound, Bounds};
pub use point::Point;
pub use summary::SwarmSummary;
