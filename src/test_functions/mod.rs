/// Module containing the Ackley function.
pub mod ackley;
/// Module containing the Rosenbrock function.
pub mod rosenbrock;
/// Module containing the sphere (sum of squares) function.
pub mod sphere;

pub use ackley::Ackley;
pub use rosenbrock::Rosenbrock;
pub use sphere::Sphere;
