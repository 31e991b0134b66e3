//! Closed-form steady-state solvers, one per population regime.
//!
//! No solver calls another. The single- and multi-server solvers assume
//! the stability precondition (`lambda < s * mu`) enforced upstream by
//! [`crate::stability::check`]; the finite-population solver is stable
//! by construction and skips that guard.

pub mod finite_population;
pub mod multi_server;
pub mod single_server;

pub use finite_population::{solve as solve_finite_population, state_probabilities};
pub use multi_server::solve as solve_multi_server;
pub use single_server::solve as solve_single_server;
