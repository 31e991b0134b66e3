//! M/M/1: one server, unbounded population and capacity.
//!
//! Pure arithmetic over the closed forms; no iteration, no factorials.
//! As `lambda` approaches `mu` every quantity diverges. That is the
//! expected behavior of the model and is deliberately not special-cased
//! here; the stability check upstream refuses those inputs before this
//! solver runs.

use crate::model::{QueueMetrics, QueueParameters};

/// Solve the M/M/1 queue in closed form.
///
/// Precondition: `lambda < mu`, enforced upstream.
///
/// # Examples
/// ```
/// use steadystate::model::QueueParameters;
/// use steadystate::solvers::single_server;
///
/// let m = single_server::solve(&QueueParameters::new(2.0, 5.0, 1));
/// assert!((m.l - 2.0 / 3.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn solve(params: &QueueParameters) -> QueueMetrics {
    let lambda = params.lambda;
    let mu = params.mu;

    let rho = lambda / mu;
    let l = rho / (1.0 - rho);
    let lq = rho.powi(2) / (1.0 - rho);
    let w = 1.0 / (mu - lambda);
    let wq = lambda / (mu * (mu - lambda));
    let p0 = 1.0 - rho;

    QueueMetrics {
        rho,
        l,
        lq,
        w,
        wq,
        p0,
        lambda_eff: None,
    }
}
