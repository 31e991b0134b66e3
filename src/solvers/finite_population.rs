//! M/M/s/N: finite-source (machine-repair) queue.
//!
//! Each of the `N` potential customers independently generates arrivals
//! at rate `lambda` only while it is not already in the system, so the
//! aggregate arrival rate shrinks as the system fills. The model is a
//! birth-death chain on `0..=N` and is stable by construction; no
//! stability guard applies.
//!
//! Unnormalized state weights, with `r = lambda / mu`:
//!
//! ```text
//! n <= s:  C(N, n) * r^n
//! n  > s:  C(N, n) * n! / (s! * s^(n-s)) * r^n
//! ```
//!
//! Reporting `W` and `Wq` against the raw `lambda` would overstate
//! throughput and break Little's law; both are derived from the
//! effective arrival rate `lambda_eff = lambda * (N - L)` instead.

use crate::combinatorics::{combinations, factorial};
use crate::error::{EngineError, EngineResult};
use crate::model::{QueueMetrics, QueueParameters};

/// Unnormalized weight of state `n` for a population `big_n`, `s` servers
/// and service ratio `r = lambda / mu`.
fn weight(big_n: u32, s: u32, r: f64, n: u32) -> f64 {
    let c = combinations(big_n, n);
    if n <= s {
        c * r.powi(n as i32)
    } else {
        let overflow_states = factorial(n) / (factorial(s) * f64::from(s).powi((n - s) as i32));
        c * overflow_states * r.powi(n as i32)
    }
}

/// Steady-state probabilities `p(0)..=p(N)`.
///
/// # Errors
///
/// Returns a validation error when `population` is absent; this solver
/// is the sole consumer of that field and has no infinite-population
/// fallback.
pub fn state_probabilities(params: &QueueParameters) -> EngineResult<Vec<f64>> {
    let big_n = params.population.ok_or_else(|| {
        EngineError::validation("population (N) is required for the finite-population model")
    })?;
    let s = params.servers;
    let r = params.lambda / params.mu;

    let weights: Vec<f64> = (0..=big_n).map(|n| weight(big_n, s, r, n)).collect();
    let total: f64 = weights.iter().sum();
    Ok(weights.iter().map(|w| w / total).collect())
}

/// Solve the M/M/s/N finite-source queue.
///
/// # Errors
///
/// Returns a validation error when `population` is absent.
///
/// # Examples
/// ```
/// use steadystate::model::QueueParameters;
/// use steadystate::solvers::finite_population;
///
/// let params = QueueParameters::new(0.25, 4.0, 7).with_population(100);
/// let m = finite_population::solve(&params)?;
/// assert!(m.lambda_eff.is_some());
/// # Ok::<(), steadystate::EngineError>(())
/// ```
pub fn solve(params: &QueueParameters) -> EngineResult<QueueMetrics> {
    let probabilities = state_probabilities(params)?;
    let big_n = probabilities.len() as u32 - 1;
    let s = params.servers;

    let p0 = probabilities[0];

    let l: f64 = probabilities
        .iter()
        .enumerate()
        .map(|(n, p)| n as f64 * p)
        .sum();

    // Customers beyond server capacity; empty when N == s.
    let lq: f64 = probabilities
        .iter()
        .enumerate()
        .skip(s as usize + 1)
        .map(|(n, p)| (n as f64 - f64::from(s)) * p)
        .sum();

    let lambda_eff = params.lambda * (f64::from(big_n) - l);
    let w = l / lambda_eff;
    let wq = lq / lambda_eff;
    let rho = lambda_eff / (f64::from(s) * params.mu);

    Ok(QueueMetrics {
        rho,
        l,
        lq,
        w,
        wq,
        p0,
        lambda_eff: Some(lambda_eff),
    })
}
