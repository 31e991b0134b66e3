//! M/M/s: several servers, unbounded population (Erlang-C family).
//!
//! The empty-system probability is computed term-by-term rather than
//! through a single large-factorial ratio, which bounds the rounding
//! error for moderate server counts. Factorial growth for large `s`
//! remains the accepted precision limit and is capped at parameter
//! validation.
//!
//! At `s = 1` the formulas degenerate algebraically to M/M/1; callers
//! dispatch that case to the single-server solver directly and skip the
//! factorial work, so the degeneration is only exercised by tests.

use crate::combinatorics::factorial;
use crate::model::{QueueMetrics, QueueParameters};

/// Solve the M/M/s queue via the Erlang-C probability-of-wait formulation.
///
/// Precondition: `lambda < s * mu`, enforced upstream.
#[must_use]
pub fn solve(params: &QueueParameters) -> QueueMetrics {
    let lambda = params.lambda;
    let mu = params.mu;
    let s = params.servers;
    let s_f = f64::from(s);

    let r = lambda / mu;
    let rho_total = lambda / (s_f * mu);

    // p0 = 1 / (sum_{n=0}^{s-1} r^n / n!  +  r^s / (s! (1 - rho)))
    let mut sum = 0.0;
    for n in 0..s {
        sum += r.powi(n as i32) / factorial(n);
    }
    let tail = r.powi(s as i32) / (factorial(s) * (1.0 - rho_total));
    let p0 = 1.0 / (sum + tail);

    let lq = p0 * r.powi(s as i32) * rho_total / (factorial(s) * (1.0 - rho_total).powi(2));
    let l = lq + r;
    let wq = lq / lambda;
    let w = wq + 1.0 / mu;

    QueueMetrics {
        rho: rho_total,
        l,
        lq,
        w,
        wq,
        p0,
        lambda_eff: None,
    }
}


#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod proptests {
    use super::*;
    use crate::solvers::single_server;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn matches_single_server_at_s_equals_one(
            mu in 0.1_f64..50.0,
            rho in 0.001_f64..0.99,
        ) {
            let params = QueueParameters::new(rho * mu, mu, 1);
            let multi = solve(&params);
            let single = single_server::solve(&params);

            prop_assert!((multi.l - single.l).abs() < 1e-9 * single.l.max(1.0));
            prop_assert!((multi.w - single.w).abs() < 1e-9 * single.w.max(1.0));
            prop_assert!((multi.wq - single.wq).abs() < 1e-9 * single.wq.max(1.0));
            prop_assert!((multi.p0 - single.p0).abs() < 1e-9);
        }

        #[test]
        fn invariants_hold_for_all_stable_inputs(
            mu in 0.1_f64..20.0,
            s in 1u32..=16,
            rho in 0.01_f64..0.95,
        ) {
            let lambda = rho * f64::from(s) * mu;
            let params = QueueParameters::new(lambda, mu, s);
            let m = solve(&params);

            prop_assert!(m.p0 > 0.0 && m.p0 <= 1.0);
            prop_assert!(m.lq >= 0.0);
            prop_assert!(m.lq <= m.l);
            prop_assert!(m.wq <= m.w);
            prop_assert!((m.w - m.wq - 1.0 / mu).abs() < 1e-9 * m.w.max(1.0));
            // Little's law under the raw arrival rate.
            prop_assert!((m.lq - lambda * m.wq).abs() < 1e-9 * m.lq.max(1.0));
        }
    }
}
