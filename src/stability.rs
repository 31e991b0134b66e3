//! Stability guard for infinite-population regimes.
//!
//! An unbounded-population queue only has a steady state when arriving
//! work consumes strictly less than the total service capacity. The
//! finite-population solver never calls this: a bounded pool cannot
//! grow without limit, so it is stable by construction.

use crate::error::{EngineError, EngineResult};
use crate::model::QueueParameters;

/// Check steady-state reachability and return the traffic intensity.
///
/// Computes `rho = lambda / (servers * mu)` and refuses the analysis
/// when `rho >= 1`. Must run before the single- or multi-server solver
/// is invoked; both assume the precondition and would otherwise return
/// divergent or negative metrics.
///
/// # Errors
///
/// Returns [`EngineError::Unstable`] when `rho >= 1`.
///
/// # Examples
/// ```
/// use steadystate::model::QueueParameters;
/// use steadystate::stability;
///
/// let rho = stability::check(&QueueParameters::new(0.25, 4.0, 7))?;
/// assert!(rho < 0.01);
/// # Ok::<(), steadystate::EngineError>(())
/// ```
pub fn check(params: &QueueParameters) -> EngineResult<f64> {
    let rho = params.lambda / (f64::from(params.servers) * params.mu);
    if rho >= 1.0 {
        return Err(EngineError::Unstable { rho });
    }
    Ok(rho)
}
