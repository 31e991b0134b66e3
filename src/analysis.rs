//! Analysis boundary: validation, regime dispatch and report assembly.
//!
//! Exactly one solver runs per request. The regime is selected once,
//! up front, from the parameter record; infinite-population regimes
//! pass through the stability guard first, while the finite-population
//! solver skips it.

use serde::{Deserialize, Serialize};

use crate::characterization::{Characterize, SystemCharacterization};
use crate::error::EngineResult;
use crate::model::{QueueMetrics, QueueParameters, Regime};
use crate::solvers::{finite_population, multi_server, single_server};
use crate::stability;

/// Combined response record: parameters echoed back, computed metrics
/// and the optional external characterization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// The parameters the analysis ran with.
    pub parameters: QueueParameters,
    /// Computed steady-state metrics.
    pub metrics: QueueMetrics,
    /// Narrative characterization, when one was requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub characterization: Option<SystemCharacterization>,
    /// Whether the system reached steady state. Always true for a
    /// successful analysis; unstable systems fail instead.
    #[serde(rename = "isStable")]
    pub stable: bool,
}

/// Compute steady-state metrics for a parameter record.
///
/// Validates the parameters, selects the regime, runs the stability
/// check where it applies and invokes exactly one solver.
///
/// # Errors
///
/// Returns a validation error for inconsistent parameters, an
/// out-of-range error past the precision ceilings, or an instability
/// error when an unbounded-population system has `rho >= 1`.
///
/// # Examples
/// ```
/// use steadystate::model::QueueParameters;
///
/// let metrics = steadystate::analyze(&QueueParameters::new(0.25, 4.0, 7))?;
/// assert!(metrics.rho < 0.01);
/// # Ok::<(), steadystate::EngineError>(())
/// ```
pub fn analyze(params: &QueueParameters) -> EngineResult<QueueMetrics> {
    params.ensure_valid()?;

    let regime = Regime::select(params);
    if regime.requires_stability_check() {
        stability::check(params)?;
    }

    match regime {
        Regime::FinitePopulation => finite_population::solve(params),
        Regime::SingleServer => Ok(single_server::solve(params)),
        Regime::MultiServer => Ok(multi_server::solve(params)),
    }
}

/// Compute metrics and combine them with an external characterization.
///
/// Metrics are always computed first; the collaborator then receives
/// both the parameters and the finished metrics record. Its failure
/// fails the whole analysis, but only after no partial metrics can
/// leak out.
///
/// # Errors
///
/// Returns any error from [`analyze`] or from the characterizer.
pub fn analyze_with<C: Characterize>(
    params: &QueueParameters,
    characterizer: &C,
) -> EngineResult<AnalysisReport> {
    let metrics = analyze(params)?;
    let characterization = characterizer.characterize(params, &metrics)?;

    Ok(AnalysisReport {
        parameters: params.clone(),
        metrics,
        characterization: Some(characterization),
        stable: true,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::characterization::TemplateCharacterizer;
    use crate::error::EngineError;

    #[test]
    fn test_dispatch_single_server() {
        let metrics = analyze(&QueueParameters::new(2.0, 5.0, 1)).unwrap();
        assert!((metrics.rho - 0.4).abs() < 1e-12);
        assert!(metrics.lambda_eff.is_none());
    }

    #[test]
    fn test_dispatch_multi_server() {
        let metrics = analyze(&QueueParameters::new(0.25, 4.0, 7)).unwrap();
        // Total utilization, not per-server rho = lambda / mu.
        assert!((metrics.rho - 0.25 / 28.0).abs() < 1e-12);
        assert!(metrics.lambda_eff.is_none());
    }

    #[test]
    fn test_dispatch_finite_population() {
        let params = QueueParameters::new(0.25, 4.0, 7).with_population(100);
        let metrics = analyze(&params).unwrap();
        assert!(metrics.lambda_eff.is_some());
    }

    #[test]
    fn test_unstable_system_is_refused() {
        let err = analyze(&QueueParameters::new(30.0, 4.0, 7)).unwrap_err();
        assert!(matches!(err, EngineError::Unstable { .. }));
    }

    #[test]
    fn test_finite_population_skips_stability_check() {
        // rho would be ~1.07 with an unbounded population; the bounded
        // pool keeps the chain ergodic regardless.
        let params = QueueParameters::new(30.0, 4.0, 7).with_population(10);
        let metrics = analyze(&params).unwrap();
        assert!(metrics.l <= 10.0);
        assert!(metrics.rho < 1.0);
    }

    #[test]
    fn test_invalid_parameters_are_refused_before_solving() {
        let err = analyze(&QueueParameters::new(-1.0, 4.0, 7)).unwrap_err();
        assert!(matches!(err, EngineError::Validation { .. }));
    }

    #[test]
    fn test_report_assembly() {
        let params = QueueParameters::new(0.25, 4.0, 7).with_population(100);
        let report = analyze_with(&params, &TemplateCharacterizer).unwrap();

        assert!(report.stable);
        assert_eq!(report.parameters, params);
        let c = report.characterization.unwrap();
        assert_eq!(c.kind, "M/M/7//100");
    }

    #[test]
    fn test_report_serialization_contract() {
        let params = QueueParameters::new(2.0, 5.0, 1);
        let report = analyze_with(&params, &TemplateCharacterizer).unwrap();
        let json = serde_json::to_string(&report).unwrap();

        assert!(json.contains("\"isStable\":true"));
        assert!(json.contains("\"metrics\""));
        assert!(json.contains("\"parameters\""));
    }
}
