//! Narrative characterization of an analyzed system.
//!
//! The characterization is produced by an external collaborator (for
//! example a generative-text service) after the metrics are computed.
//! The engine only requires "compute metrics before combining": the
//! collaborator is modeled as a trait so implementations can own their
//! transport, timeout, retry and cancellation policy without the engine
//! knowing about any of it. A deterministic template implementation is
//! built in for offline use and testing.

use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::model::{QueueMetrics, QueueParameters};

/// Qualitative description of a queueing system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemCharacterization {
    /// Formal model name, e.g. `M/M/1` or `M/M/7//100`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Mathematical assumptions behind the model.
    pub assumptions: Vec<String>,
    /// Real-world settings the model fits.
    pub applications: Vec<String>,
    /// Queue discipline.
    pub discipline: String,
    /// Narrative explanation of the configuration's behavior.
    pub explanation: String,
}

/// External collaborator producing a [`SystemCharacterization`].
///
/// Implementations backed by remote services should treat the call as
/// cancellable and retryable on their side and surface terminal
/// failures as [`crate::EngineError::Characterization`]; the engine
/// never retries on its own.
pub trait Characterize {
    /// Characterize an analyzed system.
    ///
    /// # Errors
    ///
    /// Returns an error when the collaborator cannot produce a
    /// characterization.
    fn characterize(
        &self,
        params: &QueueParameters,
        metrics: &QueueMetrics,
    ) -> EngineResult<SystemCharacterization>;
}

/// Deterministic, dependency-free characterizer.
///
/// Derives the narrative from the parameter record alone, which keeps
/// the crate fully offline while exercising the same seam a generative
/// collaborator would plug into.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateCharacterizer;

impl Characterize for TemplateCharacterizer {
    fn characterize(
        &self,
        params: &QueueParameters,
        metrics: &QueueMetrics,
    ) -> EngineResult<SystemCharacterization> {
        let finite = params.population.is_some();

        let mut assumptions = vec![
            "Poisson arrivals and exponential service times (birth-death process)".to_string(),
            format!(
                "{} identical server{} drawing from a single shared queue",
                params.servers,
                if params.servers == 1 { "" } else { "s" }
            ),
        ];
        if let Some(n) = params.population {
            assumptions.push(format!(
                "Bounded calling population of {n}; customers inside the system generate no new arrivals"
            ));
        } else {
            assumptions.push(
                "Unbounded calling population with a state-independent arrival rate".to_string(),
            );
        }

        let applications = if finite {
            vec![
                "Machine pools served by a fixed crew of repair technicians".to_string(),
                "Support desks covering a known set of licensed workstations".to_string(),
            ]
        } else {
            vec![
                "Walk-in service counters with an open-ended customer stream".to_string(),
                "Request handling in shared network or compute services".to_string(),
            ]
        };

        let s = params.servers;
        let plural = if s == 1 { "" } else { "s" };
        let rho = metrics.rho;
        let explanation = if let Some(n) = params.population {
            format!(
                "With a population of {n} and {s} server{plural}, throughput is governed by the \
                 effective arrival rate: customers already in the system stop generating demand, \
                 so the realized load ({rho:.4}) stays below the nominal offered load. Adding \
                 servers shortens the wait until the population itself becomes the bottleneck."
            )
        } else {
            format!(
                "With an unbounded population and {s} server{plural}, the system operates at a \
                 utilization of {rho:.4}. Waiting time grows sharply as utilization approaches \
                 one, so capacity decisions trade server idleness against queue length."
            )
        };

        Ok(SystemCharacterization {
            kind: params.kendall_label(),
            assumptions,
            applications,
            discipline: "FIFO".to_string(),
            explanation,
        })
    }
}
