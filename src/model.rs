//! Parameter and metrics records shared by all solvers.
//!
//! Both records are value objects: constructed fresh per analysis
//! request, never mutated, never shared across calls. Serialized field
//! names follow the conventional queueing-theory symbols (`L`, `Lq`,
//! `W`, `Wq`) so reports remain readable to operations-research users.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::combinatorics::MAX_FACTORIAL_ARG;
use crate::error::{EngineError, EngineResult};

/// Largest supported server count.
///
/// `s!` appears directly in the Erlang-C denominator; past a few dozen
/// servers the factorial magnitude starts eroding the summation's
/// precision even though it is still representable.
pub const MAX_SERVERS: u32 = 64;

/// Largest supported finite population.
///
/// The machine-repair state weights evaluate `n!` for every queue state
/// up to `N`, so `N` is capped where raw factorials stay finite.
pub const MAX_POPULATION: u32 = MAX_FACTORIAL_ARG;

/// Input record for one analysis request.
///
/// `lambda` is the arrival rate per potential customer and `mu` the
/// service rate per server. `capacity` is carried for the input contract
/// but unused by the current solvers; `population`, when present,
/// selects the finite-population regime. `kendall` echoes the raw
/// notation the request came from and never influences solver choice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct QueueParameters {
    /// Arrival rate per potential customer (must be positive).
    pub lambda: f64,

    /// Service rate per server (must be positive).
    pub mu: f64,

    /// Number of parallel servers.
    #[validate(range(min = 1))]
    pub servers: u32,

    /// System capacity `K`. Part of the input contract, currently unused.
    #[validate(range(min = 1))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,

    /// Total potential-customer population `N`.
    #[validate(range(min = 1))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub population: Option<u32>,

    /// Raw Kendall notation string, diagnostic echo only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kendall: Option<String>,
}

impl QueueParameters {
    /// Create parameters for an infinite-population system.
    #[must_use]
    pub const fn new(lambda: f64, mu: f64, servers: u32) -> Self {
        Self {
            lambda,
            mu,
            servers,
            capacity: None,
            population: None,
            kendall: None,
        }
    }

    /// Set the finite population size `N`.
    #[must_use]
    pub const fn with_population(mut self, population: u32) -> Self {
        self.population = Some(population);
        self
    }

    /// Set the system capacity `K`.
    #[must_use]
    pub const fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Attach the raw Kendall notation the request came from.
    #[must_use]
    pub fn with_kendall(mut self, notation: impl Into<String>) -> Self {
        self.kendall = Some(notation.into());
        self
    }

    /// Kendall label for this parameter set.
    ///
    /// Echoes the raw notation when one was supplied, otherwise derives
    /// `M/M/s` or `M/M/s//N` from the structured fields.
    #[must_use]
    pub fn kendall_label(&self) -> String {
        if let Some(raw) = &self.kendall {
            return raw.clone();
        }
        match self.population {
            Some(n) => format!("M/M/{}//{n}", self.servers),
            None => format!("M/M/{}", self.servers),
        }
    }

    /// Run schema and semantic validation.
    ///
    /// # Errors
    ///
    /// Returns an error if any field violates its range, if a rate is
    /// non-positive or non-finite, if the population is smaller than the
    /// server count, or if a value exceeds the precision ceiling.
    pub fn ensure_valid(&self) -> EngineResult<()> {
        self.validate()?;
        self.validate_semantic()
    }

    /// Semantic constraints beyond what the schema can express.
    fn validate_semantic(&self) -> EngineResult<()> {
        if !(self.lambda > 0.0 && self.lambda.is_finite()) {
            return Err(EngineError::validation(
                "arrival rate (lambda) must be positive and finite",
            ));
        }
        if !(self.mu > 0.0 && self.mu.is_finite()) {
            return Err(EngineError::validation(
                "service rate (mu) must be positive and finite",
            ));
        }
        if self.servers > MAX_SERVERS {
            return Err(EngineError::OutOfRange {
                field: "servers",
                value: self.servers,
                ceiling: MAX_SERVERS,
            });
        }
        if let Some(n) = self.population {
            if n > MAX_POPULATION {
                return Err(EngineError::OutOfRange {
                    field: "population",
                    value: n,
                    ceiling: MAX_POPULATION,
                });
            }
            if n < self.servers {
                return Err(EngineError::validation(format!(
                    "population (N = {n}) must be at least the server count (s = {})",
                    self.servers
                )));
            }
        }
        Ok(())
    }
}

/// Steady-state performance metrics for one analysis request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueMetrics {
    /// Utilization. For infinite populations this is the offered load
    /// per unit of capacity; for finite populations it is derived from
    /// the effective arrival rate.
    pub rho: f64,

    /// Mean number of customers in the system.
    #[serde(rename = "L")]
    pub l: f64,

    /// Mean number of customers waiting in the queue.
    #[serde(rename = "Lq")]
    pub lq: f64,

    /// Mean time in the system.
    #[serde(rename = "W")]
    pub w: f64,

    /// Mean time waiting in the queue.
    #[serde(rename = "Wq")]
    pub wq: f64,

    /// Probability the system is empty.
    pub p0: f64,

    /// Effective arrival rate, present only for finite-population results.
    #[serde(rename = "lambdaEff", default, skip_serializing_if = "Option::is_none")]
    pub lambda_eff: Option<f64>,
}

impl QueueMetrics {
    /// Expected number of customers currently in service, `L - Lq`.
    #[must_use]
    pub fn expected_in_service(&self) -> f64 {
        self.l - self.lq
    }
}

/// Population regime, selected once at the boundary.
///
/// Makes the three-way dispatch explicit instead of being inferred from
/// which optional fields happen to be populated at each call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    /// One server, unbounded population (M/M/1).
    SingleServer,
    /// Several servers, unbounded population (M/M/s).
    MultiServer,
    /// Bounded potential-customer population (M/M/s/N).
    FinitePopulation,
}

impl Regime {
    /// Select the regime for a parameter record.
    ///
    /// A present `population` always wins; otherwise the server count
    /// decides between the single- and multi-server solvers.
    #[must_use]
    pub const fn select(params: &QueueParameters) -> Self {
        match (params.population, params.servers) {
            (Some(_), _) => Self::FinitePopulation,
            (None, 1) => Self::SingleServer,
            (None, _) => Self::MultiServer,
        }
    }

    /// Whether the stability check applies to this regime.
    ///
    /// Only unbounded populations can grow without limit; the finite
    /// model is stable by construction.
    #[must_use]
    pub const fn requires_stability_check(self) -> bool {
        !matches!(self, Self::FinitePopulation)
    }
}
