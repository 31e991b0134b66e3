//! # steadystate
//!
//! Deterministic steady-state analysis of Markovian queueing systems.
//!
//! The engine computes closed-form performance metrics for birth-death
//! queues under two population regimes:
//!
//! - **Infinite population**: the classic M/M/1 and M/M/s (Erlang-C)
//!   models, guarded by a stability check on the traffic intensity.
//! - **Finite population**: the M/M/s/N machine-repair model, where a
//!   bounded pool of customers generates arrivals only while outside
//!   the system.
//!
//! Every solver is a pure, synchronous function of a parameter record.
//! There is no simulation, no transient analysis and no shared state;
//! a fresh [`QueueMetrics`](model::QueueMetrics) value is produced per
//! call and the caller owns it outright.
//!
//! ## Example
//!
//! ```rust
//! use steadystate::prelude::*;
//!
//! // A bank with a single teller: M/M/1.
//! let params = QueueParameters::new(2.0, 5.0, 1);
//! let metrics = steadystate::analyze(&params)?;
//!
//! assert!((metrics.rho - 0.4).abs() < 1e-12);
//! assert!((metrics.p0 - 0.6).abs() < 1e-12);
//! # Ok::<(), steadystate::EngineError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::suboptimal_flops,  // Formulas are written as published, not FMA-optimal
    clippy::imprecise_flops,   // Numerical code choices are intentional
    clippy::missing_const_for_fn
)]

pub mod analysis;
pub mod characterization;
pub mod cli;
pub mod combinatorics;
pub mod config;
pub mod error;
pub mod kendall;
pub mod model;
pub mod solvers;
pub mod stability;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::analysis::{analyze, analyze_with, AnalysisReport};
    pub use crate::characterization::{Characterize, SystemCharacterization, TemplateCharacterizer};
    pub use crate::config::ScenarioConfig;
    pub use crate::error::{EngineError, EngineResult};
    pub use crate::kendall::KendallNotation;
    pub use crate::model::{QueueMetrics, QueueParameters, Regime};
}

/// Re-export for public API.
pub use analysis::{analyze, analyze_with};
pub use error::{EngineError, EngineResult};
