//! Error types for steadystate.
//!
//! All failures are deterministic functions of the input: retrying with
//! identical parameters yields the identical failure, so nothing here is
//! retried internally. Errors propagate one level up and no partial
//! metrics record is ever returned.

use thiserror::Error;

/// Result type alias for steadystate operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Unified error type for all steadystate operations.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Traffic intensity at or above one for an unbounded population.
    ///
    /// The queue grows without bound, so no steady-state distribution
    /// exists and computation is refused rather than returning divergent
    /// or negative numbers.
    #[error(
        "system cannot reach steady state: traffic intensity rho = {rho:.4} >= 1 \
         with an unbounded population"
    )]
    Unstable {
        /// Offered load per unit of total service capacity.
        rho: f64,
    },

    /// A field required by the selected regime is missing or inconsistent.
    #[error("validation error: {message}")]
    Validation {
        /// Description of the violated requirement.
        message: String,
    },

    /// A parameter exceeds the double-precision reliability ceiling.
    ///
    /// Factorial and binomial growth lose precision in floating-point
    /// arithmetic well before overflow; the engine fails fast instead of
    /// returning silently-degraded metrics.
    #[error("{field} = {value} exceeds the supported ceiling of {ceiling}")]
    OutOfRange {
        /// Name of the offending parameter.
        field: &'static str,
        /// Rejected value.
        value: u32,
        /// Largest supported value.
        ceiling: u32,
    },

    /// External characterization collaborator failed.
    #[error("characterization failed: {0}")]
    Characterization(String),

    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Schema-level validation error.
    #[error("invalid parameters: {0}")]
    Invalid(#[from] validator::ValidationErrors),

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl EngineError {
    /// Create a validation error with a message.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a characterization error.
    #[must_use]
    pub fn characterization(message: impl Into<String>) -> Self {
        Self::Characterization(message.into())
    }

    /// Check whether retrying could possibly succeed.
    ///
    /// Only failures of external collaborators are retryable; every
    /// engine-side error is a deterministic function of the input.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Characterization(_) | Self::Io(_))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_unstable_display() {
        let err = EngineError::Unstable { rho: 1.0714 };
        let msg = err.to_string();
        assert!(msg.contains("steady state"));
        assert!(msg.contains("1.0714"));
    }

    #[test]
    fn test_validation_display() {
        let err = EngineError::validation("population (N) is required");
        let msg = err.to_string();
        assert!(msg.contains("validation error"));
        assert!(msg.contains("population (N) is required"));
    }

    #[test]
    fn test_out_of_range_display() {
        let err = EngineError::OutOfRange {
            field: "population",
            value: 500,
            ceiling: 170,
        };
        let msg = err.to_string();
        assert!(msg.contains("population = 500"));
        assert!(msg.contains("170"));
    }

    #[test]
    fn test_retryability() {
        assert!(!EngineError::Unstable { rho: 2.0 }.is_retryable());
        assert!(!EngineError::validation("missing").is_retryable());
        assert!(!EngineError::OutOfRange {
            field: "servers",
            value: 99,
            ceiling: 64,
        }
        .is_retryable());
        assert!(EngineError::characterization("upstream timeout").is_retryable());
    }

    #[test]
    fn test_error_debug() {
        let err = EngineError::validation("test");
        let debug = format!("{err:?}");
        assert!(debug.contains("Validation"));
    }
}
