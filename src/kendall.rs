//! Kendall notation normalization.
//!
//! Parses strings such as `M/M/7//100` into structured fields following
//! the `A/S/s/K/N` positional convention. This is input normalization
//! only: the arrival and service letters are echoed verbatim and never
//! influence solver selection, which depends solely on the structured
//! parameter record.

use serde::{Deserialize, Serialize};

use crate::model::QueueParameters;

/// Structured view of a Kendall notation string.
///
/// Parsing is lenient in the same way interactive input is: a missing
/// or unparsable server segment defaults to 1, and empty trailing
/// segments (as in `M/M/7//100`, where `K` is omitted) yield `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KendallNotation {
    /// Arrival-process letter, echoed verbatim.
    pub arrivals: String,
    /// Service-process letter, echoed verbatim.
    pub service: String,
    /// Server count `s`, defaulting to 1.
    pub servers: u32,
    /// System capacity `K`, when given.
    pub capacity: Option<u32>,
    /// Population size `N`, when given.
    pub population: Option<u32>,
    /// The raw notation as written.
    pub raw: String,
}

impl KendallNotation {
    /// Parse a notation string by splitting on `/`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let parts: Vec<&str> = raw.split('/').collect();
        let segment = |i: usize| parts.get(i).copied().unwrap_or("");

        Self {
            arrivals: segment(0).trim().to_string(),
            service: segment(1).trim().to_string(),
            servers: segment(2).trim().parse().ok().filter(|s| *s > 0).unwrap_or(1),
            capacity: segment(3).trim().parse().ok(),
            population: segment(4).trim().parse().ok(),
            raw: raw.to_string(),
        }
    }

    /// Merge the notation with explicit rates into a parameter record.
    ///
    /// An absent capacity falls back to the population size, matching
    /// the convention that `M/M/s//N` denotes a system whose capacity is
    /// bounded by its calling population.
    #[must_use]
    pub fn into_parameters(self, lambda: f64, mu: f64) -> QueueParameters {
        QueueParameters {
            lambda,
            mu,
            servers: self.servers,
            capacity: self.capacity.or(self.population),
            population: self.population,
            kendall: Some(self.raw),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::model::Regime;

    #[test]
    fn test_parse_finite_population_notation() {
        let k = KendallNotation::parse("M/M/7//100");
        assert_eq!(k.arrivals, "M");
        assert_eq!(k.service, "M");
        assert_eq!(k.servers, 7);
        assert_eq!(k.capacity, None);
        assert_eq!(k.population, Some(100));
    }

    #[test]
    fn test_parse_plain_multi_server_notation() {
        let k = KendallNotation::parse("M/M/3");
        assert_eq!(k.servers, 3);
        assert_eq!(k.capacity, None);
        assert_eq!(k.population, None);
    }

    #[test]
    fn test_parse_with_capacity() {
        let k = KendallNotation::parse("M/M/2/10");
        assert_eq!(k.servers, 2);
        assert_eq!(k.capacity, Some(10));
        assert_eq!(k.population, None);
    }

    #[test]
    fn test_unparsable_servers_default_to_one() {
        assert_eq!(KendallNotation::parse("M/M").servers, 1);
        assert_eq!(KendallNotation::parse("M/M/x").servers, 1);
        assert_eq!(KendallNotation::parse("M/M/0").servers, 1);
        assert_eq!(KendallNotation::parse("").servers, 1);
    }

    #[test]
    fn test_letters_do_not_drive_solver_selection() {
        // The letters are echoed, not interpreted: a G/G notation still
        // selects by the structured fields alone.
        let params = KendallNotation::parse("G/G/2").into_parameters(1.0, 3.0);
        assert_eq!(Regime::select(&params), Regime::MultiServer);
    }

    #[test]
    fn test_capacity_falls_back_to_population() {
        let params = KendallNotation::parse("M/M/7//100").into_parameters(0.25, 4.0);
        assert_eq!(params.capacity, Some(100));
        assert_eq!(params.population, Some(100));
        assert_eq!(params.kendall.as_deref(), Some("M/M/7//100"));
    }

    #[test]
    fn test_explicit_capacity_is_kept() {
        let params = KendallNotation::parse("M/M/2/50/100").into_parameters(0.25, 4.0);
        assert_eq!(params.capacity, Some(50));
        assert_eq!(params.population, Some(100));
    }

    #[test]
    fn test_roundtrip_through_parameters() {
        let params = KendallNotation::parse("M/M/7//100").into_parameters(0.25, 4.0);
        assert_eq!(params.kendall_label(), "M/M/7//100");
    }
}
