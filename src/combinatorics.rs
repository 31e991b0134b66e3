//! Combinatorial primitives for the finite-population solver.
//!
//! Both functions operate in `f64` because their results feed straight
//! into floating-point state-probability products. Intermediate values
//! are kept bounded: `combinations` multiplies incrementally instead of
//! dividing two large factorials, which would overflow double precision
//! for populations in the low hundreds.

/// Largest `n` for which `factorial(n)` is finite in double precision.
///
/// `171!` exceeds `f64::MAX`, so any formula that evaluates a raw
/// factorial is unreliable past this point. Parameter validation uses
/// this as the population ceiling.
pub const MAX_FACTORIAL_ARG: u32 = 170;

/// Iterative factorial `n!`, returning 1 for `n <= 1`.
///
/// # Examples
/// ```
/// use steadystate::combinatorics::factorial;
/// assert!((factorial(0) - 1.0).abs() < 1e-12);
/// assert!((factorial(5) - 120.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn factorial(n: u32) -> f64 {
    let mut res = 1.0;
    for i in 2..=n {
        res *= f64::from(i);
    }
    res
}

/// Binomial coefficient `C(n, k)` as a float.
///
/// Returns 0 when `k > n` and 1 at the edges. Uses the smaller of `k`
/// and `n - k` and accumulates `res = res * (n - i + 1) / i`, keeping
/// intermediates near the magnitude of the result instead of routing
/// through two near-overflow factorials.
///
/// # Examples
/// ```
/// use steadystate::combinatorics::combinations;
/// assert!((combinations(5, 2) - 10.0).abs() < 1e-12);
/// assert!((combinations(100, 0) - 1.0).abs() < 1e-12);
/// assert!(combinations(3, 7).abs() < 1e-12);
/// ```
#[must_use]
pub fn combinations(n: u32, k: u32) -> f64 {
    if k > n {
        return 0.0;
    }
    if k == 0 || k == n {
        return 1.0;
    }
    let k = k.min(n - k);
    let mut res = 1.0;
    for i in 1..=k {
        res = res * f64::from(n - i + 1) / f64::from(i);
    }
    res
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_factorial_base_cases() {
        assert!((factorial(0) - 1.0).abs() < f64::EPSILON);
        assert!((factorial(1) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_factorial_known_values() {
        assert!((factorial(4) - 24.0).abs() < f64::EPSILON);
        assert!((factorial(7) - 5040.0).abs() < f64::EPSILON);
        assert!((factorial(12) - 479_001_600.0).abs() < 1.0);
    }

    #[test]
    fn test_factorial_ceiling_is_finite() {
        assert!(factorial(MAX_FACTORIAL_ARG).is_finite());
        // One past the ceiling saturates to infinity.
        assert!(factorial(MAX_FACTORIAL_ARG + 1).is_infinite());
    }

    #[test]
    fn test_combinations_edges() {
        assert!((combinations(10, 0) - 1.0).abs() < f64::EPSILON);
        assert!((combinations(10, 10) - 1.0).abs() < f64::EPSILON);
        assert!(combinations(4, 5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_combinations_known_values() {
        assert!((combinations(6, 3) - 20.0).abs() < 1e-9);
        assert!((combinations(52, 5) - 2_598_960.0).abs() < 1e-3);
        assert!((combinations(100, 2) - 4950.0).abs() < 1e-6);
    }

    #[test]
    fn test_combinations_large_population_stays_finite() {
        // Direct N!/(n!(N-n)!) would overflow here; the incremental
        // product must not.
        let c = combinations(170, 85);
        assert!(c.is_finite());
        assert!(c > 1e40);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn combinations_symmetry(n in 0u32..=120, k in 0u32..=120) {
            prop_assume!(k <= n);
            let lhs = combinations(n, k);
            let rhs = combinations(n, n - k);
            let scale = lhs.abs().max(1.0);
            prop_assert!((lhs - rhs).abs() / scale < 1e-12);
        }

        #[test]
        fn pascal_identity(n in 1u32..=60, k in 1u32..=60) {
            prop_assume!(k <= n);
            let lhs = combinations(n + 1, k);
            let rhs = combinations(n, k) + combinations(n, k - 1);
            let scale = rhs.abs().max(1.0);
            prop_assert!((lhs - rhs).abs() / scale < 1e-10);
        }

        #[test]
        fn small_cases_match_factorial_ratio(n in 0u32..=20, k in 0u32..=20) {
            prop_assume!(k <= n);
            let direct = factorial(n) / (factorial(k) * factorial(n - k));
            let incremental = combinations(n, k);
            prop_assert!((direct - incremental).abs() / direct.max(1.0) < 1e-10);
        }

        #[test]
        fn factorial_is_monotone(n in 1u32..=30) {
            prop_assert!(factorial(n) >= factorial(n - 1));
        }
    }
}
