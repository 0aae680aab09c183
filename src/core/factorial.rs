use crate::utils::error::{Result, TourError};
use serde::{Deserialize, Serialize};

/// Largest input whose factorial fits in a `u64` (20! = 2432902008176640000).
pub const MAX_FACTORIAL_INPUT: i64 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactorialStrategy {
    #[default]
    Iterative,
    Recursive,
}

impl FactorialStrategy {
    pub fn compute(self, x: i64) -> Result<u64> {
        match self {
            FactorialStrategy::Iterative => factorial(x),
            FactorialStrategy::Recursive => factorial_recursive(x),
        }
    }
}

fn checked_input(x: i64) -> Result<u64> {
    if x < 0 {
        return Err(TourError::invalid_argument(
            "factorial",
            x,
            "factorial is only defined for non-negative integers",
        ));
    }
    if x > MAX_FACTORIAL_INPUT {
        return Err(TourError::overflow("factorial", x));
    }
    Ok(x as u64)
}

/// Factorial by accumulating a running product from 1 to `x`.
///
/// Negative input fails with [`TourError::InvalidArgument`]; input above
/// [`MAX_FACTORIAL_INPUT`] fails with [`TourError::Overflow`].
///
/// ```
/// use fn_tour::core::factorial::factorial;
/// assert_eq!(factorial(5).unwrap(), 120);
/// ```
pub fn factorial(x: i64) -> Result<u64> {
    let n = checked_input(x)?;
    (1..=n)
        .try_fold(1u64, |product, k| product.checked_mul(k))
        .ok_or_else(|| TourError::overflow("factorial", x))
}

/// Factorial by recursive descent, `x * (x - 1)!` down to `0! = 1`.
///
/// The input is validated before the first call, so recursion depth never
/// exceeds `MAX_FACTORIAL_INPUT + 1` frames.
///
/// ```
/// use fn_tour::core::factorial::factorial_recursive;
/// assert_eq!(factorial_recursive(5).unwrap(), 120);
/// ```
pub fn factorial_recursive(x: i64) -> Result<u64> {
    fn descend(n: u64) -> Option<u64> {
        if n == 0 {
            Some(1)
        } else {
            descend(n - 1)?.checked_mul(n)
        }
    }

    let n = checked_input(x)?;
    descend(n).ok_or_else(|| TourError::overflow("factorial", x))
}

/// Like [`FactorialStrategy::compute`], but also rejects inputs above a caller-supplied ceiling.
pub fn factorial_with_limit(x: i64, max_input: i64, strategy: FactorialStrategy) -> Result<u64> {
    if x > max_input {
        tracing::debug!("factorial input {} exceeds configured limit {}", x, max_input);
        return Err(TourError::invalid_argument(
            "factorial",
            x,
            &format!("input exceeds the configured limit of {}", max_input),
        ));
    }
    strategy.compute(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        assert_eq!(factorial(0).unwrap(), 1);
        assert_eq!(factorial(1).unwrap(), 1);
        assert_eq!(factorial(5).unwrap(), 120);
        assert_eq!(factorial(10).unwrap(), 3_628_800);
        assert_eq!(factorial(20).unwrap(), 2_432_902_008_176_640_000);
    }

    #[test]
    fn test_recurrence_law() {
        for n in 1..=MAX_FACTORIAL_INPUT {
            let prev = factorial(n - 1).unwrap();
            assert_eq!(factorial(n).unwrap(), n as u64 * prev, "n = {}", n);
        }
    }

    #[test]
    fn test_result_is_at_least_one() {
        for n in 0..=MAX_FACTORIAL_INPUT {
            assert!(factorial(n).unwrap() >= 1);
        }
    }

    #[test]
    fn test_strategies_agree() {
        for n in 0..=MAX_FACTORIAL_INPUT {
            assert_eq!(factorial(n).unwrap(), factorial_recursive(n).unwrap());
        }
    }

    #[test]
    fn test_negative_input_rejected() {
        for strategy in [FactorialStrategy::Iterative, FactorialStrategy::Recursive] {
            let err = strategy.compute(-1).unwrap_err();
            assert!(matches!(err, TourError::InvalidArgument { .. }));
        }
        assert!(matches!(
            factorial(i64::MIN),
            Err(TourError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_overflow_rejected() {
        assert!(matches!(factorial(21), Err(TourError::Overflow { .. })));
        assert!(matches!(
            factorial_recursive(21),
            Err(TourError::Overflow { .. })
        ));
        assert!(matches!(
            factorial_recursive(i64::MAX),
            Err(TourError::Overflow { .. })
        ));
    }

    #[test]
    fn test_configured_limit() {
        assert_eq!(
            factorial_with_limit(10, 10, FactorialStrategy::Iterative).unwrap(),
            3_628_800
        );
        let err = factorial_with_limit(11, 10, FactorialStrategy::Recursive).unwrap_err();
        assert!(matches!(err, TourError::InvalidArgument { .. }));
    }
}
