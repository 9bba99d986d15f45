use crate::error::{EvalError, NonFiniteKind};

/// Rejects values that are not finite
///
/// # Errors
///
/// Returns [`EvalError::NonFiniteResult`] when `value` is NaN or infinite.
///
/// # Examples
///
/// ```
/// use abacus_eval::{EvalError, NonFiniteKind, classify};
///
/// assert_eq!(classify(2.5), Ok(2.5));
/// assert_eq!(
///     classify(f64::NAN),
///     Err(EvalError::NonFiniteResult { kind: NonFiniteKind::NaN })
/// );
/// ```
pub const fn classify(value: f64) -> Result<f64, EvalError> {
    if value.is_nan() {
        Err(EvalError::NonFiniteResult {
            kind: NonFiniteKind::NaN,
        })
    } else if value.is_infinite() {
        Err(EvalError::NonFiniteResult {
            kind: NonFiniteKind::Infinite,
        })
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_values_pass_through() {
        assert_eq!(classify(0.0), Ok(0.0));
        assert_eq!(classify(-3.5), Ok(-3.5));
        assert_eq!(classify(f64::MAX), Ok(f64::MAX));
    }

    #[test]
    fn negative_zero_is_finite() {
        let value = classify(-0.0).expect("negative zero is finite");

        assert!(value.is_sign_negative());
    }

    #[test]
    fn nan_is_rejected() {
        assert_eq!(
            classify(f64::NAN),
            Err(EvalError::NonFiniteResult {
                kind: NonFiniteKind::NaN
            })
        );
    }

    #[test]
    fn infinities_are_rejected() {
        for value in [f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(
                classify(value),
                Err(EvalError::NonFiniteResult {
                    kind: NonFiniteKind::Infinite
                })
            );
        }
    }
}
