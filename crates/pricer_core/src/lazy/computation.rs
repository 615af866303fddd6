//! Deferred computations.
//!
//! A [`Computation`] is a zero-argument function producing a scalar. It
//! stands in for a value that has not been computed yet, and is re-run on
//! every read.

use std::rc::Rc;

use crate::types::EvaluationError;

/// Shared zero-argument scalar computation.
///
/// `Rc` keeps the type single-threaded: rebinding an attribute from another
/// thread cannot be expressed.
pub type Computation = Rc<dyn Fn() -> Result<f64, EvaluationError>>;

/// Lifts a constant into a computation returning it unconditionally.
///
/// # Examples
/// ```
/// use pricer_core::lazy::wrap;
///
/// let c = wrap(2.5);
/// assert_eq!(c().unwrap(), 2.5);
/// assert_eq!(c().unwrap(), 2.5);
/// ```
pub fn wrap(value: f64) -> Computation {
    Rc::new(move || Ok(value))
}

/// Boxes a closure as a [`Computation`].
pub fn computation<F>(f: F) -> Computation
where
    F: Fn() -> Result<f64, EvaluationError> + 'static,
{
    Rc::new(f)
}

/// Divides, reporting a zero denominator as an evaluation error.
///
/// # Examples
/// ```
/// use pricer_core::lazy::checked_div;
///
/// assert_eq!(checked_div(6.0, 3.0, "x.ratio", "rhs").unwrap(), 2.0);
/// assert!(checked_div(1.0, 0.0, "x.ratio", "rhs").is_err());
/// ```
#[inline]
pub fn checked_div(
    numerator: f64,
    denominator: f64,
    attribute: &str,
    denominator_name: &str,
) -> Result<f64, EvaluationError> {
    if denominator == 0.0 {
        return Err(EvaluationError::DivisionByZero {
            attribute: attribute.to_string(),
            denominator: denominator_name.to_string(),
        });
    }
    Ok(numerator / denominator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_wrap_negative_zero() {
        let c = wrap(-0.0);
        assert!(c().unwrap().is_sign_negative());
    }

    #[test]
    fn test_computation_reruns_every_call() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let c = computation(move || {
            counter.set(counter.get() + 1);
            Ok(1.0)
        });
        c().unwrap();
        c().unwrap();
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_checked_div_zero() {
        let err = checked_div(1.0, 0.0, "bond.duration", "price").unwrap_err();
        assert_eq!(
            err,
            EvaluationError::DivisionByZero {
                attribute: "bond.duration".to_string(),
                denominator: "price".to_string(),
            }
        );
    }

    #[test]
    fn test_checked_div_negative_zero() {
        assert!(checked_div(1.0, -0.0, "a", "b").is_err());
    }
}
