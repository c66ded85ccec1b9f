//! Kernel error types for domain violations and recoverable algorithm failures
//!
//! Pure preconditions (degree of the zero polynomial, a monomial exponent of
//! zero, an empty-vector leading coefficient) are contract breaches and are
//! signalled with `panic!`/`debug_assert!` at the point of violation, not
//! through this type. `KernelError` exists for the recoverable cases:
//! domain restrictions an algorithm can refuse to perform, and
//! numerical inconsistencies a caller may want to inspect rather than have
//! silently papered over.

use std::fmt;

/// Errors produced by the algebraic kernel's fallible operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KernelError {
    /// Division where the divisor does not evenly divide the dividend.
    NotDivisible,

    /// Division by the zero polynomial or zero ring element.
    DivisionByZero,

    /// An operation that requires a field (e.g. exact division, monic
    /// normalization) was invoked on a non-field coefficient ring.
    FieldOperationRequired { operation: &'static str },

    /// Square-free factorization (or another characteristic-zero-only
    /// algorithm) was invoked outside characteristic zero.
    NonZeroCharacteristic { operation: &'static str },

    /// A factorization plug-in's reported factors did not reproduce the
    /// input, even after sign absorption. Recovered internally by the
    /// sign-sanitizing wrapper falling back to the trivial factorization;
    /// surfaced here only if a caller asks for the raw mismatch.
    FactorizationMismatch { reason: String },

    /// No variable is shared between two polynomials where one was
    /// required to promote to a univariate view. GCD does not raise this —
    /// a shared-variable-free GCD is defined as the constant 1 — but other
    /// promotion-driven operations may.
    NoCommonVariable,

    /// An operation expected a polynomial with a given number of
    /// variables (commonly: a univariate view) and received something else.
    WrongVariableCount { expected: usize, got: usize, operation: &'static str },

    /// Allocation failure while growing a pool's backing storage.
    ResourceExhausted { resource: &'static str },
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelError::NotDivisible => write!(f, "division is not exact"),
            KernelError::DivisionByZero => write!(f, "division by zero"),
            KernelError::FieldOperationRequired { operation } => {
                write!(f, "{operation} requires field coefficients")
            }
            KernelError::NonZeroCharacteristic { operation } => {
                write!(f, "{operation} is only defined in characteristic zero")
            }
            KernelError::FactorizationMismatch { reason } => {
                write!(f, "factorization plug-in produced an inconsistent result: {reason}")
            }
            KernelError::NoCommonVariable => {
                write!(f, "no variable is shared between the operands")
            }
            KernelError::WrongVariableCount { expected, got, operation } => {
                write!(f, "{operation} requires {expected} variable(s), got {got}")
            }
            KernelError::ResourceExhausted { resource } => {
                write!(f, "resource exhausted: {resource}")
            }
        }
    }
}

impl std::error::Error for KernelError {}

/// Result type for fallible kernel operations.
pub type KernelResult<T> = Result<T, KernelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_are_human_readable() {
        assert_eq!(format!("{}", KernelError::NotDivisible), "division is not exact");
        assert_eq!(format!("{}", KernelError::DivisionByZero), "division by zero");
    }

    #[test]
    fn wrong_variable_count_includes_both_numbers() {
        let err = KernelError::WrongVariableCount {
            expected: 1,
            got: 2,
            operation: "univariate promotion",
        };
        let msg = format!("{err}");
        assert!(msg.contains("1 variable"));
        assert!(msg.contains("got 2"));
    }
}
