use std::fmt;

use abacus_shared::{
    error::{AsAbacusError, Context, ErrorLocation},
    span::Span,
};

use crate::builtin::{Operation, builtin_operations};

/// An error produced while evaluating an expression or running a
/// scientific operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// The right operand of a division evaluated to zero
    DivisionByZero {
        /// The span of the divisor expression
        divisor_span: Span,
    },
    /// A scientific operation was given a value outside of its domain
    DomainError {
        /// The operation that rejected the value
        operation: Operation,
        /// Why the value was rejected
        reason: DomainReason,
    },
    /// The result is NaN or infinite
    NonFiniteResult {
        /// Which kind of non-finite value was produced
        kind: NonFiniteKind,
    },
    /// A finite input produced a result too large to represent
    Overflow {
        /// The operation that overflowed
        operation: Operation,
    },
    /// No scientific operation has the given name
    UnknownOperation {
        /// The name that was looked up
        name: String,
    },
}

/// The kinds of non-finite values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NonFiniteKind {
    /// Not a number
    NaN,
    /// Positive or negative infinity
    Infinite,
}

/// The reasons a scientific operation rejects its input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainReason {
    /// `sqrt` of a negative value (or NaN)
    NegativeSquareRoot,
    /// `log` of a value that is not positive
    NonPositiveLog,
    /// `ln` of a value that is not positive
    NonPositiveLn,
    /// `factorial` of a value that is not a non-negative integer
    FactorialNotNonNegativeInteger,
}

impl fmt::Display for DomainReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeSquareRoot => {
                write!(f, "cannot calculate square root of negative number")
            }
            Self::NonPositiveLog => write!(f, "cannot calculate log of non-positive number"),
            Self::NonPositiveLn => write!(f, "cannot calculate ln of non-positive number"),
            Self::FactorialNotNonNegativeInteger => {
                write!(f, "factorial only defined for non-negative integers")
            }
        }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero { .. } => write!(f, "division by zero"),
            Self::DomainError { reason, .. } => write!(f, "{reason}"),
            Self::NonFiniteResult {
                kind: NonFiniteKind::NaN,
            } => write!(f, "result is not a number"),
            Self::NonFiniteResult {
                kind: NonFiniteKind::Infinite,
            } => write!(f, "result is infinite"),
            Self::Overflow { .. } => write!(f, "result too large to calculate"),
            Self::UnknownOperation { name } => {
                write!(f, "unknown operation `{}`", name.escape_debug())
            }
        }
    }
}

impl std::error::Error for EvalError {}

impl AsAbacusError for EvalError {
    fn message(&self) -> String {
        self.to_string()
    }

    fn context(&self) -> Vec<Context> {
        match self {
            Self::DivisionByZero { .. } => {
                vec![Context::Note("this divisor evaluates to zero".to_string())]
            }
            Self::Overflow { operation } => vec![Context::Note(format!(
                "the result of `{}` exceeds the largest representable number",
                operation.name()
            ))],
            Self::UnknownOperation { .. } => {
                let names = builtin_operations()
                    .into_keys()
                    .collect::<Vec<_>>()
                    .join(", ");
                vec![Context::Help(format!("available operations are {names}"))]
            }
            Self::DomainError { .. } | Self::NonFiniteResult { .. } => vec![],
        }
    }

    fn error_location(&self, source: &str) -> Option<ErrorLocation> {
        let Self::DivisionByZero { divisor_span } = self else {
            return None;
        };

        let fits_source = !divisor_span.is_empty()
            && divisor_span.end() <= source.len()
            && source.is_char_boundary(divisor_span.start());

        fits_source.then(|| {
            ErrorLocation::from_source_and_span(source, divisor_span.start(), divisor_span.len())
        })
    }
}
