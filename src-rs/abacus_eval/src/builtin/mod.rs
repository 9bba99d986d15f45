//! The scientific operations that come with Abacus
//!
//! Each operation takes a single number. Trigonometric operations take
//! their argument in degrees.

use std::{fmt, str::FromStr};

use indexmap::IndexMap;

use crate::{
    classify::classify,
    error::{DomainReason, EvalError},
};

mod fns;

/// A named scientific operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Sine of an angle in degrees
    Sin,
    /// Cosine of an angle in degrees
    Cos,
    /// Tangent of an angle in degrees
    Tan,
    /// Square root
    Sqrt,
    /// Base 10 logarithm
    Log10,
    /// Natural logarithm
    Ln,
    /// The value multiplied by itself
    Square,
    /// Factorial of a non-negative integer
    Factorial,
    /// Absolute value
    Abs,
    /// Smallest integer greater than or equal to the value
    Ceil,
    /// Largest integer less than or equal to the value
    Floor,
}

impl Operation {
    /// Every operation, in the order they are listed to users
    pub const ALL: [Self; 11] = [
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Sqrt,
        Self::Log10,
        Self::Ln,
        Self::Square,
        Self::Factorial,
        Self::Abs,
        Self::Ceil,
        Self::Floor,
    ];

    /// Returns the name users refer to the operation by
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Sqrt => "sqrt",
            Self::Log10 => "log",
            Self::Ln => "ln",
            Self::Square => "square",
            Self::Factorial => "factorial",
            Self::Abs => "abs",
            Self::Ceil => "ceil",
            Self::Floor => "floor",
        }
    }

    /// Returns a one-line description of the operation
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Sin => "Sine of an angle given in degrees",
            Self::Cos => "Cosine of an angle given in degrees",
            Self::Tan => "Tangent of an angle given in degrees",
            Self::Sqrt => "Square root of a non-negative number",
            Self::Log10 => "Base 10 logarithm of a positive number",
            Self::Ln => "Natural logarithm of a positive number",
            Self::Square => "The number multiplied by itself",
            Self::Factorial => "Factorial of a non-negative integer",
            Self::Abs => "Absolute value",
            Self::Ceil => "Rounds up to the nearest integer",
            Self::Floor => "Rounds down to the nearest integer",
        }
    }

    /// Looks up an operation by name
    ///
    /// Names are case-sensitive.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::UnknownOperation`] if no operation has that name.
    pub fn from_name(name: &str) -> Result<Self, EvalError> {
        Self::ALL
            .into_iter()
            .find(|operation| operation.name() == name)
            .ok_or_else(|| EvalError::UnknownOperation {
                name: name.to_string(),
            })
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

/// The scientific operations, keyed by name
#[must_use]
pub fn builtin_operations() -> IndexMap<String, Operation> {
    Operation::ALL
        .into_iter()
        .map(|operation| (operation.name().to_string(), operation))
        .collect()
}

/// The documentation for the scientific operations, keyed by name
#[must_use]
pub fn builtin_operations_docs() -> IndexMap<String, (String, Operation)> {
    Operation::ALL
        .into_iter()
        .map(|operation| {
            (
                operation.name().to_string(),
                (operation.description().to_string(), operation),
            )
        })
        .collect()
}

/// Applies a scientific operation to a value
///
/// # Errors
///
/// Returns [`EvalError::DomainError`] when the value is outside of the
/// operation's domain, [`EvalError::Overflow`] when a finite value produces
/// a result too large to represent, and [`EvalError::NonFiniteResult`] when
/// the result is otherwise NaN or infinite.
///
/// # Examples
///
/// ```
/// use abacus_eval::{Operation, dispatch};
///
/// assert_eq!(dispatch(Operation::Factorial, 5.0), Ok(120.0));
/// assert!(dispatch(Operation::Sqrt, -1.0).is_err());
/// ```
pub fn dispatch(operation: Operation, value: f64) -> Result<f64, EvalError> {
    let result = match operation {
        Operation::Sin => fns::sin(value),
        Operation::Cos => fns::cos(value),
        Operation::Tan => fns::tan(value),
        Operation::Sqrt => fns::sqrt(value),
        Operation::Log10 => fns::log10(value),
        Operation::Ln => fns::ln(value),
        Operation::Square => fns::square(value),
        Operation::Factorial => fns::factorial(value),
        Operation::Abs => Ok(value.abs()),
        Operation::Ceil => Ok(value.ceil()),
        Operation::Floor => Ok(value.floor()),
    }
    .map_err(|failure| match failure {
        fns::Failure::Domain(reason) => EvalError::DomainError { operation, reason },
        fns::Failure::Overflow => EvalError::Overflow { operation },
    })?;

    classify(result)
}
