use abacus_eval::{EvalError, Operation};
use tracing::{debug, info, warn};

use crate::error::{Error, ErrorKind};

/// Evaluates an arithmetic expression
///
/// # Errors
///
/// Returns the [`ErrorKind`] of the first failure: an invalid character, a
/// syntax error, a division by zero, or a non-finite result.
pub fn evaluate_expression(text: &str) -> Result<f64, ErrorKind> {
    evaluate_expression_with_details(text).map_err(ErrorKind::from)
}

/// Evaluates an arithmetic expression, keeping the details of any failure
///
/// # Errors
///
/// Returns an [`Error`] describing the first failure.
pub fn evaluate_expression_with_details(text: &str) -> Result<f64, Error> {
    debug!(expression = text, "evaluating expression");

    let result = abacus_parser::parse_expression(text)
        .map_err(Error::from)
        .and_then(|expr| abacus_eval::evaluate(&expr).map_err(Error::from));

    log_outcome(&result);
    result
}

/// Applies a named scientific operation to a value
///
/// # Errors
///
/// Returns [`ErrorKind::UnknownOperation`] for an unknown name, and
/// otherwise the failure of the operation itself.
pub fn evaluate_scientific(operation_name: &str, value: f64) -> Result<f64, ErrorKind> {
    evaluate_scientific_with_details(operation_name, value).map_err(ErrorKind::from)
}

/// Applies a named scientific operation to a value, keeping the details of
/// any failure
///
/// # Errors
///
/// Returns an [`Error`] describing the failure.
pub fn evaluate_scientific_with_details(operation_name: &str, value: f64) -> Result<f64, Error> {
    debug!(operation = operation_name, value, "evaluating scientific operation");

    let result = Operation::from_name(operation_name)
        .and_then(|operation| abacus_eval::dispatch(operation, value))
        .map_err(Error::from);

    log_outcome(&result);
    result
}

fn log_outcome(result: &Result<f64, Error>) {
    match result {
        Ok(value) => debug!(result = value, "evaluation succeeded"),
        Err(error @ Error::Parser(parser_error)) if parser_error.invalid_character().is_some() => {
            warn!(%error, position = parser_error.error_offset, "rejected invalid character");
        }
        Err(error @ Error::Eval(EvalError::UnknownOperation { .. })) => {
            warn!(%error, "rejected unknown operation");
        }
        Err(error) => info!(%error, "evaluation failed"),
    }
}
