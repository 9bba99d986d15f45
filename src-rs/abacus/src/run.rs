//! The calculations the command line can run
//!
//! Each function prints its outcome and returns whether the calculation
//! succeeded. Only a failure to write the outcome is an error.

use std::io::{self, Write};

use crate::{input, printer::Printer};

/// Evaluates an expression after checking its length
pub fn expression<Out, ErrOut>(printer: &mut Printer<'_, Out, ErrOut>, text: &str) -> io::Result<bool>
where
    Out: Write,
    ErrOut: Write,
{
    if let Err(error) = input::check_length(text, printer.config().max_input_length) {
        printer.print_error(&error, None)?;
        return Ok(false);
    }

    match abacus_runtime::evaluate_expression_with_details(text) {
        Ok(value) => {
            printer.print_result(value)?;
            Ok(true)
        }
        Err(error) => {
            printer.print_error(&error, Some(text))?;
            Ok(false)
        }
    }
}

/// Applies a scientific operation
pub fn scientific<Out, ErrOut>(
    printer: &mut Printer<'_, Out, ErrOut>,
    operation: &str,
    value: f64,
) -> io::Result<bool>
where
    Out: Write,
    ErrOut: Write,
{
    match abacus_runtime::evaluate_scientific_with_details(operation, value) {
        Ok(value) => {
            printer.print_result(value)?;
            Ok(true)
        }
        Err(error) => {
            printer.print_error(&error, None)?;
            Ok(false)
        }
    }
}
