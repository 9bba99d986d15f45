use std::{
    fmt,
    io::{self, Write},
};

use abacus_runtime::builtin_operations_docs;
use abacus_shared::error::{AbacusError, AsAbacusError};
use owo_colors::OwoColorize;

use crate::{
    config::Config,
    format::format_number,
    print_error,
    response::{OperationDoc, Response},
    stylesheet,
};

/// Prints results and errors in the configured output format
///
/// Results, JSON responses and the operation listing go to `out`. Rendered
/// and debug errors go to `err`.
pub struct Printer<'a, Out, ErrOut>
where
    Out: Write,
    ErrOut: Write,
{
    config: &'a Config,
    out: &'a mut Out,
    err: &'a mut ErrOut,
}

impl<'a, Out, ErrOut> Printer<'a, Out, ErrOut>
where
    Out: Write,
    ErrOut: Write,
{
    pub const fn new(config: &'a Config, out: &'a mut Out, err: &'a mut ErrOut) -> Self {
        Self { config, out, err }
    }

    pub const fn config(&self) -> &Config {
        self.config
    }

    /// Prints a successful result
    pub fn print_result(&mut self, value: f64) -> io::Result<()> {
        if self.config.json {
            writeln!(self.out, "{}", Response::result(value).to_json())
        } else {
            let formatted = format_number(value, self.config.raw);
            writeln!(self.out, "{}", stylesheet::RESULT_COLOR.style(formatted))
        }
    }

    /// Prints an error
    ///
    /// JSON errors are written like any other response. Other errors show
    /// `source` under the message when the error points into it.
    pub fn print_error<E>(&mut self, error: &E, source: Option<&str>) -> io::Result<()>
    where
        E: AsAbacusError + fmt::Debug,
    {
        if self.config.json {
            writeln!(self.out, "{}", Response::error(error.message()).to_json())
        } else if self.config.print_debug {
            print_debug(error, &mut *self.err)
        } else {
            let error = AbacusError::from_error_with_optional_source(error, source);
            writeln!(self.err, "{}", print_error::error_to_string(&error))
        }
    }

    /// Prints the scientific operations and what they do
    pub fn print_operations(&mut self) -> io::Result<()> {
        let docs = builtin_operations_docs();

        if self.config.json {
            let docs: Vec<OperationDoc> = docs
                .into_iter()
                .map(|(name, (description, _))| OperationDoc { name, description })
                .collect();
            serde_json::to_writer(&mut *self.out, &docs)?;
            return writeln!(self.out);
        }

        let name_width = docs.keys().map(String::len).max().unwrap_or(0);
        for (name, (description, _)) in docs {
            let padded = format!("{name:<name_width$}");
            writeln!(
                self.out,
                "{}  {description}",
                stylesheet::OPERATION_NAME.style(padded)
            )?;
        }

        Ok(())
    }
}

#[expect(clippy::use_debug, reason = "debug output was requested")]
fn print_debug(error: &impl fmt::Debug, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer, "{error:?}")
}

#[cfg(test)]
mod tests {
    use abacus_runtime::evaluate_expression_with_details;

    use super::*;

    fn printed(
        config: &Config,
        print: impl FnOnce(&mut Printer<'_, Vec<u8>, Vec<u8>>),
    ) -> (String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        print(&mut Printer::new(config, &mut out, &mut err));

        let out = String::from_utf8(out).expect("output is utf-8");
        let err = String::from_utf8(err).expect("output is utf-8");
        (
            anstream::adapter::strip_str(&out).to_string(),
            anstream::adapter::strip_str(&err).to_string(),
        )
    }

    #[test]
    fn result_goes_to_out() {
        let (out, err) = printed(&Config::default(), |printer| {
            printer.print_result(1234.5).expect("writing to a vec succeeds");
        });

        assert_eq!(out, "1,234.5\n");
        assert_eq!(err, "");
    }

    #[test]
    fn rendered_error_goes_to_err() {
        let source = "(1 + 2";
        let error = evaluate_expression_with_details(source).expect_err("unclosed paren");

        let (out, err) = printed(&Config::default(), |printer| {
            printer
                .print_error(&error, Some(source))
                .expect("writing to a vec succeeds");
        });

        assert_eq!(out, "");
        assert!(err.starts_with("error: expected `)`\n --> expression:1:7"));
    }

    #[test]
    fn json_error_goes_to_out() {
        let config = Config {
            json: true,
            ..Config::default()
        };
        let error = evaluate_expression_with_details("1/0").expect_err("division by zero");

        let (out, err) = printed(&config, |printer| {
            printer
                .print_error(&error, Some("1/0"))
                .expect("writing to a vec succeeds");
        });

        assert_eq!(out, "{\"error\":\"division by zero\"}\n");
        assert_eq!(err, "");
    }

    #[test]
    fn debug_error() {
        let config = Config {
            print_debug: true,
            ..Config::default()
        };
        let error = evaluate_expression_with_details("1/0").expect_err("division by zero");

        let (_, err) = printed(&config, |printer| {
            printer
                .print_error(&error, Some("1/0"))
                .expect("writing to a vec succeeds");
        });

        assert!(err.starts_with("Eval(DivisionByZero"));
    }

    #[test]
    fn operations_as_json() {
        let config = Config {
            json: true,
            ..Config::default()
        };

        let (out, _) = printed(&config, |printer| {
            printer.print_operations().expect("writing to a vec succeeds");
        });

        let docs: serde_json::Value = serde_json::from_str(&out).expect("listing is json");
        assert_eq!(docs[0]["name"], "sin");
        assert_eq!(docs.as_array().map(Vec::len), Some(11));
    }
}
