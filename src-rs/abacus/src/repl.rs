//! Line-by-line evaluation of standard input

use std::io::{self, BufRead, Write};

use crate::{printer::Printer, run};

/// What a single input line asks for
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Line<'a> {
    /// A blank line
    Empty,
    /// `<operation> <value>`, as in `sqrt 16`
    Scientific {
        /// The operation name
        operation: &'a str,
        /// The value to apply it to
        value: f64,
    },
    /// Anything else
    Expression(&'a str),
}

/// Classifies a line of input
///
/// A line is a scientific operation when it is exactly two words, the
/// first made of ASCII letters and the second a number.
pub fn parse_line(line: &str) -> Line<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Line::Empty;
    }

    let mut words = trimmed.split_whitespace();
    if let (Some(operation), Some(value), None) = (words.next(), words.next(), words.next()) {
        let is_name = operation.chars().all(|c| c.is_ascii_alphabetic());
        if let (true, Ok(value)) = (is_name, value.parse::<f64>()) {
            return Line::Scientific { operation, value };
        }
    }

    Line::Expression(trimmed)
}

/// Reads lines from `reader` until it is exhausted, printing the outcome of
/// each line
///
/// Lines are independent: nothing carries over from one line to the next.
///
/// # Errors
///
/// Returns an error if reading from `reader` or writing an outcome fails.
pub fn run<Out, ErrOut>(
    printer: &mut Printer<'_, Out, ErrOut>,
    reader: impl BufRead,
) -> io::Result<()>
where
    Out: Write,
    ErrOut: Write,
{
    for line in reader.lines() {
        let line = line?;
        match parse_line(&line) {
            Line::Empty => {}
            Line::Scientific { operation, value } => {
                run::scientific(printer, operation, value)?;
            }
            Line::Expression(text) => {
                run::expression(printer, text)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::Config;

    #[test]
    fn blank_lines() {
        assert_eq!(parse_line(""), Line::Empty);
        assert_eq!(parse_line("   "), Line::Empty);
    }

    #[test]
    fn scientific_lines() {
        assert_eq!(
            parse_line("sqrt 16"),
            Line::Scientific {
                operation: "sqrt",
                value: 16.0
            }
        );
        assert_eq!(
            parse_line("  factorial   -3 "),
            Line::Scientific {
                operation: "factorial",
                value: -3.0
            }
        );
        assert_eq!(
            parse_line("bogus 1"),
            Line::Scientific {
                operation: "bogus",
                value: 1.0
            }
        );
    }

    #[test]
    fn expression_lines() {
        assert_eq!(parse_line("1 + 2"), Line::Expression("1 + 2"));
        assert_eq!(parse_line(" 2*(3+4) "), Line::Expression("2*(3+4)"));
        assert_eq!(parse_line("1 2"), Line::Expression("1 2"));
        assert_eq!(parse_line("sqrt"), Line::Expression("sqrt"));
        assert_eq!(parse_line("sqrt x"), Line::Expression("sqrt x"));
    }

    #[test]
    fn runs_every_line() {
        let config = Config {
            json: true,
            ..Config::default()
        };
        let input = "1 + 1\n\nsqrt 16\n1/0\nbogus 2\n0.5 * 3\n";
        let mut out = Vec::new();
        let mut err = Vec::new();

        run(&mut Printer::new(&config, &mut out, &mut err), input.as_bytes())
            .expect("reading from a slice succeeds");

        let out = String::from_utf8(out).expect("output is utf-8");
        assert_eq!(
            out.lines().collect::<Vec<_>>(),
            vec![
                "{\"result\":2}",
                "{\"result\":4}",
                "{\"error\":\"division by zero\"}",
                "{\"error\":\"unknown operation `bogus`\"}",
                "{\"result\":1.5}",
            ]
        );
        assert!(err.is_empty());
    }

    #[test]
    fn rendered_errors_do_not_stop_the_loop() {
        let config = Config::default();
        let mut out = Vec::new();
        let mut err = Vec::new();

        run(
            &mut Printer::new(&config, &mut out, &mut err),
            "1 + a\n2 * 3\n".as_bytes(),
        )
        .expect("reading from a slice succeeds");

        let out = String::from_utf8(out).expect("output is utf-8");
        let err = String::from_utf8(err).expect("output is utf-8");
        assert_eq!(anstream::adapter::strip_str(&out).to_string(), "6\n");
        assert!(
            anstream::adapter::strip_str(&err)
                .to_string()
                .starts_with("error: invalid character `a` in expression")
        );
    }
}
