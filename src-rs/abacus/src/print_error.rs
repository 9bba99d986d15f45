//! Error message formatting and display functionality
//!
//!     error: expected `)`
//!      --> expression:1:7
//!       |
//!     1 | (1 + 2
//!       |       ^
//!       = note: the parenthesis opened at column 1 is never closed

use abacus_shared::error::{AbacusError, Context, ErrorLocation};
use owo_colors::{OwoColorize, Style};

use crate::stylesheet;

/// The name shown in place of a file path in location lines
const SOURCE_NAME: &str = "expression";

/// Converts an error to a formatted string representation
pub fn error_to_string(error: &AbacusError) -> String {
    let message_line = get_error_message_line(error.message());

    let mut lines = vec![message_line];

    match error.location() {
        Some(location) => {
            lines.push(get_location_line(location));
            lines.push(get_source_lines(
                location,
                error.context(),
                stylesheet::ERROR_COLOR,
            ));
        }
        None => lines.extend(error.context().iter().map(|context| {
            let (equals, context_message) = get_context_parts(context);
            format!("  {equals} {context_message}")
        })),
    }

    lines.join("\n")
}

/// Formats the main error message line
fn get_error_message_line(message: &str) -> String {
    get_message_line("error", stylesheet::ERROR_COLOR, message)
}

/// Formats a note message line
fn get_note_message_line(message: &str) -> String {
    get_message_line("note", stylesheet::NOTE_COLOR, message)
}

/// Formats a help message line
fn get_help_message_line(message: &str) -> String {
    get_message_line("help", stylesheet::HELP_COLOR, message)
}

/// Formats a message line with a colored prefix
fn get_message_line(kind: &str, kind_color: Style, message: &str) -> String {
    // <kind>: <message>
    let kind_str = kind_color.style(kind);
    let message_line = format!("{kind_str}: {message}");

    message_line.bold().to_string()
}

fn get_context_parts(context: &Context) -> (String, String) {
    match context {
        Context::Note(message) => (
            stylesheet::NOTE_COLOR.bold().style("=").to_string(),
            get_note_message_line(message),
        ),
        Context::Help(message) => (
            stylesheet::HELP_COLOR.bold().style("=").to_string(),
            get_help_message_line(message),
        ),
    }
}

/// Formats the location information line
fn get_location_line(location: &ErrorLocation) -> String {
    //  --> expression:<line>:<column>
    let arrow = stylesheet::SOURCE_ANNOTATION.style("-->");
    format!(
        " {arrow} {SOURCE_NAME}:{}:{}",
        location.line(),
        location.column()
    )
}

/// Formats the source snippet with error highlighting
fn get_source_lines(
    location: &ErrorLocation,
    context: &[Context],
    code_highlight_color: Style,
) -> String {
    //   |
    // 1 | 10 / (2 - 2)
    //   |      ^------
    //   = note: this divisor evaluates to zero
    let line = location.line();
    let column = location.column();
    let length = location.length();
    let line_source = location.line_source();

    // the margin is as wide as the line number
    let margin_width = line.ilog10() + 1;
    let margin = " ".repeat(margin_width as usize);

    let bar = stylesheet::SOURCE_ANNOTATION.style("|");

    let line_label = stylesheet::SOURCE_ANNOTATION.style(line.to_string());

    let pointer_indent = " ".repeat(column - 1);

    let pointer = code_highlight_color.bold().style("^");
    let pointer_rest = code_highlight_color.bold().style("-".repeat(length - 1));

    let blank_line = format!("{margin} {bar}");
    let source_line = format!("{line_label} {bar} {line_source}");
    let pointer_line = format!("{margin} {bar} {pointer_indent}{pointer}{pointer_rest}");

    let context_lines = context.iter().map(|context| {
        let (equals, context_message) = get_context_parts(context);
        format!("{margin} {equals} {context_message}")
    });

    let mut source_lines = vec![blank_line, source_line, pointer_line];
    source_lines.extend(context_lines);

    source_lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    use abacus_runtime::{evaluate_expression_with_details, evaluate_scientific_with_details};

    // owo-colors only emits escape codes, so stripping them leaves the layout
    fn render(error: &AbacusError) -> String {
        let rendered = error_to_string(error);
        anstream::adapter::strip_str(&rendered).to_string()
    }

    #[test]
    fn positional_error_has_caret() {
        let source = "1 + a";
        let error = evaluate_expression_with_details(source).expect_err("invalid character");
        let error = AbacusError::from_error_with_source(&error, source);

        assert_eq!(
            render(&error),
            [
                "error: invalid character `a` in expression",
                " --> expression:1:5",
                "  |",
                "1 | 1 + a",
                "  |     ^",
                "  = help: expressions may only contain digits, `.`, `+`, `-`, `*`, `/`, parentheses and spaces",
            ]
            .join("\n")
        );
    }

    #[test]
    fn divisor_is_underlined() {
        let source = "10 / (2 - 2)";
        let error = evaluate_expression_with_details(source).expect_err("division by zero");
        let error = AbacusError::from_error_with_source(&error, source);

        let rendered = render(&error);

        assert!(rendered.starts_with("error: division by zero\n"));
        assert!(rendered.contains("  |      ^------\n"));
        assert!(rendered.ends_with("= note: this divisor evaluates to zero"));
    }

    #[test]
    fn error_without_location() {
        let error = evaluate_scientific_with_details("sqrt", -1.0).expect_err("domain error");
        let error = AbacusError::from_error(&error);

        assert_eq!(
            render(&error),
            "error: cannot calculate square root of negative number"
        );
    }
}
