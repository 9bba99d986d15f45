use crate::error::{Context, ErrorLocation};

/// Trait for types that can be converted to Abacus error messages.
///
/// This trait provides a standardized interface for error types to expose
/// their message and associated context. Every error produced while
/// tokenizing, parsing or evaluating implements it so that front ends can
/// report errors consistently.
pub trait AsAbacusError {
    /// Returns the primary error message.
    ///
    /// This should be a short, lowercase description of what went wrong.
    fn message(&self) -> String;

    /// Returns additional notes or help for the error.
    ///
    /// Returns an empty vector if no context is available.
    fn context(&self) -> Vec<Context> {
        vec![]
    }

    /// Returns the location of the error in the expression text.
    ///
    /// Errors that are not tied to a position (for example a domain error
    /// in a scientific operation) return `None`.
    fn error_location(&self, source: &str) -> Option<ErrorLocation> {
        let _ = source;
        None
    }
}
