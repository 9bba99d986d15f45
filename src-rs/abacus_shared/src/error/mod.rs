//! Errors for Abacus, in a form ready to show to users

mod context;
mod location;
mod traits;

pub use context::Context;
pub use location::ErrorLocation;
pub use traits::AsAbacusError;

/// Unified error representation for Abacus
///
/// This struct represents errors in a format suitable for display to users.
/// It includes a human-readable message, an optional location in the
/// expression that caused the error, and optional notes or help text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbacusError {
    /// Human-readable error message
    message: String,
    /// Optional source location information for precise error reporting
    location: Option<ErrorLocation>,
    /// Optional context information
    context: Vec<Context>,
}

impl AbacusError {
    /// Creates a new `AbacusError` from an error that implements `AsAbacusError`
    ///
    /// This constructor creates an error without source location information.
    /// Use `from_error_with_source` if the expression text is available.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use abacus_shared::error::{AbacusError, AsAbacusError};
    ///
    /// struct SimpleError(String);
    ///
    /// impl AsAbacusError for SimpleError {
    ///     fn message(&self) -> String {
    ///         self.0.clone()
    ///     }
    /// }
    ///
    /// let error = SimpleError("something went wrong".to_string());
    /// let abacus_error = AbacusError::from_error(&error);
    /// assert_eq!(abacus_error.message(), "something went wrong");
    /// assert!(abacus_error.location().is_none());
    /// ```
    pub fn from_error(error: &impl AsAbacusError) -> Self {
        Self {
            message: error.message(),
            location: None,
            context: error.context(),
        }
    }

    /// Creates a new `AbacusError` from an error and the expression text it
    /// was produced from
    ///
    /// The source is used to compute the column and the source line that
    /// are shown under the message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use abacus_shared::error::{AbacusError, AsAbacusError, ErrorLocation};
    ///
    /// struct PositionalError {
    ///     offset: usize,
    /// }
    ///
    /// impl AsAbacusError for PositionalError {
    ///     fn message(&self) -> String {
    ///         "unexpected character".to_string()
    ///     }
    ///
    ///     fn error_location(&self, source: &str) -> Option<ErrorLocation> {
    ///         Some(ErrorLocation::from_source_and_offset(source, self.offset))
    ///     }
    /// }
    ///
    /// let error = PositionalError { offset: 2 };
    /// let abacus_error = AbacusError::from_error_with_source(&error, "1 + a");
    /// assert_eq!(abacus_error.location().map(ErrorLocation::column), Some(3));
    /// ```
    pub fn from_error_with_source(error: &impl AsAbacusError, source: &str) -> Self {
        Self {
            message: error.message(),
            location: error.error_location(source),
            context: error.context(),
        }
    }

    /// Creates a new `AbacusError` with optional source text
    ///
    /// Chooses between `from_error` and `from_error_with_source` based on
    /// whether the source is available.
    pub fn from_error_with_optional_source(
        error: &impl AsAbacusError,
        source: Option<&str>,
    ) -> Self {
        match source {
            Some(source) => Self::from_error_with_source(error, source),
            None => Self::from_error(error),
        }
    }

    /// Returns the human-readable error message
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the optional source location information
    #[must_use]
    pub const fn location(&self) -> Option<&ErrorLocation> {
        self.location.as_ref()
    }

    /// Returns the context information attached to the error
    #[must_use]
    pub fn context(&self) -> &[Context] {
        &self.context
    }
}
