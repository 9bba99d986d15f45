//! Checks applied to raw input before it reaches the evaluator

use std::fmt;

use abacus_shared::error::{AsAbacusError, Context};

/// An expression longer than the configured maximum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputTooLong {
    /// The length of the expression in characters
    pub length: usize,
    /// The configured maximum
    pub maximum: usize,
}

impl fmt::Display for InputTooLong {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expression is too long ({} characters, maximum is {})",
            self.length, self.maximum
        )
    }
}

impl std::error::Error for InputTooLong {}

impl AsAbacusError for InputTooLong {
    fn message(&self) -> String {
        self.to_string()
    }

    fn context(&self) -> Vec<Context> {
        vec![Context::Help(
            "raise the limit with `--max-length` or `ABACUS_MAX_LENGTH`".to_string(),
        )]
    }
}

/// Rejects expressions longer than `maximum` characters
///
/// Length is counted in characters, not bytes.
pub fn check_length(text: &str, maximum: usize) -> Result<(), InputTooLong> {
    let length = text.chars().count();
    if length > maximum {
        Err(InputTooLong { length, maximum })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn within_limit() {
        assert_eq!(check_length("1 + 2", 5), Ok(()));
        assert_eq!(check_length("", 0), Ok(()));
    }

    #[test]
    fn over_limit() {
        let error = check_length("1 + 23", 5).expect_err("too long");

        assert_eq!(
            error.message(),
            "expression is too long (6 characters, maximum is 5)"
        );
    }

    #[test]
    fn counts_characters() {
        assert_eq!(check_length("××", 2), Ok(()));
    }
}
