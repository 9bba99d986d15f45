//! Safe evaluation of user-supplied arithmetic
//!
//! This crate is the entry point for callers. It offers two operations:
//!
//! - [`evaluate_expression`] evaluates text such as `2 * (3 + 4)`
//! - [`evaluate_scientific`] applies a named operation such as `sqrt` to a
//!   number
//!
//! Both return either a finite number or an [`ErrorKind`]. Nothing is ever
//! executed: the text is checked against a fixed set of characters and a
//! closed grammar before it is evaluated.
//!
//! The `*_with_details` variants return an [`Error`] that keeps the
//! positions and notes needed to render a diagnostic.
//!
//! # Examples
//!
//! ```
//! use abacus_runtime::{ErrorKind, evaluate_expression, evaluate_scientific};
//!
//! assert_eq!(evaluate_expression("2*(3+4)"), Ok(14.0));
//! assert_eq!(evaluate_expression("1/0"), Err(ErrorKind::DivisionByZero));
//! assert_eq!(evaluate_scientific("factorial", 5.0), Ok(120.0));
//! ```

mod error;
mod evaluate;

pub use abacus_eval::{DomainReason, NonFiniteKind, Operation, builtin_operations_docs};
pub use error::{Error, ErrorKind};
pub use evaluate::{
    evaluate_expression, evaluate_expression_with_details, evaluate_scientific,
    evaluate_scientific_with_details,
};
