//! Evaluation for Abacus
//!
//! This crate turns expression trees into numbers and runs the named
//! scientific operations. Every result passes through [`classify`] so a
//! successful value is always finite.

pub mod builtin;
mod classify;
mod error;
mod eval_expr;

pub use builtin::{Operation, builtin_operations, builtin_operations_docs, dispatch};
pub use classify::classify;
pub use error::{DomainReason, EvalError, NonFiniteKind};
pub use eval_expr::evaluate;
