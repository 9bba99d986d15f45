//! Shared utilities for Abacus
//!
//! - `span`: byte-offset spans that tie tokens and expression nodes back to
//!   the expression text they came from
//! - `error`: the unified, display-ready error used by front ends

pub mod error;
pub mod span;
