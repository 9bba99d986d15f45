#![allow(missing_docs)]
// AST nodes should be self-documenting

//! Expression tree definitions for Abacus.
//!
//! The parser produces these structures and the evaluator consumes them.
//! Every node owns its children, so a tree is always finite and acyclic.

pub mod expression;
pub mod node;

pub use expression::{BinaryOp, BinaryOpNode, Expr, ExprNode, UnaryOp, UnaryOpNode};
pub use node::Node;
