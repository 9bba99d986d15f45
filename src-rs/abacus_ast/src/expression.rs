//! Expression constructs for the AST

use std::fmt;

use abacus_shared::span::Span;

use crate::node::Node;

/// An arithmetic expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Binary operation with left and right operands
    BinaryOp {
        /// The binary operator
        op: BinaryOpNode,
        /// The left operand
        left: ExprNode,
        /// The right operand
        right: ExprNode,
    },

    /// Unary operation with a single operand
    UnaryOp {
        /// The unary operator
        op: UnaryOpNode,
        /// The operand expression
        expr: ExprNode,
    },

    /// Parenthesized expression
    Parenthesized {
        /// The expression inside parentheses
        expr: ExprNode,
    },

    /// Numeric literal
    Literal(f64),
}

/// A node containing an expression
pub type ExprNode = Node<Expr>;

impl Expr {
    /// Creates a binary operation expression
    #[must_use]
    pub const fn binary_op(op: BinaryOpNode, left: ExprNode, right: ExprNode) -> Self {
        Self::BinaryOp { op, left, right }
    }

    /// Creates a unary operation expression
    #[must_use]
    pub const fn unary_op(op: UnaryOpNode, expr: ExprNode) -> Self {
        Self::UnaryOp { op, expr }
    }

    /// Creates a parenthesized expression
    #[must_use]
    pub const fn parenthesized(expr: ExprNode) -> Self {
        Self::Parenthesized { expr }
    }

    /// Creates a literal expression
    #[must_use]
    pub const fn literal(value: f64) -> Self {
        Self::Literal(value)
    }

    /// Returns the number of nodes in the tree rooted at this expression
    #[must_use]
    pub fn node_count(&self) -> usize {
        match self {
            Self::BinaryOp { left, right, .. } => 1 + left.node_count() + right.node_count(),
            Self::UnaryOp { expr, .. } | Self::Parenthesized { expr } => 1 + expr.node_count(),
            Self::Literal(_) => 1,
        }
    }
}

impl ExprNode {
    /// Creates a binary operation node spanning both operands
    #[must_use]
    pub fn new_binary_op(op: BinaryOpNode, left: Self, right: Self) -> Self {
        let span = left.span().merge(&right.span());
        Self::new(Expr::binary_op(op, left, right), span)
    }

    /// Creates a unary operation node spanning the operator and its operand
    #[must_use]
    pub fn new_unary_op(op: UnaryOpNode, expr: Self) -> Self {
        let span = op.span().merge(&expr.span());
        Self::new(Expr::unary_op(op, expr), span)
    }

    /// Creates a parenthesized node spanning both parentheses
    #[must_use]
    pub fn new_parenthesized(expr: Self, paren_span: Span) -> Self {
        Self::new(Expr::parenthesized(expr), paren_span)
    }

    /// Creates a literal node
    #[must_use]
    pub fn new_literal(value: f64, span: Span) -> Self {
        Self::new(Expr::literal(value), span)
    }
}

/// Binary operators for expressions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    /// Addition operator (+)
    Add,
    /// Subtraction operator (-)
    Sub,
    /// Multiplication operator (*)
    Mul,
    /// Division operator (/)
    Div,
}

/// A node containing a binary operator
pub type BinaryOpNode = Node<BinaryOp>;

impl BinaryOp {
    /// Returns the symbol used for the operator in expression text
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Unary operators for expressions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// Negation operator (-)
    Neg,
}

/// A node containing a unary operator
pub type UnaryOpNode = Node<UnaryOp>;

impl UnaryOp {
    /// Returns the symbol used for the operator in expression text
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Neg => "-",
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
