//! AST node wrapper with source location information

use std::ops::Deref;

use abacus_shared::span::Span;

/// A wrapper around AST elements that includes source location information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    value: Box<T>,
    span: Span,
}

impl<T> Node<T> {
    /// Creates a new node with the given value and span
    #[must_use]
    pub fn new(value: T, span: Span) -> Self {
        let value = Box::new(value);
        Self { value, span }
    }

    /// Returns the node's span
    #[must_use]
    pub const fn span(&self) -> Span {
        self.span
    }

    /// Returns a reference to the node's value
    #[must_use]
    pub fn node_value(&self) -> &T {
        &self.value
    }
}

impl<T> Deref for Node<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}
