/// Contextual information attached to an error message.
///
/// Context helps users understand why an expression was rejected and how
/// to fix it.
///
/// # Examples
///
/// ```rust
/// use abacus_shared::error::Context;
///
/// let note = Context::Note("unclosed parenthesis found here".to_string());
/// let help = Context::Help("only `+`, `-`, `*` and `/` are supported".to_string());
///
/// let contexts = vec![note, help];
/// assert_eq!(contexts.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Context {
    /// Additional information about the error
    Note(String),

    /// A suggestion for resolving the error
    Help(String),
}
