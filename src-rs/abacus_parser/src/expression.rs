//! Expression parsing
//!
//! The grammar, from lowest to highest precedence:
//!
//! ```text
//! expression := term (('+' | '-') term)*
//! term       := factor (('*' | '/') factor)*
//! factor     := '-' factor | '(' expression ')' | NUMBER
//! ```
//!
//! Binary operators are left-associative and unary minus binds tighter
//! than any binary operator, so `-2 * 3` is `(-2) * 3`.
//!
//! # Examples
//!
//! ```
//! use abacus_ast::Expr;
//! use abacus_parser::{expression::parse, token::tokenize};
//!
//! let tokens = tokenize("2 * (3 + 4)").unwrap();
//! let expr = parse(&tokens).unwrap();
//!
//! assert!(matches!(&*expr, Expr::BinaryOp { .. }));
//! ```

use abacus_ast::{BinaryOp, BinaryOpNode, ExprNode, UnaryOp, UnaryOpNode};

use crate::{
    error::ParserError,
    token::{Token, TokenKind},
};

type Result<T> = std::result::Result<T, ParserError>;

/// A cursor over a token sequence
///
/// Reading past the last token yields an `End` token, so a sequence that
/// is missing its terminal token still parses.
struct TokenStream<'t> {
    tokens: &'t [Token],
    position: usize,
}

impl<'t> TokenStream<'t> {
    const fn new(tokens: &'t [Token]) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    fn peek(&self) -> Token {
        self.tokens.get(self.position).copied().unwrap_or_else(|| {
            let end_offset = self.tokens.last().map_or(0, |token| token.span().end());
            Token::end(end_offset)
        })
    }

    fn advance(&mut self) -> Token {
        let token = self.peek();
        if !token.is_end() {
            self.position += 1;
        }
        token
    }
}

/// Parses a token sequence into an expression tree
///
/// The whole sequence must form a single expression. Tokens left over
/// after a complete expression are an error.
///
/// # Errors
///
/// Returns a [`ParserError`] naming what was expected at the first point
/// where the tokens stop forming a valid expression.
pub fn parse(tokens: &[Token]) -> Result<ExprNode> {
    let mut stream = TokenStream::new(tokens);

    let expr = expr(&mut stream)?;

    let next = stream.peek();
    match next.kind() {
        TokenKind::End => Ok(expr),
        TokenKind::ParenRight => Err(ParserError::unmatched_paren(&next)),
        TokenKind::Number(_)
        | TokenKind::Plus
        | TokenKind::Minus
        | TokenKind::Star
        | TokenKind::Slash
        | TokenKind::ParenLeft => Err(ParserError::expect_end_of_input(&next)),
    }
}

fn expr(stream: &mut TokenStream<'_>) -> Result<ExprNode> {
    additive_expr(stream)
}

fn left_associative_binary_op(
    stream: &mut TokenStream<'_>,
    operand: fn(&mut TokenStream<'_>) -> Result<ExprNode>,
    operator: fn(TokenKind) -> Option<BinaryOp>,
) -> Result<ExprNode> {
    let mut expr = operand(stream)?;

    while let Some(op) = operator(stream.peek().kind()) {
        let op_token = stream.advance();
        let op = BinaryOpNode::new(op, op_token.span());

        let right = operand(stream).map_err(ParserError::binary_op_missing_second_operand(&op))?;

        expr = ExprNode::new_binary_op(op, expr, right);
    }

    Ok(expr)
}

/// Parses an additive expression (`+`, `-`)
fn additive_expr(stream: &mut TokenStream<'_>) -> Result<ExprNode> {
    left_associative_binary_op(stream, multiplicative_expr, |kind| match kind {
        TokenKind::Plus => Some(BinaryOp::Add),
        TokenKind::Minus => Some(BinaryOp::Sub),
        TokenKind::Number(_)
        | TokenKind::Star
        | TokenKind::Slash
        | TokenKind::ParenLeft
        | TokenKind::ParenRight
        | TokenKind::End => None,
    })
}

/// Parses a multiplicative expression (`*`, `/`)
fn multiplicative_expr(stream: &mut TokenStream<'_>) -> Result<ExprNode> {
    left_associative_binary_op(stream, neg_expr, |kind| match kind {
        TokenKind::Star => Some(BinaryOp::Mul),
        TokenKind::Slash => Some(BinaryOp::Div),
        TokenKind::Number(_)
        | TokenKind::Plus
        | TokenKind::Minus
        | TokenKind::ParenLeft
        | TokenKind::ParenRight
        | TokenKind::End => None,
    })
}

/// Parses a negation expression
fn neg_expr(stream: &mut TokenStream<'_>) -> Result<ExprNode> {
    let next = stream.peek();
    if !matches!(next.kind(), TokenKind::Minus) {
        return primary_expr(stream);
    }

    let minus = stream.advance();
    let op = UnaryOpNode::new(UnaryOp::Neg, minus.span());

    let operand = neg_expr(stream).map_err(ParserError::unary_op_missing_operand(&op))?;

    Ok(ExprNode::new_unary_op(op, operand))
}

/// Parses a number literal or a parenthesized expression
fn primary_expr(stream: &mut TokenStream<'_>) -> Result<ExprNode> {
    let next = stream.peek();
    match next.kind() {
        TokenKind::Number(value) => {
            stream.advance();
            Ok(ExprNode::new_literal(value, next.span()))
        }
        TokenKind::ParenLeft => parenthesized_expr(stream),
        TokenKind::Plus
        | TokenKind::Minus
        | TokenKind::Star
        | TokenKind::Slash
        | TokenKind::ParenRight
        | TokenKind::End => Err(ParserError::expect_expr(&next)),
    }
}

fn parenthesized_expr(stream: &mut TokenStream<'_>) -> Result<ExprNode> {
    let paren_left = stream.advance();

    let inner = expr(stream).map_err(ParserError::paren_missing_expression(&paren_left))?;

    let paren_right = stream.peek();
    if !matches!(paren_right.kind(), TokenKind::ParenRight) {
        return Err(ParserError::unclosed_paren(&paren_left, &paren_right));
    }
    stream.advance();

    let span = paren_left.span().merge(&paren_right.span());
    Ok(ExprNode::new_parenthesized(inner, span))
}
