use abacus_ast::{BinaryOp, Expr, ExprNode, UnaryOp};

use crate::{classify::classify, error::EvalError};

/// Evaluates an expression tree
///
/// Operands are evaluated left to right, and the first error stops
/// evaluation. The final value is classified, so a successful result is
/// always finite.
///
/// # Errors
///
/// Returns [`EvalError::DivisionByZero`] when a divisor evaluates to zero
/// and [`EvalError::NonFiniteResult`] when the result is NaN or infinite.
pub fn evaluate(expr: &ExprNode) -> Result<f64, EvalError> {
    let value = eval_expr(expr)?;
    classify(value)
}

fn eval_expr(expr: &ExprNode) -> Result<f64, EvalError> {
    match &**expr {
        Expr::Literal(value) => Ok(*value),
        Expr::Parenthesized { expr } => eval_expr(expr),
        Expr::UnaryOp { op, expr } => {
            let value = eval_expr(expr)?;
            Ok(eval_unary_op(*op.node_value(), value))
        }
        Expr::BinaryOp { op, left, right } => {
            let left_value = eval_expr(left)?;
            let right_value = eval_expr(right)?;
            eval_binary_op(*op.node_value(), left_value, right_value, right)
        }
    }
}

const fn eval_unary_op(op: UnaryOp, value: f64) -> f64 {
    match op {
        UnaryOp::Neg => -value,
    }
}

fn eval_binary_op(
    op: BinaryOp,
    left: f64,
    right: f64,
    right_expr: &ExprNode,
) -> Result<f64, EvalError> {
    match op {
        BinaryOp::Add => Ok(left + right),
        BinaryOp::Sub => Ok(left - right),
        BinaryOp::Mul => Ok(left * right),
        // matches both positive and negative zero
        BinaryOp::Div if right == 0.0 => Err(EvalError::DivisionByZero {
            divisor_span: right_expr.span(),
        }),
        BinaryOp::Div => Ok(left / right),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use abacus_parser::parse_expression;
    use abacus_shared::span::Span;

    use crate::error::NonFiniteKind;

    fn eval_str(input: &str) -> Result<f64, EvalError> {
        let expr = parse_expression(input).expect("input should parse");
        evaluate(&expr)
    }

    #[test]
    fn arithmetic() {
        assert_eq!(eval_str("2*(3+4)"), Ok(14.0));
        assert_eq!(eval_str("1 + 2 * 3"), Ok(7.0));
        assert_eq!(eval_str("10 - 4 - 3"), Ok(3.0));
        assert_eq!(eval_str("8 / 4 / 2"), Ok(1.0));
        assert_eq!(eval_str("7 / 2"), Ok(3.5));
    }

    #[test]
    fn negation() {
        assert_eq!(eval_str("-3"), Ok(-3.0));
        assert_eq!(eval_str("--3"), Ok(3.0));
        assert_eq!(eval_str("-(2 - 5) * 2"), Ok(6.0));
    }

    #[test]
    fn decimals() {
        let value = eval_str(".1 + .2").expect("should evaluate");

        assert!((value - 0.3).abs() < 1e-12);
    }

    #[test]
    fn division_by_zero() {
        assert_eq!(
            eval_str("1/0"),
            Err(EvalError::DivisionByZero {
                divisor_span: Span::new(2, 3)
            })
        );
    }

    #[test]
    fn division_by_computed_zero() {
        assert_eq!(
            eval_str("10 / (2 - 2)"),
            Err(EvalError::DivisionByZero {
                divisor_span: Span::new(5, 12)
            })
        );
    }

    #[test]
    fn division_by_negative_zero() {
        assert!(matches!(
            eval_str("1 / -0"),
            Err(EvalError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn first_error_wins() {
        // the left division fails before the right one is evaluated
        assert_eq!(
            eval_str("1/0 + 2/0"),
            Err(EvalError::DivisionByZero {
                divisor_span: Span::new(2, 3)
            })
        );
    }

    #[test]
    fn zero_divided_by_nonzero() {
        assert_eq!(eval_str("0 / 5"), Ok(0.0));
    }

    #[test]
    fn overflow_is_infinite() {
        let huge = format!("1{}", "0".repeat(308));
        let input = format!("{huge} * 10");

        assert_eq!(
            eval_str(&input),
            Err(EvalError::NonFiniteResult {
                kind: NonFiniteKind::Infinite
            })
        );
    }

    #[test]
    fn infinity_minus_infinity_is_nan() {
        let huge = format!("1{}", "0".repeat(308));
        let input = format!("{huge} * 10 - {huge} * 10");

        assert_eq!(
            eval_str(&input),
            Err(EvalError::NonFiniteResult {
                kind: NonFiniteKind::NaN
            })
        );
    }
}
