//! Properties that hold for every input

use abacus_runtime::{ErrorKind, Operation, evaluate_expression, evaluate_scientific};
use proptest::prelude::*;

/// An arithmetic expression along with a direct way to compute its value
#[derive(Debug, Clone)]
enum Arith {
    Literal(String),
    Neg(Box<Arith>),
    Binary(Box<Arith>, char, Box<Arith>),
}

impl Arith {
    const fn precedence(&self) -> u8 {
        match self {
            Self::Binary(_, '+' | '-', _) => 1,
            Self::Binary(..) => 2,
            Self::Neg(_) => 3,
            Self::Literal(_) => 4,
        }
    }

    /// Writes the expression with only the parentheses precedence requires
    fn render(&self) -> String {
        match self {
            Self::Literal(text) => text.clone(),
            Self::Neg(operand) => format!("-{}", operand.render_at(3)),
            Self::Binary(left, op, right) => {
                let precedence = self.precedence();
                format!(
                    "{} {op} {}",
                    left.render_at(precedence),
                    right.render_at(precedence + 1)
                )
            }
        }
    }

    fn render_at(&self, minimum_precedence: u8) -> String {
        if self.precedence() < minimum_precedence {
            format!("({})", self.render())
        } else {
            self.render()
        }
    }

    /// Returns `None` if any divisor is zero
    fn value(&self) -> Option<f64> {
        match self {
            Self::Literal(text) => Some(text.parse().expect("literals are valid numbers")),
            Self::Neg(operand) => operand.value().map(|value| -value),
            Self::Binary(left, op, right) => {
                let (left, right) = (left.value()?, right.value()?);
                match op {
                    '+' => Some(left + right),
                    '-' => Some(left - right),
                    '*' => Some(left * right),
                    _ if right == 0.0 => None,
                    _ => Some(left / right),
                }
            }
        }
    }
}

fn literal_strategy() -> impl Strategy<Value = String> {
    (0u32..1000, 0u32..100).prop_map(|(whole, fraction)| {
        if fraction == 0 {
            whole.to_string()
        } else {
            format!("{whole}.{fraction}")
        }
    })
}

/// Generates expression trees whose text relies on operator precedence
fn arith_strategy() -> impl Strategy<Value = Arith> {
    literal_strategy()
        .prop_map(Arith::Literal)
        .prop_recursive(6, 64, 2, |inner| {
            prop_oneof![
                (
                    inner.clone(),
                    proptest::sample::select(vec!['+', '-', '*', '/']),
                    inner.clone()
                )
                    .prop_map(|(left, op, right)| Arith::Binary(
                        Box::new(left),
                        op,
                        Box::new(right)
                    )),
                inner.prop_map(|operand| Arith::Neg(Box::new(operand))),
            ]
        })
}

/// Generates well-formed expressions over small literals
fn expression_strategy() -> impl Strategy<Value = String> {
    literal_strategy().prop_recursive(6, 64, 2, |inner| {
        prop_oneof![
            (inner.clone(), "[-+*/]", inner.clone())
                .prop_map(|(left, op, right)| format!("{left} {op} {right}")),
            inner.clone().prop_map(|expr| format!("({expr})")),
            inner.prop_map(|expr| format!("-{expr}")),
        ]
    })
}

fn operation_strategy() -> impl Strategy<Value = Operation> {
    proptest::sample::select(Operation::ALL.to_vec())
}

proptest! {
    #[test]
    fn expressions_evaluate_to_their_value(expr in arith_strategy()) {
        let input = expr.render();

        match (expr.value(), evaluate_expression(&input)) {
            (None, result) => prop_assert_eq!(result, Err(ErrorKind::DivisionByZero)),
            (Some(expected), Ok(actual)) => {
                let tolerance = 1e-9 * expected.abs().max(1.0);
                prop_assert!(
                    (actual - expected).abs() <= tolerance,
                    "`{}` evaluated to {}, expected {}",
                    input,
                    actual,
                    expected
                );
            }
            (Some(expected), result) => prop_assert!(
                !expected.is_finite()
                    && matches!(result, Err(ErrorKind::NonFiniteResult { .. })),
                "`{}` gave {:?}, expected {}",
                input,
                result,
                expected
            ),
        }
    }

    #[test]
    fn successful_expressions_are_finite(input in expression_strategy()) {
        if let Ok(value) = evaluate_expression(&input) {
            prop_assert!(value.is_finite(), "`{}` produced {}", input, value);
        }
    }

    #[test]
    fn arbitrary_text_never_panics(input in "\\PC{0,40}") {
        if let Ok(value) = evaluate_expression(&input) {
            prop_assert!(value.is_finite());
        }
    }

    #[test]
    fn expressions_are_deterministic(input in expression_strategy()) {
        prop_assert_eq!(evaluate_expression(&input), evaluate_expression(&input));
    }

    #[test]
    fn successful_operations_are_finite(
        operation in operation_strategy(),
        value in proptest::num::f64::ANY,
    ) {
        if let Ok(result) = evaluate_scientific(operation.name(), value) {
            prop_assert!(result.is_finite(), "{}({}) produced {}", operation, value, result);
        }
    }

    #[test]
    fn operations_are_deterministic(
        operation in operation_strategy(),
        value in -1.0e6f64..1.0e6,
    ) {
        prop_assert_eq!(
            evaluate_scientific(operation.name(), value),
            evaluate_scientific(operation.name(), value)
        );
    }
}
