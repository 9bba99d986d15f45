use abacus_shared::error::Context;

use crate::{
    error::reason::{IncompleteKind, ParserErrorReason},
    token::error::TokenErrorKind,
};

pub fn from_reason(reason: &ParserErrorReason) -> Vec<Context> {
    [
        allowed_characters(reason),
        unclosed_paren(reason),
        unmatched_paren(reason),
        number_too_large(reason),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn allowed_characters(reason: &ParserErrorReason) -> Option<Context> {
    let is_invalid_character = matches!(
        reason,
        ParserErrorReason::TokenError(TokenErrorKind::InvalidCharacter(_))
    );

    is_invalid_character.then(|| {
        Context::Help(
            "expressions may only contain digits, `.`, `+`, `-`, `*`, `/`, parentheses and spaces"
                .to_string(),
        )
    })
}

fn unclosed_paren(reason: &ParserErrorReason) -> Option<Context> {
    let ParserErrorReason::Incomplete {
        cause,
        kind: IncompleteKind::UnclosedParen,
    } = reason
    else {
        return None;
    };

    // input that reached the parser is ascii, so byte offsets are columns
    let column = cause.start() + 1;

    Some(Context::Note(format!(
        "the parenthesis opened at column {column} is never closed"
    )))
}

fn unmatched_paren(reason: &ParserErrorReason) -> Option<Context> {
    matches!(reason, ParserErrorReason::UnmatchedParen)
        .then(|| Context::Help("remove the `)` or add a matching `(` before it".to_string()))
}

fn number_too_large(reason: &ParserErrorReason) -> Option<Context> {
    matches!(
        reason,
        ParserErrorReason::TokenError(TokenErrorKind::NumberTooLarge)
    )
    .then(|| {
        Context::Note(format!(
            "the largest representable number is about {:e}",
            f64::MAX
        ))
    })
}
