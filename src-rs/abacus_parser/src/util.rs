use abacus_shared::span::Span;
use nom::{IResult, Parser as NomParser, error::Error};
use nom_locate::LocatedSpan;

/// A span of text in the input string.
///
/// Tracks the byte offset of every fragment so that tokens can record
/// where they came from.
pub type InputSpan<'a> = LocatedSpan<&'a str>;

/// Returns the span between the start of `start_input_span` and the start
/// of `end_input_span`.
pub fn span_from(start_input_span: InputSpan<'_>, end_input_span: InputSpan<'_>) -> Span {
    Span::new(
        start_input_span.location_offset(),
        end_input_span.location_offset(),
    )
}

/// A result type for tokenizer operations.
///
/// This type alias wraps nom's `IResult` with our input span type.
pub type Result<'a, O, E = Error<InputSpan<'a>>> = IResult<InputSpan<'a>, O, E>;

/// A trait for parser implementations that work with our input span type.
///
/// This trait is automatically implemented for any type that implements
/// nom's `Parser` trait with our input span type.
pub trait Parser<'a, O, E = Error<InputSpan<'a>>>:
    NomParser<InputSpan<'a>, Output = O, Error = E>
{
}

impl<'a, O, E, P> Parser<'a, O, E> for P where P: NomParser<InputSpan<'a>, Output = O, Error = E> {}
