//! Parsers for flattened format strings

use nom::branch::alt;
use nom::bytes::complete::{is_not, tag};
use nom::character::complete::{char as chr, one_of};
use nom::combinator::{map, value};
use nom::error::context;
use nom::multi::many0;
use nom::sequence::preceded;

use crate::parsers::IResult;


/// Segment of a flattened format string
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Segment<'a> {
    /// Literal text without any `%`
    Text(&'a str),
    /// An escaped, literal `%`
    Percent,
    /// A directive consuming one argument
    Directive(char),
}


/// Parse a flattened format string into its segments
pub fn format_string(input: &str) -> IResult<Vec<Segment>> {
    many0(context(
        "expected text, '%%' or one of the directives '%d', '%x', '%b' and '%c'",
        alt((
            map(is_not("%"), Segment::Text),
            value(Segment::Percent, tag("%%")),
            map(preceded(chr('%'), one_of("dxbc")), Segment::Directive),
        ))
    ))(input)
}
