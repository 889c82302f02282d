//! Parser utilities


use nom::combinator::value;
use nom::error::context;

use crate::error::FormatError;

/// Result type for our (sub)parsers
pub type IResult<'i, O> = nom::IResult<&'i str, O, Error<'i>>;


/// Error type for our (sub)parsers
pub type Error<'i> = nom::error::VerboseError<&'i str>;


/// Parse a string literal body, resolving escape sequences
///
/// The escapes recognized are the ones known from Rust string literals:
/// `\n`, `\r`, `\t`, `\\`, `\0`, `\'`, `\"`, `\xHH` for ASCII characters and
/// `\u{H...}` for arbitrary unicode scalar values.
pub fn escaped(input: &str) -> IResult<String> {
    use nom::branch::alt;
    use nom::bytes::complete::{escaped_transform, is_not, take_while_m_n};
    use nom::character::complete::char as chr;
    use nom::combinator::map_opt;
    use nom::sequence::{delimited, preceded};

    let hex = |min, max| take_while_m_n(min, max, |c: char| c.is_ascii_hexdigit());

    context(
        "expected string literal",
        escaped_transform(is_not("\\"), '\\', alt((
            value('\n', chr('n')),
            value('\r', chr('r')),
            value('\t', chr('t')),
            value('\\', chr('\\')),
            value('\0', chr('0')),
            value('\'', chr('\'')),
            value('"', chr('"')),
            map_opt(
                preceded(chr('x'), hex(2, 2)),
                |s| u8::from_str_radix(s, 16).ok().filter(|b| b.is_ascii()).map(char::from),
            ),
            map_opt(
                preceded(chr('u'), delimited(chr('{'), hex(1, 6), chr('}'))),
                |s| u32::from_str_radix(s, 16).ok().and_then(char::from_u32),
            ),
        )))
    )(input)
}


/// Resolve the escape sequences in the given literal text
///
/// See [escaped] for the escape sequences recognized.
pub fn unescape(input: &str) -> Result<String, FormatError> {
    use nom::Finish;
    use nom::combinator::all_consuming;

    if !input.contains('\\') {
        return Ok(input.to_string())
    }

    all_consuming(escaped)(input)
        .finish()
        .map(|(_, s)| s)
        .map_err(|_| FormatError::Escape(input.to_string()))
}
