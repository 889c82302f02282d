//! Parsers for format directives

use nom::character::complete::{char as chr, digit1, one_of, satisfy};
use nom::combinator::{map, map_res, not, opt, recognize};
use nom::error::context;
use nom::multi::many0;
use nom::sequence::{preceded, tuple};

use crate::parsers::IResult;

use super::host::HostSpec;


/// Parse a directive token
///
/// A directive token consists of a `%` followed by any characters up to and
/// including the first alphabetic character, e.g. `%x` or `%2.2f`. A `%`
/// followed by another `%` is not a directive token.
pub fn directive_token(input: &str) -> IResult<&str> {
    use nom::bytes::complete::take_till;

    context(
        "expected directive",
        recognize(tuple((
            chr('%'),
            not(chr('%')),
            take_till(char::is_alphabetic),
            satisfy(char::is_alphabetic),
        )))
    )(input)
}


/// Split a leading directive token off the given text
///
/// If the text starts with a directive token, this function returns the token
/// and the remaining text. Otherwise, `None` and the whole text are returned.
pub fn split_directive(text: &str) -> (Option<&str>, &str) {
    match directive_token(text) {
        Ok((rest, token))   => (Some(token), rest),
        Err(_)              => (None, text),
    }
}


/// Parse a printf-style format specifier
pub fn host_spec(input: &str) -> IResult<HostSpec> {
    context(
        "expected format specifier",
        map(
            tuple((
                chr('%'),
                many0(one_of("-+ 0#")),
                opt(number),
                opt(preceded(chr('.'), number)),
                satisfy(char::is_alphabetic),
            )),
            |(_, flags, width, precision, conversion)| HostSpec {
                left: flags.contains(&'-'),
                plus: flags.contains(&'+'),
                space: flags.contains(&' '),
                zero: flags.contains(&'0'),
                alternate: flags.contains(&'#'),
                width,
                precision,
                conversion,
            },
        )
    )(input)
}


/// Parse an unsigned decimal number
fn number(input: &str) -> IResult<usize> {
    map_res(digit1, str::parse)(input)
}
