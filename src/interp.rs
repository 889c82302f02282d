// Copyright (c) 2021 FZI Forschungszentrum Informatik
// SPDX-License-Identifier: Apache-2.0
//! Construction of printables from interpolated strings
//!
//! An interpolated string consists of literal parts and arguments, with one
//! argument between each pair of consecutive parts. Hence, there is always one
//! more part than there are arguments. This module provides two interpreters
//! for such strings:
//!
//! * [legacy] formats every hardware value in its default form. `%` has no
//!   special meaning.
//! * [directive] allows each argument to be followed by a format directive,
//!   e.g. `%x` or `%2.2f`. A literal `%` must be written as `%%`.
//!
//! In both cases, the literal parts are subject to escape processing (see
//! [crate::parsers::escaped]). Arguments may be hardware values, printables or
//! plain host values. Host values are formatted eagerly and end up as literal
//! text.
//!
//! The macros [p!](crate::p) and [cf!](crate::cf) provide a convenient
//! interface based on templates, in which arguments are marked by `{}`.

pub mod host;
pub mod parsers;


use crate::entity::Value;
use crate::error::FormatError;
use crate::parsers::unescape;
use crate::printable::{Directive, Printable};
use crate::types::Kind;

pub use host::HostValue;


/// An argument of an interpolated string
#[derive(Clone, Debug, PartialEq)]
pub enum Arg {
    /// A hardware value
    Value(Value),
    /// An embedded printable
    Printable(Printable),
    /// A plain host value
    Host(HostValue),
}

impl From<Value> for Arg {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<&Value> for Arg {
    fn from(value: &Value) -> Self {
        Self::Value(value.clone())
    }
}

impl From<Printable> for Arg {
    fn from(printable: Printable) -> Self {
        Self::Printable(printable)
    }
}

impl From<&Printable> for Arg {
    fn from(printable: &Printable) -> Self {
        Self::Printable(printable.clone())
    }
}

impl From<HostValue> for Arg {
    fn from(value: HostValue) -> Self {
        Self::Host(value)
    }
}

macro_rules! host_arg {
    ($($t:ty),*) => {$(
        impl From<$t> for Arg {
            fn from(value: $t) -> Self {
                Self::Host(value.into())
            }
        }
    )*};
}

host_arg!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
    num_bigint::BigInt, f32, f64, bool, char, &str, String
);


/// Build a printable, formatting all hardware values in their default form
///
/// Hardware values are formatted according to [Directive::Default], printables
/// are embedded as they are and host values are converted to text. Host values
/// converting to an empty text don't contribute anything to the result.
pub fn legacy(parts: &[&str], args: Vec<Arg>) -> Result<Printable, FormatError> {
    check_lengths(parts, &args)?;

    let first = Printable::literal(unescape(parts[0])?);
    args.into_iter().zip(&parts[1..]).try_fold(first, |res, (arg, part)| {
        let arg = match arg {
            Arg::Value(v)       => Printable::value(v, Directive::Default)?,
            Arg::Printable(p)   => Printable::nested(p),
            Arg::Host(h)        => Printable::literal(h.to_string()),
        };
        Ok(res + arg + Printable::literal(unescape(part)?))
    })
}


/// Build a printable, honouring format directives following arguments
///
/// Each part following an argument may start with a directive for that
/// argument. If it doesn't, the argument is formatted as if it was followed by
/// `%s`. Any other `%` in a part must be part of a `%%`, denoting a literal
/// `%`.
///
/// Bit-vectors accept single character directives only. `%s` formats them in
/// their default form, `%n` and `%N` print their short and full name and any
/// other directive is passed on. Other hardware values only accept `%s`, `%n`
/// and `%N`, printables only `%s`. Host values are formatted according to the
/// directive (see [HostValue::format]).
pub fn directive(parts: &[&str], args: Vec<Arg>) -> Result<Printable, FormatError> {
    check_lengths(parts, &args)?;

    let parts = parts.iter().map(|p| unescape(p)).collect::<Result<Vec<_>, _>>()?;

    let first = literal_text(&parts[0])?;
    args.into_iter().zip(&parts[1..]).try_fold(first, |res, (arg, part)| {
        let (spec, rest) = parsers::split_directive(part);
        let spec = spec.unwrap_or("%s");
        trace!("Formatting {:?} with '{}'", arg, spec);
        Ok(res + format_arg(arg, spec)? + literal_text(rest)?)
    })
}


/// Build a printable from a template via [legacy]
///
/// In the template, each argument is represented by a `{}`.
pub fn legacy_template(template: &str, args: Vec<Arg>) -> Result<Printable, FormatError> {
    legacy(&template_parts(template), args)
}


/// Build a printable from a template via [directive]
///
/// In the template, each argument is represented by a `{}`.
pub fn directive_template(template: &str, args: Vec<Arg>) -> Result<Printable, FormatError> {
    directive(&template_parts(template), args)
}


/// Split a template into its literal parts
pub fn template_parts(template: &str) -> Vec<&str> {
    template.split("{}").collect()
}


/// Check that there is exactly one more part than there are arguments
fn check_lengths(parts: &[&str], args: &[Arg]) -> Result<(), FormatError> {
    if parts.len() == args.len() + 1 {
        Ok(())
    } else {
        Err(FormatError::ArgumentCount{parts: parts.len(), args: args.len()})
    }
}


/// Format a single argument according to a directive token
fn format_arg(arg: Arg, spec: &str) -> Result<Printable, FormatError> {
    match arg {
        Arg::Value(v) => if v.kind()? == Kind::BitVector {
            let mut chars = spec.chars().skip(1);
            match (chars.next(), chars.next()) {
                (Some(c), None) => Printable::value(v, Directive::from_char(c)),
                _ => Err(FormatError::MultiCharSpecifier(spec.to_string())),
            }
        } else {
            match spec {
                "%s" | "%n" | "%N"  => Printable::value(v, Directive::from_char(spec.chars().nth(1).unwrap_or('s'))),
                _ => Err(FormatError::IllegalSpecifier(spec.to_string())),
            }
        },
        Arg::Printable(p) => if spec == "%s" {
            Ok(Printable::nested(p))
        } else {
            Err(FormatError::PrintableSpecifier(spec.to_string()))
        },
        Arg::Host(h) => h.format(spec).map(Printable::literal),
    }
}


/// Convert literal text, resolving `%%` into literal `%`s
fn literal_text(text: &str) -> Result<Printable, FormatError> {
    let pieces: Vec<_> = text.split("%%").collect();
    if pieces.iter().any(|p| p.contains('%')) {
        return Err(FormatError::UnescapedPercent)
    }

    let mut pieces = pieces.into_iter().map(Printable::literal);
    let first = pieces.next().unwrap_or_default();
    Ok(pieces.fold(first, |res, p| res + Printable::percent() + p))
}


/// Build a printable from a template, formatting hardware values by default
///
/// Each `{}` in the template is replaced by the next argument. The arguments
/// may be anything convertible to an [Arg](crate::interp::Arg). See
/// [legacy](crate::interp::legacy) for details.
#[macro_export]
macro_rules! p {
    ($template:expr $(, $arg:expr)* $(,)?) => {
        $crate::interp::legacy_template($template, vec![$($crate::interp::Arg::from($arg)),*])
    };
}


/// Build a printable from a template, honouring format directives
///
/// Each `{}` in the template is replaced by the next argument, which may be
/// followed by a format directive such as `%x`. The arguments may be anything
/// convertible to an [Arg](crate::interp::Arg). See
/// [directive](crate::interp::directive) for details.
#[macro_export]
macro_rules! cf {
    ($template:expr $(, $arg:expr)* $(,)?) => {
        $crate::interp::directive_template($template, vec![$($crate::interp::Arg::from($arg)),*])
    };
}
