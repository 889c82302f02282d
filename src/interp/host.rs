// Copyright (c) 2021 FZI Forschungszentrum Informatik
// SPDX-License-Identifier: Apache-2.0
//! Plain host values and their formatting

use std::fmt;

use num_bigint::BigInt;

use crate::error::FormatError;


/// A plain value of the host program
///
/// Host values are not part of the circuit. They are formatted eagerly when a
/// printable is constructed and end up as literal text.
#[derive(Clone, Debug, PartialEq)]
pub enum HostValue {
    Bool(bool),
    Int(BigInt),
    Float(f64),
    Char(char),
    Str(String),
}

impl HostValue {
    /// Format this value according to a printf-style format specifier
    ///
    /// The specifier has the form `%[flags][width][.precision]conversion`.
    /// Supported flags are `-` (left-justify), `+` (always print a sign), ` `
    /// (leading space for positive numbers), `0` (zero padding) and `#`
    /// (alternate form). Supported conversions are `d`, `x`, `X` and `o` for
    /// integers, `f`, `e` and `E` for floating point values, `c` for
    /// characters and integers denoting a code point, `b` for booleans and
    /// `s` and `S` for any value.
    ///
    /// For integer conversions, the precision denotes the minimum number of
    /// digits. Host integers carry no bit-width. Hence, negative integers are
    /// always printed as sign and magnitude, also in hexadecimal and octal,
    /// e.g. `-1` formatted with `%x` yields `-1`.
    pub fn format(&self, spec: &str) -> Result<String, FormatError> {
        use nom::Finish;
        use nom::combinator::all_consuming;

        let parsed = all_consuming(super::parsers::host_spec)(spec)
            .finish()
            .map(|(_, s)| s)
            .map_err(|_| FormatError::IllegalSpecifier(spec.to_string()))?;
        parsed.apply(self).ok_or_else(|| FormatError::HostConversion{spec: spec.to_string(), value: self.to_string()})
    }
}

impl fmt::Display for HostValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b)   => fmt::Display::fmt(b, f),
            Self::Int(i)    => fmt::Display::fmt(i, f),
            Self::Float(v)  => fmt::Display::fmt(v, f),
            Self::Char(c)   => fmt::Display::fmt(c, f),
            Self::Str(s)    => fmt::Display::fmt(s, f),
        }
    }
}

macro_rules! host_int {
    ($($t:ty),*) => {$(
        impl From<$t> for HostValue {
            fn from(value: $t) -> Self {
                Self::Int(value.into())
            }
        }
    )*};
}

host_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<BigInt> for HostValue {
    fn from(value: BigInt) -> Self {
        Self::Int(value)
    }
}

impl From<f32> for HostValue {
    fn from(value: f32) -> Self {
        Self::Float(value.into())
    }
}

impl From<f64> for HostValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for HostValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<char> for HostValue {
    fn from(value: char) -> Self {
        Self::Char(value)
    }
}

impl From<&str> for HostValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for HostValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}


/// A parsed printf-style format specifier
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HostSpec {
    pub left: bool,
    pub plus: bool,
    pub space: bool,
    pub zero: bool,
    pub alternate: bool,
    pub width: Option<usize>,
    pub precision: Option<usize>,
    pub conversion: char,
}

impl HostSpec {
    /// Apply the specifier to the given value
    ///
    /// Returns `None` if the conversion is not applicable to the value.
    pub fn apply(&self, value: &HostValue) -> Option<String> {
        use num_traits::{Signed, ToPrimitive};

        use HostValue as HV;

        let sign = |negative: bool| if negative {
            "-"
        } else if self.plus {
            "+"
        } else if self.space {
            " "
        } else {
            ""
        };
        let prefix = |p: &'static str| if self.alternate { p } else { "" };

        // For integers, the precision is the minimum number of digits and
        // overrides the `0` flag.
        let digits = |d: String| match self.precision {
            Some(p) => format!("{:0>width$}", d, width = p),
            None    => d,
        };
        let int_zero = self.precision.is_none();

        let (sign, body, numeric) = match (self.conversion, value) {
            ('d', HV::Int(i))   => (sign(i.is_negative()), digits(i.magnitude().to_string()), int_zero),
            ('x', HV::Int(i))   =>
                (sign(i.is_negative()), format!("{}{}", prefix("0x"), digits(format!("{:x}", i.magnitude()))), int_zero),
            ('X', HV::Int(i))   =>
                (sign(i.is_negative()), format!("{}{}", prefix("0X"), digits(format!("{:X}", i.magnitude()))), int_zero),
            ('o', HV::Int(i))   =>
                (sign(i.is_negative()), format!("{}{}", prefix("0"), digits(format!("{:o}", i.magnitude()))), int_zero),
            ('f', HV::Float(v)) => (
                sign(v.is_sign_negative() && *v != 0.0),
                format!("{:.*}", self.precision.unwrap_or(6), v.abs()),
                v.is_finite(),
            ),
            ('e', HV::Float(v)) => (
                sign(v.is_sign_negative() && *v != 0.0),
                scientific(v.abs(), self.precision.unwrap_or(6), false),
                v.is_finite(),
            ),
            ('E', HV::Float(v)) => (
                sign(v.is_sign_negative() && *v != 0.0),
                scientific(v.abs(), self.precision.unwrap_or(6), true),
                v.is_finite(),
            ),
            ('c', HV::Char(c))  => ("", c.to_string(), false),
            ('c', HV::Int(i))   => ("", i.to_u32().and_then(std::char::from_u32)?.to_string(), false),
            ('b', HV::Bool(b))  => ("", self.truncated(b.to_string()), false),
            ('b', _)            => ("", self.truncated("true".to_string()), false),
            ('s', v)            => ("", self.truncated(v.to_string()), false),
            ('S', v)            => ("", self.truncated(v.to_string()).to_uppercase(), false),
            _ => return None,
        };

        let len = sign.chars().count() + body.chars().count();
        let padding = self.width.map(|w| w.saturating_sub(len)).unwrap_or(0);
        let pad = |c: char| std::iter::repeat(c).take(padding).collect::<String>();

        let res = if self.left {
            format!("{}{}{}", sign, body, pad(' '))
        } else if self.zero && numeric {
            format!("{}{}{}", sign, pad('0'), body)
        } else {
            format!("{}{}{}", pad(' '), sign, body)
        };
        Some(res)
    }

    /// Truncate the given text to the precision, if any
    fn truncated(&self, text: String) -> String {
        match self.precision {
            Some(p) => text.chars().take(p).collect(),
            None    => text,
        }
    }
}


/// Format a non-negative float in scientific notation
///
/// The exponent is always signed and has at least two digits, e.g. `2.05e+01`.
fn scientific(value: f64, precision: usize, upper: bool) -> String {
    let res = format!("{:.*e}", precision, value);
    let (mantissa, exp) = match res.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or_default()),
        None => return res,
    };
    let sign = if exp < 0 { '-' } else { '+' };
    let e = if upper { 'E' } else { 'e' };
    format!("{}{}{}{:02}", mantissa, e, sign, exp.abs())
}
