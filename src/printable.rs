// Copyright (c) 2021 FZI Forschungszentrum Informatik
// SPDX-License-Identifier: Apache-2.0
//! Printable messages
//!
//! A [Printable] is an immutable sequence of [Fragment]s describing a message
//! which is to be printed at simulation time. Fragments are either literal
//! text, hardware values to be formatted with some [Directive], names of
//! hardware values or other, embedded printables.
//!
//! Before a printable can be emitted as part of a statement, it needs to be
//! flattened into a format string and a list of arguments (see
//! [Printable::flatten]).

mod flatten;

pub mod parsers;

#[cfg(test)]
pub mod tests;

use std::fmt;
use std::sync::Arc;

use crate::entity::Value;
use crate::error::FormatError;
use crate::types::{Aggregate, Kind};

pub use flatten::Flattened;


/// A printable message
///
/// Printables are composed via concatenation, which always creates a new
/// printable. A printable is never modified once created.
#[derive(Clone, Debug, PartialEq)]
pub struct Printable {
    fragments: Arc<[Fragment]>,
}

impl Printable {
    /// Create an empty printable
    pub fn empty() -> Self {
        Default::default()
    }

    /// Create a printable consisting of the given literal text
    ///
    /// The text is taken as is, i.e. no escape sequences are resolved. A `%` in
    /// the text will be printed as a `%`. An empty text results in an empty
    /// printable.
    pub fn literal(text: impl Into<Arc<str>>) -> Self {
        let text = text.into();
        if text.is_empty() {
            Self::empty()
        } else {
            Fragment::Literal(text).into()
        }
    }

    /// Create a printable consisting of a single, literal `%`
    pub fn percent() -> Self {
        Fragment::Percent.into()
    }

    /// Create a printable formatting the given value
    ///
    /// Only bit-vector values may be formatted with an explicit radix or as a
    /// character. The directives `Name` and `FullName` yield the same result as
    /// [Printable::name]. The validity of [Directive::Other] directives
    /// attached to bit-vectors is only checked during flattening.
    pub fn value(value: Value, directive: Directive) -> Result<Self, FormatError> {
        match directive {
            Directive::Name     => return Ok(Self::name(value, NameKind::Short)),
            Directive::FullName => return Ok(Self::name(value, NameKind::Full)),
            Directive::Default  => { value.kind()?; },
            d                   => if !value.kind()?.is_bit_vector() {
                return Err(FormatError::IllegalSpecifier(d.to_string()))
            },
        }

        Ok(Fragment::Value(value, directive).into())
    }

    /// Create a printable rendering the short or full name of a value
    pub fn name(value: Value, kind: NameKind) -> Self {
        Fragment::Name(value, kind).into()
    }

    /// Create a printable embedding another printable
    pub fn nested(inner: Self) -> Self {
        Fragment::Nested(inner).into()
    }

    /// Render a value in its default, structural form
    ///
    /// Bit-vectors are rendered as decimals. Vectors are rendered as
    /// `Vec(e0, e1, ...)`, bundles as `Name(f0 -> v0, f1 -> v1, ...)` with the
    /// bundle's type name and fields in declaration order. The elements
    /// themselves are rendered in their default form. Values of any other kind
    /// are rendered as the name of their type.
    pub fn default_render(value: &Value) -> Result<Self, FormatError> {
        use crate::types::{Type, Typed};

        let r#type = value.r#type().map_err(|e| FormatError::Untyped(e.to_string()))?;

        let elements = |prefix: &str| -> Result<Self, FormatError> {
            let items = value
                .elements()?
                .into_iter()
                .map(|(n, e)| Self::value(e, Directive::Default).map(|v| match n {
                    Some(n) => Self::literal(format!("{} -> ", n)) + v,
                    None    => v,
                }))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Self::literal(format!("{}(", prefix)) + Self::join(items, ", ") + Self::literal(")"))
        };

        match (r#type.kind(), &r#type) {
            (Kind::BitVector, _)                            => Self::value(value.clone(), Directive::Decimal),
            (Kind::Aggregate(Aggregate::Vec), _)            => elements("Vec"),
            (Kind::Aggregate(Aggregate::Bundle), Type::Bundle{name, ..}) => elements(name.as_ref()),
            (_, t)                                          => Ok(Self::literal(t.to_string())),
        }
    }

    /// Join the given printables, separated by the given literal text
    pub fn join(items: impl IntoIterator<Item = Self>, separator: &str) -> Self {
        let separator = Self::literal(separator);
        let mut items = items.into_iter();
        let first = items.next().unwrap_or_default();
        items.fold(first, |res, item| res + separator.clone() + item)
    }

    /// Concatenate this printable with another one
    ///
    /// The fragments of `other` will follow the fragments of `self`. Neither
    /// of the original printables is modified.
    pub fn concat(&self, other: &Self) -> Self {
        if self.is_empty() {
            other.clone()
        } else if other.is_empty() {
            self.clone()
        } else {
            self.fragments.iter().chain(other.fragments.iter()).cloned().collect::<Vec<_>>().into()
        }
    }

    /// Retrieve the fragments of this printable
    pub fn fragments(&self) -> &[Fragment] {
        self.fragments.as_ref()
    }

    /// Check whether this printable is empty
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Retrieve all hardware values referred to in this printable
    ///
    /// This includes values referred to in embedded printables. Both values
    /// formatted and values whose names are printed are included. The order in
    /// which the values are returned is unspecified.
    pub fn references(&self) -> impl Iterator<Item = &Value> {
        use transiter::AutoTransIter;

        self.fragments.iter().flat_map(|f| f.trans_iter()).filter_map(|f| match f {
            Fragment::Value(v, _)   => Some(v),
            Fragment::Name(v, _)    => Some(v),
            _ => None,
        })
    }
}

impl Default for Printable {
    fn default() -> Self {
        Vec::<Fragment>::new().into()
    }
}

impl From<Fragment> for Printable {
    fn from(fragment: Fragment) -> Self {
        vec![fragment].into()
    }
}

impl From<Vec<Fragment>> for Printable {
    fn from(fragments: Vec<Fragment>) -> Self {
        Self {fragments: fragments.into()}
    }
}

impl From<&str> for Printable {
    fn from(text: &str) -> Self {
        Self::literal(text)
    }
}

impl From<String> for Printable {
    fn from(text: String) -> Self {
        Self::literal(text)
    }
}

impl std::ops::Add for Printable {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.concat(&rhs)
    }
}

impl std::iter::FromIterator<Printable> for Printable {
    fn from_iter<I: IntoIterator<Item = Printable>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), |res, p| res + p)
    }
}


/// A single fragment of a [Printable]
#[derive(Clone, Debug, PartialEq)]
pub enum Fragment {
    /// Literal text, printed as is
    Literal(Arc<str>),
    /// A literal `%`
    Percent,
    /// A hardware value, formatted according to the directive
    Value(Value, Directive),
    /// The name of a hardware value
    Name(Value, NameKind),
    /// An embedded printable
    Nested(Printable),
}

impl<'a> transiter::AutoTransIter<&'a Fragment> for &'a Fragment {
    type RecIter = Vec<Self>;

    fn recurse(item: &Self) -> Self::RecIter {
        if let Fragment::Nested(p) = item {
            p.fragments().iter().collect()
        } else {
            Default::default()
        }
    }
}


/// Formatting directive for a single value
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Directive {
    /// Format according to the value's kind
    Default,
    /// Print the short name of the value
    Name,
    /// Print the full name of the value
    FullName,
    Hex,
    Binary,
    Decimal,
    Character,
    /// Some directive not known to us
    Other(char),
}

impl Directive {
    /// Retrieve the directive corresponding to a format character
    pub fn from_char(c: char) -> Self {
        match c {
            's' => Self::Default,
            'n' => Self::Name,
            'N' => Self::FullName,
            'x' => Self::Hex,
            'b' => Self::Binary,
            'd' => Self::Decimal,
            'c' => Self::Character,
            c   => Self::Other(c),
        }
    }

    /// Retrieve the format character corresponding to this directive
    pub fn format_char(&self) -> char {
        match self {
            Self::Default   => 's',
            Self::Name      => 'n',
            Self::FullName  => 'N',
            Self::Hex       => 'x',
            Self::Binary    => 'b',
            Self::Decimal   => 'd',
            Self::Character => 'c',
            Self::Other(c)  => *c,
        }
    }
}

impl Default for Directive {
    fn default() -> Self {
        Self::Default
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "%{}", self.format_char())
    }
}


/// Kind of name to print for a value
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum NameKind {
    Short,
    Full,
}
