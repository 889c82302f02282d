// Copyright (c) 2021 FZI Forschungszentrum Informatik
// SPDX-License-Identifier: Apache-2.0
//! Error types

use std::error::Error;
use std::fmt;

use crate::parsers;


/// Error originating from the construction or flattening of a printable
///
/// All rules a message has to obey are reported through this type. None of
/// them are recoverable: a malformed message is an error in the circuit
/// description.
#[derive(Clone, Debug, PartialEq)]
pub enum FormatError {
    /// A single `%` not forming a directive was found in literal text
    UnescapedPercent,
    /// A directive with width or precision was attached to a bit-vector
    MultiCharSpecifier(String),
    /// The directive is not applicable to the value it is attached to
    IllegalSpecifier(String),
    /// A directive other than `%s` was attached to an embedded printable
    PrintableSpecifier(String),
    /// A host value could not be formatted with the given directive
    HostConversion{spec: String, value: String},
    /// Malformed escape sequence in literal text
    Escape(String),
    /// The number of literal parts doesn't match the number of arguments
    ArgumentCount{parts: usize, args: usize},
    /// The type of a value could not be determined
    Untyped(String),
    /// A name was requested for a value without a resolvable name
    Unnamed(String),
    /// A flattened format string doesn't match its argument list
    WireFormat(String),
}

impl Error for FormatError {}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnescapedPercent          => write!(f, "un-escaped % found"),
            Self::MultiCharSpecifier(s)     =>
                write!(f, "only single format char allowed for bit-vector types, found '{}'", s),
            Self::IllegalSpecifier(s)       => write!(f, "Illegal format specifier '{}'!", s),
            Self::PrintableSpecifier(s)     =>
                write!(f, "format specifier '{}' not allowed for printables, only '%s'", s),
            Self::HostConversion{spec, value} =>
                write!(f, "cannot format host value '{}' with '{}'", value, spec),
            Self::Escape(s)                 => write!(f, "invalid escape sequence in '{}'", s),
            Self::ArgumentCount{parts, args} =>
                write!(f, "wrong number of arguments: {} literal parts for {} arguments", parts, args),
            Self::Untyped(e)                => write!(f, "could not determine the type of '{}'", e),
            Self::Unnamed(e)                => write!(f, "'{}' has no resolvable name", e),
            Self::WireFormat(s)             => write!(f, "malformed format string: {}", s),
        }
    }
}


/// Convert a `nom::Err` into a `FormatError`
///
/// The given constructor is used for errors carrying a description.
pub(crate) fn convert_error(
    input: &str,
    err: nom::Err<parsers::Error>,
    cons: impl FnOnce(String) -> FormatError,
) -> FormatError {
    use nom::error::convert_error;

    match err {
        nom::Err::Incomplete(_) => cons(input.to_string()),
        nom::Err::Error(e) | nom::Err::Failure(e) => cons(convert_error(input, e)),
    }
}
