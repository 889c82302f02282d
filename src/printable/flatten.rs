// Copyright (c) 2021 FZI Forschungszentrum Informatik
// SPDX-License-Identifier: Apache-2.0
//! Flattening of printables

use std::fmt;

use crate::entity::Value;
use crate::error::FormatError;
use crate::named::Naming;

use super::{Directive, Fragment, NameKind, Printable};


/// A flattened printable
///
/// A flattened printable consists of a format string and the list of values
/// to be formatted. The format string only contains the directives `%d`, `%x`,
/// `%b` and `%c`, each referring to the next value in the argument list, and
/// `%%` for a literal `%`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Flattened {
    format: String,
    args: Vec<Value>,
}

impl Flattened {
    /// Create a flattened printable from a format string and arguments
    ///
    /// The format string may only contain the directives `%d`, `%x`, `%b` and
    /// `%c` as well as `%%`. The number of directives must match the number of
    /// arguments and all arguments must be bit-vectors.
    pub fn new(format: impl Into<String>, args: Vec<Value>) -> Result<Self, FormatError> {
        use nom::Finish;
        use nom::combinator::all_consuming;

        use super::parsers::{Segment, format_string};

        let format = format.into();

        let directives = all_consuming(format_string)(format.as_str())
            .finish()
            .map_err(|e| crate::error::convert_error(format.as_str(), nom::Err::Error(e), FormatError::WireFormat))?
            .1
            .into_iter()
            .filter(|s| matches!(s, Segment::Directive(_)))
            .count();
        if directives != args.len() {
            return Err(FormatError::WireFormat(
                format!("{} directive(s) for {} argument(s)", directives, args.len())
            ))
        }

        args.iter().try_for_each(|a| if a.kind()?.is_bit_vector() {
            Ok(())
        } else {
            Err(FormatError::WireFormat(format!("argument '{}' is not a bit-vector", a)))
        })?;

        Ok(Self {format, args})
    }

    /// Retrieve the format string
    pub fn format(&self) -> &str {
        self.format.as_ref()
    }

    /// Retrieve the arguments
    pub fn args(&self) -> &[Value] {
        self.args.as_ref()
    }

    /// Split into format string and arguments
    pub fn into_parts(self) -> (String, Vec<Value>) {
        (self.format, self.args)
    }

    /// Append literal text, escaping any `%`
    fn push_text(&mut self, text: &str) {
        text.split('%').enumerate().for_each(|(i, s)| {
            if i > 0 {
                self.format.push_str("%%")
            }
            self.format.push_str(s)
        })
    }

    /// Append a directive along with its argument
    fn push_value(&mut self, directive: char, value: Value) {
        self.format.push('%');
        self.format.push(directive);
        self.args.push(value)
    }
}

impl fmt::Display for Flattened {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use crate::display::{CommaSeparated, FormatString};

        write!(f, "{}{}", FormatString(self.format()), CommaSeparated::from(self.args()).with_preceding())
    }
}


impl Printable {
    /// Flatten this printable into a format string and arguments
    ///
    /// Literal text is transferred to the format string with every `%` escaped
    /// as `%%`. Names are resolved via the given [Naming] and also end up as
    /// literal text. Every formatted bit-vector yields one directive and one
    /// argument, in the order in which they appear in the printable. Embedded
    /// printables are flattened in place.
    pub fn flatten(&self, naming: &impl Naming) -> Result<Flattened, FormatError> {
        let mut res: Flattened = Default::default();
        self.flatten_into(naming, &mut res)?;
        debug!("Flattened printable into \"{}\" with {} argument(s)", res.format, res.args.len());
        Ok(res)
    }

    fn flatten_into(&self, naming: &impl Naming, res: &mut Flattened) -> Result<(), FormatError> {
        self.fragments().iter().try_for_each(|f| f.flatten_into(naming, res))
    }
}


impl Fragment {
    fn flatten_into(&self, naming: &impl Naming, res: &mut Flattened) -> Result<(), FormatError> {
        trace!("Flattening {:?}", self);

        match self {
            Self::Literal(s)                => res.push_text(s),
            Self::Percent                   => res.format.push_str("%%"),
            Self::Name(v, NameKind::Short)  => res.push_text(&naming.short_name(v)?),
            Self::Name(v, NameKind::Full)   => res.push_text(&naming.full_name(v)?),
            Self::Nested(p)                 => p.flatten_into(naming, res)?,
            Self::Value(v, d)               => flatten_value(v, *d, naming, res)?,
        }
        Ok(())
    }
}


/// Flatten a single value formatted with the given directive
fn flatten_value(
    value: &Value,
    directive: Directive,
    naming: &impl Naming,
    res: &mut Flattened,
) -> Result<(), FormatError> {
    let bits = value.kind()?.is_bit_vector();

    match directive {
        Directive::Default if bits => res.push_value('d', value.clone()),
        Directive::Default          => Printable::default_render(value)?.flatten_into(naming, res)?,
        Directive::Name             => res.push_text(&naming.short_name(value)?),
        Directive::FullName         => res.push_text(&naming.full_name(value)?),
        Directive::Other(_)         => return Err(FormatError::IllegalSpecifier(directive.to_string())),
        d if bits                   => res.push_value(d.format_char(), value.clone()),
        d                           => return Err(FormatError::IllegalSpecifier(d.to_string())),
    }
    Ok(())
}
