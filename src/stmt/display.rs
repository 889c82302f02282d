//! Utilities for implementation of Display

use std::fmt;

use crate::indentation::{DisplayIndented, Indentation};


/// Utility for displaying an optional statement name
pub struct OptionalName<'a>(pub Option<&'a str>);

impl<'a> From<Option<&'a str>> for OptionalName<'a> {
    fn from(name: Option<&'a str>) -> Self {
        Self(name)
    }
}

impl fmt::Display for OptionalName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.map(|n| write!(f, " : {}", n)).unwrap_or(Ok(()))
    }
}


/// Utility for displaying an optional source locator
///
/// The locator is enclosed in `@[...]`. Closing brackets, backslashes and line
/// breaks within the locator are escaped.
pub struct Locator<'a>(pub Option<&'a str>);

impl fmt::Display for Locator<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;

        let locator = if let Some(l) = self.0 { l } else { return Ok(()) };

        f.write_str(" @[")?;
        locator.chars().try_for_each(|c| match c {
            ']'  => f.write_str("\\]"),
            '\\' => f.write_str("\\\\"),
            '\n' => f.write_str("\\n"),
            c    => f.write_char(c),
        })?;
        f.write_char(']')
    }
}


/// Utility for displaying a list of statements
pub struct StatementList<'a>(pub &'a [super::Statement]);

impl DisplayIndented for StatementList<'_> {
    fn fmt<W: fmt::Write>(&self, indentation: &Indentation, f: &mut W) -> fmt::Result {
        self.0.iter().try_for_each(|s| s.fmt(indentation, f))
    }
}
