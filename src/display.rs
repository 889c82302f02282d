//! Genderal display utilities

use std::fmt;


/// Utility for formatting comma separated lists
pub struct CommaSeparated<I, E>
where I: IntoIterator<Item = E> + Clone,
      E: fmt::Display,
{
    inner: I,
    preceding: bool,
}

impl<I, E> CommaSeparated<I, E>
where I: IntoIterator<Item = E> + Clone,
      E: fmt::Display,
{
    /// Precede each item by a comma, including the first one
    pub fn with_preceding(self) -> Self {
        Self {preceding: true, ..self}
    }
}

impl<I, E> From<I> for CommaSeparated<I, E>
where I: IntoIterator<Item = E> + Clone,
      E: fmt::Display,
{
    fn from(inner: I) -> Self {
        Self{inner, preceding: false}
    }
}

impl<I, E> fmt::Display for CommaSeparated<I, E>
where I: IntoIterator<Item = E> + Clone,
      E: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut items = self.inner.clone().into_iter();
        if !self.preceding {
            items.next().map(|item| item.fmt(f)).transpose().map(|_| ())?;
        }
        items.try_for_each(|item| write!(f, ", {}", item))
    }
}


/// Utility for formatting a string literal
///
/// The string is surrounded by double quotes. Quotes, backslashes and control
/// characters are escaped.
pub struct FormatString<'a>(pub &'a str);

impl fmt::Display for FormatString<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;

        f.write_char('"')?;
        self.0.chars().try_for_each(|c| match c {
            '\n' => f.write_str("\\n"),
            '\t' => f.write_str("\\t"),
            '\r' => f.write_str("\\r"),
            '"'  => f.write_str("\\\""),
            '\\' => f.write_str("\\\\"),
            c if c.is_control() => write!(f, "\\u{{{:x}}}", c as u32),
            c    => f.write_char(c),
        })?;
        f.write_char('"')
    }
}
