//! Indentation utilities

use std::fmt;

#[cfg(test)]
use quickcheck::{Arbitrary, Gen};


/// Print with indentation
pub trait DisplayIndented {
    /// Print the instance with the given indentation
    fn fmt<W: fmt::Write>(&self, indentation: &Indentation, f: &mut W) -> fmt::Result;
}


/// Indentation, i.e. a fixed number of leading spaces
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Indentation(usize);

impl Indentation {
    /// Create a new `Indentation` with a lower (i.e. nested) level
    pub fn sub(&self) -> Self {
        Self(self.0 + INDENTATION_STEP)
    }

    /// Create a new "root", i.e. no indentation at all
    pub fn root() -> Self {
        Self(0)
    }
}

impl From<usize> for Indentation {
    fn from(len: usize) -> Self {
        Self(len)
    }
}

impl From<Indentation> for usize {
    fn from(i: Indentation) -> Self {
        i.0
    }
}

impl fmt::Display for Indentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use std::fmt::Write;

        (0..self.0).try_for_each(|_| f.write_char(' '))
    }
}

#[cfg(test)]
impl Arbitrary for Indentation {
    fn arbitrary(g: &mut Gen) -> Self {
        // Testing huge widths will (probably) not yield any benefits.
        Self(u8::arbitrary(g) as usize)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(Self))
    }
}


/// Default number of spaces for one indentation step
const INDENTATION_STEP: usize = 2;
