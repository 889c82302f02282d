//! Ground type

use std::fmt;

#[cfg(test)]
use quickcheck::{Arbitrary, Gen};

use super::BitWidth;


/// FIRRTL ground type
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum GroundType {
    /// Unsigned integer type with width
    UInt(BitWidth),
    /// Signed integer type with width
    SInt(BitWidth),
    /// Clock type
    Clock,
}

impl GroundType {
    /// Retrieve the formatting kind of values of this type
    pub fn kind(&self) -> super::Kind {
        match self {
            Self::UInt(_) | Self::SInt(_)   => super::Kind::BitVector,
            Self::Clock                     => super::Kind::Other,
        }
    }
}

impl fmt::Display for GroundType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (name, width) = match self {
            Self::UInt(w)   => ("UInt", w),
            Self::SInt(w)   => ("SInt", w),
            Self::Clock     => return write!(f, "Clock"),
        };
        fmt::Display::fmt(name, f)?;
        width.map(|w| write!(f, "<{}>", w)).unwrap_or(Ok(()))
    }
}

#[cfg(test)]
impl Arbitrary for GroundType {
    fn arbitrary(g: &mut Gen) -> Self {
        let width = |g: &mut Gen| Option::<u16>::arbitrary(g).map(|w| w % 128 + 1);

        let opts: [&dyn Fn(&mut Gen) -> Self; 3] = [
            &|g| Self::UInt(width(g)),
            &|g| Self::SInt(width(g)),
            &|_| Self::Clock,
        ];
        g.choose(&opts).unwrap()(g)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        match self {
            Self::UInt(w)   => Box::new(w.shrink().filter(|w| *w != Some(0)).map(Self::UInt)),
            Self::SInt(w)   => Box::new(w.shrink().filter(|w| *w != Some(0)).map(Self::SInt)),
            Self::Clock     => Box::new(std::iter::empty()),
        }
    }
}
