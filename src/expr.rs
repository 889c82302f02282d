//! Datatypes and utilities specific to expressions

#[cfg(test)]
pub mod tests;

use std::fmt;
use std::sync::Arc;

use crate::error::FormatError;
use crate::types::{self, Kind};


/// A FIRRTL expression
///
/// Expressions act as handles to values living in a circuit. Printables refer
/// to hardware values exclusively through expressions.
#[derive(Clone, Debug, PartialEq)]
pub enum Expression<R: Reference> {
    /// An UInt literal
    UIntLiteral{value: u128, width: u16},
    /// An SInt literal
    SIntLiteral{value: i128, width: u16},
    /// A referernce expression
    Reference(R),
    /// A sub-field expression
    SubField{base: Arc<Expression<R>>, index: Arc<str>},
    /// A sub-index expression
    SubIndex{base: Arc<Expression<R>>, index: u16},
}

impl<R: Reference + Clone> Expression<R> {
    /// Create an UInt literal with the minimal width required
    pub fn uint(value: u128) -> Self {
        let width = (1..128).find(|i| value >> i == 0).unwrap_or(128);
        Self::UIntLiteral{value, width}
    }

    /// Create an UInt literal with the given width
    pub fn uint_with_width(value: u128, width: u16) -> Self {
        Self::UIntLiteral{value, width}
    }

    /// Create an SInt literal with the minimal width required
    pub fn sint(value: i128) -> Self {
        let width = (1..128).find(|i| value >> (i - 1) == 0 || value >> (i - 1) == -1).unwrap_or(128);
        Self::SIntLiteral{value, width}
    }

    /// Create a sub-field expression accessing the given field of this value
    pub fn field(&self, index: impl Into<Arc<str>>) -> Self {
        Self::SubField{base: Arc::new(self.clone()), index: index.into()}
    }

    /// Create a sub-index expression accessing the given element of this value
    pub fn index(&self, index: u16) -> Self {
        Self::SubIndex{base: Arc::new(self.clone()), index}
    }

    /// Determine the formatting [Kind] of this value
    pub fn kind(&self) -> Result<Kind, FormatError> {
        use types::Typed;

        self.r#type().map(|t| t.kind()).map_err(|e| FormatError::Untyped(e.to_string()))
    }

    /// Retrieve the sub-expressions making up this value
    ///
    /// For vectors, this function returns one sub-index expression per element.
    /// For bundles, it returns the field names paired with the corresponding
    /// sub-field expressions, in declaration order. Values of any other type
    /// don't have elements.
    pub fn elements(&self) -> Result<Vec<(Option<Arc<str>>, Self)>, FormatError> {
        use types::Typed;

        let res = match self.r#type().map_err(|e| FormatError::Untyped(e.to_string()))? {
            types::Type::Vector(_, w)       => (0..w).map(|i| (None, self.index(i))).collect(),
            types::Type::Bundle{fields, ..} => fields
                .iter()
                .map(|f| (Some(f.name().clone()), self.field(f.name().clone())))
                .collect(),
            types::Type::GroundType(_)      => Default::default(),
        };
        Ok(res)
    }

    /// Retrieve the reference this expression is based on
    ///
    /// Literals are not based on any reference.
    pub fn root(&self) -> Option<&R> {
        match self {
            Self::Reference(r)          => Some(r),
            Self::SubField{base, ..}    => base.root(),
            Self::SubIndex{base, ..}    => base.root(),
            _ => None,
        }
    }
}

impl<R: Reference> From<R> for Expression<R> {
    fn from(reference: R) -> Self {
        Self::Reference(reference)
    }
}

impl<R: Reference + Clone> types::Typed for Expression<R> {
    type Err = Self;

    type Type = types::Type;

    fn r#type(&self) -> Result<Self::Type, Self::Err> {
        use types::GroundType as GT;

        match self {
            Self::UIntLiteral{width, ..}    => Ok(GT::UInt(Some(*width)).into()),
            Self::SIntLiteral{width, ..}    => Ok(GT::SInt(Some(*width)).into()),
            Self::Reference(r)              => Ok(r.r#type().clone()),
            Self::SubField{base, index}     => base
                .r#type()?
                .field(index)
                .map(|f| f.r#type().clone())
                .ok_or_else(|| self.clone()),
            Self::SubIndex{base, index}     => match base.r#type()? {
                types::Type::Vector(t, w) if *index < w => Ok(t.as_ref().clone()),
                _ => Err(self.clone()),
            },
        }
    }
}

impl<R: Reference> fmt::Display for Expression<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UIntLiteral{value, width} => write!(f, "UInt<{}>({})", width, value),
            Self::SIntLiteral{value, width} => write!(f, "SInt<{}>({})", width, value),
            Self::Reference(r)              => fmt::Display::fmt(r.name(), f),
            Self::SubField{base, index}     => write!(f, "{}.{}", base, index),
            Self::SubIndex{base, index}     => write!(f, "{}[{}]", base, index),
        }
    }
}


/// A reference to a named entity
pub trait Reference {
    /// Retrieve the name of the referenced entity
    fn name(&self) -> &str;

    /// Retrieve the type of the referenced entity
    fn r#type(&self) -> &types::Type;

    /// Retrieve the name of the module the entity is bound to
    ///
    /// Entities which are not (yet) part of a circuit will return `None`.
    fn owner(&self) -> Option<&str> {
        None
    }
}
