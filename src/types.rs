//! Types

mod ground;
mod r#type;



pub use ground::GroundType;
pub use r#type::{BundleField, Type};


/// Bit-width of a ground-type, i.e. the number of "physical" wires or signals
///
/// A bit-width may be undefined in some instances, i.e. they may need to be
/// inferred later. However, if it is defined, it can never be zero.
pub type BitWidth = Option<u16>;

/// Number of elements in a vector
pub type VecWidth = u16;


/// Trait for entities with a type
pub trait Typed {
    /// Error type returned if the type could not be determined
    type Err;

    /// Type of the entity
    type Type;

    /// Determine the type of the entity
    fn r#type(&self) -> Result<Self::Type, Self::Err>;
}


/// Kind of a hardware value, as far as formatting is concerned
///
/// Printable messages treat values differently depending on their kind: only
/// bit-vectors may be printed with an explicit radix, aggregates are rendered
/// structurally and everything else may only be named or printed by type.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Kind {
    BitVector,
    Aggregate(Aggregate),
    Other,
}

impl Kind {
    /// Check whether the kind is a bit-vector kind
    pub fn is_bit_vector(&self) -> bool {
        *self == Self::BitVector
    }
}


/// Kind of an aggregate
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Aggregate {
    /// Indexed collection of values
    Vec,
    /// Collection of named fields
    Bundle,
}
