// Copyright (c) 2021 FZI Forschungszentrum Informatik
// SPDX-License-Identifier: Apache-2.0
//! Common utility for named items

use crate::entity::Value;
use crate::error::FormatError;
use crate::expr::{Expression, Reference};


/// Named item
///
/// This trait allows accessing the item's name both in it's storage type and
/// a `&str`. The former will usually allow more efficient cloning of the name.
pub trait Named {
    /// Type used to store the name
    type Name: AsRef<str>;

    /// Retrieve a reference to the stored name
    fn name(&self) -> &Self::Name;

    /// Retrieve the item's name as a `&str`
    fn name_ref(&self) -> &str {
        self.name().as_ref()
    }
}


/// Name lookup for hardware values
///
/// Printables may refer to the name of a value rather than its contents. Those
/// names are resolved through an implementation of this trait when the
/// printable is flattened. Lookups may only succeed for values bound to a
/// circuit.
pub trait Naming {
    /// Retrieve the short name of the given value
    fn short_name(&self, value: &Value) -> Result<String, FormatError>;

    /// Retrieve the full, dot-qualified name of the given value
    fn full_name(&self, value: &Value) -> Result<String, FormatError>;
}

impl<N: Naming> Naming for &N {
    fn short_name(&self, value: &Value) -> Result<String, FormatError> {
        N::short_name(self, value)
    }

    fn full_name(&self, value: &Value) -> Result<String, FormatError> {
        N::full_name(self, value)
    }
}


/// [Naming] derived from the structure of values
///
/// The short name of a value is the last component of its path: the name of
/// the entity, the name of the field or the index of the element (as `[i]`).
/// The full name is the path relative to the module the value's entity is
/// bound to, e.g. `io.in[2].valid`. Optionally, the full name may be prefixed
/// by the module's name.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Hierarchy {
    qualified: bool,
}

impl Hierarchy {
    /// Create a naming prefixing full names with the owning module
    pub fn qualified() -> Self {
        Self {qualified: true}
    }

    /// Retrieve the name of the module the given value is bound to
    fn owner<'a>(&self, value: &'a Value) -> Result<&'a str, FormatError> {
        value.root().and_then(Reference::owner).ok_or_else(|| FormatError::Unnamed(value.to_string()))
    }
}

impl Naming for Hierarchy {
    fn short_name(&self, value: &Value) -> Result<String, FormatError> {
        self.owner(value)?;

        match value {
            Expression::Reference(r)        => Ok(r.name().to_string()),
            Expression::SubField{index, ..} => Ok(index.to_string()),
            Expression::SubIndex{index, ..} => Ok(format!("[{}]", index)),
            _ => Err(FormatError::Unnamed(value.to_string())),
        }
    }

    fn full_name(&self, value: &Value) -> Result<String, FormatError> {
        let owner = self.owner(value)?;

        if self.qualified {
            Ok(format!("{}.{}", owner, value))
        } else {
            Ok(value.to_string())
        }
    }
}
