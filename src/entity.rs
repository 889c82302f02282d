// Copyright (c) 2021 FZI Forschungszentrum Informatik
// SPDX-License-Identifier: Apache-2.0
//! Referenable entities

use std::fmt;
use std::sync::Arc;

#[cfg(test)]
use quickcheck::{Arbitrary, Gen};

use crate::expr;
use crate::named::Named;
use crate::types;


/// Hardware value handle as used by printables and statements
pub type Value = expr::Expression<Arc<Entity>>;


/// Referencable entity
///
/// An entity is a named and typed element of a circuit which may be referenced
/// inside an expression. Entities are usually bound to the module they are
/// declared in. Only bound entities have a full name.
#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    name: Arc<str>,
    r#type: types::Type,
    kind: Kind,
    module: Option<Arc<str>>,
}

impl Entity {
    /// Create a new, unbound entity
    pub fn new(name: impl Into<Arc<str>>, r#type: impl Into<types::Type>, kind: Kind) -> Self {
        Self {name: name.into(), r#type: r#type.into(), kind, module: None}
    }

    /// Create a new, unbound wire
    pub fn wire(name: impl Into<Arc<str>>, r#type: impl Into<types::Type>) -> Self {
        Self::new(name, r#type, Kind::Wire)
    }

    /// Create a new, unbound port
    pub fn port(name: impl Into<Arc<str>>, r#type: impl Into<types::Type>) -> Self {
        Self::new(name, r#type, Kind::Port)
    }

    /// Bind the entity to the module with the given name
    pub fn in_module(self, module: impl Into<Arc<str>>) -> Self {
        Self {module: Some(module.into()), ..self}
    }

    /// Retrieve the entity's type
    pub fn r#type(&self) -> &types::Type {
        &self.r#type
    }

    /// Retrieve the entity's kind
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Retrieve the name of the module this entity is bound to
    pub fn module(&self) -> Option<&Arc<str>> {
        self.module.as_ref()
    }

    /// Create a value referring to this entity
    pub fn value(self) -> Value {
        Arc::new(self).into()
    }
}

impl Named for Entity {
    type Name = Arc<str>;

    fn name(&self) -> &Self::Name {
        &self.name
    }
}

impl expr::Reference for Arc<Entity> {
    fn name(&self) -> &str {
        self.name_ref()
    }

    fn r#type(&self) -> &types::Type {
        Entity::r#type(self)
    }

    fn owner(&self) -> Option<&str> {
        self.module().map(AsRef::as_ref)
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.kind, self.name, self.r#type)
    }
}

#[cfg(test)]
impl Arbitrary for Entity {
    fn arbitrary(g: &mut Gen) -> Self {
        use crate::tests::Identifier;

        Self::new(Identifier::arbitrary(g).to_string(), types::Type::arbitrary(g), Kind::arbitrary(g))
            .in_module("Top")
    }
}


/// Kind of an [Entity]
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Kind {
    Port,
    Wire,
    Register,
    Node,
}

impl Kind {
    /// Retrieve the keyword associated with the kind of entity
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Port      => "port",
            Self::Wire      => "wire",
            Self::Register  => "reg",
            Self::Node      => "node",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.keyword(), f)
    }
}

#[cfg(test)]
impl Arbitrary for Kind {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&[Self::Port, Self::Wire, Self::Register, Self::Node]).unwrap()
    }
}
