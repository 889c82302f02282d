// Copyright (c) 2021 FZI Forschungszentrum Informatik
// SPDX-License-Identifier: Apache-2.0
//! FIRRTL statements carrying printables and associated utilities

pub(crate) mod display;


use std::fmt;
use std::sync::Arc;

use crate::entity::Value;
use crate::error::FormatError;
use crate::indentation::{DisplayIndented, Indentation};
use crate::named::Naming;
use crate::printable::{Flattened, Printable};


/// FIRRTL statement
#[derive(Clone, Debug, PartialEq)]
pub struct Statement {
    kind: Kind,
    info: Option<Arc<str>>,
}

impl Statement {
    /// Retrieve the statement [Kind]
    pub fn kind(&self) -> &Kind {
        &self.kind
    }

    /// Retrieve the statement's name, if any
    pub fn name(&self) -> Option<&str> {
        match self.as_ref() {
            Kind::Print{name, ..}   => name.as_ref().map(AsRef::as_ref),
            Kind::Assert{name, ..}  => name.as_ref().map(AsRef::as_ref),
            Kind::Stop{name, ..}    => name.as_ref().map(AsRef::as_ref),
        }
    }

    /// Set the statement's name
    pub fn with_name(mut self, new_name: impl Into<Arc<str>>) -> Self {
        let new_name = Some(new_name.into());
        match &mut self.kind {
            Kind::Print{name, ..}   => *name = new_name,
            Kind::Assert{name, ..}  => *name = new_name,
            Kind::Stop{name, ..}    => *name = new_name,
        }
        self
    }

    /// Retrieve the source locator attached to the statement, if any
    ///
    /// The locator usually refers to the place in the generator's sources
    /// from which the statement was issued.
    pub fn info(&self) -> Option<&str> {
        self.info.as_ref().map(AsRef::as_ref)
    }

    /// Attach a source locator to the statement
    pub fn with_info(self, info: impl Into<Arc<str>>) -> Self {
        Self {info: Some(info.into()), ..self}
    }

    /// Retrieve the message of the statement, if any
    pub fn message(&self) -> Option<&Flattened> {
        match self.as_ref() {
            Kind::Print{msg, ..}    => Some(msg),
            Kind::Assert{msg, ..}   => Some(msg),
            Kind::Stop{..}          => None,
        }
    }
}

impl From<Kind> for Statement {
    fn from(kind: Kind) -> Self {
        Self {kind, info: Default::default()}
    }
}

impl AsRef<Kind> for Statement {
    fn as_ref(&self) -> &Kind {
        self.kind()
    }
}

impl DisplayIndented for Statement {
    fn fmt<W: fmt::Write>(&self, indent: &Indentation, f: &mut W) -> fmt::Result {
        use display::{Locator, OptionalName};

        let info = Locator(self.info());
        let name = OptionalName::from(self.name());

        match self.as_ref() {
            Kind::Print{clock, cond, msg, ..}                   =>
                writeln!(f, "{}printf({}, {}, {}){}{}", indent, clock, cond, msg, name, info),
            Kind::Assert{clock, predicate, enable, msg, ..}     =>
                writeln!(f, "{}assert({}, {}, {}, {}){}{}", indent, clock, predicate, enable, msg, name, info),
            Kind::Stop{clock, cond, code, ..}                   =>
                writeln!(f, "{}stop({}, {}, {}){}{}", indent, clock, cond, code, name, info),
        }
    }
}


/// [Statement] kind
#[derive(Clone, Debug, PartialEq)]
pub enum Kind {
    Print{name: Option<Arc<str>>, clock: Value, cond: Value, msg: Flattened},
    Assert{name: Option<Arc<str>>, clock: Value, predicate: Value, enable: Value, msg: Flattened},
    Stop{name: Option<Arc<str>>, clock: Value, cond: Value, code: i64},
}


/// Sink for statements carrying a formatted message
pub trait Emitter {
    /// Handle identifying an emitted statement
    type Handle;

    /// Emit a print statement
    ///
    /// The statement prints the message described by the format string and
    /// the arguments on every edge of `clock` for which `cond` is set.
    fn emit_format_statement(
        &mut self,
        format: String,
        args: Vec<Value>,
        cond: Value,
        clock: Value,
    ) -> Result<Self::Handle, FormatError>;
}


/// Flatten a printable and emit it as a print statement
pub fn emit<E: Emitter>(
    emitter: &mut E,
    naming: &impl Naming,
    msg: &Printable,
    cond: Value,
    clock: Value,
) -> Result<E::Handle, FormatError> {
    let (format, args) = msg.flatten(naming)?.into_parts();
    emitter.emit_format_statement(format, args, cond, clock)
}


/// An ordered list of statements
///
/// Statements are identified by their position in the list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Body {
    statements: Vec<Statement>,
}

impl Body {
    /// Emit a print statement for the given printable
    pub fn printf(
        &mut self,
        naming: &impl Naming,
        clock: Value,
        cond: Value,
        msg: &Printable,
    ) -> Result<usize, FormatError> {
        emit(self, naming, msg, cond, clock)
    }

    /// Emit an assertion with the given printable as message
    ///
    /// The assertion fails if `predicate` is not set on an edge of `clock` for
    /// which `enable` is set.
    pub fn assert(
        &mut self,
        naming: &impl Naming,
        clock: Value,
        predicate: Value,
        enable: Value,
        msg: &Printable,
    ) -> Result<usize, FormatError> {
        let (format, args) = msg.flatten(naming)?.into_parts();
        let msg = Flattened::new(format, args)?;
        Ok(self.push(Kind::Assert{name: None, clock, predicate, enable, msg}.into()))
    }

    /// Emit a stop statement
    pub fn stop(&mut self, clock: Value, cond: Value, code: i64) -> usize {
        self.push(Kind::Stop{name: None, clock, cond, code}.into())
    }

    /// Retrieve the statements
    pub fn statements(&self) -> &[Statement] {
        self.statements.as_ref()
    }

    /// Retrieve the statement with the given handle for modification
    pub fn get_mut(&mut self, handle: usize) -> Option<&mut Statement> {
        self.statements.get_mut(handle)
    }

    fn push(&mut self, stmt: Statement) -> usize {
        debug!("Emitting statement {:?}", stmt.kind());
        self.statements.push(stmt);
        self.statements.len() - 1
    }
}

impl Emitter for Body {
    type Handle = usize;

    fn emit_format_statement(
        &mut self,
        format: String,
        args: Vec<Value>,
        cond: Value,
        clock: Value,
    ) -> Result<Self::Handle, FormatError> {
        let msg = Flattened::new(format, args)?;
        Ok(self.push(Kind::Print{name: None, clock, cond, msg}.into()))
    }
}

impl DisplayIndented for Body {
    fn fmt<W: fmt::Write>(&self, indentation: &Indentation, f: &mut W) -> fmt::Result {
        display::StatementList(self.statements()).fmt(indentation, f)
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DisplayIndented::fmt(self, &Indentation::root(), f)
    }
}
