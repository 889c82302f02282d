//! Printable messages for FIRRTL circuits
//!
//! [FIRRTL](https://chisel-lang.org/firrtl/) is a simple HDL
//! register-transfer level. Simulation time messages are expressed through
//! `printf` and `assert` statements, which carry a format string and a list of
//! hardware values.
//!
//! This library provides [Printable]s, a structured representation of such
//! messages which may embed hardware values, their names and other printables.
//! Printables are constructed either directly, via the [p!] macro formatting
//! every value in its default form or via the [cf!] macro honouring format
//! directives such as `%x`. Before being emitted as part of a [stmt::Statement],
//! a printable is flattened into a format string and a list of bit-vector
//! arguments.
//!
//! ```
//! use std::sync::Arc;
//! use firrtl_printable::{Entity, GroundType, Hierarchy, Type, cf};
//!
//! let count = Entity::wire("count", GroundType::UInt(Some(8))).in_module("Top").value();
//! let msg = cf!("{}%n at 100%", &count).unwrap_err();
//! assert_eq!(msg.to_string(), "un-escaped % found");
//!
//! let msg = cf!("{}%n = {}%x ({}%%)", &count, &count, 50).unwrap();
//! let flattened = msg.flatten(&Hierarchy::default()).unwrap();
//! assert_eq!(flattened.format(), "count = %x (50%%)");
//! assert_eq!(flattened.args().len(), 1);
//!
//! let pair = Type::Vector(Arc::new(GroundType::SInt(Some(4)).into()), 2);
//! let pair = Entity::wire("pair", pair).in_module("Top").value();
//! let flattened = cf!("{}", &pair).unwrap().flatten(&Hierarchy::default()).unwrap();
//! assert_eq!(flattened.format(), "Vec(%d, %d)");
//! ```

#[macro_use]
extern crate log;

#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

pub mod display;
pub mod entity;
pub mod error;
pub mod expr;
pub mod indentation;
pub mod interp;
pub mod named;
pub mod parsers;
pub mod printable;
pub mod stmt;
pub mod types;

#[cfg(test)]
mod tests;

pub use entity::{Entity, Value};
pub use error::FormatError;
pub use interp::{Arg, HostValue};
pub use named::{Hierarchy, Naming};
pub use printable::{Directive, Flattened, Fragment, NameKind, Printable};
pub use types::{BundleField, GroundType, Type};
