//! Test related to expressions

use std::sync::Arc;

use quickcheck::{Arbitrary, Gen};

use crate::entity::{Entity, Value};
use crate::error::FormatError;
use crate::types::{self, GroundType, Kind, Typed};


impl Arbitrary for Value {
    fn arbitrary(g: &mut Gen) -> Self {
        let opts: [&dyn Fn(&mut Gen) -> Self; 3] = [
            &|g| Self::uint(Arbitrary::arbitrary(g)),
            &|g| Self::sint(Arbitrary::arbitrary(g)),
            &|g| descend(Entity::arbitrary(g).value(), g),
        ];
        g.choose(&opts).unwrap()(g)
    }
}


/// Descend into a random element of the given value a random number of times
fn descend(value: Value, g: &mut Gen) -> Value {
    let mut value = value;
    while bool::arbitrary(g) {
        let elements = value.elements().expect("Could not determine elements");
        match g.choose(&elements) {
            Some((_, e))    => value = e.clone(),
            None            => break,
        }
    }
    value
}


/// Generate a bit-vector value bound to a module
pub fn bit_vector(g: &mut Gen) -> Value {
    let width = u16::arbitrary(g) % 64 + 1;
    let r#type = g.choose(&[GroundType::UInt(Some(width)), GroundType::SInt(Some(width))]).unwrap().clone();
    let name = crate::tests::Identifier::arbitrary(g).to_string();
    let value = Entity::wire(name, r#type).in_module("Top").value();
    if bool::arbitrary(g) {
        value
    } else {
        let holder = types::Type::Vector(Arc::new(r#type.into()), 2);
        Entity::wire("holder", holder).in_module("Top").value().index(u16::arbitrary(g) % 2)
    }
}


#[quickcheck]
fn values_are_typed(value: Value) -> bool {
    value.r#type().is_ok() && value.kind().is_ok()
}


#[quickcheck]
fn elements_typed(value: Value) -> Result<bool, FormatError> {
    let r#type = value.r#type().map_err(|e| FormatError::Untyped(e.to_string()))?;
    let elements = value.elements()?;

    let count_ok = match r#type {
        types::Type::Vector(_, w)       => elements.len() == w as usize,
        types::Type::Bundle{fields, ..} => elements.len() == fields.len(),
        types::Type::GroundType(_)      => elements.is_empty(),
    };
    Ok(count_ok && elements.iter().all(|(_, e)| e.r#type().is_ok()))
}


#[quickcheck]
fn uint_minimal_width(value: u128) -> bool {
    match Value::uint(value) {
        Value::UIntLiteral{width, ..} => width == 128 || (
            value >> width == 0 && (width == 1 || value >> (width - 1) != 0)
        ),
        _ => false,
    }
}


#[quickcheck]
fn sint_fits_width(value: i128) -> bool {
    match Value::sint(value) {
        Value::SIntLiteral{width, ..} => width == 128 || {
            let shifted = value >> (width - 1);
            shifted == 0 || shifted == -1
        },
        _ => false,
    }
}


#[test]
fn literal_kinds() {
    assert_eq!(Value::uint(0).r#type(), Ok(types::Type::from(GroundType::UInt(Some(1)))));
    assert_eq!(Value::uint(255).r#type(), Ok(types::Type::from(GroundType::UInt(Some(8)))));
    assert_eq!(Value::sint(-1).r#type(), Ok(types::Type::from(GroundType::SInt(Some(1)))));
    assert_eq!(Value::sint(127).r#type(), Ok(types::Type::from(GroundType::SInt(Some(8)))));
    assert_eq!(Value::uint(3).kind(), Ok(Kind::BitVector));
}


#[test]
fn invalid_accesses() {
    let bundle = types::Type::bundle("Pair", vec![types::BundleField::new("a", GroundType::UInt(Some(3)))]);
    let value = Entity::wire("p", bundle).value();

    assert!(value.field("a").r#type().is_ok());
    assert!(matches!(value.field("b").kind(), Err(FormatError::Untyped(_))));
    assert!(matches!(value.index(0).kind(), Err(FormatError::Untyped(_))));
    assert!(matches!(value.field("a").field("x").elements(), Err(FormatError::Untyped(_))));
}


#[test]
fn value_display() {
    let vector = types::Type::Vector(Arc::new(GroundType::UInt(Some(8)).into()), 4);
    let bundle = types::Type::bundle("IO", vec![types::BundleField::new("in", vector)]);
    let io = Entity::port("io", bundle).in_module("Top").value();

    assert_eq!(io.field("in").index(3).to_string(), "io.in[3]");
    assert_eq!(Value::uint(5).to_string(), "UInt<3>(5)");
    assert_eq!(Value::sint(-2).to_string(), "SInt<2>(-2)");
}
