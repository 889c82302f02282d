//! Tests related to printables

use std::sync::Arc;

use quickcheck::{Arbitrary, Gen};

use crate::entity::{Entity, Value};
use crate::error::FormatError;
use crate::expr::tests::bit_vector;
use crate::named::Hierarchy;
use crate::tests::{ASCII, Equivalence};
use crate::types::{BundleField, GroundType, Kind, Type};

use super::{Directive, Flattened, Fragment, NameKind, Printable};


#[quickcheck]
fn flatten_args_in_order(printable: Printable) -> Result<Equivalence<Vec<Value>>, FormatError> {
    let flattened = printable.flatten(&Hierarchy::default())?;
    Ok(Equivalence::of(flattened.args().to_vec(), leaves(&printable)))
}


#[quickcheck]
fn flatten_literal(text: ASCII) -> Result<Equivalence<(String, Vec<Value>)>, FormatError> {
    let flattened = Printable::literal(text.as_ref()).flatten(&Hierarchy::default())?;
    Ok(Equivalence::of(flattened.into_parts(), (text.as_ref().replace('%', "%%"), Vec::new())))
}


#[quickcheck]
fn flatten_concat(
    left: Printable,
    right: Printable,
) -> Result<Equivalence<(String, Vec<Value>)>, FormatError> {
    let naming = Hierarchy::default();

    let (mut format, mut args) = left.flatten(&naming)?.into_parts();
    let (right_format, right_args) = right.flatten(&naming)?.into_parts();
    format.push_str(right_format.as_str());
    args.extend(right_args);

    Ok(Equivalence::of(left.concat(&right).flatten(&naming)?.into_parts(), (format, args)))
}


#[quickcheck]
fn flatten_nested(printable: Printable) -> Result<Equivalence<Flattened>, FormatError> {
    let naming = Hierarchy::default();
    Ok(Equivalence::of(Printable::nested(printable.clone()).flatten(&naming)?, printable.flatten(&naming)?))
}


#[quickcheck]
fn flattened_well_formed(printable: Printable) -> Result<Equivalence<Flattened>, FormatError> {
    let flattened = printable.flatten(&Hierarchy::default())?;
    let (format, args) = flattened.clone().into_parts();
    Ok(Equivalence::of(Flattened::new(format, args)?, flattened))
}


#[quickcheck]
fn flatten_percents(count: u8) -> Result<Equivalence<String>, FormatError> {
    let printable: Printable = (0..count).map(|_| Printable::percent()).collect();
    let flattened = printable.flatten(&Hierarchy::default())?;
    Ok(Equivalence::of(flattened.format().to_string(), "%%".repeat(count.into())))
}


#[quickcheck]
fn concat_associative(a: Printable, b: Printable, c: Printable) -> Equivalence<Printable> {
    Equivalence::of(a.concat(&b).concat(&c), a.concat(&b.concat(&c)))
}


#[quickcheck]
fn concat_identity(printable: Printable) -> bool {
    printable.concat(&Printable::empty()) == printable && Printable::empty().concat(&printable) == printable
}


#[quickcheck]
fn concat_keeps_fragments(left: Printable, right: Printable) -> Equivalence<Vec<Fragment>> {
    let mut fragments = left.fragments().to_vec();
    fragments.extend(right.fragments().iter().cloned());
    Equivalence::of((left + right).fragments().to_vec(), fragments)
}


#[quickcheck]
fn references_complete(printable: Printable) -> Equivalence<usize> {
    fn count(printable: &Printable) -> usize {
        printable.fragments().iter().map(|f| match f {
            Fragment::Value(..) | Fragment::Name(..)    => 1,
            Fragment::Nested(p)                         => count(p),
            _ => 0,
        }).sum()
    }

    Equivalence::of(printable.references().count(), count(&printable))
}


#[quickcheck]
fn directive_char(directive: Directive) -> Equivalence<Directive> {
    Equivalence::of(Directive::from_char(directive.format_char()), directive)
}


#[test]
fn vector_default() {
    let r#type = Type::Vector(Arc::new(GroundType::UInt(Some(32)).into()), 4);
    let vector = Entity::wire("v", r#type).in_module("Top").value();

    let flattened = Printable::value(vector.clone(), Directive::Default)
        .and_then(|p| p.flatten(&Hierarchy::default()))
        .expect("Could not flatten vector");
    assert_eq!(flattened.format(), "Vec(%d, %d, %d, %d)");
    assert_eq!(flattened.args().to_vec(), (0..4).map(|i| vector.index(i)).collect::<Vec<_>>());
}


#[test]
fn bundle_default() {
    let r#type = Type::bundle("Pair", vec![
        BundleField::new("a", GroundType::SInt(Some(4))),
        BundleField::new("b", GroundType::Clock),
        BundleField::new("c", Type::Vector(Arc::new(GroundType::UInt(Some(2)).into()), 2)),
    ]);
    let pair = Entity::wire("p", r#type).in_module("Top").value();

    let flattened = Printable::value(pair.clone(), Directive::Default)
        .and_then(|p| p.flatten(&Hierarchy::default()))
        .expect("Could not flatten bundle");
    assert_eq!(flattened.format(), "Pair(a -> %d, b -> Clock, c -> Vec(%d, %d))");
    assert_eq!(flattened.args().to_vec(), vec![pair.field("a"), pair.field("c").index(0), pair.field("c").index(1)]);
}


#[test]
fn radix_on_aggregate() {
    let r#type = Type::Vector(Arc::new(GroundType::UInt(Some(8)).into()), 2);
    let vector = Entity::wire("v", r#type).in_module("Top").value();

    assert_eq!(
        Printable::value(vector.clone(), Directive::Hex),
        Err(FormatError::IllegalSpecifier("%x".to_string())),
    );
    assert!(Printable::value(vector.clone(), Directive::Default).is_ok());
    assert!(Printable::value(vector.clone(), Directive::Name).is_ok());
    assert!(Printable::value(vector, Directive::FullName).is_ok());
}


#[test]
fn names() {
    let r#type = Type::Vector(Arc::new(GroundType::UInt(Some(8)).into()), 2);
    let element = Entity::wire("v", r#type).in_module("Top").value().index(1);

    let printable = Printable::value(element.clone(), Directive::Name).expect("Could not create printable")
        + Printable::literal(" / ")
        + Printable::name(element, NameKind::Full);
    let flattened = printable.flatten(&Hierarchy::default()).expect("Could not flatten names");
    assert_eq!(flattened.format(), "[1] / v[1]");
    assert!(flattened.args().is_empty());

    let unnamed = Printable::name(Value::uint(3), NameKind::Short);
    assert!(matches!(unnamed.flatten(&Hierarchy::default()), Err(FormatError::Unnamed(_))));
}


#[test]
fn percent_and_literals() {
    let printable = Printable::literal("100") + Printable::percent() + Printable::literal(" 50% ");
    let flattened = printable.flatten(&Hierarchy::default()).expect("Could not flatten literals");
    assert_eq!(flattened.format(), "100%% 50%% ");
    assert!(flattened.args().is_empty());
    assert!(Printable::literal("").is_empty());
}


#[test]
fn unknown_directive() {
    let value = Entity::wire("w", GroundType::UInt(Some(8))).in_module("Top").value();
    let printable = Printable::value(value, Directive::from_char('q')).expect("Could not create printable");

    let err = printable.flatten(&Hierarchy::default()).expect_err("Flattened unknown directive");
    assert_eq!(err, FormatError::IllegalSpecifier("%q".to_string()));
    assert_eq!(err.to_string(), "Illegal format specifier '%q'!");
}


#[test]
fn malformed_wire_format() {
    let value = Entity::wire("w", GroundType::UInt(Some(8))).in_module("Top").value();

    assert!(Flattened::new("%d", vec![value.clone()]).is_ok());
    assert!(matches!(Flattened::new("%d %d", vec![value.clone()]), Err(FormatError::WireFormat(_))));
    assert!(matches!(Flattened::new("%s", vec![value.clone()]), Err(FormatError::WireFormat(_))));
    assert!(matches!(Flattened::new("50%", vec![]), Err(FormatError::WireFormat(_))));

    let clock = Entity::wire("clk", GroundType::Clock).in_module("Top").value();
    assert!(matches!(Flattened::new("%d", vec![clock]), Err(FormatError::WireFormat(_))));
}


#[test]
fn flattened_display() {
    let value = Entity::wire("w", GroundType::UInt(Some(8))).in_module("Top").value();
    let flattened = Flattened::new("w = %x\n", vec![value]).expect("Could not create flattened printable");
    assert_eq!(flattened.to_string(), "\"w = %x\\n\", w");
}


/// Collect the bit-vector values a printable formats, in order of appearance
fn leaves(printable: &Printable) -> Vec<Value> {
    fn value_leaves(value: &Value) -> Vec<Value> {
        match value.kind().expect("Could not determine kind") {
            Kind::BitVector => vec![value.clone()],
            _ => value
                .elements()
                .expect("Could not determine elements")
                .into_iter()
                .flat_map(|(_, e)| value_leaves(&e))
                .collect(),
        }
    }

    printable.fragments().iter().flat_map(|f| match f {
        Fragment::Value(_, Directive::Name) | Fragment::Value(_, Directive::FullName) => Vec::new(),
        Fragment::Value(v, _)   => value_leaves(v),
        Fragment::Nested(p)     => leaves(p),
        _ => Vec::new(),
    }).collect()
}


impl Arbitrary for Printable {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % 8;
        let mut g = Gen::new(std::cmp::max(g.size() / (len + 1), 1));
        (0..len).map(|_| Fragment::arbitrary(&mut g)).collect::<Vec<_>>().into()
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.fragments().to_vec().shrink().map(Self::from))
    }
}


impl Arbitrary for Fragment {
    fn arbitrary(g: &mut Gen) -> Self {
        let opts: [&dyn Fn(&mut Gen) -> Self; 6] = [
            &|g| Self::Literal(ASCII::arbitrary(g).to_string().into()),
            &|_| Self::Percent,
            &|g| Self::Value(bit_vector(g), *g.choose(&BIT_VECTOR_DIRECTIVES).unwrap()),
            &|g| Self::Value(Value::arbitrary(g), Directive::Default),
            &|g| Self::Name(Entity::arbitrary(g).value(), *g.choose(&[NameKind::Short, NameKind::Full]).unwrap()),
            &|g| Self::Nested(Printable::arbitrary(g)),
        ];
        if g.size() > 1 {
            g.choose(&opts).unwrap()(g)
        } else {
            g.choose(&opts[..5]).unwrap()(g)
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        match self {
            Self::Literal(s)    => Box::new(s.to_string().shrink().map(|s| Self::Literal(s.into()))),
            Self::Nested(p)     => Box::new(p.fragments().to_vec().into_iter().chain(p.shrink().map(Self::Nested))),
            _ => Box::new(std::iter::empty()),
        }
    }
}


impl Arbitrary for Directive {
    fn arbitrary(g: &mut Gen) -> Self {
        Self::from_char(*g.choose(&['s', 'n', 'N', 'x', 'b', 'd', 'c', 'q', 'f']).unwrap())
    }
}


/// Directives which may be flattened for any bit-vector
const BIT_VECTOR_DIRECTIVES: [Directive; 5] = [
    Directive::Default,
    Directive::Hex,
    Directive::Binary,
    Directive::Decimal,
    Directive::Character,
];
