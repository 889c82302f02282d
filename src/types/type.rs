//! FIRRTL Type

use std::fmt;
use std::sync::Arc;

#[cfg(test)]
use quickcheck::{Arbitrary, Gen};

use super::{Aggregate, GroundType, Kind};

/// FIRRTL Type
///
/// In addition to the plain FIRRTL structure, bundles carry the name of the
/// type they were declared as. That name is used when rendering a bundle
/// value.
#[derive(Clone, PartialEq, Debug)]
pub enum Type {
    GroundType(GroundType),
    Vector(Arc<Self>, super::VecWidth),
    Bundle{name: Arc<str>, fields: Arc<[BundleField]>},
}

impl Type {
    /// Create a new bundle type with the given type name and fields
    pub fn bundle(name: impl Into<Arc<str>>, fields: impl IntoIterator<Item = BundleField>) -> Self {
        Self::Bundle{name: name.into(), fields: fields.into_iter().collect()}
    }

    /// Retrieve the formatting kind of values of this type
    pub fn kind(&self) -> Kind {
        match self {
            Self::GroundType(g) => g.kind(),
            Self::Vector(..)    => Kind::Aggregate(Aggregate::Vec),
            Self::Bundle{..}    => Kind::Aggregate(Aggregate::Bundle),
        }
    }

    /// If this type is a vector type, return the base type
    ///
    /// This function returns the type of a vector element or `None`, if called
    /// on a type not a vector type.
    pub fn vector_base(&self) -> Option<&Arc<Self>> {
        if let Self::Vector(t, _) = self {
            Some(t)
        } else {
            None
        }
    }

    /// Return the bundle field with the given name
    ///
    /// If the type is not a bundle type or the bundle does not contain a field
    /// with the given name, this function returns `None`.
    pub fn field(&self, field: &str) -> Option<&BundleField> {
        if let Self::Bundle{fields, ..} = self {
            fields.iter().find(|f| f.name().as_ref() == field)
        } else {
            None
        }
    }

    /// If the type refers to a ground type, return that ground type
    pub fn ground_type(&self) -> Option<GroundType> {
        if let Self::GroundType(g) = self {
            Some(*g)
        } else {
            None
        }
    }
}

impl From<GroundType> for Type {
    fn from(g: GroundType) -> Self {
        Self::GroundType(g)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GroundType(g)     => fmt::Display::fmt(g, f),
            Self::Vector(t, w)      => write!(f, "{}[{}]", t, w),
            Self::Bundle{fields, ..} => {
                let mut fields = fields.iter();
                write!(f, "{{")?;
                fields.next().map(|field| fmt::Display::fmt(&field, f)).transpose().map(|_| ())?;
                fields.try_for_each(|field| write!(f, ", {}", field))?;
                write!(f, "}}")
            },
        }
    }
}

#[cfg(test)]
impl Arbitrary for Type {
    fn arbitrary(g: &mut Gen) -> Self {
        use crate::tests::Identifier;

        let opts: [&dyn Fn(&mut Gen) -> Self; 3] = [
            &|g| Self::GroundType(Arbitrary::arbitrary(g)),
            &|g| Self::Vector(
                Arc::new(Arbitrary::arbitrary(&mut Gen::new(std::cmp::max(g.size() / 4, 1)))),
                u16::arbitrary(g) % 8 + 1,
            ),
            &|g| Self::bundle(
                Identifier::arbitrary(g).to_string(),
                bundle_fields((u8::arbitrary(g) % 4 + 1) as usize, g),
            ),
        ];
        if g.size() > 1 {
            g.choose(&opts).unwrap()(g)
        } else {
            Self::GroundType(Arbitrary::arbitrary(g))
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        match self {
            Self::GroundType(g) => Box::new(g.shrink().map(Self::GroundType)),
            Self::Vector(t, w)  => {
                use std::iter::once;
                let w = *w;
                let res = once(t.as_ref().clone())
                    .chain(w.shrink().filter(|w| *w > 0).map(move |w| Self::Vector(t.clone(), w)).collect::<Vec<_>>());
                Box::new(res)
            },
            Self::Bundle{name, fields} => {
                let name = name.clone();
                let res = fields.iter().map(|f| f.r#type().clone()).collect::<Vec<_>>().into_iter().chain(
                    fields
                        .to_vec()
                        .shrink()
                        .filter(|v| !v.is_empty())
                        .map(move |v| Self::bundle(name.clone(), v))
                );
                Box::new(res)
            },
        }
    }
}


/// A field in a bundle
#[derive(Clone, PartialEq, Debug)]
pub struct BundleField {
    name: Arc<str>,
    r#type: Type,
}

impl BundleField {
    /// Create a new field with the given name and type
    pub fn new(name: impl Into<Arc<str>>, r#type: impl Into<Type>) -> Self {
        Self {name: name.into(), r#type: r#type.into()}
    }

    /// Retrieve the field's name
    pub fn name(&self) -> &Arc<str> {
        &self.name
    }

    /// Retrieve the field's type
    pub fn r#type(&self) -> &Type {
        &self.r#type
    }
}

impl fmt::Display for BundleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.r#type)
    }
}

#[cfg(test)]
impl Arbitrary for BundleField {
    fn arbitrary(g: &mut Gen) -> Self {
        use crate::tests::Identifier;

        Self::new(Identifier::arbitrary(g).to_string(), Type::arbitrary(g))
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let n = self.name.clone();
        Box::new(self.r#type.shrink().map(move |t| Self::new(n.clone(), t)))
    }
}


/// Generate a list of `BundleField`s with unique names
#[cfg(test)]
pub fn bundle_fields(max_size: usize, g: &mut Gen) -> Vec<BundleField> {
    let mut g = Gen::new(std::cmp::max(g.size() / (max_size + 1), 1));
    let mut res: Vec<BundleField> = Default::default();
    (0..max_size)
        .map(|_| BundleField::arbitrary(&mut g))
        .for_each(|f| if !res.iter().any(|r| r.name() == f.name()) {
            res.push(f)
        });
    res
}
