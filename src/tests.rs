//! Testing utilities

use std::fmt;

use quickcheck::Arbitrary;

/// Utility type for property-based tests involving an equivalence
///
/// Sometimes, properties we want to test for are the equivalence of two values.
/// For example, flattening a concatenation of printables should yield the
/// same result as concatenating the individually flattened printables. In such
/// cases, we want to compare both sides of the equation.
///
/// `Equivalence` is a `quickcheck::Testable` type which expresses this intent,
/// but also includes both values as part of the failure report if a test fails.
///
#[derive(Clone, Debug)]
pub struct Equivalence<T>(pub T, pub T)
where
    T: fmt::Debug + PartialEq + 'static;

impl<T> Equivalence<T>
where
    T: fmt::Debug + PartialEq + 'static,
{
    /// Construct a value expressing the equivalence of the given values
    ///
    /// In many cases, you'll be able to construct an instance for two values
    /// `a` and `b` via `Equivalence(a, b)`. This function is intended for
    /// situations where you can't for whatever reasons.
    pub fn of(left: T, right: T) -> Self {
        Self(left, right)
    }
}

impl<T> quickcheck::Testable for Equivalence<T>
where
    T: fmt::Debug + PartialEq + 'static,
{
    fn result(&self, _: &mut quickcheck::Gen) -> quickcheck::TestResult {
        use quickcheck::TestResult;
        if self.0 == self.1 {
            TestResult::passed()
        } else {
            TestResult::error(format!(
                "Missmatch! Left: '{:?}', Right: '{:?}'",
                self.0, self.1
            ))
        }
    }
}


/// Utility type for generating identifiers for tests
#[derive(Clone, Debug, PartialEq)]
pub struct Identifier {
    data: String
}

impl From<&str> for Identifier {
    fn from(ident: &str) -> Self {
        Self {data: ident.to_string()}
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.data, f)
    }
}

impl quickcheck::Arbitrary for Identifier {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let mut data: String = Default::default();

        let mut i: u128 = quickcheck::Arbitrary::arbitrary(g);
        const N: u128 = 2*36 + 1;

        data.push(match (i % N) as u8 {
            i if i < 26 => (0x41 + i) as char,
            i if i < 52 => (0x61 - 26 + i) as char,
            _ => '_',
        });
        i = i / N;

        while i > 0 {
            const M: u128 = 10 + N;
            data.push(match (i % M) as u8 {
                i if i < 10 => (0x30 + i) as char,
                i if i < 36 => (0x41 - 10 + i) as char,
                i if i < 62 => (0x61 - 36 + i) as char,
                _ => '_',
            });
            i = i / M;
        }

        Self {data}
    }
}



/// Utility type for generating printable ASCII text for tests
///
/// The text generated may contain any printable ASCII character, including
/// `%` and `\\`, but no control characters.
#[derive(Clone, Debug, PartialEq)]
pub struct ASCII {
    data: String
}

impl From<String> for ASCII {
    fn from(data: String) -> Self {
        Self {data}
    }
}

impl AsRef<str> for ASCII {
    fn as_ref(&self) -> &str {
        self.data.as_ref()
    }
}

impl fmt::Display for ASCII {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.data, f)
    }
}

impl quickcheck::Arbitrary for ASCII {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let len = usize::arbitrary(g) % (g.size() + 1);
        let data = std::iter::from_fn(|| Some(u8::arbitrary(g) % 95 + 0x20))
            .take(len)
            .map(char::from)
            .collect();
        Self {data}
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.data.shrink().filter(|s| s.chars().all(|c| c.is_ascii_graphic() || c == ' ')).map(Self::from))
    }
}
