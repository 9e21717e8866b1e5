//! Native attribute values
//!
//! What the rest of an application sees when it reads or writes a mapped
//! field: a single scalar (possibly absent) or an ordered sequence of scalars.

use chrono::{DateTime, FixedOffset, NaiveDate};
use rdfmap_graph_ir::{Iri, LiteralValue};

/// One native value: an IRI reference or a decoded literal value
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Scalar {
    /// Reference to another resource
    Iri(Iri),
    /// Decoded literal value (string, number, date, ...)
    Literal(LiteralValue),
}

impl Scalar {
    /// Create an IRI scalar
    pub fn iri(iri: impl AsRef<str>) -> Self {
        Scalar::Iri(Iri::new(iri))
    }

    /// Check whether this value expresses "unset"
    ///
    /// Empty or whitespace-only strings and IRIs are blank. Booleans, numbers
    /// and dates never are.
    pub fn is_blank(&self) -> bool {
        match self {
            Scalar::Iri(iri) => iri.is_blank(),
            Scalar::Literal(v) => v.is_blank(),
        }
    }

    /// Try to get as IRI
    pub fn as_iri(&self) -> Option<&Iri> {
        match self {
            Scalar::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// Try to get as literal value
    pub fn as_literal(&self) -> Option<&LiteralValue> {
        match self {
            Scalar::Literal(v) => Some(v),
            _ => None,
        }
    }

    /// Try to get as string
    pub fn as_str(&self) -> Option<&str> {
        self.as_literal().and_then(LiteralValue::as_str)
    }

    /// Coerce to an IRI reference with surrounding whitespace trimmed
    pub fn to_iri(&self) -> Iri {
        match self {
            Scalar::Iri(iri) => {
                let trimmed = iri.as_str().trim();
                if trimmed.len() == iri.as_str().len() {
                    iri.clone()
                } else {
                    Iri::new(trimmed)
                }
            }
            Scalar::Literal(v) => Iri::new(v.lexical().trim()),
        }
    }

    /// Convert to the value a literal would carry
    ///
    /// IRIs become their string form.
    pub fn into_literal_value(self) -> LiteralValue {
        match self {
            Scalar::Iri(iri) => LiteralValue::string(iri.as_str()),
            Scalar::Literal(v) => v,
        }
    }
}

impl std::fmt::Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scalar::Iri(iri) => write!(f, "{}", iri.as_str()),
            Scalar::Literal(v) => write!(f, "{}", v.lexical()),
        }
    }
}

impl From<Iri> for Scalar {
    fn from(iri: Iri) -> Self {
        Scalar::Iri(iri)
    }
}

impl From<LiteralValue> for Scalar {
    fn from(v: LiteralValue) -> Self {
        Scalar::Literal(v)
    }
}

macro_rules! scalar_from_literal {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Scalar {
                fn from(v: $t) -> Self {
                    Scalar::Literal(LiteralValue::from(v))
                }
            }
        )*
    };
}

scalar_from_literal!(&str, String, bool, i64, i32, f64, NaiveDate, DateTime<FixedOffset>);

/// A field's native value
///
/// `Single(None)` is the absent value. Decoding produces `Many` for fields
/// read as multivalued and `Single` otherwise; encoding accepts either.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum AttributeValue {
    /// At most one value
    Single(Option<Scalar>),
    /// Ordered sequence of values
    Many(Vec<Scalar>),
}

impl AttributeValue {
    /// The absent value
    pub fn absent() -> Self {
        AttributeValue::Single(None)
    }

    /// Check for the absent value
    pub fn is_absent(&self) -> bool {
        matches!(self, AttributeValue::Single(None))
    }

    /// The single value, if this is a present `Single`
    pub fn as_single(&self) -> Option<&Scalar> {
        match self {
            AttributeValue::Single(v) => v.as_ref(),
            AttributeValue::Many(_) => None,
        }
    }

    /// The sequence, if this is `Many`
    pub fn as_many(&self) -> Option<&[Scalar]> {
        match self {
            AttributeValue::Many(values) => Some(values),
            AttributeValue::Single(_) => None,
        }
    }

    /// Flatten into a sequence (absent becomes empty)
    pub fn into_vec(self) -> Vec<Scalar> {
        match self {
            AttributeValue::Single(v) => v.into_iter().collect(),
            AttributeValue::Many(values) => values,
        }
    }
}

macro_rules! attribute_value_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for AttributeValue {
                fn from(v: $t) -> Self {
                    AttributeValue::Single(Some(v.into()))
                }
            }

            impl From<Option<$t>> for AttributeValue {
                fn from(v: Option<$t>) -> Self {
                    AttributeValue::Single(v.map(Into::into))
                }
            }

            impl From<Vec<$t>> for AttributeValue {
                fn from(values: Vec<$t>) -> Self {
                    AttributeValue::Many(values.into_iter().map(Into::into).collect())
                }
            }
        )*
    };
}

attribute_value_from!(
    Scalar,
    Iri,
    LiteralValue,
    &str,
    String,
    bool,
    i64,
    i32,
    f64,
    NaiveDate,
    DateTime<FixedOffset>
);

impl<T: Into<Scalar>> FromIterator<T> for AttributeValue {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        AttributeValue::Many(iter.into_iter().map(Into::into).collect())
    }
}
