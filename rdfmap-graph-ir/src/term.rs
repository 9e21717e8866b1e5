//! Statement object types: IRI references and literals
//!
//! A statement object is the value position of a subject–predicate–object
//! statement. It can be:
//! - An IRI reference (always expanded, never prefixed)
//! - A literal (native value + optional datatype + optional language tag)

use crate::Datatype;
use chrono::{DateTime, FixedOffset, NaiveDate, SecondsFormat};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// An expanded IRI
///
/// Used for predicates, subjects, and IRI-valued statement objects.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Iri(Arc<str>);

impl Iri {
    /// Create an IRI from an expanded IRI string
    pub fn new(iri: impl AsRef<str>) -> Self {
        Self(Arc::from(iri.as_ref()))
    }

    /// Get the IRI string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if the IRI is empty or only whitespace
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl AsRef<str> for Iri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Iri {
    fn from(s: &str) -> Self {
        Iri::new(s)
    }
}

impl From<String> for Iri {
    fn from(s: String) -> Self {
        Iri(Arc::from(s))
    }
}

impl std::fmt::Display for Iri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}>", self.0)
    }
}

/// Literal value storage
///
/// Stores the decoded native value of a literal.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum LiteralValue {
    /// String value (UTF-8)
    String(Arc<str>),
    /// Boolean value
    Boolean(bool),
    /// Integer value (i64 range)
    Integer(i64),
    /// Floating point value (f64)
    Double(f64),
    /// Calendar date without timezone
    Date(NaiveDate),
    /// Date and time with the offset it was written in
    DateTime(DateTime<FixedOffset>),
}

impl LiteralValue {
    /// Create a string literal value
    pub fn string(s: impl AsRef<str>) -> Self {
        LiteralValue::String(Arc::from(s.as_ref()))
    }

    /// Get the lexical representation of this value
    pub fn lexical(&self) -> String {
        match self {
            LiteralValue::String(s) => s.to_string(),
            LiteralValue::Boolean(b) => b.to_string(),
            LiteralValue::Integer(i) => i.to_string(),
            LiteralValue::Double(d) => {
                if d.is_nan() {
                    "NaN".to_string()
                } else if d.is_infinite() {
                    if d.is_sign_positive() {
                        "INF".to_string()
                    } else {
                        "-INF".to_string()
                    }
                } else {
                    d.to_string()
                }
            }
            LiteralValue::Date(d) => d.format("%Y-%m-%d").to_string(),
            LiteralValue::DateTime(dt) => dt.to_rfc3339_opts(SecondsFormat::AutoSi, true),
        }
    }

    /// Check if this is a string value
    pub fn is_string(&self) -> bool {
        matches!(self, LiteralValue::String(_))
    }

    /// Check if this is an empty or whitespace-only string
    ///
    /// Non-string values are never blank.
    pub fn is_blank(&self) -> bool {
        matches!(self, LiteralValue::String(s) if s.trim().is_empty())
    }

    /// Try to get as string reference
    pub fn as_str(&self) -> Option<&str> {
        match self {
            LiteralValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            LiteralValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get as integer
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            LiteralValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get as double
    pub fn as_double(&self) -> Option<f64> {
        match self {
            LiteralValue::Double(d) => Some(*d),
            LiteralValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Try to get as date
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            LiteralValue::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Try to get as date-time
    pub fn as_date_time(&self) -> Option<&DateTime<FixedOffset>> {
        match self {
            LiteralValue::DateTime(dt) => Some(dt),
            _ => None,
        }
    }

    fn type_ord(&self) -> u8 {
        match self {
            LiteralValue::String(_) => 0,
            LiteralValue::Boolean(_) => 1,
            LiteralValue::Integer(_) => 2,
            LiteralValue::Double(_) => 3,
            LiteralValue::Date(_) => 4,
            LiteralValue::DateTime(_) => 5,
        }
    }
}

impl PartialEq for LiteralValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (LiteralValue::String(a), LiteralValue::String(b)) => a == b,
            (LiteralValue::Boolean(a), LiteralValue::Boolean(b)) => a == b,
            (LiteralValue::Integer(a), LiteralValue::Integer(b)) => a == b,
            (LiteralValue::Double(a), LiteralValue::Double(b)) => a.to_bits() == b.to_bits(),
            (LiteralValue::Date(a), LiteralValue::Date(b)) => a == b,
            // Same instant written with a different offset is a different literal
            (LiteralValue::DateTime(a), LiteralValue::DateTime(b)) => {
                a == b && a.offset() == b.offset()
            }
            _ => false,
        }
    }
}

impl Eq for LiteralValue {}

impl Hash for LiteralValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            LiteralValue::String(s) => s.hash(state),
            LiteralValue::Boolean(b) => b.hash(state),
            LiteralValue::Integer(i) => i.hash(state),
            LiteralValue::Double(d) => d.to_bits().hash(state),
            LiteralValue::Date(d) => d.hash(state),
            LiteralValue::DateTime(dt) => {
                dt.timestamp_nanos_opt().hash(state);
                dt.offset().local_minus_utc().hash(state);
            }
        }
    }
}

impl PartialOrd for LiteralValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LiteralValue {
    fn cmp(&self, other: &Self) -> Ordering {
        // String < Boolean < Integer < Double < Date < DateTime
        match self.type_ord().cmp(&other.type_ord()) {
            Ordering::Equal => {}
            ord => return ord,
        }

        match (self, other) {
            (LiteralValue::String(a), LiteralValue::String(b)) => a.cmp(b),
            (LiteralValue::Boolean(a), LiteralValue::Boolean(b)) => a.cmp(b),
            (LiteralValue::Integer(a), LiteralValue::Integer(b)) => a.cmp(b),
            // IEEE total order: agrees with bitwise equality (-0.0 < 0.0, NaN last)
            (LiteralValue::Double(a), LiteralValue::Double(b)) => a.total_cmp(b),
            (LiteralValue::Date(a), LiteralValue::Date(b)) => a.cmp(b),
            (LiteralValue::DateTime(a), LiteralValue::DateTime(b)) => a.cmp(b).then_with(|| {
                a.offset()
                    .local_minus_utc()
                    .cmp(&b.offset().local_minus_utc())
            }),
            _ => Ordering::Equal,
        }
    }
}

impl From<&str> for LiteralValue {
    fn from(s: &str) -> Self {
        LiteralValue::string(s)
    }
}

impl From<String> for LiteralValue {
    fn from(s: String) -> Self {
        LiteralValue::String(Arc::from(s))
    }
}

impl From<bool> for LiteralValue {
    fn from(b: bool) -> Self {
        LiteralValue::Boolean(b)
    }
}

impl From<i64> for LiteralValue {
    fn from(i: i64) -> Self {
        LiteralValue::Integer(i)
    }
}

impl From<i32> for LiteralValue {
    fn from(i: i32) -> Self {
        LiteralValue::Integer(i64::from(i))
    }
}

impl From<f64> for LiteralValue {
    fn from(d: f64) -> Self {
        LiteralValue::Double(d)
    }
}

impl From<NaiveDate> for LiteralValue {
    fn from(d: NaiveDate) -> Self {
        LiteralValue::Date(d)
    }
}

impl From<DateTime<FixedOffset>> for LiteralValue {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        LiteralValue::DateTime(dt)
    }
}

/// An RDF literal
///
/// # Invariants
///
/// - A literal with a language tag has no explicit datatype.
/// - A literal without datatype or language is a plain (untyped) literal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Literal {
    value: LiteralValue,
    datatype: Option<Datatype>,
    language: Option<Arc<str>>,
}

impl Literal {
    /// Create a plain literal with no datatype and no language
    pub fn plain(value: impl Into<LiteralValue>) -> Self {
        Self {
            value: value.into(),
            datatype: None,
            language: None,
        }
    }

    /// Create a literal carrying an explicit datatype
    pub fn typed(value: impl Into<LiteralValue>, datatype: Datatype) -> Self {
        Self {
            value: value.into(),
            datatype: Some(datatype),
            language: None,
        }
    }

    /// Create a language-tagged literal
    pub fn lang_string(value: impl Into<LiteralValue>, lang: impl AsRef<str>) -> Self {
        Self {
            value: value.into(),
            datatype: None,
            language: Some(Arc::from(lang.as_ref())),
        }
    }

    /// Parse a lexical form into a typed literal
    ///
    /// The native value is decoded with [`LiteralValue::from_lexical`].
    pub fn from_lexical(lexical: &str, datatype: Datatype) -> Self {
        let value = LiteralValue::from_lexical(lexical, &datatype);
        Self::typed(value, datatype)
    }

    /// The decoded native value
    pub fn value(&self) -> &LiteralValue {
        &self.value
    }

    /// Consume the literal, keeping only its native value
    pub fn into_value(self) -> LiteralValue {
        self.value
    }

    /// The explicit datatype, if any
    pub fn datatype(&self) -> Option<&Datatype> {
        self.datatype.as_ref()
    }

    /// The language tag, if any
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Datatype this literal has in RDF terms
    ///
    /// `rdf:langString` for tagged literals, `xsd:string` for plain ones.
    pub fn effective_datatype(&self) -> Datatype {
        match (&self.datatype, &self.language) {
            (Some(dt), _) => dt.clone(),
            (None, Some(_)) => Datatype::rdf_lang_string(),
            (None, None) => Datatype::xsd_string(),
        }
    }

    /// Check whether the language tag matches `lang` (ASCII case-insensitive)
    ///
    /// Untagged literals never match.
    pub fn has_language(&self, lang: &str) -> bool {
        self.language
            .as_deref()
            .is_some_and(|l| l.eq_ignore_ascii_case(lang))
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\"", escape_ntriples(&self.value.lexical()))?;
        if let Some(lang) = &self.language {
            write!(f, "@{}", lang)
        } else if let Some(dt) = &self.datatype {
            if dt.is_xsd_string() {
                Ok(())
            } else {
                write!(f, "^^<{}>", dt.as_iri())
            }
        } else {
            Ok(())
        }
    }
}

/// The object of a statement: an IRI reference or a literal
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StatementObject {
    /// Reference to another resource
    Iri(Iri),
    /// Literal value
    Literal(Literal),
}

impl StatementObject {
    /// Create an IRI object
    pub fn iri(iri: impl AsRef<str>) -> Self {
        StatementObject::Iri(Iri::new(iri))
    }

    /// Create a plain literal object
    pub fn plain(value: impl Into<LiteralValue>) -> Self {
        StatementObject::Literal(Literal::plain(value))
    }

    /// Create a typed literal object
    pub fn typed(value: impl Into<LiteralValue>, datatype: Datatype) -> Self {
        StatementObject::Literal(Literal::typed(value, datatype))
    }

    /// Create a language-tagged literal object
    pub fn lang_string(value: impl Into<LiteralValue>, lang: impl AsRef<str>) -> Self {
        StatementObject::Literal(Literal::lang_string(value, lang))
    }

    /// Check if this is an IRI reference
    pub fn is_iri(&self) -> bool {
        matches!(self, StatementObject::Iri(_))
    }

    /// Check if this is a literal
    pub fn is_literal(&self) -> bool {
        matches!(self, StatementObject::Literal(_))
    }

    /// Try to get as IRI
    pub fn as_iri(&self) -> Option<&Iri> {
        match self {
            StatementObject::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// Try to get as literal
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            StatementObject::Literal(lit) => Some(lit),
            _ => None,
        }
    }
}

impl From<Iri> for StatementObject {
    fn from(iri: Iri) -> Self {
        StatementObject::Iri(iri)
    }
}

impl From<Literal> for StatementObject {
    fn from(lit: Literal) -> Self {
        StatementObject::Literal(lit)
    }
}

impl std::fmt::Display for StatementObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatementObject::Iri(iri) => write!(f, "{}", iri),
            StatementObject::Literal(lit) => write!(f, "{}", lit),
        }
    }
}

/// Escape a lexical form for an N-Triples string literal
fn escape_ntriples(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out
}
