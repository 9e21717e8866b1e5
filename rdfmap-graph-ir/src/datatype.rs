//! RDF literal datatype representation
//!
//! Unlike a full RDF toolkit, a literal's datatype is optional here: a plain
//! literal carries no datatype and a language-tagged literal carries only its
//! language. [`Literal::effective_datatype`](crate::Literal::effective_datatype)
//! reports the implied `xsd:string` / `rdf:langString` when one is needed.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Common XSD and RDF datatype IRIs (re-exported from vocab crate)
pub mod iri {
    pub use rdfmap_vocab::rdf::LANG_STRING as RDF_LANG_STRING;
    pub use rdfmap_vocab::xsd::{
        ANY_URI as XSD_ANY_URI, BOOLEAN as XSD_BOOLEAN, DATE as XSD_DATE,
        DATE_TIME as XSD_DATE_TIME, DECIMAL as XSD_DECIMAL, DOUBLE as XSD_DOUBLE,
        INTEGER as XSD_INTEGER, STRING as XSD_STRING,
    };
}

/// RDF literal datatype, always an expanded IRI
///
/// Equality, hashing and ordering are by IRI.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Datatype(Arc<str>);

impl Datatype {
    /// Create a datatype from an expanded IRI
    pub fn from_iri(iri: impl AsRef<str>) -> Self {
        Datatype(Arc::from(iri.as_ref()))
    }

    /// xsd:string
    pub fn xsd_string() -> Self {
        Self::from_iri(iri::XSD_STRING)
    }

    /// xsd:boolean
    pub fn xsd_boolean() -> Self {
        Self::from_iri(iri::XSD_BOOLEAN)
    }

    /// xsd:integer
    pub fn xsd_integer() -> Self {
        Self::from_iri(iri::XSD_INTEGER)
    }

    /// xsd:double
    pub fn xsd_double() -> Self {
        Self::from_iri(iri::XSD_DOUBLE)
    }

    /// xsd:decimal
    pub fn xsd_decimal() -> Self {
        Self::from_iri(iri::XSD_DECIMAL)
    }

    /// xsd:date
    pub fn xsd_date() -> Self {
        Self::from_iri(iri::XSD_DATE)
    }

    /// xsd:dateTime
    pub fn xsd_date_time() -> Self {
        Self::from_iri(iri::XSD_DATE_TIME)
    }

    /// xsd:anyURI
    pub fn xsd_any_uri() -> Self {
        Self::from_iri(iri::XSD_ANY_URI)
    }

    /// rdf:langString - implied by language-tagged literals
    pub fn rdf_lang_string() -> Self {
        Self::from_iri(iri::RDF_LANG_STRING)
    }

    /// Get the IRI of this datatype
    pub fn as_iri(&self) -> &str {
        &self.0
    }

    /// Check if this is the xsd:string datatype
    pub fn is_xsd_string(&self) -> bool {
        self.as_iri() == iri::XSD_STRING
    }

    /// Check if this is the rdf:langString datatype
    pub fn is_lang_string(&self) -> bool {
        self.as_iri() == iri::RDF_LANG_STRING
    }

    /// Check if this is a numeric type
    pub fn is_numeric(&self) -> bool {
        rdfmap_vocab::xsd::is_integer_family(self.as_iri())
            || rdfmap_vocab::xsd::is_float_family(self.as_iri())
    }
}

impl std::fmt::Display for Datatype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_iri())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_datatype_constructors() {
        assert_eq!(Datatype::xsd_string().as_iri(), iri::XSD_STRING);
        assert_eq!(Datatype::xsd_boolean().as_iri(), iri::XSD_BOOLEAN);
        assert_eq!(Datatype::xsd_integer().as_iri(), iri::XSD_INTEGER);
        assert_eq!(Datatype::xsd_date().as_iri(), iri::XSD_DATE);
        assert_eq!(Datatype::rdf_lang_string().as_iri(), iri::RDF_LANG_STRING);
    }

    #[test]
    fn test_datatype_equality() {
        assert_eq!(Datatype::from_iri(iri::XSD_DATE), Datatype::xsd_date());
        assert_ne!(Datatype::xsd_string(), Datatype::xsd_integer());
    }

    #[test]
    fn test_is_checks() {
        assert!(Datatype::xsd_string().is_xsd_string());
        assert!(!Datatype::xsd_integer().is_xsd_string());
        assert!(Datatype::rdf_lang_string().is_lang_string());
        assert!(Datatype::xsd_integer().is_numeric());
        assert!(Datatype::xsd_decimal().is_numeric());
        assert!(!Datatype::xsd_date().is_numeric());
    }

    #[test]
    fn test_serializes_as_plain_iri() {
        let json = serde_json::to_string(&Datatype::xsd_date()).unwrap();
        assert_eq!(json, format!("\"{}\"", iri::XSD_DATE));
        let back: Datatype = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Datatype::xsd_date());
    }
}
