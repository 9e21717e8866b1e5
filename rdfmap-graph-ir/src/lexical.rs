//! Lexical form → native literal value conversion
//!
//! Stores usually hand back literals as `(lexical, datatype)` pairs. These
//! helpers decode the lexical form into the native [`LiteralValue`] variant
//! for the well-known XSD datatypes. Conversion is total: unknown datatypes
//! and malformed lexical forms keep the lexical string as a
//! `LiteralValue::String` under the declared datatype.

use crate::{Datatype, LiteralValue};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rdfmap_vocab::xsd;

impl LiteralValue {
    /// Decode a lexical form according to `datatype`
    pub fn from_lexical(lexical: &str, datatype: &Datatype) -> Self {
        let dt = datatype.as_iri();
        let parsed = if xsd::is_string_like(dt) {
            None
        } else if dt == xsd::BOOLEAN {
            parse_boolean(lexical)
        } else if xsd::is_integer_family(dt) {
            lexical.trim().parse::<i64>().ok().map(LiteralValue::Integer)
        } else if xsd::is_float_family(dt) {
            parse_double(lexical)
        } else if dt == xsd::DATE {
            parse_date(lexical)
        } else if dt == xsd::DATE_TIME {
            parse_date_time(lexical)
        } else {
            None
        };

        parsed.unwrap_or_else(|| LiteralValue::string(lexical))
    }
}

fn parse_boolean(s: &str) -> Option<LiteralValue> {
    match s.trim() {
        "true" | "1" => Some(LiteralValue::Boolean(true)),
        "false" | "0" => Some(LiteralValue::Boolean(false)),
        _ => None,
    }
}

fn parse_double(s: &str) -> Option<LiteralValue> {
    let d = match s.trim() {
        "INF" | "+INF" => f64::INFINITY,
        "-INF" => f64::NEG_INFINITY,
        "NaN" => f64::NAN,
        other => other.parse::<f64>().ok().filter(|d| d.is_finite())?,
    };
    Some(LiteralValue::Double(d))
}

fn parse_date(s: &str) -> Option<LiteralValue> {
    let s = s.trim();
    // A trailing `Z` timezone does not change the calendar date
    let s = s.strip_suffix('Z').unwrap_or(s);
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .map(LiteralValue::Date)
}

fn parse_date_time(s: &str) -> Option<LiteralValue> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(LiteralValue::DateTime(dt));
    }

    // Without timezone: treated as UTC
    for fmt in &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(s, fmt) {
            let utc: DateTime<Utc> = ndt.and_utc();
            return Some(LiteralValue::DateTime(utc.fixed_offset()));
        }
    }
    None
}
