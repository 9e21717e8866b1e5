//! Attribute codec
//!
//! Converts between the raw statement objects attached to one predicate of a
//! subject and the native [`AttributeValue`] of the field mapped to it.
//!
//! Both directions are pure: nothing is read from or written to a store here.
//! Callers fetch the current objects from a [`StatementRead`](crate::StatementRead)
//! before decoding, and hand the encoded set to a
//! [`StatementWrite`](crate::StatementWrite), which replaces (never merges
//! with) what the predicate held before.
//!
//! ## Decode
//!
//! 1. Localized literal fields drop every literal whose language tag differs
//!    from the selected locale, unless the selector is [`LocaleSelector::All`].
//!    IRI objects are never dropped by this step.
//! 2. The read is multivalued when the field is, or when a literal field is
//!    read with [`LocaleSelector::All`] (every language variant comes back).
//! 3. Multivalued reads return every surviving object; single-valued reads
//!    return the first one, or absent.
//!
//! Which object wins when several survive for a single-valued field is
//! undefined: the first in the order the store supplied them is returned.
//!
//! ## Encode
//!
//! Blank values (absent, empty or whitespace-only strings and IRIs) encode to
//! nothing. IRI fields coerce values to IRI references with surrounding
//! whitespace trimmed; typed fields wrap values in a literal of the declared
//! datatype, decoding text values as lexical forms of that datatype; other
//! fields produce a plain literal of the raw value.
//!
//! A sequence written to a single-valued field keeps only its first element.

use crate::error::Result;
use crate::field::FieldDescriptor;
use crate::locale::LocaleSelector;
use crate::resolver::FieldResolver;
use crate::value::{AttributeValue, Scalar};
use rdfmap_graph_ir::{Iri, Literal, LiteralValue, StatementObject};

/// Encoded replacement for one predicate
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Replacement {
    /// Predicate whose objects are replaced
    pub predicate: Iri,
    /// Full replacement set (empty clears the predicate)
    pub objects: Vec<StatementObject>,
}

// =============================================================================
// Decode
// =============================================================================

/// Decode the objects attached to `field`'s predicate into a native value
///
/// Never fails: an empty set decodes to an empty sequence (multivalued reads)
/// or absent (single-valued reads).
pub fn read_attribute<I>(field: &FieldDescriptor, objects: I, locale: &LocaleSelector) -> AttributeValue
where
    I: IntoIterator<Item = StatementObject>,
{
    let language = match locale {
        LocaleSelector::Locale(tag) if field.is_localized() && !field.is_uri() => Some(tag.as_ref()),
        _ => None,
    };

    let mut survivors = objects.into_iter().filter(|obj| match (language, obj) {
        (Some(lang), StatementObject::Literal(lit)) => lit.has_language(lang),
        _ => true,
    });

    let multivalued = field.is_multivalued() || (!field.is_uri() && locale.is_all());

    if multivalued {
        let values: Vec<Scalar> = survivors.map(decode_object).collect();
        tracing::trace!(
            predicate = %field.predicate(),
            locale = ?locale,
            count = values.len(),
            "decoded multivalued attribute"
        );
        AttributeValue::Many(values)
    } else {
        let value = survivors.next().map(decode_object);
        tracing::trace!(
            predicate = %field.predicate(),
            locale = ?locale,
            present = value.is_some(),
            "decoded single-valued attribute"
        );
        AttributeValue::Single(value)
    }
}

/// Decode by field name
///
/// Fails with `FieldNotPresent` when `name` is not declared.
pub fn read_named_attribute<R, I>(
    fields: &R,
    name: &str,
    objects: I,
    locale: &LocaleSelector,
) -> Result<AttributeValue>
where
    R: FieldResolver + ?Sized,
    I: IntoIterator<Item = StatementObject>,
{
    let field = fields.require(name)?;
    Ok(read_attribute(field, objects, locale))
}

/// IRI objects decode to the reference itself, literals to their native value
fn decode_object(obj: StatementObject) -> Scalar {
    match obj {
        StatementObject::Iri(iri) => Scalar::Iri(iri),
        StatementObject::Literal(lit) => Scalar::Literal(lit.into_value()),
    }
}

// =============================================================================
// Encode
// =============================================================================

/// Encode `value` into the full replacement set for `field`'s predicate
pub fn write_attribute(field: &FieldDescriptor, value: impl Into<AttributeValue>) -> Vec<StatementObject> {
    encode(field, value.into(), None)
}

/// Encode `value`, tagging plain literals of a localized field with `language`
///
/// Only localized literal fields without a declared datatype are tagged; for
/// every other field this is [`write_attribute`].
pub fn write_localized_attribute(
    field: &FieldDescriptor,
    value: impl Into<AttributeValue>,
    language: &str,
) -> Vec<StatementObject> {
    let tag = (field.is_localized() && !field.is_uri() && field.datatype().is_none())
        .then_some(language)
        .filter(|l| !l.trim().is_empty());
    encode(field, value.into(), tag)
}

/// Encode by field name
///
/// Fails with `FieldNotPresent` when `name` is not declared; nothing is
/// encoded in that case.
pub fn write_named_attribute<R>(
    fields: &R,
    name: &str,
    value: impl Into<AttributeValue>,
) -> Result<Replacement>
where
    R: FieldResolver + ?Sized,
{
    let field = fields.require(name)?;
    Ok(Replacement {
        predicate: field.predicate().clone(),
        objects: write_attribute(field, value),
    })
}

fn encode(field: &FieldDescriptor, value: AttributeValue, language: Option<&str>) -> Vec<StatementObject> {
    let objects: Vec<StatementObject> = match value {
        AttributeValue::Many(values) if field.is_multivalued() => values
            .into_iter()
            .filter_map(|v| encode_value(field, v, language))
            .collect(),
        AttributeValue::Many(values) => {
            if values.len() > 1 {
                tracing::debug!(
                    predicate = %field.predicate(),
                    dropped = values.len() - 1,
                    "single-valued field given a sequence, keeping the first element"
                );
            }
            values
                .into_iter()
                .next()
                .and_then(|v| encode_value(field, v, language))
                .into_iter()
                .collect()
        }
        AttributeValue::Single(value) => value
            .and_then(|v| encode_value(field, v, language))
            .into_iter()
            .collect(),
    };

    tracing::trace!(
        predicate = %field.predicate(),
        count = objects.len(),
        "encoded attribute"
    );
    objects
}

fn encode_value(field: &FieldDescriptor, value: Scalar, language: Option<&str>) -> Option<StatementObject> {
    if value.is_blank() {
        return None;
    }

    if field.is_uri() {
        return Some(StatementObject::Iri(value.to_iri()));
    }

    let value = value.into_literal_value();
    let literal = match (field.datatype(), language) {
        // Text under a declared datatype is a lexical form: decode it so the
        // same term always has one native representation
        (Some(dt), _) => match value {
            LiteralValue::String(lexical) => {
                Literal::typed(LiteralValue::from_lexical(&lexical, dt), dt.clone())
            }
            value => Literal::typed(value, dt.clone()),
        },
        (None, Some(lang)) => Literal::lang_string(value, lang),
        (None, None) => Literal::plain(value),
    };
    Some(StatementObject::Literal(literal))
}
