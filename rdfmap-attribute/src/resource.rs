//! Subject-bound attribute access
//!
//! [`Resource`] ties one subject to its model's fields, a statement store and
//! the codec settings, so callers can read and write attributes by name. It
//! is glue only: no batching, no transactions, no validation.

use crate::codec::{read_attribute, write_localized_attribute, write_named_attribute, Replacement};
use crate::config::CodecConfig;
use crate::error::Result;
use crate::locale::LocaleSelector;
use crate::resolver::{FieldMap, FieldResolver};
use crate::store::StatementStore;
use crate::value::AttributeValue;
use rdfmap_graph_ir::Iri;

/// One subject's attributes, read and written through a statement store
#[derive(Debug)]
pub struct Resource<'a, S: StatementStore + ?Sized> {
    subject: Iri,
    fields: &'a FieldMap,
    store: &'a S,
    config: &'a CodecConfig,
}

impl<'a, S: StatementStore + ?Sized> Resource<'a, S> {
    /// Bind `subject` to a model and store
    pub fn new(subject: impl Into<Iri>, fields: &'a FieldMap, store: &'a S, config: &'a CodecConfig) -> Self {
        Self {
            subject: subject.into(),
            fields,
            store,
            config,
        }
    }

    /// The bound subject
    pub fn subject(&self) -> &Iri {
        &self.subject
    }

    /// Read `name` in the configured default locale
    pub fn get(&self, name: &str) -> Result<AttributeValue> {
        self.get_in(name, &self.config.default_selector())
    }

    /// Read `name` with an explicit locale selector
    pub fn get_in(&self, name: &str, locale: &LocaleSelector) -> Result<AttributeValue> {
        let field = self.fields.require(name)?;
        let objects = self.store.objects(&self.subject, field.predicate())?;
        tracing::trace!(
            subject = %self.subject,
            field = name,
            locale = locale.to_token(&self.config.all_locales_token),
            count = objects.len(),
            "reading attribute statements"
        );
        Ok(read_attribute(field, objects, locale))
    }

    /// Replace the statements of `name` with the encoding of `value`
    ///
    /// An undeclared `name` fails with `FieldNotPresent` before the store is
    /// touched.
    pub fn set(&self, name: &str, value: impl Into<AttributeValue>) -> Result<()> {
        let replacement = write_named_attribute(self.fields, name, value)?;
        self.apply(name, replacement)
    }

    /// Like [`set`](Self::set), tagging plain literals of a localized field
    /// with `language`
    ///
    /// This replaces every language variant, not just `language`.
    pub fn set_localized(&self, name: &str, value: impl Into<AttributeValue>, language: &str) -> Result<()> {
        let field = self.fields.require(name)?;
        let replacement = Replacement {
            predicate: field.predicate().clone(),
            objects: write_localized_attribute(field, value, language),
        };
        self.apply(name, replacement)
    }

    fn apply(&self, name: &str, replacement: Replacement) -> Result<()> {
        tracing::debug!(
            subject = %self.subject,
            field = name,
            predicate = %replacement.predicate,
            count = replacement.objects.len(),
            "replacing attribute statements"
        );
        self.store
            .replace(&self.subject, &replacement.predicate, replacement.objects)
    }
}
