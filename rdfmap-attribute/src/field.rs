//! Field descriptors
//!
//! A [`FieldDescriptor`] is the immutable declaration of how one attribute
//! maps onto graph statements: which predicate it uses, whether it holds one
//! or many values, whether its literals are language-tagged, and whether its
//! values are IRI references or literals of some datatype.
//!
//! Descriptors are built once, when a model is declared, and passed into
//! every codec call. There is no way to mutate one after construction.

use rdfmap_graph_ir::{Datatype, Iri};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Invalid field declaration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The predicate IRI is empty
    #[error("field predicate must not be empty")]
    EmptyPredicate,

    /// An IRI-valued field was also declared localized or typed
    #[error("IRI-valued field {predicate} cannot be localized or carry a datatype")]
    ConflictingKind { predicate: String },
}

/// Mapping rules for one attribute
///
/// # Invariants
///
/// - `is_uri` excludes both `localized` and `datatype`: an IRI-valued field
///   has neither a language nor a datatype.
/// - `predicate` is never empty.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "FieldDecl", rename_all = "camelCase")]
pub struct FieldDescriptor {
    predicate: Iri,
    multivalued: bool,
    localized: bool,
    #[serde(rename = "uri")]
    is_uri: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    datatype: Option<Datatype>,
}

impl FieldDescriptor {
    /// Start declaring a field mapped to `predicate`
    pub fn builder(predicate: impl Into<Iri>) -> FieldDescriptorBuilder {
        FieldDescriptorBuilder {
            predicate: predicate.into(),
            multivalued: false,
            localized: false,
            is_uri: false,
            datatype: None,
        }
    }

    /// Single-valued plain literal field
    pub fn literal(predicate: impl Into<Iri>) -> Result<Self, FieldError> {
        Self::builder(predicate).build()
    }

    /// Single-valued literal field with a declared datatype
    pub fn typed(predicate: impl Into<Iri>, datatype: Datatype) -> Result<Self, FieldError> {
        Self::builder(predicate).datatype(datatype).build()
    }

    /// Single-valued IRI reference field
    pub fn uri(predicate: impl Into<Iri>) -> Result<Self, FieldError> {
        Self::builder(predicate).uri().build()
    }

    /// The predicate this field maps to
    pub fn predicate(&self) -> &Iri {
        &self.predicate
    }

    /// Whether the field holds zero-or-many values
    pub fn is_multivalued(&self) -> bool {
        self.multivalued
    }

    /// Whether literal values are filtered by language on read
    pub fn is_localized(&self) -> bool {
        self.localized
    }

    /// Whether values are IRI references rather than literals
    pub fn is_uri(&self) -> bool {
        self.is_uri
    }

    /// Declared literal datatype, `None` for plain literals and IRI fields
    pub fn datatype(&self) -> Option<&Datatype> {
        self.datatype.as_ref()
    }
}

/// Builder for [`FieldDescriptor`]
///
/// ```
/// use rdfmap_attribute::FieldDescriptor;
/// use rdfmap_graph_ir::Datatype;
///
/// let field = FieldDescriptor::builder("http://purl.org/dc/terms/date")
///     .multivalued()
///     .datatype(Datatype::xsd_date())
///     .build()
///     .unwrap();
/// assert!(field.is_multivalued());
/// ```
#[derive(Clone, Debug)]
pub struct FieldDescriptorBuilder {
    predicate: Iri,
    multivalued: bool,
    localized: bool,
    is_uri: bool,
    datatype: Option<Datatype>,
}

impl FieldDescriptorBuilder {
    /// Hold zero-or-many values
    pub fn multivalued(mut self) -> Self {
        self.multivalued = true;
        self
    }

    /// Filter literal values by language on read
    pub fn localized(mut self) -> Self {
        self.localized = true;
        self
    }

    /// Hold IRI references instead of literals
    pub fn uri(mut self) -> Self {
        self.is_uri = true;
        self
    }

    /// Declare the literal datatype
    pub fn datatype(mut self, datatype: Datatype) -> Self {
        self.datatype = Some(datatype);
        self
    }

    /// Validate and build the descriptor
    pub fn build(self) -> Result<FieldDescriptor, FieldError> {
        if self.predicate.is_blank() {
            return Err(FieldError::EmptyPredicate);
        }
        if self.is_uri && (self.localized || self.datatype.is_some()) {
            return Err(FieldError::ConflictingKind {
                predicate: self.predicate.as_str().to_string(),
            });
        }
        Ok(FieldDescriptor {
            predicate: self.predicate,
            multivalued: self.multivalued,
            localized: self.localized,
            is_uri: self.is_uri,
            datatype: self.datatype,
        })
    }
}

/// Wire form of a field declaration, validated into a [`FieldDescriptor`]
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FieldDecl {
    predicate: String,
    #[serde(default)]
    multivalued: bool,
    #[serde(default)]
    localized: bool,
    #[serde(default)]
    uri: bool,
    #[serde(default)]
    datatype: Option<String>,
}

impl TryFrom<FieldDecl> for FieldDescriptor {
    type Error = FieldError;

    fn try_from(decl: FieldDecl) -> Result<Self, Self::Error> {
        let mut builder = FieldDescriptor::builder(decl.predicate);
        if decl.multivalued {
            builder = builder.multivalued();
        }
        if decl.localized {
            builder = builder.localized();
        }
        if decl.uri {
            builder = builder.uri();
        }
        if let Some(dt) = decl.datatype {
            builder = builder.datatype(Datatype::from_iri(dt));
        }
        builder.build()
    }
}
