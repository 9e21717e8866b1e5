//! # rdfmap attribute marshalling
//!
//! Converts between a resource's typed field values and the statement objects
//! attached to the predicates those fields map to.
//!
//! This crate provides:
//! - [`FieldDescriptor`]: the immutable mapping rules of one field
//! - [`read_attribute`] / [`write_attribute`]: the pure codec
//! - [`FieldMap`]: explicit name → descriptor resolution
//! - [`StatementRead`] / [`StatementWrite`]: the store seam, with [`MemoryStore`]
//! - [`Resource`]: subject-bound get/set by field name
//!
//! ## Design Principles
//!
//! 1. **Pure codec**: decoding and encoding never perform I/O
//! 2. **Total functions**: empty sets, locale misses and extra values resolve
//!    to defined results; only unknown field names are errors
//! 3. **No ambient state**: locale and field declarations are passed in
//!
//! ## Example
//!
//! ```
//! use rdfmap_attribute::{read_attribute, write_attribute, AttributeValue, FieldDescriptor, LocaleSelector};
//! use rdfmap_vocab::rdfs;
//!
//! let see_also = FieldDescriptor::uri(rdfs::SEE_ALSO).unwrap();
//! let objects = write_attribute(&see_also, "  http://example.org/bob ");
//! let value = read_attribute(&see_also, objects, &LocaleSelector::locale("en"));
//!
//! assert_eq!(value.as_single().and_then(|v| v.as_iri()).map(|i| i.as_str()), Some("http://example.org/bob"));
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod field;
pub mod locale;
pub mod resolver;
pub mod resource;
pub mod store;
pub mod value;

pub use codec::{
    read_attribute, read_named_attribute, write_attribute, write_localized_attribute,
    write_named_attribute, Replacement,
};
pub use config::{CodecConfig, ModelConfig};
pub use error::{AttributeError, Result};
pub use field::{FieldDescriptor, FieldDescriptorBuilder, FieldError};
pub use locale::LocaleSelector;
pub use resolver::{FieldMap, FieldResolver};
pub use resource::Resource;
pub use store::{MemoryStore, StatementRead, StatementStore, StatementWrite};
pub use value::{AttributeValue, Scalar};

/// Re-export of the statement-object IR
pub use rdfmap_graph_ir as ir;
