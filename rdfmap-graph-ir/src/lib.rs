//! Statement-object intermediate representation
//!
//! This crate provides the canonical types for the value position of graph
//! statements, as read from and written to a statement store:
//!
//! 1. **Expanded IRIs only** - IRIs are stored in expanded form.
//!
//! 2. **Optional datatypes** - A literal may be plain (no datatype), typed, or
//!    language-tagged. Tagged literals never carry an explicit datatype.
//!
//! 3. **Decoded values** - A literal always carries its native value
//!    ([`LiteralValue`]); [`LiteralValue::from_lexical`] decodes lexical forms.
//!
//! # Example
//!
//! ```
//! use rdfmap_graph_ir::{Datatype, Literal, StatementObject};
//!
//! let name = StatementObject::lang_string("Alice", "en");
//! let age = StatementObject::from(Literal::from_lexical("30", Datatype::xsd_integer()));
//!
//! assert_eq!(name.to_string(), "\"Alice\"@en");
//! assert_eq!(age.as_literal().unwrap().value().as_integer(), Some(30));
//! ```

pub mod datatype;
mod lexical;
mod term;

pub use datatype::Datatype;
pub use term::{Iri, Literal, LiteralValue, StatementObject};
