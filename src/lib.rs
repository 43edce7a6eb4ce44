//! Blank node labels and identifiers of the RDF family of formats
//! (JSON-LD, N-Quads, N-Triples, RDF/XML, RDFa, TriG, Turtle).
//!
//! A blank node identifier is a label prefixed with `_:`:
//!
//! ```text
//! _:b0
//! _:address84
//! _:ed7ba470-8e54-465e-825c-99712043e01c
//! ```
pub mod chars;
mod error;
mod identifier;
mod label;

#[cfg(feature = "serde")]
mod serde_impl;

pub use error::{DisplayChar, Error, ErrorKind, InvalidChar, Ordinal};
pub use identifier::{has_identifier_prefix, parse_identifier, Identifier, PREFIX};
pub use label::{parse_label, Label};
