use crate::{Error, Label};
use rdf_types::{BlankId, BlankIdBuf};
use std::{fmt, str::FromStr};

/// Prefix of every blank node identifier.
///
/// Makes blank node identifiers look like IRIs with the `_` scheme.
pub const PREFIX: &str = "_:";

/// Checks if `value` starts with `_:`.
pub fn has_identifier_prefix(value: &str) -> bool {
	value.starts_with(PREFIX)
}

/// Blank node identifier, as found in JSON-LD, N-Quads, N-Triples, RDF/XML,
/// RDFa, TriG or Turtle documents.
///
/// ```text
/// _:b0
/// _:address84
/// _:n1
/// _:ed7ba470-8e54-465e-825c-99712043e01c
/// _:label123
/// ```
///
/// An identifier is absent exactly when its label is.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Identifier {
	label: Label,
}

impl Identifier {
	/// Absent identifier.
	pub fn none() -> Self {
		Self::default()
	}

	pub fn new(label: Label) -> Self {
		Self { label }
	}

	/// Parses a blank node identifier.
	///
	/// Errors from the label are returned as is.
	pub fn parse(value: &str) -> Result<Self, Error> {
		if value.is_empty() {
			return Err(Error::EmptyInput);
		}

		match value.strip_prefix(PREFIX) {
			Some(label) => Ok(Self::new(Label::parse(label)?)),
			None => {
				log::trace!("blank node identifier {value:?} has no prefix");
				Err(Error::PrefixNotFound(value.to_owned()))
			}
		}
	}

	/// Parses a blank node identifier from UTF-8 bytes.
	pub fn parse_bytes(value: &[u8]) -> Result<Self, Error> {
		Self::parse(std::str::from_utf8(value).map_err(Error::InvalidUtf8)?)
	}

	/// Returns the label, unless absent.
	pub fn label(&self) -> Option<&Label> {
		if self.label.is_none() {
			None
		} else {
			Some(&self.label)
		}
	}

	pub fn into_label(self) -> Label {
		self.label
	}

	/// Returns the full identifier, prefix included, unless absent.
	pub fn get(&self) -> Option<String> {
		self.label.get().map(|label| format!("{PREFIX}{label}"))
	}

	pub fn is_none(&self) -> bool {
		self.label.is_none()
	}

	pub fn is_some(&self) -> bool {
		self.label.is_some()
	}

	/// Text form of the identifier.
	///
	/// An absent identifier is an error, not a lone `_:`.
	pub fn to_text(&self) -> Result<String, Error> {
		self.get().ok_or(Error::EmptyIdentifier)
	}

	/// Parses `text` into `self`.
	///
	/// On error, `self` is left untouched.
	pub fn decode_text(&mut self, text: &[u8]) -> Result<(), Error> {
		*self = Self::parse_bytes(text)?;
		Ok(())
	}
}

impl fmt::Display for Identifier {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{PREFIX}{}", self.label)
	}
}

impl From<Label> for Identifier {
	fn from(label: Label) -> Self {
		Self::new(label)
	}
}

impl FromStr for Identifier {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Error> {
		Self::parse(s)
	}
}

impl<'a> TryFrom<&'a str> for Identifier {
	type Error = Error;

	fn try_from(value: &'a str) -> Result<Self, Error> {
		Self::parse(value)
	}
}

impl<'a> TryFrom<&'a [u8]> for Identifier {
	type Error = Error;

	fn try_from(value: &'a [u8]) -> Result<Self, Error> {
		Self::parse_bytes(value)
	}
}

impl TryFrom<String> for Identifier {
	type Error = Error;

	fn try_from(value: String) -> Result<Self, Error> {
		Self::parse(&value)
	}
}

impl<'a> TryFrom<&'a BlankId> for Identifier {
	type Error = Error;

	fn try_from(id: &'a BlankId) -> Result<Self, Error> {
		Self::parse(id.as_str())
	}
}

impl TryFrom<Identifier> for BlankIdBuf {
	type Error = Error;

	fn try_from(id: Identifier) -> Result<Self, Error> {
		let id = id.to_text()?;
		// Labels are a subset of the N-Quads `BLANK_NODE_LABEL` production.
		Ok(unsafe { BlankIdBuf::new_unchecked(id) })
	}
}

/// Parses a blank node identifier.
pub fn parse_identifier(value: &str) -> Result<Identifier, Error> {
	Identifier::parse(value)
}
