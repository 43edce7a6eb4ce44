use crate::{
	chars::{is_label_char, is_positional_only},
	Error, InvalidChar,
};
use decoded_char::DecodedChar;
use locspan::Span;
use std::{fmt, str::FromStr};

/// Blank node label.
///
/// The part of a blank node identifier after the `_:` prefix.
/// For each of the identifiers
///
/// ```text
/// _:b0
/// _:address84
/// _:ed7ba470-8e54-465e-825c-99712043e01c
/// ```
///
/// the labels are `b0`, `address84` and `ed7ba470-8e54-465e-825c-99712043e01c`.
///
/// A `Label` may be absent ([`Label::none`]), which is distinct from the empty
/// string: the empty string is never a valid label.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Label(Option<String>);

impl Label {
	/// Absent label.
	pub fn none() -> Self {
		Self(None)
	}

	/// Wraps a string that has already been validated.
	pub(crate) fn new_unchecked(value: String) -> Self {
		Self(Some(value))
	}

	/// Validates and wraps the given string without copying it.
	pub fn new(value: String) -> Result<Self, Error> {
		validate(&value)?;
		Ok(Self::new_unchecked(value))
	}

	/// Parses a blank node label.
	///
	/// Follows the RDF 1.1 Turtle definition, based on `PN_CHARS_BASE`,
	/// liberalized so that `_` and digits may appear anywhere,
	/// `.` anywhere except the first or last character,
	/// and `-`, U+00B7, U+0300 to U+036F and U+203F to U+2040 anywhere
	/// except the first character.
	///
	/// `PN_CHARS_BASE` does not include digits. They are accepted as well.
	pub fn parse(value: &str) -> Result<Self, Error> {
		validate(value)?;
		Ok(Self::new_unchecked(value.to_owned()))
	}

	/// Parses a blank node label from UTF-8 bytes.
	pub fn parse_bytes(value: &[u8]) -> Result<Self, Error> {
		Self::parse(std::str::from_utf8(value).map_err(Error::InvalidUtf8)?)
	}

	pub fn get(&self) -> Option<&str> {
		self.0.as_deref()
	}

	pub fn is_none(&self) -> bool {
		self.0.is_none()
	}

	pub fn is_some(&self) -> bool {
		self.0.is_some()
	}

	pub fn into_inner(self) -> Option<String> {
		self.0
	}

	/// Text form of the label.
	///
	/// Unlike [`Display`](fmt::Display), fails on an absent label.
	pub fn to_text(&self) -> Result<&str, Error> {
		self.get().ok_or(Error::EmptyLabel)
	}

	/// Parses `text` into `self`.
	///
	/// On error, `self` is left untouched.
	pub fn decode_text(&mut self, text: &[u8]) -> Result<(), Error> {
		*self = Self::parse_bytes(text)?;
		Ok(())
	}
}

impl fmt::Display for Label {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.write_str(self.get().unwrap_or_default())
	}
}

impl FromStr for Label {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Error> {
		Self::parse(s)
	}
}

impl<'a> TryFrom<&'a str> for Label {
	type Error = Error;

	fn try_from(value: &'a str) -> Result<Self, Error> {
		Self::parse(value)
	}
}

impl<'a> TryFrom<&'a [u8]> for Label {
	type Error = Error;

	fn try_from(value: &'a [u8]) -> Result<Self, Error> {
		Self::parse_bytes(value)
	}
}

impl TryFrom<String> for Label {
	type Error = Error;

	fn try_from(value: String) -> Result<Self, Error> {
		Self::new(value)
	}
}

impl From<Label> for Option<String> {
	fn from(label: Label) -> Self {
		label.0
	}
}

/// Parses a blank node label.
pub fn parse_label(value: &str) -> Result<Label, Error> {
	Label::parse(value)
}

/// Checks that `value` is a blank node label.
///
/// The first and last characters are checked for their positional rules
/// before the whole label is scanned.
pub(crate) fn validate(value: &str) -> Result<(), Error> {
	let first = value.chars().next().ok_or(Error::EmptyInput)?;
	if is_positional_only(first) {
		log::trace!("blank node label {value:?} starts with {first:?}");
		return Err(Error::FirstCharacterNotAllowed(InvalidChar::new(
			value,
			first,
			1,
			Span::new(0, first.len_utf8()),
		)));
	}

	if let Some(last) = value.chars().next_back() {
		if last == '.' {
			log::trace!("blank node label {value:?} ends with {last:?}");
			return Err(Error::LastCharacterNotAllowed(InvalidChar::new(
				value,
				last,
				value.chars().count(),
				Span::new(value.len() - last.len_utf8(), value.len()),
			)));
		}
	}

	let mut pos = Position::default();
	for c in value.chars().map(|c| DecodedChar::new(c, c.len_utf8())) {
		pos.push(c);
		if !is_label_char(*c) {
			log::trace!(
				"blank node label {value:?} contains {:?} at {}",
				*c,
				pos.index
			);
			return Err(Error::CharacterNotAllowed(InvalidChar::new(
				value,
				c.into_char(),
				pos.index,
				pos.last,
			)));
		}
	}

	Ok(())
}

/// Scan position.
#[derive(Default)]
struct Position {
	/// 1-based index of the last character.
	index: usize,

	/// Byte span of the last character.
	last: Span,
}

impl Position {
	fn push(&mut self, c: DecodedChar) {
		let start = self.last.end;
		self.index += 1;
		self.last = Span::new(start, start + c.len());
	}
}
