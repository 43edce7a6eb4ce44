use locspan::Span;
use std::{fmt, str::Utf8Error};

/// Error kind.
///
/// Identifies the rule that failed, regardless of the input.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ErrorKind {
	EmptyInput,
	PrefixNotFound,
	FirstCharacterNotAllowed,
	LastCharacterNotAllowed,
	CharacterNotAllowed,
	InvalidUtf8,
	EmptyLabel,
	EmptyIdentifier,
}

/// Rejected character.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct InvalidChar {
	/// Label being parsed.
	pub value: String,

	/// Offending character.
	pub character: char,

	/// 1-based position of the character, counted in characters.
	pub position: usize,

	/// Byte span of the character in `value`.
	pub span: Span,
}

impl InvalidChar {
	pub(crate) fn new(value: &str, character: char, position: usize, span: Span) -> Self {
		Self {
			value: value.to_owned(),
			character,
			position,
			span,
		}
	}
}

/// Parsing or serialization error.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Error {
	/// The input is the empty string.
	EmptyInput,

	/// The input does not start with `_:`.
	PrefixNotFound(String),

	/// The label starts with a character only allowed after the first position.
	FirstCharacterNotAllowed(InvalidChar),

	/// The label ends with `.`.
	LastCharacterNotAllowed(InvalidChar),

	/// The label contains a character outside of the grammar.
	CharacterNotAllowed(InvalidChar),

	/// The input bytes are not UTF-8.
	InvalidUtf8(Utf8Error),

	/// An absent label cannot be written as text.
	EmptyLabel,

	/// An absent identifier cannot be written as text.
	EmptyIdentifier,
}

impl Error {
	pub fn kind(&self) -> ErrorKind {
		match self {
			Self::EmptyInput => ErrorKind::EmptyInput,
			Self::PrefixNotFound(_) => ErrorKind::PrefixNotFound,
			Self::FirstCharacterNotAllowed(_) => ErrorKind::FirstCharacterNotAllowed,
			Self::LastCharacterNotAllowed(_) => ErrorKind::LastCharacterNotAllowed,
			Self::CharacterNotAllowed(_) => ErrorKind::CharacterNotAllowed,
			Self::InvalidUtf8(_) => ErrorKind::InvalidUtf8,
			Self::EmptyLabel => ErrorKind::EmptyLabel,
			Self::EmptyIdentifier => ErrorKind::EmptyIdentifier,
		}
	}

	/// Returns the rejected character, if any.
	pub fn invalid_char(&self) -> Option<&InvalidChar> {
		match self {
			Self::FirstCharacterNotAllowed(c)
			| Self::LastCharacterNotAllowed(c)
			| Self::CharacterNotAllowed(c) => Some(c),
			_ => None,
		}
	}

	/// Byte span of the rejected character, if any.
	pub fn span(&self) -> Option<Span> {
		self.invalid_char().map(|c| c.span)
	}
}

impl PartialEq<ErrorKind> for Error {
	fn eq(&self, kind: &ErrorKind) -> bool {
		self.kind() == *kind
	}
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::EmptyInput => write!(f, "empty string"),
			Self::PrefixNotFound(value) => {
				write!(
					f,
					"blank-node-identifier prefix (\"_:\") not found in {value:?}"
				)
			}
			Self::FirstCharacterNotAllowed(c) => write!(
				f,
				"failed to parse blank-node-label {:?} due to first character {}: blank-node-label first character not allowed",
				c.value,
				DisplayChar(c.character)
			),
			Self::LastCharacterNotAllowed(c) => write!(
				f,
				"failed to parse blank-node-label {:?} due to last character {}: blank-node-label last character not allowed",
				c.value,
				DisplayChar(c.character)
			),
			Self::CharacterNotAllowed(c) => write!(
				f,
				"failed to parse blank-node-label {:?} due to {} character {}: blank-node-label character not allowed",
				c.value,
				Ordinal(c.position),
				DisplayChar(c.character)
			),
			Self::InvalidUtf8(e) => write!(f, "invalid UTF-8: {e}"),
			Self::EmptyLabel => write!(f, "empty blank-node-label"),
			Self::EmptyIdentifier => write!(f, "empty blank-node-identifier"),
		}
	}
}

impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::InvalidUtf8(e) => Some(e),
			_ => None,
		}
	}
}

/// Displays a character quoted, followed by its code point (`'$' (U+0024)`).
pub struct DisplayChar(pub char);

impl fmt::Display for DisplayChar {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{:?} (U+{:04X})", self.0, self.0 as u32)
	}
}

/// Displays an English ordinal number (`1st`, `2nd`, `3rd`, `4th`, `11th`...).
pub struct Ordinal(pub usize);

impl fmt::Display for Ordinal {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		let suffix = match (self.0 % 10, self.0 % 100) {
			(_, 11..=13) => "th",
			(1, _) => "st",
			(2, _) => "nd",
			(3, _) => "rd",
			_ => "th",
		};

		write!(f, "{}{suffix}", self.0)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn ordinals() {
		let cases = [
			(1, "1st"),
			(2, "2nd"),
			(3, "3rd"),
			(4, "4th"),
			(10, "10th"),
			(11, "11th"),
			(12, "12th"),
			(13, "13th"),
			(21, "21st"),
			(102, "102nd"),
			(111, "111th"),
		];

		for (n, expected) in cases {
			assert_eq!(Ordinal(n).to_string(), expected)
		}
	}

	#[test]
	fn display_char() {
		assert_eq!(DisplayChar('$').to_string(), "'$' (U+0024)");
		assert_eq!(DisplayChar('\u{1f600}').to_string(), "'\u{1f600}' (U+1F600)")
	}
}
