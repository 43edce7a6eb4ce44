//! Character classes of the blank node label grammar.
//!
//! From RDF 1.1 Turtle (<https://www.w3.org/TR/turtle/#BNodes>):
//!
//! > The characters in the label are built upon PN_CHARS_BASE, liberalized as follows:
//! > - The characters _ and digits may appear anywhere in a blank node label.
//! > - The character . may appear anywhere except the first or last character.
//! > - The characters -, U+00B7, U+0300 to U+036F and U+203F to U+2040 are
//! >   permitted anywhere except the first character.

/// Checks if a character is in `PN_CHARS_BASE`.
///
/// ```text
/// PN_CHARS_BASE ::= [A-Z] | [a-z] | [#x00C0-#x00D6] | [#x00D8-#x00F6]
///                 | [#x00F8-#x02FF] | [#x0370-#x037D] | [#x037F-#x1FFF]
///                 | [#x200C-#x200D] | [#x2070-#x218F] | [#x2C00-#x2FEF]
///                 | [#x3001-#xD7FF] | [#xF900-#xFDCF] | [#xFDF0-#xFFFD]
///                 | [#x10000-#xEFFFF]
/// ```
pub fn is_pn_chars_base(c: char) -> bool {
	matches!(c, 'A'..='Z' | 'a'..='z' | '\u{00c0}'..='\u{00d6}' | '\u{00d8}'..='\u{00f6}' | '\u{00f8}'..='\u{02ff}' | '\u{0370}'..='\u{037d}' | '\u{037f}'..='\u{1fff}' | '\u{200c}'..='\u{200d}' | '\u{2070}'..='\u{218f}' | '\u{2c00}'..='\u{2fef}' | '\u{3001}'..='\u{d7ff}' | '\u{f900}'..='\u{fdcf}' | '\u{fdf0}'..='\u{fffd}' | '\u{10000}'..='\u{effff}')
}

/// Characters that may not start a label.
///
/// Of these, only `.` is also forbidden as the last character.
pub fn is_positional_only(c: char) -> bool {
	matches!(
		c,
		'.' | '-' | '\u{00b7}' | '\u{0300}'..='\u{036f}' | '\u{203f}'..='\u{2040}'
	)
}

/// Characters allowed anywhere in a label, position rules aside.
pub fn is_label_anywhere(c: char) -> bool {
	c == '_' || c.is_ascii_digit() || is_positional_only(c)
}

/// Checks if a character may appear in a label at all.
///
/// Digits are accepted everywhere, including as the first character.
pub fn is_label_char(c: char) -> bool {
	is_label_anywhere(c) || is_pn_chars_base(c)
}
