use codespan_reporting::{
	diagnostic::{Diagnostic, Label as DiagnosticLabel},
	files::SimpleFile,
	term::{self, termcolor::NoColor},
};

fn render(input: &str) -> String {
	stderrlog::new().init().ok();
	let e = blank_node::parse_label(input).unwrap_err();
	let span = e.span().expect("character error");
	log::error!("parse error: {e}");

	let file = SimpleFile::new("label", input);
	let diagnostic = Diagnostic::error()
		.with_message(e.to_string())
		.with_labels(vec![DiagnosticLabel::primary((), span.start..span.end)
			.with_message(format!("{:?}", e.kind()))]);

	let mut writer = NoColor::new(Vec::new());
	term::emit(&mut writer, &term::Config::default(), &file, &diagnostic).unwrap();
	String::from_utf8(writer.into_inner()).unwrap()
}

#[test]
fn points_at_character() {
	let output = render("abc def");
	assert!(output.contains("4th character ' ' (U+0020)"));
	assert!(output.contains("CharacterNotAllowed"));
	assert!(output.contains("abc def"))
}

#[test]
fn points_at_last_character() {
	let output = render("né.");
	assert!(output.contains("last character '.' (U+002E)"));
	assert!(output.contains("LastCharacterNotAllowed"))
}
