use pulldown_cmark::{Event, Options, Parser};

/// Renders an article body. Bodies come from the seed dataset, not from readers, so raw html in
/// them is passed through as-is.
pub fn md_to_html(input: &str) -> String {
	// Soft breaks inside a paragraph should just be spaces, the bodies are wrapped for the
	// source file's sake and not for display
	let events = Parser::new_ext(input, Options::all())
		.map(|ev| match ev {
			Event::SoftBreak => Event::Text(" ".into()),
			e => e
		});

	let mut html = String::new();
	pulldown_cmark::html::push_html(&mut html, events);

	html
}
