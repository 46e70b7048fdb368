//! Small crate-local helpers.

/// HTML-escape a user-supplied string. Escapes the same character set the
/// original web layer escapes: `& < > " ' \` / \`.
pub(crate) fn escape_html(input: &str) -> String {
	let mut out = String::with_capacity(input.len());
	for ch in input.chars() {
		match ch {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			'\'' => out.push_str("&#x27;"),
			'`' => out.push_str("&#96;"),
			'/' => out.push_str("&#x2F;"),
			'\\' => out.push_str("&#x5C;"),
			_ => out.push(ch),
		}
	}
	out
}

/// Undo the slash escaping only. Route values must render a literal `/`
/// without the rest of the markup characters coming back.
pub(crate) fn restore_escaped_slashes(input: &str) -> String {
	input.replace("&#x2F;", "/")
}


// vim: ts=4
