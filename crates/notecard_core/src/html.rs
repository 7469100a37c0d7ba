//! Markup escaping for rendered note text.
//!
//! Escaping happens only at render time; stored and searched text stays raw.

/// Escapes `& < > " '` for use in element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Reverses [`escape_html`]. Only the five entities it emits are decoded;
/// any other `&` sequence is kept verbatim.
pub fn unescape_html(text: &str) -> String {
    const ENTITIES: [(&str, char); 5] = [
        ("&amp;", '&'),
        ("&lt;", '<'),
        ("&gt;", '>'),
        ("&quot;", '"'),
        ("&#039;", '\''),
    ];

    let mut decoded = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find('&') {
        decoded.push_str(&rest[..pos]);
        rest = &rest[pos..];
        match ENTITIES
            .iter()
            .find(|(entity, _)| rest.starts_with(entity))
        {
            Some((entity, ch)) => {
                decoded.push(*ch);
                rest = &rest[entity.len()..];
            }
            None => {
                decoded.push('&');
                rest = &rest[1..];
            }
        }
    }
    decoded.push_str(rest);
    decoded
}
