#![allow(clippy::module_name_repetitions)]
//! Small utilities: HTML/attribute escaping, URL decoding, header parsing.

/// Escape text for HTML element content and double-quoted attribute values.
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 8);
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Decode one application/x-www-form-urlencoded component.
/// '+' becomes a space; invalid percent sequences leave the input as-is (best-effort).
pub fn url_decode(s: &str) -> String {
    let spaced = s.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(v) => v.into_owned(),
        Err(_) => spaced,
    }
}

/// Split a query string into decoded key/value pairs. Keys without '=' get an empty value.
pub fn parse_form_urlencoded(s: &str) -> Vec<(String, String)> {
    let mut out = Vec::new();
    for pair in s.split('&') {
        if pair.is_empty() {
            continue;
        }
        let mut it = pair.splitn(2, '=');
        let k = it.next().unwrap_or_default();
        let v = it.next().unwrap_or_default();
        out.push((url_decode(k), url_decode(v)));
    }
    out
}

pub fn find_crlfcrlf(buf: &[u8]) -> Option<usize> {
    if buf.len() < 4 {
        return None;
    }
    let pattern: &[u8; 4] = b"\r\n\r\n";
    buf.windows(4).position(|w| w == pattern)
}

/// Index just past the header terminator (CRLFCRLF, or LFLF for lenient clients).
pub fn find_header_end(buf: &[u8]) -> Option<usize> {
    if let Some(pos) = find_crlfcrlf(buf) {
        return Some(pos + 4);
    }
    buf.windows(2).position(|w| w == b"\n\n").map(|pos| pos + 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape_attribute_breakers() {
        assert_eq!(
            html_escape(r#"https://x.test/?a=1&b="2"<script>"#),
            "https://x.test/?a=1&amp;b=&quot;2&quot;&lt;script&gt;"
        );
        assert_eq!(html_escape("O'Reilly"), "O&#39;Reilly");
    }

    #[test]
    fn test_parse_form_urlencoded_decodes_and_keeps_empty() {
        let pairs = parse_form_urlencoded("module=tagger&surface=ad%6Din&flag&&x=a+b");
        assert_eq!(
            pairs,
            vec![
                ("module".to_string(), "tagger".to_string()),
                ("surface".to_string(), "admin".to_string()),
                ("flag".to_string(), String::new()),
                ("x".to_string(), "a b".to_string()),
            ]
        );
    }

    #[test]
    fn test_find_header_end_crlf_and_lf() {
        assert_eq!(find_header_end(b"GET / HTTP/1.1\r\n\r\nbody"), Some(18));
        assert_eq!(find_header_end(b"GET / HTTP/1.1\n\n"), Some(16));
        assert_eq!(find_header_end(b"GET / HTTP/1.1\r\n"), None);
    }
}
