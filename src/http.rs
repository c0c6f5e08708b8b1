/*!
HTTP helpers for the shell server: tolerant request-head parsing, endpoint classification and
response writing.

Only the request head is read (GET has no body here). Headers end at CRLFCRLF or LFLF and are
capped at 64 KiB.
*/

use std::collections::HashMap;
use std::io::{self, Read, Write};

use crate::util::{find_header_end, parse_form_urlencoded};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    Get,
    Head,
    Other(String),
}

/// Endpoints the shell server recognizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Shell,
    ModulesApi,
    Health,
}

/// Simple case-insensitive header map (keys lowercased)
pub type HeaderMap = HashMap<String, String>;

#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: HeaderMap,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(|s| s.as_str())
    }
}

/// Read and parse one request head. Returns InvalidData when the request line is unusable.
pub fn read_http_request<R: Read>(reader: &mut R) -> io::Result<HttpRequest> {
    const HDR_CAP: usize = 64 * 1024;
    let mut buf = Vec::new();
    let mut tmp = [0u8; 1024];
    let mut header_end: Option<usize> = None;

    while header_end.is_none() && buf.len() < HDR_CAP {
        let n = reader.read(&mut tmp)?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&tmp[..n]);
        header_end = find_header_end(&buf);
    }

    let end = header_end.unwrap_or(buf.len()).min(buf.len());
    let header_str = String::from_utf8_lossy(&buf[..end]);
    let mut lines = header_str.lines();
    let request_line = lines.next().unwrap_or_default().trim().to_string();
    let (method, path, query) = parse_request_line(&request_line).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("malformed request line: {request_line:?}"),
        )
    })?;
    let headers = parse_headers(lines);

    Ok(HttpRequest {
        method,
        path,
        query,
        headers,
    })
}

fn parse_headers<'a, I: Iterator<Item = &'a str>>(lines: I) -> HeaderMap {
    let mut map = HeaderMap::new();
    for line in lines {
        if let Some((k, v)) = line.split_once(':') {
            map.insert(k.trim().to_ascii_lowercase(), v.trim().to_string());
        }
    }
    map
}

fn parse_request_line(request_line: &str) -> Option<(Method, String, Vec<(String, String)>)> {
    let mut parts = request_line.split_whitespace();
    let method = match parts.next()?.to_ascii_uppercase().as_str() {
        "GET" => Method::Get,
        "HEAD" => Method::Head,
        other => Method::Other(other.to_string()),
    };
    let target = parts.next()?;
    let version = parts.next()?;
    if !version.starts_with("HTTP/") || !target.starts_with('/') {
        return None;
    }
    let (path, query) = match target.split_once('?') {
        Some((p, q)) => (p, parse_form_urlencoded(q)),
        None => (target, Vec::new()),
    };
    Some((method, path.to_ascii_lowercase(), query))
}

/// Classify a lowercased path into a known endpoint.
pub fn classify_endpoint(path: &str) -> Option<Endpoint> {
    match path {
        "/" | "/index.html" => Some(Endpoint::Shell),
        "/api/modules" => Some(Endpoint::ModulesApi),
        "/healthz" => Some(Endpoint::Health),
        _ => None,
    }
}

/// Write a complete response and close semantics (`Connection: close`).
/// For HEAD requests pass `include_body = false`; Content-Length still reflects the body.
pub fn respond<W: Write>(
    w: &mut W,
    status: &str,
    content_type: &str,
    body: &[u8],
    include_body: bool,
) -> io::Result<()> {
    let header = format!(
        "HTTP/1.1 {status}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nCache-Control: no-store\r\nConnection: close\r\n\r\n",
        body.len()
    );
    w.write_all(header.as_bytes())?;
    if include_body {
        w.write_all(body)?;
    }
    w.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_request_with_query_and_headers() {
        let raw = b"GET /?module=tagger&surface=admin HTTP/1.1\r\nHost: console.test:8080\r\nX-Thing: a\r\n\r\n";
        let req = read_http_request(&mut &raw[..]).expect("parse");
        assert_eq!(req.method, Method::Get);
        assert_eq!(req.path, "/");
        assert_eq!(
            req.query,
            vec![
                ("module".to_string(), "tagger".to_string()),
                ("surface".to_string(), "admin".to_string()),
            ]
        );
        assert_eq!(req.header("Host"), Some("console.test:8080"));
        assert_eq!(req.header("x-thing"), Some("a"));
    }

    #[test]
    fn test_parse_request_lf_only_terminator() {
        let raw = b"HEAD /healthz HTTP/1.0\nHost: h\n\n";
        let req = read_http_request(&mut &raw[..]).expect("parse");
        assert_eq!(req.method, Method::Head);
        assert_eq!(classify_endpoint(&req.path), Some(Endpoint::Health));
    }

    #[test]
    fn test_malformed_request_line_is_invalid_data() {
        let raw = b"garbage\r\n\r\n";
        let err = read_http_request(&mut &raw[..]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_classify_endpoint_lowercased_paths() {
        assert_eq!(classify_endpoint("/"), Some(Endpoint::Shell));
        assert_eq!(classify_endpoint("/api/modules"), Some(Endpoint::ModulesApi));
        assert_eq!(classify_endpoint("/api/modules/"), None);
    }

    #[test]
    fn test_respond_head_omits_body() {
        let mut out = Vec::new();
        respond(&mut out, "200 OK", "text/plain; charset=utf-8", b"ok", false).unwrap();
        let s = String::from_utf8(out).unwrap();
        assert!(s.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(s.contains("Content-Length: 2\r\n"));
        assert!(s.ends_with("\r\n\r\n"));
    }
}
