//! Boundary scanning over a fully buffered multipart body.
//!
//! The body is split on literal occurrences of the delimiter. Each fragment
//! between two delimiters is one candidate part: a header block, a blank
//! line, then the payload. The delimiter followed by `--` closes the stream.

use crate::params::find_subslice;
use crate::UploadParseError;

const CRLF: &[u8] = b"\r\n";
const HEADER_END: &[u8] = b"\r\n\r\n";

/// Per-part headers in encounter order. Lookups ignore ASCII case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartHeaders {
    entries: Vec<(String, String)>,
}

impl PartHeaders {
    /// Parse a raw header block, one `Name: value` per line.
    /// Lines without a colon are ignored.
    pub fn parse(block: &[u8]) -> Self {
        let text = String::from_utf8_lossy(block);
        let entries = text
            .lines()
            .filter_map(|line| line.split_once(':'))
            .map(|(name, value)| (name.trim().to_string(), value.trim().to_string()))
            .filter(|(name, _)| !name.is_empty())
            .collect();
        Self { entries }
    }

    /// First value recorded for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One boundary-delimited segment. The payload borrows from the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part<'a> {
    pub headers: PartHeaders,
    pub payload: &'a [u8],
}

/// Split `body` into parts delimited by `delimiter`.
///
/// Bytes before the first delimiter and after the closing `delimiter--` are
/// ignored. Fragments without a header/payload separator are skipped. A body
/// that stops inside a part (no closing marker, non-blank trailing bytes)
/// fails with [`UploadParseError::TruncatedPart`].
pub fn scan_parts<'a>(body: &'a [u8], delimiter: &[u8]) -> Result<Vec<Part<'a>>, UploadParseError> {
    if delimiter.is_empty() {
        return Err(UploadParseError::MissingBoundary);
    }

    let mut parts = Vec::new();
    let Some(first) = find_subslice(body, delimiter) else {
        return Ok(parts);
    };

    let mut cursor = first + delimiter.len();
    loop {
        let rest = &body[cursor..];
        if rest.starts_with(b"--") {
            return Ok(parts);
        }
        match find_subslice(rest, delimiter) {
            Some(next) => {
                if let Some(part) = split_fragment(&rest[..next]) {
                    parts.push(part);
                }
                cursor += next + delimiter.len();
            }
            None if is_blank(rest) => return Ok(parts),
            None => return Err(UploadParseError::TruncatedPart),
        }
    }
}

/// Separate one fragment into headers and payload.
fn split_fragment(fragment: &[u8]) -> Option<Part<'_>> {
    let fragment = fragment.strip_prefix(CRLF).unwrap_or(fragment);

    // A part with no headers starts directly with the blank line.
    let (header_block, payload) = if let Some(payload) = fragment.strip_prefix(CRLF) {
        (&fragment[..0], payload)
    } else {
        let sep = find_subslice(fragment, HEADER_END)?;
        (&fragment[..sep], &fragment[sep + HEADER_END.len()..])
    };

    let payload = payload.strip_suffix(CRLF).unwrap_or(payload);
    Some(Part {
        headers: PartHeaders::parse(header_block),
        payload,
    })
}

fn is_blank(bytes: &[u8]) -> bool {
    bytes.iter().all(|b| matches!(b, b'\r' | b'\n' | b' ' | b'\t'))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELIM: &[u8] = b"--XyZ";

    #[test]
    fn test_single_part() {
        let body = b"--XyZ\r\nContent-Disposition: form-data; name=\"file\"\r\n\r\nhello\r\n--XyZ--\r\n";
        let parts = scan_parts(body, DELIM).unwrap();
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].payload, b"hello");
        assert_eq!(
            parts[0].headers.get("content-disposition"),
            Some("form-data; name=\"file\"")
        );
    }

    #[test]
    fn test_payload_keeps_inner_crlf() {
        let body = b"--XyZ\r\nContent-Type: text/csv\r\n\r\na,b\r\n1,2\r\n\r\n--XyZ--";
        let parts = scan_parts(body, DELIM).unwrap();
        assert_eq!(parts[0].payload, b"a,b\r\n1,2\r\n");
    }

    #[test]
    fn test_binary_payload() {
        let payload: Vec<u8> = (0u8..=255).collect();
        let mut body = b"--XyZ\r\nContent-Type: application/octet-stream\r\n\r\n".to_vec();
        body.extend_from_slice(&payload);
        body.extend_from_slice(b"\r\n--XyZ--\r\n");
        let parts = scan_parts(&body, DELIM).unwrap();
        assert_eq!(parts[0].payload, payload.as_slice());
    }

    #[test]
    fn test_empty_body() {
        assert!(scan_parts(b"", DELIM).unwrap().is_empty());
    }

    #[test]
    fn test_body_without_delimiter() {
        assert!(scan_parts(b"just some bytes", DELIM).unwrap().is_empty());
    }

    #[test]
    fn test_preamble_and_epilogue_ignored() {
        let body = b"preamble\r\n--XyZ\r\nA: 1\r\n\r\nx\r\n--XyZ--\r\nepilogue --XyZ\r\nB: 2\r\n\r\ny";
        let parts = scan_parts(body, DELIM).unwrap();
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].headers.get("a"), Some("1"));
    }

    #[test]
    fn test_fragment_without_separator_is_skipped() {
        let body = b"--XyZ\r\nno separator here\r\n--XyZ\r\nA: 1\r\n\r\nok\r\n--XyZ--";
        let parts = scan_parts(body, DELIM).unwrap();
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].payload, b"ok");
    }

    #[test]
    fn test_headerless_part() {
        let body = b"--XyZ\r\n\r\nbare\r\n--XyZ--";
        let parts = scan_parts(body, DELIM).unwrap();
        assert_eq!(parts.len(), 1);
        assert!(parts[0].headers.is_empty());
        assert_eq!(parts[0].payload, b"bare");
    }

    #[test]
    fn test_empty_payload() {
        let body = b"--XyZ\r\nA: 1\r\n\r\n\r\n--XyZ--";
        let parts = scan_parts(body, DELIM).unwrap();
        assert_eq!(parts[0].payload, b"");
    }

    #[test]
    fn test_truncated_part() {
        let body = b"--XyZ\r\nA: 1\r\n\r\nhalf a fi";
        assert_eq!(scan_parts(body, DELIM), Err(UploadParseError::TruncatedPart));
    }

    #[test]
    fn test_missing_closing_marker_with_blank_tail() {
        let body = b"--XyZ\r\nA: 1\r\n\r\nx\r\n--XyZ\r\n";
        let parts = scan_parts(body, DELIM).unwrap();
        assert_eq!(parts.len(), 1);
    }

    #[test]
    fn test_delimiter_matched_literally() {
        let delim = b"--a.b*c";
        let body = b"--a.b*c\r\nA: 1\r\n\r\nx\r\n--aXbbc\r\n--a.b*c--";
        let parts = scan_parts(body, delim).unwrap();
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].payload, b"x\r\n--aXbbc");
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let headers = PartHeaders::parse(b"CONTENT-TYPE: text/csv\r\ngarbage line\r\nX-A:1:2");
        assert_eq!(headers.len(), 2);
        assert_eq!(headers.get("content-type"), Some("text/csv"));
        assert_eq!(headers.get("x-a"), Some("1:2"));
        assert_eq!(headers.get("missing"), None);
    }

    #[test]
    fn test_empty_delimiter_rejected() {
        assert_eq!(scan_parts(b"abc", b""), Err(UploadParseError::MissingBoundary));
    }
}
