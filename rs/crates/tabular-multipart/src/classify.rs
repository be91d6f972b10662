use crate::params::{percent_decode, split_params, unquote};
use crate::scan::Part;

/// The filename a part declares in its `Content-Disposition` header, if any.
///
/// A part without that header, or whose `filename` is absent or empty, is an
/// ordinary form field and yields `None`. An extended `filename*` parameter
/// wins over plain `filename`.
pub fn file_name(part: &Part<'_>) -> Option<String> {
    let disposition = part.headers.get("content-disposition")?;

    let mut plain = None;
    let mut extended = None;
    // first segment is the disposition type (`form-data`)
    for param in split_params(disposition).into_iter().skip(1) {
        let Some((key, value)) = param.split_once('=') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim();
        if key.eq_ignore_ascii_case("filename*") {
            if extended.is_none() {
                extended = decode_extended(value);
            }
        } else if key.eq_ignore_ascii_case("filename") && plain.is_none() {
            plain = Some(unquote(value));
        }
    }

    extended
        .filter(|name: &String| !name.is_empty())
        .or_else(|| plain.filter(|name| !name.is_empty()))
}

/// Decode an RFC 5987 value: `charset'language'percent-encoded`.
fn decode_extended(value: &str) -> Option<String> {
    let value = unquote(value);
    let mut fields = value.splitn(3, '\'');
    let _charset = fields.next()?;
    let _language = fields.next()?;
    let encoded = fields.next()?;
    Some(String::from_utf8_lossy(&percent_decode(encoded)).into_owned())
}

/// Whether the part is the uploaded file rather than a form field.
pub fn is_file_part(part: &Part<'_>) -> bool {
    file_name(part).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::PartHeaders;

    fn part(headers: &str) -> Part<'static> {
        Part {
            headers: PartHeaders::parse(headers.as_bytes()),
            payload: b"",
        }
    }

    #[test]
    fn test_file_part() {
        let p = part("Content-Disposition: form-data; name=\"file\"; filename=\"data.csv\"");
        assert_eq!(file_name(&p).as_deref(), Some("data.csv"));
        assert!(is_file_part(&p));
    }

    #[test]
    fn test_plain_field() {
        let p = part("Content-Disposition: form-data; name=\"note\"");
        assert_eq!(file_name(&p), None);
        assert!(!is_file_part(&p));
    }

    #[test]
    fn test_missing_disposition() {
        let p = part("Content-Type: text/csv");
        assert_eq!(file_name(&p), None);
    }

    #[test]
    fn test_empty_filename_is_not_a_file() {
        let p = part("Content-Disposition: form-data; name=\"file\"; filename=\"\"");
        assert_eq!(file_name(&p), None);
    }

    #[test]
    fn test_case_insensitive_header_and_param() {
        let p = part("content-DISPOSITION: form-data; FileName=report.xlsx");
        assert_eq!(file_name(&p).as_deref(), Some("report.xlsx"));
    }

    #[test]
    fn test_quoted_semicolon_in_filename() {
        let p = part("Content-Disposition: form-data; name=\"f\"; filename=\"a;b.csv\"");
        assert_eq!(file_name(&p).as_deref(), Some("a;b.csv"));
    }

    #[test]
    fn test_name_param_not_mistaken_for_filename() {
        let p = part("Content-Disposition: form-data; name=\"filename\"");
        assert_eq!(file_name(&p), None);
    }

    #[test]
    fn test_extended_filename_wins() {
        let p = part(
            "Content-Disposition: form-data; name=\"f\"; filename=\"fallback.csv\"; filename*=UTF-8''r%C3%A9sum%C3%A9.csv",
        );
        assert_eq!(file_name(&p).as_deref(), Some("résumé.csv"));
    }

    #[test]
    fn test_malformed_extended_falls_back() {
        let p = part(
            "Content-Disposition: form-data; filename*=nonsense; filename=\"plain.csv\"",
        );
        assert_eq!(file_name(&p).as_deref(), Some("plain.csv"));
    }
}
