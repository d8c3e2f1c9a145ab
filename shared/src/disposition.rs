//! `Content-Disposition` filename extraction.

use tracing::debug;

use crate::config::DEFAULT_REPORT_FILENAME;

/// Filename named by a `Content-Disposition` header, if any.
///
/// `filename*` (RFC 5987, percent-encoded) wins over `filename`. Quoted
/// values are unquoted. Empty names count as absent.
pub fn parse_content_disposition_filename(header: &str) -> Option<String> {
    let mut plain = None;
    let mut extended = None;

    for param in split_params(header) {
        let Some((name, value)) = param.split_once('=') else {
            continue;
        };
        match name.trim().to_ascii_lowercase().as_str() {
            "filename*" => extended = decode_ext_value(value.trim()),
            "filename" => plain = Some(unquote(value.trim())),
            _ => {}
        }
    }

    let usable = |name: &String| !name.trim().is_empty();
    extended.filter(usable).or(plain.filter(usable))
}

/// Filename to save a report under, falling back to the default
pub fn report_filename(content_disposition: Option<&str>) -> String {
    match content_disposition.and_then(parse_content_disposition_filename) {
        Some(name) => name,
        None => {
            debug!(?content_disposition, "no usable filename, using default");
            DEFAULT_REPORT_FILENAME.to_string()
        }
    }
}

/// Split on `;` outside double quotes
fn split_params(header: &str) -> Vec<&str> {
    let mut params = Vec::new();
    let mut in_quotes = false;
    let mut escaped = false;
    let mut start = 0;

    for (i, c) in header.char_indices() {
        match c {
            _ if escaped => escaped = false,
            '\\' if in_quotes => escaped = true,
            '"' => in_quotes = !in_quotes,
            ';' if !in_quotes => {
                params.push(&header[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    params.push(&header[start..]);
    params
}

fn unquote(value: &str) -> String {
    let Some(inner) = value
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    else {
        return value.to_string();
    };

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// `charset'language'percent-encoded`
fn decode_ext_value(value: &str) -> Option<String> {
    let mut parts = value.splitn(3, '\'');
    let charset = parts.next()?;
    let _language = parts.next()?;
    let encoded = parts.next()?;

    if charset.eq_ignore_ascii_case("utf-8") {
        urlencoding::decode(encoded).ok().map(|name| name.into_owned())
    } else if charset.eq_ignore_ascii_case("iso-8859-1") {
        let bytes = urlencoding::decode_binary(encoded.as_bytes());
        Some(bytes.iter().map(|&b| b as char).collect())
    } else {
        None
    }
}
