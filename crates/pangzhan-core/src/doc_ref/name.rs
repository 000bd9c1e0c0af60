//! Display-name derivation for a single URL candidate.

/// Placeholder name when a candidate has no usable last segment.
pub const UNKNOWN_FILE_NAME: &str = "unknown file";

/// Derives a display name for `candidate`.
///
/// Strictly parseable URLs use their last path segment, percent-decoded.
/// Anything else uses the text after the last `/` (or the whole candidate).
/// An empty result becomes `placeholder`.
pub fn file_name_from_candidate(candidate: &str, placeholder: &str) -> String {
    let name = match url::Url::parse(candidate) {
        Ok(parsed) => {
            let segment = parsed.path().rsplit('/').next().unwrap_or("");
            percent_decode(segment)
        }
        Err(_) => candidate.rsplit('/').next().unwrap_or(candidate).to_string(),
    };
    if name.is_empty() {
        placeholder.to_string()
    } else {
        name
    }
}

/// True if `candidate` parses as an absolute URL.
pub fn is_valid_url(candidate: &str) -> bool {
    url::Url::parse(candidate).is_ok()
}

/// Returns `name` without its last `.extension`; unchanged if it has no dot.
pub fn file_stem(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) => &name[..idx],
        None => name,
    }
}

/// Lenient percent-decode. Invalid escapes are kept as-is and invalid UTF-8
/// is replaced rather than rejected.
pub(crate) fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(high), Some(low)) = (hex_digit(bytes[i + 1]), hex_digit(bytes[i + 2])) {
                out.push(high << 4 | low);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
