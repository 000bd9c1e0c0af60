//! Candidate decoding: JSON array of strings, or comma-separated list.

use serde::Serialize;
use serde_json::Value;

/// Which decoding strategy was applied to a stored `document_urls` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Encoding {
    /// Missing, empty, or whitespace-only input.
    Empty,
    /// Input decoded as a JSON array.
    JsonArray,
    /// Input split on commas (not JSON, or JSON that is not an array).
    CommaSeparated,
}

/// Result of decoding a raw value into URL candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidates {
    pub encoding: Encoding,
    pub urls: Vec<String>,
    /// JSON array elements skipped because they were not strings.
    pub dropped: usize,
}

/// Splits a raw stored value into URL candidates, preserving order.
///
/// Exactly one strategy applies per input. A JSON value that is not an array
/// (bare string, number, object) is comma-split like any other text.
pub fn decode_candidates(raw: Option<&str>) -> Candidates {
    let raw = match raw {
        Some(r) if !r.trim().is_empty() => r,
        _ => {
            return Candidates {
                encoding: Encoding::Empty,
                urls: Vec::new(),
                dropped: 0,
            }
        }
    };

    if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(raw) {
        let total = items.len();
        let urls: Vec<String> = items
            .into_iter()
            .filter_map(|v| match v {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect();
        let dropped = total - urls.len();
        if dropped > 0 {
            tracing::debug!(dropped, "skipped non-string document_urls elements");
        }
        return Candidates {
            encoding: Encoding::JsonArray,
            urls,
            dropped,
        };
    }

    Candidates {
        encoding: Encoding::CommaSeparated,
        urls: split_comma_list(raw),
        dropped: 0,
    }
}

fn split_comma_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
