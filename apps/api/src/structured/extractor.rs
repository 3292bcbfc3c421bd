//! Response Extractor: recovers the JSON object buried in free-form model output.
//!
//! Strategies, in order:
//! 1. Fenced: strip a leading ```json / ``` marker and a trailing ``` marker.
//! 2. Strict: greedy `{ ... }` span from the first `{` to the last `}`.
//! 3. Tolerant scan: stream-parse one value from each top-level `{` in turn,
//!    ignoring whatever follows. Braces nested inside a candidate are never
//!    tried on their own, and a candidate cut off mid-object ends the scan.
//!
//! If nothing parses, the error is the parse failure of the strict span, or
//! `NoJsonObject` when the text has no brace-delimited span at all.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use thiserror::Error;

static BRACE_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\{.*\}").expect("brace span pattern is valid"));

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("No JSON object found in model output")]
    NoJsonObject,

    #[error("Model output is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Extracts and parses the JSON object contained in `raw`.
pub fn extract_json(raw: &str) -> Result<Value, ExtractionError> {
    if let Some(fenced) = strip_json_fences(raw) {
        if let Ok(value @ Value::Object(_)) = serde_json::from_str::<Value>(fenced) {
            return Ok(value);
        }
    }

    let span = BRACE_SPAN
        .find(raw)
        .ok_or(ExtractionError::NoJsonObject)?
        .as_str();

    let strict_error = match serde_json::from_str::<Value>(span) {
        Ok(value @ Value::Object(_)) => return Ok(value),
        Ok(_) => return Err(ExtractionError::NoJsonObject),
        Err(e) => e,
    };

    scan_for_object(raw).ok_or(ExtractionError::InvalidJson(strict_error))
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
/// Returns `None` when the text is not fenced.
fn strip_json_fences(text: &str) -> Option<&str> {
    let text = text.trim();
    let stripped = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"))?;
    let stripped = stripped.trim_start();
    Some(
        stripped
            .strip_suffix("```")
            .map(str::trim)
            .unwrap_or(stripped),
    )
}

/// Tries each top-level `{` in order and returns the first complete JSON
/// object that parses from that position. Trailing text after the object is
/// ignored. Returns `None` as soon as a candidate runs out of input, so a
/// truncated record never yields one of its nested objects.
fn scan_for_object(raw: &str) -> Option<Value> {
    for start in top_level_braces(raw) {
        let mut stream = serde_json::Deserializer::from_str(&raw[start..]).into_iter::<Value>();
        match stream.next() {
            Some(Ok(value @ Value::Object(_))) => return Some(value),
            Some(Err(e)) if e.is_eof() => return None,
            _ => {}
        }
    }
    None
}

/// Byte offsets of every `{` at nesting depth zero. String literals are
/// skipped so quoted braces do not affect the depth.
fn top_level_braces(raw: &str) -> Vec<usize> {
    let mut starts = Vec::new();
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in raw.char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' if depth > 0 => in_string = true,
            '{' => {
                if depth == 0 {
                    starts.push(i);
                }
                depth += 1;
            }
            '}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    starts
}
