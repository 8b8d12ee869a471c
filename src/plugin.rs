//! Functions exported to the WebAssembly plugin host. Arguments arrive as
//! raw bytes; invalid UTF-8 counts as empty text and an empty `locale` or
//! `mode` means none was given.

use wasm_minimal_protocol::*;

use crate::segmenter::segment;
use crate::width;

initiate_protocol!();

fn utf8(input: &[u8]) -> &str {
    std::str::from_utf8(input).unwrap_or("")
}

fn optional(input: &[u8]) -> Option<&str> {
    Some(utf8(input)).filter(|s| !s.is_empty())
}

fn width_reply(text: &[u8], locale: &[u8]) -> Vec<u8> {
    width::eaw_width(utf8(text), optional(locale)).to_string().into_bytes()
}

fn segment_reply(text: &[u8], mode: &[u8]) -> Result<Vec<u8>, String> {
    let segments = segment(utf8(text), optional(mode), None).map_err(|e| e.to_string())?;
    serde_json::to_vec(&segments).map_err(|e| e.to_string())
}

fn text_width_reply(text: &[u8], locale: &[u8]) -> Vec<u8> {
    width::text_width(utf8(text), optional(locale)).to_string().into_bytes()
}

/// Input: text, locale (e.g. b"ja")
/// Output: decimal width of the first character, b"-1" for empty text
#[wasm_func]
pub fn east_asian_width(text: &[u8], locale: &[u8]) -> Vec<u8> {
    width_reply(text, locale)
}

/// Input: text, mode (b"grapheme", b"word" or b"sentence")
/// Output: JSON array of segments, e.g. b"[\"Hello\",\" \",\"World\"]"
#[wasm_func]
pub fn segment_text(text: &[u8], mode: &[u8]) -> Result<Vec<u8>, String> {
    segment_reply(text, mode)
}

/// Input: text, locale
/// Output: decimal sum of the character widths
#[wasm_func]
pub fn text_width(text: &[u8], locale: &[u8]) -> Vec<u8> {
    text_width_reply(text, locale)
}
