//! Opaque cursor codec
//!
//! A cursor encodes a single absolute index into the conceptual result
//! ordering: base64 of `pos:<index>`. Decoding a cursor produced for
//! index `i` always yields `i`. Cursors are not stable across different
//! filter arguments; they only address positions within one ordering.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::{ApiError, ApiResult};

/// Prefix inside the encoded payload, guards against foreign cursors
const CURSOR_PREFIX: &str = "pos:";

/// Encode an absolute index as an opaque cursor
pub fn encode(index: usize) -> String {
    STANDARD.encode(format!("{CURSOR_PREFIX}{index}"))
}

/// Decode a cursor back to its absolute index
///
/// Malformed cursors surface as `ApiError::InvalidCursor`; absent
/// cursors are the caller's concern, never a silent default here.
pub fn decode(cursor: &str) -> ApiResult<usize> {
    let bytes = STANDARD
        .decode(cursor)
        .map_err(|_| ApiError::InvalidCursor(cursor.to_string()))?;
    let payload =
        String::from_utf8(bytes).map_err(|_| ApiError::InvalidCursor(cursor.to_string()))?;
    let index = payload
        .strip_prefix(CURSOR_PREFIX)
        .ok_or_else(|| ApiError::InvalidCursor(cursor.to_string()))?;
    index
        .parse::<usize>()
        .map_err(|_| ApiError::InvalidCursor(cursor.to_string()))
}
