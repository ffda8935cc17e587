//! Text stage of the file-id codec: URL-safe base64, padding-tolerant.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use crate::error::InvalidFileId;

/// Decodes the textual wrapper of a file id into raw record bytes.
///
/// Trailing `=` padding is accepted and ignored; ids circulate both
/// padded and unpadded in the wild.
pub fn decode_text(s: &str) -> Result<Vec<u8>, InvalidFileId> {
    URL_SAFE_NO_PAD
        .decode(s.trim_end_matches('='))
        .map_err(|_| InvalidFileId)
}

/// Encodes raw record bytes into the textual wrapper (no padding).
pub fn encode_text(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}
