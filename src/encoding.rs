//! Text decoding for delimited sources using chardetng and `encoding_rs`.

use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8, UTF_16BE, UTF_16LE};
use simdutf8::basic::from_utf8;
use std::borrow::Cow;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Check if the given bytes are valid UTF-8.
///
/// Uses SIMD-accelerated validation for performance.
pub fn is_utf8(data: &[u8]) -> bool {
    from_utf8(data).is_ok()
}

/// Skip the UTF-8 BOM if present and return the remaining data.
pub fn skip_bom(data: &[u8]) -> &[u8] {
    data.strip_prefix(UTF8_BOM).unwrap_or(data)
}

/// Guess the encoding of delimited text.
///
/// UTF-16 byte order marks win, then valid UTF-8, then chardetng's guess.
pub fn detect_encoding(data: &[u8]) -> &'static Encoding {
    match data {
        [0xFF, 0xFE, ..] => UTF_16LE,
        [0xFE, 0xFF, ..] => UTF_16BE,
        _ if is_utf8(skip_bom(data)) => UTF_8,
        _ => {
            let mut detector = EncodingDetector::new();
            detector.feed(data, true);
            detector.guess(None, true)
        }
    }
}

/// Decode delimited text to UTF-8, dropping any byte order mark.
///
/// Valid UTF-8 is borrowed; anything else is transcoded, with malformed
/// sequences replaced by U+FFFD.
pub fn decode_text(data: &[u8]) -> Cow<'_, str> {
    let encoding = detect_encoding(data);
    if encoding == UTF_8 {
        if let Ok(text) = from_utf8(skip_bom(data)) {
            return Cow::Borrowed(text);
        }
    }
    tracing::debug!(encoding = encoding.name(), "transcoding delimited input");
    // `decode` sniffs and strips any BOM itself
    let (decoded, _, _) = encoding.decode(data);
    decoded
}
