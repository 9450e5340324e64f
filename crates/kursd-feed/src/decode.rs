//! Windows-1251 decoding of feed bodies.

use encoding_rs::WINDOWS_1251;

/// Decodes a raw feed body from windows-1251 into UTF-8.
///
/// Decoding is total: bytes with no mapping are replaced rather than
/// rejected, so a damaged body still yields a parseable string.
#[must_use]
pub fn decode_feed(body: &[u8]) -> String {
    let (text, _, _) = WINDOWS_1251.decode(body);
    text.into_owned()
}
