//! Encoding label resolution

use encoding_rs::Encoding;

use crate::error::{DecodeError, Result};

/// Resolve an encoding label (e.g. `"UTF-8"`, `"latin1"`, `"shift_jis"`)
///
/// Labels follow the WHATWG Encoding Standard: matching is ASCII
/// case-insensitive and ignores surrounding whitespace. Labels that only map
/// to the `replacement` encoding are rejected, since decoding with it would
/// turn any input into a single U+FFFD.
///
/// # Example
/// ```
/// let encoding = streamtext::resolve("Latin1").unwrap();
/// assert_eq!(encoding.name(), "windows-1252");
/// ```
pub fn resolve(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label_no_replacement(label.as_bytes())
        .ok_or_else(|| DecodeError::UnsupportedEncoding(label.to_string()))
}
