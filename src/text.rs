//! Decoded text

use std::fmt;
use std::ops::Deref;

use encoding_rs::Encoding;

use crate::buffer::ByteBuffer;
use crate::encode::encode_with;
use crate::error::Result;

/// Immutable text produced by decoding a byte source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    text: String,
    encoding: &'static Encoding,
    replaced: bool,
}

impl DecodedText {
    pub(crate) fn new(text: String, encoding: &'static Encoding, replaced: bool) -> Self {
        Self {
            text,
            encoding,
            replaced,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length of the text in UTF-8 bytes
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of characters (Unicode scalar values)
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// The encoding the bytes were decoded with
    ///
    /// With BOM sniffing enabled this is the encoding the BOM selected.
    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    /// Whether malformed input was replaced with U+FFFD
    pub fn had_replacements(&self) -> bool {
        self.replaced
    }

    /// Encode the text back with the encoding it was decoded from
    ///
    /// For input that was valid in that encoding this reproduces the original
    /// bytes (minus any BOM consumed by sniffing).
    pub fn to_bytes(&self) -> Result<ByteBuffer> {
        encode_with(self.encoding, &self.text)
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl Deref for DecodedText {
    type Target = str;

    fn deref(&self) -> &str {
        &self.text
    }
}

impl AsRef<str> for DecodedText {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for DecodedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<DecodedText> for String {
    fn from(text: DecodedText) -> Self {
        text.text
    }
}

impl PartialEq<str> for DecodedText {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for DecodedText {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

impl PartialEq<String> for DecodedText {
    fn eq(&self, other: &String) -> bool {
        &self.text == other
    }
}
