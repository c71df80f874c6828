//! Text encoding, the inverse of decoding

use encoding_rs::{EncoderResult, Encoding};

use crate::buffer::ByteBuffer;
use crate::charset::resolve;
use crate::error::{DecodeError, Result};

/// Encode `text` under the encoding named by `encoding`
///
/// Characters the encoding cannot represent are an error rather than being
/// substituted. UTF-16 labels are decode-only and rejected here.
///
/// # Example
/// ```
/// let bytes = streamtext::encode_text("café", "latin1").unwrap();
/// assert_eq!(bytes, [0x63u8, 0x61, 0x66, 0xe9]);
/// ```
pub fn encode_text(text: &str, encoding: &str) -> Result<ByteBuffer> {
    encode_with(resolve(encoding)?, text)
}

pub(crate) fn encode_with(encoding: &'static Encoding, text: &str) -> Result<ByteBuffer> {
    if encoding.output_encoding() != encoding {
        return Err(DecodeError::UnsupportedEncoding(encoding.name().to_string()));
    }

    let mut encoder = encoding.new_encoder();
    let mut output = Vec::new();
    let mut remaining = text;

    loop {
        let needed = encoder
            .max_buffer_length_from_utf8_without_replacement(remaining.len())
            .unwrap_or(remaining.len());
        output.reserve(needed);

        let (result, read) =
            encoder.encode_from_utf8_to_vec_without_replacement(remaining, &mut output, true);
        remaining = &remaining[read..];

        match result {
            EncoderResult::InputEmpty => break,
            EncoderResult::OutputFull => continue,
            EncoderResult::Unmappable(ch) => {
                return Err(DecodeError::Unmappable {
                    encoding: encoding.name(),
                    ch,
                });
            }
        }
    }

    Ok(ByteBuffer::from(output))
}
