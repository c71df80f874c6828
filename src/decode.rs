//! Byte stream decoding

use std::fmt;
use std::io::{self, Read};

use encoding_rs::{CoderResult, DecoderResult, Encoding, UTF_8};
use tracing::{debug, trace};

use crate::charset::resolve;
use crate::consts::{CHUNK_SIZE, DEFAULT_ENCODING};
use crate::error::{DecodeError, Result};
use crate::source::ByteSource;
use crate::text::DecodedText;

/// Summary of a finished decode run
struct Outcome {
    encoding: &'static Encoding,
    consumed: u64,
    replaced: bool,
}

/// Decoder with configurable options
#[derive(Debug, Clone)]
pub struct Decoder {
    encoding: &'static Encoding,
    strict: bool,
    bom_sniffing: bool,
    chunk_size: usize,
}

impl Default for Decoder {
    fn default() -> Self {
        Self {
            encoding: Encoding::for_label(DEFAULT_ENCODING.as_bytes()).unwrap_or(UTF_8),
            strict: false,
            bom_sniffing: false,
            chunk_size: CHUNK_SIZE,
        }
    }
}

impl Decoder {
    /// Create a new UTF-8 decoder with default settings
    ///
    /// Default settings:
    /// - Lenient mode (malformed input becomes U+FFFD)
    /// - No BOM sniffing (a BOM is decoded like any other bytes)
    /// - 8 KiB read chunks
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a decoder for the encoding named by `label`
    ///
    /// Fails with [`DecodeError::UnsupportedEncoding`] if the label is unknown.
    pub fn for_label(label: &str) -> Result<Self> {
        Ok(Self::with_encoding(resolve(label)?))
    }

    /// Create a decoder for an already resolved encoding
    pub fn with_encoding(encoding: &'static Encoding) -> Self {
        Self {
            encoding,
            ..Self::default()
        }
    }

    /// Reject malformed input instead of replacing it
    ///
    /// The error reports the byte offset where the malformed sequence starts.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Let a leading UTF-8 or UTF-16 byte order mark pick the encoding
    ///
    /// The BOM itself is removed from the output.
    pub fn bom_sniffing(mut self) -> Self {
        self.bom_sniffing = true;
        self
    }

    /// Set the size of the read buffer (at least one byte)
    pub fn chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = size.max(1);
        self
    }

    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    /// Decode everything `reader` yields into text
    ///
    /// The reader is read to end-of-stream. On failure no partial text is
    /// returned.
    ///
    /// # Example
    /// ```
    /// use streamtext::Decoder;
    ///
    /// let input = b"\x63\x61\x66\xe9";
    ///
    /// let text = Decoder::for_label("latin1")
    ///     .unwrap()
    ///     .decode_to_text(&input[..])
    ///     .unwrap();
    ///
    /// assert_eq!(text, "café");
    /// ```
    pub fn decode_to_text<R: Read>(&self, reader: R) -> Result<DecodedText> {
        let mut text = String::new();
        let outcome = self.run(reader, &mut text)?;

        debug!(
            encoding = outcome.encoding.name(),
            bytes = outcome.consumed,
            utf8_len = text.len(),
            replaced = outcome.replaced,
            "decoded byte source"
        );
        Ok(DecodedText::new(text, outcome.encoding, outcome.replaced))
    }

    /// Decode `reader` and write the text into `writer`
    ///
    /// Returns the number of bytes consumed from `reader`. The text is handed
    /// to `writer` only after the whole stream decoded, so a failed read or
    /// malformed input leaves `writer` untouched.
    pub fn decode_to_writer<R: Read, W: fmt::Write>(
        &self,
        reader: R,
        mut writer: W,
    ) -> Result<u64> {
        let mut text = String::new();
        let outcome = self.run(reader, &mut text)?;
        writer.write_str(&text)?;

        debug!(
            encoding = outcome.encoding.name(),
            bytes = outcome.consumed,
            replaced = outcome.replaced,
            "decoded byte source into writer"
        );
        Ok(outcome.consumed)
    }

    /// Open `source`, decode it, and release the opened reader
    pub fn decode_source<S: ByteSource + ?Sized>(&self, source: &S) -> Result<DecodedText> {
        self.decode_to_text(source.open()?)
    }

    fn run<R: Read>(&self, mut reader: R, dst: &mut String) -> Result<Outcome> {
        let mut decoder = if self.bom_sniffing {
            self.encoding.new_decoder()
        } else {
            self.encoding.new_decoder_without_bom_handling()
        };
        let mut chunk = vec![0u8; self.chunk_size];
        let mut consumed = 0u64;
        let mut replaced = false;

        loop {
            let n = match reader.read(&mut chunk) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            trace!(bytes = n, offset = consumed, "read chunk");

            replaced |= self.feed(&mut decoder, &chunk[..n], consumed, false, dst)?;
            consumed += n as u64;
        }

        // Flush whatever the decoder still holds, e.g. a truncated sequence
        replaced |= self.feed(&mut decoder, &[], consumed, true, dst)?;

        Ok(Outcome {
            encoding: decoder.encoding(),
            consumed,
            replaced,
        })
    }

    /// Decode one chunk starting at byte `offset` of the stream
    ///
    /// Returns whether any malformed input was replaced.
    fn feed(
        &self,
        decoder: &mut encoding_rs::Decoder,
        mut src: &[u8],
        offset: u64,
        last: bool,
        dst: &mut String,
    ) -> Result<bool> {
        let mut position = offset;
        let mut replaced = false;

        loop {
            if self.strict {
                let needed = decoder
                    .max_utf8_buffer_length_without_replacement(src.len())
                    .unwrap_or(src.len());
                dst.reserve(needed);

                let (result, read) = decoder.decode_to_string_without_replacement(src, dst, last);
                src = &src[read..];
                position += read as u64;

                match result {
                    DecoderResult::InputEmpty => return Ok(false),
                    DecoderResult::OutputFull => continue,
                    DecoderResult::Malformed(bad, extra) => {
                        return Err(DecodeError::Malformed {
                            encoding: decoder.encoding().name(),
                            offset: position.saturating_sub(u64::from(bad) + u64::from(extra)),
                        });
                    }
                }
            } else {
                let needed = decoder.max_utf8_buffer_length(src.len()).unwrap_or(src.len());
                dst.reserve(needed);

                let (result, read, had_errors) = decoder.decode_to_string(src, dst, last);
                src = &src[read..];
                replaced |= had_errors;

                match result {
                    CoderResult::InputEmpty => return Ok(replaced),
                    CoderResult::OutputFull => continue,
                }
            }
        }
    }
}

/// Decode `reader` under the encoding named by `encoding` with default settings
///
/// This is a convenience function equivalent to
/// `Decoder::for_label(encoding)?.decode_to_text(reader)`. The label is
/// resolved before any byte is read.
///
/// # Example
/// ```
/// let text = streamtext::decode_to_text(&b"hello"[..], "utf-8").unwrap();
/// assert_eq!(text, "hello");
/// ```
pub fn decode_to_text<R: Read>(reader: R, encoding: &str) -> Result<DecodedText> {
    Decoder::for_label(encoding)?.decode_to_text(reader)
}

/// Open `source`, decode it under `encoding`, and release the opened reader
pub fn decode_source<S: ByteSource + ?Sized>(source: &S, encoding: &str) -> Result<DecodedText> {
    Decoder::for_label(encoding)?.decode_source(source)
}
