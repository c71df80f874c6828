//! Decode byte streams into text or copy them into verbatim byte buffers.
//!
//! Any [`std::io::Read`] is a byte source. Text is produced with
//! [`decode_to_text`] (or a configured [`Decoder`]) under an encoding named
//! by its WHATWG label, and raw bytes with [`copy_to_buffer`]. Sources that
//! must be opened first implement [`ByteSource`]; the opened reader is
//! released before the call returns, whether it succeeds or fails.
//!
//! # Example
//! ```
//! let text = streamtext::decode_to_text(&b"caf\xc3\xa9"[..], "utf-8").unwrap();
//! assert_eq!(text, "café");
//!
//! let buffer = streamtext::copy_to_buffer(&[0u8, 1, 2][..]).unwrap();
//! assert_eq!(buffer, [0u8, 1, 2]);
//! ```

mod buffer;
mod charset;
mod consts;
mod decode;
mod encode;
mod error;
mod source;
mod text;

pub use buffer::{ByteBuffer, copy_source, copy_to_buffer};
pub use charset::resolve;
pub use consts::DEFAULT_ENCODING;
pub use decode::{Decoder, decode_source, decode_to_text};
pub use encode::encode_text;
pub use error::{DecodeError, Result};
pub use source::{ByteSource, FromFn, from_fn};
pub use text::DecodedText;

pub use encoding_rs::Encoding;
