//! Verbatim byte copies of a byte source

use std::io::Read;
use std::ops::Deref;

use bytes::Bytes;
use crc32fast::Hasher;
use tracing::debug;

use crate::consts::INITIAL_CAPACITY;
use crate::error::Result;
use crate::source::ByteSource;

/// Immutable bytes copied from a byte source
///
/// Cloning is cheap: clones share the same storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ByteBuffer {
    bytes: Bytes,
}

impl ByteBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// CRC32 (IEEE) checksum of the contents
    ///
    /// Useful to verify a copy against a checksum published with the data, or
    /// to compare and log large buffers without holding both in memory.
    pub fn crc32(&self) -> u32 {
        let mut hasher = Hasher::new();
        hasher.update(&self.bytes);
        hasher.finalize()
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.bytes.to_vec()
    }

    pub fn into_bytes(self) -> Bytes {
        self.bytes
    }
}

impl Deref for ByteBuffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.bytes
    }
}

impl AsRef<[u8]> for ByteBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<Vec<u8>> for ByteBuffer {
    fn from(data: Vec<u8>) -> Self {
        Self {
            bytes: Bytes::from(data),
        }
    }
}

impl From<Bytes> for ByteBuffer {
    fn from(bytes: Bytes) -> Self {
        Self { bytes }
    }
}

impl From<&'static [u8]> for ByteBuffer {
    fn from(data: &'static [u8]) -> Self {
        Self {
            bytes: Bytes::from_static(data),
        }
    }
}

impl PartialEq<[u8]> for ByteBuffer {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_slice() == other
    }
}

impl PartialEq<&[u8]> for ByteBuffer {
    fn eq(&self, other: &&[u8]) -> bool {
        self.as_slice() == *other
    }
}

impl PartialEq<Vec<u8>> for ByteBuffer {
    fn eq(&self, other: &Vec<u8>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<const N: usize> PartialEq<[u8; N]> for ByteBuffer {
    fn eq(&self, other: &[u8; N]) -> bool {
        self.as_slice() == &other[..]
    }
}

impl ByteSource for ByteBuffer {
    type Reader<'a> = &'a [u8];

    fn open(&self) -> std::io::Result<&[u8]> {
        Ok(self.as_slice())
    }
}

/// Copy every byte of `reader` into a [`ByteBuffer`]
///
/// The buffer grows as bytes arrive, so the result holds the whole stream
/// regardless of how many bytes the reader reported as available up front.
/// On failure no partial buffer is returned.
///
/// # Example
/// ```
/// let buffer = streamtext::copy_to_buffer(&[0u8, 1, 2][..]).unwrap();
/// assert_eq!(buffer.len(), 3);
/// assert_eq!(buffer, [0u8, 1, 2]);
/// ```
pub fn copy_to_buffer<R: Read>(mut reader: R) -> Result<ByteBuffer> {
    let mut data = Vec::with_capacity(INITIAL_CAPACITY);
    reader.read_to_end(&mut data)?;

    debug!(bytes = data.len(), "copied byte source");
    Ok(ByteBuffer::from(data))
}

/// Open `source`, copy it with [`copy_to_buffer`], and release the reader
pub fn copy_source<S: ByteSource + ?Sized>(source: &S) -> Result<ByteBuffer> {
    copy_to_buffer(source.open()?)
}
