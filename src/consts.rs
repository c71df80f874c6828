//! Common constants for decoding and copying byte streams

/// Label of the encoding used when the caller does not name one
pub const DEFAULT_ENCODING: &str = "utf-8";

/// Default size of the read buffer used while decoding
pub(crate) const CHUNK_SIZE: usize = 8 * 1024;

/// Initial capacity reserved when accumulating a byte buffer
pub(crate) const INITIAL_CAPACITY: usize = 4 * 1024;
