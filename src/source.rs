//! Openable byte sources

use std::io::{self, Read};

use bytes::Bytes;

/// Something that can open a byte reader
///
/// Decoding through a `ByteSource` owns the opened reader for the duration of
/// the call and drops it before returning, so handles such as files or
/// sockets are released on success and on failure alike.
pub trait ByteSource {
    /// The reader produced by [`open`](ByteSource::open)
    type Reader<'a>: Read
    where
        Self: 'a;

    /// Open a fresh reader positioned at the first byte
    fn open(&self) -> io::Result<Self::Reader<'_>>;
}

impl ByteSource for [u8] {
    type Reader<'a> = &'a [u8];

    fn open(&self) -> io::Result<&[u8]> {
        Ok(self)
    }
}

impl<const N: usize> ByteSource for [u8; N] {
    type Reader<'a> = &'a [u8];

    fn open(&self) -> io::Result<&[u8]> {
        Ok(&self[..])
    }
}

impl ByteSource for Vec<u8> {
    type Reader<'a> = &'a [u8];

    fn open(&self) -> io::Result<&[u8]> {
        Ok(self.as_slice())
    }
}

impl ByteSource for Bytes {
    type Reader<'a> = &'a [u8];

    fn open(&self) -> io::Result<&[u8]> {
        Ok(self.as_ref())
    }
}

/// A [`ByteSource`] backed by a closure, see [`from_fn`]
#[derive(Clone, Copy)]
pub struct FromFn<F>(F);

/// Create a [`ByteSource`] that opens readers by calling `open`
///
/// # Example
/// ```
/// use std::io::Cursor;
///
/// let source = streamtext::from_fn(|| Ok(Cursor::new(b"hello".to_vec())));
/// let text = streamtext::decode_source(&source, "utf-8").unwrap();
/// assert_eq!(text, "hello");
/// ```
pub fn from_fn<F, R>(open: F) -> FromFn<F>
where
    F: Fn() -> io::Result<R>,
    R: Read,
{
    FromFn(open)
}

impl<F, R> ByteSource for FromFn<F>
where
    F: Fn() -> io::Result<R>,
    R: Read,
{
    type Reader<'a>
        = R
    where
        Self: 'a;

    fn open(&self) -> io::Result<R> {
        (self.0)()
    }
}

impl<F> std::fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}
