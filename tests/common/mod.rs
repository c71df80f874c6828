//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::io::{self, Read};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Number of characters in the large random fixture
pub const DEFAULT_SIZE: usize = 1_500_000;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Deterministic random string of ASCII letters
pub fn random_alphabetic(len: usize) -> String {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Reader that records when it is dropped
pub struct TrackedReader<R> {
    inner: R,
    released: Arc<AtomicBool>,
}

impl<R> TrackedReader<R> {
    pub fn new(inner: R, released: Arc<AtomicBool>) -> Self {
        Self { inner, released }
    }
}

impl<R: Read> Read for TrackedReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl<R> Drop for TrackedReader<R> {
    fn drop(&mut self) {
        self.released.store(true, Ordering::SeqCst);
    }
}

/// Reader that yields `data` and then fails with `kind`
pub struct FailingReader {
    data: &'static [u8],
    kind: io::ErrorKind,
}

impl FailingReader {
    pub fn new(data: &'static [u8], kind: io::ErrorKind) -> Self {
        Self { data, kind }
    }
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.data.is_empty() {
            return Err(io::Error::new(self.kind, "transport failed"));
        }
        self.data.read(buf)
    }
}

/// Reader that counts how often it was read
pub struct CountingReader<'a> {
    data: &'a [u8],
    reads: Arc<AtomicUsize>,
}

impl<'a> CountingReader<'a> {
    pub fn new(data: &'a [u8], reads: Arc<AtomicUsize>) -> Self {
        Self { data, reads }
    }
}

impl Read for CountingReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.data.read(buf)
    }
}
