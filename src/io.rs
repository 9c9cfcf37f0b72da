//! Hashing of caller-supplied readers.
//!
//! [`hash_reader`] streams any [`Read`] through an [`Xxh32`] in
//! [`READ_BUFFER_SIZE`] chunks.  [`Xxh32`] also implements [`Write`], so it
//! can be the sink of `io::copy`.  Opening the source is left to the caller.

use std::io::{self, Read, Write};

use crate::config::READ_BUFFER_SIZE;
use crate::displaylevel;
use crate::hasher::Xxh32;

/// Hashes everything `reader` yields until EOF.
///
/// `Interrupted` reads are retried; any other error aborts the hash.
pub fn hash_reader<R: Read>(mut reader: R, seed: u32) -> io::Result<u32> {
    let mut state = Xxh32::new(seed);
    let mut buf = vec![0u8; READ_BUFFER_SIZE];
    loop {
        match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => {
                state.absorb(&buf[..n]);
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {
                displaylevel!(4, "hash_reader: interrupted read, retrying \n");
                continue;
            }
            Err(e) => {
                displaylevel!(4, "hash_reader: read failed after {} bytes: {} \n", state.total_len(), e);
                return Err(e);
            }
        }
    }
    Ok(state.finalize())
}

impl Write for Xxh32 {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.absorb(buf);
        Ok(buf.len())
    }

    #[inline]
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
