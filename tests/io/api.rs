// Integration tests for src/io.rs: hashing caller-supplied readers.

use std::io::{self, Cursor, Read};

use xxh32::config::READ_BUFFER_SIZE;
use xxh32::io::hash_reader;
use xxh32::{xxh32, Xxh32};

/// Reader that fails after yielding `remaining` bytes.
struct FailAfter {
    remaining: usize,
}

impl Read for FailAfter {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.remaining == 0 {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "source went away"));
        }
        let n = buf.len().min(self.remaining);
        buf[..n].fill(0xAB);
        self.remaining -= n;
        Ok(n)
    }
}

#[test]
fn empty_reader_gives_empty_digest() {
    assert_eq!(hash_reader(io::empty(), 0).unwrap(), 0x02CC_5D05);
    assert_eq!(hash_reader(io::empty(), 1).unwrap(), 0x0B2C_B792);
}

#[test]
fn reader_spanning_several_buffers() {
    let data: Vec<u8> = (0..2 * READ_BUFFER_SIZE + 13).map(|i| (i % 251) as u8).collect();
    assert_eq!(hash_reader(Cursor::new(&data), 3).unwrap(), xxh32(&data, 3));
}

#[test]
fn read_error_is_propagated() {
    let err = hash_reader(FailAfter { remaining: 100 }, 0).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
}

#[test]
fn byte_slice_is_a_reader() {
    let data: &[u8] = b"The quick brown fox jumps over the lazy dog";
    assert_eq!(hash_reader(data, 0).unwrap(), 0xE85E_A4DE);
}

#[test]
fn borrowed_reader_can_be_reused_after_hashing() {
    let mut cursor = Cursor::new(b"abcabc".to_vec());
    let mut first = [0u8; 3];
    cursor.read_exact(&mut first).unwrap();
    assert_eq!(hash_reader(&mut cursor, 0).unwrap(), 0x32D1_53FF);
    assert_eq!(cursor.position(), 6);
}

#[test]
fn io_copy_into_hasher() {
    let data = b"Nobody inspects the spammish repetition";
    let mut state = Xxh32::new(0);
    let copied = io::copy(&mut Cursor::new(&data[..]), &mut state).unwrap();
    assert_eq!(copied, data.len() as u64);
    assert_eq!(state.finalize(), 0xE229_3B2F);
}
