#![no_main]
use libfuzzer_sys::fuzz_target;
use xxh32::{xxh32, xxh32_input, HashInput, Xxh32Error};

fuzz_target!(|data: &[u8]| {
    let units: Vec<u16> = data
        .chunks_exact(2)
        .map(|c| u16::from_le_bytes([c[0], c[1]]))
        .collect();

    // Valid UTF-16 must hash as its UTF-8 transcoding; invalid UTF-16 must
    // report the first unpaired surrogate.
    match String::from_utf16(&units) {
        Ok(text) => assert_eq!(
            xxh32_input(HashInput::Utf16(&units), 0),
            Ok(xxh32(text.as_bytes(), 0))
        ),
        Err(_) => match xxh32_input(HashInput::Utf16(&units), 0) {
            Err(Xxh32Error::InvalidInputEncoding { offset, unit }) => {
                assert_eq!(units[offset], unit);
                assert!((0xD800..=0xDFFF).contains(&unit));
            }
            other => panic!("expected an encoding error, got {other:?}"),
        },
    }
});
