#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // First four bytes pick the seed, the fifth picks a split point.
    if data.len() < 5 {
        return;
    }
    let seed = u32::from_le_bytes([data[0], data[1], data[2], data[3]]);
    let payload = &data[5..];
    let split = usize::from(data[4]) % (payload.len() + 1);

    let oneshot = xxh32::xxh32(payload, seed);
    assert_eq!(
        oneshot,
        xxhash_rust::xxh32::xxh32(payload, seed),
        "one-shot digest differs from reference for {} bytes",
        payload.len()
    );

    let mut state = xxh32::Xxh32::new(seed);
    state.absorb(&payload[..split]).absorb(&payload[split..]);
    assert_eq!(state.digest(), oneshot, "split at {split} of {}", payload.len());
});
