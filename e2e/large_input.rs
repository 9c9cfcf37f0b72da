// e2e/large_input.rs: inputs beyond the 32-bit length range.
//
// XXH32 adds only the low 32 bits of the total length during finalization,
// while the choice between the lane path and the seed path looks at the full
// 64-bit count.  These tests stream more than 4 GiB through the hasher and
// compare against the `xxhash-rust` streaming state, so they are ignored by
// default:
//
//   cargo test --release --test e2e_large_input -- --ignored

use xxh32::Xxh32;

const CHUNK: usize = 1 << 20;

fn stream_both(total: u64, seed: u32) -> (u32, u32, u64) {
    let chunk: Vec<u8> = (0..CHUNK).map(|i| (i * 7 + 3) as u8).collect();
    let mut ours = Xxh32::new(seed);
    let mut reference = xxhash_rust::xxh32::Xxh32::new(seed);

    let mut remaining = total;
    while remaining > 0 {
        let n = remaining.min(CHUNK as u64) as usize;
        ours.absorb(&chunk[..n]);
        reference.update(&chunk[..n]);
        remaining -= n as u64;
    }
    // finalize() resets, so the length has to be read first.
    let len = ours.total_len();
    (ours.finalize(), reference.digest(), len)
}

#[test]
fn reported_length_is_taken_before_finalize() {
    let (ours, reference, len) = stream_both(40, 0);
    assert_eq!(len, 40);
    assert_eq!(ours, reference);
}

#[test]
fn moderate_input_matches_reference() {
    let (ours, reference, len) = stream_both(3 * CHUNK as u64 + 17, 0);
    assert_eq!(len, 3 * CHUNK as u64 + 17);
    assert_eq!(ours, reference);
}

#[test]
#[ignore]
fn input_over_4gib_matches_reference() {
    let total = (1u64 << 32) + 17;
    let (ours, reference, len) = stream_both(total, 0x9E37_79B1);
    assert_eq!(len, total);
    assert_eq!(ours, reference);
}

#[test]
#[ignore]
fn input_of_exactly_4gib_uses_lane_path() {
    // Low 32 bits of the length are zero here.
    let (ours, reference, len) = stream_both(1u64 << 32, 0);
    assert_eq!(len, 1u64 << 32);
    assert_eq!(ours, reference);
}
