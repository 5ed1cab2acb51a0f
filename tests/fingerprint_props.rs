use proptest::prelude::*;

use watch::watch::{checksum, Fingerprinter};

proptest! {
    #[test]
    fn streaming_equals_one_shot(chunks in proptest::collection::vec(
        proptest::collection::vec(any::<u8>(), 0..64),
        0..8,
    )) {
        let mut fp = Fingerprinter::new();
        let mut joined = Vec::new();
        for chunk in &chunks {
            fp.write(chunk);
            joined.extend_from_slice(chunk);
        }
        prop_assert_eq!(fp.sum(), checksum(&joined));
    }

    #[test]
    fn single_byte_edit_changes_fingerprint(
        data in proptest::collection::vec(any::<u8>(), 1..256),
        idx in any::<prop::sample::Index>(),
        delta in 1u8..=255,
    ) {
        // CRC-32 detects every single-byte error, so this must always hold.
        let mut edited = data.clone();
        let i = idx.index(edited.len());
        edited[i] = edited[i].wrapping_add(delta);
        prop_assert_ne!(checksum(&data), checksum(&edited));
    }

    #[test]
    fn distinct_inputs_rarely_collide(
        a in proptest::collection::vec(any::<u8>(), 0..128),
        b in proptest::collection::vec(any::<u8>(), 0..128),
    ) {
        prop_assume!(a != b);
        prop_assert_ne!(checksum(&a), checksum(&b));
    }
}

#[test]
fn foo_bar_matches_foobar() {
    let mut fp = Fingerprinter::new();
    fp.write(b"foo");
    fp.write(b"bar");
    assert_eq!(fp.sum(), checksum(b"foobar"));
}
