//! Conformance: charset expansion.
//!
//! Salt sampling indexes into the expanded alphabet, so the alphabet must
//! be reproducible byte for byte from its range description.

use getcipher_core::charset::{expand, Charset, CharsetRange};
use getcipher_core::CipherError;
use proptest::prelude::*;

fn ordered_range() -> impl Strategy<Value = CharsetRange> {
    (any::<u8>(), any::<u8>()).prop_map(|(x, y)| CharsetRange::new(x.min(y), x.max(y)))
}

proptest! {
    #[test]
    fn expansion_is_deterministic(ranges in proptest::collection::vec(ordered_range(), 1..6)) {
        let charset = Charset::new(ranges);
        let first = expand(&charset, charset.len()).unwrap();
        let second = expand(&charset.clone(), charset.len()).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn expansion_has_no_duplicates(ranges in proptest::collection::vec(ordered_range(), 1..6)) {
        let charset = Charset::new(ranges);
        let alphabet = expand(&charset, charset.len()).unwrap();
        let mut seen = [false; 256];
        for b in &alphabet {
            prop_assert!(!seen[*b as usize]);
            seen[*b as usize] = true;
        }
        prop_assert!(alphabet.len() <= 256);
    }

    #[test]
    fn any_reversed_range_is_rejected(low in 1u8..=255, gap in 1u8..=255) {
        let high = low.saturating_sub(gap);
        prop_assume!(high < low);
        let charset = Charset::new(vec![CharsetRange::new(b'0', b'9'), CharsetRange::new(low, high)]);
        prop_assert_eq!(expand(&charset, 2), Err(CipherError::InvalidRange { low, high }));
    }
}

#[test]
fn conformance_default_alphabet_order() {
    let charset = Charset::from_pairs(b"09azAZ..//").unwrap();
    let alphabet = expand(&charset, 5).unwrap();
    assert_eq!(
        alphabet,
        b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ./"
    );
}
