//! Conformance: byte buffer laws.
//!
//! - `len(concat(a, b)) == len(a) + len(b)`
//! - `concat(a, b)` starts with `a` and ends with `b`
//! - equal contents compare equal across distinct instances
//! - reads past the logical length fail

use getcipher_core::buffer::ByteBuffer;
use getcipher_core::CipherError;
use proptest::prelude::*;

fn pushed(bytes: &[u8]) -> ByteBuffer {
    let mut buf = ByteBuffer::with_capacity(1);
    for &b in bytes {
        buf.push(b);
    }
    buf
}

proptest! {
    #[test]
    fn concat_length_and_order(a in proptest::collection::vec(any::<u8>(), 0..64),
                               b in proptest::collection::vec(any::<u8>(), 0..64)) {
        let (ba, bb) = (ByteBuffer::from_bytes(&a), ByteBuffer::from_bytes(&b));
        let joined = ByteBuffer::concat(&ba, &bb);

        prop_assert_eq!(joined.len(), a.len() + b.len());
        prop_assert_eq!(joined.slice(0..a.len()).unwrap(), &a[..]);
        prop_assert_eq!(joined.slice(a.len()..joined.len()).unwrap(), &b[..]);
    }

    #[test]
    fn equal_contents_are_equal(bytes in proptest::collection::vec(any::<u8>(), 0..128)) {
        // Built two different ways, so capacities differ.
        let direct = ByteBuffer::from_bytes(&bytes);
        let grown = pushed(&bytes);
        prop_assert_eq!(&direct, &grown);
        prop_assert!(direct.len() <= direct.capacity());
        prop_assert!(grown.len() <= grown.capacity());
    }

    #[test]
    fn index_past_length_fails(bytes in proptest::collection::vec(any::<u8>(), 0..32),
                               extra in 0usize..16) {
        let buf = pushed(&bytes);
        let index = bytes.len() + extra;
        prop_assert_eq!(
            buf.get(index),
            Err(CipherError::IndexOutOfRange { index, len: bytes.len() })
        );
    }
}

/// Regression: equality must not depend on instance identity.
#[test]
fn conformance_distinct_instances_with_same_bytes_are_equal() {
    let a = ByteBuffer::from_raw_str("usesomes");
    let b = ByteBuffer::from_raw_str("usesomes");
    assert!(a == b);
    assert!(!(a != b));
}
