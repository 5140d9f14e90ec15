//! Conformance: parameter descriptor contracts.
//!
//! - Overrides are idempotent.
//! - A rejected override batch leaves every slot untouched.
//! - Only slots the algorithm declared are active.

use getcipher_core::params::ParamValue;
use getcipher_core::registry::Registry;
use getcipher_core::{CipherError, Overrides, ParameterError};
use proptest::prelude::*;

fn overrides(pairs: &[(&str, &str)]) -> Overrides {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn conformance_phpass_declares_only_its_slots() {
    let desc = Registry::with_defaults().create("phpass").unwrap();
    let active: Vec<_> = desc
        .params()
        .active()
        .map(|(i, d)| (i, d.name.clone()))
        .collect();
    assert_eq!(
        active,
        [
            (0, "salt_len".to_string()),
            (1, "iter_pos".to_string()),
            (3, "salt_charset".to_string()),
        ]
    );
    assert!(!desc.params().slot(2).unwrap().valid);
    assert!(!desc.params().slot(31).unwrap().valid);
}

#[test]
fn conformance_salt_len_schema() {
    let desc = Registry::with_defaults().create("phpass").unwrap();
    let salt_len = desc.params().get("salt_len").unwrap();
    assert_eq!(salt_len.default, Some(ParamValue::Int(64)));
    assert_eq!(salt_len.options, [ParamValue::Int(64), ParamValue::Int(32)]);
    assert_eq!((salt_len.min, salt_len.max), (Some(8), Some(256)));
}

#[test]
fn conformance_override_idempotent() {
    let map = overrides(&[("salt_len", "32"), ("iter_pos", "9"), ("salt_charset", "af")]);
    let mut once = Registry::with_defaults().create("phpass").unwrap();
    once.configure(&map).unwrap();
    let mut twice = Registry::with_defaults().create("phpass").unwrap();
    twice.configure(&map).unwrap();
    twice.configure(&map).unwrap();
    assert_eq!(once.params(), twice.params());
}

#[test]
fn conformance_non_numeric_salt_len_rejected() {
    let mut desc = Registry::with_defaults().create("phpass").unwrap();
    let err = desc.configure(&overrides(&[("salt_len", "lots")])).unwrap_err();
    assert!(matches!(
        err,
        CipherError::InvalidParameter(ParameterError::InvalidValue { .. })
    ));
}

proptest! {
    #[test]
    fn salt_len_override_round_trips(bits in 8i64..=256) {
        let mut desc = Registry::with_defaults().create("phpass").unwrap();
        let map = overrides(&[("salt_len", &bits.to_string())]);
        desc.configure(&map).unwrap();
        prop_assert_eq!(desc.params().current_int(0).unwrap(), bits);
        desc.configure(&map).unwrap();
        prop_assert_eq!(desc.params().current_int(0).unwrap(), bits);
    }

    #[test]
    fn unknown_names_never_mutate(name in "[a-z_]{1,12}") {
        prop_assume!(!["salt_len", "iter_pos", "salt_charset"].contains(&name.as_str()));
        let mut desc = Registry::with_defaults().create("phpass").unwrap();
        let before = desc.params().clone();
        let map = overrides(&[("salt_len", "32"), (&name, "1")]);
        let err = desc.configure(&map).unwrap_err();
        prop_assert_eq!(err, CipherError::InvalidParameter(ParameterError::Unknown(name.clone())));
        prop_assert_eq!(desc.params(), &before);
    }
}
