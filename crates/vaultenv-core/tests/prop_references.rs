use proptest::prelude::*;
use vaultenv_core::{normalize_output_name, parse_secret_references};

#[test]
fn references_match_written_entries() {
    let refs = parse_secret_references("kv/ci npm_token ; kv/ci docker/password | DOCKER")
        .expect("parse");

    assert_eq!(refs.len(), 2);
    assert_eq!(refs[0].secret_path, "kv/ci");
    assert_eq!(refs[0].output_name, "NPM_TOKEN");
    assert_eq!(refs[1].secret_key, "docker/password");
    assert_eq!(refs[1].output_name, "DOCKER");
}

proptest! {
    #[test]
    fn parse_preserves_order_and_count(
        entries in proptest::collection::vec(("[a-z0-9/_-]{1,12}", "[a-zA-Z0-9/._-]{1,12}", proptest::option::of("[A-Z_]{1,8}")), 0..8),
        padding in "[ \t]{0,3}",
    ) {
        let input = entries
            .iter()
            .map(|(path, key, name)| match name {
                Some(name) => format!("{padding}{path} {key}{padding}|{padding}{name}"),
                None => format!("{padding}{path}{padding} {key}"),
            })
            .collect::<Vec<String>>()
            .join(";");

        // Keys that normalize to nothing are rejected, so only check the rest.
        prop_assume!(entries
            .iter()
            .all(|(_, key, name)| name.is_some() || !normalize_output_name(key).is_empty()));

        let refs = parse_secret_references(&input).expect("parse");
        prop_assert_eq!(refs.len(), entries.len());
        for (reference, (path, key, name)) in refs.iter().zip(entries.iter()) {
            prop_assert_eq!(&reference.secret_path, path);
            prop_assert_eq!(&reference.secret_key, key);
            match name {
                Some(name) => prop_assert_eq!(&reference.output_name, name),
                None => prop_assert_eq!(&reference.output_name, &normalize_output_name(key)),
            }
        }
    }

    #[test]
    fn blank_entries_do_not_count(
        keys in proptest::collection::vec("[a-z]{1,8}", 1..6),
        gaps in proptest::collection::vec("[ ;\t]{0,4}", 1..6),
    ) {
        let mut input = String::new();
        for (idx, key) in keys.iter().enumerate() {
            input.push_str(&format!("path {key};"));
            input.push_str(&gaps[idx % gaps.len()]);
        }
        let refs = parse_secret_references(&input).expect("parse");
        prop_assert_eq!(refs.len(), keys.len());
    }

    #[test]
    fn normalize_is_pure(key in "\\PC{0,24}") {
        prop_assert_eq!(normalize_output_name(&key), normalize_output_name(&key));
    }

    #[test]
    fn normalize_of_word_keys_is_upper_case(key in "[a-zA-Z0-9_-]{1,24}") {
        prop_assert_eq!(normalize_output_name(&key), key.to_uppercase());
    }
}
