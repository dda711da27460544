//! Property tests for grammar file classification.

use std::path::PathBuf;

use proptest::prelude::*;

use javacc_build::FileKind;

fn stem() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z][A-Za-z0-9_]{0,12}").unwrap()
}

fn directory() -> impl Strategy<Value = PathBuf> {
    proptest::collection::vec(proptest::string::string_regex("[a-z]{1,6}").unwrap(), 0..3)
        .prop_map(|parts| parts.iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A file is compilable exactly when its name ends with the suffix.
    #[test]
    fn property_suffix_match_is_exact(
        dir in directory(),
        stem in stem(),
        suffix in prop_oneof![Just(".jj"), Just(".jjt")],
        extension in prop_oneof![Just(".jj"), Just(".jjt"), Just(".JJ"), Just(".java"), Just(".jj.bak")],
    ) {
        let relative = dir.join(format!("{}{}", stem, extension));
        let kind = FileKind::classify(&relative, suffix);

        if extension == suffix {
            prop_assert_eq!(kind, FileKind::Compilable);
        } else {
            prop_assert_eq!(kind, FileKind::PassThrough);
        }
    }

    /// PROPERTY: An empty suffix never marks anything compilable.
    #[test]
    fn property_empty_suffix_compiles_nothing(dir in directory(), stem in stem()) {
        let relative = dir.join(format!("{}.jj", stem));
        prop_assert_eq!(FileKind::classify(&relative, ""), FileKind::PassThrough);
    }
}
