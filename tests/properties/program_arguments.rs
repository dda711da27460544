//! Property tests for compiler argument building.

use std::collections::BTreeMap;

use proptest::prelude::*;

use javacc_build::ProgramArguments;

fn option_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Z][A-Z_]{0,15}").unwrap()
}

fn option_value() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9./]{1,12}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: User options come first in name order, the file comes last.
    #[test]
    fn property_options_sorted_then_file(
        options in proptest::collection::btree_map(option_name(), option_value(), 0..8),
    ) {
        let mut args = ProgramArguments::new();
        args.add_all(&options);
        args.add_file("/src/A.jj");

        let rendered = args.to_vec();
        prop_assert_eq!(rendered.len(), options.len() + 1);
        prop_assert_eq!(rendered.last().map(String::as_str), Some("/src/A.jj"));
        for (rendered, (name, value)) in rendered.iter().zip(options.iter()) {
            prop_assert_eq!(rendered, &format!("-{}={}", name, value));
        }
    }

    /// PROPERTY: Re-registering a name overwrites in place and never grows the list.
    #[test]
    fn property_overwrite_keeps_position(
        options in proptest::collection::btree_map(option_name(), option_value(), 1..8),
        replacement in option_value(),
        pick in any::<proptest::sample::Index>(),
    ) {
        let mut args = ProgramArguments::new();
        args.add_all(&options);
        let before = args.to_vec();

        let names: Vec<&String> = options.keys().collect();
        let name = names[pick.index(names.len())];
        args.add(name.as_str(), replacement.as_str());

        let after = args.to_vec();
        prop_assert_eq!(after.len(), before.len());
        prop_assert_eq!(args.get(name), Some(replacement.as_str()));
        let position = before
            .iter()
            .position(|a| a.starts_with(&format!("-{}=", name)))
            .unwrap();
        prop_assert_eq!(&after[position], &format!("-{}={}", name, replacement));
    }

    /// PROPERTY: Empty names or values are never rendered.
    #[test]
    fn property_empty_parts_are_dropped(
        name in option_name(),
        value in option_value(),
    ) {
        let mut options = BTreeMap::new();
        options.insert(name.clone(), String::new());
        options.insert(String::new(), value);

        let mut args = ProgramArguments::new();
        args.add_all(&options);

        prop_assert!(args.is_empty());
    }
}
