//! Round-trip properties of column addressing.

use proptest::prelude::*;

use scanconfig_model::{
    ColumnIndex, ColumnLabel, MAX_COLUMNS, all_labels, index_to_letter, letter_to_index,
};

proptest! {
    #[test]
    fn index_survives_label_round_trip(i in 0usize..MAX_COLUMNS) {
        let index = ColumnIndex::new(i).unwrap();
        let label = index_to_letter(Some(index));
        prop_assert_eq!(letter_to_index(&label), Some(index));
    }

    #[test]
    fn canonical_label_survives_index_round_trip(label in "[A-Z]{1,2}") {
        let index = letter_to_index(&label);
        prop_assert_eq!(index_to_letter(index), label);
    }

    #[test]
    fn lowercase_input_canonicalizes(label in "[a-z]{1,2}") {
        let parsed = ColumnLabel::parse(&label).unwrap();
        prop_assert_eq!(parsed.as_str(), label.to_ascii_uppercase());
    }

    #[test]
    fn longer_labels_never_resolve(label in "[A-Z]{3,5}") {
        prop_assert_eq!(letter_to_index(&label), None);
    }
}

#[test]
fn all_labels_are_strictly_ordered_by_index() {
    for (expected, label) in all_labels().enumerate() {
        assert_eq!(label.index().get(), expected);
    }
}
