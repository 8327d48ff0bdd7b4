//! Property tests for `LexicalIndex` lookups.

use flexion_core::{LemmaRef, LexicalIndex, WordKind};
use proptest::prelude::*;

fn forms() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[a-zA-ZäöüÄÖÜ]{1,10}", 1..40)
}

fn build(forms: &[String]) -> LexicalIndex {
    LexicalIndex::build(
        forms
            .iter()
            .enumerate()
            .map(|(i, f)| (f.as_str(), LemmaRef::new(WordKind::Noun, i))),
    )
    .expect("index builds")
}

proptest! {
    #[test]
    fn every_form_is_found_case_insensitively(forms in forms()) {
        let index = build(&forms);
        for (i, form) in forms.iter().enumerate() {
            let handle = LemmaRef::new(WordKind::Noun, i);
            prop_assert!(index.find(form).contains(&handle));
            prop_assert!(index.find(&form.to_uppercase()).contains(&handle));
        }
    }

    #[test]
    fn keys_are_sorted_and_unique(forms in forms()) {
        let index = build(&forms);
        let keys = index.keys();
        prop_assert_eq!(keys.len(), index.len());
        prop_assert!(keys.windows(2).all(|w| w[0].as_bytes() < w[1].as_bytes()));
    }

    #[test]
    fn padded_query_misses_unpadded_key(forms in forms()) {
        let index = build(&forms);
        for form in &forms {
            let padded = format!(" {form} ");
            prop_assert!(index.find(&padded).is_empty());
        }
    }

    #[test]
    fn closest_is_never_empty(forms in forms(), query in "[a-zäöü]{0,8}") {
        let index = build(&forms);
        prop_assert!(!index.closest(&query).is_empty());
    }

    #[test]
    fn closest_boundaries(forms in forms()) {
        let index = build(&forms);
        let keys = index.keys();

        let first = &keys[0];
        prop_assert_eq!(index.closest(first), index.find(first).to_vec());

        let last = &keys[keys.len() - 1];
        prop_assert_eq!(index.closest("\u{FFFF}"), index.find(last).to_vec());
        prop_assert_eq!(index.closest(last), index.find(last).to_vec());

        if keys.len() > 2 {
            let mut expected = index.find(&keys[0]).to_vec();
            expected.extend_from_slice(index.find(&keys[1]));
            prop_assert_eq!(index.closest(&keys[1]), expected);
        }
    }
}

#[test]
fn empty_index_has_no_neighbours() {
    let index = LexicalIndex::new();
    assert!(index.is_empty());
    assert!(index.find("haus").is_empty());
    assert!(index.closest("haus").is_empty());
}
