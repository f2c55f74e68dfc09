//! Model behaviour through the public API.

use std::str::FromStr;

use catalog_model::{DataFile, Modality, ModalitySet, Record, fields, title_case};
use proptest::prelude::*;

fn program(id: &str) -> Record {
    [(fields::ID, id), (fields::NAME, "programa")]
        .into_iter()
        .collect()
}

#[test]
fn default_modalities_accept_canonical_spellings_only() {
    let set = ModalitySet::default();
    for modality in Modality::ALL {
        assert!(set.contains(modality.as_str()));
    }
    assert!(!set.contains("presencial"));
    assert_eq!(set.to_string(), "Mixta, Presencial, Virtual");
}

#[test]
fn modality_parse_is_exact() {
    assert_eq!(Modality::from_str("Mixta").unwrap(), Modality::Mixta);
    assert!(Modality::from_str("mixta").is_err());
}

#[test]
fn custom_modality_set() {
    let set = ModalitySet::new(["Hibrida"]);
    assert!(set.contains("Hibrida"));
    assert!(!set.contains("Virtual"));
}

#[test]
fn record_values_follow_column_order() {
    let record: Record = [
        (fields::NAME, "letras"),
        (fields::ID, "LET"),
        (fields::MODALITY, "Virtual"),
    ]
    .into_iter()
    .collect();
    let columns = vec![
        fields::ID.to_string(),
        fields::DURATION_YEARS.to_string(),
        fields::NAME.to_string(),
    ];
    let values: Vec<&str> = record.values_in(&columns).collect();
    assert_eq!(values, vec!["LET", "", "letras"]);
}

proptest! {
    #[test]
    fn title_case_is_idempotent_on_ascii(input in "[a-zA-Z ]{0,24}") {
        let once = title_case(&input);
        prop_assert_eq!(title_case(&once), once.clone());
        prop_assert_eq!(once.len(), input.len());
    }

    #[test]
    fn remove_by_id_drops_every_copy(ids in prop::collection::vec("[A-C]", 0..12)) {
        let mut file = DataFile::new(vec![fields::ID.into(), fields::NAME.into()])
            .with_records(ids.iter().map(|id| program(id)).collect());
        let before = file.len();
        let copies = file.count_of("A");
        prop_assert_eq!(file.remove_by_id("A"), copies);
        prop_assert_eq!(file.len(), before - copies);
        prop_assert!(file.position_of("A").is_none());
    }
}
