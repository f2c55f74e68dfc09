use catalog_model::Record;
use catalog_validate::{ValidationIssue, Validator};

fn record(id: &str, name: &str, duration: &str, quota: &str, modality: &str) -> Record {
    [
        ("id", id),
        ("nombre_carrera", name),
        ("duracion_anios", duration),
        ("cupos_anuales", quota),
        ("modalidad", modality),
    ]
    .into_iter()
    .collect()
}

fn reason(record: &Record) -> String {
    Validator::default()
        .validate(record)
        .expect_err("record should be rejected")
        .to_string()
}

#[test]
fn accepts_well_formed_record() {
    for modality in ["Presencial", "Virtual", "Mixta"] {
        let rec = record("MED-01", "Medicina", "6", "120", modality);
        assert_eq!(Validator::default().validate(&rec), Ok(()));
    }
}

#[test]
fn extra_columns_are_not_checked() {
    let mut rec = record("MED-01", "Medicina", "6", "120", "Mixta");
    rec.set("sede", "");
    rec.set("codigo", "not a number");
    assert_eq!(Validator::default().validate(&rec), Ok(()));
}

#[test]
fn non_integer_numbers() {
    assert_eq!(
        reason(&record("1", "a", "x", "10", "Mixta")),
        "duration and quota must be integers"
    );
    assert_eq!(
        reason(&record("1", "a", "3", "2.5", "Mixta")),
        "duration and quota must be integers"
    );
}

#[test]
fn missing_numeric_columns_are_not_integers() {
    let rec: Record = [("id", "1"), ("nombre_carrera", "a"), ("modalidad", "Mixta")]
        .into_iter()
        .collect();
    assert!(matches!(
        Validator::default().validate(&rec),
        Err(ValidationIssue::NotIntegers { .. })
    ));
}

#[test]
fn non_positive_numbers() {
    assert_eq!(
        reason(&record("1", "a", "0", "10", "Mixta")),
        "duration and quota must be positive"
    );
    assert_eq!(
        reason(&record("1", "a", "3", "-1", "Mixta")),
        "duration and quota must be positive"
    );
}

#[test]
fn integers_wider_than_i64_are_accepted() {
    let rec = record("1", "a", "3", "99999999999999999999", "Mixta");
    assert_eq!(Validator::default().validate(&rec), Ok(()));
}

#[test]
fn huge_integers_are_out_of_range_not_malformed() {
    let huge = "9".repeat(45);
    assert_eq!(
        reason(&record("1", "a", "3", &huge, "Mixta")),
        "duration and quota are out of range"
    );
    assert_eq!(
        reason(&record("1", "a", &format!("-{huge}"), "3", "Mixta")),
        "duration and quota are out of range"
    );
    // A syntax error in the other field still reads as malformed.
    assert_eq!(
        reason(&record("1", "a", "x", &huge, "Mixta")),
        "duration and quota must be integers"
    );
}

#[test]
fn modality_is_case_sensitive() {
    assert_eq!(
        reason(&record("1", "a", "3", "10", "presencial")),
        "modality must be one of: Mixta, Presencial, Virtual"
    );
}

#[test]
fn blank_identity() {
    assert_eq!(
        reason(&record("  ", "a", "3", "10", "Mixta")),
        "id and name cannot be empty"
    );
    assert_eq!(
        reason(&record("1", "", "3", "10", "Mixta")),
        "id and name cannot be empty"
    );
}

#[test]
fn first_failing_rule_wins() {
    // Every rule fails here; the integer rule is checked first.
    let rec = record("", "", "x", "0", "nope");
    assert!(matches!(
        Validator::default().validate(&rec),
        Err(ValidationIssue::NotIntegers { .. })
    ));

    // Numbers fine but not positive, modality and identity also bad.
    let rec = record("", "", "0", "1", "nope");
    assert!(matches!(
        Validator::default().validate(&rec),
        Err(ValidationIssue::NotPositive { duration: 0, quota: 1 })
    ));

    let rec = record("", "", "1", "1", "nope");
    assert!(matches!(
        Validator::default().validate(&rec),
        Err(ValidationIssue::UnknownModality { .. })
    ));
}
