use super::*;
use crate::country::{Flags, Region};

fn create_country(name: &str, region: &str, capital: Option<&str>, population: u64) -> CountryRecord {
    CountryRecord {
        name: name.to_string(),
        region: region.to_string(),
        alpha3_code: name[..3].to_uppercase(),
        flags: Flags::default(),
        population,
        capital: capital.map(str::to_string),
    }
}

fn sample() -> Vec<CountryRecord> {
    vec![
        create_country("Fiji", "Oceania", Some("Suva"), 896_444),
        create_country("Finland", "Europe", Some("Helsinki"), 5_491_817),
        create_country("Bouvet Island", "Antarctic Ocean", None, 0),
    ]
}

// ========================================
// empty_message tests
// ========================================

#[test]
fn test_empty_message_when_nothing_fetched() {
    assert_eq!(empty_message(0), "No countries available");
}

#[test]
fn test_empty_message_when_filtered_out() {
    assert_eq!(empty_message(3), "No countries matched");
}

// ========================================
// build_table tests
// ========================================

#[test]
fn test_table_has_header_and_rows() {
    let records = sample();
    let visible: Vec<&CountryRecord> = records.iter().collect();
    let rendered = build_table(&visible).to_string();

    for header in ["Name", "Region", "Capital", "Population"] {
        assert!(rendered.contains(header), "missing header {header}");
    }
    assert!(rendered.contains("Helsinki"));
    assert!(rendered.contains("5,491,817"));
    assert!(rendered.contains("896,444"));
}

#[test]
fn test_table_missing_capital_is_dash() {
    let records = sample();
    let visible = vec![&records[2]];
    let rendered = build_table(&visible).to_string();

    assert!(rendered.contains("Bouvet Island"));
    assert!(rendered.contains(" - "));
}

#[test]
fn test_table_follows_filtered_order() {
    let records = sample();
    let visible = derive_visible(&records, None, "fi");
    let rendered = build_table(&visible).to_string();

    let fiji = rendered.find("Fiji").unwrap();
    let finland = rendered.find("Finland").unwrap();
    assert!(fiji < finland);
    assert!(!rendered.contains("Bouvet"));
}

// ========================================
// to_json tests
// ========================================

#[test]
fn test_json_uses_api_field_names() {
    let records = sample();
    let visible = derive_visible(&records, Some(Region::Europe), "");
    let json = to_json(&visible).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    let array = parsed.as_array().unwrap();
    assert_eq!(array.len(), 1);
    assert_eq!(array[0]["name"], "Finland");
    assert_eq!(array[0]["alpha3Code"], "FIN");
    assert_eq!(array[0]["population"], 5_491_817);
}

#[test]
fn test_json_empty_is_empty_array() {
    let json = to_json(&[]).unwrap();
    assert_eq!(json.trim(), "[]");
}
