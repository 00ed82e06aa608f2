//! Integration tests for the detection engine against the default catalog

use sift::detection::{DetectionEngine, PiiCategory};

fn engine() -> DetectionEngine {
    DetectionEngine::new().expect("Failed to create engine")
}

#[test]
fn test_empty_input_yields_empty_result() {
    let result = engine().detect("");
    assert!(result.is_empty());
    assert_eq!(result.total_matches(), 0);
}

#[test]
fn test_plain_word_yields_empty_result() {
    let result = engine().detect("banana");
    assert!(result.is_empty());
}

#[test]
fn test_email_detection() {
    let result = engine().detect("Contact me at jane.doe@example.com");

    assert_eq!(
        result.matches(PiiCategory::Personal, "Email"),
        Some(&["jane.doe@example.com".to_string()][..])
    );
    // The capitalized word is picked up by the permissive name detector
    assert_eq!(
        result.matches(PiiCategory::Personal, "Name"),
        Some(&["Contact".to_string()][..])
    );
}

#[test]
fn test_ssn_detection() {
    let result = engine().detect("My SSN is 123-45-6789");

    assert_eq!(
        result.matches(PiiCategory::Identification, "Social Security Number"),
        Some(&["123-45-6789".to_string()][..])
    );
}

#[test]
fn test_two_emails_in_first_occurrence_order() {
    let result = engine().detect("write zoe@example.org or amy@example.com today");

    assert_eq!(
        result.matches(PiiCategory::Personal, "Email"),
        Some(&["zoe@example.org".to_string(), "amy@example.com".to_string()][..])
    );
}

#[test]
fn test_card_text_reports_overlapping_detectors_independently() {
    let result = engine().detect("Card: 4111111111111111, CVV 123");

    assert_eq!(
        result.matches(PiiCategory::Financial, "Credit Card Number"),
        Some(&["4111111111111111".to_string()][..])
    );
    assert_eq!(
        result.matches(PiiCategory::Financial, "Bank Account Number"),
        Some(&["4111111111111111".to_string()][..])
    );
    assert_eq!(
        result.matches(PiiCategory::Financial, "Credit/Debit Card CVV"),
        Some(&["123".to_string()][..])
    );
}

#[test]
fn test_phone_number_also_matches_account_pattern() {
    let result = engine().detect("call 9876543210");

    assert_eq!(
        result.matches(PiiCategory::Personal, "Phone"),
        Some(&["9876543210".to_string()][..])
    );
    assert_eq!(
        result.matches(PiiCategory::Financial, "Bank Account Number"),
        Some(&["9876543210".to_string()][..])
    );
}

#[test]
fn test_date_matches_both_date_detectors() {
    let result = engine().detect("born 12/05/1990");

    assert_eq!(
        result.matches(PiiCategory::Personal, "Birth Date"),
        Some(&["12/05/1990".to_string()][..])
    );
    assert_eq!(
        result.matches(PiiCategory::Personal, "Date of Birth"),
        Some(&["12/05/1990".to_string()][..])
    );
}

#[test]
fn test_aadhaar_with_spaces() {
    let result = engine().detect("aadhaar 1234 5678 9012");

    assert_eq!(
        result.matches(PiiCategory::Identification, "Aadhaar Number"),
        Some(&["1234 5678 9012".to_string()][..])
    );
    // The grouped digits never form a 9+ digit run
    assert!(result
        .matches(PiiCategory::Financial, "Bank Account Number")
        .is_none());
}

#[test]
fn test_passport_also_matches_driver_license() {
    let result = engine().detect("passport no. A1234567");

    assert_eq!(
        result.matches(PiiCategory::Identification, "Passport Number"),
        Some(&["A1234567".to_string()][..])
    );
    assert_eq!(
        result.matches(PiiCategory::Identification, "Driver License"),
        Some(&["A1234567".to_string()][..])
    );
}

#[test]
fn test_medical_keywords() {
    let result = engine().detect("attached the Diagnosis and Treatment notes");

    assert_eq!(
        result.matches(PiiCategory::Medical, "Medical Report"),
        Some(&["Diagnosis".to_string(), "Treatment".to_string()][..])
    );
}

#[test]
fn test_multi_word_name_is_one_match() {
    let result = engine().detect("met Jane Doe yesterday");

    assert_eq!(
        result.matches(PiiCategory::Personal, "Name"),
        Some(&["Jane Doe".to_string()][..])
    );
}

#[test]
fn test_omission_invariant() {
    let text = "Jane Doe, jane@example.com, SSN 123-45-6789, card 4111111111111111";
    let result = engine().detect(text);

    assert!(!result.is_empty());
    for (_, detectors) in result.iter() {
        assert!(!detectors.is_empty());
        for (_, matches) in detectors {
            assert!(!matches.is_empty());
            for matched in matches {
                assert!(!matched.trim().is_empty());
            }
        }
    }
}

#[test]
fn test_determinism_across_calls() {
    let text = "Jane Doe <jane@example.com>, IFSC SBIN0001234, born 12/05/1990";
    let engine = engine();

    let first = engine.detect(text);
    let second = engine.detect(text);
    assert_eq!(first, second);

    let first_json = serde_json::to_string(&first).unwrap();
    let second_json = serde_json::to_string(&second).unwrap();
    assert_eq!(first_json, second_json);
}

#[test]
fn test_result_serialization_uses_reference_labels() {
    let result = engine().detect("jane@example.com and SSN 123-45-6789");
    let json = serde_json::to_value(&result).unwrap();

    assert!(json.get("Personal Information").is_some());
    assert!(json.get("Identification Information").is_some());
    assert_eq!(
        json["Identification Information"]["Social Security Number"][0],
        "123-45-6789"
    );
}

#[test]
fn test_non_ascii_text_is_valid_input() {
    let result = engine().detect("Grüße aus Köln, mail cafe@example.com ☕");

    assert_eq!(
        result.matches(PiiCategory::Personal, "Email"),
        Some(&["cafe@example.com".to_string()][..])
    );
}
