use policybrief::domain::Language;

#[test]
fn given_supported_identifiers_when_parsing_then_all_round_trip() {
    for language in Language::ALL {
        let parsed: Language = language.as_str().parse().unwrap();
        assert_eq!(parsed, language);
    }
}

#[test]
fn given_unknown_language_when_parsing_then_fails() {
    assert!("Klingon".parse::<Language>().is_err());
    assert!("".parse::<Language>().is_err());
}

#[test]
fn given_wrong_case_when_parsing_then_fails() {
    // Identifiers are case-sensitive by contract.
    assert!("hindi".parse::<Language>().is_err());
    assert!("HINDI".parse::<Language>().is_err());
}

#[test]
fn given_language_when_displayed_then_matches_identifier() {
    assert_eq!(Language::Malayalam.to_string(), "Malayalam");
}

#[test]
fn given_language_when_serialized_then_uses_identifier() {
    let json = serde_json::to_string(&Language::Urdu).unwrap();
    assert_eq!(json, "\"Urdu\"");
}
