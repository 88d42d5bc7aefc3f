use policybrief::infrastructure::text_processing::sanitize_extracted_text;

#[test]
fn given_hyphenated_line_break_when_sanitizing_then_word_is_rejoined() {
    let raw = "The policy intro-\nduces new tariffs.";
    assert_eq!(
        sanitize_extracted_text(raw),
        "The policy introduces new tariffs."
    );
}

#[test]
fn given_single_newlines_when_sanitizing_then_lines_join_with_spaces() {
    let raw = "line one\nline two\nline three";
    assert_eq!(sanitize_extracted_text(raw), "line one line two line three");
}

#[test]
fn given_blank_lines_when_sanitizing_then_paragraph_break_is_kept() {
    let raw = "paragraph one\n\n\nparagraph two";
    assert_eq!(
        sanitize_extracted_text(raw),
        "paragraph one\n\nparagraph two"
    );
}

#[test]
fn given_repeated_whitespace_when_sanitizing_then_collapsed() {
    let raw = "spaced    out\t\ttext";
    assert_eq!(sanitize_extracted_text(raw), "spaced out text");
}

#[test]
fn given_whitespace_only_input_when_sanitizing_then_empty() {
    assert_eq!(sanitize_extracted_text("  \n \t \n "), "");
}

#[test]
fn given_ligatures_when_sanitizing_then_normalized() {
    // U+FB01 LATIN SMALL LIGATURE FI
    assert_eq!(sanitize_extracted_text("ﬁne"), "fine");
}
