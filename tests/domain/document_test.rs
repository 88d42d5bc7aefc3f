use policybrief::domain::{ContentType, UploadedDocument};

#[test]
fn given_pdf_mime_when_resolving_content_type_then_succeeds() {
    assert_eq!(
        ContentType::from_mime("application/pdf"),
        Some(ContentType::Pdf)
    );
    assert_eq!(ContentType::Pdf.as_mime(), "application/pdf");
}

#[test]
fn given_other_mime_when_resolving_content_type_then_fails() {
    assert_eq!(ContentType::from_mime("text/plain"), None);
    assert_eq!(ContentType::from_mime("application/octet-stream"), None);
}

#[test]
fn given_filename_with_extension_when_deriving_title_then_uses_stem() {
    let doc = UploadedDocument::new("farm-policy-2024.pdf".to_string(), ContentType::Pdf, 10);
    assert_eq!(doc.title(), "farm-policy-2024");
}

#[test]
fn given_filename_without_extension_when_deriving_title_then_uses_whole_name() {
    let doc = UploadedDocument::new("farm-policy".to_string(), ContentType::Pdf, 10);
    assert_eq!(doc.title(), "farm-policy");
}

#[test]
fn given_blank_filename_when_deriving_title_then_falls_back() {
    let doc = UploadedDocument::new("  .pdf".to_string(), ContentType::Pdf, 10);
    assert_eq!(doc.title(), "Untitled document");
}
