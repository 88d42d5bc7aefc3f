#[derive(Debug, Clone, PartialEq)]
pub struct UploadedDocument {
    pub filename: String,
    pub content_type: ContentType,
    pub size_bytes: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    Pdf,
}

impl ContentType {
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            "application/pdf" => Some(Self::Pdf),
            _ => None,
        }
    }

    pub fn as_mime(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
        }
    }
}

impl UploadedDocument {
    pub fn new(filename: String, content_type: ContentType, size_bytes: u64) -> Self {
        Self {
            filename,
            content_type,
            size_bytes,
        }
    }

    /// Filename without its final extension, used as the summary title.
    pub fn title(&self) -> String {
        let stem = match self.filename.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => stem,
            _ => self.filename.as_str(),
        };
        let trimmed = stem.trim();
        if trimmed.is_empty() {
            "Untitled document".to_string()
        } else {
            trimmed.to_string()
        }
    }
}
