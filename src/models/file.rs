/// MIME type of a `.docx` document, also used for download responses.
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// MIME type of a legacy `.doc` document.
pub const DOC_MIME: &str = "application/msword";

/// One user-selected file, immutable once selected.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub name: String,
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            bytes,
        }
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Only the two Word document types are accepted for submission.
    pub fn is_word_document(&self) -> bool {
        self.media_type == DOCX_MIME || self.media_type == DOC_MIME
    }
}

/// The processed result for one submitted file. Never mutated after
/// creation; `encoded_data` decodes to exactly the bytes the backend
/// returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedArtifact {
    pub name: String,
    pub encoded_data: String,
}

impl ProcessedArtifact {
    pub fn new(name: impl Into<String>, encoded_data: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            encoded_data: encoded_data.into(),
        }
    }
}
