/// Extension applied when the original name has none.
pub const DEFAULT_EXTENSION: &str = "docx";

/// Derives the output filename for a processed document: strip the
/// extension (last `.` plus trailing non-dot characters), prepend
/// `processed_`, re-append the original extension.
///
/// `report.docx` -> `processed_report.docx`
/// `notes`       -> `processed_notes.docx`
pub fn derive_output_name(original: &str) -> String {
    match original.rsplit_once('.') {
        Some((stem, ext)) if !ext.is_empty() => format!("processed_{}.{}", stem, ext),
        _ => {
            // A trailing dot carries no extension; drop it rather than
            // doubling up when the default is appended.
            let stem = original.trim_end_matches('.');
            format!("processed_{}.{}", stem, DEFAULT_EXTENSION)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_the_original_extension() {
        assert_eq!(derive_output_name("report.docx"), "processed_report.docx");
        assert_eq!(derive_output_name("letter.doc"), "processed_letter.doc");
    }

    #[test]
    fn defaults_to_docx_when_no_extension() {
        assert_eq!(derive_output_name("notes"), "processed_notes.docx");
    }

    #[test]
    fn trailing_dots_do_not_double_up() {
        assert_eq!(derive_output_name("file."), "processed_file.docx");
        assert_eq!(derive_output_name("file.."), "processed_file.docx");
    }

    #[test]
    fn only_the_last_extension_moves() {
        assert_eq!(
            derive_output_name("archive.backup.docx"),
            "processed_archive.backup.docx"
        );
    }
}
