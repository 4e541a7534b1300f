use chrono::{DateTime, Utc};

use super::report::ValidationReport;
use super::types::{FileFormat, FileStatus, RecordId};

/// Payload held by a record: decoded text for validated formats, raw bytes
/// for passthrough formats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    Text(String),
    Binary(Vec<u8>),
}

impl FileContent {
    /// Decoded text, or `None` for binary passthrough content.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Binary(_) => None,
        }
    }

    pub fn byte_len(&self) -> usize {
        match self {
            Self::Text(text) => text.len(),
            Self::Binary(bytes) => bytes.len(),
        }
    }
}

/// One ingested file.
///
/// Created only by the ingestion pipeline and immutable until removed from
/// the registry; edits require removal and re-ingestion.
#[derive(Debug, Clone)]
pub struct FileRecord {
    pub id: RecordId,
    /// Original filename, used for extension-based format inference.
    pub name: String,
    pub size_bytes: u64,
    pub format: FileFormat,
    pub content: FileContent,
    /// Computed at ingestion time; never recomputed.
    pub report: ValidationReport,
    pub uploaded_at: DateTime<Utc>,
}

impl FileRecord {
    /// `Warning` marks a registered file whose content yielded no usable
    /// coordinate data.
    pub fn status(&self) -> FileStatus {
        if self.report.is_valid {
            FileStatus::Valid
        } else {
            FileStatus::Warning
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_report(report: ValidationReport) -> FileRecord {
        FileRecord {
            id: RecordId::from_raw(1),
            name: "1abc.pdb".to_string(),
            size_bytes: 12,
            format: FileFormat::Pdb,
            content: FileContent::Text("ATOM\n".to_string()),
            report,
            uploaded_at: Utc::now(),
        }
    }

    #[test]
    fn status_is_valid_when_report_is_valid() {
        let record = record_with_report(ValidationReport {
            is_valid: true,
            atom_count: 1,
            ..ValidationReport::default()
        });

        assert_eq!(record.status(), FileStatus::Valid);
    }

    #[test]
    fn status_is_warning_when_report_is_invalid() {
        let record = record_with_report(ValidationReport {
            is_valid: false,
            errors: vec!["no coordinate records found".to_string()],
            ..ValidationReport::default()
        });

        assert_eq!(record.status(), FileStatus::Warning);
    }

    #[test]
    fn content_as_text_returns_text_variant_only() {
        let text = FileContent::Text("ATOM".to_string());
        let binary = FileContent::Binary(vec![0, 159, 146]);

        assert_eq!(text.as_text(), Some("ATOM"));
        assert!(binary.as_text().is_none());
    }

    #[test]
    fn content_byte_len_covers_both_variants() {
        assert_eq!(FileContent::Text("ATOM".to_string()).byte_len(), 4);
        assert_eq!(FileContent::Binary(vec![1, 2, 3]).byte_len(), 3);
    }
}
