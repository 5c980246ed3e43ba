// 書類単位処理: テキスト読込 → 正規化 → 分類 → フィールド抽出

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::cache::store::CacheStore;
use crate::document::classify::classify;
use crate::document::extract::extract_fields;
use crate::document::normalize::normalize;
use crate::document::reader::read_source_text;
use crate::document::{DocumentType, ExtractedFields};
use crate::error::TaxIntakeError;
use crate::tax::tables::TAX_YEAR;

/// Single document processing result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessedDocument {
    pub document_type: DocumentType,
    pub fields: ExtractedFields,
}

/// Outcome for one source document. Failures stay per-document.
#[derive(Debug)]
pub struct DocumentReport {
    pub source: PathBuf,
    pub result: crate::error::Result<ProcessedDocument>,
}

/// Normalize, classify and extract one document's raw text.
///
/// Returns `NoText` for absent or blank input, `UnrecognizedDocument` when no
/// form markers match, and `MalformedExtraction` when the form is recognized
/// but its amounts cannot be extracted exactly.
pub fn process_text(raw: Option<&str>) -> crate::error::Result<ProcessedDocument> {
    let text = normalize(raw)?;
    let document_type = classify(&text);
    tracing::debug!(%document_type, lines = text.lines().len(), "classified document");

    match extract_fields(document_type, &text, TAX_YEAR)? {
        ExtractedFields::Unknown { reason } => Err(TaxIntakeError::unrecognized(reason)),
        fields => Ok(ProcessedDocument {
            document_type,
            fields,
        }),
    }
}

/// Read a source document and process its text.
pub fn process_document(path: &Path, cache_store: Option<&CacheStore>) -> DocumentReport {
    let result =
        read_source_text(path, cache_store).and_then(|raw| process_text(Some(raw.as_str())));

    if let Err(e) = &result {
        tracing::warn!(path = %path.display(), error = %e, "document skipped");
    }

    DocumentReport {
        source: path.to_path_buf(),
        result,
    }
}
