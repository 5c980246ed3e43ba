pub mod classify;
pub mod extract;
pub mod normalize;
pub mod reader;

use std::fmt;

use serde::Serialize;

/// 書類の種別。分類時に一度だけ決まり、以後変わらない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    /// W-2
    WageStatement,
    /// 1099-NEC
    NonemployeeCompensation,
    /// 1099-INT
    InterestIncome,
    Unknown,
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DocumentType::WageStatement => "W-2",
            DocumentType::NonemployeeCompensation => "1099-NEC",
            DocumentType::InterestIncome => "1099-INT",
            DocumentType::Unknown => "unknown document",
        };
        f.write_str(name)
    }
}

/// 書類種別ごとの抽出結果。
///
/// 成功した抽出は常にその種別が要求する個数のフィールドを持つ。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ExtractedFields {
    WageStatement { wages: f64, federal_withheld: f64 },
    NonemployeeCompensation { compensation: f64 },
    InterestIncome { interest: f64 },
    Unknown { reason: String },
}

impl ExtractedFields {
    pub fn document_type(&self) -> DocumentType {
        match self {
            ExtractedFields::WageStatement { .. } => DocumentType::WageStatement,
            ExtractedFields::NonemployeeCompensation { .. } => {
                DocumentType::NonemployeeCompensation
            }
            ExtractedFields::InterestIncome { .. } => DocumentType::InterestIncome,
            ExtractedFields::Unknown { .. } => DocumentType::Unknown,
        }
    }
}

/// One document's text split into trimmed, non-empty lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    lines: Vec<String>,
}

impl ExtractedText {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Whether any line contains `needle` (case-sensitive).
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.contains(needle))
    }

    /// Index of the first line containing any of `needles`.
    pub(crate) fn find_anchor(&self, needles: &[&str]) -> Option<usize> {
        self.lines
            .iter()
            .position(|l| needles.iter().any(|n| l.contains(n)))
    }
}
