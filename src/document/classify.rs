use crate::document::{DocumentType, ExtractedText};

/// 未対応書類に対してユーザーへ返す固定メッセージ。
pub const UNSUPPORTED_DOCUMENT_MESSAGE: &str = "Please upload a W-2, 1099-NEC, or a 1099-INT form";

const WAGE_STATEMENT_MARKERS: &[&str] = &["W-2", "Wage and Tax Statement"];

const NONEMPLOYEE_COMPENSATION_MARKERS: &[&str] = &["1099-NEC", "Nonemployee Compensation"];

/// `$` はどの書類にも現れるため最後に判定する。利息の抽出も同じ記号を起点にする。
const INTEREST_INCOME_MARKERS: &[&str] = &["1099-INT", "Interest Income", "$"];

/// Markers are checked most-specific first; the first matching type wins.
const CLASSIFICATION_ORDER: &[(DocumentType, &[&str])] = &[
    (DocumentType::WageStatement, WAGE_STATEMENT_MARKERS),
    (
        DocumentType::NonemployeeCompensation,
        NONEMPLOYEE_COMPENSATION_MARKERS,
    ),
    (DocumentType::InterestIncome, INTEREST_INCOME_MARKERS),
];

/// Classify a normalized document by case-sensitive keyword markers.
pub fn classify(text: &ExtractedText) -> DocumentType {
    CLASSIFICATION_ORDER
        .iter()
        .find(|(_, markers)| markers.iter().any(|m| text.contains(m)))
        .map(|(doc_type, _)| *doc_type)
        .unwrap_or(DocumentType::Unknown)
}
