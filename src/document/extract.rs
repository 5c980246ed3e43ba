// Anchor-then-adjacent-line field extraction, one strategy per document type.
//
// Every strategy filters the value line down to candidate tokens and demands an
// exact token count. Anything else is a MalformedExtraction carrying the raw line;
// amounts are never defaulted to zero.

use crate::document::classify::UNSUPPORTED_DOCUMENT_MESSAGE;
use crate::document::{DocumentType, ExtractedFields, ExtractedText};
use crate::error::TaxIntakeError;

/// W-2 label fragments. The line after the first match holds the amounts.
const WAGE_STATEMENT_ANCHORS: &[&str] = &[
    "Employer identification number",
    "Wages, tips, other compensation",
    "Federal income tax withheld",
];

/// 1099-NEC copy designations. The line after the first match holds the amount.
const NONEMPLOYEE_COMPENSATION_ANCHORS: &[&str] = &["Copy B", "Copy 1", "Copy 2"];

const CURRENCY_SYMBOL: char = '$';

/// 書類種別に応じた抽出戦略を実行する。
///
/// `tax_year` は利息明細の金額行から年度トークンを取り除くために使う。
/// `Unknown` の場合は理由付きの `ExtractedFields::Unknown` を返す。
pub fn extract_fields(
    document_type: DocumentType,
    text: &ExtractedText,
    tax_year: u32,
) -> crate::error::Result<ExtractedFields> {
    match document_type {
        DocumentType::WageStatement => extract_wage_statement(text),
        DocumentType::NonemployeeCompensation => extract_nonemployee_compensation(text),
        DocumentType::InterestIncome => extract_interest_income(text, tax_year),
        DocumentType::Unknown => Ok(ExtractedFields::Unknown {
            reason: UNSUPPORTED_DOCUMENT_MESSAGE.to_string(),
        }),
    }
}

/// W-2: the line after the anchor must contain exactly two non-identifier
/// tokens, wages then federal income tax withheld.
pub fn extract_wage_statement(text: &ExtractedText) -> crate::error::Result<ExtractedFields> {
    let doc_type = DocumentType::WageStatement;
    let line = value_line_after_anchor(text, WAGE_STATEMENT_ANCHORS, doc_type)?;

    let tokens: Vec<&str> = line
        .split_whitespace()
        .filter(|t| !t.contains('-'))
        .collect();

    let [wages, withheld] = tokens[..] else {
        return Err(TaxIntakeError::malformed(
            doc_type,
            Some(line),
            format!("expected 2 amounts, found {}", tokens.len()),
        ));
    };

    Ok(ExtractedFields::WageStatement {
        wages: parse_amount(wages, doc_type, line)?,
        federal_withheld: parse_amount(withheld, doc_type, line)?,
    })
}

/// 1099-NEC: the line after the copy designation must contain exactly one
/// token once identifiers and currency symbols are dropped.
pub fn extract_nonemployee_compensation(
    text: &ExtractedText,
) -> crate::error::Result<ExtractedFields> {
    let doc_type = DocumentType::NonemployeeCompensation;
    let line = value_line_after_anchor(text, NONEMPLOYEE_COMPENSATION_ANCHORS, doc_type)?;

    let tokens: Vec<&str> = line
        .split_whitespace()
        .filter(|t| !t.contains('-') && !t.contains(CURRENCY_SYMBOL))
        .collect();

    let [compensation] = tokens[..] else {
        return Err(TaxIntakeError::malformed(
            doc_type,
            Some(line),
            format!("expected 1 amount, found {}", tokens.len()),
        ));
    };

    Ok(ExtractedFields::NonemployeeCompensation {
        compensation: parse_amount(compensation, doc_type, line)?,
    })
}

/// 1099-INT: the first line with a currency symbol holds the amount itself,
/// after the symbol. A trailing tax-year token is dropped once.
pub fn extract_interest_income(
    text: &ExtractedText,
    tax_year: u32,
) -> crate::error::Result<ExtractedFields> {
    let doc_type = DocumentType::InterestIncome;
    let Some(idx) = text
        .lines()
        .iter()
        .position(|l| l.contains(CURRENCY_SYMBOL))
    else {
        return Err(TaxIntakeError::malformed(
            doc_type,
            None,
            "no line with a currency symbol",
        ));
    };
    let line = text.lines()[idx].as_str();

    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(symbol_pos) = tokens.iter().position(|t| t.contains(CURRENCY_SYMBOL)) else {
        return Err(TaxIntakeError::malformed(
            doc_type,
            Some(line),
            "currency symbol not found in tokens",
        ));
    };

    // "$150.00" の場合は記号の後ろも候補に含める
    let mut candidates: Vec<&str> = Vec::new();
    if let Some((_, rest)) = tokens[symbol_pos].split_once(CURRENCY_SYMBOL)
        && !rest.is_empty()
    {
        candidates.push(rest);
    }
    candidates.extend(tokens[symbol_pos + 1..].iter().copied());
    candidates.retain(|t| is_numeric_like(t));

    let year = tax_year.to_string();
    if candidates.last().is_some_and(|t| *t == year) {
        candidates.pop();
    }

    let [interest] = candidates[..] else {
        return Err(TaxIntakeError::malformed(
            doc_type,
            Some(line),
            format!("expected 1 amount, found {}", candidates.len()),
        ));
    };

    Ok(ExtractedFields::InterestIncome {
        interest: parse_amount(interest, doc_type, line)?,
    })
}

/// Locate the first anchor line and return the line right after it.
fn value_line_after_anchor<'a>(
    text: &'a ExtractedText,
    anchors: &[&str],
    doc_type: DocumentType,
) -> crate::error::Result<&'a str> {
    let idx = text
        .find_anchor(anchors)
        .ok_or_else(|| TaxIntakeError::malformed(doc_type, None, "anchor line not found"))?;

    text.lines()
        .get(idx + 1)
        .map(String::as_str)
        .ok_or_else(|| {
            TaxIntakeError::malformed(
                doc_type,
                Some(text.lines()[idx].as_str()),
                "no value line after anchor",
            )
        })
}

/// Digits with optional decimal points and thousands separators. No signs.
fn is_numeric_like(token: &str) -> bool {
    token.bytes().any(|b| b.is_ascii_digit())
        && token
            .bytes()
            .all(|b| b.is_ascii_digit() || b == b'.' || b == b',')
}

fn parse_amount(token: &str, doc_type: DocumentType, line: &str) -> crate::error::Result<f64> {
    let cleaned = token.replace(',', "");
    match cleaned.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err(TaxIntakeError::malformed(
            doc_type,
            Some(line),
            format!("unparseable amount '{token}'"),
        )),
    }
}
