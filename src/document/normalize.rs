use crate::document::ExtractedText;
use crate::error::TaxIntakeError;

/// 生テキストを行に分割し、前後の空白を除去して空行を捨てる。
///
/// 入力が無い、または空白しか含まない場合は [`TaxIntakeError::NoText`] を返す。
/// 「解析対象が無い」と「解析したがフィールドが0個」を呼び出し側で区別できるようにするため、
/// 空の `ExtractedText` は決して返さない。
pub fn normalize(raw: Option<&str>) -> crate::error::Result<ExtractedText> {
    let raw = raw.ok_or(TaxIntakeError::NoText)?;

    let lines: Vec<String> = raw
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect();

    if lines.is_empty() {
        return Err(TaxIntakeError::NoText);
    }

    Ok(ExtractedText { lines })
}
