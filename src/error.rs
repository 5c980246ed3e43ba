use thiserror::Error;

use crate::document::DocumentType;

#[derive(Debug, Error)]
pub enum TaxIntakeError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("PDF read error: {0}")]
    PdfReadError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Session error: {0}")]
    SessionError(String),

    #[error("Output write error: {0}")]
    OutputError(String),

    /// 入力テキストが存在しない、または空白のみ。
    #[error("No text to parse")]
    NoText,

    /// テキストはあるが、どのフォーム種別のキーワードにも一致しない。
    #[error("{0}")]
    UnrecognizedDocument(String),

    /// フォーム種別は判定できたが、アンカー行から期待した数の金額を取り出せなかった。
    #[error("Malformed {document_type} ({reason}){}", display_line(.line))]
    MalformedExtraction {
        document_type: DocumentType,
        line: Option<String>,
        reason: String,
    },

    #[error("Filer profile has not been submitted")]
    MissingProfile,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

fn display_line(line: &Option<String>) -> String {
    match line {
        Some(l) => format!(": '{l}'"),
        None => String::new(),
    }
}

/// Generates factory methods for [`TaxIntakeError`] variants that wrap a `String`.
macro_rules! error_constructors {
    ($(
        $(#[doc = $doc:expr])*
        $method:ident => $variant:ident
    ),* $(,)?) => {
        impl TaxIntakeError {
            $(
                $(#[doc = $doc])*
                pub fn $method(msg: impl Into<String>) -> Self {
                    Self::$variant(msg.into())
                }
            )*
        }
    };
}

error_constructors! {
    /// Create a configuration error.
    config => ConfigError,
    /// Create a PDF read error.
    pdf_read => PdfReadError,
    /// Create a cache error.
    cache => CacheError,
    /// Create a session state error.
    session => SessionError,
    /// Create an output write error.
    output => OutputError,
    /// Create an unrecognized document error.
    unrecognized => UnrecognizedDocument,
}

impl TaxIntakeError {
    /// Create a malformed extraction error for `document_type`.
    pub fn malformed(
        document_type: DocumentType,
        line: Option<&str>,
        reason: impl Into<String>,
    ) -> Self {
        Self::MalformedExtraction {
            document_type,
            line: line.map(str::to_string),
            reason: reason.into(),
        }
    }
}

impl From<lopdf::Error> for TaxIntakeError {
    fn from(e: lopdf::Error) -> Self {
        Self::PdfReadError(e.to_string())
    }
}

impl From<serde_json::Error> for TaxIntakeError {
    fn from(e: serde_json::Error) -> Self {
        Self::CacheError(e.to_string())
    }
}

impl From<serde_yml::Error> for TaxIntakeError {
    fn from(e: serde_yml::Error) -> Self {
        Self::ConfigError(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TaxIntakeError>;
