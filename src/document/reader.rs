use std::path::Path;

use lopdf::Document;

use crate::cache::hash::compute_cache_key;
use crate::cache::store::{CacheStore, CachedText};
use crate::error::TaxIntakeError;

pub struct PdfReader {
    doc: Document,
}

impl PdfReader {
    /// メモリ上のPDFバイト列からPdfReaderを作成する。
    pub fn from_bytes(bytes: &[u8]) -> crate::error::Result<Self> {
        let doc = Document::load_mem(bytes)?;
        Ok(Self { doc })
    }

    /// ページ数を返す。
    pub fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }

    /// 全ページのテキストレイヤーを抽出し、ページ順に改行で連結して返す。
    pub fn extract_text(&self) -> crate::error::Result<String> {
        let pages: Vec<u32> = self.doc.get_pages().keys().copied().collect();
        if pages.is_empty() {
            return Err(TaxIntakeError::pdf_read("PDF has no pages"));
        }

        let mut text = String::new();
        for page_num in pages {
            let page_text = self.doc.extract_text(&[page_num])?;
            text.push_str(&page_text);
            if !text.ends_with('\n') {
                text.push('\n');
            }
        }
        Ok(text)
    }
}

/// 入力書類の形式。拡張子から判定する。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// テキストレイヤー付きPDF
    Pdf,
    /// 外部OCRで抽出済みのプレーンテキスト
    Text,
}

impl SourceFormat {
    pub fn from_path(path: &Path) -> crate::error::Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("pdf") => Ok(SourceFormat::Pdf),
            Some("txt") => Ok(SourceFormat::Text),
            _ => Err(TaxIntakeError::config(format!(
                "unsupported document format: {} (expected .pdf or .txt)",
                path.display()
            ))),
        }
    }
}

/// 書類ファイルから生テキストを読み込む。
///
/// PDFの場合はキャッシュストアが与えられていればファイル内容のSHA-256で検索し、
/// ヒットすれば抽出済みテキストを返す。ミスの場合は抽出後に保存する。
pub fn read_source_text(
    path: &Path,
    cache_store: Option<&CacheStore>,
) -> crate::error::Result<String> {
    match SourceFormat::from_path(path)? {
        SourceFormat::Text => Ok(std::fs::read_to_string(path)?),
        SourceFormat::Pdf => {
            let bytes = std::fs::read(path)?;
            let cache_key = compute_cache_key(&bytes);

            if let Some(store) = cache_store
                && let Some(cached) = store.retrieve(&cache_key)?
            {
                tracing::debug!(path = %path.display(), key = %cache_key, "text cache hit");
                return Ok(cached.text);
            }

            let reader = PdfReader::from_bytes(&bytes)?;
            let text = reader.extract_text()?;

            if let Some(store) = cache_store {
                tracing::debug!(path = %path.display(), key = %cache_key, "text cache miss, storing");
                store.store(
                    &cache_key,
                    &CachedText {
                        text: text.clone(),
                        page_count: reader.page_count(),
                    },
                )?;
            }

            Ok(text)
        }
    }
}
