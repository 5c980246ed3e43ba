// ファイルシステムキャッシュ: hash → 抽出済みテキスト
//
// Stores and retrieves the text layer of PDF documents on disk, keyed by SHA-256 hash.
// Entries: text.txt, metadata.json

use crate::error::TaxIntakeError;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

/// 一時ディレクトリ名の衝突を避けるための連番。
static TMP_SEQ: AtomicU64 = AtomicU64::new(0);

/// キャッシュエントリの必須ファイル。
const CACHE_FILES: &[&str] = &["text.txt", "metadata.json"];

/// キャッシュに保存される抽出済みテキスト。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedText {
    pub text: String,
    pub page_count: u32,
}

/// ファイルシステムベースのキャッシュストア。
///
/// `<cache_dir>/<hex_hash>/` 以下にテキストとメタデータを格納する。
pub struct CacheStore {
    cache_dir: PathBuf,
}

/// metadata.json に保存するメタデータ。
#[derive(serde::Serialize, serde::Deserialize)]
struct CacheMetadata {
    cache_key: String,
    #[serde(default)]
    page_count: u32,
}

/// キャッシュキーが有効な SHA-256 hex 文字列であることを検証する。
///
/// 有効なキーは正確に64文字の小文字16進数([0-9a-f])である必要がある。
/// パストラバーサルや不正なディレクトリアクセスを防止する。
fn validate_cache_key(key: &str) -> crate::error::Result<()> {
    if key.len() == 64 && key.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')) {
        Ok(())
    } else {
        Err(TaxIntakeError::cache(format!(
            "invalid cache key: expected 64-character lowercase hex string, got '{}'",
            key
        )))
    }
}

impl CacheStore {
    /// 指定されたディレクトリをキャッシュルートとして新しい CacheStore を作成する。
    pub fn new(cache_dir: impl AsRef<Path>) -> Self {
        Self {
            cache_dir: cache_dir.as_ref().to_path_buf(),
        }
    }

    /// キャッシュキーからディレクトリパスを計算する。
    fn key_dir(&self, key: &str) -> crate::error::Result<PathBuf> {
        validate_cache_key(key)?;
        Ok(self.cache_dir.join(key))
    }

    /// 抽出済みテキストをキャッシュに保存する。
    ///
    /// キャッシュディレクトリが存在しない場合は自動的に作成する。
    /// 書き込みはアトミック: 一時ディレクトリにファイルを書き込み、
    /// 最後にrenameで最終パスに移動する。
    pub fn store(&self, key: &str, entry: &CachedText) -> crate::error::Result<()> {
        let dir = self.key_dir(key)?;
        let seq = TMP_SEQ.fetch_add(1, Ordering::Relaxed);
        let tmp_dir = dir.with_extension(format!("tmp{}-{seq}", std::process::id()));

        fs::create_dir_all(&tmp_dir).map_err(|e| TaxIntakeError::cache(e.to_string()))?;

        fs::write(tmp_dir.join("text.txt"), entry.text.as_bytes())
            .map_err(|e| TaxIntakeError::cache(e.to_string()))?;

        let metadata = CacheMetadata {
            cache_key: key.to_string(),
            page_count: entry.page_count,
        };
        let metadata_json = serde_json::to_string(&metadata)?;
        fs::write(tmp_dir.join("metadata.json"), metadata_json.as_bytes())
            .map_err(|e| TaxIntakeError::cache(e.to_string()))?;

        if dir.exists() {
            let _ = fs::remove_dir_all(&dir);
        }

        // 同じキーを並行して保存した場合は先に完了した方を残す
        if let Err(e) = fs::rename(&tmp_dir, &dir) {
            let _ = fs::remove_dir_all(&tmp_dir);
            if self.contains(key) {
                return Ok(());
            }
            return Err(TaxIntakeError::cache(e.to_string()));
        }

        Ok(())
    }

    /// キャッシュからテキストを取得する。キャッシュミスの場合は None を返す。
    pub fn retrieve(&self, key: &str) -> crate::error::Result<Option<CachedText>> {
        let dir = self.key_dir(key)?;
        if !dir.exists() {
            return Ok(None);
        }

        let metadata_str = fs::read_to_string(dir.join("metadata.json"))
            .map_err(|e| TaxIntakeError::cache(e.to_string()))?;
        let metadata: CacheMetadata = serde_json::from_str(&metadata_str)?;

        if metadata.cache_key != key {
            return Err(TaxIntakeError::cache(format!(
                "cache key mismatch: expected '{}', found '{}'",
                key, metadata.cache_key
            )));
        }

        let text = fs::read_to_string(dir.join("text.txt"))
            .map_err(|e| TaxIntakeError::cache(e.to_string()))?;

        Ok(Some(CachedText {
            text,
            page_count: metadata.page_count,
        }))
    }

    /// キャッシュキーが存在するか確認する。
    pub fn contains(&self, key: &str) -> bool {
        match self.key_dir(key) {
            Ok(dir) => CACHE_FILES.iter().all(|f| dir.join(f).exists()),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_cache_key_rejects_uppercase_hex() {
        let uppercase_key = "a".repeat(58) + "ABCDEF";
        assert_eq!(uppercase_key.len(), 64);
        assert!(validate_cache_key(&uppercase_key).is_err());
    }

    #[test]
    fn test_validate_cache_key_accepts_lowercase_hex() {
        let lowercase_key = "a".repeat(64);
        assert!(validate_cache_key(&lowercase_key).is_ok());
    }

    #[test]
    fn test_validate_cache_key_rejects_path_traversal() {
        assert!(validate_cache_key("../../etc/passwd").is_err());
    }
}
