// 書類バイト列の SHA-256
//
// Computes a cache key from the raw bytes of a source document.
// The key is a SHA-256 hash encoded as a lowercase hexadecimal string.

use sha2::{Digest, Sha256};

/// 書類ファイルのバイト列からキャッシュキー（SHA-256ハッシュ）を計算する。
///
/// 同じ内容のPDFはファイル名やパスが異なっても同じキーになる。
pub fn compute_cache_key(document_bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(document_bytes);
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_hash() {
        assert_eq!(
            compute_cache_key(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
