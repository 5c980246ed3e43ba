use serde::Deserialize;

use crate::session::profile::FilerProfile;

#[derive(Debug, Clone, Deserialize)]
pub struct JobFile {
    pub jobs: Vec<Job>,
}

/// 1申告者分のジョブ。書類一覧・申告者情報・出力先を持つ。
#[derive(Debug, Clone, Deserialize)]
pub struct Job {
    #[serde(deserialize_with = "deserialize_documents")]
    pub documents: Vec<String>,
    pub profile: Option<FilerProfile>,
    pub output: Option<String>,
    pub use_cache: Option<bool>,
}

impl JobFile {
    pub fn from_yaml(yaml: &str) -> crate::error::Result<Self> {
        serde_yml::from_str(yaml).map_err(|e| {
            crate::error::TaxIntakeError::config(format!("Failed to parse job YAML: {e}"))
        })
    }
}

/// serdeのdeserialize_withで使用する書類リストデシリアライザ。空リストと空文字列は拒否する。
fn deserialize_documents<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let docs = Vec::<String>::deserialize(deserializer)?;
    if docs.is_empty() {
        return Err(serde::de::Error::custom("documents cannot be empty"));
    }
    if docs.iter().any(|d| d.trim().is_empty()) {
        return Err(serde::de::Error::custom("document path cannot be empty"));
    }
    Ok(docs)
}
