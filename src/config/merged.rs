use std::path::PathBuf;

use super::job::Job;
use super::settings::Settings;

#[derive(Debug, Clone)]
pub struct MergedConfig {
    pub parallel_workers: usize,
    pub cache_dir: Option<PathBuf>,
    pub write_output: bool,
}

impl MergedConfig {
    /// JobのOption値がSomeならJobの値を、NoneならSettingsの値を使用する。
    ///
    /// キャッシュが無効な場合 `cache_dir` は None になる。
    pub fn new(settings: &Settings, job: &Job) -> Self {
        let use_cache = job.use_cache.unwrap_or(settings.use_cache);
        MergedConfig {
            parallel_workers: settings.parallel_workers,
            cache_dir: use_cache.then(|| settings.cache_dir.clone()),
            write_output: settings.write_output,
        }
    }
}
