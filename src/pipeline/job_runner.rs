// ジョブ単位: 書類読込・抽出（並列） -> 累計（逐次） -> 税額計算 -> フォーム出力

use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::cache::store::CacheStore;
use crate::error::TaxIntakeError;
use crate::form::{FormFields, project};
use crate::pipeline::document_processor::{DocumentReport, process_document};
use crate::session::profile::FilerProfile;
use crate::session::{Session, TaxReport};

/// Configuration for a single job.
#[derive(Debug, Clone)]
pub struct JobConfig {
    pub documents: Vec<PathBuf>,
    pub profile: Option<FilerProfile>,
    pub output_path: Option<PathBuf>,
    pub cache_dir: Option<PathBuf>,
    /// 0 uses the global rayon pool.
    pub parallel_workers: usize,
}

/// Result of processing a single job.
#[derive(Debug)]
pub struct JobResult {
    pub documents: Vec<DocumentReport>,
    pub report: TaxReport,
    pub form_fields: FormFields,
    pub output_path: Option<PathBuf>,
}

impl JobResult {
    /// Documents whose amounts were added to the totals.
    pub fn documents_accumulated(&self) -> usize {
        self.documents.iter().filter(|d| d.result.is_ok()).count()
    }

    pub fn failed_documents(&self) -> impl Iterator<Item = &DocumentReport> {
        self.documents.iter().filter(|d| d.result.is_err())
    }
}

/// Run a single filer job through the 4-phase pipeline.
///
/// Phase A: Read + classify + extract every document (rayon parallel)
/// Phase B: Accumulate successful documents in job order (sequential)
/// Phase C: Install the profile and compute tax from one session snapshot
/// Phase D: Project form fields and write them as JSON
pub fn run_job(config: &JobConfig, session: &Session) -> crate::error::Result<JobResult> {
    // --- Phase A: extraction (pure per-document work) ---
    let cache_store = config.cache_dir.as_ref().map(CacheStore::new);
    let extract_all = || -> Vec<DocumentReport> {
        config
            .documents
            .par_iter()
            .map(|path| process_document(path, cache_store.as_ref()))
            .collect()
    };

    let documents = if config.parallel_workers > 0 {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.parallel_workers)
            .build()
            .map_err(|e| TaxIntakeError::config(format!("Failed to build worker pool: {e}")))?;
        pool.install(extract_all)
    } else {
        extract_all()
    };

    // --- Phase B: accumulation (one writer, document order) ---
    for doc in &documents {
        if let Ok(processed) = &doc.result {
            session.accumulate(&processed.fields)?;
        }
    }

    // --- Phase C: tax computation ---
    if let Some(profile) = config.profile {
        session.set_profile(profile)?;
    }
    let report = session.compute_tax()?;

    // --- Phase D: form projection ---
    let form_fields = project(&report);
    if let Some(path) = &config.output_path {
        write_form_fields(path, &form_fields)?;
    }

    Ok(JobResult {
        documents,
        report,
        form_fields,
        output_path: config.output_path.clone(),
    })
}

/// Write projected form fields as pretty-printed JSON.
pub fn write_form_fields(path: &Path, fields: &FormFields) -> crate::error::Result<()> {
    let json = serde_json::to_string_pretty(fields)
        .map_err(|e| TaxIntakeError::output(e.to_string()))?;
    std::fs::write(path, json)
        .map_err(|e| TaxIntakeError::output(format!("{}: {e}", path.display())))?;
    Ok(())
}
