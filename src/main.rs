use std::path::{Path, PathBuf};
use std::process::ExitCode;

use tax_intake::config::job::JobFile;
use tax_intake::config::merged::MergedConfig;
use tax_intake::config::{self};
use tax_intake::pipeline::job_runner::JobConfig;
use tax_intake::pipeline::orchestrator::run_all_jobs;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.is_empty() || args.iter().any(|a| a == "--help" || a == "-h") {
        eprintln!("Usage: tax_intake <jobs.yaml>...");
        eprintln!("  Extract W-2, 1099-NEC and 1099-INT amounts and compute the tax result.");
        return if args.is_empty() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        };
    }

    if args.iter().any(|a| a == "--version" || a == "-V") {
        eprintln!("tax_intake {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    let mut job_configs: Vec<JobConfig> = Vec::new();

    for job_file_arg in &args {
        let job_file_path = Path::new(job_file_arg);

        // Load settings from the same directory as the job file.
        let settings = match config::load_settings_for_job(job_file_path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("ERROR: Failed to load settings for {job_file_arg}: {e}");
                return ExitCode::FAILURE;
            }
        };

        let yaml_content = match std::fs::read_to_string(job_file_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("ERROR: Failed to read job file {job_file_arg}: {e}");
                return ExitCode::FAILURE;
            }
        };

        let job_file = match JobFile::from_yaml(&yaml_content) {
            Ok(jf) => jf,
            Err(e) => {
                eprintln!("ERROR: Failed to parse job file {job_file_arg}: {e}");
                return ExitCode::FAILURE;
            }
        };

        // Resolve job file directory for relative paths.
        let job_dir = job_file_path
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf();

        for job in &job_file.jobs {
            let merged = MergedConfig::new(&settings, job);

            let output_path = if merged.write_output {
                job.output.as_deref().map(|o| resolve_path(&job_dir, o))
            } else {
                None
            };

            job_configs.push(JobConfig {
                documents: job
                    .documents
                    .iter()
                    .map(|d| resolve_path(&job_dir, d))
                    .collect(),
                profile: job.profile,
                output_path,
                cache_dir: merged.cache_dir.map(|c| resolve_path(&job_dir, c)),
                parallel_workers: merged.parallel_workers,
            });
        }
    }

    let results = run_all_jobs(&job_configs);

    let mut has_error = false;
    for (i, result) in results.iter().enumerate() {
        match result {
            Ok(job_result) => {
                for doc in job_result.failed_documents() {
                    if let Err(e) = &doc.result {
                        eprintln!("SKIP: {}: {e}", doc.source.display());
                    }
                }
                let tax = &job_result.report.result;
                eprintln!(
                    "OK: job {} ({} of {} documents), tax owed {:.2}, refund/due {:.2}",
                    i + 1,
                    job_result.documents_accumulated(),
                    job_result.documents.len(),
                    tax.tax_owed,
                    tax.refund_or_amount_due
                );
                if let Some(path) = &job_result.output_path {
                    eprintln!("  -> {}", path.display());
                }
            }
            Err(e) => {
                eprintln!("ERROR: job {}: {e}", i + 1);
                has_error = true;
            }
        }
    }

    if has_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Resolve a potentially relative path against a base directory.
/// If the path is already absolute, return it as-is.
fn resolve_path(base_dir: &Path, path: impl AsRef<Path>) -> PathBuf {
    let p = path.as_ref();
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        base_dir.join(p)
    }
}
