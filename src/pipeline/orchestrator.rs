// 全ジョブ実行

use crate::pipeline::job_runner::{JobConfig, JobResult, run_job};
use crate::session::Session;

/// Run multiple jobs, collecting results.
/// One job failure does NOT prevent other jobs from running.
///
/// A single session is reused; its totals and profile are cleared before each job.
pub fn run_all_jobs(jobs: &[JobConfig]) -> Vec<crate::error::Result<JobResult>> {
    let session = Session::new();
    jobs.iter()
        .map(|job| -> crate::error::Result<JobResult> {
            session.reset()?;
            session.clear_profile()?;
            run_job(job, &session)
        })
        .collect()
}
