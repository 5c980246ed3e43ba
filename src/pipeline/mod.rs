pub mod document_processor;
pub mod job_runner;
pub mod orchestrator;
