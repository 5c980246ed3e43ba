pub mod cache;
pub mod config;
pub mod document;
pub mod error;
pub mod form;
pub mod pipeline;
pub mod session;
pub mod tax;
