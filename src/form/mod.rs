pub mod projector;

pub use projector::{FormFields, project};
