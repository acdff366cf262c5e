pub mod cli;
pub mod config;
pub mod error;
pub mod layout;
pub mod loader;
pub mod render;
pub mod types;

pub use config::RenderSettings;
pub use error::Error;
pub use types::{CoverLetterDocument, ResumeDocument};
