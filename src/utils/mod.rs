pub mod config;
pub mod errors;

pub use config::{AppConfig, CommaPolicy, GeneratorConfig, LoggingConfig, TemplateConfig};
pub use errors::{LocalizationGenError, Result};
