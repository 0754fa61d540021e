use crate::utils::errors::{LocalizationGenError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT_PATH: &str = "GARbro.en-US.csv";
pub const DEFAULT_OUTPUT_PATH: &str = "../../GameRes/Main/LocalizationEN.cs";
pub const DEFAULT_CONFIG_PATH: &str = "locgen.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub generator: GeneratorConfig,
    pub template: TemplateConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    /// Fail on short data rows instead of skipping them.
    pub strict: bool,
    pub comma_policy: CommaPolicy,
}

/// Decides which emitted entries get a trailing `,`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommaPolicy {
    /// Comma after every entry except the one from the last source row,
    /// counting skipped rows. A skipped final row leaves a dangling comma.
    #[default]
    SourceIndex,
    /// Comma after every entry except the last one actually emitted.
    LastEmitted,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    pub class_name: String,
    pub entry_type: String,
    pub size_constant: String,
    /// File named in the comment next to the size constant.
    pub default_csv_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            strict: false,
            comma_policy: CommaPolicy::SourceIndex,
        }
    }
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            class_name: "Localization".to_string(),
            entry_type: "LocalizationEntry".to_string(),
            size_constant: "DEFAULT_CSV_SIZE".to_string(),
            default_csv_name: DEFAULT_INPUT_PATH.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

impl AppConfig {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| LocalizationGenError::ConfigError(format!("{}: {}", path.display(), e)))?;
        Self::parse(path, &content)
    }

    /// Loads `path` if it exists. Only a missing file falls back to defaults;
    /// an unreadable or malformed one is an error.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        match std::fs::read_to_string(path) {
            Ok(content) => Self::parse(path, &content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(LocalizationGenError::ConfigError(format!(
                "{}: {}",
                path.display(),
                e
            ))),
        }
    }

    fn parse(path: &Path, content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| LocalizationGenError::ConfigError(format!("{}: {}", path.display(), e)))
    }
}
