//! Configuration file loading for dcf-prep
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `DCF_PREP_*` environment variables (`__` separates section and key)
//! 2. `--config <path>` specified file
//! 3. Project root: `./dcf-prep.toml` or `./.dcf-prep.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/dcf-prep/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, ConfigValidationError, DEFAULT_BANK_FILE, FileConfig, FileExamConfig,
    FileOutputConfig, FileOutputFormat, FilePresetConfig, FileValidationConfig,
};
pub use loader::ConfigLoader;
