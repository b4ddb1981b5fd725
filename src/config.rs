//! Logger configuration

use android_logger::Config;
use log::LevelFilter;

/// Tag every record is written under in logcat.
pub(crate) const DEFAULT_TAG: &str = "NativeLib";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LogConfig {
    pub(crate) tag: String,
    pub(crate) max_level: LevelFilter,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            tag: DEFAULT_TAG.to_string(),
            max_level: LevelFilter::Debug,
        }
    }
}

impl LogConfig {
    /// Build the `android_logger` configuration
    pub(crate) fn to_logger_config(&self) -> Config {
        Config::default()
            .with_max_level(self.max_level)
            .with_tag(self.tag.as_str())
    }
}
