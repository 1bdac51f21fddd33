//! Output configuration

use primer_core::kprint::{self, LogLevel};
use primer_core::{env_get, env_get_bool, env_get_list, kdebug, PrimerError, PrimerResult};

use crate::lessons;

/// Configuration for logging and the tour's lesson list
///
/// Only stderr is affected; lesson output on stdout is fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimerConfig {
    /// Minimum level printed by the k* macros
    pub log_level: LogLevel,

    /// Flush stderr after every log line
    pub flush: bool,

    /// Prefix log lines with microseconds since start
    pub timestamps: bool,

    /// Lessons for the tour to run (empty means all)
    pub lessons: Vec<String>,
}

impl Default for PrimerConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            flush: false,
            timestamps: false,
            lessons: Vec::new(),
        }
    }
}

impl PrimerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `PRIMER_LOG_LEVEL`, `PRIMER_FLUSH_EPRINT`, `PRIMER_KPRINT_TIME`
    /// and `PRIMER_TOUR`, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            log_level: env_get("PRIMER_LOG_LEVEL", LogLevel::Info),
            flush: env_get_bool("PRIMER_FLUSH_EPRINT", false),
            timestamps: env_get_bool("PRIMER_KPRINT_TIME", false),
            lessons: env_get_list("PRIMER_TOUR"),
        }
    }

    pub fn log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }

    pub fn flush(mut self, enable: bool) -> Self {
        self.flush = enable;
        self
    }

    pub fn timestamps(mut self, enable: bool) -> Self {
        self.timestamps = enable;
        self
    }

    pub fn lessons<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lessons = names.into_iter().map(Into::into).collect();
        self
    }

    /// Every configured lesson must be registered
    pub fn validate(&self) -> PrimerResult<()> {
        match self.lessons.iter().find(|name| lessons::find(name).is_none()) {
            Some(unknown) => Err(PrimerError::UnknownLesson(unknown.clone())),
            None => Ok(()),
        }
    }

    /// Install the logging settings process-wide
    pub fn apply(&self) {
        kprint::set_log_level(self.log_level);
        kprint::set_flush_enabled(self.flush);
        kprint::set_time_enabled(self.timestamps);
        kdebug!("config applied: {:?}", self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PrimerConfig::default();
        assert_eq!(config.log_level, LogLevel::Info);
        assert!(!config.flush);
        assert!(!config.timestamps);
        assert!(config.lessons.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = PrimerConfig::new()
            .log_level(LogLevel::Debug)
            .flush(true)
            .timestamps(true)
            .lessons(["loops", "ranges"]);

        assert_eq!(config.log_level, LogLevel::Debug);
        assert!(config.flush);
        assert!(config.timestamps);
        assert_eq!(config.lessons, vec!["loops", "ranges"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_unknown_lesson() {
        let config = PrimerConfig::new().lessons(["methods", "goroutines"]);
        assert_eq!(
            config.validate(),
            Err(PrimerError::UnknownLesson("goroutines".into()))
        );
    }
}
