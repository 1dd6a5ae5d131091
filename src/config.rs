use log::{Level as LogLevel};

use crate::generator::DEFAULT_SEQUENCE_SIZE;

fn default_sequence_size() -> i64 { DEFAULT_SEQUENCE_SIZE as i64 }

fn default_log_level() -> LogLevel { LogLevel::Warn }

/// Run parameters. The program reads no arguments, environment
/// variables or files, so only the defaults are ever used.
#[derive(Clone, Debug)]
pub struct Config {
    pub sequence_size: i64,
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sequence_size: default_sequence_size(),
            log_level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.sequence_size, 128);
        assert_eq!(config.log_level, LogLevel::Warn);
    }
}
