//! log4rs set-up.
//!
//! A `log4rs.yml` file is used when present, otherwise everything goes to
//! stderr so stdout only carries results.

use crate::config::Settings;
use crate::error::{Error, Result};
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

const LOG_PATTERN: &str = "{d(%H:%M:%S)} {h({l})} {M} - {m}{n}";

/// Install the global logger. Can only succeed once per process.
pub fn init_logging(settings: &Settings) -> Result<()> {
    if settings.log_config.exists() {
        log4rs::init_file(&settings.log_config, Default::default())
            .map_err(|e| Error::Logging(e.to_string()))?;
        log::debug!("Logging configured from {}", settings.log_config.display());
        return Ok(());
    }
    log4rs::init_config(stderr_config(settings.log_level)?)
        .map_err(|e| Error::Logging(e.to_string()))?;
    log::debug!(
        "{} not found, logging to stderr at {}",
        settings.log_config.display(),
        settings.log_level
    );
    Ok(())
}

/// Fallback configuration: one stderr appender at `level`.
pub fn stderr_config(level: LevelFilter) -> Result<Config> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();
    Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))
        .map_err(|e| Error::Logging(e.to_string()))
}
