//! Runtime settings read from the environment (and `.env`).

use log::LevelFilter;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";
pub const DEFAULT_SERVICES_FILE: &str = "/etc/services";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// log4rs YAML file, used when it exists.
    pub log_config: PathBuf,
    /// Root level when no log4rs file is found.
    pub log_level: LevelFilter,
    /// Services database consulted after the built-in table.
    pub services_file: PathBuf,
    pub color: ColorChoice,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            log_config: PathBuf::from(DEFAULT_LOG_CONFIG),
            log_level: LevelFilter::Warn,
            services_file: PathBuf::from(DEFAULT_SERVICES_FILE),
            color: ColorChoice::Auto,
        }
    }
}

impl Settings {
    /// Read settings from the process environment.
    ///
    /// Call `dotenv::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup, unknown or invalid values keep the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();
        if let Some(path) = lookup("NETBUDDY_LOG_CONFIG") {
            settings.log_config = PathBuf::from(path);
        }
        if let Some(level) = lookup("NETBUDDY_LOG_LEVEL") {
            if let Ok(level) = LevelFilter::from_str(level.trim()) {
                settings.log_level = level;
            }
        }
        if let Some(path) = lookup("NETBUDDY_SERVICES_FILE") {
            settings.services_file = PathBuf::from(path);
        }
        settings.color = match lookup("NETBUDDY_COLOR").as_deref().map(str::trim) {
            Some("always") => ColorChoice::Always,
            Some("never") => ColorChoice::Never,
            _ => ColorChoice::Auto,
        };
        // https://no-color.org
        if lookup("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            settings.color = ColorChoice::Never;
        }
        settings
    }

    /// Apply the colour choice to `colored`, `no_color_flag` comes from the command line.
    pub fn apply_color(&self, no_color_flag: bool) {
        match (no_color_flag, self.color) {
            (true, _) | (false, ColorChoice::Never) => colored::control::set_override(false),
            (false, ColorChoice::Always) => colored::control::set_override(true),
            (false, ColorChoice::Auto) => colored::control::unset_override(),
        }
    }
}
