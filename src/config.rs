use clap::ValueEnum;
use serde::Serialize;

/// Environment variable holding the default output format.
pub const FORMAT_ENV: &str = "GRAMMAR_CHECK_FORMAT";
/// Environment variable holding the log filter. `RUST_LOG` is read when it
/// is unset.
pub const LOG_ENV: &str = "GRAMMAR_CHECK_LOG";

/// How command output is printed on stdout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Text,
    Json,
}

/// Settings shared by every command, resolved from flags and environment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub format: Format,
    /// A `tracing_subscriber::EnvFilter` directive such as `debug` or
    /// `grammar=debug`.
    pub log_level: Option<String>,
}

impl Config {
    pub fn new(format: Format, log_level: Option<String>) -> Config {
        let log_level = log_level.filter(|level| !level.trim().is_empty());
        Config { format, log_level }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_defaults_to_text() {
        assert_eq!(Config::default().format, Format::Text);
    }

    #[test]
    fn it_drops_blank_log_levels() {
        assert_eq!(Config::new(Format::Json, Some("  ".into())).log_level, None);
        assert_eq!(
            Config::new(Format::Json, Some("debug".into())).log_level,
            Some("debug".to_string())
        );
    }
}
