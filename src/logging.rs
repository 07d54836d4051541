//! Logger setup for hosts
//!
//! The library itself only logs through the [`log`] facade. Hosts that want the
//! messages on stderr call [`init_logging`] once at startup.

use crate::AppResult;
use ohno::IntoAppError;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// No logging output
    None,

    /// Only error messages
    Error,

    /// Warning and error messages
    #[default]
    Warn,

    /// Info, warning, and error messages
    Info,

    /// Debug, info, warning, and error messages
    Debug,

    /// Trace, debug, info, warning, and error messages
    Trace,
}

impl LogLevel {
    const fn filter(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Error => Some("error"),
            Self::Warn => Some("warn"),
            Self::Info => Some("info"),
            Self::Debug => Some("debug"),
            Self::Trace => Some("trace"),
        }
    }
}

/// Route log output to stderr at the given level.
///
/// `RUST_LOG` overrides the level when set. Message targets are shown at the
/// debug and trace levels. Fails if a logger was already installed.
pub fn init_logging(log_level: LogLevel) -> AppResult<()> {
    let Some(level) = log_level.filter() else {
        return Ok(());
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", level);

    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(matches!(log_level, LogLevel::Debug | LogLevel::Trace))
        .try_init()
        .into_app_err("unable to install the logger")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!("DEBUG".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!("none".parse::<LogLevel>().unwrap(), LogLevel::None);
        assert!("verbose".parse::<LogLevel>().is_err());
        assert_eq!(LogLevel::default(), LogLevel::Warn);
    }

    #[test]
    fn test_none_installs_nothing() {
        init_logging(LogLevel::None).unwrap();
    }
}
