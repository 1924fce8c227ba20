//! Error type for the fallible parts of the library.

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, CalendarError>;

#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum CalendarError {
    /// Reading or writing a file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid TOML for `CalendarSettings`
    #[error("Failed to parse settings: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Settings could not be written as TOML
    #[error("Failed to serialize settings: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// A colour string is not `#RRGGBB`
    #[error("Invalid color '{value}': {reason}")]
    InvalidColor { value: String, reason: String },

    /// No platform configuration directory could be determined
    #[error("No configuration directory available")]
    NoConfigDir,
}
