// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Failures while reading or writing the settings file.
///
/// The notification path itself never produces an error: unrecognized flash
/// severities degrade to informational and message text passes through
/// unvalidated. Only settings persistence can fail.
#[derive(Debug, Clone)]
pub enum Error {
    /// The settings file could not be read or written.
    Io(String),
    /// The settings file exists but is not valid TOML.
    Parse(String),
    /// The settings value could not be rendered as TOML.
    Serialize(String),
}

impl Error {
    /// Returns the i18n message key for this error, so the failure can be
    /// surfaced to the user as a localized toast.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-settings-io",
            Error::Parse(_) => "error-settings-parse",
            Error::Serialize(_) => "error-settings-serialize",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "settings file I/O failed: {}", e),
            Error::Parse(e) => write!(f, "settings file is not valid TOML: {}", e),
            Error::Serialize(e) => write!(f, "settings could not be serialized: {}", e),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Parse(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Serialize(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_converts_and_displays() {
        let err: Error = std::io::Error::other("disk failure").into();
        assert!(matches!(&err, Error::Io(m) if m.contains("disk failure")));
        assert_eq!(
            format!("{}", err),
            "settings file I/O failed: disk failure"
        );
    }

    #[test]
    fn parse_error_display_names_the_file() {
        let err = Error::Parse("expected a table".into());
        assert!(format!("{}", err).contains("not valid TOML"));
    }

    #[test]
    fn i18n_keys_distinguish_variants() {
        assert_eq!(Error::Io(String::new()).i18n_key(), "error-settings-io");
        assert_eq!(
            Error::Parse(String::new()).i18n_key(),
            "error-settings-parse"
        );
        assert_eq!(
            Error::Serialize(String::new()).i18n_key(),
            "error-settings-serialize"
        );
    }
}
