// SPDX-License-Identifier: MPL-2.0
//! Crate error type. Only configuration load/save can fail; engine
//! operations absorb redundant or racy calls instead of erroring.

use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    /// Reading or writing the settings file failed.
    Io(String),
    /// The settings file could not be parsed or serialized.
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(message) => write!(f, "settings i/o failed: {message}"),
            Error::Config(message) => write!(f, "settings malformed: {message}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
