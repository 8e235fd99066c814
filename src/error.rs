//! Startup errors
//!
//! The simulation itself never fails; only loading configuration and assets
//! can.

use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    /// Font file missing; nothing can be drawn without it
    MissingFont { path: PathBuf },
    /// Config file unreadable
    Io(std::io::Error),
    /// Config file is not valid JSON for [`crate::Settings`]
    Config(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFont { path } => write!(f, "could not load font {}", path.display()),
            Self::Io(err) => write!(f, "i/o error: {err}"),
            Self::Config(err) => write!(f, "invalid config: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MissingFont { .. } => None,
            Self::Io(err) => Some(err),
            Self::Config(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
