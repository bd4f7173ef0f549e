//! Errors raised by this crate itself.
//!
//! Native failures never show up here: forwarded calls hand back the callee's
//! `HResult` untouched.

use std::path::PathBuf;

use thiserror::Error;

use crate::catalog::Category;
use crate::guid::Guid;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid GUID: {0:?}")]
    InvalidGuid(String),

    #[error("Unknown identifier category: {0:?}")]
    UnknownCategory(String),

    #[error("Conflicting {category} identifier {name}: {first} vs {second}")]
    ConflictingIdentifier {
        category: Category,
        name: &'static str,
        first: Guid,
        second: Guid,
    },

    #[error("Format block of {0} bytes does not fit in a 32-bit size field")]
    FormatTooLarge(usize),

    #[error("Failed to read config {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
