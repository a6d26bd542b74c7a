//! Option source error types

use thiserror::Error;

/// Errors raised while reading flags from an options source
#[derive(Error, Debug)]
pub enum FlagError {
    #[error("--{flag} expects a {expected} value, got {actual}")]
    TypeMismatch {
        flag: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("{flag} {entry} is not in key=value format")]
    MalformedLabel { flag: String, entry: String },

    #[error("Unknown flag in options file: {0}")]
    UnknownFlag(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, FlagError>;
