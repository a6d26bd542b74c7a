//! Hetzner driver error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HetznerError {
    #[error("--{0} is required")]
    MissingApiToken(&'static str),

    #[error("--image-arch: unknown architecture {0}")]
    InvalidArchitecture(String),

    #[error("--image-id: {0} is not a valid image id")]
    InvalidImageId(String),

    #[error("--existing-key-id: {0} is not a valid key id")]
    InvalidKeyId(i64),

    #[error("--ssh-port: {0} is not a valid port")]
    InvalidPort(i64),

    #[error("--{0} and --{1} are mutually exclusive")]
    MutuallyExclusiveFlags(&'static str, &'static str),

    #[error("--{0} requires --{1}")]
    FlagRequires(&'static str, &'static str),

    #[error("--{0} must be used if public networking is disabled (hint: implicitly set by --{1})")]
    PrivateNetworkRequired(&'static str, &'static str),

    #[error(transparent)]
    Flag(#[from] machine_driver::FlagError),
}

pub type Result<T> = std::result::Result<T, HetznerError>;
