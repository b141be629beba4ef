use show_parsers::ParseError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("device '{0}' not found in testbed")]
    DeviceNotFound(String),
    #[error("device '{0}' has no usable connection defined")]
    NoConnection(String),
    #[error("connection '{connection}' of device '{device}' has no ip or host")]
    MissingAddress { device: String, connection: String },
    #[error("device '{0}' has no default username and password")]
    MissingCredentials(String),
    #[error("device '{0}' has no os set, unable to pick a parser")]
    MissingOs(String),
    #[error("device '{0}' is not connected")]
    NotConnected(String),
    #[error("authentication to '{0}' was rejected")]
    AuthenticationFailed(String),
    #[error("connecting to '{device}' timed out after {seconds}s")]
    Timeout { device: String, seconds: u64 },
    #[error("SSH error: {0}")]
    Ssh(#[from] russh::Error),
    #[error("mock device '{device}' has no output for '{command}'")]
    Mock { device: String, command: String },
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("I/O error: {0}")]
    IO(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
