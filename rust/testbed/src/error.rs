use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong between reading a testbed file and handing back a [crate::Testbed].
#[derive(Error, Debug)]
pub enum TestbedError {
    #[error("unable to read testbed file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed testbed document")]
    Yaml(#[from] serde_yaml::Error),
    #[error("environment variable {0} referenced by the testbed is not set")]
    MissingEnv(String),
    #[error("invalid device entry {name}: {reason}")]
    InvalidDevice { name: String, reason: String },
}
