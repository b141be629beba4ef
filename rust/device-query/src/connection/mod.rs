/// Transports used to run commands on a device. Every transport hands back the raw text the
/// device printed; turning that text into data is left to [show_parsers].
pub mod mock;
pub mod ssh;

use crate::QueryError;
use async_trait::async_trait;
use testbed::{ConnectionSpec, DeviceSpec, Protocol};

pub use mock::MockSession;
pub use ssh::SshSession;

/// How a device connection should behave once it is up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectOptions {
    /// Echo the session chatter (banner, commands sent, raw output) to stdout.
    pub log_stdout: bool,
}

impl Default for ConnectOptions {
    fn default() -> Self {
        Self { log_stdout: true }
    }
}

/// A live connection to one device.
#[async_trait]
pub trait Session: Send {
    /// Run `command` and return everything it printed.
    async fn execute(&mut self, command: &str) -> Result<String, QueryError>;

    async fn disconnect(&mut self) -> Result<(), QueryError>;
}

/// Bring up a session for `device` over the connection block `conn`.
pub async fn open_session(
    device: &DeviceSpec,
    via: &str,
    conn: &ConnectionSpec,
) -> Result<Box<dyn Session>, QueryError> {
    match conn.protocol {
        Protocol::Ssh => Ok(Box::new(SshSession::connect(device, via, conn).await?)),
        Protocol::Mock => Ok(Box::new(MockSession::new(&device.name, conn))),
    }
}
