use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Name of the credential set used to log in when nothing more specific is asked for.
pub const DEFAULT_CREDENTIAL: &str = "default";

/// Default SSH port used when a connection block does not name one.
pub const DEFAULT_SSH_PORT: u16 = 22;

/// Seconds allowed for a connection to come up when the testbed does not say otherwise.
pub const DEFAULT_CONNECTION_TIMEOUT: u64 = 30;

/// A fully resolved testbed. Devices keep the order in which they appear in the file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Testbed {
    pub name: String,
    /// Testbed-wide credentials, already merged into every device.
    pub credentials: Credentials,
    pub devices: Vec<DeviceSpec>,
    pub links: Vec<Link>,
}

impl Testbed {
    pub fn device(&self, name: &str) -> Option<&DeviceSpec> {
        self.devices.iter().find(|d| d.name == name)
    }

    pub fn devices(&self) -> impl Iterator<Item = &DeviceSpec> {
        self.devices.iter()
    }

    pub fn device_names(&self) -> Vec<&str> {
        self.devices.iter().map(|d| d.name.as_str()).collect()
    }
}

/// Named credential sets, e.g. `default` or `enable`.
pub type Credentials = HashMap<String, Credential>;

#[derive(Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Credential {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

// Keep passwords out of logs and panics.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "********"))
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeviceSpec {
    pub name: String,
    pub alias: Option<String>,
    pub device_type: Option<String>,
    /// Operating system family (`iosxe`, `nxos`, ...). Selects the output parsers.
    pub os: Option<String>,
    pub platform: Option<String>,
    /// Device credentials with testbed-wide ones filled in underneath.
    pub credentials: Credentials,
    /// Connection blocks in file order.
    pub connections: Vec<(String, ConnectionSpec)>,
}

impl DeviceSpec {
    /// The credential set used to log in.
    pub fn default_credential(&self) -> Option<&Credential> {
        self.credentials.get(DEFAULT_CREDENTIAL)
    }

    /// The connection used by default: the one called `cli`, or the only one defined.
    pub fn default_connection(&self) -> Option<(&str, &ConnectionSpec)> {
        if let Some((name, spec)) = self.connections.iter().find(|(name, _)| name == "cli") {
            return Some((name.as_str(), spec));
        }
        match self.connections.as_slice() {
            [(name, spec)] => Some((name.as_str(), spec)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    #[default]
    Ssh,
    /// Offline connection replaying canned command output from the testbed itself.
    Mock,
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Ssh => write!(f, "ssh"),
            Self::Mock => write!(f, "mock"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConnectionSpec {
    #[serde(default)]
    pub protocol: Protocol,
    #[serde(default, alias = "host")]
    pub ip: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub arguments: ConnectionArguments,
    /// Canned responses for [Protocol::Mock], keyed by command.
    #[serde(default)]
    pub outputs: HashMap<String, String>,
}

impl ConnectionSpec {
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_SSH_PORT)
    }

    pub fn connection_timeout(&self) -> u64 {
        self.arguments
            .connection_timeout
            .unwrap_or(DEFAULT_CONNECTION_TIMEOUT)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConnectionArguments {
    #[serde(default)]
    pub connection_timeout: Option<u64>,
}

/// A link joins every interface in the topology that names it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Link {
    pub name: String,
    /// `(device, interface)` pairs attached to this link.
    pub interfaces: Vec<(String, String)>,
}
