/// Loading of testbed inventories. A testbed is a YAML document describing a set of network
/// devices, how to reach them, the credentials to log in with, and the links between their
/// interfaces. Loading never touches the network; it only validates and resolves the document
/// into a [Testbed] that the rest of the tooling can query by device name.
///
/// ```rust,no_run
/// let testbed = testbed::load("devnet_sbx_testbed.yml").unwrap();
///
/// for device in testbed.devices() {
///     println!("{} runs {:?}", device.name, device.os);
/// }
/// ```
pub mod env;
pub mod error;
mod file;
pub mod types;

#[cfg(test)]
mod tests;

use log::{debug, info};
use std::fs;
use std::path::Path;

pub use error::TestbedError;
pub use types::{
    ConnectionArguments, ConnectionSpec, Credential, Credentials, DeviceSpec, Link, Protocol,
    Testbed, DEFAULT_CREDENTIAL,
};

/// Read and resolve the testbed file at `path`. When the document carries no `testbed.name`,
/// the file stem is used instead.
pub fn load(path: impl AsRef<Path>) -> Result<Testbed, TestbedError> {
    let path = path.as_ref();
    debug!("Loading testbed from {}", path.display());

    let text = fs::read_to_string(path).map_err(|source| TestbedError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let fallback_name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let testbed = Testbed::from_yaml_str(&text, &fallback_name)?;
    info!(
        "Loaded testbed '{}' with {} device(s) and {} link(s)",
        testbed.name,
        testbed.devices.len(),
        testbed.links.len()
    );
    Ok(testbed)
}
