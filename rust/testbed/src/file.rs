//! On-disk shape of a testbed document and its conversion into [Testbed].

use crate::env::expand_document;
use crate::types::{ConnectionSpec, Credentials, DeviceSpec, Link, Testbed};
use crate::TestbedError;
use log::{debug, warn};
use serde::Deserialize;
use serde_yaml::{Mapping, Value};

#[derive(Debug, Default, Deserialize)]
struct TestbedFile {
    #[serde(default)]
    testbed: TestbedSection,
    // Mappings rather than HashMaps so that file order survives.
    #[serde(default)]
    devices: Mapping,
    #[serde(default)]
    topology: Mapping,
}

#[derive(Debug, Default, Deserialize)]
struct TestbedSection {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    credentials: Credentials,
}

#[derive(Debug, Default, Deserialize)]
struct DeviceSection {
    #[serde(default)]
    alias: Option<String>,
    #[serde(default, rename = "type")]
    device_type: Option<String>,
    #[serde(default)]
    os: Option<String>,
    #[serde(default)]
    platform: Option<String>,
    #[serde(default)]
    credentials: Credentials,
    #[serde(default)]
    connections: Mapping,
}

#[derive(Debug, Default, Deserialize)]
struct TopologyDevice {
    #[serde(default)]
    interfaces: Mapping,
}

#[derive(Debug, Default, Deserialize)]
struct TopologyInterface {
    #[serde(default)]
    link: Option<String>,
}

impl Testbed {
    /// Parse and resolve a testbed document. `fallback_name` names the testbed when the
    /// document itself does not.
    pub fn from_yaml_str(text: &str, fallback_name: &str) -> Result<Self, TestbedError> {
        let mut doc: Value = serde_yaml::from_str(text)?;
        if doc.is_null() {
            doc = Value::Mapping(Mapping::new());
        }
        expand_document(&mut doc)?;

        let file: TestbedFile = serde_yaml::from_value(doc)?;

        let name = file
            .testbed
            .name
            .unwrap_or_else(|| fallback_name.to_string());
        let credentials = file.testbed.credentials;

        let mut devices = Vec::with_capacity(file.devices.len());
        for (key, value) in file.devices {
            let device_name = key_to_string(&key, "device")?;
            devices.push(resolve_device(device_name, value, &credentials)?);
        }

        let links = collect_links(file.topology)?;

        Ok(Testbed {
            name,
            credentials,
            devices,
            links,
        })
    }
}

fn key_to_string(key: &Value, what: &str) -> Result<String, TestbedError> {
    match key {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(TestbedError::InvalidDevice {
            name: format!("{other:?}"),
            reason: format!("{what} names must be strings"),
        }),
    }
}

fn resolve_device(
    name: String,
    value: Value,
    testbed_credentials: &Credentials,
) -> Result<DeviceSpec, TestbedError> {
    let section: DeviceSection = match value {
        Value::Null => DeviceSection::default(),
        other => serde_yaml::from_value(other).map_err(|e| TestbedError::InvalidDevice {
            name: name.clone(),
            reason: e.to_string(),
        })?,
    };

    // Device credentials win over testbed-wide ones of the same name, field by field.
    let mut credentials = testbed_credentials.clone();
    for (cred_name, own) in section.credentials {
        let merged = credentials.entry(cred_name).or_default();
        if own.username.is_some() {
            merged.username = own.username;
        }
        if own.password.is_some() {
            merged.password = own.password;
        }
    }

    let mut connections = Vec::with_capacity(section.connections.len());
    for (key, value) in section.connections {
        let conn_name = key_to_string(&key, "connection")?;
        // `defaults` holds shared connection settings, not a connection.
        if conn_name == "defaults" {
            continue;
        }
        let spec: ConnectionSpec =
            serde_yaml::from_value(value).map_err(|e| TestbedError::InvalidDevice {
                name: name.clone(),
                reason: format!("connection {conn_name}: {e}"),
            })?;
        connections.push((conn_name, spec));
    }

    if connections.is_empty() {
        warn!("Device {name} has no connections defined");
    }
    debug!(
        "Device {name}: os={:?} connections={}",
        section.os,
        connections.len()
    );

    Ok(DeviceSpec {
        name,
        alias: section.alias,
        device_type: section.device_type,
        os: section.os,
        platform: section.platform,
        credentials,
        connections,
    })
}

fn collect_links(topology: Mapping) -> Result<Vec<Link>, TestbedError> {
    let mut links: Vec<Link> = vec![];

    for (key, value) in topology {
        let device = key_to_string(&key, "topology device")?;
        let section: TopologyDevice = match value {
            Value::Null => TopologyDevice::default(),
            other => serde_yaml::from_value(other)?,
        };

        for (if_key, if_value) in section.interfaces {
            let interface = key_to_string(&if_key, "interface")?;
            let iface: TopologyInterface = match if_value {
                Value::Null => TopologyInterface::default(),
                other => serde_yaml::from_value(other)?,
            };
            let Some(link_name) = iface.link else {
                continue;
            };

            match links.iter_mut().find(|l| l.name == link_name) {
                Some(link) => link.interfaces.push((device.clone(), interface)),
                None => links.push(Link {
                    name: link_name,
                    interfaces: vec![(device.clone(), interface)],
                }),
            }
        }
    }

    Ok(links)
}
