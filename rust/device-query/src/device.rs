use crate::connection::{open_session, ConnectOptions, Session};
use crate::QueryError;
use log::{debug, info, warn};
use serde_json::Value;
use show_parsers::ParserRegistry;
use std::sync::Arc;
use testbed::{DeviceSpec, Link, Testbed};

/// A device from the testbed that can be connected to and queried.
pub struct Device {
    pub spec: DeviceSpec,
    session: Option<Box<dyn Session>>,
    parsers: Arc<ParserRegistry>,
    log_stdout: bool,
}

impl Device {
    pub fn new(spec: DeviceSpec, parsers: Arc<ParserRegistry>) -> Self {
        Self {
            spec,
            session: None,
            parsers,
            log_stdout: true,
        }
    }

    pub fn name(&self) -> &str {
        &self.spec.name
    }

    pub fn is_connected(&self) -> bool {
        self.session.is_some()
    }

    /// Connect over the device's default connection. Connecting an already connected device
    /// only updates the options.
    pub async fn connect(&mut self, options: ConnectOptions) -> Result<(), QueryError> {
        self.log_stdout = options.log_stdout;
        if self.is_connected() {
            debug!("{} is already connected", self.spec.name);
            return Ok(());
        }

        let (via, conn) = self
            .spec
            .default_connection()
            .ok_or_else(|| QueryError::NoConnection(self.spec.name.clone()))?;

        let target = match &conn.ip {
            Some(ip) => format!("{} {}:{}", conn.protocol, ip, conn.port()),
            None => conn.protocol.to_string(),
        };
        info!("Connecting to {} via '{}' ({})", self.spec.name, via, target);
        if self.log_stdout {
            println!("\n+++ {}: connecting via '{}' ({}) +++", self.spec.name, via, target);
        }

        let session = open_session(&self.spec, via, conn).await?;
        self.session = Some(session);

        if self.log_stdout {
            println!("+++ {}: connected +++", self.spec.name);
        }
        Ok(())
    }

    /// Run `command` and return the raw text the device printed.
    pub async fn execute(&mut self, command: &str) -> Result<String, QueryError> {
        let session = self
            .session
            .as_mut()
            .ok_or_else(|| QueryError::NotConnected(self.spec.name.clone()))?;

        if self.log_stdout {
            println!("\n+++ {}: executing command '{}' +++", self.spec.name, command);
        }
        let output = session.execute(command).await?;
        if self.log_stdout {
            println!("{}\n{}", command, output);
        } else {
            debug!("{}: '{}' output:\n{}", self.spec.name, command, output);
        }

        Ok(output)
    }

    /// Run `command` and parse its output. The parser is resolved before anything is sent to
    /// the device, so unsupported commands never reach it, and abbreviations such as `sh ver`
    /// go out as the full command the parser expects.
    pub async fn parse(&mut self, command: &str) -> Result<Value, QueryError> {
        let os = self
            .spec
            .os
            .clone()
            .ok_or_else(|| QueryError::MissingOs(self.spec.name.clone()))?;
        let parsers = Arc::clone(&self.parsers);
        let parser = parsers.lookup(&os, command)?;

        let output = self.execute(parser.command()).await?;
        Ok(show_parsers::parse_with(parser, &output)?)
    }

    pub async fn disconnect(&mut self) -> Result<(), QueryError> {
        if let Some(mut session) = self.session.take() {
            info!("Disconnecting from {}", self.spec.name);
            session.disconnect().await?;
        }
        Ok(())
    }
}

/// A loaded testbed whose devices can be connected to. Devices keep testbed order.
pub struct LiveTestbed {
    pub name: String,
    pub links: Vec<Link>,
    pub devices: Vec<Device>,
}

impl LiveTestbed {
    pub fn new(testbed: Testbed) -> Self {
        Self::with_parsers(testbed, Arc::new(ParserRegistry::default()))
    }

    pub fn with_parsers(testbed: Testbed, parsers: Arc<ParserRegistry>) -> Self {
        let devices = testbed
            .devices
            .into_iter()
            .map(|spec| Device::new(spec, parsers.clone()))
            .collect();

        Self {
            name: testbed.name,
            links: testbed.links,
            devices,
        }
    }

    pub fn device(&self, name: &str) -> Option<&Device> {
        self.devices.iter().find(|d| d.name() == name)
    }

    pub fn device_mut(&mut self, name: &str) -> Option<&mut Device> {
        self.devices.iter_mut().find(|d| d.name() == name)
    }

    pub fn device_names(&self) -> Vec<&str> {
        self.devices.iter().map(Device::name).collect()
    }

    /// Close every open session. Failures are logged, not returned.
    pub async fn disconnect_all(&mut self) {
        for device in self.devices.iter_mut().filter(|d| d.is_connected()) {
            if let Err(e) = device.disconnect().await {
                warn!("Failed to disconnect from {}: {}", device.name(), e);
            }
        }
    }
}
