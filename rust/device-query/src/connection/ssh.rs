use super::Session;
use crate::QueryError;
use async_trait::async_trait;
use log::{debug, info, warn};
use russh::client::{self, Handle};
use russh::{ChannelMsg, Disconnect};
use russh_keys::key::PublicKey;
use std::sync::Arc;
use std::time::Duration;
use testbed::{ConnectionSpec, DeviceSpec};

/// Lab devices are reached by address alone, so any host key is accepted.
pub struct AcceptAnyHostKey;

#[async_trait]
impl client::Handler for AcceptAnyHostKey {
    type Error = russh::Error;

    async fn check_server_key(
        &mut self,
        server_public_key: &PublicKey,
    ) -> Result<bool, Self::Error> {
        debug!("Accepting host key {}", server_public_key.fingerprint());
        Ok(true)
    }
}

/// One SSH connection; each command runs on its own exec channel.
pub struct SshSession {
    device: String,
    handle: Handle<AcceptAnyHostKey>,
}

impl SshSession {
    pub async fn connect(
        device: &DeviceSpec,
        via: &str,
        conn: &ConnectionSpec,
    ) -> Result<Self, QueryError> {
        let host = conn.ip.clone().ok_or_else(|| QueryError::MissingAddress {
            device: device.name.clone(),
            connection: via.to_string(),
        })?;
        let (username, password) = match device.default_credential() {
            Some(cred) => match (&cred.username, &cred.password) {
                (Some(u), Some(p)) => (u.clone(), p.clone()),
                _ => return Err(QueryError::MissingCredentials(device.name.clone())),
            },
            None => return Err(QueryError::MissingCredentials(device.name.clone())),
        };

        let port = conn.port();
        let seconds = conn.connection_timeout();
        info!("SSH to {}@{}:{} for {}", username, host, port, device.name);

        let config = Arc::new(client::Config::default());
        let connecting = client::connect(config, (host.as_str(), port), AcceptAnyHostKey);
        let mut handle = tokio::time::timeout(Duration::from_secs(seconds), connecting)
            .await
            .map_err(|_| QueryError::Timeout {
                device: device.name.clone(),
                seconds,
            })??;

        if !handle.authenticate_password(username, password).await? {
            return Err(QueryError::AuthenticationFailed(device.name.clone()));
        }

        Ok(Self {
            device: device.name.clone(),
            handle,
        })
    }
}

#[async_trait]
impl Session for SshSession {
    async fn execute(&mut self, command: &str) -> Result<String, QueryError> {
        let mut channel = self.handle.channel_open_session().await?;
        channel.exec(true, command).await?;

        let mut output: Vec<u8> = vec![];
        let mut exit_status = None;
        while let Some(msg) = channel.wait().await {
            match msg {
                ChannelMsg::Data { ref data } => output.extend_from_slice(data),
                ChannelMsg::ExtendedData { ref data, .. } => output.extend_from_slice(data),
                ChannelMsg::ExitStatus { exit_status: code } => exit_status = Some(code),
                _ => {}
            }
        }

        debug!(
            "{}: '{}' returned {} bytes, exit status {:?}",
            self.device,
            command,
            output.len(),
            exit_status
        );
        if let Some(code) = exit_status.filter(|c| *c != 0) {
            warn!("{}: '{}' exited with status {}", self.device, command, code);
        }

        Ok(String::from_utf8_lossy(&output).into_owned())
    }

    async fn disconnect(&mut self) -> Result<(), QueryError> {
        self.handle
            .disconnect(Disconnect::ByApplication, "", "English")
            .await?;
        Ok(())
    }
}
