use super::Session;
use crate::QueryError;
use async_trait::async_trait;
use log::debug;
use show_parsers::normalize_command;
use std::collections::HashMap;
use testbed::ConnectionSpec;

/// Replays the canned `outputs` of a `protocol: mock` connection. Lets a testbed be exercised
/// end to end without any reachable device.
pub struct MockSession {
    device: String,
    outputs: HashMap<String, String>,
    /// Commands executed so far, in order.
    pub history: Vec<String>,
}

impl MockSession {
    pub fn new(device: &str, conn: &ConnectionSpec) -> Self {
        let outputs = conn
            .outputs
            .iter()
            .map(|(cmd, out)| (normalize_command(cmd), out.clone()))
            .collect();

        Self {
            device: device.to_string(),
            outputs,
            history: vec![],
        }
    }
}

#[async_trait]
impl Session for MockSession {
    async fn execute(&mut self, command: &str) -> Result<String, QueryError> {
        let key = normalize_command(command);
        debug!("{}: mock execute '{}'", self.device, key);
        self.history.push(key.clone());

        self.outputs
            .get(&key)
            .cloned()
            .ok_or_else(|| QueryError::Mock {
                device: self.device.clone(),
                command: command.to_string(),
            })
    }

    async fn disconnect(&mut self) -> Result<(), QueryError> {
        debug!("{}: mock disconnect", self.device);
        Ok(())
    }
}
