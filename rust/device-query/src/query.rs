use crate::connection::ConnectOptions;
use crate::device::{Device, LiveTestbed};
use crate::QueryError;
use log::info;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub const DEFAULT_COMMAND: &str = "show version";

const JSON_INDENT: &[u8] = b"    ";

#[derive(Debug, Clone)]
pub struct QueryOptions {
    pub command: String,
    /// Write each result to `<output_dir>/<device>.json`.
    pub save: bool,
    pub log_stdout: bool,
    pub output_dir: PathBuf,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            command: DEFAULT_COMMAND.to_string(),
            save: false,
            log_stdout: true,
            output_dir: PathBuf::from("."),
        }
    }
}

/// Connect to device `name` of `testbed`, run the configured show command on it, print the
/// parsed response, and save it when asked to. Hands back the device together with the
/// response.
///
/// An unknown `name` fails before anything is connected.
pub async fn device_info<'a>(
    name: &str,
    testbed: &'a mut LiveTestbed,
    options: &QueryOptions,
) -> Result<(&'a mut Device, Value), QueryError> {
    let device = testbed
        .device_mut(name)
        .ok_or_else(|| QueryError::DeviceNotFound(name.to_string()))?;

    device
        .connect(ConnectOptions {
            log_stdout: options.log_stdout,
        })
        .await?;
    let response = device.parse(&options.command).await?;

    print_response(name, &response)?;

    if options.save {
        let path = save_response(&options.output_dir, name, &response)?;
        info!("Saved {} response to {}", name, path.display());
        println!(
            "\nFILE SAVED: Saved Response to JSON file {}",
            json_file_name(name)
        );
    }

    Ok((device, response))
}

fn print_response(name: &str, response: &Value) -> Result<(), QueryError> {
    println!(
        "Response from {} is of type {} and length {}",
        name,
        json_type(response),
        json_len(response)
    );
    println!("RAW response: \n{}\n", response);
    println!("FORMATTED response:\n{}", to_json_pretty(response)?);

    let keys: Vec<&String> = match response {
        Value::Object(map) => map.keys().collect(),
        _ => vec![],
    };
    println!("keys: {:?}", keys);
    Ok(())
}

pub fn json_file_name(device: &str) -> String {
    format!("{device}.json")
}

/// Write `response` to `<dir>/<device>.json`, replacing any previous file.
pub fn save_response(dir: &Path, device: &str, response: &Value) -> Result<PathBuf, QueryError> {
    let path = dir.join(json_file_name(device));
    let mut writer = BufWriter::new(File::create(&path)?);
    write_json_pretty(&mut writer, response)?;
    writer.flush()?;
    Ok(path)
}

/// Pretty JSON with four space indentation. Non-ASCII text is written as is.
pub fn to_json_pretty(value: &Value) -> Result<String, QueryError> {
    let mut buf = Vec::new();
    write_json_pretty(&mut buf, value)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn write_json_pretty<W: Write>(writer: W, value: &Value) -> Result<(), QueryError> {
    let formatter = PrettyFormatter::with_indent(JSON_INDENT);
    let mut ser = serde_json::Serializer::with_formatter(writer, formatter);
    value.serialize(&mut ser)?;
    Ok(())
}

pub fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Entries of an object or array, characters of a string, zero otherwise.
pub fn json_len(value: &Value) -> usize {
    match value {
        Value::Array(items) => items.len(),
        Value::Object(map) => map.len(),
        Value::String(s) => s.chars().count(),
        _ => 0,
    }
}
