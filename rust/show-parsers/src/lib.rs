/// Turning the text a network device prints for a show command into structured data. Parsers are
/// grouped per operating system family and looked up by command, so callers only need to know
/// which OS a device runs:
///
/// ```rust
/// use show_parsers::ParserRegistry;
///
/// let registry = ParserRegistry::default();
/// let output = "Interface  IP-Address  OK? Method Status Protocol\n\
///               GigabitEthernet1  10.0.0.1  YES NVRAM  up  up\n";
/// let parsed = registry.parse("iosxe", "sh ip int br", output).unwrap();
///
/// assert_eq!(parsed["interface"]["GigabitEthernet1"]["ip_address"], "10.0.0.1");
/// ```
pub mod iosxe;
pub mod nxos;

#[cfg(test)]
mod tests;

use log::debug;
use serde_json::{Map, Value};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("no parsers available for os '{0}'")]
    UnsupportedPlatform(String),
    #[error("no parser for command '{command}' on os '{os}'")]
    UnsupportedCommand { os: String, command: String },
    #[error("command '{command}' is ambiguous, it matches: {}", candidates.join(", "))]
    AmbiguousCommand {
        command: String,
        candidates: Vec<String>,
    },
    #[error("parser for '{command}' found nothing in the device output")]
    EmptyOutput { command: String },
}

/// A parser for one show command on one OS family.
pub trait ShowParser: Send + Sync {
    /// The full, lower case command this parser handles, e.g. `show version`.
    fn command(&self) -> &'static str;

    /// Extract whatever the parser recognises. An empty map means nothing was recognised.
    fn parse(&self, output: &str) -> Map<String, Value>;
}

pub struct ParserRegistry {
    parsers: HashMap<&'static str, Vec<Box<dyn ShowParser>>>,
    aliases: HashMap<String, &'static str>,
}

impl Default for ParserRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();

        registry.register("iosxe", Box::new(iosxe::ShowVersion));
        registry.register("iosxe", Box::new(iosxe::ShowIpInterfaceBrief));
        registry.alias("ios", "iosxe");

        registry.register("nxos", Box::new(nxos::ShowVersion));
        registry.register("nxos", Box::new(nxos::ShowIpInterfaceBrief));

        registry
    }
}

impl ParserRegistry {
    pub fn empty() -> Self {
        Self {
            parsers: HashMap::new(),
            aliases: HashMap::new(),
        }
    }

    pub fn register(&mut self, family: &'static str, parser: Box<dyn ShowParser>) {
        self.parsers.entry(family).or_default().push(parser);
    }

    /// Make `os` use the parsers of `family`.
    pub fn alias(&mut self, os: &str, family: &'static str) {
        self.aliases.insert(os.to_lowercase(), family);
    }

    fn family(&self, os: &str) -> Option<&[Box<dyn ShowParser>]> {
        let os = os.to_lowercase();
        let key = self.aliases.get(&os).copied().unwrap_or(os.as_str());
        self.parsers.get(key).map(Vec::as_slice)
    }

    /// Commands supported for `os`, in registration order.
    pub fn commands(&self, os: &str) -> Vec<&'static str> {
        self.family(os)
            .map(|ps| ps.iter().map(|p| p.command()).collect())
            .unwrap_or_default()
    }

    /// Find the parser for `command`. Each word may be abbreviated to any prefix of the full
    /// word, as on the device CLI (`sh ip int br`).
    pub fn lookup(&self, os: &str, command: &str) -> Result<&dyn ShowParser, ParseError> {
        let parsers = self
            .family(os)
            .ok_or_else(|| ParseError::UnsupportedPlatform(os.to_string()))?;

        let wanted = normalize_command(command);
        let wanted: Vec<&str> = wanted.split(' ').collect();

        let mut candidates: Vec<&dyn ShowParser> = vec![];
        for parser in parsers {
            let full: Vec<&str> = parser.command().split(' ').collect();
            if full == wanted {
                return Ok(parser.as_ref());
            }
            if full.len() == wanted.len()
                && full.iter().zip(&wanted).all(|(f, w)| f.starts_with(w))
            {
                candidates.push(parser.as_ref());
            }
        }

        match candidates.as_slice() {
            [] => Err(ParseError::UnsupportedCommand {
                os: os.to_string(),
                command: command.to_string(),
            }),
            [one] => Ok(*one),
            many => Err(ParseError::AmbiguousCommand {
                command: command.to_string(),
                candidates: many.iter().map(|p| p.command().to_string()).collect(),
            }),
        }
    }

    /// Parse `output` of `command` as printed by a device running `os`.
    pub fn parse(&self, os: &str, command: &str, output: &str) -> Result<Value, ParseError> {
        let parser = self.lookup(os, command)?;
        debug!("Parsing '{}' output for os {}", parser.command(), os);
        parse_with(parser, output)
    }
}

/// Run `parser` over `output`. Finding nothing at all is an error.
pub fn parse_with(parser: &dyn ShowParser, output: &str) -> Result<Value, ParseError> {
    let parsed = parser.parse(output);
    if parsed.is_empty() {
        return Err(ParseError::EmptyOutput {
            command: parser.command().to_string(),
        });
    }
    Ok(Value::Object(parsed))
}

/// Lower case, single spaced, trimmed.
pub fn normalize_command(command: &str) -> String {
    command
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Insert `key` into `map` as a string, when the capture group matched something.
pub(crate) fn insert_capture(map: &mut Map<String, Value>, caps: &regex::Captures, key: &str) {
    if let Some(m) = caps.name(key) {
        let value = m.as_str().trim();
        if !value.is_empty() {
            map.insert(key.to_string(), Value::String(value.to_string()));
        }
    }
}

/// Insert `sub` under `key` unless it is empty.
pub(crate) fn insert_nonempty(map: &mut Map<String, Value>, key: &str, sub: Map<String, Value>) {
    if !sub.is_empty() {
        map.insert(key.to_string(), Value::Object(sub));
    }
}
