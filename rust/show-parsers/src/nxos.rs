//! Parsers for NX-OS.

use crate::{insert_capture, insert_nonempty, ShowParser};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

static BANNER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Cisco Nexus Operating System \(NX-OS\) Software$").unwrap());
static SYSTEM_VERSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:NXOS|system):\s+version\s+(?P<system_version>\S+)").unwrap());
static BIOS_VERSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^BIOS:\s+version\s*(?P<bios_version>\S*)").unwrap());
static IMAGE_FILE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:NXOS|system) image file is:\s+(?P<system_image_file>\S+)$").unwrap()
});
static COMPILE_TIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:NXOS|system) compile time:\s+(?P<system_compile_time>.+)$").unwrap()
});
static BIOS_COMPILE_TIME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^BIOS compile time:\s*(?P<bios_compile_time>.*)$").unwrap());
static CHASSIS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^cisco (?P<model>.+?) (?P<suffix>[Cc]hassis)(?: \((?P<slots>[^)]+)\))?$").unwrap()
});
static CPU_MEMORY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<cpu>.+?)\s+with (?P<memory>\d+ kB) of memory\.$").unwrap());
static BOARD_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Processor Board ID (?P<processor_board_id>\S+)$").unwrap());
static DEVICE_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Device name: (?P<device_name>\S+)$").unwrap());
static BOOTFLASH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^bootflash:\s+(?P<bootflash>\d+ kB)$").unwrap());
static KERNEL_UPTIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^Kernel uptime is (?P<days>\d+) day\(s\), (?P<hours>\d+) hour\(s\), (?P<minutes>\d+) minute\(s\), (?P<seconds>\d+) second\(s\)$",
    )
    .unwrap()
});
static REASON: Lazy<Regex> = Lazy::new(|| Regex::new(r"^Reason: (?P<reason>.+)$").unwrap());

/// `show version` as `{"platform": {...}}`.
pub struct ShowVersion;

impl ShowParser for ShowVersion {
    fn command(&self) -> &'static str {
        "show version"
    }

    fn parse(&self, output: &str) -> Map<String, Value> {
        let mut platform = Map::new();
        let mut software = Map::new();
        let mut hardware = Map::new();
        let mut kernel_uptime = Map::new();
        let mut plugins: Vec<Value> = vec![];
        let mut in_plugins = false;

        for line in output.lines().map(str::trim) {
            if line.is_empty() {
                continue;
            }

            // The plugin list is the single line following a bare `plugin` header.
            if line == "plugin" {
                in_plugins = true;
                continue;
            }
            if in_plugins {
                in_plugins = false;
                plugins.extend(
                    line.split(',')
                        .map(str::trim)
                        .filter(|p| !p.is_empty())
                        .map(|p| Value::String(p.to_string())),
                );
                continue;
            }

            if BANNER.is_match(line) {
                platform.insert("name".to_string(), "Nexus".into());
                platform.insert("os".to_string(), "NX-OS".into());
            } else if let Some(caps) = SYSTEM_VERSION.captures(line) {
                insert_capture(&mut software, &caps, "system_version");
            } else if let Some(caps) = BIOS_VERSION.captures(line) {
                insert_capture(&mut software, &caps, "bios_version");
            } else if let Some(caps) = IMAGE_FILE.captures(line) {
                insert_capture(&mut software, &caps, "system_image_file");
            } else if let Some(caps) = COMPILE_TIME.captures(line) {
                insert_capture(&mut software, &caps, "system_compile_time");
            } else if let Some(caps) = BIOS_COMPILE_TIME.captures(line) {
                insert_capture(&mut software, &caps, "bios_compile_time");
            } else if let Some(caps) = CHASSIS.captures(line) {
                insert_capture(&mut hardware, &caps, "model");
                insert_capture(&mut hardware, &caps, "slots");
                let chassis = format!("{} {}", &caps["model"], &caps["suffix"]);
                hardware.insert("chassis".to_string(), chassis.into());
            } else if let Some(caps) = CPU_MEMORY.captures(line) {
                insert_capture(&mut hardware, &caps, "cpu");
                insert_capture(&mut hardware, &caps, "memory");
            } else if let Some(caps) = BOARD_ID.captures(line) {
                insert_capture(&mut hardware, &caps, "processor_board_id");
            } else if let Some(caps) = DEVICE_NAME.captures(line) {
                insert_capture(&mut hardware, &caps, "device_name");
            } else if let Some(caps) = BOOTFLASH.captures(line) {
                insert_capture(&mut hardware, &caps, "bootflash");
            } else if let Some(caps) = KERNEL_UPTIME.captures(line) {
                for key in ["days", "hours", "minutes", "seconds"] {
                    if let Ok(n) = caps[key].parse::<u64>() {
                        kernel_uptime.insert(key.to_string(), n.into());
                    }
                }
            } else if let Some(caps) = REASON.captures(line) {
                insert_capture(&mut platform, &caps, "reason");
            }
        }

        insert_nonempty(&mut platform, "software", software);
        insert_nonempty(&mut platform, "hardware", hardware);
        insert_nonempty(&mut platform, "kernel_uptime", kernel_uptime);
        if !plugins.is_empty() {
            platform.insert("plugins".to_string(), Value::Array(plugins));
        }

        let mut result = Map::new();
        insert_nonempty(&mut result, "platform", platform);
        result
    }
}

static VRF_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^IP Interface Status for VRF "(?P<vrf>[^"]+)""#).unwrap());
static IP_BRIEF_ROW: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<interface>\S+)\s+(?P<ip_address>\d{1,3}(?:\.\d{1,3}){3})\s+(?P<interface_status>\S+)$",
    )
    .unwrap()
});

/// `show ip interface brief` as `{"interface": {<name>: {...}}}`.
pub struct ShowIpInterfaceBrief;

impl ShowParser for ShowIpInterfaceBrief {
    fn command(&self) -> &'static str {
        "show ip interface brief"
    }

    fn parse(&self, output: &str) -> Map<String, Value> {
        let mut interfaces = Map::new();
        let mut vrf = String::from("default");

        for line in output.lines().map(str::trim) {
            if let Some(caps) = VRF_HEADER.captures(line) {
                vrf = caps["vrf"].to_string();
                continue;
            }
            let Some(caps) = IP_BRIEF_ROW.captures(line) else {
                continue;
            };
            let mut entry = Map::new();
            entry.insert("vrf".to_string(), vrf.clone().into());
            insert_capture(&mut entry, &caps, "ip_address");
            insert_capture(&mut entry, &caps, "interface_status");
            interfaces.insert(caps["interface"].to_string(), Value::Object(entry));
        }

        let mut result = Map::new();
        insert_nonempty(&mut result, "interface", interfaces);
        result
    }
}
