//! Parsers for IOS and IOS-XE.

use crate::{insert_capture, insert_nonempty, ShowParser};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

static XE_VERSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Cisco IOS[ -]XE Software, Version (?P<xe_version>\S+)$").unwrap());
static IOS_SOFTWARE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^Cisco IOS Software(?: \[(?P<code_name>[^\]]+)\])?, (?P<platform>.+?) Software \((?P<image_id>[^)]+)\), Version (?P<version>[^,\s]+),?\s*(?P<label>.*)$",
    )
    .unwrap()
});
static COMPILED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Compiled (?P<compiled_date>.+) by (?P<compiled_by>\S+)$").unwrap());
static ROM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^ROM: (?P<rom>.+)$").unwrap());
static UPTIME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<hostname>\S+) uptime is (?P<uptime>.+)$").unwrap());
static UPTIME_CP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^Uptime for this control processor is (?P<uptime_this_cp>.+)$").unwrap()
});
static RETURNED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^System returned to ROM by (?P<returned_to_rom_by>.+)$").unwrap());
static SYSTEM_IMAGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^System image file is "(?P<system_image>[^"]+)"$"#).unwrap());
static RELOAD_REASON: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Last reload reason: (?P<last_reload_reason>.+)$").unwrap());
static LICENSE_LEVEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^License Level: (?P<license_level>\S+)$").unwrap());
static LICENSE_TYPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^License Type: (?P<license_type>.+)$").unwrap());
static NEXT_LICENSE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^Next reload license Level: (?P<next_reload_license_level>\S+)$").unwrap()
});
static CHASSIS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?i:cisco) (?P<chassis>\S+) (?:\((?P<processor_type>[^)]+)\) )?processor(?: \(revision (?P<revision>[^)]+)\))? with (?P<main_mem>\d+)K(?:/\d+K)? bytes of memory\.$",
    )
    .unwrap()
});
static BOARD_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Processor board ID (?P<chassis_sn>\S+)$").unwrap());
static INTERFACES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<count>\d+) (?P<kind>.+?) interfaces?$").unwrap());
static MEMORY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<size>\d+)K bytes of (?P<kind>non-volatile configuration|physical) memory\.$")
        .unwrap()
});
static DISK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<size>\d+)K bytes of (?P<kind>.+?) at (?P<disk>\S+?)\.?$").unwrap()
});
static CONFIG_REGISTER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^Configuration register is (?P<curr_config_register>\S+)(?: \(will be (?P<next_config_register>\S+) at next reload\))?$",
    )
    .unwrap()
});

/// `show version` as `{"version": {...}}`.
pub struct ShowVersion;

impl ShowParser for ShowVersion {
    fn command(&self) -> &'static str {
        "show version"
    }

    fn parse(&self, output: &str) -> Map<String, Value> {
        let mut version = Map::new();
        let mut interfaces = Map::new();
        let mut mem_size = Map::new();
        let mut disks = Map::new();

        for line in output.lines().map(str::trim) {
            if line.is_empty() {
                continue;
            }

            if let Some(caps) = XE_VERSION.captures(line) {
                insert_capture(&mut version, &caps, "xe_version");
            } else if let Some(caps) = IOS_SOFTWARE.captures(line) {
                for key in ["code_name", "platform", "image_id", "version", "label"] {
                    insert_capture(&mut version, &caps, key);
                }
                let short = version_short(&caps["version"]);
                version.insert("version_short".to_string(), Value::String(short));
            } else if let Some(caps) = COMPILED.captures(line) {
                insert_capture(&mut version, &caps, "compiled_date");
                insert_capture(&mut version, &caps, "compiled_by");
            } else if let Some(caps) = ROM.captures(line) {
                insert_capture(&mut version, &caps, "rom");
            } else if let Some(caps) = UPTIME_CP.captures(line) {
                insert_capture(&mut version, &caps, "uptime_this_cp");
            } else if let Some(caps) = UPTIME.captures(line) {
                insert_capture(&mut version, &caps, "hostname");
                insert_capture(&mut version, &caps, "uptime");
            } else if let Some(caps) = RETURNED.captures(line) {
                insert_capture(&mut version, &caps, "returned_to_rom_by");
            } else if let Some(caps) = SYSTEM_IMAGE.captures(line) {
                insert_capture(&mut version, &caps, "system_image");
            } else if let Some(caps) = RELOAD_REASON.captures(line) {
                insert_capture(&mut version, &caps, "last_reload_reason");
            } else if let Some(caps) = LICENSE_LEVEL.captures(line) {
                insert_capture(&mut version, &caps, "license_level");
            } else if let Some(caps) = LICENSE_TYPE.captures(line) {
                insert_capture(&mut version, &caps, "license_type");
            } else if let Some(caps) = NEXT_LICENSE.captures(line) {
                insert_capture(&mut version, &caps, "next_reload_license_level");
            } else if let Some(caps) = CHASSIS.captures(line) {
                insert_capture(&mut version, &caps, "chassis");
                insert_capture(&mut version, &caps, "processor_type");
                insert_capture(&mut version, &caps, "main_mem");
                version.insert("rtr_type".to_string(), caps["chassis"].into());
            } else if let Some(caps) = BOARD_ID.captures(line) {
                insert_capture(&mut version, &caps, "chassis_sn");
                version.insert("processor_board_id".to_string(), caps["chassis_sn"].into());
            } else if let Some(caps) = MEMORY.captures(line) {
                mem_size.insert(caps["kind"].to_string(), caps["size"].into());
            } else if let Some(caps) = DISK.captures(line) {
                let mut disk = Map::new();
                disk.insert("disk_size".to_string(), caps["size"].into());
                disk.insert("type_of_disk".to_string(), caps["kind"].into());
                disks.insert(caps["disk"].to_string(), Value::Object(disk));
            } else if let Some(caps) = INTERFACES.captures(line) {
                interfaces.insert(caps["kind"].to_string(), caps["count"].into());
            } else if let Some(caps) = CONFIG_REGISTER.captures(line) {
                insert_capture(&mut version, &caps, "curr_config_register");
                insert_capture(&mut version, &caps, "next_config_register");
            }
        }

        insert_nonempty(&mut version, "number_of_intfs", interfaces);
        insert_nonempty(&mut version, "mem_size", mem_size);
        insert_nonempty(&mut version, "disks", disks);

        if version.contains_key("version") || version.contains_key("xe_version") {
            let os = if version.contains_key("xe_version") {
                "IOS-XE"
            } else {
                "IOS"
            };
            version.insert("os".to_string(), os.into());
        }

        let mut result = Map::new();
        insert_nonempty(&mut result, "version", version);
        result
    }
}

/// Major and minor release: `16.9.3` gives `16.9`, `15.6(2)T` gives `15.6`.
fn version_short(version: &str) -> String {
    let base = version.split('(').next().unwrap_or(version);
    base.split('.').take(2).collect::<Vec<_>>().join(".")
}

static IP_BRIEF_ROW: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<interface>\S+)\s+(?P<ip_address>\S+)\s+(?P<interface_is_ok>YES|NO)\s+(?P<method>\S+)\s+(?P<status>administratively down|up|down|deleted)\s+(?P<protocol>up|down)$",
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

        for line in output.lines().map(str::trim) {
            let Some(caps) = IP_BRIEF_ROW.captures(line) else {
                continue;
            };
            let mut entry = Map::new();
            for key in [
                "ip_address",
                "interface_is_ok",
                "method",
                "status",
                "protocol",
            ] {
                insert_capture(&mut entry, &caps, key);
            }
            interfaces.insert(caps["interface"].to_string(), Value::Object(entry));
        }

        let mut result = Map::new();
        insert_nonempty(&mut result, "interface", interfaces);
        result
    }
}
