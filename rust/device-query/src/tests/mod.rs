pub mod connection;
pub mod driver;

use crate::device::LiveTestbed;
use testbed::Testbed;

pub const CSR_SHOW_VERSION: &str = "Cisco IOS XE Software, Version 16.09.03\n\
Cisco IOS Software [Fuji], Virtual XE Software (X86_64_LINUX_IOSD-UNIVERSALK9-M), Version 16.9.3, RELEASE SOFTWARE (fc2)\n\
csr1000v-1 uptime is 4 hours, 55 minutes\n\
Configuration register is 0x2102\n";

pub const NXOS_SHOW_VERSION: &str = "Cisco Nexus Operating System (NX-OS) Software\n\
Software\n\
  NXOS: version 9.3(3)\n\
Hardware\n\
  cisco Nexus9000 C9300v Chassis\n\
  Device name: sbx-ao\n";

/// YAML for a mock device answering `show version` with `output`.
pub fn mock_device_yaml(name: &str, os: &str, output: &str) -> String {
    let indented: String = output
        .lines()
        .map(|l| format!("            {l}\n"))
        .collect();
    format!(
        "  {name}:\n    os: {os}\n    connections:\n      cli:\n        protocol: mock\n        outputs:\n          show version: |\n{indented}"
    )
}

/// A testbed of mock iosxe devices, all answering `show version`.
pub fn mock_testbed_yaml(testbed_name: &str, devices: &[&str]) -> String {
    let mut yaml = format!("testbed:\n  name: {testbed_name}\ndevices:\n");
    for device in devices {
        yaml.push_str(&mock_device_yaml(device, "iosxe", CSR_SHOW_VERSION));
    }
    yaml
}

pub fn live_testbed(yaml: &str) -> LiveTestbed {
    LiveTestbed::new(Testbed::from_yaml_str(yaml, "test").unwrap())
}

/// Entries of `dir`, sorted.
pub fn dir_entries(dir: &std::path::Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
