
/// Two devices, one link between them, and testbed-wide credentials.
pub const LAB_TESTBED: &str = r#"
testbed:
  name: lab
  credentials:
    default:
      username: admin
      password: secret
devices:
  rtr-2:
    os: iosxe
    type: router
    connections:
      cli:
        protocol: ssh
        ip: 192.0.2.2
  rtr-1:
    os: nxos
    platform: n9k
    credentials:
      default:
        username: operator
        password: other
    connections:
      cli:
        protocol: ssh
        ip: 192.0.2.1
        port: 2222
        arguments:
          connection_timeout: 5
  rtr-3:
    os: iosxe
    credentials:
      default:
        password: rtr3-only
    connections:
      defaults:
        class: unicon.Unicon
      a:
        protocol: mock
        outputs:
          show version: "Cisco IOS XE Software, Version 17.03.01"
topology:
  rtr-1:
    interfaces:
      Ethernet1/1:
        link: link-a
        type: ethernet
      Ethernet1/2:
        type: ethernet
  rtr-2:
    interfaces:
      GigabitEthernet1:
        link: link-a
      GigabitEthernet2:
        link: link-b
"#;
