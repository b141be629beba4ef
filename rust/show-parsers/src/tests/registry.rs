#[cfg(test)]
mod tests {
    use crate::tests::{IOSXE_SHOW_VERSION, NXOS_SHOW_VERSION};
    use crate::{normalize_command, ParseError, ParserRegistry, ShowParser};
    use serde_json::{Map, Value};

    #[test]
    fn normalizes_commands() {
        assert_eq!(normalize_command("  SHOW   Version \t"), "show version");
    }

    #[test]
    fn abbreviated_lookup() {
        let registry = ParserRegistry::default();

        assert_eq!(registry.lookup("iosxe", "sh ver").unwrap().command(), "show version");
        assert_eq!(
            registry.lookup("nxos", "sh ip int br").unwrap().command(),
            "show ip interface brief"
        );
        assert_eq!(
            registry.lookup("IOSXE", "Show Version").unwrap().command(),
            "show version"
        );
    }

    #[test]
    fn ios_is_an_alias_for_iosxe() {
        let registry = ParserRegistry::default();
        assert_eq!(registry.commands("ios"), registry.commands("iosxe"));
        assert_eq!(
            registry.commands("iosxe"),
            vec!["show version", "show ip interface brief"]
        );
    }

    #[test]
    fn unsupported_lookups() {
        let registry = ParserRegistry::default();

        assert_eq!(
            registry.lookup("junos", "show version").err(),
            Some(ParseError::UnsupportedPlatform("junos".to_string()))
        );
        assert!(matches!(
            registry.lookup("iosxe", "show clock"),
            Err(ParseError::UnsupportedCommand { .. })
        ));
        assert!(matches!(
            registry.lookup("iosxe", "show version detail"),
            Err(ParseError::UnsupportedCommand { .. })
        ));
    }

    struct Fixed(&'static str);

    impl ShowParser for Fixed {
        fn command(&self) -> &'static str {
            self.0
        }

        fn parse(&self, _output: &str) -> Map<String, Value> {
            Map::new()
        }
    }

    #[test]
    fn ambiguous_prefix() {
        let mut registry = ParserRegistry::empty();
        registry.register("test", Box::new(Fixed("show vlan")));
        registry.register("test", Box::new(Fixed("show version")));

        match registry.lookup("test", "sh v") {
            Err(ParseError::AmbiguousCommand { candidates, .. }) => {
                assert_eq!(candidates, vec!["show vlan", "show version"]);
            }
            other => panic!("expected ambiguity, got {:?}", other.map(|p| p.command())),
        }
        // An exact match is never ambiguous.
        assert_eq!(registry.lookup("test", "show vlan").unwrap().command(), "show vlan");
    }

    #[test]
    fn parse_dispatches_on_os() {
        let registry = ParserRegistry::default();

        let xe = registry.parse("iosxe", "show version", IOSXE_SHOW_VERSION).unwrap();
        assert!(xe.get("version").is_some());

        let nx = registry.parse("nxos", "show version", NXOS_SHOW_VERSION).unwrap();
        assert!(nx.get("platform").is_some());
    }

    #[test]
    fn empty_result_is_an_error() {
        let registry = ParserRegistry::default();
        assert_eq!(
            registry.parse("nxos", "show version", "% Invalid command"),
            Err(ParseError::EmptyOutput {
                command: "show version".to_string()
            })
        );
    }
}
