#[cfg(test)]
mod tests {
    use crate::driver::{query_devices, target_devices, SANDBOX_TESTBED};
    use crate::query::QueryOptions;
    use crate::tests::{
        dir_entries, live_testbed, mock_device_yaml, mock_testbed_yaml, NXOS_SHOW_VERSION,
    };
    use crate::QueryError;

    fn quiet(dir: &std::path::Path, save: bool) -> QueryOptions {
        QueryOptions {
            save,
            log_stdout: false,
            output_dir: dir.to_path_buf(),
            ..Default::default()
        }
    }

    #[test]
    fn sandbox_gets_two_fixed_devices() {
        let tb = live_testbed(&mock_testbed_yaml(
            SANDBOX_TESTBED,
            &["other", "csr1000v-1", "sbx-n9kv-ao", "another"],
        ));
        assert_eq!(target_devices(&tb), vec!["sbx-n9kv-ao", "csr1000v-1"]);
    }

    #[test]
    fn other_testbeds_get_every_device_in_order() {
        let tb = live_testbed(&mock_testbed_yaml("lab", &["zeta", "alpha", "mid"]));
        assert_eq!(target_devices(&tb), vec!["zeta", "alpha", "mid"]);
    }

    #[tokio::test]
    async fn sandbox_run_queries_only_the_known_pair() {
        let dir = tempfile::tempdir().unwrap();
        let mut yaml = format!("testbed:\n  name: {SANDBOX_TESTBED}\ndevices:\n");
        yaml.push_str(&mock_device_yaml("extra", "iosxe", crate::tests::CSR_SHOW_VERSION));
        yaml.push_str(&mock_device_yaml("csr1000v-1", "iosxe", crate::tests::CSR_SHOW_VERSION));
        yaml.push_str(&mock_device_yaml("sbx-n9kv-ao", "nxos", NXOS_SHOW_VERSION));
        let mut tb = live_testbed(&yaml);

        let results = query_devices(&mut tb, &quiet(dir.path(), true)).await.unwrap();

        let names: Vec<&str> = results.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["sbx-n9kv-ao", "csr1000v-1"]);
        assert_eq!(results[0].1["platform"]["os"], "NX-OS");
        assert_eq!(results[1].1["version"]["os"], "IOS-XE");
        assert!(!tb.device("extra").unwrap().is_connected());
        assert_eq!(
            dir_entries(dir.path()),
            vec!["csr1000v-1.json", "sbx-n9kv-ao.json"]
        );
    }

    #[tokio::test]
    async fn sandbox_missing_device_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut tb = live_testbed(&mock_testbed_yaml(SANDBOX_TESTBED, &["csr1000v-1"]));

        let err = query_devices(&mut tb, &quiet(dir.path(), false))
            .await
            .unwrap_err();
        assert!(matches!(err, QueryError::DeviceNotFound(ref n) if n == "sbx-n9kv-ao"));
    }

    #[tokio::test]
    async fn first_failure_stops_the_run() {
        let dir = tempfile::tempdir().unwrap();
        let yaml = format!(
            "testbed:\n  name: lab\ndevices:\n{}  broken:\n    os: iosxe\n    connections:\n      cli:\n        protocol: mock\n{}",
            mock_device_yaml("first", "iosxe", crate::tests::CSR_SHOW_VERSION),
            mock_device_yaml("last", "iosxe", crate::tests::CSR_SHOW_VERSION),
        );
        let mut tb = live_testbed(&yaml);

        let err = query_devices(&mut tb, &quiet(dir.path(), true))
            .await
            .unwrap_err();

        assert!(matches!(err, QueryError::Mock { ref device, .. } if device == "broken"));
        assert_eq!(dir_entries(dir.path()), vec!["first.json"]);
        assert!(!tb.device("last").unwrap().is_connected());
    }

    #[tokio::test]
    async fn disconnect_all_closes_sessions() {
        let dir = tempfile::tempdir().unwrap();
        let mut tb = live_testbed(&mock_testbed_yaml("lab", &["a", "b"]));
        query_devices(&mut tb, &quiet(dir.path(), false)).await.unwrap();
        assert!(tb.devices.iter().all(|d| d.is_connected()));

        tb.disconnect_all().await;
        assert!(tb.devices.iter().all(|d| !d.is_connected()));
    }
}
