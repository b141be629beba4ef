#[cfg(test)]
mod tests {
    use crate::connection::{MockSession, Session};
    use crate::QueryError;
    use testbed::{ConnectionSpec, Protocol};

    fn spec() -> ConnectionSpec {
        ConnectionSpec {
            protocol: Protocol::Mock,
            outputs: [("Show  Version".to_string(), "out".to_string())]
                .into_iter()
                .collect(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn mock_matches_normalised_commands() {
        let mut session = MockSession::new("r1", &spec());

        assert_eq!(session.execute("show version").await.unwrap(), "out");
        assert_eq!(session.execute(" SHOW VERSION ").await.unwrap(), "out");
        assert_eq!(session.history, vec!["show version", "show version"]);
    }

    #[tokio::test]
    async fn mock_unknown_command() {
        let mut session = MockSession::new("r1", &spec());
        let err = session.execute("show clock").await.unwrap_err();
        assert!(matches!(err, QueryError::Mock { ref command, .. } if command == "show clock"));
        session.disconnect().await.unwrap();
    }
}
