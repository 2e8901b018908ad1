#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use tutordesk::libs::config::{Config, ServerConfig};

    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_without_file_returns_defaults(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert!(config.server.is_none());

        let server = config.server();
        assert_eq!(server.host, "127.0.0.1");
        assert_eq!(server.port, 8080);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_roundtrip(_ctx: &mut ConfigTestContext) {
        let config = Config {
            server: Some(ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 9000,
            }),
        };
        config.save().unwrap();

        let loaded = Config::read().unwrap();
        let server = loaded.server();
        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 9000);
    }
}
