#[cfg(test)]
mod tests {
    use almuraqib::libs::config::{parse_endpoint_list, Config, EndpointConfig, TranslationConfig, UpstreamConfig, CONFIG_FILE_NAME};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Temporary directory holding a config file path for each test.
    struct ConfigTestContext {
        _temp_dir: TempDir,
        path: PathBuf,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            ConfigTestContext {
                path: temp_dir.path().join(CONFIG_FILE_NAME),
                _temp_dir: temp_dir,
            }
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.upstream.api_url, "https://script.google.com");
        assert!(!config.upstream.script_id.is_empty());
        assert_eq!(config.upstream.timeout_secs, Some(30));
        assert_eq!(config.translation.endpoints.len(), 3);
        assert_eq!(config.translation.endpoints[0].url, "https://libretranslate.de/translate");
        assert_eq!(config.translation.cache_capacity, 512);
        assert_eq!(config.translation.timeout_secs, Some(10));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(ctx: &mut ConfigTestContext) {
        let config = Config {
            upstream: UpstreamConfig {
                api_url: "https://script.example.com".to_string(),
                script_id: "deployment-1".to_string(),
                timeout_secs: None,
            },
            translation: TranslationConfig {
                endpoints: vec![EndpointConfig::new("local", "http://localhost:5000/translate")],
                cache_capacity: 16,
                timeout_secs: Some(3),
            },
        };

        config.save_to(&ctx.path).unwrap();
        let loaded = Config::read_from(&ctx.path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_config_uses_defaults(ctx: &mut ConfigTestContext) {
        fs::write(&ctx.path, r#"{ "upstream": { "script_id": "custom" } }"#).unwrap();
        let config = Config::read_from(&ctx.path).unwrap();
        assert_eq!(config.upstream.script_id, "custom");
        assert_eq!(config.upstream.api_url, "https://script.google.com");
        assert_eq!(config.translation, TranslationConfig::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_malformed_config_is_an_error(ctx: &mut ConfigTestContext) {
        fs::write(&ctx.path, "{ broken").unwrap();
        assert!(Config::read_from(&ctx.path).is_err());
    }

    #[test]
    fn test_parse_endpoint_list() {
        let endpoints = parse_endpoint_list(" https://a.example.org/translate , ,http://b.example.net:5000/translate");
        assert_eq!(
            endpoints,
            vec![
                EndpointConfig::new("a.example.org", "https://a.example.org/translate"),
                EndpointConfig::new("b.example.net:5000", "http://b.example.net:5000/translate"),
            ]
        );
        assert!(parse_endpoint_list("").is_empty());
    }
}
