#[cfg(test)]
mod tests {
    use paydesk::libs::config::{CacheConfig, Config, ListingConfig, ServerConfig, CONFIG_FILE_NAME};
    use paydesk::libs::data_storage::DataStorage;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Redirects the data directory into a temporary home for each test.
    struct ConfigTestContext {
        _temp_dir: TempDir,
        api_url: String,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext {
                _temp_dir: temp_dir,
                api_url: "https://hr.example.com/api".to_string(),
            }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_default_config(_ctx: &mut ConfigTestContext) {
        let config = Config::default();
        assert!(config.server.is_none());
        assert!(config.cache.is_none());
        assert_eq!(config.cache_or_default().ttl_secs, 120);
        assert_eq!(config.listing_or_default().per_page, 25);
        assert_eq!(config.server_or_default().auth_retry_delay_ms, 1000);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(ctx: &mut ConfigTestContext) {
        let config = Config {
            server: Some(ServerConfig {
                api_url: ctx.api_url.clone(),
                auth_retry_delay_ms: 250,
            }),
            cache: Some(CacheConfig { ttl_secs: 30 }),
            listing: Some(ListingConfig { per_page: 50 }),
        };
        config.save().unwrap();

        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        assert!(path.exists());

        let read_config = Config::read().unwrap();
        assert_eq!(read_config.cache, config.cache);
        assert_eq!(read_config.listing, config.listing);
        assert_eq!(read_config.server_or_default().auth_retry_delay_ms, 250);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_retry_delay_uses_default(_ctx: &mut ConfigTestContext) {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        std::fs::write(&path, r#"{"server": {"api_url": "http://10.0.0.5/api"}}"#).unwrap();

        let config = Config::read().unwrap();
        assert_eq!(config.server_or_default().auth_retry_delay_ms, 1000);
        assert!(config.listing.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_malformed_config_is_reported(_ctx: &mut ConfigTestContext) {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        std::fs::write(&path, r#"{"server": {"api_url": "#).unwrap();

        let error = Config::read().unwrap_err();
        assert!(format!("{:#}", error).contains(CONFIG_FILE_NAME));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), r#"{"server": {"api_url": "#);
    }
}
