//! Configuration Loader Tests
//!
//! `figment::Jail` gives every test its own working directory and restores
//! environment variables afterwards.

use figment::Jail;
use wireup_infrastructure::config::{AppConfig, ConfigLoader, ContainerConfig};
use wireup_infrastructure::constants::DEFAULT_LOG_LEVEL;

#[test]
fn test_config_loader_default() {
    Jail::expect_with(|_jail| {
        let config = ConfigLoader::new().load().map_err(|e| e.to_string())?;

        assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
        assert!(config.container.modules.is_empty());
        assert!(!config.container.report);
        Ok(())
    });
}

#[test]
fn test_default_file_is_discovered() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "wireup.toml",
            r#"
                [container]
                modules = ["clock", "greeting"]
                report = true
            "#,
        )?;

        let config = ConfigLoader::new().load().map_err(|e| e.to_string())?;
        assert_eq!(config.container.modules, vec!["clock", "greeting"]);
        assert!(config.container.report);
        assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
        Ok(())
    });
}

#[test]
fn test_nested_default_directory_is_discovered() {
    Jail::expect_with(|jail| {
        std::fs::create_dir("wireup").map_err(|e| e.to_string())?;
        jail.create_file("wireup/wireup.toml", "[logging]\nlevel = \"warn\"\n")?;

        let config = ConfigLoader::new().load().map_err(|e| e.to_string())?;
        assert_eq!(config.logging.level, "warn");
        Ok(())
    });
}

#[test]
fn test_env_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "custom.toml",
            r#"
                [logging]
                level = "debug"
                json_format = true
            "#,
        )?;
        jail.set_env("WIREUP_LOGGING__LEVEL", "trace");
        jail.set_env("WIREUP_CONTAINER__REPORT", "true");

        let loader = ConfigLoader::new().with_config_path("custom.toml");
        let config = loader.load().map_err(|e| e.to_string())?;

        assert_eq!(config.logging.level, "trace");
        assert!(config.logging.json_format);
        assert!(config.container.report);
        assert_eq!(
            loader.config_path().map(|p| p.to_string_lossy().into_owned()),
            Some("custom.toml".to_string())
        );
        Ok(())
    });
}

#[test]
fn test_missing_explicit_file_falls_back_to_defaults() {
    Jail::expect_with(|_jail| {
        let config = ConfigLoader::new()
            .with_config_path("absent.toml")
            .load()
            .map_err(|e| e.to_string())?;
        assert_eq!(config, AppConfig::default());
        Ok(())
    });
}

#[test]
fn test_custom_env_prefix() {
    Jail::expect_with(|jail| {
        jail.set_env("WIREUP_LOGGING__LEVEL", "not-a-level");
        jail.set_env("ACME_LOGGING__LEVEL", "error");

        let config = ConfigLoader::new()
            .with_env_prefix("ACME")
            .load()
            .map_err(|e| e.to_string())?;
        assert_eq!(config.logging.level, "error");
        Ok(())
    });
}

#[test]
fn test_config_save_load() {
    Jail::expect_with(|jail| {
        let config_path = jail.directory().join("saved.toml");
        let original = AppConfig {
            container: ContainerConfig {
                modules: vec!["greeting".to_string()],
                report: true,
            },
            ..AppConfig::default()
        };

        let loader = ConfigLoader::new();
        loader
            .save_to_file(&original, &config_path)
            .map_err(|e| e.to_string())?;

        let loaded = ConfigLoader::new()
            .with_config_path(&config_path)
            .load()
            .map_err(|e| e.to_string())?;
        assert_eq!(loaded.container, original.container);
        Ok(())
    });
}

#[test]
fn test_save_to_missing_directory_is_io_error() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let path = temp_dir.path().join("missing").join("saved.toml");

    let result = ConfigLoader::new().save_to_file(&AppConfig::default(), &path);
    assert!(matches!(
        result,
        Err(wireup_domain::error::Error::Io { .. })
    ));
}
