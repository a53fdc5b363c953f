use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::paths::resolve_home_dir;

/// Main application configuration with strongly-typed sections.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Core server configuration.
    pub server: ServerConfig,
    /// Profile store configuration.
    #[serde(default)]
    pub store: StoreConfig,
    /// Logging configuration (optional, uses defaults if None).
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub home_dir: String, // will be normalized to absolute path
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub timeout_sec: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    /// Profiles JSON document, relative paths resolve against `home_dir`.
    pub data_file: String,
    /// Serialize concurrent writes through a process-wide lock.
    #[serde(default = "default_serialize_writes")]
    pub serialize_writes: bool,
}

fn default_serialize_writes() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub console_level: String, // "info", "debug", "error", "off"
    #[serde(default)]
    pub file: String, // "logs/taply.log", empty disables the file sink
    #[serde(default)]
    pub file_level: String,
    #[serde(default)]
    pub max_backups: Option<usize>,
    #[serde(default)]
    pub max_size_mb: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            // Empty => platform default resolved by resolve_home_dir():
            // Windows: %APPDATA%/.taply
            // Unix/macOS: $HOME/.taply
            home_dir: String::new(),
            host: "127.0.0.1".to_string(),
            port: 4000,
            timeout_sec: 0,
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_file: "profiles.json".to_string(),
            serialize_writes: true,
        }
    }
}

pub fn default_logging_config() -> LoggingConfig {
    LoggingConfig {
        console_level: "info".to_string(),
        file: "logs/taply.log".to_string(),
        file_level: "debug".to_string(),
        max_backups: Some(3),
        max_size_mb: Some(100),
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            store: StoreConfig::default(),
            logging: Some(default_logging_config()),
        }
    }
}

impl AppConfig {
    /// Load configuration with layered loading: defaults → YAML file →
    /// environment variables. Also normalizes `server.home_dir` into an
    /// absolute path and creates the directory.
    pub fn load_layered<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        use figment::{
            providers::{Env, Format, Serialized, Yaml},
            Figment,
        };

        // Start from a minimal base where optional sections are None, so
        // they remain None unless explicitly provided by YAML/ENV.
        let base = AppConfig {
            server: ServerConfig::default(),
            store: StoreConfig::default(),
            logging: None,
        };

        let figment = Figment::new()
            .merge(Serialized::defaults(base))
            .merge(Yaml::file(config_path.as_ref()))
            // Example: TAPLY__SERVER__PORT=4000 maps to server.port
            .merge(Env::prefixed("TAPLY__").split("__"));

        let mut config: AppConfig = figment
            .extract()
            .with_context(|| "Failed to extract config from figment".to_string())?;

        normalize_home_dir_inplace(&mut config.server)
            .context("Failed to resolve server.home_dir")?;

        Ok(config)
    }

    /// Load configuration from file or create with default values.
    pub fn load_or_default<P: AsRef<Path>>(config_path: Option<P>) -> Result<Self> {
        match config_path {
            Some(path) => Self::load_layered(path),
            None => {
                let mut c = Self::default();
                normalize_home_dir_inplace(&mut c.server)
                    .context("Failed to resolve server.home_dir (defaults)")?;
                Ok(c)
            }
        }
    }

    /// Serialize configuration to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize config to YAML")
    }

    /// Absolute path of the profiles JSON document. A relative
    /// `store.data_file` lands under `server.home_dir`.
    pub fn data_file_path(&self) -> PathBuf {
        let p = Path::new(&self.store.data_file);
        if p.is_absolute() {
            p.to_path_buf()
        } else {
            Path::new(&self.server.home_dir).join(p)
        }
    }

    /// Apply overrides from command line arguments.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(port) = args.port {
            self.server.port = port;
        }

        let logging = self.logging.get_or_insert_with(default_logging_config);
        logging.console_level = match args.verbose {
            0 => logging.console_level.clone(), // keep
            1 => "debug".to_string(),
            _ => "trace".to_string(),
        };
    }
}

/// Command line arguments structure.
#[derive(Debug, Clone)]
pub struct CliArgs {
    pub config: Option<String>,
    pub port: Option<u16>,
    pub print_config: bool,
    pub verbose: u8,
}

const fn default_subdir() -> &'static str {
    ".taply"
}

/// Normalize `server.home_dir` and store the absolute path back.
fn normalize_home_dir_inplace(server: &mut ServerConfig) -> Result<()> {
    // Treat empty string as "not provided" => None.
    let opt = if server.home_dir.trim().is_empty() {
        None
    } else {
        Some(server.home_dir.clone())
    };

    let resolved: PathBuf = resolve_home_dir(opt, default_subdir(), /*create*/ true)
        .context("home_dir normalization failed")?;

    server.home_dir = resolved.to_string_lossy().to_string();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{env, fs};
    use tempfile::tempdir;

    /// Helper: a normalized home_dir should be absolute and not start with '~'.
    fn is_normalized_path(p: &str) -> bool {
        let pb = PathBuf::from(p);
        pb.is_absolute() && !p.starts_with('~')
    }

    #[test]
    fn test_default_config_structure() {
        let config = AppConfig::default();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 4000);
        // raw (not yet normalized)
        assert_eq!(config.server.home_dir, "");
        assert_eq!(config.server.timeout_sec, 0);

        assert_eq!(config.store.data_file, "profiles.json");
        assert!(config.store.serialize_writes);

        let logging = config.logging.as_ref().unwrap();
        assert_eq!(logging.console_level, "info");
        assert_eq!(logging.file, "logs/taply.log");
    }

    #[test]
    fn test_load_layered_normalizes_home_dir() {
        let tmp = tempdir().unwrap();
        let cfg_path = tmp.path().join("cfg.yaml");

        // Provide a user path with "~" to ensure expansion and normalization.
        let yaml = r#"
server:
  home_dir: "~/.test_taply"
  host: "0.0.0.0"
  port: 9090
  timeout_sec: 30

store:
  data_file: "data/profiles.json"
  serialize_writes: false

logging:
  console_level: debug
  file: "logs/default.log"
"#;
        fs::write(&cfg_path, yaml).unwrap();

        let config = AppConfig::load_layered(&cfg_path).unwrap();

        assert!(is_normalized_path(&config.server.home_dir));
        assert!(config.server.home_dir.ends_with(".test_taply"));
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.timeout_sec, 30);

        assert_eq!(config.store.data_file, "data/profiles.json");
        assert!(!config.store.serialize_writes);

        let logging = config.logging.as_ref().unwrap();
        assert_eq!(logging.console_level, "debug");
        assert_eq!(logging.file, "logs/default.log");
    }

    #[test]
    fn test_minimal_yaml_config() {
        let tmp = tempdir().unwrap();
        let cfg_path = tmp.path().join("cfg.yaml");

        let yaml = r#"
server:
  home_dir: "~/.minimal"
  host: "localhost"
  port: 8080
"#;
        fs::write(&cfg_path, yaml).unwrap();

        let config = AppConfig::load_layered(&cfg_path).unwrap();

        assert!(is_normalized_path(&config.server.home_dir));
        assert!(config.server.home_dir.ends_with(".minimal"));
        assert_eq!(config.server.host, "localhost");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.timeout_sec, 0);

        // Optional logging defaults to None; store falls back to defaults.
        assert!(config.logging.is_none());
        assert_eq!(config.store.data_file, "profiles.json");
    }

    #[test]
    fn test_data_file_resolves_under_home_dir() {
        let tmp = tempdir().unwrap();
        #[cfg(target_os = "windows")]
        env::set_var("APPDATA", tmp.path());
        #[cfg(not(target_os = "windows"))]
        env::set_var("HOME", tmp.path());

        let config = AppConfig::load_or_default(None::<&str>).unwrap();
        let data_file = config.data_file_path();

        assert!(data_file.is_absolute());
        assert!(data_file.starts_with(&config.server.home_dir));
        assert!(data_file.ends_with("profiles.json"));
    }

    #[test]
    fn test_cli_overrides() {
        let mut config = AppConfig::default();

        let args = super::CliArgs {
            config: None,
            port: Some(3000),
            print_config: false,
            verbose: 2, // trace
        };

        config.apply_cli_overrides(&args);

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.logging.as_ref().unwrap().console_level, "trace");
    }

    #[test]
    fn test_cli_verbose_levels_matrix() {
        for (verbose_level, expected_log_level) in [
            (0, "info"), // unchanged from default
            (1, "debug"),
            (2, "trace"),
            (3, "trace"), // cap at trace
        ] {
            let mut config = AppConfig::default();
            let args = super::CliArgs {
                config: None,
                port: None,
                print_config: false,
                verbose: verbose_level,
            };

            config.apply_cli_overrides(&args);

            assert_eq!(
                config.logging.as_ref().unwrap().console_level,
                expected_log_level
            );
        }
    }

    #[test]
    fn test_to_yaml_roundtrip_basic() {
        let config = AppConfig::default();
        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("server:"));
        assert!(yaml.contains("store:"));
        assert!(yaml.contains("logging:"));

        let roundtrip: AppConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(roundtrip.server.port, config.server.port);
        assert_eq!(roundtrip.store.data_file, config.store.data_file);
    }

    #[test]
    fn test_invalid_yaml_missing_required_field() {
        let invalid_yaml = r#"
server:
  home_dir: "~/.test"
  # Missing required host field
  port: 4000
"#;

        let result: Result<AppConfig, _> = serde_yaml::from_str(invalid_yaml);
        assert!(result.is_err());
    }
}
