use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, Deserialize)]
pub struct Config {
    /// Policy seed file loaded into the store at startup.
    #[serde(default = "default_policy_file")]
    pub policy_file: PathBuf,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            policy_file: default_policy_file(),
            logging: LoggingConfig::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_decision_log_path")]
    pub decision_log_path: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            decision_log_path: default_decision_log_path(),
        }
    }
}

// ---------------------------------------------------------------------------
// Default-value functions used by serde
// ---------------------------------------------------------------------------

fn default_policy_file() -> PathBuf {
    PathBuf::from("policies.yaml")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_decision_log_path() -> PathBuf {
    PathBuf::from("decisions.jsonl")
}

// ---------------------------------------------------------------------------
// Loader
// ---------------------------------------------------------------------------

/// Load configuration from a YAML file.
///
/// If the file does not exist a default configuration is returned and a
/// warning is emitted, so lexguard can run with sensible defaults before
/// any config has been written.
pub fn load(path: &Path) -> anyhow::Result<Config> {
    if !path.exists() {
        warn!(
            path = %path.display(),
            "configuration file not found; using defaults"
        );
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

    let config: Config = serde_yml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("failed to parse config file {}: {e}", path.display()))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let config = Config::default();
        assert_eq!(config.policy_file, PathBuf::from("policies.yaml"));
        assert_eq!(config.logging.level, "info");
        assert_eq!(
            config.logging.decision_log_path,
            PathBuf::from("decisions.jsonl")
        );
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = load(Path::new("/does/not/exist.yaml")).unwrap();
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexguard.yaml");
        std::fs::write(
            &path,
            r#"
logging:
  level: "debug"
"#,
        )
        .unwrap();

        let config = load(&path).unwrap();
        assert_eq!(config.logging.level, "debug");
        // Unspecified fields keep their defaults.
        assert_eq!(config.policy_file, PathBuf::from("policies.yaml"));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexguard.yaml");
        std::fs::write(&path, "policy_file: [not, a, path").unwrap();
        assert!(load(&path).is_err());
    }
}
