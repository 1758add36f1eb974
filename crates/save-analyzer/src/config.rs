use crate::args::Cli;
use crate::presentation::formatters::parse_duration_arg;
use anyhow::{Context, Result, anyhow};
use save_analyzer_engine::SegmentConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable pointing at an alternative config file
pub const CONFIG_PATH_ENV: &str = "SAVE_ANALYZER_CONFIG";

/// Resolve the config file path based on priority:
/// 1. Explicit `--config` path (with tilde expansion)
/// 2. SAVE_ANALYZER_CONFIG environment variable (with tilde expansion)
/// 3. `<config_dir>/save-analyzer/config.toml`
///
/// Returns `None` only when no config directory can be determined.
pub fn resolve_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(expand_tilde(&path.to_string_lossy()));
    }

    if let Ok(env_path) = std::env::var(CONFIG_PATH_ENV) {
        return Some(expand_tilde(&env_path));
    }

    dirs::config_dir().map(|dir| dir.join("save-analyzer").join("config.toml"))
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

/// Contents of `config.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub dir: Option<PathBuf>,
    #[serde(default)]
    pub delay: Option<String>,
    #[serde(default)]
    pub short: Option<usize>,
    #[serde(default)]
    pub table: Option<bool>,
}

impl Config {
    /// Missing file means defaults; a file that exists must parse.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }
}

/// Effective settings after layering flags over the config file over defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// `None` means the directory of the running executable
    pub dir: Option<PathBuf>,
    pub segment: SegmentConfig,
    pub show_table: bool,
}

impl Settings {
    pub fn resolve(cli: &Cli, file: Config) -> Result<Self> {
        let defaults = SegmentConfig::default();

        let gap_threshold = match (cli.delay, file.delay.as_deref()) {
            (Some(secs), _) => secs,
            (None, Some(delay)) => parse_duration_arg(delay)
                .map_err(|e| anyhow!("Invalid delay in config file: {}", e))?,
            (None, None) => defaults.gap_threshold,
        };

        let min_saves = cli.short.or(file.short).unwrap_or(defaults.min_saves);

        Ok(Self {
            dir: cli.dir.clone().or(file.dir),
            segment: SegmentConfig::new(gap_threshold, min_saves),
            show_table: cli.table || file.table.unwrap_or(false),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    fn cli(args: &[&str]) -> Cli {
        let mut full = vec!["save-analyzer"];
        full.extend_from_slice(args);
        Cli::try_parse_from(full).unwrap()
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = Config::load_from(&temp_dir.path().join("nonexistent.toml"))?;
        assert_eq!(config, Config::default());
        Ok(())
    }

    #[test]
    fn test_load_config_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("config.toml");
        std::fs::write(
            &path,
            "dir = \"/games/saves\"\ndelay = \"45m\"\nshort = 3\ntable = true\n",
        )?;

        let config = Config::load_from(&path)?;
        assert_eq!(config.dir, Some(PathBuf::from("/games/saves")));
        assert_eq!(config.delay.as_deref(), Some("45m"));
        assert_eq!(config.short, Some(3));
        assert_eq!(config.table, Some(true));
        Ok(())
    }

    #[test]
    fn test_unknown_key_rejected() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "delai = \"45m\"\n")?;

        assert!(Config::load_from(&path).is_err());
        Ok(())
    }

    #[test]
    fn test_defaults_without_flags_or_file() -> Result<()> {
        let settings = Settings::resolve(&cli(&[]), Config::default())?;
        assert_eq!(settings.dir, None);
        assert_eq!(settings.segment, SegmentConfig::new(1800, 2));
        assert!(!settings.show_table);
        Ok(())
    }

    #[test]
    fn test_file_values_apply() -> Result<()> {
        let file = Config {
            dir: Some(PathBuf::from("/games/saves")),
            delay: Some("1h".to_string()),
            short: Some(4),
            table: Some(true),
        };
        let settings = Settings::resolve(&cli(&[]), file)?;
        assert_eq!(settings.dir, Some(PathBuf::from("/games/saves")));
        assert_eq!(settings.segment, SegmentConfig::new(3600, 4));
        assert!(settings.show_table);
        Ok(())
    }

    #[test]
    fn test_flags_override_file() -> Result<()> {
        let file = Config {
            dir: Some(PathBuf::from("/games/saves")),
            delay: Some("1h".to_string()),
            short: Some(4),
            table: None,
        };
        let flags = cli(&["-d", "/other", "--delay", "10m", "-s", "1"]);
        let settings = Settings::resolve(&flags, file)?;
        assert_eq!(settings.dir, Some(PathBuf::from("/other")));
        assert_eq!(settings.segment, SegmentConfig::new(600, 1));
        Ok(())
    }

    #[test]
    fn test_bad_delay_in_file() {
        let file = Config {
            delay: Some("forever".to_string()),
            ..Config::default()
        };
        let err = Settings::resolve(&cli(&[]), file).unwrap_err();
        assert!(err.to_string().contains("Invalid delay in config file"));
    }

    #[test]
    fn test_explicit_config_path_wins() {
        let path = resolve_config_path(Some(Path::new("/tmp/custom.toml")));
        assert_eq!(path, Some(PathBuf::from("/tmp/custom.toml")));
    }
}
