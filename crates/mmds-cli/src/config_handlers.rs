//! Handler functions for config CLI commands.
//!
//! Implements the `path`, `get` and `init` subcommands over [`MmdsConfig`],
//! plus the TOML dotted-key helpers they share.

use std::path::PathBuf;

use crate::cli::ConfigAction;
use crate::config::{DEFAULT_CONFIG_FILE, MmdsConfig};
use crate::error::{Error, Result};

/// Handle a config subcommand.
pub fn handle_config_command(config_path: Option<&str>, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Path => cmd_config_path(config_path),
        ConfigAction::Get { key } => cmd_config_get(config_path, &key),
        ConfigAction::Init { file, force } => cmd_config_init(file.as_deref(), force).map(|_| ()),
    }
}

/// Show the resolved config file path.
pub fn cmd_config_path(config_path: Option<&str>) -> Result<()> {
    let path = MmdsConfig::resolve_config_path(config_path);
    println!("{}", path.display());
    if !path.exists() {
        eprintln!("(file does not exist; run `mmds config init` to create it)");
    }
    Ok(())
}

/// Get a configuration value by dotted key.
pub fn cmd_config_get(config_path: Option<&str>, key: &str) -> Result<()> {
    println!("{}", config_value(config_path, key)?);
    Ok(())
}

/// The display form of the value at `key` in the resolved configuration.
pub fn config_value(config_path: Option<&str>, key: &str) -> Result<String> {
    let config = MmdsConfig::load(config_path)?;
    let value = toml::Value::try_from(&config).map_err(|e| Error::config(e.to_string()))?;
    get_nested_value(&value, key)
        .map(format_toml_value)
        .ok_or_else(|| Error::config(format!("Key '{key}' not found in configuration")))
}

/// Create a default configuration file, returning its path.
pub fn cmd_config_init(file: Option<&str>, force: bool) -> Result<PathBuf> {
    let path = PathBuf::from(file.unwrap_or(DEFAULT_CONFIG_FILE));

    if path.exists() && !force {
        return Err(Error::config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        )));
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
    }

    let toml_str = MmdsConfig::default().to_toml_string()?;
    std::fs::write(&path, &toml_str).map_err(|e| Error::io_with_path(e, &path))?;

    println!("Config file created at {}", path.display());
    Ok(path)
}

/// Navigate a dotted key path in a TOML value tree.
pub fn get_nested_value<'a>(value: &'a toml::Value, key: &str) -> Option<&'a toml::Value> {
    key.split('.')
        .try_fold(value, |current, part| current.as_table()?.get(part))
}

/// Format a TOML value for display on stdout.
pub fn format_toml_value(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        toml::Value::Integer(i) => i.to_string(),
        toml::Value::Float(f) => f.to_string(),
        toml::Value::Boolean(b) => b.to_string(),
        toml::Value::Datetime(dt) => dt.to_string(),
        toml::Value::Array(_) | toml::Value::Table(_) => {
            toml::to_string_pretty(value).unwrap_or_else(|_| format!("{value:?}"))
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn write_config(dir: &tempfile::TempDir, content: &str) -> String {
        let path = dir.path().join("mmds.toml");
        std::fs::write(&path, content).unwrap();
        path.to_str().unwrap().to_string()
    }

    // ------------------------------------------------------------------------
    // cmd_config_path tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_cmd_config_path_explicit() {
        assert!(cmd_config_path(Some("/explicit/mmds.toml")).is_ok());
    }

    // ------------------------------------------------------------------------
    // config get tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_config_value_nested_key() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_config(&dir, "[output]\ncss_selector = \".theme\"\n");

        assert_eq!(config_value(Some(&path), "output.css_selector").unwrap(), ".theme");
        assert_eq!(config_value(Some(&path), "output.dir").unwrap(), "dist");
    }

    #[test]
    fn test_config_value_section() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_config(&dir, "");

        let section = config_value(Some(&path), "output").unwrap();
        assert!(section.contains("css_selector = \":root\""));
    }

    #[test]
    fn test_config_value_missing_key() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_config(&dir, "");

        let err = config_value(Some(&path), "output.nonexistent").unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    // ------------------------------------------------------------------------
    // cmd_config_init tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_cmd_config_init_creates_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested").join("mmds.toml");

        let created = cmd_config_init(Some(path.to_str().unwrap()), false).unwrap();
        assert_eq!(created, path);

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("[source]"));
        assert!(content.contains("[output]"));
    }

    #[test]
    fn test_cmd_config_init_no_overwrite() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_config(&dir, "existing");

        let err = cmd_config_init(Some(&path), false).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn test_cmd_config_init_force_overwrites() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_config(&dir, "old content");

        cmd_config_init(Some(&path), true).unwrap();
        let loaded = MmdsConfig::load(Some(&path)).unwrap();
        assert_eq!(loaded, MmdsConfig::default());
    }

    // ------------------------------------------------------------------------
    // TOML helper tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_get_nested_value() {
        let val: toml::Value = toml::from_str("[output]\ndir = \"out\"").unwrap();
        assert_eq!(
            get_nested_value(&val, "output.dir"),
            Some(&toml::Value::String("out".into()))
        );
        assert!(get_nested_value(&val, "output.dir.deeper").is_none());
        assert!(get_nested_value(&val, "source").is_none());
    }

    #[test]
    fn test_format_toml_value() {
        assert_eq!(format_toml_value(&toml::Value::String("css".into())), "css");
        assert_eq!(format_toml_value(&toml::Value::Integer(42)), "42");
        assert_eq!(format_toml_value(&toml::Value::Boolean(true)), "true");
    }
}
