//! Configuration file loading.
//!
//! The configuration is a JSON object (comments allowed) with two optional
//! fields:
//!
//! ```json
//! {
//!   "filter": "^ns::",
//!   "dump_calls": false
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use jsonc_parser::ParseOptions;
use miette::{IntoDiagnostic, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use declscope_core::PrintOptions;

/// Settings read from `.declscope.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Filter expression applied to qualified names.
    pub filter: String,

    /// Dump the subtree of every reported call.
    pub dump_calls: bool,
}

impl Config {
    /// Configuration file names, in lookup order.
    pub const CONFIG_FILES: &'static [&'static str] = &[".declscope.json", ".declscope.jsonc"];

    /// Loads a configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| miette::miette!("Failed to read config {}: {}", path.display(), e))?;

        Self::from_jsonc(&content)
            .map_err(|e| miette::miette!("Invalid config {}: {}", path.display(), e))
    }

    /// Parses a configuration from JSON text that may contain comments.
    pub fn from_jsonc(content: &str) -> Result<Self> {
        let value = jsonc_parser::parse_to_serde_value(content, &ParseOptions::default())
            .map_err(|e| miette::miette!("{}", e))?
            .unwrap_or(serde_json::Value::Object(serde_json::Map::new()));

        serde_json::from_value(value).into_diagnostic()
    }

    /// Finds the first configuration file present in `dir`.
    pub fn discover(dir: &Path) -> Option<PathBuf> {
        Self::CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }

    /// Loads `explicit` if given, otherwise the configuration discovered in
    /// `dir`, otherwise the defaults.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match Self::discover(dir) {
                Some(path) => path,
                None => {
                    debug!("No config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        debug!("Loading config from {}", path.display());
        Self::from_file(&path)
    }

    /// Builds print options, letting command-line values take precedence.
    pub fn print_options(&self, filter: Option<String>, dump_calls: bool) -> PrintOptions {
        PrintOptions {
            filter: filter.unwrap_or_else(|| self.filter.clone()),
            dump_calls: dump_calls || self.dump_calls,
        }
    }

    /// The contents written by `declscope init`.
    pub fn default_file_contents() -> Result<String> {
        let mut json = serde_json::to_string_pretty(&Self::default()).into_diagnostic()?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn parses_json_with_comments() {
        let config = Config::from_jsonc(
            r#"{
  // only the clock types
  "filter": "Clock<",
  "dump_calls": true
}"#,
        )
        .unwrap();

        assert_eq!(
            config,
            Config {
                filter: "Clock<".to_string(),
                dump_calls: true,
            }
        );
    }

    #[test]
    fn missing_fields_use_defaults() {
        assert_eq!(Config::from_jsonc("{}").unwrap(), Config::default());
    }

    #[test]
    fn rejects_unknown_fields() {
        assert!(Config::from_jsonc(r#"{ "filters": "x" }"#).is_err());
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(Config::from_jsonc(r#"{ "filter": "#).is_err());
    }

    #[test]
    fn command_line_overrides_config() {
        let config = Config {
            filter: "^ns::".to_string(),
            dump_calls: false,
        };

        let options = config.print_options(Some("main".to_string()), true);
        assert_eq!(options.filter, "main");
        assert!(options.dump_calls);

        let options = config.print_options(None, false);
        assert_eq!(options.filter, "^ns::");
        assert!(!options.dump_calls);
    }

    #[test]
    fn discovers_config_in_directory() {
        let dir = tempdir().unwrap();
        assert_eq!(Config::discover(dir.path()), None);

        let path = dir.path().join(".declscope.jsonc");
        fs::write(&path, r#"{ "filter": "Y" }"#).unwrap();

        assert_eq!(Config::discover(dir.path()), Some(path));
        let config = Config::load(None, dir.path()).unwrap();
        assert_eq!(config.filter, "Y");
    }

    #[test]
    fn explicit_path_must_exist() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.json");

        assert!(Config::load(Some(&missing), dir.path()).is_err());
    }

    #[test]
    fn default_file_contents_snapshot() {
        let contents = Config::default_file_contents().unwrap();
        let value: serde_json::Value = serde_json::from_str(&contents).unwrap();

        insta::assert_json_snapshot!(value, @r#"
        {
          "dump_calls": false,
          "filter": ""
        }
        "#);
    }
}
