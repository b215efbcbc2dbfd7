//! Configuration loading for the regmap tool.
//!
//! `defaults/regmap.default.toml` is embedded into the binary. A `regmap.toml`
//! in the working directory and a file passed with `--config` are layered on
//! top of it, then the command-line format.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/regmap.default.toml");

/// Top-level configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RegmapConfig {
    pub output: OutputConfig,
    pub diagnostics: DiagnosticsConfig,
}

/// Controls how a parsed tree is rendered
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: String,
    pub indent: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DiagnosticsConfig {
    pub source_context: bool,
}

/// File name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "regmap.toml";

/// Layers configuration sources, lowest precedence first: embedded defaults,
/// a local `regmap.toml`, an explicit file, then command-line values.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start from the embedded defaults
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer `regmap.toml` from `dir`, if there is one
    pub fn with_local_file(mut self, dir: impl AsRef<Path>) -> Self {
        let path = dir.as_ref().join(LOCAL_CONFIG_FILE);
        self.builder = self
            .builder
            .add_source(File::from(path.as_path()).format(FileFormat::Toml).required(false));
        self
    }

    /// Layer a configuration file that must exist
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Output format chosen on the command line
    pub fn with_format(mut self, format: &str) -> Result<Self, ConfigError> {
        self.builder = self.builder.set_override("output.format", format)?;
        Ok(self)
    }

    pub fn build(self) -> Result<RegmapConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).expect("create config");
        file.write_all(contents.as_bytes()).expect("write config");
        path
    }

    #[test]
    fn loads_default_config() {
        let config = Loader::new().build().expect("defaults to deserialize");
        assert_eq!(config.output.format, "json");
        assert_eq!(config.output.indent, 2);
        assert!(config.diagnostics.source_context);
    }

    #[test]
    fn format_override_wins() {
        let dir = tempfile::tempdir().expect("temp dir");
        write_config(dir.path(), LOCAL_CONFIG_FILE, "[output]\nformat = \"yaml\"\n");

        let config = Loader::new()
            .with_local_file(dir.path())
            .with_format("treeviz")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.output.format, "treeviz");
    }

    #[test]
    fn explicit_file_layers_over_local_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        write_config(
            dir.path(),
            LOCAL_CONFIG_FILE,
            "[output]\nindent = 8\nformat = \"yaml\"\n",
        );
        let explicit = write_config(dir.path(), "custom.toml", "[output]\nindent = 4\n");

        let config = Loader::new()
            .with_local_file(dir.path())
            .with_file(&explicit)
            .build()
            .expect("config to build");
        assert_eq!(config.output.indent, 4);
        assert_eq!(config.output.format, "yaml");
        assert!(config.diagnostics.source_context);
    }

    #[test]
    fn missing_local_file_is_ignored() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = Loader::new()
            .with_local_file(dir.path())
            .build()
            .expect("config to build");
        assert_eq!(config.output.indent, 2);
    }

    #[test]
    fn missing_explicit_file_fails() {
        assert!(Loader::new().with_file("no/such/regmap.toml").build().is_err());
    }
}
