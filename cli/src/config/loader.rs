//! Simple CLI configuration loader for viewroute
//!
//! Implements single-source priority loading with flag overrides:
//! 1. --config file/dir (highest priority)
//! 2. Current working directory: ./viewroute.json or ./.viewroute/config.json
//! 3. XDG config: $XDG_CONFIG_HOME/viewroute/config.json or the platform config dir
//! 4. Defaults only (no files)
//!
//! `VIEWROUTE_*` environment variables are layered over the file, and
//! command-line flags are applied last.

use anyhow::{anyhow, Context, Result};
use ::config::{Config, Environment, File, FileFormat, Map};
use std::path::{Path, PathBuf};
use tracing::debug;
use viewroute_core::{ModeKind, RouterSettings};

const ENV_PREFIX: &str = "VIEWROUTE";
const CONFIG_FILE: &str = "config.json";

/// CLI configuration loader
#[derive(Debug, Clone, Default)]
pub struct CliConfigLoader {
    /// Override config file/directory path
    config_override: Option<PathBuf>,
    /// Flag overrides
    mode_override: Option<ModeKind>,
    base_override: Option<String>,
    max_history_override: Option<usize>,
    /// Directory searched for project-local config, defaults to the cwd
    search_dir: Option<PathBuf>,
    /// Variables read instead of the process environment
    env_source: Option<Map<String, String>>,
}

impl CliConfigLoader {
    /// Create a new loader
    pub fn new() -> Self {
        Self::default()
    }

    /// Set config file/directory override
    pub fn with_config_override(mut self, path: PathBuf) -> Self {
        self.config_override = Some(path);
        self
    }

    /// Set navigation mode override
    pub fn with_mode_override(mut self, mode: ModeKind) -> Self {
        self.mode_override = Some(mode);
        self
    }

    /// Set base path override
    pub fn with_base_override(mut self, base: String) -> Self {
        self.base_override = Some(base);
        self
    }

    /// Set history size override
    pub fn with_max_history_override(mut self, max_history: usize) -> Self {
        self.max_history_override = Some(max_history);
        self
    }

    /// Search a specific directory instead of the working directory
    pub fn with_search_dir(mut self, dir: PathBuf) -> Self {
        self.search_dir = Some(dir);
        self
    }

    /// Read `VIEWROUTE_*` variables from the given map instead of the process
    #[cfg(test)]
    pub(crate) fn with_env_source(mut self, vars: &[(&str, &str)]) -> Self {
        self.env_source = Some(
            vars.iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        );
        self
    }

    /// Load and resolve settings
    pub fn load(&self) -> Result<RouterSettings> {
        // Step 1: Find the base configuration file, if any
        let file = match &self.config_override {
            Some(path) => Some(Self::resolve_override(path).with_context(|| {
                format!(
                    "Failed to load config from override path: {}",
                    path.display()
                )
            })?),
            None => self.search()?,
        };

        // Step 2: Layer file and environment
        let mut settings = Self::read_layers(file.as_deref(), self.env_source.clone())?;

        // Step 3: Apply flag overrides
        if let Some(mode) = self.mode_override {
            settings.mode = mode;
        }
        if let Some(base) = &self.base_override {
            settings.base = base.clone();
        }
        if let Some(max_history) = self.max_history_override {
            settings.max_history = max_history;
        }

        settings
            .validate()
            .map_err(|e| anyhow!("Configuration validation failed: {}", e))?;

        debug!(
            mode = %settings.mode,
            base = %settings.base,
            max_history = settings.max_history,
            "Resolved router settings"
        );
        Ok(settings)
    }

    /// Search for config in priority order
    fn search(&self) -> Result<Option<PathBuf>> {
        let cwd = match &self.search_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir()?,
        };

        let candidates = [
            Some(cwd.join("viewroute.json")),
            Some(cwd.join(".viewroute").join(CONFIG_FILE)),
            Self::xdg_config_dir().map(|dir| dir.join("viewroute").join(CONFIG_FILE)),
        ];

        Ok(candidates.into_iter().flatten().find(|path| path.is_file()))
    }

    /// Resolve an explicit config path (file or directory)
    fn resolve_override(path: &Path) -> Result<PathBuf> {
        if path.is_file() {
            Ok(path.to_path_buf())
        } else if path.is_dir() {
            let config_file = path.join(CONFIG_FILE);
            if config_file.is_file() {
                Ok(config_file)
            } else {
                Err(anyhow!(
                    "No {} found in directory: {}",
                    CONFIG_FILE,
                    path.display()
                ))
            }
        } else {
            Err(anyhow!("Config path does not exist: {}", path.display()))
        }
    }

    /// Merge the config file (if any) with `VIEWROUTE_*` environment variables
    fn read_layers(
        file: Option<&Path>,
        env_source: Option<Map<String, String>>,
    ) -> Result<RouterSettings> {
        let mut builder = Config::builder();

        if let Some(path) = file {
            debug!("Loading config file: {}", path.display());
            builder = builder.add_source(File::from(path).format(FileFormat::Json));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .try_parsing(true)
                .source(env_source),
        );

        let source = match file {
            Some(path) => path.display().to_string(),
            None => "environment".to_string(),
        };

        builder
            .build()
            .and_then(|config| config.try_deserialize::<RouterSettings>())
            .with_context(|| format!("Failed to parse configuration from {}", source))
    }

    /// Get XDG config directory
    fn xdg_config_dir() -> Option<PathBuf> {
        std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(dirs::config_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("custom.json");
        write(&file, r#"{ "mode": "hash", "base": "/app", "max_history": 5 }"#);

        let settings = CliConfigLoader::new()
            .with_config_override(file)
            .load()
            .unwrap();

        assert_eq!(settings.mode, ModeKind::Hash);
        assert_eq!(settings.base, "/app");
        assert_eq!(settings.max_history, 5);
    }

    #[test]
    fn test_explicit_directory() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir.path().join(CONFIG_FILE), r#"{ "mode": "memory" }"#);

        let settings = CliConfigLoader::new()
            .with_config_override(dir.path().to_path_buf())
            .load()
            .unwrap();
        assert_eq!(settings.mode, ModeKind::Memory);
    }

    #[test]
    fn test_directory_without_config_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = CliConfigLoader::new()
            .with_config_override(dir.path().to_path_buf())
            .load()
            .unwrap_err();
        assert!(format!("{:#}", err).contains("No config.json found"));
    }

    #[test]
    fn test_missing_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = CliConfigLoader::new()
            .with_config_override(dir.path().join("nope.json"))
            .load();
        assert!(result.is_err());
    }

    #[test]
    fn test_project_file_is_found() {
        let dir = tempfile::tempdir().unwrap();
        write(
            &dir.path().join(".viewroute").join(CONFIG_FILE),
            r#"{ "base": "/ui" }"#,
        );

        let settings = CliConfigLoader::new()
            .with_search_dir(dir.path().to_path_buf())
            .load()
            .unwrap();
        assert_eq!(settings.base, "/ui");
    }

    #[test]
    fn test_flags_override_file() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir.path().join("viewroute.json"), r#"{ "mode": "hash" }"#);

        let settings = CliConfigLoader::new()
            .with_search_dir(dir.path().to_path_buf())
            .with_mode_override(ModeKind::Memory)
            .with_max_history_override(0)
            .load()
            .unwrap();
        assert_eq!(settings.mode, ModeKind::Memory);
        assert_eq!(settings.max_history, 0);
    }

    #[test]
    fn test_environment_layer() {
        let dir = tempfile::tempdir().unwrap();
        let settings = CliConfigLoader::new()
            .with_search_dir(dir.path().to_path_buf())
            .with_env_source(&[
                ("VIEWROUTE_MODE", "hash"),
                ("VIEWROUTE_BASE", "/app"),
                ("VIEWROUTE_MAX_HISTORY", "0"),
            ])
            .load()
            .unwrap();

        assert_eq!(settings.mode, ModeKind::Hash);
        assert_eq!(settings.base, "/app");
        assert_eq!(settings.max_history, 0);
    }

    #[test]
    fn test_environment_over_file_under_flags() {
        let dir = tempfile::tempdir().unwrap();
        write(
            &dir.path().join("viewroute.json"),
            r#"{ "mode": "memory", "base": "/file", "max_history": 7 }"#,
        );

        let settings = CliConfigLoader::new()
            .with_search_dir(dir.path().to_path_buf())
            .with_env_source(&[("VIEWROUTE_MODE", "hash"), ("VIEWROUTE_BASE", "/env")])
            .with_mode_override(ModeKind::History)
            .load()
            .unwrap();

        assert_eq!(settings.mode, ModeKind::History);
        assert_eq!(settings.base, "/env");
        assert_eq!(settings.max_history, 7);
    }

    #[test]
    fn test_invalid_environment_value() {
        let dir = tempfile::tempdir().unwrap();
        let result = CliConfigLoader::new()
            .with_search_dir(dir.path().to_path_buf())
            .with_env_source(&[("VIEWROUTE_MODE", "fragment")])
            .load();
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_base_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = CliConfigLoader::new()
            .with_search_dir(dir.path().to_path_buf())
            .with_base_override("/a#b".to_string())
            .load()
            .unwrap_err();
        assert!(err.to_string().contains("validation failed"));
    }

    #[test]
    fn test_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("broken.json");
        write(&file, "{ not json");

        let err = CliConfigLoader::new()
            .with_config_override(file)
            .load()
            .unwrap_err();
        assert!(err.to_string().contains("Failed to parse configuration"));
    }
}
