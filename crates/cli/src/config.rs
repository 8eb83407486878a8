//! Settings file loading.
//!
//! Settings come from TOML. The file named by `--config` must exist; the
//! default location under the user config directory is optional.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use trellis_registry::DuplicatePolicy;

use crate::cli::Transition;

const CONFIG_FILE: &str = "config.toml";

/// Settings file errors.
#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("failed to read {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("invalid settings: {0}")]
	Parse(#[from] toml::de::Error),
	#[error("unknown duplicate policy {0:?} (expected reject, keep-existing or replace)")]
	Policy(String),
}

/// Process-wide settings, loaded once and passed down explicitly.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
	pub log: LogSettings,
	pub registry: RegistrySettings,
	pub machine: MachineSettings,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogSettings {
	/// `EnvFilter` directives, used when neither `RUST_LOG` nor `--verbose` is set.
	pub filter: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistrySettings {
	duplicates: Option<String>,
}

impl RegistrySettings {
	/// Duplicate policy for registries built by the CLI.
	pub fn duplicates(&self) -> Result<DuplicatePolicy, ConfigError> {
		match self.duplicates.as_deref() {
			None => Ok(DuplicatePolicy::default()),
			Some(name) => DuplicatePolicy::from_name(name).ok_or_else(|| ConfigError::Policy(name.to_string())),
		}
	}
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MachineSettings {
	pub initial: Option<String>,
	pub transitions: Vec<Transition>,
}

impl Settings {
	/// Parses settings from TOML text.
	pub fn parse(text: &str) -> Result<Self, ConfigError> {
		let settings: Self = toml::from_str(text)?;
		settings.registry.duplicates()?;
		Ok(settings)
	}

	/// Loads settings from `explicit`, else from the default location if a
	/// file exists there, else returns defaults.
	pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
		match explicit {
			Some(path) => Self::read(path),
			None => match default_path() {
				Some(path) if path.is_file() => Self::read(&path),
				_ => Ok(Self::default()),
			},
		}
	}

	fn read(path: &Path) -> Result<Self, ConfigError> {
		let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		Self::parse(&text)
	}
}

/// `$XDG_CONFIG_HOME/trellis/config.toml` or the platform equivalent.
pub fn default_path() -> Option<PathBuf> {
	dirs::config_dir().map(|dir| dir.join("trellis").join(CONFIG_FILE))
}
