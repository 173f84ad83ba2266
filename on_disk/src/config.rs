//! Repository configuration stored in `.gitlet/config`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use gitlet_core::names;
use gitlet_core::repo::{Error, Result, DEFAULT_BRANCH};

/// The only repository format this crate reads and writes.
pub const FORMAT_VERSION: u32 = 0;

/// Contents of `.gitlet/config`, a TOML document.
///
/// Every field has a default, so a missing file or a missing section is fine.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct Config {
    pub core: CoreConfig,
    pub init: InitConfig,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct CoreConfig {
    pub repositoryformatversion: u32,

    /// zlib level (0-9) used when writing object files.
    pub compression: u32,
}

impl Default for CoreConfig {
    fn default() -> Self {
        CoreConfig {
            repositoryformatversion: FORMAT_VERSION,
            compression: 6,
        }
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct InitConfig {
    /// Branch created (and checked out) by `init`.
    pub default_branch: String,
}

impl Default for InitConfig {
    fn default() -> Self {
        InitConfig {
            default_branch: DEFAULT_BRANCH.to_string(),
        }
    }
}

impl Config {
    /// Reads `<gitlet_dir>/config`, falling back to defaults if it doesn't exist.
    pub fn load(gitlet_dir: &Path) -> Result<Config> {
        let path = gitlet_dir.join("config");
        if !path.exists() {
            return Ok(Config::default());
        }

        let text = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&text).map_err(|e| Error::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Writes this configuration to `<gitlet_dir>/config`.
    pub fn save(&self, gitlet_dir: &Path) -> Result<()> {
        self.validate()?;
        let text = toml::to_string_pretty(self).map_err(|e| Error::InvalidConfig(e.to_string()))?;
        fs::write(gitlet_dir.join("config"), text)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.core.repositoryformatversion != FORMAT_VERSION {
            return Err(Error::UnsupportedFormatVersion(self.core.repositoryformatversion));
        }
        if self.core.compression > 9 {
            return Err(Error::InvalidConfig(format!(
                "compression level {} is out of range 0-9",
                self.core.compression
            )));
        }
        if names::check_branch_name(&self.init.default_branch).is_err() {
            return Err(Error::InvalidConfig(format!(
                "default_branch {:?} is not a valid branch name",
                self.init.default_branch
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_means_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.core.compression, 6);
        assert_eq!(config.init.default_branch, "master");
    }

    #[test]
    fn save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.core.compression = 9;
        config.init.default_branch = "main".to_string();
        config.save(dir.path()).unwrap();

        let text = fs::read_to_string(dir.path().join("config")).unwrap();
        assert!(text.contains("[core]"));
        assert!(text.contains("repositoryformatversion = 0"));
        assert!(text.contains("default_branch = \"main\""));

        assert_eq!(Config::load(dir.path()).unwrap(), config);
    }

    #[test]
    fn partial_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("config"), "[core]\ncompression = 1\n").unwrap();

        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.core.compression, 1);
        assert_eq!(config.init.default_branch, "master");
    }

    #[test]
    fn unsupported_version() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("config"), "[core]\nrepositoryformatversion = 1\n").unwrap();

        match Config::load(dir.path()).unwrap_err() {
            Error::UnsupportedFormatVersion(1) => (),
            err => panic!("Unexpected error response: {:?}", err),
        }
    }

    #[test]
    fn path_like_default_branch() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("config"), "[init]\ndefault_branch = \"../x\"\n").unwrap();

        match Config::load(dir.path()).unwrap_err() {
            Error::InvalidConfig(_) => (),
            err => panic!("Unexpected error response: {:?}", err),
        }
    }

    #[test]
    fn unparseable() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("config"), "this is = not [toml").unwrap();

        match Config::load(dir.path()).unwrap_err() {
            Error::InvalidConfig(_) => (),
            err => panic!("Unexpected error response: {:?}", err),
        }
    }
}
