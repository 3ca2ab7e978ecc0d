//! Configuration management for `weave.toml`.
//!
//! # Sections
//!
//! | Section    | Purpose                                           |
//! |------------|---------------------------------------------------|
//! | `[hook]`   | Docs post-build copy (site dir, docs dir, files)  |
//! | `[icons]`  | Heroicons sprite packing (repo, output, styles)   |
//!
//! The file is optional; every field has a default.
//!
//! # Example
//!
//! ```toml
//! [hook]
//! site_dir = "site"
//! docs_dir = "docs"
//!
//! [icons]
//! output = "../public"
//! name = "heroicons-sprite.svg"
//! ```

pub mod defaults;
mod error;
mod hook;
mod icons;

pub use error::ConfigError;
pub use hook::HookConfig;
pub use icons::IconsConfig;

use crate::cli::{Cli, Commands};
use anyhow::{Context, Result, bail};
use educe::Educe;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing weave.toml
#[derive(Debug, Clone, Educe, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct WeaveConfig {
    /// Absolute project root (set after loading)
    #[serde(skip)]
    pub root: PathBuf,

    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Docs post-build hook settings
    #[serde(default)]
    pub hook: HookConfig,

    /// Icon sprite settings
    #[serde(default)]
    pub icons: IconsConfig,
}

impl WeaveConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: WeaveConfig = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content).with_context(|| format!("Invalid config `{}`", path.display()))
    }

    /// Load the config named by the CLI, falling back to defaults when the
    /// file does not exist, then apply CLI overrides and validate.
    pub fn load(cli: &Cli) -> Result<Self> {
        let root = cli.root.as_deref().unwrap_or(Path::new("./"));
        let config_path = root.join(&cli.config);

        let mut config = if config_path.exists() {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };
        config.update_with_cli(cli);
        config.validate(cli)?;

        Ok(config)
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        match &cli.command {
            Commands::PostBuild { site_dir, docs_dir } => {
                Self::update_option(&mut self.hook.site_dir, site_dir.as_ref());
                Self::update_option(&mut self.hook.docs_dir, docs_dir.as_ref());
            }
            Commands::PackIcons { repo, output, name } => {
                Self::update_option(&mut self.icons.repo, repo.as_ref());
                Self::update_option(&mut self.icons.output, output.as_ref());
                Self::update_option(&mut self.icons.name, name.as_ref());
            }
        }

        let root = cli.root.as_deref().unwrap_or(Path::new("./"));
        self.update_path_with_root(root, &cli.config);
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Resolve all paths against root and normalize to absolute paths
    fn update_path_with_root(&mut self, root: &Path, config_file: &Path) {
        let root = Self::normalize_path(&Self::expand(root));
        self.config_path = Self::normalize_path(&root.join(config_file));

        self.hook.site_dir = Self::resolve(&root, &self.hook.site_dir);
        self.hook.docs_dir = Self::resolve(&root, &self.hook.docs_dir);
        self.icons.output = Self::resolve(&root, &self.icons.output);

        self.root = root;
    }

    /// Expand `~` and join relative paths onto root
    fn resolve(root: &Path, path: &Path) -> PathBuf {
        let path = Self::expand(path);
        if path.is_relative() {
            Self::normalize_path(&root.join(path))
        } else {
            Self::normalize_path(&path)
        }
    }

    fn expand(path: &Path) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration for the current command
    pub fn validate(&self, cli: &Cli) -> Result<()> {
        if cli.is_post_build() && self.hook.files.iter().all(|f| f.trim().is_empty()) {
            bail!(ConfigError::Validation(
                "[hook.files] must name at least one file".into()
            ));
        }

        if cli.is_pack_icons() {
            if self.icons.repo.trim().is_empty() {
                bail!(ConfigError::Validation("[icons.repo] must not be empty".into()));
            }
            if self.icons.styles.is_empty() {
                bail!(ConfigError::Validation(
                    "[icons.styles] must not be empty".into()
                ));
            }
            if !self.icons.name.ends_with(".svg") || self.icons.name.contains(['/', '\\']) {
                bail!(ConfigError::Validation(
                    "[icons.name] must be a plain file name ending with .svg".into()
                ));
            }
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("weave-tools").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_from_str_empty() {
        let config = WeaveConfig::from_str("").unwrap();
        assert_eq!(config.hook.site_dir, PathBuf::from("site"));
        assert_eq!(config.icons.name, "heroicons-sprite.svg");
    }

    #[test]
    fn test_unknown_section_rejection() {
        let result = WeaveConfig::from_str("[deploy]\nforce = true");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = WeaveConfig::from_path(&dir.path().join("weave.toml")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::Io(..))
        ));
    }

    #[test]
    fn test_load_without_config_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().to_str().unwrap();
        let config = WeaveConfig::load(&cli(&["--root", root, "post-build"])).unwrap();

        let root = dir.path().canonicalize().unwrap();
        assert_eq!(config.root, root);
        assert_eq!(config.hook.site_dir, root.join("site"));
        assert_eq!(config.hook.docs_dir, root.join("docs"));
    }

    #[test]
    fn test_load_reads_config_file() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("weave.toml"),
            "[icons]\noutput = \"static\"\nname = \"sprite.svg\"\n",
        )
        .unwrap();

        let root = dir.path().to_str().unwrap();
        let config = WeaveConfig::load(&cli(&["--root", root, "pack-icons"])).unwrap();

        let root = dir.path().canonicalize().unwrap();
        assert_eq!(config.icons.output, root.join("static"));
        assert_eq!(config.icons.sprite_path(), root.join("static/sprite.svg"));
    }

    #[test]
    fn test_cli_overrides_config() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("weave.toml"), "[hook]\nsite_dir = \"site\"\n").unwrap();

        let root = dir.path().to_str().unwrap();
        let config = WeaveConfig::load(&cli(&[
            "--root",
            root,
            "post-build",
            "--site-dir",
            "out",
        ]))
        .unwrap();

        let root = dir.path().canonicalize().unwrap();
        assert_eq!(config.hook.site_dir, root.join("out"));
    }

    #[test]
    fn test_absolute_path_kept() {
        let dir = TempDir::new().unwrap();
        let site = dir.path().canonicalize().unwrap().join("elsewhere");
        let mut config = WeaveConfig::default();
        config.update_with_cli(&cli(&[
            "--root",
            "/nonexistent-root",
            "post-build",
            "--site-dir",
            site.to_str().unwrap(),
        ]));
        assert_eq!(config.hook.site_dir, site);
    }

    #[test]
    fn test_validate_sprite_name() {
        let args = cli(&["pack-icons", "--name", "sprite.png"]);
        let mut config = WeaveConfig::default();
        config.update_with_cli(&args);

        let err = config.validate(&args).unwrap_err();
        assert!(err.to_string().contains("[icons.name]"));
    }

    #[test]
    fn test_validate_empty_styles() {
        let args = cli(&["pack-icons"]);
        let mut config = WeaveConfig::from_str("[icons]\nstyles = []").unwrap();
        config.update_with_cli(&args);
        assert!(config.validate(&args).is_err());

        // The hook does not care about icon settings
        let args = cli(&["post-build"]);
        assert!(config.validate(&args).is_ok());
    }

    #[test]
    fn test_validate_empty_hook_files() {
        let args = cli(&["post-build"]);
        let config = WeaveConfig::from_str("[hook]\nfiles = []").unwrap();
        let err = config.validate(&args).unwrap_err();
        assert!(err.to_string().contains("[hook.files]"));
    }
}
