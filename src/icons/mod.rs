//! Heroicons sprite packing.
//!
//! ```text
//! shallow clone ──► src/24/{solid,outline}/*.svg
//!        │
//!        ▼
//!   extract  ──► strip declaration + outer <svg>, fill="currentColor"
//!        │
//!        ▼
//!   sprite   ──► <symbol id="{style}-{name}" viewBox="0 0 24 24">
//! ```
//!
//! The checkout lives in a temporary directory that is removed when
//! packing ends, whether it succeeded or not.

mod checkout;
mod extract;
mod sprite;

use checkout::{check_git_installed, head_revision, shallow_clone, with_temp_checkout};
use extract::read_svg_content;
use sprite::SpriteWriter;

use crate::{config::IconsConfig, log};
use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::{
    env, fmt, fs,
    io::BufWriter,
    path::{Path, PathBuf},
};
use tempfile::NamedTempFile;
use walkdir::WalkDir;

// ============================================================================
// Icon Styles
// ============================================================================

/// Heroicons set, named after its source subdirectory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconStyle {
    Solid,
    Outline,
}

impl IconStyle {
    /// Subdirectory under the source root, also used as the id prefix
    pub const fn dir_name(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Outline => "outline",
        }
    }

    pub fn symbol_id(self, name: &str) -> String {
        format!("{}-{name}", self.dir_name())
    }

    /// Attributes on `<symbol>` that the icon paths inherit
    pub const fn presentation_attrs(self) -> &'static str {
        match self {
            Self::Solid => r#"fill="currentColor""#,
            Self::Outline => r#"fill="none" stroke="currentColor" stroke-width="1.5""#,
        }
    }
}

impl fmt::Display for IconStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

// ============================================================================
// Packing
// ============================================================================

/// What a packing run produced
#[derive(Debug)]
pub struct PackReport {
    pub sprite: PathBuf,
    pub sets: Vec<(IconStyle, usize)>,
}

impl PackReport {
    pub fn total(&self) -> usize {
        self.sets.iter().map(|(_, count)| count).sum()
    }
}

/// Clone the icon repository and write the sprite.
pub fn pack_icons(config: &IconsConfig) -> Result<PackReport> {
    pack_icons_in(config, &env::temp_dir())
}

/// Same as [`pack_icons`], with the checkout created under `tmp_root`.
fn pack_icons_in(config: &IconsConfig, tmp_root: &Path) -> Result<PackReport> {
    check_git_installed()?;

    with_temp_checkout(
        tmp_root,
        |dir| shallow_clone(&config.repo, dir),
        |dir| {
            match head_revision(dir) {
                Ok(rev) => log!("git"; "checked out {rev}"),
                Err(err) => log!("git"; "unable to read HEAD: {err}"),
            }
            pack_from_checkout(dir, config)
        },
    )
}

/// Write the sprite from an existing checkout.
///
/// Every style directory is listed before anything is written, and the
/// sprite is assembled in a sibling temp file that replaces the target only
/// once complete, so a failed run leaves any previous sprite untouched.
pub fn pack_from_checkout(checkout: &Path, config: &IconsConfig) -> Result<PackReport> {
    let source = checkout.join(&config.source);
    let styles = config
        .styles
        .iter()
        .map(|&style| Ok((style, collect_icons(&source.join(style.dir_name()))?)))
        .collect::<Result<Vec<_>>>()?;

    fs::create_dir_all(&config.output)
        .with_context(|| format!("Failed to create {}", config.output.display()))?;

    let sprite_path = config.sprite_path();
    let staging = NamedTempFile::new_in(&config.output)
        .with_context(|| format!("Failed to create a temp file in {}", config.output.display()))?;
    let mut writer = SpriteWriter::new(BufWriter::new(staging))?;

    let mut sets = Vec::with_capacity(styles.len());
    for (style, icons) in &styles {
        log!("icons"; "processing {style} icons...");

        let before = writer.symbol_count();
        for path in icons {
            let name = icon_name(path)?;
            log!("icons"; "adding: {}", style.symbol_id(name));

            let content = read_svg_content(path)?;
            writer.add_symbol(*style, name, &content)?;
        }
        sets.push((*style, writer.symbol_count() - before));
    }

    let staging = writer
        .finish()?
        .into_inner()
        .map_err(|err| err.into_error())
        .with_context(|| format!("Failed to write {}", sprite_path.display()))?;
    staging
        .persist(&sprite_path)
        .with_context(|| format!("Failed to write {}", sprite_path.display()))?;
    publish_permissions(&sprite_path)?;
    log!("icons"; "sprite generated at {}", sprite_path.display());

    Ok(PackReport {
        sprite: sprite_path,
        sets,
    })
}

/// Temp files are created owner-only; the sprite is served as a static asset
#[cfg(unix)]
fn publish_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o644))
        .with_context(|| format!("Failed to set permissions on {}", path.display()))
}

#[cfg(not(unix))]
fn publish_permissions(_path: &Path) -> Result<()> {
    Ok(())
}

/// `*.svg` files directly inside `dir`, sorted by file name.
///
/// Symlinked icons are followed.
fn collect_icons(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        bail!("Icon directory `{}` not found", dir.display());
    }

    let mut icons = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "svg") {
            icons.push(entry.into_path());
        }
    }
    Ok(icons)
}

fn icon_name(path: &Path) -> Result<&str> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .with_context(|| format!("Invalid icon file name `{}`", path.display()))
}

// ============================================================================
// Tests
// ============================================================================
