//! Docs post-build hook.
//!
//! Runs after the docs generator has written the site and copies
//! verification files (search-console ownership pages and the like) from
//! next to the docs source directory into the site root.

use crate::{config::HookConfig, log};
use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Result of handling one verification file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied { from: PathBuf, to: PathBuf },
    Skipped { missing: PathBuf },
}

/// Copy every configured file that exists into `site_dir`.
///
/// Files are looked up in the parent of `docs_dir`. A missing file is not
/// an error; a failed copy is.
pub fn on_post_build(config: &HookConfig) -> Result<Vec<CopyOutcome>> {
    let source_dir = config
        .docs_dir
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    config
        .files
        .iter()
        .filter(|name| !name.trim().is_empty())
        .map(|name| copy_if_present(&source_dir.join(name), &config.site_dir.join(name)))
        .collect()
}

fn copy_if_present(src: &Path, dst: &Path) -> Result<CopyOutcome> {
    if !src.exists() {
        log!("hook"; "skip {}, not found", src.display());
        return Ok(CopyOutcome::Skipped {
            missing: src.to_path_buf(),
        });
    }

    fs::copy(src, dst)
        .with_context(|| format!("Failed to copy {} to {}", src.display(), dst.display()))?;
    log!("hook"; "copied {}", dst.display());

    Ok(CopyOutcome::Copied {
        from: src.to_path_buf(),
        to: dst.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const VERIFY: &str = "googlefd0478405f199051.html";

    /// `<root>/doc/docs` as docs dir, `<root>/doc/site` as site dir
    fn layout(root: &Path) -> HookConfig {
        let doc = root.join("doc");
        fs::create_dir_all(doc.join("docs")).unwrap();
        fs::create_dir_all(doc.join("site")).unwrap();
        HookConfig {
            site_dir: doc.join("site"),
            docs_dir: doc.join("docs"),
            files: vec![VERIFY.into()],
        }
    }

    #[test]
    fn test_copies_when_present() {
        let dir = TempDir::new().unwrap();
        let config = layout(dir.path());
        let src = dir.path().join("doc").join(VERIFY);
        fs::write(&src, "google-site-verification: googlefd0478405f199051.html").unwrap();

        let outcomes = on_post_build(&config).unwrap();

        let dst = config.site_dir.join(VERIFY);
        assert_eq!(
            outcomes,
            vec![CopyOutcome::Copied {
                from: src,
                to: dst.clone()
            }]
        );
        assert_eq!(
            fs::read_to_string(dst).unwrap(),
            "google-site-verification: googlefd0478405f199051.html"
        );
    }

    #[test]
    fn test_noop_when_absent() {
        let dir = TempDir::new().unwrap();
        let config = layout(dir.path());

        let outcomes = on_post_build(&config).unwrap();

        assert!(matches!(outcomes.as_slice(), [CopyOutcome::Skipped { .. }]));
        assert!(!config.site_dir.join(VERIFY).exists());
    }

    #[test]
    fn test_ignores_file_inside_docs_dir() {
        // Only the parent of docs_dir is searched
        let dir = TempDir::new().unwrap();
        let config = layout(dir.path());
        fs::write(config.docs_dir.join(VERIFY), "x").unwrap();

        let outcomes = on_post_build(&config).unwrap();
        assert!(matches!(outcomes.as_slice(), [CopyOutcome::Skipped { .. }]));
    }

    #[test]
    fn test_overwrites_existing_copy() {
        let dir = TempDir::new().unwrap();
        let config = layout(dir.path());
        fs::write(dir.path().join("doc").join(VERIFY), "new").unwrap();
        fs::write(config.site_dir.join(VERIFY), "old").unwrap();

        on_post_build(&config).unwrap();
        assert_eq!(fs::read_to_string(config.site_dir.join(VERIFY)).unwrap(), "new");
    }

    #[test]
    fn test_multiple_files() {
        let dir = TempDir::new().unwrap();
        let mut config = layout(dir.path());
        config.files.push("BingSiteAuth.xml".into());
        fs::write(dir.path().join("doc/BingSiteAuth.xml"), "<users/>").unwrap();

        let outcomes = on_post_build(&config).unwrap();

        assert!(matches!(outcomes[0], CopyOutcome::Skipped { .. }));
        assert!(matches!(outcomes[1], CopyOutcome::Copied { .. }));
        assert!(config.site_dir.join("BingSiteAuth.xml").exists());
    }

    #[test]
    fn test_missing_site_dir_is_error() {
        let dir = TempDir::new().unwrap();
        let mut config = layout(dir.path());
        fs::write(dir.path().join("doc").join(VERIFY), "x").unwrap();
        config.site_dir = dir.path().join("never-built");

        let err = on_post_build(&config).unwrap_err();
        assert!(err.to_string().contains("Failed to copy"));
    }
}
