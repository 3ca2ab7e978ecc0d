//! Temporary shallow checkout of the icon repository.

use crate::{exec, log, utils::exec::FilterRule};
use anyhow::{Context, Result};
use std::path::Path;
use tempfile::TempDir;

/// `git clone` reports progress on stderr even on success
const GIT_FILTER: FilterRule = FilterRule::new(&["Cloning into"]);

/// Fail early when `git` is not on PATH
pub fn check_git_installed() -> Result<()> {
    which::which("git").context("`git` not found. Please install it first.")?;
    Ok(())
}

/// `git clone --depth 1 <url> <dest>`
pub fn shallow_clone(url: &str, dest: &Path) -> Result<()> {
    log!("git"; "cloning {url}");
    exec!(filter=&GIT_FILTER; ["git"]; "clone", "--depth", "1", url, dest)
        .with_context(|| format!("Failed to clone `{url}`"))?;
    Ok(())
}

/// Abbreviated HEAD commit of a checkout
pub fn head_revision(checkout: &Path) -> Result<String> {
    let repo = gix::open(checkout)?;
    let id = repo.head_id()?;
    Ok(id.to_hex_with_len(7).to_string())
}

/// Run `fetch` then `pack` against a fresh temporary directory under `parent`.
///
/// The directory is removed on every exit path, including when either
/// step fails. A failed step takes precedence over a failed cleanup.
pub fn with_temp_checkout<T>(
    parent: &Path,
    fetch: impl FnOnce(&Path) -> Result<()>,
    pack: impl FnOnce(&Path) -> Result<T>,
) -> Result<T> {
    let checkout = tempfile::Builder::new()
        .prefix("weave-icons-")
        .tempdir_in(parent)
        .with_context(|| format!("Failed to create temporary directory in {}", parent.display()))?;

    let result = fetch(checkout.path()).and_then(|()| pack(checkout.path()));
    let cleanup = remove_checkout(checkout);

    let value = result?;
    cleanup?;
    Ok(value)
}

fn remove_checkout(checkout: TempDir) -> Result<()> {
    let path = checkout.path().to_path_buf();
    checkout
        .close()
        .with_context(|| format!("Failed to remove `{}`", path.display()))
}
