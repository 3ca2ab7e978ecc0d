//! `[hook]` section configuration.
//!
//! Paths the docs post-build hook reads from and copies into.

use super::defaults;
use educe::Educe;
use serde::Deserialize;
use std::path::PathBuf;

/// `[hook]` section in weave.toml - docs post-build copy.
///
/// # Example
/// ```toml
/// [hook]
/// site_dir = "site"
/// docs_dir = "docs"
/// files = ["googlefd0478405f199051.html"]
/// ```
#[derive(Debug, Clone, Educe, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct HookConfig {
    /// Directory the docs generator wrote the built site to.
    #[serde(default = "defaults::hook::site_dir")]
    #[educe(Default = defaults::hook::site_dir())]
    pub site_dir: PathBuf,

    /// Docs source directory. Verification files sit next to it, in its parent.
    #[serde(default = "defaults::hook::docs_dir")]
    #[educe(Default = defaults::hook::docs_dir())]
    pub docs_dir: PathBuf,

    /// File names copied verbatim into the site root when present.
    #[serde(default = "defaults::hook::files")]
    #[educe(Default = defaults::hook::files())]
    pub files: Vec<String>,
}
