//! `[icons]` section configuration.

use super::defaults;
use crate::icons::IconStyle;
use educe::Educe;
use serde::Deserialize;
use std::path::PathBuf;

/// `[icons]` section in weave.toml - heroicons sprite packing.
///
/// # Example
/// ```toml
/// [icons]
/// repo = "https://github.com/tailwindlabs/heroicons.git"
/// source = "src/24"
/// output = "../public"
/// name = "heroicons-sprite.svg"
/// styles = ["solid", "outline"]
/// ```
#[derive(Debug, Clone, Educe, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct IconsConfig {
    /// Git repository cloned (shallow) for the icon sources.
    #[serde(default = "defaults::icons::repo")]
    #[educe(Default = defaults::icons::repo())]
    pub repo: String,

    /// Directory inside the checkout holding one subdirectory per style.
    #[serde(default = "defaults::icons::source")]
    #[educe(Default = defaults::icons::source())]
    pub source: PathBuf,

    /// Directory the sprite is written to, created if missing.
    #[serde(default = "defaults::icons::output")]
    #[educe(Default = defaults::icons::output())]
    pub output: PathBuf,

    /// Sprite file name.
    #[serde(default = "defaults::icons::name")]
    #[educe(Default = defaults::icons::name())]
    pub name: String,

    /// Styles packed into the sprite, in output order.
    #[serde(default = "defaults::icons::styles")]
    #[educe(Default = defaults::icons::styles())]
    pub styles: Vec<IconStyle>,
}

impl IconsConfig {
    /// Full path of the sprite file
    pub fn sprite_path(&self) -> PathBuf {
        self.output.join(&self.name)
    }
}
