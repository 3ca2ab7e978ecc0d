//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// [hook] Section Defaults
// ============================================================================

pub mod hook {
    use std::path::PathBuf;

    pub fn site_dir() -> PathBuf {
        "site".into()
    }

    pub fn docs_dir() -> PathBuf {
        "docs".into()
    }

    /// Search-console ownership file served from the site root
    pub fn files() -> Vec<String> {
        vec!["googlefd0478405f199051.html".into()]
    }
}

// ============================================================================
// [icons] Section Defaults
// ============================================================================

pub mod icons {
    use crate::icons::IconStyle;
    use std::path::PathBuf;

    pub fn repo() -> String {
        "https://github.com/tailwindlabs/heroicons.git".into()
    }

    /// 24px sets; heroicons also ships 20px (mini) and 16px (micro)
    pub fn source() -> PathBuf {
        "src/24".into()
    }

    pub fn output() -> PathBuf {
        "../public".into()
    }

    pub fn name() -> String {
        "heroicons-sprite.svg".into()
    }

    pub fn styles() -> Vec<IconStyle> {
        vec![IconStyle::Solid, IconStyle::Outline]
    }
}
