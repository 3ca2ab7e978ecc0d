//! Inner-markup extraction for single-icon SVG files.

use anyhow::{Context, Result};
use regex::Regex;
use std::{fs, path::Path, sync::OnceLock};

fn xml_decl_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<\?xml.*?\?>").unwrap())
}

fn svg_open_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<svg[^>]*>").unwrap())
}

fn fill_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"fill="[^"]+""#).unwrap())
}

/// Strip the XML declaration and the outer `<svg>` element, then repaint
/// every `fill` with `currentColor` so the symbol inherits the text color.
///
/// Substitutions run in a fixed order on the raw text; the input is not
/// parsed as XML.
pub fn extract_svg_content(svg: &str) -> String {
    let content = xml_decl_re().replace_all(svg, "");
    let content = svg_open_re().replace_all(&content, "");
    let content = content.replace("</svg>", "");
    fill_re()
        .replace_all(&content, r#"fill="currentColor""#)
        .trim()
        .to_owned()
}

/// Read an SVG file and extract its inner markup.
pub fn read_svg_content(path: &Path) -> Result<String> {
    let svg = fs::read_to_string(path)
        .with_context(|| format!("Failed to read icon `{}`", path.display()))?;
    Ok(extract_svg_content(&svg))
}
