//! Incremental writer for the `<symbol>` sprite document.

use super::IconStyle;
use std::io::{self, Write};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Zero-sized, hidden root so the sprite can be inlined without taking space
const SPRITE_ROOT: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="0" height="0" style="display:none;">"#;

/// Every heroicons set in `src/24` is drawn on the same grid
pub const VIEW_BOX: &str = "0 0 24 24";

/// Writes a sprite document symbol by symbol.
///
/// The header is written on construction; call [`SpriteWriter::finish`]
/// to close the root element and get the sink back.
pub struct SpriteWriter<W: Write> {
    out: W,
    symbols: usize,
}

impl<W: Write> SpriteWriter<W> {
    pub fn new(mut out: W) -> io::Result<Self> {
        writeln!(out, "{XML_DECLARATION}")?;
        writeln!(out, "{SPRITE_ROOT}")?;
        Ok(Self { out, symbols: 0 })
    }

    /// Append one icon as `<symbol id="{prefix}{name}">`.
    pub fn add_symbol(&mut self, style: IconStyle, name: &str, content: &str) -> io::Result<()> {
        writeln!(
            self.out,
            r#"  <symbol id="{}" viewBox="{VIEW_BOX}" {}>"#,
            style.symbol_id(name),
            style.presentation_attrs()
        )?;
        writeln!(self.out, "    {content}")?;
        writeln!(self.out, "  </symbol>")?;
        self.symbols += 1;
        Ok(())
    }

    /// Number of symbols written so far
    pub const fn symbol_count(&self) -> usize {
        self.symbols
    }

    /// Close the root `<svg>` (no trailing newline) and flush.
    pub fn finish(mut self) -> io::Result<W> {
        write!(self.out, "</svg>")?;
        self.out.flush()?;
        Ok(self.out)
    }
}
