//! Asset and localization lookups the control layer needs from the client.
//!
//! Texture decoding and string-table loading live elsewhere; this crate only
//! asks for sizes (to give controls their bounds) and localized strings.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::geometry::Size;

/// Read-only view of the client's gump art, tile art and localized strings.
pub trait AssetSource {
    /// Pixel size of a gump graphic, or `None` if it does not exist.
    fn gump_size(&self, graphic: u16) -> Option<Size>;
    /// Pixel size of a static (tile) art graphic.
    fn art_size(&self, graphic: u16) -> Option<Size>;
    /// Localized string by message id.
    fn localized(&self, id: u32) -> Option<String>;

    /// Rendered size of a single-line label. Unmeasured text has no area.
    fn text_size(&self, _text: &str) -> Size {
        Size::default()
    }
}

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"~(\d+)_?[^~]*~").expect("static regex"));

/// Substitute `~1_NAME~` style placeholders with tab-separated `args`.
///
/// Placeholders are numbered from 1; a placeholder without a matching
/// argument is replaced with an empty string.
pub fn translate(template: &str, args: &str) -> String {
    let parts: Vec<&str> = args.split('\t').collect();
    PLACEHOLDER
        .replace_all(template, |caps: &regex::Captures<'_>| {
            caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| parts.get(i))
                .map(|s| s.to_string())
                .unwrap_or_default()
        })
        .into_owned()
}

/// In-memory asset table with a fallback size for unknown graphics.
#[derive(Debug, Clone, Default)]
pub struct StaticAssets {
    default_size: Option<Size>,
    glyph: Option<Size>,
    gumps: HashMap<u16, Size>,
    art: HashMap<u16, Size>,
    strings: HashMap<u32, String>,
}

impl StaticAssets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every graphic not explicitly registered reports this size.
    pub fn with_default_size(mut self, width: i32, height: i32) -> Self {
        self.default_size = Some(Size::new(width, height));
        self
    }

    /// Measure labels as fixed-width glyphs.
    pub fn with_glyph_size(mut self, width: i32, height: i32) -> Self {
        self.glyph = Some(Size::new(width, height));
        self
    }

    pub fn with_gump(mut self, graphic: u16, width: i32, height: i32) -> Self {
        self.gumps.insert(graphic, Size::new(width, height));
        self
    }

    pub fn with_art(mut self, graphic: u16, width: i32, height: i32) -> Self {
        self.art.insert(graphic, Size::new(width, height));
        self
    }

    pub fn with_string(mut self, id: u32, text: impl Into<String>) -> Self {
        self.strings.insert(id, text.into());
        self
    }
}

impl AssetSource for StaticAssets {
    fn gump_size(&self, graphic: u16) -> Option<Size> {
        self.gumps.get(&graphic).copied().or(self.default_size)
    }

    fn art_size(&self, graphic: u16) -> Option<Size> {
        self.art.get(&graphic).copied().or(self.default_size)
    }

    fn localized(&self, id: u32) -> Option<String> {
        self.strings.get(&id).cloned()
    }

    fn text_size(&self, text: &str) -> Size {
        self.glyph
            .map(|g| {
                let glyphs = i32::try_from(text.chars().count()).unwrap_or(i32::MAX);
                Size::new(g.width.saturating_mul(glyphs), g.height)
            })
            .unwrap_or_default()
    }
}
