//! Color palette tables.
//!
//! Three independent tables map the closed set of [`ColorToken`]s to style
//! records: pills (badges), panels (bordered callouts) and captions. Every
//! table carries a fallback record, so lookups never fail.
//!
//! | table   | fallback |
//! |---------|----------|
//! | pill    | `pink`   |
//! | panel   | `lime`   |
//! | caption | `lime`   |

use std::collections::BTreeMap;
use std::fmt;

/// Named color token accepted by the `color` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ColorToken {
    Pink,
    Blue,
    /// Also spelled `green`.
    Lime,
    Orange,
    Yellow,
    Dark,
}

impl ColorToken {
    /// All tokens in table order.
    pub const ALL: [Self; 6] = [
        Self::Pink,
        Self::Blue,
        Self::Lime,
        Self::Orange,
        Self::Yellow,
        Self::Dark,
    ];

    /// Parse a token, ignoring case and surrounding whitespace.
    ///
    /// ```
    /// use fb_markup::palette::ColorToken;
    ///
    /// assert_eq!(ColorToken::parse(" Green "), Some(ColorToken::Lime));
    /// assert_eq!(ColorToken::parse("mauve"), None);
    /// ```
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "pink" => Some(Self::Pink),
            "blue" => Some(Self::Blue),
            "lime" | "green" => Some(Self::Lime),
            "orange" => Some(Self::Orange),
            "yellow" => Some(Self::Yellow),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Canonical lowercase name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pink => "pink",
            Self::Blue => "blue",
            Self::Lime => "lime",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Badge style: filled background with contrasting text.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct PillStyle {
    pub background: String,
    pub color: String,
}

impl PillStyle {
    #[must_use]
    pub fn new(background: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            background: background.into(),
            color: color.into(),
        }
    }

    /// CSS declarations for an inline `style` attribute.
    #[must_use]
    pub fn css(&self) -> String {
        format!("background:{};color:{};", self.background, self.color)
    }
}

/// Panel style: tinted background, border and label accent.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct PanelStyle {
    pub background: String,
    /// Full CSS border value, e.g. `2px solid #c8f135`.
    pub border: String,
    /// Text color of the panel label.
    pub accent: String,
}

impl PanelStyle {
    #[must_use]
    pub fn new(
        background: impl Into<String>,
        border: impl Into<String>,
        accent: impl Into<String>,
    ) -> Self {
        Self {
            background: background.into(),
            border: border.into(),
            accent: accent.into(),
        }
    }
}

/// Caption badge style.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct CaptionStyle {
    pub background: String,
    pub color: String,
}

impl CaptionStyle {
    #[must_use]
    pub fn new(background: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            background: background.into(),
            color: color.into(),
        }
    }

    /// CSS declarations for an inline `style` attribute.
    #[must_use]
    pub fn css(&self) -> String {
        format!("background:{};color:{};", self.background, self.color)
    }
}

/// One lookup table from color tokens to style records.
///
/// The fallback record is mandatory, which makes [`lookup`](Self::lookup)
/// total: unknown tokens and tokens without an entry both resolve to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteTable<S> {
    entries: BTreeMap<ColorToken, S>,
    fallback: S,
}

impl<S> PaletteTable<S> {
    /// Create an empty table that resolves everything to `fallback`.
    pub fn new(fallback: S) -> Self {
        Self {
            entries: BTreeMap::new(),
            fallback,
        }
    }

    /// Add or replace the entry for `token`.
    #[must_use]
    pub fn with_entry(mut self, token: ColorToken, style: S) -> Self {
        self.insert(token, style);
        self
    }

    /// Add or replace the entry for `token`.
    pub fn insert(&mut self, token: ColorToken, style: S) {
        self.entries.insert(token, style);
    }

    /// Replace the fallback record.
    pub fn set_fallback(&mut self, style: S) {
        self.fallback = style;
    }

    /// Resolve a raw `color` attribute value.
    pub fn lookup(&self, token: &str) -> &S {
        ColorToken::parse(token).map_or(&self.fallback, |t| self.get(t))
    }

    /// Resolve a known token.
    pub fn get(&self, token: ColorToken) -> &S {
        self.entries.get(&token).unwrap_or(&self.fallback)
    }

    /// The record returned for unknown tokens.
    pub fn fallback(&self) -> &S {
        &self.fallback
    }
}

/// The three palette tables used by the expanders.
///
/// Inject a customized palette with
/// [`Pipeline::with_palette`](crate::Pipeline::with_palette).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub pill: PaletteTable<PillStyle>,
    pub panel: PaletteTable<PanelStyle>,
    pub caption: PaletteTable<CaptionStyle>,
}

impl Default for Palette {
    fn default() -> Self {
        let pill = |bg: &str, fg: &str| PillStyle::new(bg, fg);
        let panel = |bg: &str, accent_border: &str, accent: &str| {
            PanelStyle::new(bg, format!("2px solid {accent_border}"), accent)
        };
        let caption = |bg: &str, fg: &str| CaptionStyle::new(bg, fg);

        let pill_table = PaletteTable::new(pill("#ff3d9a", "#ffffff"))
            .with_entry(ColorToken::Pink, pill("#ff3d9a", "#ffffff"))
            .with_entry(ColorToken::Blue, pill("#1a6bff", "#ffffff"))
            .with_entry(ColorToken::Lime, pill("#c8f135", "#0e0e14"))
            .with_entry(ColorToken::Orange, pill("#ff8a00", "#ffffff"))
            .with_entry(ColorToken::Yellow, pill("#ffe916", "#0e0e14"))
            .with_entry(ColorToken::Dark, pill("#0e0e14", "#fefefe"));

        let panel_table = PaletteTable::new(panel("#f6fde0", "#c8f135", "#5c7a00"))
            .with_entry(ColorToken::Pink, panel("#fff0f7", "#ff3d9a", "#ff3d9a"))
            .with_entry(ColorToken::Blue, panel("#eef4ff", "#1a6bff", "#1a6bff"))
            .with_entry(ColorToken::Lime, panel("#f6fde0", "#c8f135", "#5c7a00"))
            .with_entry(ColorToken::Orange, panel("#fff4e6", "#ff8a00", "#ff8a00"))
            .with_entry(ColorToken::Yellow, panel("#fffbe0", "#ffe916", "#8a7a00"))
            .with_entry(ColorToken::Dark, panel("#0e0e14", "#333333", "#c8f135"));

        let caption_table = PaletteTable::new(caption("#c8f135", "#0e0e14"))
            .with_entry(ColorToken::Pink, caption("#ff3d9a", "#ffffff"))
            .with_entry(ColorToken::Blue, caption("#1a6bff", "#ffffff"))
            .with_entry(ColorToken::Lime, caption("#c8f135", "#0e0e14"))
            .with_entry(ColorToken::Orange, caption("#ff8a00", "#ffffff"))
            .with_entry(ColorToken::Yellow, caption("#ffe916", "#0e0e14"))
            .with_entry(ColorToken::Dark, caption("#0e0e14", "#fefefe"));

        Self {
            pill: pill_table,
            panel: panel_table,
            caption: caption_table,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_tokens() {
        for token in ColorToken::ALL {
            assert_eq!(ColorToken::parse(token.as_str()), Some(token));
        }
        assert_eq!(ColorToken::parse("GREEN"), Some(ColorToken::Lime));
        assert_eq!(ColorToken::parse(""), None);
        assert_eq!(ColorToken::parse("purple"), None);
    }

    #[test]
    fn test_pill_fallback_is_pink() {
        let palette = Palette::default();
        assert_eq!(
            palette.pill.lookup("chartreuse"),
            palette.pill.get(ColorToken::Pink)
        );
        assert_eq!(palette.pill.lookup(""), palette.pill.fallback());
    }

    #[test]
    fn test_panel_fallback_is_lime() {
        let palette = Palette::default();
        assert_eq!(
            palette.panel.lookup("unknown"),
            palette.panel.get(ColorToken::Lime)
        );
    }

    #[test]
    fn test_green_and_lime_share_record() {
        let palette = Palette::default();
        assert_eq!(palette.panel.lookup("green"), palette.panel.lookup("lime"));
        assert_eq!(palette.pill.lookup("green"), palette.pill.lookup("lime"));
    }

    #[test]
    fn test_every_token_resolves_in_every_table() {
        let palette = Palette::default();
        for token in ColorToken::ALL {
            assert!(!palette.pill.get(token).background.is_empty());
            assert!(!palette.panel.get(token).border.is_empty());
            assert!(!palette.caption.get(token).color.is_empty());
        }
    }

    #[test]
    fn test_missing_entry_uses_fallback() {
        let table = PaletteTable::new(PillStyle::new("#000", "#fff"))
            .with_entry(ColorToken::Blue, PillStyle::new("#00f", "#fff"));
        assert_eq!(table.lookup("blue").background, "#00f");
        assert_eq!(table.lookup("pink").background, "#000");
    }

    #[test]
    fn test_insert_overrides_entry() {
        let mut palette = Palette::default();
        palette
            .pill
            .insert(ColorToken::Blue, PillStyle::new("#0044cc", "#ffffff"));
        assert_eq!(palette.pill.lookup("blue").background, "#0044cc");
    }

    #[test]
    fn test_pill_css() {
        let style = PillStyle::new("#1a6bff", "#ffffff");
        assert_eq!(style.css(), "background:#1a6bff;color:#ffffff;");
    }
}
