//! The closed vocabulary of shorthand tags.

use std::fmt;

/// Prefix shared by every shorthand tag name.
pub const TAG_PREFIX: &str = "fb-";

/// Kind of a recognized shorthand tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    /// `<fb-zigzag/>` decorative divider.
    Divider,
    /// `<fb-section color label>` titled section.
    Section,
    /// `<fb-title>` inside a section.
    Title,
    /// `<fb-camp name color>` highlighted panel.
    Panel,
    /// `<fb-stats>` statistic strip.
    Stats,
    /// `<fb-stat color>` inside a statistic strip.
    Stat,
    /// `<fb-quote attribution>` pull-quote.
    Quote,
    /// `<fb-image src alt caption color>` captioned image.
    Image,
    /// `<fb-weather>` weather callout.
    Weather,
    /// `<fb-potd likes annotation>` post of the day.
    PostOfTheDay,
}

impl TagKind {
    pub const ALL: [Self; 10] = [
        Self::Divider,
        Self::Section,
        Self::Title,
        Self::Panel,
        Self::Stats,
        Self::Stat,
        Self::Quote,
        Self::Image,
        Self::Weather,
        Self::PostOfTheDay,
    ];

    /// Full tag name including the `fb-` prefix.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Divider => "fb-zigzag",
            Self::Section => "fb-section",
            Self::Title => "fb-title",
            Self::Panel => "fb-camp",
            Self::Stats => "fb-stats",
            Self::Stat => "fb-stat",
            Self::Quote => "fb-quote",
            Self::Image => "fb-image",
            Self::Weather => "fb-weather",
            Self::PostOfTheDay => "fb-potd",
        }
    }

    /// Look up a kind by its full tag name. Case-sensitive.
    ///
    /// ```
    /// use fb_markup::TagKind;
    ///
    /// assert_eq!(TagKind::from_name("fb-stats"), Some(TagKind::Stats));
    /// assert_eq!(TagKind::from_name("fb-statsx"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Void kinds never hold a body and only consume their own closing tag.
    #[must_use]
    pub fn is_void(self) -> bool {
        matches!(self, Self::Divider | Self::Image)
    }

    /// Block components that get relocated out of a section's prose.
    #[must_use]
    pub fn is_hoistable(self) -> bool {
        matches!(
            self,
            Self::Section
                | Self::Panel
                | Self::Stats
                | Self::Quote
                | Self::Image
                | Self::Weather
                | Self::PostOfTheDay
        )
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for kind in TagKind::ALL {
            assert!(kind.name().starts_with(TAG_PREFIX));
            assert_eq!(TagKind::from_name(kind.name()), Some(kind));
        }
    }

    #[test]
    fn test_unknown_names() {
        assert_eq!(TagKind::from_name("fb-unknown"), None);
        assert_eq!(TagKind::from_name("FB-QUOTE"), None);
        assert_eq!(TagKind::from_name("zigzag"), None);
    }

    #[test]
    fn test_void_kinds() {
        assert!(TagKind::Divider.is_void());
        assert!(TagKind::Image.is_void());
        assert!(!TagKind::Quote.is_void());
    }

    #[test]
    fn test_title_and_stat_never_hoisted() {
        assert!(!TagKind::Title.is_hoistable());
        assert!(!TagKind::Stat.is_hoistable());
        assert!(!TagKind::Divider.is_hoistable());
        assert!(TagKind::Weather.is_hoistable());
    }
}
