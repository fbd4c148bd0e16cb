//! Core domain types.
//!
//! The small identifier enums (language, theme, section, category) expose
//! stable lowercase codes via `code()`/`from_code()`: those codes are
//! what gets persisted to localStorage and written into DOM attributes.
//! The content record types use `&'static str` fields so the tables in
//! [`crate::data`] are zero-cost compile-time constants.

/// Supported UI languages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Language {
    Es,
    En,
}

impl Language {
    /// Two-letter code used for persistence and the `<html lang>` attribute.
    pub fn code(self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::En => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "es" => Some(Language::Es),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    /// The other supported language.
    pub fn toggled(self) -> Self {
        match self {
            Language::Es => Language::En,
            Language::En => Language::Es,
        }
    }

    /// Resolves the startup language. A valid stored preference always
    /// wins; otherwise a locale hint starting with "es" (any case,
    /// region tags included) selects Spanish, and everything else
    /// defaults to English.
    pub fn resolve(stored: Option<&str>, locale_hint: Option<&str>) -> Self {
        if let Some(language) = stored.and_then(Language::from_code) {
            return language;
        }
        match locale_hint {
            Some(hint) if hint.to_ascii_lowercase().starts_with("es") => Language::Es,
            _ => Language::En,
        }
    }
}

/// Color themes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn code(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Stored preference wins; otherwise the host's color-scheme hint
    /// decides.
    pub fn resolve(stored: Option<&str>, prefers_dark: bool) -> Self {
        if let Some(theme) = stored.and_then(Theme::from_code) {
            return theme;
        }
        if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

/// The five fixed page regions. Nothing outside this set is ever
/// observed or navigated to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionId {
    Home,
    About,
    Technologies,
    Experience,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Technologies,
        SectionId::Experience,
        SectionId::Contact,
    ];

    /// DOM id of the section element.
    pub fn id(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Technologies => "technologies",
            SectionId::Experience => "experience",
            SectionId::Contact => "contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.id() == id)
    }
}

/// Technology categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Mobile,
    Frontend,
    Backend,
    Database,
    Tools,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Mobile,
        Category::Frontend,
        Category::Backend,
        Category::Database,
        Category::Tools,
    ];
}

/// Category selection for the technologies grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Filter buttons rendered by the UI, in display order.
    pub const ALL: [CategoryFilter; 6] = [
        CategoryFilter::All,
        CategoryFilter::Only(Category::Mobile),
        CategoryFilter::Only(Category::Frontend),
        CategoryFilter::Only(Category::Backend),
        CategoryFilter::Only(Category::Database),
        CategoryFilter::Only(Category::Tools),
    ];

    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == category,
        }
    }
}

/// Proficiency level of a technology.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Learning,
    Advanced,
    Expert,
}

impl Level {
    /// Number of stars shown on the card badge.
    pub fn stars(self) -> u8 {
        match self {
            Level::Learning => 1,
            Level::Advanced => 2,
            Level::Expert => 3,
        }
    }
}

/// Kind of engagement for an experience entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contract,
    Freelance,
}

/// One entry of the technologies table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Technology {
    pub name: &'static str,
    /// Asset path ("/android.svg") or a literal emoji; the core never
    /// inspects it beyond that distinction.
    pub icon: &'static str,
    /// Display hint consumed by the stylesheet.
    pub color: &'static str,
    pub category: Category,
    pub level: Option<Level>,
}

/// One entry of the work-history timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub id: &'static str,
    pub company: &'static str,
    pub position: &'static str,
    /// Free-text date range; the UI appends the localized "present".
    pub period: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub location: Option<&'static str>,
    pub employment: Option<EmploymentType>,
    /// Empty when the entry has nothing to expand beyond its chips.
    pub achievements: &'static [&'static str],
    pub project_image: Option<&'static str>,
}

/// One entry of the contact-links card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactLink {
    pub name: &'static str,
    /// Must be a `mailto:` or `https:` URI (asserted by a data test).
    pub url: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_preference_wins_over_locale_hint() {
        assert_eq!(
            Language::resolve(Some("en"), Some("es-MX")),
            Language::En
        );
        assert_eq!(
            Language::resolve(Some("es"), Some("fr-FR")),
            Language::Es
        );
    }

    #[test]
    fn locale_hint_prefix_selects_spanish() {
        assert_eq!(Language::resolve(None, Some("es-ES")), Language::Es);
        assert_eq!(Language::resolve(None, Some("es-MX")), Language::Es);
        assert_eq!(Language::resolve(None, Some("ES-es")), Language::Es);
        assert_eq!(Language::resolve(None, Some("fr-FR")), Language::En);
        assert_eq!(Language::resolve(None, None), Language::En);
    }

    #[test]
    fn invalid_stored_value_falls_back_to_hint() {
        assert_eq!(Language::resolve(Some("de"), Some("es")), Language::Es);
        assert_eq!(Language::resolve(Some(""), None), Language::En);
    }

    #[test]
    fn language_toggle_is_an_involution() {
        for language in [Language::Es, Language::En] {
            assert_eq!(language.toggled().toggled(), language);
        }
    }

    #[test]
    fn persisted_codes_round_trip() {
        // These codes are the localStorage / DOM-attribute wire format;
        // changing them would orphan existing stored preferences.
        for language in [Language::Es, Language::En] {
            assert_eq!(Language::from_code(language.code()), Some(language));
        }
        assert_eq!(Language::Es.code(), "es");
        assert_eq!(Language::En.code(), "en");

        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::from_code(theme.code()), Some(theme));
        }
        assert_eq!(Theme::Light.code(), "light");
        assert_eq!(Theme::Dark.code(), "dark");
    }

    #[test]
    fn theme_resolution_precedence() {
        assert_eq!(Theme::resolve(Some("light"), true), Theme::Light);
        assert_eq!(Theme::resolve(Some("bogus"), true), Theme::Dark);
        assert_eq!(Theme::resolve(None, false), Theme::Light);
    }

    #[test]
    fn section_ids_round_trip() {
        for section in SectionId::ALL {
            assert_eq!(SectionId::from_id(section.id()), Some(section));
        }
        assert_eq!(SectionId::from_id("nav"), None);
    }

    #[test]
    fn category_filter_matches() {
        assert!(CategoryFilter::All.matches(Category::Tools));
        assert!(CategoryFilter::Only(Category::Mobile).matches(Category::Mobile));
        assert!(!CategoryFilter::Only(Category::Mobile).matches(Category::Backend));
    }
}
