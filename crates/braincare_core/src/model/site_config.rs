//! Site identity and visual theme configuration.
//!
//! # Invariants
//! - Exactly one `SiteConfig` exists per process; it owns its `ThemeConfig`.
//! - Theme fields are independent; there are no cross-field rules.
//! - `grid_columns` is positive by construction.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::num::NonZeroU32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeroAlignment {
    Left,
    Center,
}

impl HeroAlignment {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "left" => Some(Self::Left),
            "center" => Some(Self::Center),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    pub primary_color: String,
    pub accent_color: String,
    pub background_color: String,
    pub surface_color: String,
    pub heading_font: String,
    pub body_font: String,
    /// CSS size token, e.g. `1.5rem`.
    pub border_radius: String,
    pub grid_columns: NonZeroU32,
    pub hero_alignment: HeroAlignment,
    pub glass_effect: bool,
}

impl ThemeConfig {
    /// Shallow field-level merge: supplied fields win, `None` keeps current.
    pub fn apply(&mut self, patch: ThemePatch) {
        let ThemePatch {
            primary_color,
            accent_color,
            background_color,
            surface_color,
            heading_font,
            body_font,
            border_radius,
            grid_columns,
            hero_alignment,
            glass_effect,
        } = patch;

        if let Some(value) = primary_color {
            self.primary_color = value;
        }
        if let Some(value) = accent_color {
            self.accent_color = value;
        }
        if let Some(value) = background_color {
            self.background_color = value;
        }
        if let Some(value) = surface_color {
            self.surface_color = value;
        }
        if let Some(value) = heading_font {
            self.heading_font = value;
        }
        if let Some(value) = body_font {
            self.body_font = value;
        }
        if let Some(value) = border_radius {
            self.border_radius = value;
        }
        if let Some(value) = grid_columns {
            self.grid_columns = value;
        }
        if let Some(value) = hero_alignment {
            self.hero_alignment = value;
        }
        if let Some(value) = glass_effect {
            self.glass_effect = value;
        }
    }

    /// CSS custom properties derived from the theme, in a stable order.
    pub fn css_variables(&self) -> [(&'static str, &str); 7] {
        [
            ("--primary-color", self.primary_color.as_str()),
            ("--accent-color", self.accent_color.as_str()),
            ("--bg-color", self.background_color.as_str()),
            ("--surface-color", self.surface_color.as_str()),
            ("--heading-font", self.heading_font.as_str()),
            ("--body-font", self.body_font.as_str()),
            ("--border-radius", self.border_radius.as_str()),
        ]
    }
}

/// Partial theme update. Unset fields are retained by `ThemeConfig::apply`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemePatch {
    pub primary_color: Option<String>,
    pub accent_color: Option<String>,
    pub background_color: Option<String>,
    pub surface_color: Option<String>,
    pub heading_font: Option<String>,
    pub body_font: Option<String>,
    pub border_radius: Option<String>,
    pub grid_columns: Option<NonZeroU32>,
    pub hero_alignment: Option<HeroAlignment>,
    pub glass_effect: Option<bool>,
}

impl ThemePatch {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub hero_title: String,
    pub hero_highlight: String,
    pub hero_subtitle: String,
    pub author_name: String,
    pub author_role: String,
    pub avatar_url: String,
    pub theme: ThemeConfig,
}

impl SiteConfig {
    pub fn field(&self, field: SiteField) -> &str {
        match field {
            SiteField::HeroTitle => &self.hero_title,
            SiteField::HeroHighlight => &self.hero_highlight,
            SiteField::HeroSubtitle => &self.hero_subtitle,
            SiteField::AuthorName => &self.author_name,
            SiteField::AuthorRole => &self.author_role,
            SiteField::AvatarUrl => &self.avatar_url,
        }
    }

    /// Overrides one scalar field. The theme is not reachable from here.
    pub fn set_field(&mut self, field: SiteField, value: impl Into<String>) {
        let slot = match field {
            SiteField::HeroTitle => &mut self.hero_title,
            SiteField::HeroHighlight => &mut self.hero_highlight,
            SiteField::HeroSubtitle => &mut self.hero_subtitle,
            SiteField::AuthorName => &mut self.author_name,
            SiteField::AuthorRole => &mut self.author_role,
            SiteField::AvatarUrl => &mut self.avatar_url,
        };
        *slot = value.into();
    }
}

/// Top-level scalar fields of `SiteConfig`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SiteField {
    HeroTitle,
    HeroHighlight,
    HeroSubtitle,
    AuthorName,
    AuthorRole,
    AvatarUrl,
}

impl SiteField {
    pub const ALL: [SiteField; 6] = [
        SiteField::HeroTitle,
        SiteField::HeroHighlight,
        SiteField::HeroSubtitle,
        SiteField::AuthorName,
        SiteField::AuthorRole,
        SiteField::AvatarUrl,
    ];

    /// Wire (camelCase) key of the field.
    pub fn key(self) -> &'static str {
        match self {
            Self::HeroTitle => "heroTitle",
            Self::HeroHighlight => "heroHighlight",
            Self::HeroSubtitle => "heroSubtitle",
            Self::AuthorName => "authorName",
            Self::AuthorRole => "authorRole",
            Self::AvatarUrl => "avatarUrl",
        }
    }

    /// Parses a wire key. `theme` and unknown keys are rejected.
    pub fn parse(value: &str) -> Result<Self, SiteFieldError> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|field| field.key() == trimmed)
            .ok_or_else(|| SiteFieldError::UnknownField(trimmed.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteFieldError {
    UnknownField(String),
}

impl Display for SiteFieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownField(key) => write!(
                f,
                "unknown site field `{key}`; expected heroTitle|heroHighlight|heroSubtitle|authorName|authorRole|avatarUrl"
            ),
        }
    }
}

impl Error for SiteFieldError {}
