//! Global preferences: font, transparency, and the theme map.
//!
//! One `Preferences` value is owned by the top-level engine context and
//! passed by reference into every component that needs it; there is no
//! ambient global.

use crate::theme::ColorTheme;
use std::collections::BTreeMap;

pub const DEFAULT_FONT_FAMILY: &str = "Monospace";
pub const DEFAULT_FONT_SIZE: f32 = 11.0;
pub const MIN_FONT_SIZE: f32 = 8.0;
pub const MAX_FONT_SIZE: f32 = 24.0;
pub const DEFAULT_THEME_NAME: &str = "Default";

/// Process-wide settings plus the in-memory theme map.
///
/// `transparency` is the single source of truth for background opacity; the
/// per-theme field of the same name only mirrors it.
#[derive(Debug, Clone, PartialEq)]
pub struct Preferences {
    pub font_family: String,
    /// Point size, kept within `[MIN_FONT_SIZE, MAX_FONT_SIZE]`.
    pub font_size: f32,
    /// Global background transparency in `[0.0, 1.0]`.
    pub transparency: f32,
    /// Name of the active theme; must reference a key of `themes` after
    /// load-time reconciliation.
    pub current_theme: String,
    /// Themes keyed by name. `BTreeMap` keeps iteration order deterministic
    /// between runs.
    pub themes: BTreeMap<String, ColorTheme>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            transparency: 0.0,
            current_theme: DEFAULT_THEME_NAME.to_string(),
            themes: BTreeMap::new(),
        }
    }
}

impl Preferences {
    /// Theme names in stable lexicographic order, for selection menus.
    pub fn theme_names(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(String::as_str)
    }

    /// Set the global transparency, clamped to `[0.0, 1.0]`, and mirror it
    /// into every in-memory theme's legacy field.
    pub fn set_transparency(&mut self, value: f32) {
        self.transparency = value.clamp(0.0, 1.0);
        for theme in self.themes.values_mut() {
            theme.transparency = self.transparency;
        }
    }

    /// Set the font, clamping the size to the supported range.
    pub fn set_font(&mut self, family: &str, size: f32) {
        self.font_family = family.to_string();
        self.font_size = size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
    }
}
