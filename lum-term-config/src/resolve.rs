//! Resolution of a named theme into the concrete colors handed to a
//! rendering surface.

use crate::preferences::{DEFAULT_THEME_NAME, Preferences};
use crate::theme::{Color, ColorTheme};

/// The complete color contract for a rendering surface: foreground,
/// background with the effective alpha folded in, and the 16-color palette.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedColors {
    pub foreground: Color,
    pub background: Color,
    pub palette: [Color; 16],
}

impl Preferences {
    /// Resolve `name` against the theme map.
    ///
    /// A missing name self-heals to `"Default"` (synthesizing the built-in
    /// default if even that is absent) and updates `current_theme`, so this
    /// never fails. The resolved theme is normalized in place first.
    ///
    /// Transparency handling: the returned background carries alpha
    /// `1.0 - transparency`; palette entries have their alpha forced to zero
    /// because only the background plane composites transparency — the
    /// surface renders text colors opaque. The foreground alpha is passed
    /// through untouched.
    pub fn resolve_theme(&mut self, name: &str) -> ResolvedColors {
        let key = if self.themes.contains_key(name) {
            name.to_string()
        } else {
            log::warn!(
                "theme {:?} not found, falling back to {:?}",
                name,
                DEFAULT_THEME_NAME
            );
            self.current_theme = DEFAULT_THEME_NAME.to_string();
            DEFAULT_THEME_NAME.to_string()
        };
        let transparency = self.transparency;

        let theme = self.themes.entry(key).or_insert_with(ColorTheme::default_dark);
        theme.normalize();

        let foreground = theme.foreground.unwrap_or(crate::normalize::DARK_FOREGROUND);
        let mut background = theme.background.unwrap_or(crate::normalize::DARK_BACKGROUND);
        background.a = 1.0 - transparency;

        let mut palette = [Color::new(0.0, 0.0, 0.0, 0.0); 16];
        for (resolved, entry) in palette.iter_mut().zip(&theme.palette) {
            let mut color = entry.unwrap_or(Color::new(0.0, 0.0, 0.0, 0.0));
            color.a = 0.0;
            *resolved = color;
        }

        ResolvedColors {
            foreground,
            background,
            palette,
        }
    }
}
