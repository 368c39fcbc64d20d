//! Palette normalization: deterministic repair of incompletely-specified
//! themes.
//!
//! A theme loaded from disk (or edited in memory) may leave its foreground,
//! background, or palette unset. Normalization fills those gaps with fixed
//! built-in defaults so that every theme handed to a rendering surface or
//! written back to disk is fully specified. The light-toned defaults are
//! selected by a literal name check against `"Light"`; everything else gets
//! the standard dark set.

use crate::theme::{Color, ColorTheme};

pub const DARK_FOREGROUND: Color = Color::new(0.85, 0.9, 0.94, 1.0);
pub const DARK_BACKGROUND: Color = Color::new(0.1, 0.1, 0.1, 1.0);
pub const LIGHT_FOREGROUND: Color = Color::new(0.1, 0.1, 0.1, 1.0);
pub const LIGHT_BACKGROUND: Color = Color::new(0.98, 0.98, 0.98, 1.0);

/// Standard ANSI palette (xterm values).
pub const STANDARD_PALETTE: [Color; 16] = [
    Color::new(0.0, 0.0, 0.0, 1.0),
    Color::new(0.803922, 0.0, 0.0, 1.0),
    Color::new(0.0, 0.803922, 0.0, 1.0),
    Color::new(0.803922, 0.803922, 0.0, 1.0),
    Color::new(0.0, 0.0, 0.933333, 1.0),
    Color::new(0.803922, 0.0, 0.803922, 1.0),
    Color::new(0.0, 0.803922, 0.803922, 1.0),
    Color::new(0.898039, 0.898039, 0.898039, 1.0),
    Color::new(0.498039, 0.498039, 0.498039, 1.0),
    Color::new(1.0, 0.0, 0.0, 1.0),
    Color::new(0.0, 1.0, 0.0, 1.0),
    Color::new(1.0, 1.0, 0.0, 1.0),
    Color::new(0.360784, 0.360784, 1.0, 1.0),
    Color::new(1.0, 0.0, 1.0, 1.0),
    Color::new(0.0, 1.0, 1.0, 1.0),
    Color::new(1.0, 1.0, 1.0, 1.0),
];

/// Lighter-toned ANSI palette used for the `"Light"` theme.
pub const LIGHT_PALETTE: [Color; 16] = [
    Color::new(0.0, 0.0, 0.0, 1.0),
    Color::new(0.733333, 0.0, 0.0, 1.0),
    Color::new(0.0, 0.733333, 0.0, 1.0),
    Color::new(0.733333, 0.733333, 0.0, 1.0),
    Color::new(0.0, 0.0, 0.733333, 1.0),
    Color::new(0.733333, 0.0, 0.733333, 1.0),
    Color::new(0.0, 0.733333, 0.733333, 1.0),
    Color::new(0.733333, 0.733333, 0.733333, 1.0),
    Color::new(0.333333, 0.333333, 0.333333, 1.0),
    Color::new(1.0, 0.333333, 0.333333, 1.0),
    Color::new(0.333333, 1.0, 0.333333, 1.0),
    Color::new(1.0, 1.0, 0.333333, 1.0),
    Color::new(0.333333, 0.333333, 1.0, 1.0),
    Color::new(1.0, 0.333333, 1.0, 1.0),
    Color::new(0.333333, 1.0, 1.0, 1.0),
    Color::new(1.0, 1.0, 1.0, 1.0),
];

const LIGHT_THEME_NAME: &str = "Light";

impl ColorTheme {
    /// Fill any unset field with its built-in default.
    ///
    /// Idempotent: a fully-specified theme is left untouched. An unset
    /// `palette[0]` replaces the entire 16-entry palette, not just the first
    /// slot.
    pub fn normalize(&mut self) {
        let light = self.name == LIGHT_THEME_NAME;

        if self.palette[0].is_none() {
            let table = if light {
                &LIGHT_PALETTE
            } else {
                &STANDARD_PALETTE
            };
            for (slot, value) in self.palette.iter_mut().zip(table) {
                *slot = Some(*value);
            }
        }
        if self.foreground.is_none() {
            self.foreground = Some(if light {
                LIGHT_FOREGROUND
            } else {
                DARK_FOREGROUND
            });
        }
        if self.background.is_none() {
            self.background = Some(if light {
                LIGHT_BACKGROUND
            } else {
                DARK_BACKGROUND
            });
        }
    }
}
