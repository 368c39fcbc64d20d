//! Configuration engine for the lum-term terminal emulator.
//!
//! This crate owns everything that survives an application restart:
//!
//! - Color theme definitions and the built-in theme set
//! - Palette normalization for incompletely-specified themes
//! - The on-disk theme/preference store and its file format
//! - Global preferences (font, transparency, current theme)
//! - Resolution of a theme into concrete colors for a rendering surface

pub mod error;
mod ini;
pub mod normalize;
pub mod preferences;
pub mod resolve;
pub mod store;
pub mod theme;

// Re-export main types for convenience
pub use error::StoreError;
pub use preferences::{
    DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE, DEFAULT_THEME_NAME, MAX_FONT_SIZE, MIN_FONT_SIZE,
    Preferences,
};
pub use resolve::ResolvedColors;
pub use store::ThemeStore;
pub use theme::{Color, ColorTheme};
