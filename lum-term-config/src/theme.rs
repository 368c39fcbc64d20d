//! Color theme definitions for the terminal.

use crate::normalize::{
    DARK_BACKGROUND, DARK_FOREGROUND, LIGHT_BACKGROUND, LIGHT_FOREGROUND, LIGHT_PALETTE,
    STANDARD_PALETTE,
};

/// A color in RGBA format, each channel nominally in `[0.0, 1.0]`.
///
/// Channel values read from a theme file are preserved as parsed, even when
/// they fall outside the nominal range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a `r,g,b,a` quadruple of decimal channel values.
    ///
    /// Returns `None` for anything other than exactly four parseable
    /// components; callers treat that as a malformed line and skip it.
    pub fn parse(value: &str) -> Option<Self> {
        let mut channels = [0.0f32; 4];
        let mut parts = value.split(',');
        for channel in &mut channels {
            *channel = parts.next()?.trim().parse().ok()?;
        }
        if parts.next().is_some() {
            return None;
        }
        Some(Self::new(channels[0], channels[1], channels[2], channels[3]))
    }

    /// Serialize as a `r,g,b,a` quadruple with fixed 6-decimal precision.
    pub fn encode(&self) -> String {
        format!(
            "{:.6},{:.6},{:.6},{:.6}",
            self.r, self.g, self.b, self.a
        )
    }

    /// All four channels exactly zero is the on-disk encoding of an unset
    /// color, distinct from opaque black (`0,0,0,1`).
    pub fn is_unset(&self) -> bool {
        self.r == 0.0 && self.g == 0.0 && self.b == 0.0 && self.a == 0.0
    }
}

/// Terminal color theme: foreground/background plus the 16 ANSI colors.
///
/// Absent fields (`None`) are filled in by [`ColorTheme::normalize`] before a
/// theme is rendered or persisted. The `transparency` field is a legacy
/// per-theme value kept for in-memory compatibility; it is never written to
/// or read from disk, and always mirrors the global preference.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorTheme {
    pub name: String,
    pub foreground: Option<Color>,
    pub background: Option<Color>,
    /// ANSI colors 0-15.
    pub palette: [Option<Color>; 16],
    pub transparency: f32,
}

impl ColorTheme {
    /// Default dark theme
    pub fn default_dark() -> Self {
        Self {
            name: "Default".to_string(),
            foreground: Some(DARK_FOREGROUND),
            background: Some(DARK_BACKGROUND),
            palette: STANDARD_PALETTE.map(Some),
            transparency: 0.0,
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            name: "Light".to_string(),
            foreground: Some(LIGHT_FOREGROUND),
            background: Some(LIGHT_BACKGROUND),
            palette: LIGHT_PALETTE.map(Some),
            transparency: 0.0,
        }
    }

    /// Solarized Dark theme
    pub fn solarized_dark() -> Self {
        Self {
            name: "Solarized Dark".to_string(),
            foreground: Some(Color::new(0.513725, 0.580392, 0.588235, 1.0)),
            background: Some(Color::new(0.0, 0.168627, 0.211765, 1.0)),
            palette: [
                Some(Color::new(0.027451, 0.211765, 0.258824, 1.0)),
                Some(Color::new(0.862745, 0.196078, 0.184314, 1.0)),
                Some(Color::new(0.521569, 0.600000, 0.0, 1.0)),
                Some(Color::new(0.709804, 0.537255, 0.0, 1.0)),
                Some(Color::new(0.149020, 0.545098, 0.823529, 1.0)),
                Some(Color::new(0.827451, 0.211765, 0.509804, 1.0)),
                Some(Color::new(0.164706, 0.631373, 0.596078, 1.0)),
                Some(Color::new(0.933333, 0.909804, 0.835294, 1.0)),
                Some(Color::new(0.0, 0.168627, 0.211765, 1.0)),
                Some(Color::new(0.796078, 0.294118, 0.086275, 1.0)),
                Some(Color::new(0.345098, 0.431373, 0.458824, 1.0)),
                Some(Color::new(0.396078, 0.482353, 0.513725, 1.0)),
                Some(Color::new(0.513725, 0.580392, 0.588235, 1.0)),
                Some(Color::new(0.423529, 0.443137, 0.768627, 1.0)),
                Some(Color::new(0.576471, 0.631373, 0.631373, 1.0)),
                Some(Color::new(0.992157, 0.964706, 0.890196, 1.0)),
            ],
            transparency: 0.0,
        }
    }

    /// Matrix theme (green on near-black)
    pub fn matrix() -> Self {
        Self {
            name: "Matrix".to_string(),
            foreground: Some(Color::new(0.0, 1.0, 0.254902, 1.0)),
            background: Some(Color::new(0.0, 0.047059, 0.0, 1.0)),
            palette: [
                Some(Color::new(0.0, 0.0, 0.0, 1.0)),
                Some(Color::new(0.8, 0.2, 0.2, 1.0)),
                Some(Color::new(0.0, 0.8, 0.2, 1.0)),
                Some(Color::new(0.6, 0.8, 0.0, 1.0)),
                Some(Color::new(0.0, 0.6, 0.4, 1.0)),
                Some(Color::new(0.2, 0.8, 0.4, 1.0)),
                Some(Color::new(0.0, 0.8, 0.6, 1.0)),
                Some(Color::new(0.6, 0.9, 0.6, 1.0)),
                Some(Color::new(0.2, 0.4, 0.2, 1.0)),
                Some(Color::new(1.0, 0.4, 0.4, 1.0)),
                Some(Color::new(0.2, 1.0, 0.4, 1.0)),
                Some(Color::new(0.8, 1.0, 0.2, 1.0)),
                Some(Color::new(0.2, 0.8, 0.6, 1.0)),
                Some(Color::new(0.4, 1.0, 0.6, 1.0)),
                Some(Color::new(0.2, 1.0, 0.8, 1.0)),
                Some(Color::new(0.8, 1.0, 0.8, 1.0)),
            ],
            transparency: 0.0,
        }
    }

    /// The built-in theme set used to seed an empty store.
    pub fn builtins() -> [Self; 4] {
        [
            Self::default_dark(),
            Self::light(),
            Self::solarized_dark(),
            Self::matrix(),
        ]
    }
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self::default_dark()
    }
}
