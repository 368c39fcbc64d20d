//! On-disk persistence for preferences and themes.
//!
//! Layout under the configuration root:
//!
//! - `config.ini` — single `[General]` section (font, transparency, current
//!   theme)
//! - `themes/<name>.theme` — one file per theme, `[Theme]` + `[Palette]`
//!   sections
//!
//! Missing files yield defaults, malformed lines are skipped, and per-file
//! write failures are logged and do not stop sibling writes. The only hard
//! error is an uncreatable configuration root.

use crate::error::StoreError;
use crate::ini;
use crate::preferences::{DEFAULT_THEME_NAME, MAX_FONT_SIZE, MIN_FONT_SIZE, Preferences};
use crate::theme::{Color, ColorTheme};
use std::fs;
use std::path::PathBuf;

const PREFERENCES_FILE: &str = "config.ini";
const THEME_EXTENSION: &str = "theme";

/// Reads and writes the preference file and the theme directory.
pub struct ThemeStore {
    root: PathBuf,
}

impl ThemeStore {
    /// Store rooted at an explicit directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Store at the platform configuration location.
    pub fn default_location() -> Self {
        #[cfg(target_os = "windows")]
        {
            if let Some(config_dir) = dirs::config_dir() {
                Self::new(config_dir.join("lum-term"))
            } else {
                Self::new("lum-term")
            }
        }
        #[cfg(not(target_os = "windows"))]
        {
            // XDG convention: ~/.config/lum-term
            if let Some(home_dir) = dirs::home_dir() {
                Self::new(home_dir.join(".config").join("lum-term"))
            } else {
                Self::new(".lum-term")
            }
        }
    }

    pub fn preferences_path(&self) -> PathBuf {
        self.root.join(PREFERENCES_FILE)
    }

    pub fn themes_dir(&self) -> PathBuf {
        self.root.join("themes")
    }

    fn theme_path(&self, name: &str) -> PathBuf {
        self.themes_dir().join(format!("{name}.{THEME_EXTENSION}"))
    }

    /// Create the configuration root and themes directory. Idempotent.
    fn ensure_dirs(&self) -> Result<(), StoreError> {
        for path in [self.root.clone(), self.themes_dir()] {
            fs::create_dir_all(&path)
                .map_err(|source| StoreError::CreateDir { path, source })?;
        }
        Ok(())
    }

    /// Load preferences and every theme file from disk.
    ///
    /// A missing preferences file yields defaults. If no theme file parses to
    /// a named theme, the built-in set is seeded and persisted immediately.
    /// A `current_theme` that references no loaded theme is reconciled to
    /// `"Default"`.
    pub fn load(&self) -> Result<Preferences, StoreError> {
        self.ensure_dirs()?;

        let mut prefs = Preferences::default();

        let prefs_path = self.preferences_path();
        match fs::read_to_string(&prefs_path) {
            Ok(contents) => {
                log::info!("Loading preferences from {:?}", prefs_path);
                apply_general_section(&mut prefs, &contents);
            }
            Err(e) => {
                log::info!("No preferences file at {:?} ({e}), using defaults", prefs_path);
            }
        }

        for path in self.theme_file_paths() {
            let contents = match fs::read_to_string(&path) {
                Ok(contents) => contents,
                Err(e) => {
                    log::warn!("Skipping unreadable theme file {:?}: {e}", path);
                    continue;
                }
            };
            match parse_theme(&contents) {
                Some(mut theme) => {
                    theme.normalize();
                    prefs.themes.insert(theme.name.clone(), theme);
                }
                None => log::warn!("Discarding unnamed theme file {:?}", path),
            }
        }

        if prefs.themes.is_empty() {
            log::info!("No themes on disk, seeding built-in set");
            for theme in ColorTheme::builtins() {
                prefs.themes.insert(theme.name.clone(), theme);
            }
            self.save(&mut prefs)?;
        }

        // the effective transparency is always the global one
        let transparency = prefs.transparency;
        for theme in prefs.themes.values_mut() {
            theme.transparency = transparency;
        }

        if !prefs.themes.contains_key(&prefs.current_theme) {
            log::warn!(
                "Current theme {:?} not present, using {:?}",
                prefs.current_theme,
                DEFAULT_THEME_NAME
            );
            prefs.current_theme = DEFAULT_THEME_NAME.to_string();
        }

        Ok(prefs)
    }

    /// Write the preferences file and one file per theme.
    ///
    /// Every theme is normalized in place immediately before serialization so
    /// the on-disk data never contains unset colors. A file that cannot be
    /// written is logged and skipped; sibling writes still proceed.
    pub fn save(&self, prefs: &mut Preferences) -> Result<(), StoreError> {
        self.ensure_dirs()?;

        let prefs_path = self.preferences_path();
        if let Err(e) = fs::write(&prefs_path, serialize_preferences(prefs)) {
            log::warn!("Failed to write preferences file {:?}: {e}", prefs_path);
        }

        for theme in prefs.themes.values_mut() {
            theme.normalize();
            let path = self.theme_path(&theme.name);
            if let Err(e) = fs::write(&path, serialize_theme(theme)) {
                log::warn!("Failed to write theme file {:?}: {e}", path);
            }
        }

        Ok(())
    }

    /// Paths of all `.theme` files, sorted for reproducible load order.
    fn theme_file_paths(&self) -> Vec<PathBuf> {
        let mut paths = Vec::new();
        let dir = self.themes_dir();
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("Cannot read themes directory {:?}: {e}", dir);
                return paths;
            }
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) == Some(THEME_EXTENSION) {
                paths.push(path);
            }
        }
        paths.sort();
        paths
    }
}

fn apply_general_section(prefs: &mut Preferences, contents: &str) {
    for section in ini::parse(contents) {
        if section.name != "General" {
            continue;
        }
        for (key, value) in &section.entries {
            match key.as_str() {
                "font_family" => prefs.font_family = value.clone(),
                "font_size" => {
                    if let Ok(size) = value.parse::<f32>() {
                        prefs.font_size = size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
                    }
                }
                "transparency" => {
                    if let Ok(t) = value.parse::<f32>() {
                        prefs.transparency = t.clamp(0.0, 1.0);
                    }
                }
                "current_theme" => prefs.current_theme = value.clone(),
                _ => {}
            }
        }
    }
}

fn parse_theme(contents: &str) -> Option<ColorTheme> {
    let mut theme = ColorTheme {
        name: String::new(),
        foreground: None,
        background: None,
        palette: [None; 16],
        transparency: 0.0,
    };

    for section in ini::parse(contents) {
        match section.name.as_str() {
            "Theme" => {
                for (key, value) in &section.entries {
                    match key.as_str() {
                        "name" => theme.name = value.clone(),
                        "foreground" => theme.foreground = decode_color(value),
                        "background" => theme.background = decode_color(value),
                        _ => {}
                    }
                }
            }
            "Palette" => {
                for (key, value) in &section.entries {
                    if let Some(index) = palette_index(key) {
                        theme.palette[index] = decode_color(value);
                    }
                }
            }
            _ => {}
        }
    }

    if theme.name.is_empty() { None } else { Some(theme) }
}

fn palette_index(key: &str) -> Option<usize> {
    key.strip_prefix("color")
        .and_then(|i| i.parse::<usize>().ok())
        .filter(|i| *i < 16)
}

/// The all-zero quadruple decodes to "unset"; malformed values are skipped,
/// which leaves the field unset as well.
fn decode_color(value: &str) -> Option<Color> {
    Color::parse(value).filter(|c| !c.is_unset())
}

fn encode_color(color: Option<Color>) -> String {
    color.unwrap_or(Color::new(0.0, 0.0, 0.0, 0.0)).encode()
}

fn serialize_preferences(prefs: &Preferences) -> String {
    let mut out = String::new();
    out.push_str("[General]\n");
    out.push_str(&format!("font_family={}\n", prefs.font_family));
    out.push_str(&format!("font_size={:.6}\n", prefs.font_size));
    out.push_str(&format!("transparency={:.6}\n", prefs.transparency));
    out.push_str(&format!("current_theme={}\n", prefs.current_theme));
    out
}

fn serialize_theme(theme: &ColorTheme) -> String {
    let mut out = String::new();
    out.push_str("[Theme]\n");
    out.push_str(&format!("name={}\n", theme.name));
    out.push_str(&format!("foreground={}\n", encode_color(theme.foreground)));
    out.push_str(&format!("background={}\n", encode_color(theme.background)));
    out.push('\n');
    out.push_str("[Palette]\n");
    for (index, color) in theme.palette.iter().enumerate() {
        out.push_str(&format!("color{index}={}\n", encode_color(*color)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::DARK_FOREGROUND;

    fn store() -> (tempfile::TempDir, ThemeStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = ThemeStore::new(dir.path());
        (dir, store)
    }

    #[test]
    fn load_from_empty_dir_seeds_builtins() {
        let (_dir, store) = store();
        let prefs = store.load().unwrap();
        let names: Vec<&str> = prefs.theme_names().collect();
        assert_eq!(names, ["Default", "Light", "Matrix", "Solarized Dark"]);
        assert_eq!(prefs.current_theme, "Default");
        for name in names {
            assert!(store.theme_path(name).exists());
        }
    }

    #[test]
    fn round_trip_preserves_theme() {
        let (_dir, store) = store();
        let mut prefs = store.load().unwrap();
        let original = prefs.themes["Solarized Dark"].clone();

        store.save(&mut prefs).unwrap();
        let reloaded = store.load().unwrap();
        assert_eq!(reloaded.themes["Solarized Dark"], original);
    }

    #[test]
    fn round_trip_preserves_general_settings() {
        let (_dir, store) = store();
        let mut prefs = store.load().unwrap();
        prefs.set_font("Fira Code", 14.0);
        prefs.set_transparency(0.25);
        prefs.current_theme = "Matrix".to_string();
        store.save(&mut prefs).unwrap();

        let reloaded = store.load().unwrap();
        assert_eq!(reloaded.font_family, "Fira Code");
        assert!((reloaded.font_size - 14.0).abs() < 1e-6);
        assert!((reloaded.transparency - 0.25).abs() < 1e-6);
        assert_eq!(reloaded.current_theme, "Matrix");
    }

    #[test]
    fn save_normalizes_unset_fields_before_write() {
        let (_dir, store) = store();
        let mut prefs = store.load().unwrap();
        if let Some(theme) = prefs.themes.get_mut("Default") {
            theme.foreground = None;
        }
        store.save(&mut prefs).unwrap();

        // in-memory repaired
        assert_eq!(prefs.themes["Default"].foreground, Some(DARK_FOREGROUND));
        // on-disk has no all-zero quadruple for the foreground
        let contents = fs::read_to_string(store.theme_path("Default")).unwrap();
        assert!(contents.contains(&format!("foreground={}", DARK_FOREGROUND.encode())));
    }

    #[test]
    fn unnamed_theme_file_is_discarded() {
        let (_dir, store) = store();
        store.load().unwrap(); // seeds builtins and directories
        fs::write(
            store.themes_dir().join("broken.theme"),
            "[Theme]\nforeground=0.1,0.2,0.3,1.0\n",
        )
        .unwrap();
        let prefs = store.load().unwrap();
        assert_eq!(prefs.themes.len(), 4);
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let (_dir, store) = store();
        store.load().unwrap();
        fs::write(
            store.themes_dir().join("partial.theme"),
            "[Theme]\nname=Partial\ngarbage line\nforeground=0.2,0.2,0.2,1.0\n\n[Bogus]\nx=y\n",
        )
        .unwrap();
        let prefs = store.load().unwrap();
        let partial = &prefs.themes["Partial"];
        assert_eq!(partial.foreground, Some(Color::new(0.2, 0.2, 0.2, 1.0)));
        // unspecified background was normalized on load
        assert!(partial.background.is_some());
    }

    #[test]
    fn out_of_range_channels_survive_load() {
        let (_dir, store) = store();
        store.load().unwrap();
        fs::write(
            store.themes_dir().join("loud.theme"),
            "[Theme]\nname=Loud\nforeground=1.500000,0.000000,0.000000,1.000000\n",
        )
        .unwrap();
        let prefs = store.load().unwrap();
        assert_eq!(
            prefs.themes["Loud"].foreground,
            Some(Color::new(1.5, 0.0, 0.0, 1.0))
        );
    }

    #[test]
    fn missing_current_theme_reconciles_to_default() {
        let (_dir, store) = store();
        let mut prefs = store.load().unwrap();
        prefs.current_theme = "Nope".to_string();
        store.save(&mut prefs).unwrap();

        let reloaded = store.load().unwrap();
        assert_eq!(reloaded.current_theme, "Default");
    }

    #[test]
    fn loaded_themes_mirror_global_transparency() {
        let (_dir, store) = store();
        let mut prefs = store.load().unwrap();
        prefs.set_transparency(0.4);
        store.save(&mut prefs).unwrap();

        let reloaded = store.load().unwrap();
        for theme in reloaded.themes.values() {
            assert!((theme.transparency - 0.4).abs() < 1e-6);
        }
    }
}
