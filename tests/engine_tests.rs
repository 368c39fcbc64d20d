//! Integration tests for the engine facade.

mod common;

use common::{MockInspector, MockSurface, ProcessState, engine_in_temp_dir};
use lum_term::{Engine, ThemeStore};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn settings_survive_engine_restart() {
    let dir = tempfile::tempdir().unwrap();
    {
        let state = Rc::new(RefCell::new(ProcessState::default()));
        let mut engine = Engine::new(
            ThemeStore::new(dir.path()),
            Box::new(MockInspector(state)),
        )
        .unwrap();
        engine.set_font("Iosevka", 12.5);
        engine.set_global_transparency(0.15);
        engine.set_current_theme("Matrix");
        engine.save_preferences().unwrap();
    }

    let state = Rc::new(RefCell::new(ProcessState::default()));
    let engine = Engine::new(
        ThemeStore::new(dir.path()),
        Box::new(MockInspector(state)),
    )
    .unwrap();
    let prefs = engine.preferences();
    assert_eq!(prefs.font_family, "Iosevka");
    assert!((prefs.font_size - 12.5).abs() < 1e-6);
    assert!((prefs.transparency - 0.15).abs() < 1e-6);
    assert_eq!(prefs.current_theme, "Matrix");
}

#[test]
fn font_size_is_clamped_to_supported_range() {
    let (_dir, _state, mut engine) = engine_in_temp_dir();
    engine.set_font("Monospace", 72.0);
    assert_eq!(engine.preferences().font_size, 24.0);
    engine.set_font("Monospace", 1.0);
    assert_eq!(engine.preferences().font_size, 8.0);
}

#[test]
fn transparency_is_clamped() {
    let (_dir, _state, mut engine) = engine_in_temp_dir();
    engine.set_global_transparency(2.0);
    assert_eq!(engine.preferences().transparency, 1.0);
    engine.set_global_transparency(-1.0);
    assert_eq!(engine.preferences().transparency, 0.0);
}

#[test]
fn apply_current_theme_styles_every_session() {
    let (_dir, _state, mut engine) = engine_in_temp_dir();
    let mut surface = MockSurface::default();

    let a = engine.create_session("a", &mut surface);
    let b = engine.create_session("b", &mut surface);

    engine.set_global_transparency(0.25);
    engine.apply_current_theme(&mut surface);

    let styled: Vec<_> = surface.applied.iter().map(|(id, _)| *id).collect();
    assert_eq!(styled, vec![a, b]);
    for (_, colors) in &surface.applied {
        assert!((colors.background.a - 0.75).abs() < 1e-6);
    }
}

#[test]
fn selecting_unknown_theme_heals_on_apply() {
    let (_dir, _state, mut engine) = engine_in_temp_dir();
    let mut surface = MockSurface::default();
    engine.create_session("tab", &mut surface);

    engine.set_current_theme("Missing Theme");
    engine.apply_current_theme(&mut surface);

    assert_eq!(engine.preferences().current_theme, "Default");
    assert_eq!(surface.applied.len(), 1);
}

#[test]
fn reload_discards_unsaved_changes() {
    let (_dir, _state, mut engine) = engine_in_temp_dir();
    engine.set_font("Iosevka", 18.0);
    engine.load_preferences().unwrap();
    assert_eq!(engine.preferences().font_family, "Monospace");
}
