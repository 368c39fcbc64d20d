//! The engine facade handed to the UI glue.
//!
//! One `Engine` owns the theme store, the loaded preferences, and the session
//! registry; every component receives them by reference from here. The UI
//! layer forwards the surface's notifications (spawn completion, child exit,
//! title changes) into the matching `on_*` entry points.

use anyhow::Result;
use lum_term_config::{Preferences, ResolvedColors, ThemeStore};
use lum_term_session::{
    CloseOutcome, ProcessInspector, SessionId, SessionRegistry, SystemProcessInspector,
    TerminalSurface,
};

pub struct Engine {
    store: ThemeStore,
    preferences: Preferences,
    registry: SessionRegistry,
}

impl Engine {
    /// Build an engine over an explicit store and process inspector, loading
    /// preferences (and seeding built-in themes if needed) immediately.
    pub fn new(store: ThemeStore, inspector: Box<dyn ProcessInspector>) -> Result<Self> {
        let preferences = store.load()?;
        Ok(Self {
            store,
            preferences,
            registry: SessionRegistry::new(inspector),
        })
    }

    /// Engine at the platform configuration location with the system process
    /// inspector.
    pub fn with_default_location() -> Result<Self> {
        Self::new(
            ThemeStore::default_location(),
            Box::new(SystemProcessInspector::new()),
        )
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    /// Re-read preferences and themes from disk, replacing in-memory state.
    pub fn load_preferences(&mut self) -> Result<()> {
        self.preferences = self.store.load()?;
        Ok(())
    }

    /// Persist preferences and all themes. Themes are normalized on the way
    /// out; individual file failures are logged and skipped.
    pub fn save_preferences(&mut self) -> Result<()> {
        self.store.save(&mut self.preferences)?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Sessions
    // ------------------------------------------------------------------

    pub fn create_session(
        &mut self,
        title: &str,
        surface: &mut dyn TerminalSurface,
    ) -> SessionId {
        self.registry.create_session(title, surface)
    }

    pub fn close_session(&mut self, id: SessionId, forced: bool) -> Option<CloseOutcome> {
        self.registry.close_session(id, forced)
    }

    pub fn has_foreground_process(&mut self, id: SessionId) -> bool {
        self.registry.has_foreground_process(id)
    }

    pub fn session_ids(&self) -> Vec<SessionId> {
        self.registry.session_ids()
    }

    pub fn session_title(&self, id: SessionId) -> Option<&str> {
        self.registry.session(id).map(|s| s.title())
    }

    /// Spawn-completion callback from the surface.
    pub fn on_spawn_complete(&mut self, id: SessionId, result: Result<u32, String>) {
        self.registry.on_spawn_complete(id, result);
    }

    /// Child-exit notification from the surface.
    pub fn on_child_exited(&mut self, pid: u32, exit_status: i32) -> Option<CloseOutcome> {
        self.registry.on_child_exited(pid, exit_status)
    }

    /// Title-change notification from the surface.
    pub fn on_title_changed(&mut self, id: SessionId, title: &str) {
        self.registry.on_title_changed(id, title);
    }

    // ------------------------------------------------------------------
    // Themes and appearance
    // ------------------------------------------------------------------

    pub fn resolve_theme(&mut self, name: &str) -> ResolvedColors {
        self.preferences.resolve_theme(name)
    }

    /// Select the active theme. The choice takes effect on the next
    /// [`Self::apply_current_theme`]; an unknown name self-heals to the
    /// default at resolution time.
    pub fn set_current_theme(&mut self, name: &str) {
        self.preferences.current_theme = name.to_string();
    }

    /// Resolve the current theme once and push it to every live session.
    pub fn apply_current_theme(&mut self, surface: &mut dyn TerminalSurface) {
        let name = self.preferences.current_theme.clone();
        let colors = self.preferences.resolve_theme(&name);
        let sessions = self.registry.session_ids();
        log::debug!(
            "Applying theme {:?} to {} session(s)",
            self.preferences.current_theme,
            sessions.len()
        );
        for id in sessions {
            surface.apply_colors(id, &colors);
        }
    }

    pub fn set_global_transparency(&mut self, value: f32) {
        self.preferences.set_transparency(value);
    }

    pub fn set_font(&mut self, family: &str, size: f32) {
        self.preferences.set_font(family, size);
    }
}
