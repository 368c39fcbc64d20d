//! The rendering/PTY collaborator as seen by the engine.

use crate::registry::SessionId;
use lum_term_config::ResolvedColors;

/// Interface consumed from the terminal-widget library.
///
/// `spawn_shell` is asynchronous: the surface answers later through
/// [`crate::SessionRegistry::on_spawn_complete`] with the child pid or an
/// error. Exit and title-change notifications likewise re-enter through the
/// registry's `on_child_exited` / `on_title_changed` entry points.
pub trait TerminalSurface {
    /// Request a shell process for `session`.
    fn spawn_shell(&mut self, session: SessionId, shell_path: &str, env: &[(String, String)]);

    /// Apply a resolved color set to the session's rendering surface.
    fn apply_colors(&mut self, session: SessionId, colors: &ResolvedColors);
}
