//! Session and configuration engine for the Lum terminal emulator.
//!
//! Rendering, PTY handling, and escape-sequence interpretation belong to an
//! external terminal-widget library, reached through the
//! [`TerminalSurface`] trait. This crate composes what sits underneath the
//! UI wiring:
//!
//! - persistent theme and preference storage ([`lum_term_config`])
//! - per-tab session lifecycle and foreground-job gating
//!   ([`lum_term_session`])
//! - the [`engine::Engine`] facade the UI glue talks to

pub mod engine;

pub use engine::Engine;

// Re-export the types that cross the facade boundary
pub use lum_term_config::{Color, ColorTheme, Preferences, ResolvedColors, StoreError, ThemeStore};
pub use lum_term_session::{
    CloseOutcome, ProcessInspector, Session, SessionId, SessionRegistry, SystemProcessInspector,
    TerminalSurface,
};
