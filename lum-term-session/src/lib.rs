//! Session lifecycle for the lum-term terminal emulator.
//!
//! This crate owns the set of live tab sessions, tracks each session's shell
//! process, and gates destructive close operations on a best-effort
//! foreground-job check. Rendering and PTY handling live behind the
//! [`TerminalSurface`] collaborator trait.

pub mod process;
pub mod registry;
pub mod shell;
pub mod surface;

pub use process::{ProcessInspector, SystemProcessInspector};
pub use registry::{CloseOutcome, Session, SessionId, SessionRegistry};
pub use surface::TerminalSurface;
