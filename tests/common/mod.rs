//! Shared integration test helpers for lum-term.
//!
//! Include this module at the top of each test file that needs it:
//!
//! ```ignore
//! mod common;
//! use common::{MockSurface, engine_in_temp_dir};
//! ```
//!
//! Note: Rust integration tests use `mod common;` (not `use`) to bring in
//! helpers from `tests/common/mod.rs`. The `#[allow(dead_code)]` attribute
//! suppresses warnings when only a subset of helpers are used per file.

#![allow(dead_code)]

use lum_term::{Engine, ProcessInspector, ResolvedColors, SessionId, TerminalSurface, ThemeStore};
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;
use tempfile::TempDir;

/// Observable state shared between a test and its [`MockInspector`].
#[derive(Default)]
pub struct ProcessState {
    /// Pids that report at least one live child process.
    pub with_children: HashSet<u32>,
    /// Pids that received a termination signal, in order.
    pub terminated: Vec<u32>,
}

/// Process inspector over a shared in-memory process table.
pub struct MockInspector(pub Rc<RefCell<ProcessState>>);

impl ProcessInspector for MockInspector {
    fn has_child_processes(&mut self, pid: u32) -> bool {
        self.0.borrow().with_children.contains(&pid)
    }

    fn terminate(&mut self, pid: u32) -> bool {
        self.0.borrow_mut().terminated.push(pid);
        true
    }
}

/// Rendering collaborator that records every request it receives.
#[derive(Default)]
pub struct MockSurface {
    pub spawn_requests: Vec<(SessionId, String)>,
    pub applied: Vec<(SessionId, ResolvedColors)>,
}

impl TerminalSurface for MockSurface {
    fn spawn_shell(&mut self, session: SessionId, shell_path: &str, _env: &[(String, String)]) {
        self.spawn_requests.push((session, shell_path.to_string()));
    }

    fn apply_colors(&mut self, session: SessionId, colors: &ResolvedColors) {
        self.applied.push((session, colors.clone()));
    }
}

/// Engine over a temp-dir store and a mock process table.
///
/// The `TempDir` must be kept alive for the duration of the test — drop it
/// only after all store I/O has completed.
pub fn engine_in_temp_dir() -> (TempDir, Rc<RefCell<ProcessState>>, Engine) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let state = Rc::new(RefCell::new(ProcessState::default()));
    let engine = Engine::new(
        ThemeStore::new(dir.path()),
        Box::new(MockInspector(state.clone())),
    )
    .expect("engine load");
    (dir, state, engine)
}
