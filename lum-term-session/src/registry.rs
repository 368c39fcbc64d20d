//! Session registry: owns the set of live tab sessions.
//!
//! The registry is the only place sessions are created or destroyed, which
//! keeps the live set in 1:1 correspondence with the collaborator's tabs.
//! Shell spawn completes asynchronously via [`SessionRegistry::on_spawn_complete`];
//! a completion that arrives after the session was already closed has its pid
//! terminated immediately instead of stored, so a removed session is never
//! resurrected and its process never leaks.

use crate::process::ProcessInspector;
use crate::shell;
use crate::surface::TerminalSurface;

/// Unique identifier for a session, never reused within a registry.
pub type SessionId = u64;

/// Title used until the shell reports one.
pub const DEFAULT_SESSION_TITLE: &str = "Terminal";

/// Result of a close request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloseOutcome {
    /// The session was removed. `last_session` signals application-level
    /// shutdown to the caller.
    Closed { last_session: bool },
    /// A foreground process was detected; the caller must obtain user
    /// confirmation and retry with `forced = true`.
    Blocked,
}

/// One tab session: a spawned shell process and its display metadata.
#[derive(Debug)]
pub struct Session {
    id: SessionId,
    /// `None` until spawn completion, or permanently after spawn failure.
    child_pid: Option<u32>,
    title: String,
}

impl Session {
    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn child_pid(&self) -> Option<u32> {
        self.child_pid
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

pub struct SessionRegistry {
    sessions: Vec<Session>,
    next_id: SessionId,
    inspector: Box<dyn ProcessInspector>,
}

impl SessionRegistry {
    pub fn new(inspector: Box<dyn ProcessInspector>) -> Self {
        Self {
            sessions: Vec::new(),
            next_id: 1,
            inspector,
        }
    }

    /// Allocate a session and request a shell spawn from the surface.
    ///
    /// Returns immediately; the session stays pid-less until
    /// [`Self::on_spawn_complete`] delivers the result.
    pub fn create_session(
        &mut self,
        title: &str,
        surface: &mut dyn TerminalSurface,
    ) -> SessionId {
        let id = self.next_id;
        self.next_id += 1;

        let title = if title.is_empty() {
            DEFAULT_SESSION_TITLE.to_string()
        } else {
            title.to_string()
        };
        self.sessions.push(Session {
            id,
            child_pid: None,
            title,
        });

        let shell_path = shell::resolve_shell();
        log::info!(
            "Created session {id} (total: {}), spawning {shell_path}",
            self.sessions.len()
        );
        surface.spawn_shell(id, &shell_path, &shell::shell_env());

        id
    }

    /// Deliver the asynchronous spawn result for `id`.
    ///
    /// Spawn failure leaves the session registered and pid-less; deciding
    /// whether to retry or discard it is the caller's call. A success for a
    /// session that was closed in the meantime is reaped on the spot.
    pub fn on_spawn_complete(&mut self, id: SessionId, result: Result<u32, String>) {
        match self.sessions.iter_mut().find(|s| s.id == id) {
            Some(session) => match result {
                Ok(pid) => {
                    log::info!("Session {id} shell spawned with pid {pid}");
                    session.child_pid = Some(pid);
                }
                Err(e) => {
                    log::error!("Shell spawn failed for session {id}: {e}");
                }
            },
            None => {
                if let Ok(pid) = result {
                    log::info!(
                        "Session {id} closed before spawn completed, terminating pid {pid}"
                    );
                    self.inspector.terminate(pid);
                }
            }
        }
    }

    /// Close a session.
    ///
    /// Unless `forced`, a detected foreground process blocks the close; the
    /// registry only reports the block, prompting is the UI's concern. On
    /// removal a live child receives a termination signal. Returns `None`
    /// for an unknown id.
    pub fn close_session(&mut self, id: SessionId, forced: bool) -> Option<CloseOutcome> {
        let index = self.sessions.iter().position(|s| s.id == id)?;

        if !forced
            && let Some(pid) = self.sessions[index].child_pid
            && self.inspector.has_child_processes(pid)
        {
            log::debug!("Close of session {id} blocked: pid {pid} has a foreground process");
            return Some(CloseOutcome::Blocked);
        }

        let session = self.sessions.remove(index);
        if let Some(pid) = session.child_pid {
            self.inspector.terminate(pid);
        }
        log::info!("Closed session {id} (remaining: {})", self.sessions.len());

        Some(CloseOutcome::Closed {
            last_session: self.sessions.is_empty(),
        })
    }

    /// The session's shell process exited; remove the session.
    ///
    /// Same removal path as a confirmed close, minus the foreground check and
    /// the termination signal. Returns `None` when no session owns `pid`.
    pub fn on_child_exited(&mut self, pid: u32, exit_status: i32) -> Option<CloseOutcome> {
        let index = self
            .sessions
            .iter()
            .position(|s| s.child_pid == Some(pid))?;
        let session = self.sessions.remove(index);
        log::info!(
            "Session {} shell (pid {pid}) exited with status {exit_status}",
            session.id
        );

        Some(CloseOutcome::Closed {
            last_session: self.sessions.is_empty(),
        })
    }

    /// Title-change notification from the surface.
    pub fn on_title_changed(&mut self, id: SessionId, title: &str) {
        if let Some(session) = self.sessions.iter_mut().find(|s| s.id == id) {
            session.title = title.to_string();
        }
    }

    /// Whether the session's shell currently runs a foreground job.
    ///
    /// A pid-less session has none by definition.
    pub fn has_foreground_process(&mut self, id: SessionId) -> bool {
        let Some(session) = self.sessions.iter().find(|s| s.id == id) else {
            return false;
        };
        match session.child_pid {
            Some(pid) => self.inspector.has_child_processes(pid),
            None => false,
        }
    }

    pub fn session(&self, id: SessionId) -> Option<&Session> {
        self.sessions.iter().find(|s| s.id == id)
    }

    pub fn session_ids(&self) -> Vec<SessionId> {
        self.sessions.iter().map(|s| s.id).collect()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
