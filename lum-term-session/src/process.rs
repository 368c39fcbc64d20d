//! Best-effort process-tree inspection.
//!
//! The foreground-job heuristic: the shell itself has no children, so any
//! child process under the session's shell pid means a program is running
//! inside it. Shell builtins and backgrounded jobs are not detected; any
//! failure to read process state degrades to "no foreground process".

use sysinfo::{Pid, ProcessesToUpdate, Signal, System};

/// Capability interface over the operating system's process table, so tests
/// can substitute a mock.
pub trait ProcessInspector {
    /// Whether `pid` currently has at least one live child process.
    fn has_child_processes(&mut self, pid: u32) -> bool;

    /// Send a termination signal to `pid`. Returns false when the process is
    /// already gone or the signal could not be delivered.
    fn terminate(&mut self, pid: u32) -> bool;
}

/// The one platform implementation, backed by `sysinfo`.
pub struct SystemProcessInspector {
    system: System,
}

impl SystemProcessInspector {
    pub fn new() -> Self {
        Self {
            system: System::new(),
        }
    }
}

impl Default for SystemProcessInspector {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessInspector for SystemProcessInspector {
    fn has_child_processes(&mut self, pid: u32) -> bool {
        let target = Pid::from_u32(pid);
        self.system.refresh_processes(ProcessesToUpdate::All, true);
        self.system
            .processes()
            .values()
            .any(|process| process.parent() == Some(target))
    }

    fn terminate(&mut self, pid: u32) -> bool {
        let target = Pid::from_u32(pid);
        self.system
            .refresh_processes(ProcessesToUpdate::Some(&[target]), true);
        match self.system.process(target) {
            Some(process) => process
                .kill_with(Signal::Term)
                // no SIGTERM on this platform: fall back to the portable kill
                .unwrap_or_else(|| process.kill()),
            None => {
                log::debug!("Process {pid} already gone, nothing to terminate");
                false
            }
        }
    }
}
