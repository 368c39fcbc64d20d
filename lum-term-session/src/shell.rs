//! Shell resolution for new sessions.

/// Used when `$SHELL` is not set.
pub const FALLBACK_SHELL: &str = "/bin/bash";

/// The user's shell from the environment, or the fixed fallback.
pub fn resolve_shell() -> String {
    std::env::var("SHELL").unwrap_or_else(|_| FALLBACK_SHELL.to_string())
}

/// Environment passed to spawned shells: an identity marker for shell
/// integration scripts to detect.
pub fn shell_env() -> Vec<(String, String)> {
    vec![("TERM_PROGRAM".to_string(), "lum-term".to_string())]
}
