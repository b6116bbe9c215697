//! Error types.

use std::process::ExitStatus;

use thiserror::Error;

/// Result alias for bootstrap operations.
pub type Result<T> = std::result::Result<T, BootstrapError>;

/// Fatal failures of the bootstrap sequence.
///
/// Anything that prevents dnsmasq from being correctly configured and
/// started surfaces here; `main` is the single place these become a
/// non-zero exit code. Diagnostic-only conditions (an unreadable or
/// mismatching `/etc/resolv.conf`) are logged, not represented as errors.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// A required name returned no address from the system resolver.
    #[error("failed to resolve {name}: {reason}")]
    Unresolvable {
        /// The name that was queried.
        name: String,
        /// Why the resolution is required.
        reason: &'static str,
    },

    /// dnsmasq could not be launched at all.
    #[error("failed to launch {program}: {source}")]
    Spawn {
        /// The binary path that was executed.
        program: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// dnsmasq exited with a non-zero status.
    #[error("dnsmasq error return: {status}, stderr: {stderr}, stdout: {stdout}")]
    DaemonFailed {
        /// The child's exit status.
        status: ExitStatus,
        /// Captured standard output of the failed run.
        stdout: String,
        /// Captured standard error of the failed run.
        stderr: String,
    },
}

impl BootstrapError {
    /// Returns `true` if the failure came from the supervised daemon rather
    /// than from this program's own setup steps.
    #[must_use]
    pub const fn is_daemon_failure(&self) -> bool {
        matches!(self, Self::Spawn { .. } | Self::DaemonFailed { .. })
    }
}
