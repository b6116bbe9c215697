//! dnsmasq launch and supervision.
//!
//! The daemon is meant to run in the foreground for the lifetime of the
//! node container, so supervision here is a single blocking
//! run-to-completion: no restart, no timeout, no second attempt.

use std::net::IpAddr;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::BootstrapConfig;
use crate::error::{BootstrapError, Result};

/// dnsmasq flag keeping the process attached to this supervisor.
const ARG_KEEP_IN_FOREGROUND: &str = "--keep-in-foreground";

/// A fully constructed dnsmasq invocation.
///
/// Argument construction is separated from execution so the argv can be
/// inspected (and unit tested) without launching anything.
#[derive(Debug)]
pub struct DaemonCommand {
    program: PathBuf,
    args: Vec<String>,
}

impl DaemonCommand {
    /// Creates a command with an explicit program and argument list.
    #[must_use]
    pub fn new(program: impl Into<PathBuf>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Builds the invocation for a bootstrap run.
    ///
    /// The default argument list keeps dnsmasq in the foreground and routes
    /// queries for the cluster-internal domain to the resolved cluster DNS
    /// address; everything else follows dnsmasq's own upstream behavior.
    ///
    /// A non-empty [`BootstrapConfig::arg_override`] replaces the whole
    /// default list and is passed verbatim as a single argument.
    #[must_use]
    pub fn for_config(config: &BootstrapConfig, cluster_dns: IpAddr) -> Self {
        let args = match config.arg_override.as_deref() {
            Some(raw) if !raw.is_empty() => vec![raw.to_string()],
            _ => vec![
                ARG_KEEP_IN_FOREGROUND.to_string(),
                format!("--server=/{}/{}", config.cluster_domain, cluster_dns),
            ],
        };
        Self::new(config.dnsmasq_path.clone(), args)
    }

    /// Returns the program path.
    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Returns the constructed argument list.
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Launches the daemon and blocks until it exits.
    ///
    /// Standard output and standard error are captured into in-memory
    /// buffers rather than streamed.
    ///
    /// # Errors
    ///
    /// Returns [`BootstrapError::Spawn`] if the program cannot be launched,
    /// or [`BootstrapError::DaemonFailed`] — carrying both captured streams —
    /// if it exits with a non-zero status.
    pub fn run(&self) -> Result<String> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .output()
            .map_err(|source| BootstrapError::Spawn {
                program: self.program.display().to_string(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        if !output.status.success() {
            return Err(BootstrapError::DaemonFailed {
                status: output.status,
                stdout,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }
        Ok(stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    fn config() -> BootstrapConfig {
        BootstrapConfig::new()
    }

    const KUBE_DNS: IpAddr = IpAddr::V4(Ipv4Addr::new(10, 0, 0, 10));

    #[test]
    fn default_args_embed_cluster_domain_and_address() {
        let cmd = DaemonCommand::for_config(&config(), KUBE_DNS);
        assert_eq!(cmd.program(), Path::new("/usr/sbin/dnsmasq"));
        assert_eq!(
            cmd.args(),
            ["--keep-in-foreground", "--server=/cluster.local/10.0.0.10"]
        );
    }

    #[test]
    fn override_replaces_entire_argument_list() {
        let cfg = config().with_arg_override("--keep-in-foreground --log-queries");
        let cmd = DaemonCommand::for_config(&cfg, KUBE_DNS);
        // One verbatim argument, defaults discarded.
        assert_eq!(cmd.args(), ["--keep-in-foreground --log-queries"]);
    }

    #[test]
    fn empty_override_keeps_defaults() {
        let mut cfg = config();
        cfg.arg_override = Some(String::new());
        let cmd = DaemonCommand::for_config(&cfg, KUBE_DNS);
        assert_eq!(cmd.args().len(), 2);
    }

    #[test]
    fn clean_exit_returns_captured_stdout() {
        let cmd = DaemonCommand::new("/bin/echo", vec!["started".to_string()]);
        let stdout = cmd.run().unwrap();
        assert_eq!(stdout.trim(), "started");
    }

    #[test]
    fn nonzero_exit_carries_both_streams() {
        let cmd = DaemonCommand::new(
            "/bin/sh",
            vec![
                "-c".to_string(),
                "echo out; echo err >&2; exit 3".to_string(),
            ],
        );
        match cmd.run() {
            Err(BootstrapError::DaemonFailed {
                status,
                stdout,
                stderr,
            }) => {
                assert_eq!(status.code(), Some(3));
                assert_eq!(stdout.trim(), "out");
                assert_eq!(stderr.trim(), "err");
            }
            other => panic!("expected DaemonFailed, got {other:?}"),
        }
    }

    #[test]
    fn missing_program_is_spawn_error() {
        let cmd = DaemonCommand::new("/nonexistent/dnsmasq", Vec::new());
        match cmd.run() {
            Err(e @ BootstrapError::Spawn { .. }) => assert!(e.is_daemon_failure()),
            other => panic!("expected Spawn, got {other:?}"),
        }
    }

    #[test]
    fn exit_zero_with_args_succeeds() {
        let cfg = config().with_dnsmasq_path("/bin/true");
        let cmd = DaemonCommand::for_config(&cfg, KUBE_DNS);
        assert!(cmd.run().is_ok());
    }
}
