//! The bootstrap sequence.
//!
//! One linear pass: resolve the cluster DNS service and the metadata host,
//! report whether `/etc/resolv.conf` already references the cluster DNS
//! address, then launch dnsmasq and block until it exits.

use crate::config::BootstrapConfig;
use crate::daemon::DaemonCommand;
use crate::error::{BootstrapError, Result};
use crate::{lookup, resolv_conf};

/// Runs the full sequence against `config`.
///
/// Resolution happens before anything is launched; both addresses are
/// required. The resolver-configuration check is informational only and
/// never blocks the launch.
///
/// # Errors
///
/// Returns [`BootstrapError::Unresolvable`] if either required name yields
/// no address, or the launch errors from [`DaemonCommand::run`].
pub fn run(config: &BootstrapConfig) -> Result<()> {
    let cluster_dns = lookup::first_address(&config.cluster_dns_name).ok_or_else(|| {
        BootstrapError::Unresolvable {
            name: config.cluster_dns_name.clone(),
            reason: "can't continue without the cluster DNS service address",
        }
    })?;
    tracing::info!(
        name = %config.cluster_dns_name,
        address = %cluster_dns,
        "cluster DNS service resolved"
    );

    let metadata_resolver =
        lookup::first_address(&config.metadata_host).ok_or_else(|| BootstrapError::Unresolvable {
            name: config.metadata_host.clone(),
            reason: "can't continue without an upstream resolver for forwarding",
        })?;
    tracing::info!(
        name = %config.metadata_host,
        address = %metadata_resolver,
        "metadata host resolved as upstream resolver"
    );

    let present = resolv_conf::nameserver_present(&config.resolv_conf, cluster_dns);
    tracing::info!(
        path = %config.resolv_conf.display(),
        nameserver = %cluster_dns,
        present,
        "resolver configuration checked"
    );

    let command = DaemonCommand::for_config(config, cluster_dns);
    tracing::info!(
        program = %command.program().display(),
        argv = ?command.args(),
        "starting dnsmasq"
    );

    let stdout = command.run()?;
    tracing::info!(%stdout, "dnsmasq exited cleanly");
    Ok(())
}
