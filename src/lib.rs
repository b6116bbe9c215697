//! # dnsmasq-bootstrap
//!
//! Boot-time launcher and supervisor for dnsmasq on a Kubernetes cluster
//! node.
//!
//! On Google Cloud nodes, pods need cluster-internal names (under
//! `cluster.local`) answered by the kube-dns service and everything else
//! answered upstream via the metadata server. This crate performs the
//! one-shot setup: resolve both addresses through the node's current
//! resolver, report whether `/etc/resolv.conf` already references the
//! cluster DNS service, then launch dnsmasq in the foreground routing the
//! cluster domain to the resolved address — and stay blocked on it until
//! it exits.
//!
//! ## Sequence
//!
//! ```rust,ignore
//! use dnsmasq_bootstrap::{bootstrap, BootstrapConfig};
//!
//! let config = BootstrapConfig::from_env();
//! bootstrap::run(&config)?;
//! ```
//!
//! Either resolution failing is fatal: without the cluster DNS address
//! there is no forwarding target, and without the metadata address there is
//! no upstream. The `/etc/resolv.conf` check is informational only — a
//! missing or mismatching file is logged and the launch proceeds.
//!
//! ## Overriding the dnsmasq arguments
//!
//! Setting `DNSMASQ_CMD_ARGS` to a non-empty value replaces the entire
//! default argument list; the value is passed to dnsmasq verbatim as a
//! single argument.
//!
//! ## Supervision
//!
//! dnsmasq runs in the foreground with both output streams captured. Its
//! exit — clean or not — ends this program: a non-zero status is logged
//! together with the captured streams and becomes a non-zero exit code.
//! There is no restart; the surrounding container runtime owns that policy.

#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod bootstrap;
pub mod config;
pub mod daemon;
pub mod error;
pub mod lookup;
pub mod resolv_conf;

pub use config::BootstrapConfig;
pub use daemon::DaemonCommand;
pub use error::{BootstrapError, Result};
