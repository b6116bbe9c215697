//! Bootstrap configuration.

use std::path::PathBuf;

/// Well-known name of the platform metadata host.
const DEFAULT_METADATA_HOST: &str = "metadata.google.internal";

/// Cluster DNS service name and namespace.
const CLUSTER_DNS_SERVICE: &str = "kube-dns";
const CLUSTER_DNS_NAMESPACE: &str = "kube-system";

/// Cluster-internal domain suffix routed to the cluster DNS service.
const DEFAULT_CLUSTER_DOMAIN: &str = "cluster.local";

/// System resolver configuration path.
const DEFAULT_RESOLV_CONF: &str = "/etc/resolv.conf";

/// dnsmasq binary path.
const DEFAULT_DNSMASQ_PATH: &str = "/usr/sbin/dnsmasq";

/// Environment variable that, when non-empty, replaces the entire default
/// dnsmasq argument list with its value as a single verbatim argument.
pub const ENV_CMD_ARGS: &str = "DNSMASQ_CMD_ARGS";

/// Configuration for one bootstrap run.
///
/// # Example
///
/// ```
/// use dnsmasq_bootstrap::BootstrapConfig;
///
/// let config = BootstrapConfig::new();
/// assert_eq!(config.cluster_dns_name, "kube-dns.kube-system.svc.cluster.local");
/// ```
#[derive(Debug, Clone)]
pub struct BootstrapConfig {
    /// Platform metadata host; its first resolved address is the upstream
    /// resolver for non-cluster queries.
    pub metadata_host: String,

    /// Fully qualified name of the cluster DNS service,
    /// `<service>.<namespace>.svc.<cluster-domain>`.
    pub cluster_dns_name: String,

    /// Cluster-internal domain suffix (e.g., `"cluster.local"`).
    pub cluster_domain: String,

    /// System resolver configuration file to validate.
    pub resolv_conf: PathBuf,

    /// dnsmasq binary to launch.
    pub dnsmasq_path: PathBuf,

    /// If set and non-empty, replaces the default dnsmasq argument list.
    pub arg_override: Option<String>,
}

impl BootstrapConfig {
    /// Creates a config with the well-known production defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            metadata_host: DEFAULT_METADATA_HOST.to_string(),
            cluster_dns_name: format!(
                "{CLUSTER_DNS_SERVICE}.{CLUSTER_DNS_NAMESPACE}.svc.{DEFAULT_CLUSTER_DOMAIN}"
            ),
            cluster_domain: DEFAULT_CLUSTER_DOMAIN.to_string(),
            resolv_conf: PathBuf::from(DEFAULT_RESOLV_CONF),
            dnsmasq_path: PathBuf::from(DEFAULT_DNSMASQ_PATH),
            arg_override: None,
        }
    }

    /// Creates a config from the process environment.
    ///
    /// Reads [`ENV_CMD_ARGS`] exactly once; an unset or empty value means no
    /// override. The captured value is logged so operators can see which
    /// argument list the launch will use.
    #[must_use]
    pub fn from_env() -> Self {
        let args = std::env::var(ENV_CMD_ARGS).unwrap_or_default();
        tracing::info!(env = ENV_CMD_ARGS, %args, "dnsmasq argument override");

        let mut config = Self::new();
        if !args.is_empty() {
            config.arg_override = Some(args);
        }
        config
    }

    /// Overrides the metadata host.
    #[must_use]
    pub fn with_metadata_host(mut self, host: impl Into<String>) -> Self {
        self.metadata_host = host.into();
        self
    }

    /// Overrides the cluster DNS service name.
    #[must_use]
    pub fn with_cluster_dns_name(mut self, name: impl Into<String>) -> Self {
        self.cluster_dns_name = name.into();
        self
    }

    /// Overrides the resolver configuration path.
    #[must_use]
    pub fn with_resolv_conf(mut self, path: impl Into<PathBuf>) -> Self {
        self.resolv_conf = path.into();
        self
    }

    /// Overrides the dnsmasq binary path.
    #[must_use]
    pub fn with_dnsmasq_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.dnsmasq_path = path.into();
        self
    }

    /// Overrides the dnsmasq argument list with a single verbatim argument.
    #[must_use]
    pub fn with_arg_override(mut self, args: impl Into<String>) -> Self {
        self.arg_override = Some(args.into());
        self
    }
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self::new()
    }
}
