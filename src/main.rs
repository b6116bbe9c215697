//! Binary entry point.

use dnsmasq_bootstrap::{BootstrapConfig, bootstrap};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = BootstrapConfig::from_env();

    // The only place a failure becomes an exit code.
    if let Err(e) = bootstrap::run(&config) {
        tracing::error!(error = %e, "bootstrap failed");
        std::process::exit(1);
    }
}
