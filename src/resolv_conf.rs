//! Resolver configuration validation.
//!
//! Checks whether the system resolver configuration already references a
//! given nameserver. The result is surfaced to operators and nothing else;
//! the bootstrap sequence continues regardless.

use std::net::IpAddr;
use std::path::Path;

/// Returns `true` if any line of the file at `path` contains the textual
/// form of `nameserver_ip` as a contiguous substring.
///
/// This is a plain substring scan, not a parse of `nameserver` directives:
/// a comment line or an unrelated token containing the same digits also
/// matches. Downstream tooling relies on this looseness, so tightening the
/// match to a `nameserver <ip>` token would be a behavior change.
///
/// Fails closed: if the file is missing or unreadable, the error is logged
/// and the function returns `false` rather than propagating.
#[must_use]
pub fn nameserver_present(path: &Path, nameserver_ip: IpAddr) -> bool {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "could not read resolver configuration"
            );
            return false;
        }
    };

    let needle = nameserver_ip.to_string();
    contents.lines().any(|line| line.contains(&needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::net::Ipv4Addr;

    fn write_conf(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    const KUBE_DNS: IpAddr = IpAddr::V4(Ipv4Addr::new(10, 0, 0, 10));

    #[test]
    fn matches_nameserver_line() {
        let conf = write_conf("search cluster.local\nnameserver 10.0.0.10\n");
        assert!(nameserver_present(conf.path(), KUBE_DNS));
    }

    #[test]
    fn no_match_returns_false() {
        let conf = write_conf("nameserver 169.254.169.254\n");
        assert!(!nameserver_present(conf.path(), KUBE_DNS));
    }

    #[test]
    fn empty_file_returns_false() {
        let conf = write_conf("");
        assert!(!nameserver_present(conf.path(), KUBE_DNS));
    }

    #[test]
    fn missing_file_returns_false() {
        assert!(!nameserver_present(Path::new("/nonexistent/resolv.conf"), KUBE_DNS));
    }

    #[test]
    fn comment_line_also_matches() {
        // Substring scan, not a directive parse.
        let conf = write_conf("# previously: 10.0.0.10\nnameserver 8.8.8.8\n");
        assert!(nameserver_present(conf.path(), KUBE_DNS));
    }

    #[test]
    fn longer_ip_sharing_prefix_also_matches() {
        let conf = write_conf("nameserver 10.0.0.100\n");
        assert!(nameserver_present(conf.path(), KUBE_DNS));
    }
}
