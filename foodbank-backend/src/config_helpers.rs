use std::net::SocketAddr;

use anyhow::Context;

/// Resolve the configured host and port to the address to bind.
///
/// IP literals are used as-is; hostnames go through the system resolver and
/// the first address wins.
pub async fn resolve_bind_address(host: &str, port: u16) -> anyhow::Result<SocketAddr> {
    let mut addrs = tokio::net::lookup_host((host, port))
        .await
        .with_context(|| format!("failed to resolve server.host {host:?}"))?;
    addrs
        .next()
        .with_context(|| format!("server.host {host:?} resolved to no addresses"))
}
