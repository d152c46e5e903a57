use std::time::Duration;

use crate::addresses::{DEFAULT_DAEMON_RPC, DEFAULT_WALLET_RPC};
use crate::rpc::{HttpTransport, RpcError, Transport};

/// Handle to a Zano wallet and the daemon it talks to.  The wallet
/// endpoint serves `getbalance` and `transfer`; the daemon serves the
/// asset catalog.  Each operation lives next to its own data types:
/// [`crate::assets`], [`crate::balance`], [`crate::transfer`].
#[derive(Clone, Debug)]
pub struct ZanoClient<T = HttpTransport> {
    pub(crate) wallet: T,
    pub(crate) daemon: T,
}

impl ZanoClient<HttpTransport> {
    pub fn new(wallet_url: &str, daemon_url: &str) -> Result<Self, RpcError> {
        Ok(Self {
            wallet: HttpTransport::new(wallet_url)?,
            daemon: HttpTransport::new(daemon_url)?,
        })
    }

    /// Like [`ZanoClient::new`], but no request waits longer than `timeout`.
    pub fn with_timeout(
        wallet_url: &str,
        daemon_url: &str,
        timeout: Duration,
    ) -> Result<Self, RpcError> {
        Ok(Self {
            wallet: HttpTransport::with_timeout(wallet_url, timeout)?,
            daemon: HttpTransport::with_timeout(daemon_url, timeout)?,
        })
    }

    /// Local wallet and daemon on their stock ports.
    pub fn local() -> Result<Self, RpcError> {
        Self::new(DEFAULT_WALLET_RPC, DEFAULT_DAEMON_RPC)
    }
}

impl<T: Transport> ZanoClient<T> {
    pub fn from_transports(wallet: T, daemon: T) -> Self {
        Self { wallet, daemon }
    }

    pub fn wallet(&self) -> &T {
        &self.wallet
    }

    pub fn daemon(&self) -> &T {
        &self.daemon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_against_local_ports() {
        let client = ZanoClient::local().unwrap();
        assert_eq!(client.wallet().url().port(), Some(10500));
        assert_eq!(client.daemon().url().port(), Some(12111));
    }

    #[test]
    fn bad_url_is_rejected_up_front() {
        let err = ZanoClient::new("http://127.0.0.1:10500/json_rpc", "::nope").unwrap_err();
        assert!(matches!(err, RpcError::Endpoint { .. }));
        assert!(ZanoClient::with_timeout(
            DEFAULT_WALLET_RPC,
            DEFAULT_DAEMON_RPC,
            Duration::from_secs(5)
        )
        .is_ok());
    }
}
