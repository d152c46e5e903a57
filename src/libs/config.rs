use {
    dotenv::dotenv,
    serde::{Deserialize, Serialize},
    std::{fmt::Debug, str::FromStr, time::Duration},
    thiserror::Error,
    url::Url,
    zano::{DEFAULT_DAEMON_RPC, DEFAULT_WALLET_RPC},
};

pub fn load_env() {
    dotenv().ok();
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is not a valid JSON-RPC url `{value}`: {reason}")]
    BadUrl {
        var: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Env: ZANO_WALLET_RPC
    pub wallet_rpc: String,
    /// Env: ZANO_DAEMON_RPC
    pub daemon_rpc: String,
    /// Env: ZANO_RPC_TIMEOUT_SECS, 0 waits forever
    pub timeout_secs: u64,
}

impl Config {
    pub fn new() -> Self {
        Self {
            wallet_rpc: std::env::var("ZANO_WALLET_RPC")
                .unwrap_or_else(|_| DEFAULT_WALLET_RPC.to_string()),
            daemon_rpc: std::env::var("ZANO_DAEMON_RPC")
                .unwrap_or_else(|_| DEFAULT_DAEMON_RPC.to_string()),
            timeout_secs: Self::get_var_t("ZANO_RPC_TIMEOUT_SECS", 0u64),
        }
    }

    /// Apply command-line overrides on top of the environment.
    pub fn merge(
        mut self,
        wallet: Option<String>,
        daemon: Option<String>,
        timeout: Option<u64>,
    ) -> Self {
        if let Some(w) = wallet {
            self.wallet_rpc = w;
        }
        if let Some(d) = daemon {
            self.daemon_rpc = d;
        }
        if let Some(t) = timeout {
            self.timeout_secs = t;
        }
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_url("ZANO_WALLET_RPC", &self.wallet_rpc)?;
        check_url("ZANO_DAEMON_RPC", &self.daemon_rpc)?;
        Ok(())
    }

    /// Parse env var to T; fall back to typed default.
    pub fn get_var_t<T>(key: &str, default: T) -> T
    where
        T: FromStr,
        <T as FromStr>::Err: Debug,
    {
        std::env::var(key)
            .ok()
            .and_then(|s| s.parse::<T>().ok())
            .unwrap_or(default)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wallet_rpc: DEFAULT_WALLET_RPC.to_string(),
            daemon_rpc: DEFAULT_DAEMON_RPC.to_string(),
            timeout_secs: 0,
        }
    }
}

fn check_url(var: &'static str, value: &str) -> Result<(), ConfigError> {
    let bad = |reason: String| ConfigError::BadUrl {
        var,
        value: value.to_string(),
        reason,
    };
    let url = Url::parse(value).map_err(|e| bad(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(bad(format!("scheme `{}` is not http(s)", url.scheme())));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_node() {
        let cfg = Config::default();
        assert!(cfg.wallet_rpc.contains(":10500/"));
        assert!(cfg.daemon_rpc.contains(":12111/"));
        assert_eq!(cfg.timeout(), None);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn overrides_win() {
        let cfg = Config::default().merge(Some("https://wallet.example/json_rpc".into()), None, Some(7));
        assert_eq!(cfg.wallet_rpc, "https://wallet.example/json_rpc");
        assert_eq!(cfg.daemon_rpc, DEFAULT_DAEMON_RPC);
        assert_eq!(cfg.timeout(), Some(Duration::from_secs(7)));
    }

    #[test]
    fn rejects_non_http_urls() {
        let cfg = Config::default().merge(None, Some("ws://127.0.0.1:12111".into()), None);
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::BadUrl { var: "ZANO_DAEMON_RPC", .. })
        ));
        let cfg = Config::default().merge(Some("nonsense".into()), None, None);
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn typed_env_fallback() {
        assert_eq!(Config::get_var_t("ZANOWALLET_SURELY_UNSET", 42u64), 42);
    }
}
