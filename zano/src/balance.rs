use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::addresses::NATIVE_ASSET_ID;
use crate::assets::AssetDescriptor;
use crate::error::{Result, ZanoError};
use crate::log;
use crate::rpc::Transport;
use crate::units::from_base_units;
use crate::ZanoClient;

/// One wallet balance, unlocked amount already scaled for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceEntry {
    pub asset_id: String,
    pub name: String,
    pub ticker: String,
    pub unlocked: String,
}

#[derive(Deserialize)]
struct BalancesReply {
    balances: Vec<RawBalance>,
}

#[derive(Deserialize)]
struct RawBalance {
    asset_info: AssetDescriptor,
    unlocked: RawAmount,
}

/// Wallets send plain JSON numbers; strings are accepted too.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Num(u64),
    Text(String),
}

impl RawAmount {
    fn to_u128(&self) -> Option<u128> {
        match self {
            RawAmount::Num(n) => Some(u128::from(*n)),
            RawAmount::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl<T: Transport> ZanoClient<T> {
    /// Wallet balances with native ZANO first; every other entry keeps
    /// the order the wallet reported it in.
    pub async fn get_balances(&self) -> Result<Vec<BalanceEntry>> {
        let res = self
            .wallet
            .call("getbalance", json!({}))
            .await
            .map_err(|e| {
                log!("[balance] getbalance failed: {}", e);
                ZanoError::BalancesFetch(e.to_string())
            })?;
        let reply: BalancesReply = serde_json::from_value(res)
            .map_err(|e| ZanoError::BalancesFetch(format!("malformed reply: {e}")))?;

        let mut entries = reply
            .balances
            .into_iter()
            .map(to_entry)
            .collect::<Result<Vec<_>>>()?;
        // stable: only the native entry moves
        entries.sort_by_key(|e| e.asset_id != NATIVE_ASSET_ID);
        Ok(entries)
    }
}

fn to_entry(raw: RawBalance) -> Result<BalanceEntry> {
    let info = raw.asset_info;
    let units = raw.unlocked.to_u128().ok_or_else(|| {
        ZanoError::BalancesFetch(format!("unreadable unlocked amount for {}", info.asset_id))
    })?;
    let unlocked = from_base_units(units, info.decimal_point);
    Ok(BalanceEntry {
        asset_id: info.asset_id,
        name: info.full_name,
        ticker: info.ticker,
        unlocked,
    })
}
