use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::addresses::{
    NATIVE_ASSET_ID, NATIVE_DECIMAL_POINT, NOT_ENOUGH_MONEY, TRANSFER_FEE, TRANSFER_MIXIN,
};
use crate::error::{Result, ZanoError};
use crate::log;
use crate::rpc::{RpcError, Transport};
use crate::units::to_base_units;
use crate::ZanoClient;

/// Wallet reply to `transfer`, kept as sent.  Any non-null `result`
/// means the transfer went out, whatever its shape; the accessors only
/// read the usual fields when they are there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransferResult {
    pub raw: Value,
}

impl TransferResult {
    pub fn new(raw: Value) -> Self {
        Self { raw }
    }

    pub fn tx_hash(&self) -> Option<&str> {
        self.raw.get("tx_hash").and_then(Value::as_str)
    }

    /// Accepts a JSON number or a numeric string.
    pub fn tx_size(&self) -> Option<u64> {
        match self.raw.get("tx_size")? {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn tx_unsigned_hex(&self) -> Option<&str> {
        self.raw.get("tx_unsigned_hex").and_then(Value::as_str)
    }

    /// Fields other than the three named ones, when the reply is an object.
    pub fn extra(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.raw
            .as_object()
            .into_iter()
            .flatten()
            .filter(|(k, _)| !matches!(k.as_str(), "tx_hash" | "tx_size" | "tx_unsigned_hex"))
    }
}

impl<T: Transport> ZanoClient<T> {
    /// Decimal point of `asset_id`.  Native ZANO is answered locally, any
    /// other asset costs a full catalog walk.
    pub async fn resolve_decimal_point(&self, asset_id: &str) -> Result<u32> {
        if asset_id == NATIVE_ASSET_ID {
            return Ok(NATIVE_DECIMAL_POINT);
        }
        Ok(self.get_asset_descriptor(asset_id).await?.decimal_point)
    }

    /// Send `amount` (human units) of `asset_id` to `address` with the
    /// fixed fee and mixin.
    ///
    /// Catalog failures come back as they are (`AssetNotFound`,
    /// `AssetsFetch`).  Once the wallet is involved: an underfunded wallet
    /// is [`ZanoError::NotEnoughFunds`], any other wallet-reported error is
    /// [`ZanoError::Transfer`], and anything below that (HTTP, decoding) is
    /// [`ZanoError::TransferSend`].
    pub async fn send_transfer(
        &self,
        asset_id: &str,
        address: &str,
        amount: Decimal,
    ) -> Result<TransferResult> {
        let decimal_point = self.resolve_decimal_point(asset_id).await?;
        let base_units =
            to_base_units(amount, decimal_point).map_err(|e| ZanoError::Transfer(e.to_string()))?;

        let params = json!({
            "destinations": [{
                "address": address,
                "amount": base_units,
                "asset_id": asset_id,
            }],
            "fee": TRANSFER_FEE,
            "mixin": TRANSFER_MIXIN,
        });

        match self.wallet.call("transfer", params).await {
            Ok(v) => Ok(TransferResult::new(v)),
            Err(RpcError::Rpc { message, .. }) if message == NOT_ENOUGH_MONEY => {
                Err(ZanoError::NotEnoughFunds)
            }
            Err(RpcError::Rpc { message, .. }) => Err(ZanoError::Transfer(message)),
            Err(RpcError::MissingResult) => Err(ZanoError::Transfer(
                "wallet returned neither result nor error".into(),
            )),
            Err(e) => {
                log!("[transfer] {} of {} to {} not sent: {}", amount, asset_id, address, e);
                Err(ZanoError::TransferSend(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{asset_json, Scripted};
    use std::str::FromStr;

    const ADDR: &str = "ZxCxWNUaySi1j6Uqn48iEQR8pNSj5E4LsEWTTs8DKoUZKyPnkaHr69zU6475br9kTU7cSAV7UGJ9idVRLbv7HboU1yerXV9br";

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sent() -> Value {
        json!({ "tx_hash": "ab".repeat(32), "tx_size": 1523, "tx_unsigned_hex": "" })
    }

    #[tokio::test]
    async fn native_transfer_skips_the_catalog() {
        let client = ZanoClient::from_transports(Scripted::new().reply(sent()), Scripted::new());
        let res = client
            .send_transfer(NATIVE_ASSET_ID, ADDR, dec("10"))
            .await
            .unwrap();
        assert_eq!(res.tx_hash(), Some("ab".repeat(32).as_str()));
        assert_eq!(res.tx_size(), Some(1523));

        assert!(client.daemon().calls().is_empty());
        let calls = client.wallet().calls();
        assert_eq!(calls.len(), 1);
        let (method, params) = &calls[0];
        assert_eq!(method, "transfer");
        assert_eq!(
            *params,
            json!({
                "destinations": [{
                    "address": ADDR,
                    "amount": "10000000000000",
                    "asset_id": NATIVE_ASSET_ID,
                }],
                "fee": "10000000000",
                "mixin": 15,
            })
        );
    }

    #[tokio::test]
    async fn custom_asset_uses_catalog_precision() {
        let daemon = Scripted::new().reply(json!({ "assets": [asset_json("cafe", "CAFE", 8)] }));
        let client = ZanoClient::from_transports(Scripted::new().reply(sent()), daemon);
        client
            .send_transfer("cafe", ADDR, dec("1.5"))
            .await
            .unwrap();
        assert_eq!(client.daemon().methods(), vec!["get_assets_list"]);
        let calls = client.wallet().calls();
        assert_eq!(calls[0].1["destinations"][0]["amount"], "150000000");
    }

    #[tokio::test]
    async fn unknown_asset_never_reaches_the_wallet() {
        let daemon = Scripted::new().reply(json!({ "assets": [] }));
        let client = ZanoClient::from_transports(Scripted::new(), daemon);
        let err = client
            .send_transfer("nope", ADDR, dec("1"))
            .await
            .unwrap_err();
        assert_eq!(err, ZanoError::AssetNotFound("nope".into()));
        assert!(client.wallet().calls().is_empty());
    }

    #[tokio::test]
    async fn too_many_decimals_is_rejected_before_sending() {
        let client = ZanoClient::from_transports(Scripted::new(), Scripted::new());
        let err = client
            .send_transfer(NATIVE_ASSET_ID, ADDR, dec("0.0000000000001"))
            .await
            .unwrap_err();
        assert_eq!(err.code(), "TRANSFER_ERROR");
        assert!(client.wallet().calls().is_empty());
    }

    #[tokio::test]
    async fn wallet_errors_are_classified() {
        let wallet = Scripted::new()
            .fail(RpcError::Rpc {
                code: -4,
                message: NOT_ENOUGH_MONEY.into(),
            })
            .fail(RpcError::Rpc {
                code: -2,
                message: "WALLET_RPC_ERROR_CODE_WRONG_ADDRESS".into(),
            })
            .fail(RpcError::MissingResult)
            .fail(RpcError::Decode("truncated body".into()));
        let client = ZanoClient::from_transports(wallet, Scripted::new());

        let mut codes = Vec::new();
        for _ in 0..4 {
            let err = client
                .send_transfer(NATIVE_ASSET_ID, ADDR, dec("1"))
                .await
                .unwrap_err();
            codes.push(err.code());
        }
        assert_eq!(
            codes,
            vec![
                "NOT_ENOUGH_FUNDS",
                "TRANSFER_ERROR",
                "TRANSFER_ERROR",
                "TRANSFER_SEND_ERROR"
            ]
        );
    }

    #[tokio::test]
    async fn any_result_shape_counts_as_sent() {
        let wallet = Scripted::new()
            .reply(json!({ "tx_hash": "ab", "tx_size": "1523" }))
            .reply(json!("OK"));
        let client = ZanoClient::from_transports(wallet, Scripted::new());

        let res = client
            .send_transfer(NATIVE_ASSET_ID, ADDR, dec("1"))
            .await
            .unwrap();
        assert_eq!(res.tx_hash(), Some("ab"));
        assert_eq!(res.tx_size(), Some(1523));
        assert_eq!(res.extra().count(), 0);

        let res = client
            .send_transfer(NATIVE_ASSET_ID, ADDR, dec("1"))
            .await
            .unwrap();
        assert_eq!(res.raw, json!("OK"));
        assert_eq!(res.tx_hash(), None);
        assert_eq!(res.extra().count(), 0);
    }

    #[tokio::test]
    async fn resolves_native_precision_locally() {
        let client = ZanoClient::from_transports(Scripted::new(), Scripted::new());
        assert_eq!(client.resolve_decimal_point(NATIVE_ASSET_ID).await.unwrap(), 12);
    }
}
