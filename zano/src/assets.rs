//! Asset catalog: the paginated `get_assets_list` walk, lookups on top
//! of it, and the direct `get_asset_info` query.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::addresses::{ASSETS_PAGE_SIZE, NATIVE_ASSET_ID, NATIVE_DECIMAL_POINT};
use crate::error::{Result, ZanoError};
use crate::log;
use crate::rpc::{RpcError, Transport};
use crate::ZanoClient;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetDescriptor {
    #[serde(default)]
    pub asset_id: String,
    pub full_name: String,
    pub ticker: String,
    pub decimal_point: u32,
    /// Supply, owner, meta info and whatever else the daemon sends.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Reply of `get_asset_info`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetInfo {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub asset_descriptor: Option<AssetDescriptor>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Deserialize)]
struct AssetsPage {
    assets: Vec<AssetDescriptor>,
}

impl<T: Transport> ZanoClient<T> {
    /// Every asset registered on chain, in daemon order.  Pages of
    /// [`ASSETS_PAGE_SIZE`] are requested until one comes back short, so a
    /// catalog that is an exact multiple of the page size costs one extra
    /// (empty) request.
    pub async fn list_assets(&self) -> Result<Vec<AssetDescriptor>> {
        let mut offset = 0u64;
        let mut all = Vec::new();
        loop {
            let params = json!({ "count": ASSETS_PAGE_SIZE, "offset": offset });
            let res = self
                .daemon
                .call("get_assets_list", params)
                .await
                .map_err(|e| {
                    log!("[assets] page at offset {} failed: {}", offset, e);
                    ZanoError::AssetsFetch(e.to_string())
                })?;
            let page: AssetsPage = serde_json::from_value(res).map_err(|e| {
                ZanoError::AssetsFetch(format!("malformed page at offset {offset}: {e}"))
            })?;

            let got = page.assets.len() as u64;
            all.extend(page.assets);
            offset += ASSETS_PAGE_SIZE;
            if got < ASSETS_PAGE_SIZE {
                break;
            }
        }
        Ok(all)
    }

    /// Find one asset in the full catalog.  Walks every page on each
    /// call; nothing is cached.
    pub async fn get_asset_descriptor(&self, asset_id: &str) -> Result<AssetDescriptor> {
        self.list_assets()
            .await?
            .into_iter()
            .find(|a| a.asset_id == asset_id)
            .ok_or_else(|| ZanoError::AssetNotFound(asset_id.to_string()))
    }

    /// Ask the daemon about a single asset, bypassing the catalog walk.
    pub async fn get_asset_info(&self, asset_id: &str) -> Result<AssetInfo> {
        let res = self
            .daemon
            .call("get_asset_info", json!({ "asset_id": asset_id }))
            .await;
        let value = match res {
            Ok(v) => v,
            Err(RpcError::MissingResult) => return Err(ZanoError::AssetInfo(asset_id.to_string())),
            Err(e) => {
                log!("[assets] get_asset_info {} failed: {}", asset_id, e);
                return Err(ZanoError::AssetInfoFetch {
                    asset_id: asset_id.to_string(),
                    cause: e.to_string(),
                });
            }
        };

        let mut info: AssetInfo =
            serde_json::from_value(value).map_err(|e| ZanoError::AssetInfoFetch {
                asset_id: asset_id.to_string(),
                cause: e.to_string(),
            })?;
        // the daemon leaves the id out of the descriptor here
        if let Some(d) = info.asset_descriptor.as_mut() {
            if d.asset_id.is_empty() {
                d.asset_id = asset_id.to_string();
            }
        }
        Ok(info)
    }

    /// Compare the hardcoded native decimal point with the catalog.
    /// `Ok(false)` when the catalog does not list the native asset at all.
    pub async fn check_native_decimal_point(&self) -> Result<bool> {
        let assets = self.list_assets().await?;
        match assets.iter().find(|a| a.asset_id == NATIVE_ASSET_ID) {
            None => Ok(false),
            Some(a) if a.decimal_point == NATIVE_DECIMAL_POINT => Ok(true),
            Some(a) => Err(ZanoError::AssetsFetch(format!(
                "native asset listed with decimal point {}, expected {}",
                a.decimal_point, NATIVE_DECIMAL_POINT
            ))),
        }
    }
}
