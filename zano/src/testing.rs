//! In-memory transport for unit tests: replies are queued up front and
//! every call is recorded.

use std::collections::VecDeque;
use std::sync::Mutex;

use serde_json::Value;

use crate::rpc::{RpcError, Transport};

#[derive(Default)]
pub struct Scripted {
    replies: Mutex<VecDeque<Result<Value, RpcError>>>,
    calls: Mutex<Vec<(String, Value)>>,
}

impl Scripted {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, result: Value) -> Self {
        self.replies.lock().unwrap().push_back(Ok(result));
        self
    }

    pub fn fail(self, err: RpcError) -> Self {
        self.replies.lock().unwrap().push_back(Err(err));
        self
    }

    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn methods(&self) -> Vec<String> {
        self.calls().into_iter().map(|(m, _)| m).collect()
    }
}

impl Transport for Scripted {
    async fn call(&self, method: &str, params: Value) -> Result<Value, RpcError> {
        self.calls.lock().unwrap().push((method.to_string(), params));
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected rpc call: {method}"))
    }
}

/// A daemon-side asset record as `get_assets_list` returns it.
pub fn asset_json(id: &str, ticker: &str, decimal_point: u32) -> Value {
    serde_json::json!({
        "asset_id": id,
        "full_name": format!("{ticker} token"),
        "ticker": ticker,
        "decimal_point": decimal_point,
        "current_supply": 1_000_000u64,
        "total_max_supply": 1_000_000u64,
        "hidden_supply": false,
        "meta_info": "",
        "owner": "a".repeat(64),
    })
}

/// `n` synthetic assets with ids `id{start}`.. in order.
pub fn asset_page(start: usize, n: usize) -> Value {
    let assets: Vec<Value> = (start..start + n)
        .map(|i| asset_json(&format!("id{i}"), &format!("T{i}"), 8))
        .collect();
    serde_json::json!({ "assets": assets })
}
