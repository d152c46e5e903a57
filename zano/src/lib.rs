pub mod addresses;
pub mod assets;
pub mod balance;
pub mod client;
pub mod error;
pub mod rpc;
pub mod transfer;
pub mod units;
pub mod writing;

#[cfg(test)]
mod testing;

pub use addresses::*;
pub use assets::{AssetDescriptor, AssetInfo};
pub use balance::BalanceEntry;
pub use client::ZanoClient;
pub use error::{Result, ZanoError};
pub use rpc::{HttpTransport, RpcError, Transport};
pub use transfer::TransferResult;
pub use units::{from_base_units, to_base_units};

pub use rust_decimal::Decimal;
