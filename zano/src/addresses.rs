/// Asset id of native ZANO.
pub const NATIVE_ASSET_ID: &str =
    "d6329b5b1f7c0805b5c345f4957554002a2f557845f64d7645dae0e051a6498a";

/// Decimal point of native ZANO, used without asking the daemon.
pub const NATIVE_DECIMAL_POINT: u32 = 12;

/// Fixed transfer fee in base units (0.01 ZANO).
pub const TRANSFER_FEE: &str = "10000000000";
pub const TRANSFER_MIXIN: u64 = 15;

/// Page size for `get_assets_list`.
pub const ASSETS_PAGE_SIZE: u64 = 100;

/// Wallet error message for an underfunded transfer.
pub const NOT_ENOUGH_MONEY: &str = "WALLET_RPC_ERROR_CODE_NOT_ENOUGH_MONEY";

pub const DEFAULT_WALLET_RPC: &str = "http://127.0.0.1:10500/json_rpc";
pub const DEFAULT_DAEMON_RPC: &str = "http://127.0.0.1:12111/json_rpc";
