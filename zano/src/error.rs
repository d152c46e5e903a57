use thiserror::Error;

pub type Result<T> = std::result::Result<T, ZanoError>;

/// Every failure a [`crate::ZanoClient`] operation can surface.  Match on
/// the variant or on [`ZanoError::code`]; the message text is for humans.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ZanoError {
    #[error("Error fetching assets list: {0}")]
    AssetsFetch(String),

    #[error("Asset with ID {0} not found")]
    AssetNotFound(String),

    #[error("Error fetching info for asset ID {0}")]
    AssetInfo(String),

    #[error("Error fetching asset info for {asset_id}: {cause}")]
    AssetInfoFetch { asset_id: String, cause: String },

    #[error("Error fetching balances: {0}")]
    BalancesFetch(String),

    #[error("Not enough funds")]
    NotEnoughFunds,

    #[error("Error sending transfer: {0}")]
    Transfer(String),

    #[error("Transfer could not be sent: {0}")]
    TransferSend(String),
}

impl ZanoError {
    pub fn code(&self) -> &'static str {
        match self {
            ZanoError::AssetsFetch(_) => "ASSETS_FETCH_ERROR",
            ZanoError::AssetNotFound(_) => "ASSET_NOT_FOUND",
            ZanoError::AssetInfo(_) => "ASSET_INFO_ERROR",
            ZanoError::AssetInfoFetch { .. } => "ASSET_INFO_FETCH_ERROR",
            ZanoError::BalancesFetch(_) => "BALANCES_FETCH_ERROR",
            ZanoError::NotEnoughFunds => "NOT_ENOUGH_FUNDS",
            ZanoError::Transfer(_) => "TRANSFER_ERROR",
            ZanoError::TransferSend(_) => "TRANSFER_SEND_ERROR",
        }
    }
}
