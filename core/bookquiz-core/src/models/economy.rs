use serde::Serialize;

use crate::storage::StorageError;

/// Why a purchase did not go through. No state is changed on any of these.
#[derive(Debug, thiserror::Error)]
pub enum PurchaseError {
    #[error("item {0} is already owned")]
    AlreadyOwned(u32),
    #[error("insufficient funds: need {price}, have {balance}")]
    InsufficientFunds { price: u64, balance: u64 },
    #[error("purchase failed: {0}")]
    Unknown(#[from] StorageError),
}

impl PurchaseError {
    /// Stable label used for metrics and user-facing message lookup.
    pub fn reason(&self) -> &'static str {
        match self {
            PurchaseError::AlreadyOwned(_) => "already_owned",
            PurchaseError::InsufficientFunds { .. } => "not_enough",
            PurchaseError::Unknown(_) => "unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PurchaseReceipt {
    pub item_id: u32,
    pub price: u64,
    pub balance: u64,
}
