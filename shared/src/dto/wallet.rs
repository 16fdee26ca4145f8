use serde::{Deserialize, Serialize};

/// One currency wallet as reported by `GET /api/v1/wallets`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WalletDto {
    pub currency: String,
    pub available_balance: String,
    #[serde(default = "zero_balance")]
    pub locked_balance: String,
}

fn zero_balance() -> String {
    "0".to_string()
}

/// `GET /api/v1/wallets` payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WalletListData {
    pub wallets: Vec<WalletDto>,
}
