//! # Wallet Endpoints
//!
//! Read-only wallet balance queries.

use reqwest::Method;
use shared::{WalletDto, WalletListData};

use super::client::{read_envelope, ApiClient};
use crate::core::error::{AppError, Result};

/// Get all wallets of the signed-in user.
pub async fn get_wallets(client: &ApiClient) -> Result<Vec<WalletDto>> {
    let response = client.request(Method::GET, "/api/v1/wallets").send().await?;

    read_envelope::<WalletListData>(response)
        .await?
        .map(|data| data.wallets)
        .map_err(AppError::Api)
}
