//! # Swap DTOs
//!
//! Request and response bodies for the `/api/v1/swap` endpoints. Amounts travel
//! as decimal strings so no precision is lost between backend and client.

use serde::{Deserialize, Serialize};

/// Which currency of the pair the user is disposing of.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SwapSide {
    Buy,
    Sell,
}

impl SwapSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            SwapSide::Buy => "buy",
            SwapSide::Sell => "sell",
        }
    }
}

impl std::fmt::Display for SwapSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `GET /api/v1/swap/pairs` payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SwapPairsData {
    pub pairs: Vec<String>,
    #[serde(default)]
    pub count: usize,
}

/// `POST /api/v1/swap/calculate` body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SwapCalculateRequest {
    pub pair: String,
    #[serde(rename = "type")]
    pub side: SwapSide,
    pub amount: String,
}

/// `POST /api/v1/swap/calculate` payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SwapQuoteData {
    pub output_amount: String,
    pub price: String,
    pub trading_fee: String,
    pub trading_fee_percent: f64,
    pub base_amount: String,
    pub spread: String,
}

/// `POST /api/v1/swap` body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SwapExecuteRequest {
    pub pair: String,
    #[serde(rename = "type")]
    pub side: SwapSide,
    pub amount: String,
    pub pin: String,
}

/// `POST /api/v1/swap` payload. The backend's receipt shape varies between
/// releases, so every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SwapExecuteData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_amount: Option<String>,
}
