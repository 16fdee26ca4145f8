//! # Swap Endpoints
//!
//! Handles swap operations (supported pairs, quote calculation, execution).

use reqwest::Method;
use shared::{
    SwapCalculateRequest, SwapExecuteData, SwapExecuteRequest, SwapPairsData, SwapQuoteData,
    SwapSide,
};

use super::client::{read_envelope, ApiClient};
use crate::core::error::{AppError, Result};

/// Get the list of supported pair codes.
pub async fn get_swap_pairs(client: &ApiClient) -> Result<Vec<String>> {
    let response = client
        .request(Method::GET, "/api/v1/swap/pairs")
        .send()
        .await?;

    read_envelope::<SwapPairsData>(response)
        .await?
        .map(|data| data.pairs)
        .map_err(AppError::Api)
}

/// Price an amount of a pair.
///
/// A backend rejection is [`AppError::QuoteUnavailable`] carrying the
/// backend's message.
#[tracing::instrument(skip_all, fields(pair = %pair, side = %side, amount = %amount))]
pub async fn calculate_swap(
    client: &ApiClient,
    pair: &str,
    side: SwapSide,
    amount: &str,
) -> Result<SwapQuoteData> {
    let start = std::time::Instant::now();

    let request = SwapCalculateRequest {
        pair: pair.to_string(),
        side,
        amount: amount.to_string(),
    };

    let response = client
        .request(Method::POST, "/api/v1/swap/calculate")
        .json(&request)
        .send()
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "Quote request network error");
            AppError::from(e)
        })?;

    let result = read_envelope::<SwapQuoteData>(response).await?;
    let duration = start.elapsed();

    match result {
        Ok(quote) => {
            tracing::debug!(
                output_amount = %quote.output_amount,
                price = %quote.price,
                duration_ms = duration.as_millis(),
                "Quote received"
            );
            Ok(quote)
        }
        Err(message) => {
            tracing::warn!(error = %message, duration_ms = duration.as_millis(), "Quote rejected");
            Err(AppError::QuoteUnavailable(message))
        }
    }
}

/// Execute the swap.
///
/// A backend rejection is [`AppError::Execution`] with the message verbatim.
#[tracing::instrument(skip_all, fields(pair = %pair, side = %side, amount = %amount))]
pub async fn execute_swap(
    client: &ApiClient,
    pair: &str,
    side: SwapSide,
    amount: &str,
    pin: &str,
) -> Result<SwapExecuteData> {
    tracing::info!("Executing swap");
    let start = std::time::Instant::now();

    let request = SwapExecuteRequest {
        pair: pair.to_string(),
        side,
        amount: amount.to_string(),
        pin: pin.to_string(),
    };

    let response = client
        .request(Method::POST, "/api/v1/swap")
        .json(&request)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Swap execution network error");
            AppError::from(e)
        })?;

    let status = response.status();
    let result = read_envelope::<SwapExecuteData>(response).await?;
    let duration = start.elapsed();

    match result {
        Ok(receipt) => {
            tracing::info!(
                duration_ms = duration.as_millis(),
                reference = ?receipt.reference,
                "Swap executed successfully"
            );
            Ok(receipt)
        }
        Err(message) => {
            tracing::warn!(
                status = status.as_u16(),
                error = %message,
                duration_ms = duration.as_millis(),
                "Swap execution failed"
            );
            Err(AppError::Execution(message))
        }
    }
}
