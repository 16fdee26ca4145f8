//! # Swap Tasks
//!
//! Async tasks for quote fetching and swap execution.

use std::sync::Arc;

use async_channel::Sender;
use chrono::Utc;
use shared::SwapSide;
use tokio::spawn;
use tracing::Instrument;

use crate::app::events::AppEvent;
use crate::app::state::Quote;
use crate::core::service::SwapApi;
use crate::debug::trace_context;
use crate::utils::amount::AmountInput;

/// Spawn a display-bound quote request tagged with `generation`.
///
/// The request is never cancelled; a superseded response is dropped by the
/// controller when its generation is no longer current.
pub(crate) fn fetch_quote(
    api: Arc<dyn SwapApi>,
    event_tx: Sender<AppEvent>,
    generation: u64,
    pair: String,
    amount: AmountInput,
) {
    tracing::debug!(pair = %pair, amount = %amount, generation, "Issuing quote request");

    spawn(async move {
        let issued_at = Utc::now();
        let result = api
            .calculate_swap(&pair, SwapSide::Sell, amount.as_str())
            .await
            .and_then(|data| Quote::from_data(&pair, SwapSide::Sell, amount, data, issued_at));

        let _ = event_tx.send(AppEvent::QuoteResult { generation, result }).await;
    });
}

/// Spawn the execution flow: re-quote the latest amount, then execute.
///
/// The execute call is only made when the fresh quote succeeds. The fresh
/// quote is not sent to the form.
pub(crate) fn execute_swap(
    api: Arc<dyn SwapApi>,
    event_tx: Sender<AppEvent>,
    pair: String,
    amount: AmountInput,
    pin: String,
) {
    let trace_id = trace_context::new_trace_id();
    let span = trace_context::execution_span(&trace_id, &pair, amount.as_str());

    spawn(
        async move {
            let start = std::time::Instant::now();

            let result = match api
                .calculate_swap(&pair, SwapSide::Sell, amount.as_str())
                .await
            {
                Ok(fresh) => {
                    tracing::debug!(output_amount = %fresh.output_amount, "Execute-time quote confirmed");
                    api.execute_swap(&pair, SwapSide::Sell, amount.as_str(), &pin)
                        .await
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Execute-time quote failed, swap not submitted");
                    Err(e)
                }
            };

            tracing::info!(
                success = result.is_ok(),
                duration_ms = start.elapsed().as_millis(),
                "Swap execution finished"
            );
            let _ = event_tx.send(AppEvent::ExecutionResult(result)).await;
        }
        .instrument(span),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AppError;
    use crate::core::service::mock::{ApiCall, MockSwapApi};
    use crate::utils::amount::parse_input;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_fetch_quote_reports_generation() {
        let api = Arc::new(MockSwapApi::new());
        let (tx, rx) = async_channel::unbounded();

        fetch_quote(api, tx, 7, "BTC-NGN".to_string(), parse_input("0.01").unwrap());

        match rx.recv().await.unwrap() {
            AppEvent::QuoteResult { generation, result } => {
                assert_eq!(generation, 7);
                assert_eq!(result.unwrap().output_amount, dec!(950000));
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_execute_requotes_before_executing() {
        let api = Arc::new(MockSwapApi::new());
        let (tx, rx) = async_channel::unbounded();

        execute_swap(
            api.clone(),
            tx,
            "BTC-NGN".to_string(),
            parse_input("0.01").unwrap(),
            "1234".to_string(),
        );

        let event = rx.recv().await.unwrap();
        assert!(matches!(event, AppEvent::ExecutionResult(Ok(_))));

        let calls = api.calls();
        assert_eq!(calls.len(), 2);
        assert!(matches!(calls[0], ApiCall::Calculate { .. }));
        assert!(matches!(
            &calls[1],
            ApiCall::Execute { pin, side: SwapSide::Sell, .. } if pin == "1234"
        ));
    }

    #[tokio::test]
    async fn test_execute_skipped_when_requote_fails() {
        let api = Arc::new(MockSwapApi::new());
        api.fail_next_quote(AppError::QuoteUnavailable("Pair disabled".to_string()));
        let (tx, rx) = async_channel::unbounded();

        execute_swap(
            api.clone(),
            tx,
            "BTC-NGN".to_string(),
            parse_input("0.01").unwrap(),
            "1234".to_string(),
        );

        let event = rx.recv().await.unwrap();
        assert!(matches!(
            event,
            AppEvent::ExecutionResult(Err(AppError::QuoteUnavailable(_)))
        ));
        assert_eq!(api.execute_calls(), 0);
    }
}
