//! # Wallet Handlers
//!
//! Balance and pair-list updates that arrive from outside the form.

use shared::WalletDto;

use crate::app::state::Wallet;
use crate::app::SwapApp;

impl SwapApp {
    /// Replace wallet balances (e.g. pushed by another screen).
    pub fn set_wallets(&mut self, wallets: Vec<WalletDto>) {
        self.apply_wallets(wallets);
        self.publish();
    }

    /// Reload the supported pairs, bypassing the cache.
    pub fn refresh_pairs(&mut self) {
        crate::app::tasks::wallet::load_pairs(self.pairs.clone(), self.event_tx.clone(), true);
    }

    pub(crate) fn apply_wallets(&mut self, wallets: Vec<WalletDto>) {
        let parsed: Vec<Wallet> = wallets
            .into_iter()
            .filter_map(|dto| {
                let currency = dto.currency.clone();
                Wallet::try_from(dto)
                    .map_err(|e| tracing::warn!(currency = %currency, error = %e, "Skipping malformed wallet"))
                    .ok()
            })
            .collect();

        tracing::debug!(count = parsed.len(), "Wallets updated");
        self.state.write().wallets = parsed;
    }
}
