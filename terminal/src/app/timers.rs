//! # Form Timers
//!
//! Cancellable timers owned by the controller: the amount-field debounce and
//! the one-second countdown ticker. Both deliver through the event channel and
//! tag each delivery with a sequence number; the controller drops deliveries
//! whose number is no longer current, so an aborted timer that already fired
//! cannot touch the form.

use std::time::Duration;

use async_channel::Sender;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, sleep, Instant, MissedTickBehavior};

use crate::app::events::AppEvent;

/// Spawned timer task, aborted when the handle is dropped.
#[derive(Debug)]
pub struct TimerHandle(JoinHandle<()>);

impl TimerHandle {
    pub fn spawn<F>(future: F) -> Self
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        Self(tokio::spawn(future))
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.0.abort();
    }
}

/// Trailing-edge debounce: only the last scheduled edit fires.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    seq: u64,
    pending: Option<TimerHandle>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            seq: 0,
            pending: None,
        }
    }

    /// Restart the quiet period, discarding any pending edit.
    pub fn schedule(&mut self, event_tx: Sender<AppEvent>) -> u64 {
        self.seq += 1;
        let seq = self.seq;
        let delay = self.delay;
        self.pending = Some(TimerHandle::spawn(async move {
            sleep(delay).await;
            let _ = event_tx.send(AppEvent::DebounceElapsed(seq)).await;
        }));
        seq
    }

    /// Drop the pending edit, if any.
    pub fn cancel(&mut self) {
        self.seq += 1;
        self.pending = None;
    }

    /// Accept a delivery. Returns false for a stale or cancelled timer.
    pub fn finish(&mut self, seq: u64) -> bool {
        if self.pending.is_some() && seq == self.seq {
            self.pending = None;
            true
        } else {
            false
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// One-second ticker aligned to a quote's issuance instant.
#[derive(Debug)]
pub struct Countdown {
    period: Duration,
    seq: u64,
    ticker: Option<TimerHandle>,
}

impl Countdown {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            seq: 0,
            ticker: None,
        }
    }

    /// (Re)start ticking every period after `anchor`.
    pub fn restart(&mut self, anchor: Instant, event_tx: Sender<AppEvent>) {
        self.seq += 1;
        let seq = self.seq;
        let period = self.period;
        self.ticker = Some(TimerHandle::spawn(async move {
            let mut ticks = interval_at(anchor + period, period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticks.tick().await;
                if event_tx.send(AppEvent::CountdownTick(seq)).await.is_err() {
                    break;
                }
            }
        }));
    }

    pub fn stop(&mut self) {
        self.seq += 1;
        self.ticker = None;
    }

    pub fn is_current(&self, seq: u64) -> bool {
        self.ticker.is_some() && seq == self.seq
    }

    pub fn is_running(&self) -> bool {
        self.ticker.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_debounce_only_last_edit_fires() {
        let (tx, rx) = async_channel::unbounded();
        let mut debouncer = Debouncer::new(Duration::from_millis(1000));

        let first = debouncer.schedule(tx.clone());
        sleep(Duration::from_millis(400)).await;
        let second = debouncer.schedule(tx.clone());

        let event = rx.recv().await.unwrap();
        assert!(matches!(event, AppEvent::DebounceElapsed(seq) if seq == second));
        assert!(!debouncer.finish(first));
        assert!(debouncer.finish(second));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_debounce_cancel_invalidates_seq() {
        let (tx, _rx) = async_channel::unbounded();
        let mut debouncer = Debouncer::new(Duration::from_millis(1000));

        let seq = debouncer.schedule(tx);
        debouncer.cancel();
        assert!(!debouncer.is_pending());
        assert!(!debouncer.finish(seq));
    }

    #[tokio::test(start_paused = true)]
    async fn test_countdown_ticks_each_period() {
        let (tx, rx) = async_channel::unbounded();
        let mut countdown = Countdown::new(Duration::from_secs(1));
        let start = Instant::now();

        countdown.restart(start, tx);
        for expected in 1..=3u64 {
            let event = rx.recv().await.unwrap();
            let AppEvent::CountdownTick(seq) = event else {
                panic!("expected a countdown tick");
            };
            assert!(countdown.is_current(seq));
            assert_eq!(Instant::now() - start, Duration::from_secs(expected));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_countdown_stop_marks_ticks_stale() {
        let (tx, _rx) = async_channel::unbounded();
        let mut countdown = Countdown::new(Duration::from_secs(1));
        countdown.restart(Instant::now(), tx);
        let seq_before = 1;
        countdown.stop();
        assert!(!countdown.is_running());
        assert!(!countdown.is_current(seq_before));
    }
}
