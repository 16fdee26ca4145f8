//! # Expiry Scheduler
//!
//! Tracks the validity window of the displayed quote. Pure state machine:
//! callers pass the current instant, so every transition is testable without
//! real timers. The ticking itself lives in [`crate::app::timers::Countdown`].
//!
//! ```text
//!            start(issued_at)              tick() reaches 0
//!   Idle ───────────────────────▶ Counting ─────────────────▶ Expired
//!    ▲                              ▲  │                        │
//!    │            reset()           │  └── start() (new quote)  │
//!    └──────────────────────────────┴───────────────────────────┘
//! ```

use std::time::Duration;

use tokio::time::Instant;

/// Phase of the validity window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuotePhase {
    /// No quote requested
    Idle,
    /// A request was issued and its window is open
    Counting,
    /// The window lapsed; the controller decides between refresh and idle
    Expired,
}

/// Result of one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing is counting
    Idle,
    /// Still counting, with whole seconds left
    Counting(u64),
    /// The window just lapsed on this tick
    Expired,
}

#[derive(Debug, Clone)]
pub struct ExpiryScheduler {
    validity: Duration,
    phase: QuotePhase,
    deadline: Option<Instant>,
    time_remaining: u64,
}

impl ExpiryScheduler {
    pub fn new(validity: Duration) -> Self {
        Self {
            validity,
            phase: QuotePhase::Idle,
            deadline: None,
            time_remaining: 0,
        }
    }

    /// Open a fresh window anchored to the moment the request was issued.
    pub fn start(&mut self, issued_at: Instant) {
        let deadline = issued_at + self.validity;
        self.phase = QuotePhase::Counting;
        self.deadline = Some(deadline);
        self.time_remaining = remaining_secs(deadline, issued_at);
    }

    /// Recompute `time_remaining` as `max(0, ceil((deadline - now) / 1s))`.
    pub fn tick(&mut self, now: Instant) -> TickOutcome {
        match (self.phase, self.deadline) {
            (QuotePhase::Counting, Some(deadline)) => {
                self.time_remaining = remaining_secs(deadline, now);
                if self.time_remaining == 0 {
                    self.phase = QuotePhase::Expired;
                    TickOutcome::Expired
                } else {
                    TickOutcome::Counting(self.time_remaining)
                }
            }
            _ => TickOutcome::Idle,
        }
    }

    /// Leave the cycle: no deadline, nothing remaining.
    pub fn reset(&mut self) {
        self.phase = QuotePhase::Idle;
        self.deadline = None;
        self.time_remaining = 0;
    }

    pub fn phase(&self) -> QuotePhase {
        self.phase
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn time_remaining(&self) -> u64 {
        self.time_remaining
    }

    pub fn validity(&self) -> Duration {
        self.validity
    }
}

fn remaining_secs(deadline: Instant, now: Instant) -> u64 {
    let left = deadline.saturating_duration_since(now);
    let millis = left.as_millis();
    millis.div_ceil(1000) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_secs(15);

    #[test]
    fn test_starts_idle() {
        let scheduler = ExpiryScheduler::new(WINDOW);
        assert_eq!(scheduler.phase(), QuotePhase::Idle);
        assert_eq!(scheduler.time_remaining(), 0);
        assert_eq!(scheduler.deadline(), None);
    }

    #[test]
    fn test_start_opens_full_window() {
        let t0 = Instant::now();
        let mut scheduler = ExpiryScheduler::new(WINDOW);
        scheduler.start(t0);
        assert_eq!(scheduler.phase(), QuotePhase::Counting);
        assert_eq!(scheduler.time_remaining(), 15);
        assert_eq!(scheduler.deadline(), Some(t0 + WINDOW));
    }

    #[test]
    fn test_tick_rounds_up_partial_seconds() {
        let t0 = Instant::now();
        let mut scheduler = ExpiryScheduler::new(WINDOW);
        scheduler.start(t0);

        assert_eq!(scheduler.tick(t0 + Duration::from_millis(1)), TickOutcome::Counting(15));
        assert_eq!(scheduler.tick(t0 + Duration::from_secs(1)), TickOutcome::Counting(14));
        assert_eq!(scheduler.tick(t0 + Duration::from_millis(14_001)), TickOutcome::Counting(1));
    }

    #[test]
    fn test_expires_once_at_deadline() {
        let t0 = Instant::now();
        let mut scheduler = ExpiryScheduler::new(WINDOW);
        scheduler.start(t0);

        assert_eq!(scheduler.tick(t0 + WINDOW), TickOutcome::Expired);
        assert_eq!(scheduler.phase(), QuotePhase::Expired);
        assert_eq!(scheduler.time_remaining(), 0);

        // Further ticks do not re-fire expiry
        assert_eq!(scheduler.tick(t0 + WINDOW + Duration::from_secs(1)), TickOutcome::Idle);
    }

    #[test]
    fn test_restart_anchors_to_new_issuance() {
        let t0 = Instant::now();
        let mut scheduler = ExpiryScheduler::new(WINDOW);
        scheduler.start(t0);
        scheduler.tick(t0 + WINDOW);

        let t1 = t0 + WINDOW;
        scheduler.start(t1);
        assert_eq!(scheduler.phase(), QuotePhase::Counting);
        assert_eq!(scheduler.time_remaining(), 15);
        assert_eq!(scheduler.tick(t1 + Duration::from_secs(5)), TickOutcome::Counting(10));
    }

    #[test]
    fn test_reset_clears_deadline() {
        let t0 = Instant::now();
        let mut scheduler = ExpiryScheduler::new(WINDOW);
        scheduler.start(t0);
        scheduler.reset();

        assert_eq!(scheduler.phase(), QuotePhase::Idle);
        assert_eq!(scheduler.deadline(), None);
        assert_eq!(scheduler.time_remaining(), 0);
        assert_eq!(scheduler.tick(t0 + Duration::from_secs(1)), TickOutcome::Idle);
    }
}
