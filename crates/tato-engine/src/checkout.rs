//! Checkout confirmation timer.
//!
//! `Idle -> Confirming -> Idle`. Entering `Confirming` arms a deadline; the
//! caller polls with the current time and gets the ticket back exactly once
//! when it expires. Beginning again while confirming replaces the pending
//! deadline, so an older ticket can never fire.

use std::time::{Duration, Instant};

pub const DEFAULT_CONFIRMATION_DELAY: Duration = Duration::from_millis(2500);

/// Identifies one armed confirmation deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn get(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutState {
    Idle,
    Confirming { ticket: Ticket, due_at: Instant },
}

#[derive(Debug, Clone)]
pub struct Checkout {
    state: CheckoutState,
    delay: Duration,
    issued: u64,
}

impl Checkout {
    pub fn new(delay: Duration) -> Self {
        Self {
            state: CheckoutState::Idle,
            delay,
            issued: 0,
        }
    }

    pub fn state(&self) -> CheckoutState {
        self.state
    }

    pub fn is_confirming(&self) -> bool {
        matches!(self.state, CheckoutState::Confirming { .. })
    }

    /// Enter `Confirming`, cancelling any deadline still pending.
    pub fn begin(&mut self, now: Instant) -> Ticket {
        self.issued += 1;
        let ticket = Ticket(self.issued);
        self.state = CheckoutState::Confirming {
            ticket,
            due_at: now + self.delay,
        };
        ticket
    }

    /// Return to `Idle` if the pending deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<Ticket> {
        match self.state {
            CheckoutState::Confirming { ticket, due_at } if now >= due_at => {
                self.state = CheckoutState::Idle;
                Some(ticket)
            }
            _ => None,
        }
    }

    /// Time left until the pending deadline, if any.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        match self.state {
            CheckoutState::Confirming { due_at, .. } => Some(due_at.saturating_duration_since(now)),
            CheckoutState::Idle => None,
        }
    }
}

impl Default for Checkout {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIRMATION_DELAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle() {
        let mut checkout = Checkout::default();
        assert_eq!(checkout.state(), CheckoutState::Idle);
        assert!(checkout.poll(Instant::now()).is_none());
    }

    #[test]
    fn test_fires_once_after_delay() {
        let start = Instant::now();
        let mut checkout = Checkout::default();
        let ticket = checkout.begin(start);

        assert!(checkout.is_confirming());
        assert!(checkout.poll(start + Duration::from_millis(2499)).is_none());
        assert_eq!(checkout.poll(start + Duration::from_millis(2500)), Some(ticket));
        assert!(!checkout.is_confirming());
        assert!(checkout.poll(start + Duration::from_secs(10)).is_none());
    }

    #[test]
    fn test_begin_replaces_pending_deadline() {
        let start = Instant::now();
        let mut checkout = Checkout::new(Duration::from_millis(100));
        let first = checkout.begin(start);
        let second = checkout.begin(start + Duration::from_millis(80));
        assert_ne!(first, second);

        // The first deadline would have expired here, but it was replaced.
        assert!(checkout.poll(start + Duration::from_millis(120)).is_none());
        assert_eq!(
            checkout.poll(start + Duration::from_millis(180)),
            Some(second)
        );
        assert!(checkout.poll(start + Duration::from_millis(500)).is_none());
    }

    #[test]
    fn test_remaining() {
        let start = Instant::now();
        let mut checkout = Checkout::new(Duration::from_millis(100));
        assert!(checkout.remaining(start).is_none());

        checkout.begin(start);
        assert_eq!(
            checkout.remaining(start + Duration::from_millis(40)),
            Some(Duration::from_millis(60))
        );
        assert_eq!(
            checkout.remaining(start + Duration::from_millis(400)),
            Some(Duration::ZERO)
        );
    }
}
