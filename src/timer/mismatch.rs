//! Deferred clear of a mismatched pair.
//!
//! The timer runs on a logical clock advanced by `advance`. Hosts with a
//! real scheduler can ignore the clock and redeem the `ClearTicket`
//! themselves; both paths go through the same staleness check.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Handle for one scheduled clear.
///
/// `generation` identifies the deck the clear belongs to and `sequence`
/// distinguishes successive mismatches on the same deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClearTicket {
    pub generation: u64,
    pub sequence: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Pending {
    ticket: ClearTicket,
    due: Duration,
}

/// Single-slot scheduler for the mismatch clear.
#[derive(Clone, Debug, Default)]
pub struct MismatchTimer {
    now: Duration,
    next_sequence: u64,
    pending: Option<Pending>,
}

impl MismatchTimer {
    /// Create an idle timer at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Logical time elapsed since creation.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Ticket of the scheduled clear, if any.
    #[must_use]
    pub fn pending(&self) -> Option<ClearTicket> {
        self.pending.map(|p| p.ticket)
    }

    /// Time left before the scheduled clear is due.
    #[must_use]
    pub fn due_in(&self) -> Option<Duration> {
        self.pending.map(|p| p.due.saturating_sub(self.now))
    }

    /// Schedule a clear for `generation`, `delay` from now.
    ///
    /// Replaces any clear already pending.
    pub fn schedule(&mut self, generation: u64, delay: Duration) -> ClearTicket {
        self.next_sequence += 1;
        let ticket = ClearTicket {
            generation,
            sequence: self.next_sequence,
        };
        self.pending = Some(Pending {
            ticket,
            due: self.now + delay,
        });
        ticket
    }

    /// Drop the pending clear without firing it.
    pub fn cancel(&mut self) -> Option<ClearTicket> {
        self.pending.take().map(|p| p.ticket)
    }

    /// Advance the clock. Returns the pending ticket if it came due.
    pub fn advance(&mut self, elapsed: Duration) -> Option<ClearTicket> {
        self.now += elapsed;
        match self.pending {
            Some(p) if p.due <= self.now => {
                self.pending = None;
                Some(p.ticket)
            }
            _ => None,
        }
    }

    /// Redeem `ticket` ahead of the clock.
    ///
    /// Succeeds only if it is the ticket currently pending.
    pub fn redeem(&mut self, ticket: ClearTicket) -> bool {
        if self.pending() == Some(ticket) {
            self.pending = None;
            true
        } else {
            false
        }
    }
}
