//! Single-slot trailing-edge debounce.
//!
//! The slot holds at most one pending input. Arming it again replaces the
//! pending input and invalidates the previous ticket, so when a timer for a
//! superseded ticket fires, settling it yields nothing. The caller owns the
//! actual timer: it sleeps for [`DebounceSlot::quiet_period`] and then calls
//! [`DebounceSlot::settle`] with the ticket it was given.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct DebounceSlot<T> {
    quiet_period: Duration,
    generation: u64,
    pending: Option<(u64, T)>,
}

impl<T> DebounceSlot<T> {
    pub fn new(quiet_period: Duration) -> Self {
        Self { quiet_period, generation: 0, pending: None }
    }

    pub fn quiet_period(&self) -> Duration {
        self.quiet_period
    }

    /// Cancels whatever is pending and schedules `input`.
    pub fn arm(&mut self, input: T) -> DebounceTicket {
        self.generation += 1;
        self.pending = Some((self.generation, input));
        DebounceTicket(self.generation)
    }

    /// Takes the pending input if `ticket` is still the latest one.
    pub fn settle(&mut self, ticket: DebounceTicket) -> Option<T> {
        match &self.pending {
            Some((generation, _)) if *generation == ticket.0 => self.pending.take().map(|(_, input)| input),
            _ => None,
        }
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_latest_ticket_settles() {
        let mut slot = DebounceSlot::new(Duration::from_millis(300));
        let first = slot.arm(1);
        let second = slot.arm(2);
        let third = slot.arm(3);
        assert_eq!(slot.settle(first), None);
        assert_eq!(slot.settle(second), None);
        assert_eq!(slot.settle(third), Some(3));
        assert!(!slot.is_pending());
        assert_eq!(slot.settle(third), None);
    }

    #[test]
    fn cancel_clears_the_slot() {
        let mut slot = DebounceSlot::new(Duration::from_millis(300));
        let ticket = slot.arm("q");
        assert!(slot.is_pending());
        slot.cancel();
        assert_eq!(slot.settle(ticket), None);
    }
}
