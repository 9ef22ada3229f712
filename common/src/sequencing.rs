//! Debounced search input and stale-response protection.
//!
//! Both types are clock agnostic: the browser arms a timer per `Debouncer`
//! ticket and the timer callback reports back with that ticket. Only the
//! latest ticket (or request generation) is honoured.

/// Collapses bursts of input into the last value.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    latest: u64,
    pending: Option<T>,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self {
            latest: 0,
            pending: None,
        }
    }
}

impl<T> Debouncer<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `value` as the pending input and returns its ticket.
    pub fn trigger(&mut self, value: T) -> u64 {
        self.latest += 1;
        self.pending = Some(value);
        self.latest
    }

    /// Called when the timer for `ticket` elapses. Returns the pending value
    /// only if no newer input arrived in the meantime.
    pub fn fire(&mut self, ticket: u64) -> Option<T> {
        if ticket == self.latest {
            self.pending.take()
        } else {
            None
        }
    }

    pub fn cancel(&mut self) {
        self.latest += 1;
        self.pending = None;
    }
}

/// Hands out request generations so late responses of superseded requests
/// can be dropped instead of overwriting newer data.
#[derive(Debug, Clone, Default)]
pub struct RequestSequencer {
    current: u64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self) -> u64 {
        self.current += 1;
        self.current
    }

    pub fn accept(&self, generation: u64) -> bool {
        generation == self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_last_search_in_window_fires() {
        let mut debouncer = Debouncer::new();
        let first = debouncer.trigger("wat".to_string());
        let second = debouncer.trigger("water".to_string());

        let mut issued = Vec::new();
        for ticket in [first, second] {
            if let Some(query) = debouncer.fire(ticket) {
                issued.push(query);
            }
        }
        assert_eq!(issued, vec!["water".to_string()]);
    }

    #[test]
    fn test_ticket_fires_once() {
        let mut debouncer = Debouncer::new();
        let ticket = debouncer.trigger(1);
        assert_eq!(debouncer.fire(ticket), Some(1));
        assert_eq!(debouncer.fire(ticket), None);
    }

    #[test]
    fn test_cancel_discards_pending() {
        let mut debouncer = Debouncer::new();
        let ticket = debouncer.trigger(1);
        debouncer.cancel();
        assert_eq!(debouncer.fire(ticket), None);
    }

    #[test]
    fn test_stale_response_rejected() {
        let mut sequencer = RequestSequencer::new();
        let slow = sequencer.begin();
        let fast = sequencer.begin();
        assert!(sequencer.accept(fast));
        assert!(!sequencer.accept(slow));
    }
}
