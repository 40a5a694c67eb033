use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Ticket handed out for one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

/// Orders list requests so that only the latest one may update visible state.
///
/// Clones share the counter: take a ticket before sending, check it when the
/// response arrives. Responses that resolve out of order are dropped.
#[derive(Debug, Clone, Default)]
pub struct RequestSequencer {
    latest: Arc<AtomicU64>,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> RequestTicket {
        RequestTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// `Some(value)` only when `ticket` is still the latest one issued.
    pub fn accept<T>(&self, ticket: RequestTicket, value: T) -> Option<T> {
        self.is_current(ticket).then_some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_wins() {
        let seq = RequestSequencer::new();
        let first = seq.issue();
        assert!(seq.is_current(first));
        let second = seq.issue();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
        assert!(second > first);
    }

    #[test]
    fn test_stale_response_is_dropped() {
        // page=1 is requested, then page=2; page=2 resolves first
        let seq = RequestSequencer::new();
        let clone = seq.clone();
        let page_one = seq.issue();
        let page_two = clone.issue();

        let mut rendered = None;
        if let Some(v) = seq.accept(page_two, "page=2&city=Lahore&institute_type=School") {
            rendered = Some(v);
        }
        if let Some(v) = seq.accept(page_one, "page=1") {
            rendered = Some(v);
        }
        assert_eq!(rendered, Some("page=2&city=Lahore&institute_type=School"));
    }
}
