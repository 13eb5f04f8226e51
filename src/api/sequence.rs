//! Request Sequencing
//!
//! Generation counter that lets the fetcher drop responses to superseded
//! requests, so the newest request wins regardless of arrival order.

use std::fmt::Display;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Generation of one issued request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Default)]
pub struct RequestSequence {
    latest: Arc<AtomicU64>,
}

impl RequestSequence {
    /// Issue a ticket for a new request; every earlier ticket becomes stale
    pub fn issue(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// Settle a finished request. Returns the payload only for a success on
    /// the latest ticket; stale successes and all failures leave the current
    /// results in place.
    pub fn accept<T, E: Display>(&self, ticket: Ticket, result: Result<T, E>) -> Option<T> {
        match result {
            Ok(payload) if self.is_current(ticket) => Some(payload),
            Ok(_) => {
                log::debug!("dropped stale response for request {}", ticket.0);
                None
            }
            Err(err) => {
                log::error!("request {} failed: {}", ticket.0, err);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_is_current() {
        let seq = RequestSequence::default();
        let first = seq.issue();
        assert!(seq.is_current(first));

        let second = seq.issue();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn test_clones_share_generation() {
        let seq = RequestSequence::default();
        let handle = seq.clone();
        let early = seq.issue();
        let late = handle.issue();
        // a slow early response resolving after the late one is still stale
        assert!(handle.is_current(late));
        assert!(!seq.is_current(early));
    }

    #[test]
    fn test_accept_current_success() {
        let seq = RequestSequence::default();
        let ticket = seq.issue();
        let result: Result<Vec<u32>, String> = Ok(vec![1, 2, 3]);
        assert_eq!(seq.accept(ticket, result), Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_accept_drops_stale_success() {
        let seq = RequestSequence::default();
        let early = seq.issue();
        let _late = seq.issue();
        let result: Result<Vec<u32>, String> = Ok(vec![9]);
        assert_eq!(seq.accept(early, result), None);
    }

    #[test]
    fn test_accept_ignores_failure() {
        let seq = RequestSequence::default();
        let ticket = seq.issue();
        let result: Result<Vec<u32>, String> = Err("connection refused".to_string());
        assert_eq!(seq.accept(ticket, result), None);
    }
}
