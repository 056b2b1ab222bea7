//! Generation tracking for image requests.
//!
//! Every new image URL starts a generation. Completion events and the delayed
//! loading indicator only act if they belong to the current generation, so a
//! request that was overtaken by a newer one cannot touch the UI.

/// Handle for one image request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoadTracker {
    generation: u64,
    pending: bool,
    /// URL requested by the current generation
    url: Option<String>,
}

impl LoadTracker {
    pub fn begin(&mut self, url: &str) -> LoadTicket {
        self.generation += 1;
        self.pending = true;
        self.url = Some(url.to_string());
        LoadTicket(self.generation)
    }

    pub fn current(&self) -> LoadTicket {
        LoadTicket(self.generation)
    }

    pub fn current_url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.generation
    }

    /// Whether `ticket` is current and has not completed yet.
    pub fn is_pending(&self, ticket: LoadTicket) -> bool {
        self.is_current(ticket) && self.pending
    }

    /// Ticket of the current generation if it requested `src`.
    pub fn ticket_for(&self, src: &str) -> Option<LoadTicket> {
        (self.url.as_deref() == Some(src)).then(|| self.current())
    }

    /// Mark `ticket` as done. Returns `false` for stale tickets.
    pub fn finish(&mut self, ticket: LoadTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.pending = false;
        true
    }

    /// Complete the request that loaded `src`.
    ///
    /// Events for any other URL come from an overtaken request and are
    /// rejected without touching the pending state.
    pub fn finish_src(&mut self, src: &str) -> bool {
        match self.ticket_for(src) {
            Some(ticket) => self.finish(ticket),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OLD: &str = "https://example.org/as_20250314-1200_tcc-rr_si-neighbours_003.png";
    const NEW: &str = "https://example.org/as_20250314-1200_tcc-rr_si-neighbours_006.png";

    #[test]
    fn test_stale_ticket_rejected() {
        let mut tracker = LoadTracker::default();
        let first = tracker.begin(OLD);
        let second = tracker.begin(NEW);
        assert!(!tracker.finish(first));
        assert!(tracker.is_pending(second));
        assert!(tracker.finish(second));
        assert!(!tracker.is_pending(second));
    }

    #[test]
    fn test_stale_completion_keeps_newer_load_pending() {
        let mut tracker = LoadTracker::default();
        tracker.begin(OLD);
        let newer = tracker.begin(NEW);
        // Late load event from the replaced image
        assert!(!tracker.finish_src(OLD));
        assert!(tracker.is_pending(newer));
        assert!(tracker.finish_src(NEW));
        assert!(!tracker.is_pending(newer));
    }

    #[test]
    fn test_ticket_for_matches_current_url_only() {
        let mut tracker = LoadTracker::default();
        assert_eq!(tracker.ticket_for(OLD), None);
        tracker.begin(OLD);
        assert_eq!(tracker.ticket_for(OLD), Some(tracker.current()));
        tracker.begin(NEW);
        assert_eq!(tracker.ticket_for(OLD), None);
        assert_eq!(tracker.current_url(), Some(NEW));
    }

    #[test]
    fn test_pending_only_for_current() {
        let mut tracker = LoadTracker::default();
        let ticket = tracker.begin(OLD);
        assert!(tracker.is_pending(ticket));
        tracker.begin(NEW);
        assert!(!tracker.is_pending(ticket));
        assert_eq!(tracker.current(), LoadTicket(2));
    }
}
