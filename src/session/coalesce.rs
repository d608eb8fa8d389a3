/// Identifies one request handed out by a [`Coalescer`]. Later tickets compare greater.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    /// Sequence number of this ticket (1-based).
    pub fn seq(self) -> u64 {
        self.0
    }
}

/// Last-request-wins gate for results that may complete out of order.
///
/// Every new request calls [`Coalescer::issue`]. A completed result is only accepted if its
/// ticket is still the latest one issued; results of superseded requests are dropped no matter
/// when they arrive. Nothing is interrupted: stale work simply has nowhere to land.
#[derive(Debug)]
pub struct Coalescer<T> {
    issued: u64,
    observed: Option<(Ticket, T)>,
    discarded: u64,
}

impl<T> Default for Coalescer<T> {
    fn default() -> Self {
        Self {
            issued: 0,
            observed: None,
            discarded: 0,
        }
    }
}

impl<T> Coalescer<T> {
    /// Create an empty gate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new request, superseding every earlier one.
    pub fn issue(&mut self) -> Ticket {
        self.issued += 1;
        Ticket(self.issued)
    }

    /// Most recently issued ticket.
    pub fn latest(&self) -> Option<Ticket> {
        (self.issued > 0).then_some(Ticket(self.issued))
    }

    /// Return `true` while `ticket` has not been superseded.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.issued
    }

    /// Offer a finished result. Returns `true` when it became the observed value.
    pub fn complete(&mut self, ticket: Ticket, value: T) -> bool {
        if !self.is_current(ticket) {
            self.discarded += 1;
            tracing::debug!(
                ticket = ticket.0,
                latest = self.issued,
                "discarding superseded result"
            );
            return false;
        }
        self.observed = Some((ticket, value));
        true
    }

    /// The value from the latest completed request, if it has completed.
    pub fn observed(&self) -> Option<&T> {
        self.observed.as_ref().map(|(_, v)| v)
    }

    /// Ticket of the observed value.
    pub fn observed_ticket(&self) -> Option<Ticket> {
        self.observed.as_ref().map(|(t, _)| *t)
    }

    /// Return `true` when the observed value belongs to the latest issued request.
    pub fn is_settled(&self) -> bool {
        self.observed_ticket().is_some_and(|t| self.is_current(t))
    }

    /// Number of results dropped because they were superseded.
    pub fn discarded(&self) -> u64 {
        self.discarded
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/coalesce.rs"]
mod tests;
