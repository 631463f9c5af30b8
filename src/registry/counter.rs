pub(crate) const FIRST_IDENTITY: u64 = 1;

/// Monotonic source of auto-assigned identities for one registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct IdentityCounter {
    next: u64,
}

impl Default for IdentityCounter {
    fn default() -> Self {
        IdentityCounter {
            next: FIRST_IDENTITY,
        }
    }
}

impl IdentityCounter {
    /// The identity the next `advance` will hand out.
    pub(crate) fn peek(&self) -> u64 {
        self.next
    }

    pub(crate) fn advance(&mut self) -> u64 {
        let issued = self.next;
        self.next += 1;
        issued
    }

    pub(crate) fn reset(&mut self) {
        self.next = FIRST_IDENTITY;
    }

    /// Replay only: never moves backwards.
    pub(crate) fn restore(&mut self, next: u64) {
        self.next = self.next.max(next);
    }
}
