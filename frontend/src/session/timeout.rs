//! Single-shot guard for the initial connection attempt.
//!
//! The wall-clock timer lives in `use_connection_timeout`; this state
//! machine decides whether an expiry actually fires, so the
//! fire-exactly-once rule is testable without timers.

/// Guard over one connection attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectTimeout {
    /// Timer armed, no connected signal observed yet
    #[default]
    Waiting,
    /// Connected before expiry; later expiries are ignored
    Connected,
    /// Expired before a connected signal; has fired
    Expired,
}

impl ConnectTimeout {
    /// Record the connected signal. No-op unless still waiting.
    pub fn on_connected(&mut self) {
        if *self == ConnectTimeout::Waiting {
            *self = ConnectTimeout::Connected;
        }
    }

    /// Record timer expiry. Returns true when the failure report should
    /// fire, which happens at most once and never after a connected
    /// signal.
    pub fn on_expired(&mut self) -> bool {
        if *self == ConnectTimeout::Waiting {
            *self = ConnectTimeout::Expired;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expiry_fires_exactly_once() {
        let mut guard = ConnectTimeout::default();
        assert!(guard.on_expired());
        assert!(!guard.on_expired());
    }

    #[test]
    fn connected_before_expiry_suppresses_the_report() {
        let mut guard = ConnectTimeout::default();
        guard.on_connected();
        assert!(!guard.on_expired());
    }

    #[test]
    fn connected_after_expiry_is_a_noop() {
        let mut guard = ConnectTimeout::default();
        assert!(guard.on_expired());
        guard.on_connected();
        assert_eq!(guard, ConnectTimeout::Expired);
    }

    #[test]
    fn repeated_connected_signals_are_noops() {
        let mut guard = ConnectTimeout::default();
        guard.on_connected();
        guard.on_connected();
        assert_eq!(guard, ConnectTimeout::Connected);
        assert!(!guard.on_expired());
    }
}
