//! Debounce and throttle for UI callbacks.
//!
//! Both are driven by caller-supplied instants instead of timers, so an
//! event loop (or a test) decides when time passes.

use std::time::{Duration, Instant};

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);
pub const DEFAULT_THROTTLE: Duration = Duration::from_millis(300);

/// Delays a call until `delay` has passed without another call.
///
/// At most one call is pending at a time; each new call replaces the
/// pending arguments and pushes the deadline back.
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(Instant, T)>,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Schedule `args`, replacing anything already pending.
    pub fn call(&mut self, args: T, now: Instant) {
        self.pending = Some((now + self.delay, args));
    }

    /// Take the pending arguments if their deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match self.pending.take() {
            Some((deadline, args)) if deadline <= now => Some(args),
            other => {
                self.pending = other;
                None
            }
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop the pending call without firing it.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(_, args)| args)
    }
}

/// Lets one call through per `limit` window and drops the rest.
#[derive(Debug)]
pub struct Throttle {
    limit: Duration,
    last_run: Option<Instant>,
}

impl Default for Throttle {
    fn default() -> Self {
        Self::new(DEFAULT_THROTTLE)
    }
}

impl Throttle {
    pub fn new(limit: Duration) -> Self {
        Self {
            limit,
            last_run: None,
        }
    }

    /// Returns true if the call may run now, starting a new window.
    pub fn try_call(&mut self, now: Instant) -> bool {
        let open = self
            .last_run
            .map_or(true, |last| now.saturating_duration_since(last) >= self.limit);
        if open {
            self.last_run = Some(now);
        }
        open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_debounce_fires_once_with_latest_args() {
        let start = Instant::now();
        let mut debounced = Debouncer::default();

        debounced.call("a", start);
        debounced.call("as", start + ms(100));
        debounced.call("asp", start + ms(200));

        // 300ms after the first call, but only 100ms after the last
        assert_eq!(debounced.poll(start + ms(300)), None);
        assert!(debounced.is_pending());

        assert_eq!(debounced.poll(start + ms(500)), Some("asp"));
        assert_eq!(debounced.poll(start + ms(900)), None);
        assert!(!debounced.is_pending());
    }

    #[test]
    fn test_debounce_cancel() {
        let start = Instant::now();
        let mut debounced = Debouncer::new(ms(50));
        debounced.call(7, start);

        assert_eq!(debounced.cancel(), Some(7));
        assert_eq!(debounced.poll(start + ms(100)), None);
    }

    #[test]
    fn test_throttle_drops_calls_inside_window() {
        let start = Instant::now();
        let mut throttle = Throttle::default();

        assert!(throttle.try_call(start));
        assert!(!throttle.try_call(start + ms(100)));
        assert!(!throttle.try_call(start + ms(299)));
        assert!(throttle.try_call(start + ms(300)));
        assert!(!throttle.try_call(start + ms(400)));
    }
}
