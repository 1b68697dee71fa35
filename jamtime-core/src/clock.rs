/// Platform-agnostic wall-clock abstraction.
///
/// The interpreter never reads the system time directly. Hosts inject a
/// `Clock` so that conversions stay deterministic under test and so that
/// other time sources (a simulated clock, a replay) can be plugged in.
///
/// # Examples
///
/// ```
/// use jamtime_core::{Clock, FixedClock};
///
/// let clock = FixedClock::new(1_735_732_800.0);
/// assert_eq!(clock.now(), 1_735_732_800.0);
/// ```
pub trait Clock {
    /// Current Unix time in seconds, with sub-second precision.
    fn now(&self) -> f64;
}

/// A clock frozen at a single instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedClock {
    now: f64,
}

impl FixedClock {
    pub fn new(now: f64) -> Self {
        FixedClock { now }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> f64 {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_is_stable() {
        let clock = FixedClock::new(42.5);
        assert_eq!(clock.now(), 42.5);
        assert_eq!(clock.now(), 42.5);
    }

    #[test]
    fn test_clock_as_trait_object() {
        let clock: Box<dyn Clock> = Box::new(FixedClock::new(7.0));
        assert_eq!(clock.now(), 7.0);
    }
}
