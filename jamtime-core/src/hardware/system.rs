// Desktop clock implementation
// Uses chrono to read the system clock as fractional Unix seconds

use crate::clock::Clock;
use chrono::Utc;

/// System wall clock
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        SystemClock
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        // Microsecond resolution is plenty for a 6 second slot
        Utc::now().timestamp_micros() as f64 / 1_000_000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock() {
        let clock = SystemClock::new();
        let now = clock.now();

        // Should be after 2020-01-01 and before 2100-01-01
        assert!(now > 1_577_836_800.0 && now < 4_102_444_800.0);

        // And never run backwards between two reads by more than a slot
        let later = clock.now();
        assert!(later + 6.0 >= now);
    }
}
