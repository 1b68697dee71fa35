//! JAM Common Era conversion engine
//!
//! Pure arithmetic between Unix time and JAM timeslot coordinates. Nothing in
//! here reads the clock: the current time is always passed in by the caller,
//! so every function is deterministic.
//!
//! Timeslots are counted from [`JAM_COMMON_ERA`] in steps of
//! [`SLOT_DURATION`] seconds and grouped into epochs of [`EPOCH_LENGTH`]
//! slots. All divisions use floor semantics, so slots before the origin are
//! negative and still map to a slot-in-epoch in `[0, EPOCH_LENGTH)`.

use crate::date::DateZone;
use crate::error::CommandError;

/// Unix timestamp of timeslot 0 (2025-01-01T12:00:00Z).
pub const JAM_COMMON_ERA: i64 = 1_735_732_800;

/// Seconds per timeslot.
pub const SLOT_DURATION: i64 = 6;

/// Timeslots per epoch.
pub const EPOCH_LENGTH: i64 = 600;

/// Earliest Unix timestamp the engine accepts (0001-01-01T00:00:00Z).
pub const MIN_UNIX: i64 = -62_135_596_800;

/// Latest Unix timestamp the engine accepts (9999-12-31T23:59:59Z).
pub const MAX_UNIX: i64 = 253_402_300_799;

/// Slot containing [`MIN_UNIX`].
pub const MIN_SLOT: i64 = unix_to_timeslot(MIN_UNIX);

/// Slot containing [`MAX_UNIX`].
pub const MAX_SLOT: i64 = unix_to_timeslot(MAX_UNIX);

/// The live slot as shown by a clock display.
///
/// Before the origin the slot is clamped to 0 and `pre_epoch` is set, so a
/// display never has to render a negative slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentSlot {
    pub slot: i64,
    pub pre_epoch: bool,
}

/// Everything derived from a single timeslot.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeInfo {
    pub slot: i64,
    pub epoch: i64,
    pub slot_in_epoch: i64,
    /// Unix timestamp of the slot start
    pub unix_timestamp: i64,
    /// Slot start rendered as a calendar date
    pub date: String,
    /// Slot start lies after `now`
    pub is_future: bool,
}

// RUST CONCEPT: Floor division with a positive divisor
// div_euclid rounds toward negative infinity whenever the divisor is positive,
// which is exactly the floor semantics slots and epochs need.
pub const fn unix_to_timeslot(unix_time: i64) -> i64 {
    (unix_time - JAM_COMMON_ERA).div_euclid(SLOT_DURATION)
}

pub const fn timeslot_to_unix(slot: i64) -> i64 {
    JAM_COMMON_ERA + slot * SLOT_DURATION
}

pub const fn epoch_of(slot: i64) -> i64 {
    slot.div_euclid(EPOCH_LENGTH)
}

pub const fn slot_in_epoch(slot: i64) -> i64 {
    slot.rem_euclid(EPOCH_LENGTH)
}

/// Slot containing `now`, clamped to 0 before the origin.
pub fn current_timeslot(now: f64) -> CurrentSlot {
    let slot = ((now - JAM_COMMON_ERA as f64) / SLOT_DURATION as f64).floor() as i64;
    if slot < 0 {
        CurrentSlot { slot: 0, pre_epoch: true }
    } else {
        CurrentSlot { slot, pre_epoch: false }
    }
}

/// Seconds until the next slot boundary, always in `[0, SLOT_DURATION)`.
///
/// Exactly on a boundary this is 0: the new slot has just started.
pub fn time_to_next_slot(now: f64) -> f64 {
    let duration = SLOT_DURATION as f64;
    let elapsed = (now - JAM_COMMON_ERA as f64).rem_euclid(duration);
    let remaining = (duration - elapsed) % duration;
    // rem_euclid may round up to `duration` for tiny negative offsets
    if remaining >= duration || remaining < 0.0 {
        0.0
    } else {
        remaining
    }
}

pub fn time_info(slot: i64, now: f64, zone: DateZone) -> TimeInfo {
    let unix_timestamp = timeslot_to_unix(slot);
    TimeInfo {
        slot,
        epoch: epoch_of(slot),
        slot_in_epoch: slot_in_epoch(slot),
        unix_timestamp,
        date: zone.format_unix(unix_timestamp),
        is_future: unix_timestamp as f64 > now,
    }
}

/// Reject Unix timestamps outside `[MIN_UNIX, MAX_UNIX]`.
pub fn check_unix(unix_time: i64) -> Result<i64, CommandError> {
    if (MIN_UNIX..=MAX_UNIX).contains(&unix_time) {
        Ok(unix_time)
    } else {
        Err(CommandError::DomainError(format!(
            "unix timestamp {} is outside [{}, {}]",
            unix_time, MIN_UNIX, MAX_UNIX
        )))
    }
}

/// Reject slots outside `[MIN_SLOT, MAX_SLOT]`.
pub fn check_slot(slot: i64) -> Result<i64, CommandError> {
    if (MIN_SLOT..=MAX_SLOT).contains(&slot) {
        Ok(slot)
    } else {
        Err(CommandError::DomainError(format!(
            "slot {} is outside [{}, {}]",
            slot, MIN_SLOT, MAX_SLOT
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_scenario() {
        assert_eq!(unix_to_timeslot(1_735_732_800), 0);
        assert_eq!(unix_to_timeslot(1_735_732_805), 0);
        assert_eq!(unix_to_timeslot(1_735_732_806), 1);
        assert_eq!(epoch_of(600), 1);
        assert_eq!(slot_in_epoch(600), 0);
        assert_eq!(timeslot_to_unix(1), 1_735_732_806);
    }

    #[test]
    fn test_round_trip_on_slot_boundaries() {
        for slot in [0, 1, 599, 600, 601, 1_000_000, 123_456_789] {
            assert_eq!(unix_to_timeslot(timeslot_to_unix(slot)), slot);
        }
    }

    #[test]
    fn test_unix_truncates_to_slot_start() {
        for t in [
            JAM_COMMON_ERA - 13,
            JAM_COMMON_ERA - 1,
            JAM_COMMON_ERA,
            JAM_COMMON_ERA + 5,
            JAM_COMMON_ERA + 7,
            0,
            MIN_UNIX,
            MAX_UNIX,
        ] {
            let start = timeslot_to_unix(unix_to_timeslot(t));
            assert!(start <= t && t < start + SLOT_DURATION, "t = {}", t);
        }
    }

    #[test]
    fn test_negative_slots_use_floor() {
        // One second before the origin belongs to slot -1, not slot 0
        assert_eq!(unix_to_timeslot(JAM_COMMON_ERA - 1), -1);
        assert_eq!(unix_to_timeslot(JAM_COMMON_ERA - 6), -1);
        assert_eq!(unix_to_timeslot(JAM_COMMON_ERA - 7), -2);

        assert_eq!(epoch_of(-1), -1);
        assert_eq!(slot_in_epoch(-1), EPOCH_LENGTH - 1);
        assert_eq!(epoch_of(-600), -1);
        assert_eq!(slot_in_epoch(-600), 0);
        assert_eq!(epoch_of(-601), -2);
    }

    #[test]
    fn test_epoch_decomposition() {
        for slot in [-1_201, -600, -599, -1, 0, 1, 599, 600, 1_234_567] {
            let within = slot_in_epoch(slot);
            assert!((0..EPOCH_LENGTH).contains(&within), "slot = {}", slot);
            assert_eq!(epoch_of(slot) * EPOCH_LENGTH + within, slot);
        }
    }

    #[test]
    fn test_current_timeslot_clamps_before_origin() {
        let before = current_timeslot(JAM_COMMON_ERA as f64 - 100.0);
        assert_eq!(before, CurrentSlot { slot: 0, pre_epoch: true });

        let at = current_timeslot(JAM_COMMON_ERA as f64);
        assert_eq!(at, CurrentSlot { slot: 0, pre_epoch: false });

        let later = current_timeslot(JAM_COMMON_ERA as f64 + 6_000.5);
        assert_eq!(later, CurrentSlot { slot: 1_000, pre_epoch: false });
    }

    #[test]
    fn test_time_to_next_slot_range() {
        let origin = JAM_COMMON_ERA as f64;
        assert_eq!(time_to_next_slot(origin), 0.0);
        assert!((time_to_next_slot(origin + 1.5) - 4.5).abs() < 1e-6);
        assert!((time_to_next_slot(origin - 1.0) - 1.0).abs() < 1e-6);

        for offset in [-7.25, -0.000_001, 0.000_001, 2.0, 5.999, 6.0, 1e6 + 0.3] {
            let remaining = time_to_next_slot(origin + offset);
            assert!(
                (0.0..SLOT_DURATION as f64).contains(&remaining),
                "offset {} gave {}",
                offset,
                remaining
            );
        }
    }

    #[test]
    fn test_time_info_composes_fields() {
        let now = JAM_COMMON_ERA as f64 + 3_600.0;
        let info = time_info(601, now, DateZone::Utc);
        assert_eq!(info.slot, 601);
        assert_eq!(info.epoch, 1);
        assert_eq!(info.slot_in_epoch, 1);
        assert_eq!(info.unix_timestamp, JAM_COMMON_ERA + 3_606);
        assert_eq!(info.date, "2025-01-01 13:00:06 UTC");
        assert!(info.is_future);

        let past = time_info(0, now, DateZone::Utc);
        assert!(!past.is_future);
        assert_eq!(past.date, "2025-01-01 12:00:00 UTC");
    }

    #[test]
    fn test_range_checks() {
        assert!(check_unix(MIN_UNIX).is_ok());
        assert!(check_unix(MAX_UNIX).is_ok());
        assert!(matches!(check_unix(MAX_UNIX + 1), Err(CommandError::DomainError(_))));
        assert!(matches!(check_unix(i64::MIN), Err(CommandError::DomainError(_))));

        assert!(check_slot(MIN_SLOT).is_ok());
        assert!(check_slot(MAX_SLOT).is_ok());
        assert!(matches!(check_slot(i64::MAX), Err(CommandError::DomainError(_))));
        assert!(matches!(check_slot(MIN_SLOT - 1), Err(CommandError::DomainError(_))));
    }
}
