// Terminal rendering of interpreter output

use jamtime_core::templates::{self, group_thousands};
use jamtime_core::{ClockReading, CommandError, DateZone, ErrorKind};

const BAR_WIDTH: usize = 24;

// Carriage return plus erase-to-end-of-line, for redrawing one status line
pub const REDRAW: &str = "\r\x1b[K";

// Erase the screen and home the cursor
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

pub fn banner() -> String {
    format!(
        "{}{}\n{}\n{}",
        templates::BANNER,
        env!("CARGO_PKG_VERSION"),
        templates::ERA_LINE,
        templates::HINT_LINE
    )
}

pub fn zone_line(zone: DateZone) -> &'static str {
    match zone {
        DateZone::Local => "Dates are shown in local time",
        DateZone::Utc => "Dates are shown in UTC",
    }
}

pub fn progress_bar(progress: f64) -> String {
    let filled = ((progress.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f64).floor() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

/// One-line live clock: slot, progress through the slot, epoch coordinates.
pub fn status_line(reading: &ClockReading) -> String {
    let mut line = format!(
        "Slot {} {} Epoch {} | SlotInEpoch {} | Next slot {:.2}s",
        group_thousands(reading.slot),
        progress_bar(reading.progress),
        group_thousands(reading.epoch),
        reading.slot_in_epoch,
        reading.seconds_to_next_slot
    );
    if reading.pre_epoch {
        line.push_str(" (pre-era)");
    }
    line
}

/// Short prompt carrying the current slot.
pub fn prompt(reading: &ClockReading) -> String {
    format!(
        "[{} {:.1}s] $ ",
        group_thousands(reading.slot),
        reading.seconds_to_next_slot
    )
}

pub fn render_error(err: &CommandError) -> String {
    match err.kind() {
        ErrorKind::UnknownCommand => format!("Error: {}\n{}", err, templates::HINT_LINE),
        _ => format!("Error: {}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(progress: f64, pre_epoch: bool) -> ClockReading {
        ClockReading {
            slot: 1_234_567,
            epoch: 2_057,
            slot_in_epoch: 367,
            seconds_to_next_slot: 6.0 - progress / 100.0 * 6.0,
            progress,
            pre_epoch,
        }
    }

    #[test]
    fn test_progress_bar_bounds() {
        assert_eq!(progress_bar(0.0), format!("[{}]", "-".repeat(BAR_WIDTH)));
        assert_eq!(progress_bar(100.0), format!("[{}]", "#".repeat(BAR_WIDTH)));
        assert_eq!(progress_bar(150.0), progress_bar(100.0));
        assert_eq!(progress_bar(-5.0), progress_bar(0.0));
        assert_eq!(progress_bar(50.0).matches('#').count(), BAR_WIDTH / 2);
    }

    #[test]
    fn test_status_line() {
        let line = status_line(&reading(25.0, false));
        assert!(line.starts_with("Slot 1,234,567 ["));
        assert!(line.contains("Epoch 2,057 | SlotInEpoch 367 | Next slot 4.50s"));
        assert!(!line.contains("pre-era"));

        assert!(status_line(&reading(25.0, true)).ends_with("(pre-era)"));
    }

    #[test]
    fn test_prompt() {
        assert_eq!(prompt(&reading(25.0, false)), "[1,234,567 4.5s] $ ");
    }

    #[test]
    fn test_render_error_hints_on_unknown() {
        let unknown = CommandError::UnknownCommand("bogus".to_string());
        assert_eq!(
            render_error(&unknown),
            "Error: Unknown command: bogus\nType 'help' for available commands"
        );

        let invalid = CommandError::InvalidArgument("invalid slot number: 'x'".to_string());
        assert_eq!(
            render_error(&invalid),
            "Error: Invalid argument: invalid slot number: 'x'"
        );
    }

    #[test]
    fn test_zone_line() {
        assert_eq!(zone_line(DateZone::Utc), "Dates are shown in UTC");
        assert!(zone_line(DateZone::Local).ends_with("local time"));
    }

    #[test]
    fn test_banner_has_version() {
        assert!(banner().starts_with(&format!("JAMTime Terminal v{}", env!("CARGO_PKG_VERSION"))));
    }
}
