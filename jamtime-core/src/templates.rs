//! Text shown to the user
//!
//! Static help/install text and the layouts used for command results. None
//! of this affects what the interpreter computes.

use crate::engine::{EPOCH_LENGTH, JAM_COMMON_ERA, SLOT_DURATION, TimeInfo};

pub const BANNER: &str = "JAMTime Terminal v";

pub const ERA_LINE: &str = "JAM Common Era: January 1, 2025 12:00 UTC";

pub const HINT_LINE: &str = "Type 'help' for available commands";

pub const HELP_TEXT: &str = "Available commands:
> help          - Show this help
> current       - Show current slot info
> unix <time>   - Convert unix timestamp to JAM slot
> slot <number> - Convert JAM slot to unix timestamp
> time <date>   - Convert date string to JAM slot
> install       - Show installation and usage guide
> clear         - Clear output";

pub fn install_text() -> String {
    format!(
        "jamtime-core - Rust library for JAM Common Era timing

Installation:
cargo add jamtime-core
# or run the terminal directly
cargo install jamtime-cli

Usage:
use jamtime_core::engine;

// Slot containing a Unix timestamp
let slot = engine::unix_to_timeslot(1_735_732_806);

// Convert back to the slot start
let unix = engine::timeslot_to_unix(slot);

// Epoch grouping
let epoch = engine::epoch_of(slot);
let within = engine::slot_in_epoch(slot);

API:
• current_timeslot(now)   - Current JAM timeslot
• unix_to_timeslot(unix)  - Convert Unix timestamp to timeslot
• timeslot_to_unix(slot)  - Convert timeslot to Unix timestamp
• time_info(slot, now, zone) - Detailed time information
• time_to_next_slot(now)  - Seconds until the next slot

Constants:
• JAM_COMMON_ERA: {} (Jan 1, 2025 12:00 UTC)
• SLOT_DURATION: {} seconds per slot
• EPOCH_LENGTH: {} slots per epoch",
        JAM_COMMON_ERA, SLOT_DURATION, EPOCH_LENGTH
    )
}

/// Format an integer with `,` between groups of three digits.
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

pub fn current_text(info: &TimeInfo, seconds_to_next: f64, pre_epoch: bool) -> String {
    let mut text = format!(
        "Current JAM Slot: {}
Epoch: {}
Slot in Epoch: {}
Unix Timestamp: {}
Date: {}
Time to next slot: {:.2}s",
        group_thousands(info.slot),
        group_thousands(info.epoch),
        info.slot_in_epoch,
        info.unix_timestamp,
        info.date,
        seconds_to_next
    );
    if pre_epoch {
        text.push_str("\n(before the JAM Common Era; showing slot 0)");
    }
    text
}

pub fn unix_text(unix_time: i64, info: &TimeInfo) -> String {
    format!(
        "Unix {} → JAM Slot {}
Epoch: {}
Slot in Epoch: {}
Date: {}",
        unix_time,
        group_thousands(info.slot),
        group_thousands(info.epoch),
        info.slot_in_epoch,
        info.date
    )
}

pub fn slot_text(info: &TimeInfo) -> String {
    format!(
        "JAM Slot {} → Unix {}
Epoch: {}
Slot in Epoch: {}
Date: {}
Is Future: {}",
        group_thousands(info.slot),
        info.unix_timestamp,
        group_thousands(info.epoch),
        info.slot_in_epoch,
        info.date,
        info.is_future
    )
}

pub fn time_text(date_text: &str, unix_time: i64, info: &TimeInfo) -> String {
    format!(
        "\"{}\" → JAM Slot {}
Unix: {}
Epoch: {}
Slot in Epoch: {}",
        date_text,
        group_thousands(info.slot),
        unix_time,
        group_thousands(info.epoch),
        info.slot_in_epoch
    )
}
