use crate::clock::Clock;
use crate::command::Command;
use crate::date::{ChronoDateParser, DateParser, DateZone};
use crate::engine::{self, SLOT_DURATION};
use crate::error::CommandError;
use crate::hardware::system::SystemClock;
use crate::templates;
use tracing::debug;

/// What a successfully executed line asks the host to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// Append this text to the transcript
    Display(String),
    /// Discard the accumulated transcript
    Clear,
    /// Blank input: nothing to show, nothing to echo
    Empty,
}

/// Snapshot for a live clock display, produced on every refresh tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockReading {
    pub slot: i64,
    pub epoch: i64,
    pub slot_in_epoch: i64,
    pub seconds_to_next_slot: f64,
    /// Percentage of the current slot already elapsed, `[0, 100)`
    pub progress: f64,
    /// `now` lies before the JAM Common Era; `slot` is clamped to 0
    pub pre_epoch: bool,
}

// RUST CONCEPT: Stateless interpreter with injected capabilities
// The only fields are the clock, the date parser and the display zone, none of
// which change between calls. Hosts can share one interpreter freely.
pub struct Interpreter {
    clock: Box<dyn Clock + Send + Sync>,
    date_parser: Box<dyn DateParser + Send + Sync>,
    zone: DateZone,
}

impl Interpreter {
    /// Interpreter on the system clock, rendering and parsing dates in `zone`.
    pub fn new(zone: DateZone) -> Self {
        Self {
            clock: Box::new(SystemClock::new()),
            date_parser: Box::new(ChronoDateParser::new(zone)),
            zone,
        }
    }

    pub fn set_clock(&mut self, clock: Box<dyn Clock + Send + Sync>) {
        self.clock = clock;
    }

    pub fn set_date_parser(&mut self, parser: Box<dyn DateParser + Send + Sync>) {
        self.date_parser = parser;
    }

    pub fn zone(&self) -> DateZone {
        self.zone
    }

    /// Read the clock once and derive everything a live display needs.
    pub fn refresh(&self) -> ClockReading {
        let now = self.clock.now();
        let current = engine::current_timeslot(now);
        let seconds_to_next_slot = engine::time_to_next_slot(now);
        let duration = SLOT_DURATION as f64;

        ClockReading {
            slot: current.slot,
            epoch: engine::epoch_of(current.slot),
            slot_in_epoch: engine::slot_in_epoch(current.slot),
            seconds_to_next_slot,
            progress: (duration - seconds_to_next_slot) / duration * 100.0 % 100.0,
            pre_epoch: current.pre_epoch,
        }
    }

    /// Parse and run one input line.
    pub fn execute(&self, line: &str) -> Result<Response, CommandError> {
        let result = match Command::parse(line) {
            Ok(Some(command)) => self.run(&command),
            Ok(None) => Ok(Response::Empty),
            Err(e) => Err(e),
        };

        if let Err(e) = &result {
            debug!(kind = ?e.kind(), error = %e, "command rejected");
        }
        result
    }

    /// Run an already parsed command.
    pub fn run(&self, command: &Command) -> Result<Response, CommandError> {
        debug!(keyword = command.keyword(), "executing command");

        let text = match command {
            Command::Help => templates::HELP_TEXT.to_string(),
            Command::Install => templates::install_text(),
            Command::Clear => return Ok(Response::Clear),
            Command::Current => {
                // Before the origin the slot is clamped but the countdown still
                // follows the real slot boundary
                let now = self.clock.now();
                let current = engine::current_timeslot(now);
                let info = engine::time_info(current.slot, now, self.zone);
                templates::current_text(&info, engine::time_to_next_slot(now), current.pre_epoch)
            }
            Command::Unix(unix_time) => {
                let unix_time = engine::check_unix(*unix_time)?;
                let slot = engine::unix_to_timeslot(unix_time);
                let info = engine::time_info(slot, self.clock.now(), self.zone);
                templates::unix_text(unix_time, &info)
            }
            Command::Slot(slot) => {
                let slot = engine::check_slot(*slot)?;
                let info = engine::time_info(slot, self.clock.now(), self.zone);
                templates::slot_text(&info)
            }
            Command::Time(date_text) => {
                let unix_time = self.date_parser.parse_unix(date_text).ok_or_else(|| {
                    CommandError::InvalidArgument(format!("invalid date format: '{}'", date_text))
                })?;
                let unix_time = engine::check_unix(unix_time)?;
                let slot = engine::unix_to_timeslot(unix_time);
                let info = engine::time_info(slot, self.clock.now(), self.zone);
                templates::time_text(date_text, unix_time, &info)
            }
        };

        Ok(Response::Display(text))
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new(DateZone::default())
    }
}
