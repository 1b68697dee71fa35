//! # JAMTime Core
//!
//! Conversion engine and command interpreter for the JAM Common Era.
//!
//! JAM time counts 6-second *timeslots* from 2025-01-01T12:00:00Z and groups
//! them into *epochs* of 600 slots. This crate converts between that scheme
//! and Unix time, and interprets the small command language used by the
//! `jamtime` terminal.
//!
//! ## Features
//!
//! - **Pure engine**: every conversion takes `now` as a parameter
//! - **Floor semantics**: slots before the origin are negative and still map
//!   into `[0, 600)` within their epoch
//! - **Injected capabilities**: clock and date parser are traits, so hosts and
//!   tests decide where time comes from
//!
//! ## Example
//!
//! ```
//! use jamtime_core::{DateZone, FixedClock, Interpreter, Response};
//!
//! let mut interp = Interpreter::new(DateZone::Utc);
//! interp.set_clock(Box::new(FixedClock::new(1_735_732_810.0)));
//!
//! let reading = interp.refresh();
//! assert_eq!(reading.slot, 1);
//!
//! match interp.execute("unix 1735732800").unwrap() {
//!     Response::Display(text) => assert!(text.contains("JAM Slot 0")),
//!     other => panic!("unexpected {:?}", other),
//! }
//! ```

pub mod clock;
pub mod command;
pub mod date;
pub mod engine;
pub mod error;
pub mod hardware;
pub mod interpreter;
pub mod templates;

// Re-exports for convenience
pub use clock::{Clock, FixedClock};
pub use command::Command;
pub use date::{ChronoDateParser, DateParser, DateZone};
pub use engine::{CurrentSlot, TimeInfo};
pub use error::{CommandError, ErrorKind};
pub use hardware::system::SystemClock;
pub use interpreter::{ClockReading, Interpreter, Response};
