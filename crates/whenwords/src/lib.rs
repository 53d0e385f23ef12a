//! # whenwords
//!
//! Human-friendly time phrases from machine timestamps, and the reverse for durations.
//!
//! ```rust
//! use whenwords::{date_range, duration, parse_duration, timeago, DurationOptions, Timestamp};
//!
//! let now = Timestamp::unix(1_704_067_200.0);
//! assert_eq!(timeago(&Timestamp::unix(1_704_049_200.0), &now).unwrap(), "5 hours ago");
//!
//! let opts = DurationOptions::compact();
//! assert_eq!(duration(9_000.0, Some(&opts)).unwrap(), "2h 30m");
//! assert_eq!(parse_duration("2 hours and 30 minutes").unwrap(), 9_000.0);
//!
//! let range = date_range(&"2024-01-15".into(), &"2024-01-22".into()).unwrap();
//! assert_eq!(range, "January 15\u{2013}22, 2024");
//! ```
//!
//! ## Modules
//!
//! - [`calendar`] — Civil date ↔ day count conversion and weekday lookup
//! - [`timestamp`] — `Timestamp` inputs and normalization to epoch seconds
//! - [`relative`] — `timeago`, `human_date`, `date_range`
//! - [`duration`] — Multi-unit duration rendering
//! - [`parse`] — Duration text parsing
//! - [`error`] — Error types
//!
//! All operations are pure: no clock, no timezone database, no shared state.

pub mod calendar;
pub mod duration;
pub mod error;
pub mod parse;
pub mod relative;
pub mod timestamp;

pub use calendar::CivilDate;
pub use duration::{duration, DurationOptions};
pub use error::WhenError;
pub use parse::parse_duration;
pub use relative::{date_range, human_date, timeago};
pub use timestamp::{normalize, CivilDateTime, Timestamp};
