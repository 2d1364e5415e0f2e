//! ICS generation for the conference calendar (RFC 5545).

mod generate;

pub use generate::generate_calendar;
