//! Agenda slots and the slot-to-time calculation.
//!
//! Slots are numbered through the day and alternate between the two rooms.
//! A trailing `a`/`b` splits a slot into two half-hour talks. On top of that
//! regular grid both days have breaks that shift some slots around; those
//! shifts live in the per-day rule tables below and are applied in order.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::conference::{ConferenceDay, HalfHours};
use crate::error::FossNorthError;

static SLOT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^slot(\d+)(a|b)?$").expect("slot pattern is a valid regex"));

/// Hour the first slot would start at if there were a slot zero.
const DAY_START: HalfHours = HalfHours::hours(8);

/// Highest slot number accepted. A day holds well under this many slots.
const MAX_SLOT: u32 = 99;

/// One of the two presentation rooms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Room {
    RunAn,
    Scania,
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Room::RunAn => write!(f, "RunAn"),
            Room::Scania => write!(f, "Scania"),
        }
    }
}

/// Which half of a split slot a talk occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Half {
    First,
    Second,
}

/// A parsed slot identifier such as `slot7` or `slot13b`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Slot {
    pub number: u32,
    pub half: Option<Half>,
}

impl Slot {
    /// Odd slots are in RunAn, even slots in Scania.
    pub fn room(&self) -> Room {
        if self.number % 2 == 1 {
            Room::RunAn
        } else {
            Room::Scania
        }
    }

    pub fn is_half(&self) -> bool {
        self.half.is_some()
    }

    /// Start and end of this slot on the given day.
    pub fn times(&self, day: ConferenceDay) -> SlotTimes {
        let mut start = DAY_START.plus(2 * self.number.div_ceil(2) as i32);
        if self.half == Some(Half::Second) {
            start = start.plus(1);
        }
        start = apply_rules(start, self.number, start_rules(day));

        let length = if self.is_half() { 1 } else { 2 };
        let end = apply_rules(start.plus(length), self.number, end_rules(day));

        SlotTimes { start, end }
    }
}

impl FromStr for Slot {
    type Err = FossNorthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let captures = SLOT_PATTERN
            .captures(s)
            .ok_or_else(|| FossNorthError::InvalidSlot(s.to_string()))?;

        let number = captures[1]
            .parse::<u32>()
            .ok()
            .filter(|n| *n <= MAX_SLOT)
            .ok_or_else(|| FossNorthError::InvalidSlot(s.to_string()))?;
        let half = captures.get(2).map(|m| match m.as_str() {
            "a" => Half::First,
            _ => Half::Second,
        });

        Ok(Slot { number, half })
    }
}

impl TryFrom<String> for Slot {
    type Error = FossNorthError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = match self.half {
            None => "",
            Some(Half::First) => "a",
            Some(Half::Second) => "b",
        };
        write!(f, "slot{}{}", self.number, suffix)
    }
}

/// Computed start and end of a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotTimes {
    pub start: HalfHours,
    pub end: HalfHours,
}

impl SlotTimes {
    /// Both ends as `hh:mm` strings, offset-compensated.
    pub fn to_clock(self) -> (String, String) {
        (self.start.to_clock(), self.end.to_clock())
    }
}

/// Which slot numbers a rule applies to.
#[derive(Debug, Clone, Copy)]
enum When {
    After(u32),
    OneOf(&'static [u32]),
}

impl When {
    fn matches(self, number: u32) -> bool {
        match self {
            When::After(n) => number > n,
            When::OneOf(numbers) => numbers.contains(&number),
        }
    }
}

/// A shift of some slots by a number of half hours.
#[derive(Debug, Clone, Copy)]
struct Rule {
    when: When,
    shift: i32,
}

const APR14_START: &[Rule] = &[
    // coffee break after slot 12
    Rule { when: When::After(12), shift: 1 },
];

const APR15_START: &[Rule] = &[
    // lunch after slot 6
    Rule { when: When::After(6), shift: 2 },
    // slots 9 and 10 move up half an hour around the coffee break
    Rule { when: When::After(8), shift: -1 },
    // and everything after is back on the hour
    Rule { when: When::After(10), shift: 1 },
];

const APR14_END: &[Rule] = &[
    // slots 15 and 16 are half slots without an a/b marker
    Rule { when: When::After(14), shift: -1 },
];

const APR15_END: &[Rule] = &[
    // slots 7 and 8 are half slots without an a/b marker
    Rule { when: When::OneOf(&[7, 8]), shift: -1 },
];

fn start_rules(day: ConferenceDay) -> &'static [Rule] {
    match day {
        ConferenceDay::Apr14 => APR14_START,
        ConferenceDay::Apr15 => APR15_START,
    }
}

fn end_rules(day: ConferenceDay) -> &'static [Rule] {
    match day {
        ConferenceDay::Apr14 => APR14_END,
        ConferenceDay::Apr15 => APR15_END,
    }
}

fn apply_rules(time: HalfHours, number: u32, rules: &[Rule]) -> HalfHours {
    rules
        .iter()
        .filter(|rule| rule.when.matches(number))
        .fold(time, |time, rule| time.plus(rule.shift))
}
