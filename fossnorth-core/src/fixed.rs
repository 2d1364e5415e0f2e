//! Agenda items that are not talks.

use crate::conference::{ConferenceDay, HalfHours};
use crate::error::FossNorthResult;
use crate::event::ConferenceEvent;

/// A fixed agenda item. Times are on the same half-hour clock as slots.
#[derive(Debug, Clone, Copy)]
pub struct FixedEvent {
    pub day: ConferenceDay,
    pub summary: &'static str,
    pub start: HalfHours,
    pub end: HalfHours,
}

pub const FIXED_EVENTS: &[FixedEvent] = &[
    FixedEvent {
        day: ConferenceDay::Apr14,
        summary: "Registration / Mingle",
        start: HalfHours::hours_and_a_half(8),
        end: HalfHours::hours(9),
    },
    FixedEvent {
        day: ConferenceDay::Apr14,
        summary: "Lunch",
        start: HalfHours::hours(12),
        end: HalfHours::hours(13),
    },
    FixedEvent {
        day: ConferenceDay::Apr14,
        summary: "Coffee break",
        start: HalfHours::hours(15),
        end: HalfHours::hours_and_a_half(15),
    },
    FixedEvent {
        day: ConferenceDay::Apr15,
        summary: "Registration / Mingle",
        start: HalfHours::hours_and_a_half(8),
        end: HalfHours::hours(9),
    },
    FixedEvent {
        day: ConferenceDay::Apr15,
        summary: "Lunch",
        start: HalfHours::hours(12),
        end: HalfHours::hours(13),
    },
    FixedEvent {
        day: ConferenceDay::Apr15,
        summary: "Coffee break",
        start: HalfHours::hours_and_a_half(14),
        end: HalfHours::hours(15),
    },
];

impl FixedEvent {
    pub fn to_event(&self) -> FossNorthResult<ConferenceEvent> {
        Ok(ConferenceEvent {
            summary: self.summary.to_string(),
            description: None,
            start: self.start.on(self.day)?,
            end: self.end.on(self.day)?,
            room: None,
        })
    }
}

pub fn fixed_events() -> FossNorthResult<Vec<ConferenceEvent>> {
    FIXED_EVENTS.iter().map(FixedEvent::to_event).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conference::date_time;

    #[test]
    fn fixed_events_match_agenda() {
        let expected = [
            ("Registration / Mingle", 14, "10:30", "11:00"),
            ("Lunch", 14, "14:00", "15:00"),
            ("Coffee break", 14, "17:00", "17:30"),
            ("Registration / Mingle", 15, "10:30", "11:00"),
            ("Lunch", 15, "14:00", "15:00"),
            ("Coffee break", 15, "16:30", "17:00"),
        ];

        let events = fixed_events().unwrap();
        assert_eq!(events.len(), expected.len());

        for (event, (summary, day, start, end)) in events.iter().zip(expected) {
            assert_eq!(event.summary, summary);
            assert_eq!(event.start, date_time(day, start).unwrap(), "{summary} start");
            assert_eq!(event.end, date_time(day, end).unwrap(), "{summary} end");
            assert_eq!(event.room, None);
            assert_eq!(event.description, None);
        }
    }
}
