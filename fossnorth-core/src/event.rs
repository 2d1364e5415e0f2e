//! Conference calendar events.
//!
//! Events come from two places: scheduled speaker entries and the fixed
//! agenda items in [`crate::fixed`]. Both end up as [`ConferenceEvent`]s,
//! which are sorted and handed to the ICS generator.

use std::cmp::Ordering;

use chrono::{DateTime, FixedOffset, NaiveDate};

use crate::error::FossNorthResult;
use crate::fixed::fixed_events;
use crate::slot::Room;
use crate::speaker::Speaker;
use crate::uid::content_hash;

#[derive(Debug, Clone, PartialEq)]
pub struct ConferenceEvent {
    pub summary: String,
    pub description: Option<String>,
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
    pub room: Option<Room>,
}

impl ConferenceEvent {
    /// Build the event for a speaker entry.
    ///
    /// Returns `Ok(None)` for entries that have no slot or day yet.
    pub fn from_speaker(speaker: &Speaker) -> FossNorthResult<Option<Self>> {
        let Some((day, slot)) = speaker.scheduled() else {
            tracing::debug!(title = %speaker.title, "skipping unscheduled talk");
            return Ok(None);
        };

        let times = slot.times(day);
        tracing::trace!(
            %slot,
            %day,
            start = times.start.as_hours(),
            end = times.end.as_hours(),
            "computed slot times"
        );

        Ok(Some(ConferenceEvent {
            summary: speaker.summary(),
            description: speaker.description(),
            start: times.start.on(day)?,
            end: times.end.on(day)?,
            room: Some(slot.room()),
        }))
    }

    /// Conference day this event belongs to.
    pub fn day(&self) -> NaiveDate {
        self.start.date_naive()
    }

    /// Stable content identifier, see [`content_hash`].
    pub fn content_hash(&self) -> String {
        content_hash(&self.summary, &self.start, &self.end)
    }

    /// LOCATION text: the room (if any) followed by the venue address.
    pub fn location(&self, venue: &str) -> String {
        match self.room {
            Some(room) => format!("{room}, {venue}"),
            None => venue.to_string(),
        }
    }
}

/// Build every event of the conference: all scheduled talks plus the fixed
/// agenda items, in calendar order.
pub fn build_events(speakers: &[Speaker]) -> FossNorthResult<Vec<ConferenceEvent>> {
    let mut events = Vec::with_capacity(speakers.len());
    for speaker in speakers {
        if let Some(event) = ConferenceEvent::from_speaker(speaker)? {
            events.push(event);
        }
    }
    let talks = events.len();

    events.extend(fixed_events()?);
    sort_events(&mut events);

    tracing::debug!(talks, total = events.len(), "built conference events");
    Ok(events)
}

/// Sort by day, then end time, then room (RunAn, Scania, no room).
pub fn sort_events(events: &mut [ConferenceEvent]) {
    events.sort_by(event_order);
}

pub fn event_order(a: &ConferenceEvent, b: &ConferenceEvent) -> Ordering {
    a.day()
        .cmp(&b.day())
        .then_with(|| a.end.cmp(&b.end))
        .then_with(|| room_rank(a.room).cmp(&room_rank(b.room)))
}

fn room_rank(room: Option<Room>) -> u8 {
    match room {
        Some(Room::RunAn) => 0,
        Some(Room::Scania) => 1,
        None => 2,
    }
}
