//! ICS file generation.

use std::sync::LazyLock;

use chrono::{DateTime, FixedOffset, Utc};
use icalendar::{Calendar, Component, EventLike, Property};
use regex::Regex;

use crate::config::CalendarSettings;
use crate::event::ConferenceEvent;
use crate::uid::event_uid;

static UTC_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(:\d{8}T\d{6})Z$").expect("utc suffix is a valid regex"));

/// Render the whole conference calendar.
///
/// `stamp` is written as DTSTAMP on every event.
pub fn generate_calendar(
    events: &[ConferenceEvent],
    settings: &CalendarSettings,
    stamp: DateTime<Utc>,
) -> String {
    let mut cal = Calendar::new();

    cal.append_property(Property::new("NAME", &settings.name));
    cal.append_property(Property::new("X-WR-CALNAME", &settings.name));
    cal.append_property(Property::new("METHOD", "PUBLISH"));

    for event in events {
        cal.push(to_ics_event(event, settings, stamp));
    }

    let cal = cal.done();
    postprocess(&cal.to_string(), &settings.prod_id)
}

fn to_ics_event(
    event: &ConferenceEvent,
    settings: &CalendarSettings,
    stamp: DateTime<Utc>,
) -> icalendar::Event {
    let mut ics_event = icalendar::Event::new();
    ics_event.uid(&event_uid(&settings.uid_prefix, &event.content_hash()));
    ics_event.summary(&event.summary);

    ics_event.add_property("DTSTAMP", format_utc(stamp));
    add_datetime_property(&mut ics_event, "DTSTART", &event.start);
    add_datetime_property(&mut ics_event, "DTEND", &event.end);

    ics_event.location(&event.location(&settings.venue));

    if let Some(ref desc) = event.description {
        ics_event.description(desc);
    }

    ics_event.done()
}

fn add_datetime_property(ics_event: &mut icalendar::Event, name: &str, time: &DateTime<FixedOffset>) {
    ics_event.add_property(name, format_utc(time.with_timezone(&Utc)));
}

fn format_utc(dt: DateTime<Utc>) -> String {
    dt.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Clean up ICS output from the icalendar crate
/// - Replace PRODID with the configured product id
/// - Remove CALSCALE:GREGORIAN (it's the default)
/// - Drop the `Z` from UTC date-times, turning them into floating local times
///
/// The slot clock already added the venue's UTC offset, so the UTC digits
/// read as local conference time once the `Z` is gone.
fn postprocess(ics: &str, prod_id: &str) -> String {
    let mut result = String::with_capacity(ics.len());

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str("PRODID:");
            result.push_str(prod_id);
            result.push_str("\r\n");
            continue;
        }

        if line == "CALSCALE:GREGORIAN" {
            continue;
        }

        result.push_str(&UTC_SUFFIX.replace(line, "$1"));
        result.push_str("\r\n");
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conference::date_time;
    use crate::slot::Room;
    use chrono::TimeZone;

    fn stamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 14, 0, 0).unwrap()
    }

    fn events() -> Vec<ConferenceEvent> {
        vec![
            ConferenceEvent {
                summary: "Registration / Mingle".to_string(),
                description: None,
                start: date_time(14, "10:30").unwrap(),
                end: date_time(14, "11:00").unwrap(),
                room: None,
            },
            ConferenceEvent {
                summary: "Opening".to_string(),
                description: Some("Welcome to Gothenburg.".to_string()),
                start: date_time(14, "11:00").unwrap(),
                end: date_time(14, "12:00").unwrap(),
                room: Some(Room::RunAn),
            },
        ]
    }

    #[test]
    fn header_has_calendar_metadata() {
        let ics = generate_calendar(&events(), &CalendarSettings::default(), stamp());

        assert!(ics.starts_with("BEGIN:VCALENDAR\r\n"));
        assert!(ics.trim_end().ends_with("END:VCALENDAR"));
        assert!(ics.contains("VERSION:2.0\r\n"));
        assert!(ics.contains("PRODID:-//net.zegnat//foss-north 2025 Calendar//EN\r\n"));
        assert!(ics.contains("X-WR-CALNAME:foss-north 2025\r\n"));
        assert!(ics.contains("METHOD:PUBLISH\r\n"));
        assert!(!ics.contains("CALSCALE"));
        assert!(!ics.contains("ICALENDAR-RS"));
    }

    #[test]
    fn times_are_written_without_utc_suffix() {
        let ics = generate_calendar(&events(), &CalendarSettings::default(), stamp());

        assert!(ics.contains("DTSTART:20250414T083000\r\n"), "ICS:\n{ics}");
        assert!(ics.contains("DTEND:20250414T090000\r\n"), "ICS:\n{ics}");
        assert!(ics.contains("DTSTART:20250414T090000\r\n"), "ICS:\n{ics}");
        assert!(ics.contains("DTEND:20250414T100000\r\n"), "ICS:\n{ics}");
        assert!(ics.contains("DTSTAMP:20250301T140000\r\n"), "ICS:\n{ics}");

        let suffixed = Regex::new(r"\d{8}T\d{6}Z$").unwrap();
        assert!(ics.lines().all(|l| !suffixed.is_match(l)), "ICS:\n{ics}");
    }

    #[test]
    fn events_carry_uid_location_and_description() {
        let settings = CalendarSettings::default();
        let events = events();
        let ics = generate_calendar(&events, &settings, stamp());

        assert_eq!(ics.matches("BEGIN:VEVENT").count(), 2);
        for event in &events {
            let uid = format!("UID:{}.{}\r\n", settings.uid_prefix, event.content_hash());
            assert!(ics.contains(&uid), "missing {uid} in:\n{ics}");
        }

        let locations: Vec<_> = ics.lines().filter(|l| l.starts_with("LOCATION:")).collect();
        assert_eq!(locations.len(), 2);
        assert!(locations.iter().all(|l| l.contains("412 58 Göteborg")));
        assert!(locations.iter().any(|l| l.starts_with("LOCATION:RunAn")));

        // only the talk has an abstract
        assert_eq!(ics.lines().filter(|l| l.starts_with("DESCRIPTION:")).count(), 1);
        assert!(ics.contains("DESCRIPTION:Welcome to Gothenburg."));
    }

    #[test]
    fn output_is_deterministic_for_a_fixed_stamp() {
        let settings = CalendarSettings::default();
        let first = generate_calendar(&events(), &settings, stamp());
        let second = generate_calendar(&events(), &settings, stamp());
        assert_eq!(first, second);
    }

    #[test]
    fn custom_settings_are_used() {
        let settings = CalendarSettings {
            name: "Test Conf".to_string(),
            prod_id: "-//test//EN".to_string(),
            uid_prefix: "org.example".to_string(),
            venue: "Main hall".to_string(),
        };
        let ics = generate_calendar(&events(), &settings, stamp());

        assert!(ics.contains("PRODID:-//test//EN\r\n"));
        assert!(ics.contains("X-WR-CALNAME:Test Conf\r\n"));
        assert!(ics.contains("UID:org.example."));
        assert!(ics.contains("LOCATION:Main hall\r\n"));
    }
}
