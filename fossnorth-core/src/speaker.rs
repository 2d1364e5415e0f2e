//! Speaker entries from `speakers.yaml`.

use std::path::Path;

use serde::Deserialize;

use crate::conference::ConferenceDay;
use crate::error::{FossNorthError, FossNorthResult};
use crate::slot::Slot;

/// A single talk submission.
///
/// `slot` and `day` are only present once the talk has been put on the
/// agenda.
#[derive(Debug, Clone, Deserialize)]
pub struct Speaker {
    #[serde(default)]
    pub slot: Option<Slot>,
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub day: Option<ConferenceDay>,
    #[serde(default)]
    pub copresenters: Vec<Copresenter>,
    #[serde(rename = "abstract")]
    pub abstract_paragraphs: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Copresenter {
    pub name: String,
}

impl Speaker {
    /// Day and slot, if the talk is scheduled.
    pub fn scheduled(&self) -> Option<(ConferenceDay, &Slot)> {
        Some((self.day?, self.slot.as_ref()?))
    }

    /// Main speaker followed by any co-presenters, comma separated.
    pub fn presenters(&self) -> String {
        std::iter::once(self.name.as_str())
            .chain(self.copresenters.iter().map(|c| c.name.as_str()))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// `Title (Name, Other Name)`
    pub fn summary(&self) -> String {
        format!("{} ({})", self.title, self.presenters())
    }

    /// Abstract paragraphs separated by blank lines, `None` when empty.
    pub fn description(&self) -> Option<String> {
        let description = self.abstract_paragraphs.join("\n\n");
        (!description.is_empty()).then_some(description)
    }
}

/// Read and validate a speakers file.
pub fn load_speakers(path: &Path) -> FossNorthResult<Vec<Speaker>> {
    let content = std::fs::read_to_string(path)?;
    parse_speakers(&content)
}

/// Parse a YAML list of speaker entries.
///
/// The document is first read as loose YAML so that validation errors can
/// point at the offending entry.
pub fn parse_speakers(content: &str) -> FossNorthResult<Vec<Speaker>> {
    let entries: Vec<serde_yaml::Value> = serde_yaml::from_str(content)
        .map_err(|e| FossNorthError::ScheduleParse(e.to_string()))?;

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            serde_yaml::from_value(entry).map_err(|e| FossNorthError::InvalidSpeaker {
                index,
                reason: e.to_string(),
            })
        })
        .collect()
}
