// src/report.rs
//! In-memory result of one extraction: entity → generations → (games, locations).
//!
//! Built with [`ReportBuilder`] in discovery order, read-only afterwards.
//! [`LocationReport::render`] returns display lines; writing them is the caller's job.

use std::fmt;

use crate::core::sanitize::display_width;

/// One row of a generation table: the games sharing it and where to find the entity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameLocationEntry {
    games: Vec<String>,
    locations: Vec<String>,
}

impl GameLocationEntry {
    /// `None` if `games` is empty.
    pub fn new(games: Vec<String>, locations: Vec<String>) -> Option<Self> {
        if games.is_empty() {
            return None;
        }
        Some(Self { games, locations })
    }

    pub fn games(&self) -> &[String] {
        &self.games
    }

    pub fn locations(&self) -> &[String] {
        &self.locations
    }
}

impl fmt::Display for GameLocationEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.games.join("/"), self.locations.join(", "))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationSection {
    label: String,
    entries: Vec<GameLocationEntry>,
}

impl GenerationSection {
    /// `None` if the label is blank.
    pub fn new(label: impl Into<String>, entries: Vec<GameLocationEntry>) -> Option<Self> {
        let label = label.into();
        if label.trim().is_empty() {
            return None;
        }
        Some(Self { label, entries })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn entries(&self) -> &[GameLocationEntry] {
        &self.entries
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocationReport {
    entity: String,
    sections: Vec<GenerationSection>,
}

impl LocationReport {
    pub fn builder(entity: impl Into<String>) -> ReportBuilder {
        ReportBuilder { entity: entity.into(), sections: Vec::new() }
    }

    pub fn entity(&self) -> &str {
        &self.entity
    }

    pub fn sections(&self) -> &[GenerationSection] {
        &self.sections
    }

    pub fn title(&self) -> String {
        join!(&self.entity, " locations:")
    }

    /// Title block, then per section a blank line, the label, its underline and one line per entry.
    pub fn render(&self) -> Vec<String> {
        let title = self.title();
        let mut lines = vec![
            title.clone(),
            "=".repeat(display_width(&title)),
        ];
        for section in &self.sections {
            lines.push(s!());
            lines.push(section.label.clone());
            lines.push("-".repeat(display_width(&section.label)));
            lines.extend(section.entries.iter().map(ToString::to_string));
        }
        lines
    }
}

pub struct ReportBuilder {
    entity: String,
    sections: Vec<GenerationSection>,
}

impl ReportBuilder {
    pub fn push(&mut self, section: GenerationSection) -> &mut Self {
        self.sections.push(section);
        self
    }

    pub fn build(self) -> LocationReport {
        LocationReport { entity: self.entity, sections: self.sections }
    }
}
