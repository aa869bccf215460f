// src/specs/locations.rs
//! Scraping rules for a Pokémon page's "Game locations" section.
//!
//! Purpose:
//! - Read the entity name from `h1#firstHeading` (`"Pikachu (Pokémon)"` → `"Pikachu"`).
//! - Find the `#Game_locations` anchor, step up to its heading, take the next `table`.
//! - Hand each generation table to `entries::extract_entries` and collect the sections.
//!
//! Non-Responsibilities:
//! - **No networking.** Callers fetch and vet the page first (`core::net`).
//! - **No output.** The report renders to lines; the runner prints them.

use scraper::Html;

use crate::config::TableLayout;
use crate::core::{html, sanitize};
use crate::error::ScrapeError;
use crate::report::LocationReport;

use super::entries::extract_entries;
use super::generations::locate_generation_tables;

pub fn extract(doc: &Html) -> Result<LocationReport, ScrapeError> {
    extract_with(doc, &TableLayout::default())
}

pub fn extract_str(doc: &str) -> Result<LocationReport, ScrapeError> {
    extract(&html::parse(doc))
}

pub fn extract_with(doc: &Html, layout: &TableLayout) -> Result<LocationReport, ScrapeError> {
    let entity = entity_name(doc, layout);

    // A missing section outranks a missing heading: both mean "not a normal entity page".
    let Some(anchor) = html::find_by_id(doc, layout.section_id) else {
        logd!("no #{} on page for {entity:?}", layout.section_id);
        return Err(ScrapeError::SectionNotFound { entity: entity.unwrap_or_default() });
    };
    let entity = entity.ok_or(ScrapeError::mismatch("page heading"))?;

    let heading = html::parent_element(anchor).ok_or(ScrapeError::mismatch("section heading"))?;
    let outer = html::next_sibling(heading, "table").ok_or(ScrapeError::mismatch("locations table"))?;

    let tables = locate_generation_tables(outer);
    logd!("{entity}: {} generation tables", tables.len());

    let mut report = LocationReport::builder(entity);
    for table in tables {
        report.push(extract_entries(table, layout)?);
    }
    Ok(report.build())
}

fn entity_name(doc: &Html, layout: &TableLayout) -> Option<String> {
    let heading = html::find_by_id(doc, layout.heading_id)?;
    let name = sanitize::display_name(&html::text(heading), layout.title_suffix);
    (!name.is_empty()).then_some(name)
}
