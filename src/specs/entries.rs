// src/specs/entries.rs
// One generation table → GenerationSection.
// Any deviation from the expected nesting fails the whole table; rows are never skipped.

use scraper::ElementRef;

use crate::config::TableLayout;
use crate::core::html;
use crate::error::ScrapeError;
use crate::report::{GameLocationEntry, GenerationSection};

use super::markup::normalize_children;

pub fn extract_entries(
    table: ElementRef<'_>,
    layout: &TableLayout,
) -> Result<GenerationSection, ScrapeError> {
    let rows: Vec<ElementRef<'_>> = html::rows(table).collect();

    let label_row = rows
        .get(layout.label_row)
        .copied()
        .ok_or(ScrapeError::mismatch("generation label row"))?;
    let label = read_label(label_row, layout)?;

    let content_row = rows
        .get(layout.content_row)
        .copied()
        .ok_or(ScrapeError::mismatch("game/location row"))?;
    let games_table = html::find(content_row, "td")
        .and_then(|td| html::find(td, "table"))
        .ok_or(ScrapeError::mismatch("game/location table"))?;

    let entries = html::rows(games_table)
        .map(|row| read_entry(row, layout))
        .collect::<Result<Vec<_>, _>>()?;

    logd!("{label}: {} entries", entries.len());
    GenerationSection::new(label, entries).ok_or(ScrapeError::mismatch("generation label"))
}

fn read_label(row: ElementRef<'_>, layout: &TableLayout) -> Result<String, ScrapeError> {
    let label = html::find(row, "th")
        .and_then(|th| html::find(th, layout.label_tag))
        .map(|el| html::text(el).trim().to_string())
        .ok_or(ScrapeError::mismatch("generation label"))?;

    if label.is_empty() {
        return Err(ScrapeError::mismatch("generation label"));
    }
    Ok(label)
}

fn read_entry(row: ElementRef<'_>, layout: &TableLayout) -> Result<GameLocationEntry, ScrapeError> {
    let games = html::find_all(row, "th")
        .map(|th| {
            html::find(th, layout.game_tag)
                .map(|el| html::text(el).trim().to_string())
                .ok_or(ScrapeError::mismatch("game name"))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let cell = location_cell(row)?;
    let location = normalize_children(cell).trim().to_string();

    GameLocationEntry::new(games, vec![location]).ok_or(ScrapeError::mismatch("game header"))
}

/// `td > table > tr > td`: the cell holding the location markup.
fn location_cell(row: ElementRef<'_>) -> Result<ElementRef<'_>, ScrapeError> {
    let td = html::find(row, "td").ok_or(ScrapeError::mismatch("location cell"))?;
    let table = html::find(td, "table").ok_or(ScrapeError::mismatch("location table"))?;
    html::find(table, "tr")
        .and_then(|tr| html::find(tr, "td"))
        .ok_or(ScrapeError::mismatch("location table cell"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generation(body: &str) -> String {
        format!(r#"<html><body><table id="gen">{body}</table></body></html>"#)
    }

    fn extract(doc: &str) -> Result<GenerationSection, ScrapeError> {
        let doc = html::parse(doc);
        let table = html::find_by_id(&doc, "gen").unwrap();
        extract_entries(table, &TableLayout::default())
    }

    const LABEL: &str = r#"<tr><th><small>Generation I</small></th></tr>"#;

    #[test]
    fn reads_label_and_rows() {
        let doc = generation(&format!(r#"{LABEL}
            <tr><td><table>
              <tr>
                <th><a><span> Red </span></a></th><th><a><span>Blue</span></a></th>
                <td><table><tr><td><a href="/wiki/Route_1">Route 1</a><br>Route 2</td></tr></table></td>
              </tr>
              <tr>
                <th><span>Yellow</span></th>
                <td><table><tr><td> Trade </td></tr></table></td>
              </tr>
            </table></td></tr>"#));

        let section = extract(&doc).unwrap();
        assert_eq!(section.label(), "Generation I");
        assert_eq!(section.entries().len(), 2);
        assert_eq!(section.entries()[0].games(), ["Red", "Blue"]);
        assert_eq!(section.entries()[0].locations(), ["Route 1, Route 2"]);
        assert_eq!(section.entries()[1].to_string(), "Yellow: Trade");
    }

    #[test]
    fn missing_label_is_structural() {
        let doc = generation(r#"<tr><th>Generation I</th></tr>
            <tr><td><table></table></td></tr>"#);
        let err = extract(&doc).unwrap_err();
        assert!(matches!(err, ScrapeError::StructuralMismatch { expected: "generation label" }));
    }

    #[test]
    fn blank_label_is_structural() {
        let doc = generation(r#"<tr><th><small>  </small></th></tr>
            <tr><td><table></table></td></tr>"#);
        assert!(matches!(extract(&doc), Err(ScrapeError::StructuralMismatch { .. })));
    }

    #[test]
    fn header_without_span_is_structural() {
        let doc = generation(&format!(r#"{LABEL}
            <tr><td><table>
              <tr><th>Red</th><td><table><tr><td>Route 1</td></tr></table></td></tr>
            </table></td></tr>"#));
        let err = extract(&doc).unwrap_err();
        assert!(matches!(err, ScrapeError::StructuralMismatch { expected: "game name" }));
    }

    #[test]
    fn location_without_nested_table_is_structural() {
        let doc = generation(&format!(r#"{LABEL}
            <tr><td><table>
              <tr><th><span>Red</span></th><td>Route 1</td></tr>
            </table></td></tr>"#));
        let err = extract(&doc).unwrap_err();
        assert!(matches!(err, ScrapeError::StructuralMismatch { expected: "location table" }));
    }

    #[test]
    fn row_without_games_is_structural() {
        let doc = generation(&format!(r#"{LABEL}
            <tr><td><table>
              <tr><td><table><tr><td>Route 1</td></tr></table></td></tr>
            </table></td></tr>"#));
        let err = extract(&doc).unwrap_err();
        assert!(matches!(err, ScrapeError::StructuralMismatch { expected: "game header" }));
    }

    #[test]
    fn missing_content_row_is_structural() {
        let doc = generation(LABEL);
        let err = extract(&doc).unwrap_err();
        assert!(matches!(err, ScrapeError::StructuralMismatch { expected: "game/location row" }));
    }

    #[test]
    fn empty_games_table_gives_empty_section() {
        let doc = generation(&format!(r#"{LABEL}<tr><td><table></table></td></tr>"#));
        let section = extract(&doc).unwrap();
        assert!(section.entries().is_empty());
    }
}
