// tests/common/mod.rs
//
// Canned pages and a fake fetcher shared by the integration tests.
//
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use dex_scrape::core::{Fetch, RawPage};
use dex_scrape::ScrapeError;

/// One generation table in the wiki's layout. Rows are `("Red/Blue", "<location markup>")`.
pub fn generation(label: &str, rows: &[(&str, &str)]) -> String {
    let mut body = String::new();
    for (games, location) in rows {
        body.push_str("<tr>");
        for game in games.split('/') {
            body.push_str(&format!(r#"<th><a href="/wiki/Pokémon_{game}"><span>{game}</span></a></th>"#));
        }
        body.push_str(&format!(
            r#"<td><table><tbody><tr><td>{location}</td></tr></tbody></table></td>"#
        ));
        body.push_str("</tr>");
    }
    format!(
        r#"<tr><td><table>
             <tr><th colspan="2"><small>{label}</small></th></tr>
             <tr><td><table>{body}</table></td></tr>
           </table></td></tr>"#
    )
}

pub fn page(title: &str, generations: &[String]) -> String {
    format!(
        r#"<!DOCTYPE html>
        <html><head><title>{title} - Bulbapedia</title></head>
        <body>
          <h1 id="firstHeading" class="firstHeading">{title}</h1>
          <h2><span class="mw-headline" id="Biology">Biology</span></h2>
          <p>Some prose.</p>
          <h3><span class="mw-headline" id="Game_locations">Game locations</span></h3>
          <table style="background: #FFF">
            <tr><th>Game locations</th></tr>
            {}
          </table>
          <h3><span class="mw-headline" id="Held_items">Held items</span></h3>
          <table><tr><td><table><tr><td>not a generation</td></tr></table></td></tr></table>
        </body></html>"#,
        generations.concat()
    )
}

pub fn two_generation_page() -> String {
    page(
        "Pidgey (Pokémon)",
        &[
            generation("Generation I", &[("Red/Blue", "Route 1")]),
            generation("Generation II", &[("Red/Blue", "Route 1")]),
        ],
    )
}

/// Serves canned responses by name and counts requests.
#[derive(Default)]
pub struct FakeFetcher {
    pages: HashMap<String, RawPage>,
    pub requests: Mutex<Vec<String>>,
}

impl FakeFetcher {
    pub fn with(mut self, name: &str, page: RawPage) -> Self {
        self.pages.insert(name.to_string(), page);
        self
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl Fetch for FakeFetcher {
    fn fetch(&self, entity: &str) -> Result<RawPage, ScrapeError> {
        self.requests.lock().unwrap().push(entity.to_string());
        Ok(self.pages.get(entity).cloned().unwrap_or(RawPage {
            status: 404,
            content_type: Some("text/html".to_string()),
            body: b"<html><body>There is currently no text in this page.</body></html>".to_vec(),
        }))
    }
}
