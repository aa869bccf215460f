// src/config/layout.rs
//! Shape of the "Game locations" tables.
//!
//! Every structural assumption the extractor makes lives here, so a change in
//! the wiki's markup is a change to one `TableLayout` value.
//!
//! ```text
//! <h3><span id="Game_locations">…</span></h3>
//! <table>                                   outer table
//!   <tr><td><table>                         one generation table per row
//!     <tr><th><small>Generation I</small></th></tr>        label row
//!     <tr><td><table>                                      content row
//!       <tr>
//!         <th><span>Red</span></th><th><span>Blue</span></th>
//!         <td><table><tr><td>Route 1<br>…</td></tr></table></td>
//!       </tr>
//!     </table></td></tr>
//!   </table></td></tr>
//! </table>
//! ```

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableLayout {
    /// Id of the element inside the section heading.
    pub section_id: &'static str,
    /// Id of the page heading holding the entity title.
    pub heading_id: &'static str,
    /// Text after the entity name in the page heading.
    pub title_suffix: &'static str,

    /// Row of a generation table holding the label.
    pub label_row: usize,
    /// Row of a generation table holding the game/location sub-table.
    pub content_row: usize,
    /// Element inside the label `th` carrying the generation label.
    pub label_tag: &'static str,
    /// Element inside each game `th` carrying the game name.
    pub game_tag: &'static str,
}

impl Default for TableLayout {
    fn default() -> Self {
        Self {
            section_id: SECTION_ID,
            heading_id: HEADING_ID,
            title_suffix: TITLE_SUFFIX,
            label_row: 0,
            content_row: 1,
            label_tag: "small",
            game_tag: "span",
        }
    }
}
