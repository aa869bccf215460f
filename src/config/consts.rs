// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://bulbapedia.bulbagarden.net/wiki/";
pub const PAGE_SUFFIX: &str = "_(Pokémon)";
pub const USER_AGENT: &str = concat!("dex_scrape/", env!("CARGO_PKG_VERSION"));
pub const TIMEOUT_SECS: u64 = 15;

// Page anchors
pub const HEADING_ID: &str = "firstHeading";
pub const TITLE_SUFFIX: &str = "(Pokémon)";
pub const SECTION_ID: &str = "Game_locations";

// Location cell markup
pub const SUPERSCRIPT_TAG: &str = "sup";
pub const GROUP_TAG: &str = "small";
pub const NOTE_CLASS: &str = "explain";
pub const NOTE_ATTR: &str = "title";
pub const BREAK_TAG: &str = "br";

// Concurrency (batch lookups only)
pub const WORKERS: usize = 4;
pub const REQUEST_PAUSE_MS: u64 = 250; // be polite
