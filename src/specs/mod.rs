// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific extraction for Bulbapedia Pokémon pages. Everything here is a
//! pure function of an already-parsed document: it encodes *where the ground
//! truth lives in the HTML* and *how to read it*.
//!
//! ## What lives here
//! - **Orchestration** (`locations`): page heading → section anchor → outer table.
//! - **Table walking** (`generations`, `entries`): nested generation tables and
//!   their game/location rows, shaped by `config::TableLayout`.
//! - **Cell normalization** (`markup`): inline markup flattened to one string.
//!
//! ## What does **not** live here
//! - **Networking** (`core::net`), **printing** (`runner`), argument handling (`cli`).
//!
//! ## Typical call chain
//! ```text
//! runner::lookup → net::Fetch::fetch → net::accept
//!                → specs::locations::extract
//!                    ↘ generations::locate_generation_tables
//!                    ↘ entries::extract_entries → markup::normalize
//!                → report::LocationReport::render
//! ```
//!
//! ## Conventions & invariants
//! - A layout deviation is a `StructuralMismatch` for the whole page; no partial reports.
//! - Markup normalization never fails; unknown nodes flatten to their text.
//! - Specs are testable **offline** against inline HTML snippets.
pub mod entries;
pub mod generations;
pub mod locations;
pub mod markup;

pub use locations::{extract, extract_str, extract_with};
