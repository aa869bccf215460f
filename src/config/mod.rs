// src/config/mod.rs

pub mod consts;
pub mod layout;
pub mod options;

pub use layout::TableLayout;
pub use options::FetchOptions;
