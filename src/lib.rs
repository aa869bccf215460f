// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod report;
pub mod runner;
pub mod specs;

pub use error::ScrapeError;
pub use report::{GameLocationEntry, GenerationSection, LocationReport};
