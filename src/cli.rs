// src/cli.rs
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;

use crate::config::FetchOptions;
use crate::config::consts::{BASE_URL, TIMEOUT_SECS};
use crate::core::HttpFetcher;
use crate::error::ScrapeError;
use crate::runner::{self, write_report};
use crate::specs;

#[derive(Debug, Parser)]
#[command(name = "dex_scrape", version, about = "Look up Pokémon game locations on Bulbapedia")]
pub struct Args {
    /// Pokémon to look up, then exit. Without names an interactive prompt starts.
    pub names: Vec<String>,

    /// Read a saved Pokémon page from disk instead of fetching.
    #[arg(long, value_name = "PATH", conflicts_with = "names")]
    pub file: Option<PathBuf>,

    /// Wiki base URL the page title is appended to.
    #[arg(long, value_name = "URL", default_value = BASE_URL)]
    pub base_url: String,

    /// Request timeout in seconds.
    #[arg(long, value_name = "SECS", default_value_t = TIMEOUT_SECS)]
    pub timeout: u64,

    /// Debug logging on stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions::default()
            .with_base_url(&self.base_url)
            .with_timeout(self.timeout)
    }
}

pub enum Mode {
    Console,
    Batch(Vec<String>),
    Offline(PathBuf),
}

pub fn detect_mode(args: &Args) -> Mode {
    if let Some(path) = &args.file {
        return Mode::Offline(path.clone());
    }
    if args.names.is_empty() {
        Mode::Console
    } else {
        Mode::Batch(args.names.clone())
    }
}

pub fn run(args: &Args) -> Result<(), ScrapeError> {
    let stdout = io::stdout();

    match detect_mode(args) {
        Mode::Offline(path) => {
            logf!("Reading {}", path.display());
            let doc = std::fs::read_to_string(&path)?;
            let report = specs::extract_str(&doc)?;
            write_report(&mut stdout.lock(), &report)?;
        }
        Mode::Console => {
            let fetcher = HttpFetcher::new(args.fetch_options())?;
            runner::console(&fetcher, io::stdin().lock(), stdout.lock())?;
        }
        Mode::Batch(names) => {
            let fetcher = HttpFetcher::new(args.fetch_options())?;
            let mut out = stdout.lock();
            for (name, result) in names.iter().zip(runner::lookup_many(&fetcher, &names)) {
                match result {
                    Ok(report) => write_report(&mut out, &report)?,
                    Err(e) => writeln!(out, "{}\n", runner::failure_message(name, &e))?,
                }
            }
            out.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_names_means_console() {
        let args = Args::parse_from(["dex_scrape"]);
        assert!(matches!(detect_mode(&args), Mode::Console));
        assert_eq!(args.fetch_options(), FetchOptions::default());
    }

    #[test]
    fn names_mean_batch() {
        let args = Args::parse_from(["dex_scrape", "Pikachu", "Mr. Mime"]);
        match detect_mode(&args) {
            Mode::Batch(names) => assert_eq!(names, ["Pikachu", "Mr. Mime"]),
            _ => panic!("expected batch mode"),
        }
    }

    #[test]
    fn flags_override_fetch_options() {
        let args = Args::parse_from(["dex_scrape", "--base-url", "http://localhost/wiki/", "--timeout", "3"]);
        let opts = args.fetch_options();
        assert_eq!(opts.base_url, "http://localhost/wiki/");
        assert_eq!(opts.timeout.as_secs(), 3);
    }

    #[test]
    fn file_conflicts_with_names() {
        assert!(Args::try_parse_from(["dex_scrape", "--file", "page.html", "Pikachu"]).is_err());
        let args = Args::parse_from(["dex_scrape", "--file", "page.html"]);
        assert!(matches!(detect_mode(&args), Mode::Offline(_)));
    }
}
