// src/runner.rs
use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crate::config::consts::{REQUEST_PAUSE_MS, WORKERS};
use crate::core::net::{self, Fetch};
use crate::error::ScrapeError;
use crate::report::LocationReport;
use crate::specs;

pub const WELCOME: [&str; 2] = [
    ">Welcome to Pokémon game locations search.",
    ">Searches website 'https://bulbapedia.bulbagarden.net' for Pokémon game locations.",
];
pub const PROMPT: &str = ">Please enter a Pokémon name, or 'exit' to exit: ";
pub const EMPTY_INPUT: &str = "Please enter at least 1 character to search.";
pub const FAREWELL: &str = "May Pokémon RNG be ever in your favor.";
pub const EXIT_TOKEN: &str = "exit";

/// What the console should do with one line of input.
#[derive(Debug)]
pub enum Reply {
    Exit,
    /// Input rejected before any request; show the message and prompt again.
    Retry(String),
    Report(LocationReport),
    Failure(String),
}

/// Fetch, vet, parse and extract one entity.
pub fn lookup<F: Fetch + ?Sized>(fetcher: &F, name: &str) -> Result<LocationReport, ScrapeError> {
    let page = fetcher.fetch(name)?;
    let body = net::accept(page)?;
    specs::extract_str(&body)
}

pub fn respond<F: Fetch + ?Sized>(fetcher: &F, input: &str) -> Reply {
    if input == EXIT_TOKEN {
        return Reply::Exit;
    }
    if input.trim().is_empty() {
        return Reply::Retry(failure_message(input, &ScrapeError::EmptyInput));
    }
    match lookup(fetcher, input) {
        Ok(report) => Reply::Report(report),
        Err(e) => Reply::Failure(failure_message(input, &e)),
    }
}

/// User-facing text for a failed lookup of `name`.
pub fn failure_message(name: &str, err: &ScrapeError) -> String {
    match err {
        ScrapeError::EmptyInput => s!(EMPTY_INPUT),
        e if e.is_transport() => {
            loge!("Lookup of {name:?} failed: {e}");
            format!(
                "Pokémon {name} does not exist! Check for spelling errors \
                 or extra characters and try again."
            )
        }
        ScrapeError::SectionNotFound { entity } => {
            let shown = if entity.is_empty() { name } else { entity.as_str() };
            format!("Non-legitimate Pokémon {shown}, may be a glitched or ambiguous Pokémon")
        }
        e => {
            loge!("Lookup of {name:?} failed: {e}");
            format!("Could not read the game locations for Pokémon {name}: {e}")
        }
    }
}

/// Report block as printed: blank line, rendered lines, blank line.
pub fn write_report<W: Write>(out: &mut W, report: &LocationReport) -> io::Result<()> {
    writeln!(out)?;
    for line in report.render() {
        writeln!(out, "{line}")?;
    }
    writeln!(out)
}

/// Interactive loop: prompt, read a line, answer, repeat until `exit` or end of input.
pub fn console<F, R, W>(fetcher: &F, mut input: R, mut out: W) -> io::Result<()>
where
    F: Fetch + ?Sized,
    R: BufRead,
    W: Write,
{
    for line in WELCOME {
        writeln!(out, "{line}")?;
    }

    let mut buf = String::new();
    loop {
        writeln!(out)?;
        write!(out, "{PROMPT}")?;
        out.flush()?;

        buf.clear();
        if input.read_line(&mut buf)? == 0 {
            logd!("input closed");
            writeln!(out)?;
            break;
        }
        let line = buf.trim_end_matches(['\n', '\r']);

        match respond(fetcher, line) {
            Reply::Exit => break,
            Reply::Retry(msg) | Reply::Failure(msg) => writeln!(out, "{msg}\n")?,
            Reply::Report(report) => write_report(&mut out, &report)?,
        }
    }

    writeln!(out, "\n{FAREWELL}")?;
    out.flush()
}

/// Look up several entities on a small worker pool. Results come back in input order.
pub fn lookup_many<F>(fetcher: &F, names: &[String]) -> Vec<Result<LocationReport, ScrapeError>>
where
    F: Fetch + Sync + ?Sized,
{
    let next = AtomicUsize::new(0);
    let (tx, rx) = mpsc::channel::<(usize, Result<LocationReport, ScrapeError>)>();
    let workers = WORKERS.min(names.len()).max(1);

    thread::scope(|scope| {
        for _ in 0..workers {
            let tx = tx.clone();
            let next = &next;
            scope.spawn(move || {
                loop {
                    let i = next.fetch_add(1, Ordering::Relaxed);
                    let Some(name) = names.get(i) else { break };
                    let _ = tx.send((i, lookup(fetcher, name)));
                    if next.load(Ordering::Relaxed) < names.len() {
                        thread::sleep(Duration::from_millis(REQUEST_PAUSE_MS)); // be polite
                    }
                }
            });
        }
    });
    drop(tx);

    let mut slots: Vec<Option<Result<LocationReport, ScrapeError>>> =
        names.iter().map(|_| None).collect();
    for (i, result) in rx {
        slots[i] = Some(result);
    }
    slots.into_iter().flatten().collect()
}
