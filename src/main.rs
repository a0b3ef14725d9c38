//! Interactive shell around the tallysort engine.
//!
//! The shell owns everything the engine refuses to do: prompting, input
//! validation, menu parsing, and tabular rendering. It hands the engine a
//! validated [`RecordSet`] and formats whatever [`Outcome`] comes back.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tallysort::prelude::*;
use tracing_subscriber::EnvFilter;

/// Widest name the record table renders without wrapping.
const NAME_WIDTH: usize = 30;
/// Widest category the record table renders without wrapping.
const CATEGORY_WIDTH: usize = 20;

#[derive(Debug, Parser)]
#[command(name = "tallysort")]
#[command(about = "Register records and race three classic sorts against them")]
struct Cli {
    /// Maximum number of records that can be registered.
    #[arg(long, default_value_t = MAX_RECORDS)]
    capacity: usize,

    /// Log engine activity to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();

    let capacity = cli.capacity.max(1);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let set = register_records(&mut lines, capacity)?;
    if set.is_empty() {
        println!("\nNo records registered. Nothing to organize.");
        return Ok(());
    }

    let mut organizer = Dispatcher::new(set);

    loop {
        print_menu();
        let Some(choice) = prompt(&mut lines, "choice (0-5): ")? else {
            break;
        };

        let request = match choice.trim() {
            "1" => Request::SortByName,
            "2" => Request::SortByCategory,
            "3" => Request::SortByPriority,
            "4" => {
                let Some(query) = prompt(&mut lines, "name to search for: ")? else {
                    break;
                };
                Request::SearchByName(query.trim().to_string())
            }
            "5" => Request::ShowOriginal,
            "0" => Request::Exit,
            other => {
                println!("'{}' is not handled. Pick an option from 0 to 5.", other.trim());
                continue;
            }
        };

        match organizer.dispatch(request) {
            Ok(Outcome::Sorted(report)) => print_report(&report, organizer.working()),
            Ok(Outcome::Found { index }) => {
                let record = &organizer.working()[index];
                println!(
                    "\nFound '{}' at position {}: category '{}', priority {}.",
                    record.name,
                    index + 1,
                    record.category,
                    record.priority
                );
            }
            Ok(Outcome::NotFound) => println!("\nNo record with that name."),
            Ok(Outcome::Original) => print_table(organizer.original()),
            Ok(Outcome::NothingToDo) => println!("\nNothing to operate on."),
            Ok(Outcome::Exit) => break,
            Err(err) => println!("\n{err}."),
        }
    }

    println!("\nDone organizing.");
    Ok(())
}

/// Field-by-field registration, ending on `done`, end-of-input, or a full set.
///
/// A record with an invalid priority is discarded and the user re-prompted;
/// nothing partially entered ever reaches the engine.
fn register_records(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    capacity: usize,
) -> Result<RecordSet> {
    let mut set = RecordSet::with_capacity(capacity);

    println!("Register up to {capacity} records. Enter 'done' as the name to finish.");
    while set.len() < set.capacity() {
        let header = format!("\nrecord {} name: ", set.len() + 1);
        let Some(name) = prompt(lines, &header)? else {
            break;
        };
        let name = clip(name.trim(), NAME_WIDTH);
        if name.is_empty() {
            continue;
        }
        if name.eq_ignore_ascii_case("done") {
            break;
        }

        let Some(category) = prompt(lines, "category: ")? else {
            break;
        };
        let category = clip(category.trim(), CATEGORY_WIDTH);

        let Some(priority) = prompt(lines, "priority (1-10): ")? else {
            break;
        };
        let priority: u8 = match priority.trim().parse() {
            Ok(p @ 1..=10) => p,
            _ => {
                println!("Priority must be an integer from 1 to 10. Record discarded.");
                continue;
            }
        };

        if let Err(err) = set.push(Record::new(name, category, priority)) {
            println!("{err}.");
            break;
        }
    }

    println!("\n{} record(s) registered.", set.len());
    Ok(set)
}

fn print_menu() {
    println!();
    println!("--- OPERATIONS ---");
    println!("1. Sort by name (bubble sort)");
    println!("2. Sort by category (insertion sort)");
    println!("3. Sort by priority (selection sort)");
    println!("4. Search by name (only after a name sort)");
    println!("5. Show original records");
    println!("0. Exit");
}

fn print_report(report: &SortReport, records: &[Record]) {
    println!();
    println!("algorithm:   {}", report.algorithm);
    println!("criterion:   {}", report.criterion);
    println!("comparisons: {}", report.comparisons);
    println!("elapsed:     {:.4} ms", report.elapsed_ms);
    print_table(records);
}

fn print_table(records: &[Record]) {
    if records.is_empty() {
        println!("\nNo records to show.");
        return;
    }

    println!();
    println!(
        "| {:<NAME_WIDTH$} | {:<CATEGORY_WIDTH$} | {:>8} |",
        "Name", "Category", "Priority"
    );
    println!(
        "|{:-<width_a$}|{:-<width_b$}|{:-<10}|",
        "",
        "",
        "",
        width_a = NAME_WIDTH + 2,
        width_b = CATEGORY_WIDTH + 2
    );
    for record in records {
        println!(
            "| {:<NAME_WIDTH$} | {:<CATEGORY_WIDTH$} | {:>8} |",
            record.name, record.category, record.priority
        );
    }
}

/// Writes `text` as a prompt and reads one line, `None` at end of input.
fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    text: &str,
) -> Result<Option<String>> {
    print!("{text}");
    io::stdout().flush().context("flushing prompt")?;
    match lines.next() {
        Some(line) => Ok(Some(line.context("reading stdin")?)),
        None => Ok(None),
    }
}

/// Truncates to the table's storage width, on a character boundary.
fn clip(value: &str, max_chars: usize) -> String {
    value.chars().take(max_chars).collect()
}
