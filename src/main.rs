//! Chronological expense-record sorting
//!
//! CLI front end: reads a JSON array of expense records from a file or
//! stdin, sorts it chronologically, and writes the result back out either
//! as JSON or as a per-record date listing.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::process;

use clap::{Arg, Command};

// Import from the library modules
use chronosort::{
    date,
    error::{SortContext, SortError, SortResult},
    radix_sort::{sort_by_date, SortOrder},
    record::Expense,
    EXIT_SUCCESS,
};

fn main() {
    env_logger::init();
    let result = run();
    match result {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("chronosort: {}", e);
            process::exit(e.exit_code());
        }
    }
}

fn run() -> SortResult<i32> {
    let matches = build_cli().get_matches();

    let order = if matches.get_flag("reverse") {
        SortOrder::Descending
    } else {
        SortOrder::Ascending
    };

    let records = read_records(matches.get_one::<String>("file").map(String::as_str))?;
    log::info!("loaded {} expense records", records.len());

    let sorted = sort_by_date(records, order);

    let output = matches.get_one::<String>("output").map(String::as_str);
    if matches.get_flag("dates") {
        write_date_listing(&sorted, output)?;
    } else {
        write_json(&sorted, output)?;
    }

    Ok(EXIT_SUCCESS)
}

fn build_cli() -> Command {
    Command::new("chronosort")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Sort expense records chronologically")
        .long_about(
            "Sort a JSON array of expense records by their effective timestamp \
             (transaction_date, falling back to created_at, then updated_at) using \
             a linear-time radix sort. Records without a parseable timestamp sort \
             at the oldest end.",
        )
        .arg(
            Arg::new("file")
                .help("Input file holding a JSON array of records (use '-' or omit for stdin)")
                .value_name("FILE"),
        )
        .arg(
            Arg::new("reverse")
                .short('r')
                .long("reverse")
                .help("Sort newest first instead of oldest first")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Write result to FILE instead of standard output")
                .value_name("FILE"),
        )
        .arg(
            Arg::new("dates")
                .long("dates")
                .help("Print one 'DATE WEEKDAY NAME AMOUNT' line per record instead of JSON")
                .action(clap::ArgAction::SetTrue),
        )
}

/// Read the record array from a file, or stdin for `-` / no argument.
fn read_records(file: Option<&str>) -> SortResult<Vec<Expense>> {
    let records = match file {
        Some(path) if path != "-" => {
            let file = File::open(path).with_file_context(path)?;
            serde_json::from_reader(BufReader::new(file))?
        }
        _ => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            serde_json::from_str(&input)?
        }
    };
    Ok(records)
}

fn open_output(output: Option<&str>) -> SortResult<Box<dyn Write>> {
    match output {
        Some(path) => {
            let file = File::create(path).with_file_context(path)?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout()))),
    }
}

fn write_json(records: &[Expense], output: Option<&str>) -> SortResult<()> {
    let mut out = open_output(output)?;
    serde_json::to_writer_pretty(&mut out, records)?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

/// Render each record through the strict date normalizer. A record with a
/// missing or malformed timestamp is an error here: a wrong date must not be
/// silently displayed.
fn write_date_listing(records: &[Expense], output: Option<&str>) -> SortResult<()> {
    let mut out = open_output(output)?;
    for record in records {
        let value = record
            .effective_timestamp()
            .ok_or_else(|| SortError::invalid_date_format("<missing timestamp>"))?;
        let day = date::canonical_date_string(value)?;
        let weekday = date::day_of_week(value)?;
        writeln!(
            out,
            "{}  {:<9}  {}  {:.2}",
            day, weekday.week_day, record.name, record.amount
        )?;
    }
    out.flush()?;
    Ok(())
}
