use std::env;
use std::fs;

use anyhow::{anyhow, Context, Result};
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

use dems::models::Subject;
use dems::services::{build_board, next_exam, ExamStatus};
use dems::{parse_datetime_flexible, parse_utc_offset};

#[derive(Debug)]
struct Args {
    subjects_path: String,
    now: PrimitiveDateTime,
    offset: UtcOffset,
    json: bool,
}

fn main() -> Result<()> {
    let subjects_path =
        env::var("DEMS_SUBJECTS_FILE").unwrap_or_else(|_| "subjects.json".to_string());
    let now = OffsetDateTime::now_utc();
    let args = parse_args(
        env::args().skip(1),
        subjects_path,
        PrimitiveDateTime::new(now.date(), now.time()),
    )?;

    let payload = fs::read_to_string(&args.subjects_path)
        .with_context(|| format!("Failed to read {}", args.subjects_path))?;
    let subjects: Vec<Subject> = serde_json::from_str(&payload)
        .with_context(|| format!("Invalid subjects JSON in {}", args.subjects_path))?;

    let board = build_board(&subjects, args.now, args.offset);
    let next = next_exam(&subjects, args.now, args.offset);

    if args.json {
        let output = serde_json::json!({ "board": board, "next_exam": next });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print_column("Not available", &board.not_available);
    print_column("In progress", &board.in_progress);
    print_column("Completed", &board.completed);
    match next {
        Some(status) => println!("\nNext: {} ({})", status.name, status.countdown),
        None => println!("\nNext: nothing pending"),
    }

    Ok(())
}

fn print_column(title: &str, statuses: &[ExamStatus]) {
    println!("{title} ({})", statuses.len());
    for status in statuses {
        println!(
            "  {:<24} {:<10} {:<32} {}",
            status.name, status.code, status.countdown, status.window
        );
    }
}

fn parse_args<I>(raw_args: I, subjects_path: String, now: PrimitiveDateTime) -> Result<Args>
where
    I: IntoIterator<Item = String>,
{
    let mut args = Args { subjects_path, now, offset: UtcOffset::UTC, json: false };

    let mut raw_args = raw_args.into_iter();
    while let Some(arg) = raw_args.next() {
        match arg.as_str() {
            "--subjects" => {
                args.subjects_path =
                    raw_args.next().ok_or_else(|| anyhow!("--subjects missing value"))?;
            }
            "--now" => {
                let raw = raw_args.next().ok_or_else(|| anyhow!("--now missing value"))?;
                args.now = parse_datetime_flexible(&raw)
                    .ok_or_else(|| anyhow!("--now must be an RFC 3339 datetime, got {raw}"))?;
            }
            "--offset" => {
                let raw = raw_args.next().ok_or_else(|| anyhow!("--offset missing value"))?;
                args.offset = parse_utc_offset(&raw)
                    .ok_or_else(|| anyhow!("--offset must look like +02:00 or UTC, got {raw}"))?;
            }
            "--json" => args.json = true,
            _ => return Err(anyhow!("Unknown argument: {arg}")),
        }
    }

    Ok(args)
}
