use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::{bail, Context};
use chrono::Utc;
use colored::Colorize;
use serde_json::json;
use tokio::sync::broadcast::error::RecvError;
use tracing::warn;

use awl_diff::{LineChange, ValueChange};
use awl_id::IdVersion;
use awl_notes::{JsonFileNoteStore, Note, NoteFeed, NoteInput, NoteSnapshot};

use crate::cli::*;
use crate::config::AwlConfig;
use crate::input::{read_file, read_input, STDIN_ARG};

/// Collection name note snapshots publish under.
const NOTES_COLLECTION: &str = "notes";

/// How often `notes watch` polls the backing file.
const WATCH_POLL_INTERVAL: Duration = Duration::from_millis(500);

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = AwlConfig::load(cli.config.as_deref())?;
    match cli.command {
        Command::Diff(args) => cmd_diff(args, &cli.format),
        Command::JsonDiff(args) => cmd_json_diff(args, &cli.format),
        Command::Json(args) => cmd_json(args, &config),
        Command::Csv(args) => cmd_csv(args, &config),
        Command::Base64(args) => cmd_base64(args),
        Command::Time(args) => cmd_time(args, &cli.format),
        Command::Uuid(args) => cmd_uuid(args),
        Command::Notes(args) => cmd_notes(args, &config, &cli.format),
    }
}

/// Reads the two sides of a diff; at most one may be stdin.
fn two_inputs(a: &str, b: &str) -> anyhow::Result<(String, String)> {
    if a == STDIN_ARG && b == STDIN_ARG {
        bail!("only one input can come from stdin");
    }
    Ok((read_input(a)?, read_input(b)?))
}

fn cmd_diff(args: DiffArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let (old, new) = two_inputs(&args.old, &args.new)?;
    if old.trim().is_empty() || new.trim().is_empty() {
        bail!("both inputs must contain text");
    }

    let diff = awl_diff::diff_lines(&old, &new);
    let indices: Option<Vec<usize>> = args.indices.then(|| {
        awl_diff::differing_line_indices(&old, &new)
            .into_iter()
            .collect()
    });

    match format {
        OutputFormat::Json => {
            let mut doc = json!({
                "changes": diff.changes,
                "same": diff.unchanged(),
                "removed": diff.removals(),
                "added": diff.additions(),
            });
            if let Some(ref indices) = indices {
                doc["indices"] = json!(indices);
            }
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
        OutputFormat::Text => {
            for change in &diff.changes {
                match change {
                    LineChange::Added(text) => println!("{}", format!("+ {text}").green()),
                    LineChange::Removed(text) => println!("{}", format!("- {text}").red()),
                    LineChange::Unchanged(text) => println!("  {}", text.dimmed()),
                }
            }
            println!();
            println!(
                "{}",
                format!(
                    "{} same, {} removed, {} added",
                    diff.unchanged(),
                    diff.removals(),
                    diff.additions()
                )
                .dimmed()
            );
            if let Some(indices) = indices {
                let list = indices
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                println!("{}", format!("differing lines: {list}").dimmed());
            }
        }
    }
    Ok(())
}

fn cmd_json_diff(args: JsonDiffArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let (old_text, new_text) = two_inputs(&args.old, &args.new)?;
    let old = awl_json::parse(&old_text).with_context(|| format!("parsing {}", args.old))?;
    let new = awl_json::parse(&new_text).with_context(|| format!("parsing {}", args.new))?;

    let max_depth = args.max_depth.unwrap_or(awl_diff::DEFAULT_MAX_DEPTH);
    let diff = awl_diff::diff_values_with_limit(&old, &new, max_depth)?;

    match format {
        OutputFormat::Json => {
            let doc = json!({
                "changes": diff.changes,
                "added": diff.additions(),
                "removed": diff.removals(),
                "modified": diff.modifications(),
            });
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
        OutputFormat::Text => {
            if diff.is_empty() {
                println!("{}", "documents are structurally identical".green());
                return Ok(());
            }
            for change in &diff.changes {
                match change {
                    ValueChange::Added { path, new } => {
                        println!("{} {}: {}", "+".green().bold(), path.green(), compact(new));
                    }
                    ValueChange::Removed { path, old } => {
                        println!("{} {}: {}", "-".red().bold(), path.red(), compact(old));
                    }
                    ValueChange::Modified { path, old, new } => {
                        println!(
                            "{} {}: {} {} {}",
                            "~".yellow().bold(),
                            path.yellow(),
                            compact(old),
                            "->".dimmed(),
                            compact(new)
                        );
                    }
                }
            }
            println!();
            println!(
                "{}",
                format!(
                    "{} added, {} removed, {} modified",
                    diff.additions(),
                    diff.removals(),
                    diff.modifications()
                )
                .dimmed()
            );
        }
    }
    Ok(())
}

fn compact(value: &serde_json::Value) -> String {
    awl_json::to_compact_string(value)
}

fn cmd_json(args: JsonArgs, config: &AwlConfig) -> anyhow::Result<()> {
    match args.action {
        JsonAction::Fmt { file, indent } => {
            let text = read_input(&file)?;
            println!("{}", awl_json::format(&text, indent.unwrap_or(config.indent))?);
        }
        JsonAction::Minify { file } => {
            let text = read_input(&file)?;
            println!("{}", awl_json::minify(&text)?);
        }
        JsonAction::Validate { file } => {
            let text = read_input(&file)?;
            awl_json::validate(&text)?;
            println!("{} valid JSON", "✓".green().bold());
        }
    }
    Ok(())
}

fn cmd_csv(args: CsvArgs, config: &AwlConfig) -> anyhow::Result<()> {
    match args.action {
        CsvAction::ToJson { file, no_headers } => {
            let text = read_input(&file)?;
            let value = awl_csv::csv_to_json(&text, !no_headers)?;
            println!("{}", awl_json::to_pretty_string(&value, config.indent)?);
        }
        CsvAction::FromJson { file, no_headers } => {
            let text = read_input(&file)?;
            println!("{}", awl_csv::json_to_csv(&text, !no_headers)?);
        }
    }
    Ok(())
}

fn cmd_base64(args: Base64Args) -> anyhow::Result<()> {
    match args.action {
        Base64Action::Encode { text, file } => {
            let encoded = match (text, file) {
                (Some(_), Some(_)) => bail!("pass either TEXT or --file, not both"),
                (Some(text), None) => awl_codec::encode(&text),
                (None, Some(path)) => {
                    let data = fs::read(&path)
                        .with_context(|| format!("reading {}", path.display()))?;
                    awl_codec::encode_bytes(&data)
                }
                (None, None) => awl_codec::encode(&read_input(STDIN_ARG)?),
            };
            println!("{encoded}");
        }
        Base64Action::Decode { text, file } => {
            let input = match (text, file) {
                (Some(_), Some(_)) => bail!("pass either TEXT or --file, not both"),
                (Some(text), None) => text,
                (None, Some(path)) => read_file(&path)?,
                (None, None) => read_input(STDIN_ARG)?,
            };
            println!("{}", awl_codec::decode_text(&input)?);
        }
    }
    Ok(())
}

fn cmd_time(args: TimeArgs, format: &OutputFormat) -> anyhow::Result<()> {
    match args.action {
        TimeAction::Convert { input, mode } => {
            let input = input.unwrap_or_else(|| Utc::now().timestamp().to_string());
            let conversion = awl_time::convert(&input, mode.into())?;
            match format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&conversion)?);
                }
                OutputFormat::Text => {
                    println!("{} {}", label("unix seconds:"), conversion.unix_seconds);
                    println!("{} {}", label("unix millis:"), conversion.unix_millis);
                    println!("{} {}", label("local:"), conversion.local.bold());
                    println!("{} {}", label("utc:"), conversion.utc);
                    println!("{} {}", label("iso 8601:"), conversion.iso8601.cyan());
                    println!("{} {}", label("timezone:"), conversion.timezone);
                }
            }
        }
        TimeAction::Diff { start, end } => {
            let delta = awl_time::date_diff(&start, &end)?;
            match format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&delta)?);
                }
                OutputFormat::Text => {
                    let tense = if delta.is_past { "earlier" } else { "later" };
                    println!("{} ({tense})", delta.to_string().bold());
                    println!(
                        "{}",
                        format!(
                            "totals: {} seconds, {} minutes, {} hours, {} days",
                            delta.total_seconds,
                            delta.total_minutes,
                            delta.total_hours,
                            delta.total_days
                        )
                        .dimmed()
                    );
                }
            }
        }
    }
    Ok(())
}

/// Pads a label before coloring, so ANSI codes do not skew the column.
fn label(text: &str) -> colored::ColoredString {
    format!("{text:<14}").dimmed()
}

fn cmd_uuid(args: UuidArgs) -> anyhow::Result<()> {
    if args.count == 0 || args.count > 100 {
        bail!("count must be between 1 and 100");
    }
    let version = if args.v7 { IdVersion::V7 } else { IdVersion::V4 };
    let batch = awl_id::generate(args.count, version);

    match args.output {
        UuidOutput::Text => {
            for generated in &batch {
                println!("{}", generated.id);
            }
        }
        UuidOutput::Json => println!("{}", awl_id::export_json(&batch)?),
        UuidOutput::Csv => println!("{}", awl_id::export_csv(&batch)),
    }
    Ok(())
}

fn cmd_notes(args: NotesArgs, config: &AwlConfig, format: &OutputFormat) -> anyhow::Result<()> {
    let path = args.store.unwrap_or_else(|| config.notes_path.clone());
    match args.action {
        NotesAction::Add {
            title,
            content,
            color,
        } => {
            let feed = open_feed(&path)?;
            let mut input = NoteInput::new(title, content.unwrap_or_default());
            if let Some(color) = color {
                input = input.with_color(color);
            }
            let note = feed.add(input)?;
            println!(
                "{} added {}",
                "✓".green().bold(),
                note.id.to_string().yellow()
            );
        }
        NotesAction::Remove { id } => {
            let feed = open_feed(&path)?;
            if feed.remove(&id)? {
                println!("{} removed {}", "✓".green().bold(), id.to_string().yellow());
            } else {
                bail!("no note with id {id}");
            }
        }
        NotesAction::List => {
            let feed = open_feed(&path)?;
            let notes = feed.list()?;
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&notes)?),
                OutputFormat::Text => {
                    if notes.is_empty() {
                        println!("no notes");
                        return Ok(());
                    }
                    for note in &notes {
                        print_note(note);
                    }
                    println!();
                    println!("{}", format!("{} notes", notes.len()).dimmed());
                }
            }
        }
        NotesAction::Watch => cmd_notes_watch(path, format)?,
    }
    Ok(())
}

fn open_feed(path: &Path) -> anyhow::Result<NoteFeed<JsonFileNoteStore>> {
    Ok(NoteFeed::new(
        JsonFileNoteStore::open(path)?,
        NOTES_COLLECTION,
    ))
}

/// Follows the collection file and prints a snapshot after every change,
/// including changes written by other processes.
fn cmd_notes_watch(path: PathBuf, format: &OutputFormat) -> anyhow::Result<()> {
    let feed = Arc::new(NoteFeed::new(
        JsonFileNoteStore::open(&path)?,
        NOTES_COLLECTION,
    ));
    let (initial, mut stream) = feed.subscribe()?;
    render_snapshot(&initial, format)?;

    let poller = Arc::clone(&feed);
    thread::spawn(move || loop {
        thread::sleep(WATCH_POLL_INTERVAL);
        match poller.store().reload() {
            Ok(true) => {
                if let Err(err) = poller.refresh() {
                    warn!(error = %err, "publishing snapshot failed");
                }
            }
            Ok(false) => {}
            Err(err) => warn!(error = %err, "reloading note store failed"),
        }
    });

    loop {
        match stream.blocking_recv() {
            Ok(snapshot) => render_snapshot(&snapshot, format)?,
            Err(RecvError::Lagged(missed)) => warn!(missed, "snapshot stream lagged"),
            Err(RecvError::Closed) => return Ok(()),
        }
    }
}

fn render_snapshot(snapshot: &NoteSnapshot, format: &OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string(snapshot)?),
        OutputFormat::Text => {
            println!(
                "{} {}",
                format!("[{} seq {}]", snapshot.collection, snapshot.seq).cyan(),
                format!("{} notes", snapshot.notes.len()).dimmed()
            );
            for note in &snapshot.notes {
                print_note(note);
            }
            println!();
        }
    }
    Ok(())
}

fn print_note(note: &Note) {
    let stamp = note.created_at.format("%Y-%m-%d %H:%M").to_string();
    println!(
        "{}  {}  {}",
        note.id.to_string().dimmed(),
        tinted(&note.title, &note.color).bold(),
        stamp.dimmed()
    );
    if !note.content.is_empty() {
        println!("    {}", note.content);
    }
}

/// Renders text in the note's stored color when the terminal allows.
fn tinted(text: &str, hex: &str) -> colored::ColoredString {
    match parse_hex_color(hex) {
        Some((r, g, b)) => text.truecolor(r, g, b),
        None => text.normal(),
    }
}

fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colors_parse() {
        assert_eq!(parse_hex_color("#fef3c7"), Some((0xfe, 0xf3, 0xc7)));
        assert_eq!(parse_hex_color("#000000"), Some((0, 0, 0)));
        assert_eq!(parse_hex_color("#FFFFFF"), Some((255, 255, 255)));
    }

    #[test]
    fn bad_hex_colors_do_not_parse() {
        assert_eq!(parse_hex_color("fef3c7"), None);
        assert_eq!(parse_hex_color("#fff"), None);
        assert_eq!(parse_hex_color("#zzzzzz"), None);
        assert_eq!(parse_hex_color("#ffffhärt"), None);
    }

    #[test]
    fn both_sides_cannot_be_stdin() {
        assert!(two_inputs("-", "-").is_err());
    }

    #[test]
    fn two_inputs_read_two_files() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");
        fs::write(&a, "old").unwrap();
        fs::write(&b, "new").unwrap();

        let (old, new) = two_inputs(a.to_str().unwrap(), b.to_str().unwrap()).unwrap();
        assert_eq!(old, "old");
        assert_eq!(new, "new");
    }

    #[test]
    fn base64_rejects_text_and_file_together() {
        let args = Base64Args {
            action: Base64Action::Encode {
                text: Some("x".into()),
                file: Some("y.txt".into()),
            },
        };
        assert!(cmd_base64(args).is_err());
    }

    #[test]
    fn base64_decodes_inline_text() {
        let args = Base64Args {
            action: Base64Action::Decode {
                text: Some("aGVsbG8=".into()),
                file: None,
            },
        };
        assert!(cmd_base64(args).is_ok());
    }

    #[test]
    fn uuid_count_is_bounded() {
        let bad = UuidArgs {
            count: 0,
            v7: false,
            output: UuidOutput::Text,
        };
        assert!(cmd_uuid(bad).is_err());

        let too_many = UuidArgs {
            count: 101,
            v7: false,
            output: UuidOutput::Text,
        };
        assert!(cmd_uuid(too_many).is_err());
    }
}
