use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "awl",
    about = "Awl: text, data, and time utilities for the terminal",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// TOML config file (default: ./awl.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compare two text files line by line
    Diff(DiffArgs),
    /// Compare two JSON documents structurally
    JsonDiff(JsonDiffArgs),
    /// Format, minify, or validate JSON
    Json(JsonArgs),
    /// Convert between CSV and JSON
    Csv(CsvArgs),
    /// Base64 encode or decode
    Base64(Base64Args),
    /// Convert timestamps and dates, or measure the span between two
    Time(TimeArgs),
    /// Generate UUIDs
    Uuid(UuidArgs),
    /// Keep and follow a collection of sticky notes
    Notes(NotesArgs),
}

#[derive(Args)]
pub struct DiffArgs {
    /// Old file, or - for stdin
    pub old: String,
    /// New file, or - for stdin
    pub new: String,
    /// Also list the differing line indices
    #[arg(long)]
    pub indices: bool,
}

#[derive(Args)]
pub struct JsonDiffArgs {
    /// Old JSON document, or - for stdin
    pub old: String,
    /// New JSON document, or - for stdin
    pub new: String,
    /// Deepest object level the comparison may descend to
    #[arg(long)]
    pub max_depth: Option<usize>,
}

#[derive(Args)]
pub struct JsonArgs {
    #[command(subcommand)]
    pub action: JsonAction,
}

#[derive(Subcommand)]
pub enum JsonAction {
    /// Pretty-print a document
    Fmt {
        /// File to format, or - for stdin
        file: String,
        /// Spaces per indent level (overrides config)
        #[arg(long)]
        indent: Option<usize>,
    },
    /// Strip all insignificant whitespace
    Minify { file: String },
    /// Check validity, reporting the error position
    Validate { file: String },
}

#[derive(Args)]
pub struct CsvArgs {
    #[command(subcommand)]
    pub action: CsvAction,
}

#[derive(Subcommand)]
pub enum CsvAction {
    /// CSV text to a JSON array of objects
    ToJson {
        /// File to convert, or - for stdin
        file: String,
        /// Treat the first line as data and synthesize ColumnN names
        #[arg(long)]
        no_headers: bool,
    },
    /// JSON array of objects to CSV text
    FromJson {
        /// File to convert, or - for stdin
        file: String,
        /// Omit the header line from the output
        #[arg(long)]
        no_headers: bool,
    },
}

#[derive(Args)]
pub struct Base64Args {
    #[command(subcommand)]
    pub action: Base64Action,
}

#[derive(Subcommand)]
pub enum Base64Action {
    /// Encode text (or a file's bytes) as Base64
    Encode {
        text: Option<String>,
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Decode Base64 into UTF-8 text
    Decode {
        text: Option<String>,
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

#[derive(Args)]
pub struct TimeArgs {
    #[command(subcommand)]
    pub action: TimeAction,
}

#[derive(Subcommand)]
pub enum TimeAction {
    /// Render one instant every way: timestamps, local, UTC, ISO 8601
    Convert {
        /// Timestamp or date string; defaults to the current time
        input: Option<String>,
        #[arg(long, default_value = "timestamp-to-date")]
        mode: TimeMode,
    },
    /// Absolute difference between two dates
    Diff { start: String, end: String },
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum TimeMode {
    TimestampToDate,
    DateToTimestamp,
    LocalToUtc,
    UtcToLocal,
}

impl From<TimeMode> for awl_time::ConversionMode {
    fn from(mode: TimeMode) -> Self {
        match mode {
            TimeMode::TimestampToDate => Self::TimestampToDate,
            TimeMode::DateToTimestamp => Self::DateToTimestamp,
            TimeMode::LocalToUtc => Self::LocalToUtc,
            TimeMode::UtcToLocal => Self::UtcToLocal,
        }
    }
}

#[derive(Args)]
pub struct UuidArgs {
    /// How many ids to generate (1 to 100)
    #[arg(short = 'n', long, default_value = "1")]
    pub count: usize,
    /// Mint time-ordered v7 ids instead of random v4
    #[arg(long)]
    pub v7: bool,
    /// Plain lines, or a JSON/CSV export document
    #[arg(long, default_value = "text")]
    pub output: UuidOutput,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum UuidOutput {
    Text,
    Json,
    Csv,
}

#[derive(Args)]
pub struct NotesArgs {
    /// Note collection file (overrides config)
    #[arg(long)]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub action: NotesAction,
}

#[derive(Subcommand)]
pub enum NotesAction {
    /// Add a note
    Add {
        title: String,
        content: Option<String>,
        /// Display color as a hex string, e.g. #a5f3fc
        #[arg(long)]
        color: Option<String>,
    },
    /// List every note, newest first
    List,
    /// Remove a note by id
    Remove { id: uuid::Uuid },
    /// Follow the collection and print a snapshot after every change
    Watch,
}
