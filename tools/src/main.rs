use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use course::Limits;
use glob::Pattern;
use pr2_tools::{
    decode_course_json, format_report_pretty, init_logging, inspect_course, reencode_course,
};

#[derive(Parser)]
#[command(
    name = "pr2-tools",
    version,
    about = "PR2 course record inspection tools"
)]
struct Cli {
    /// Log more detail to stderr; repeat for more.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Summarize course records.
    Inspect {
        /// Path to a record file or a directory of them.
        record_path: PathBuf,
        /// Verify checksums against this user name.
        #[arg(long)]
        user: Option<String>,
        /// Optional glob filter when inspecting a directory.
        #[arg(long)]
        glob: Option<String>,
        /// Sort inspected records.
        #[arg(long, value_enum)]
        sort: Option<InspectSort>,
        /// Limit the number of inspected records (after sorting).
        #[arg(long)]
        limit: Option<usize>,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,
    },
    /// Decode a record into structured JSON.
    Decode {
        /// Path to the record file.
        record_file: PathBuf,
    },
    /// Re-encode a record and sign it for a user.
    Reencode {
        /// Path to the record file.
        record_file: PathBuf,
        /// User name the new checksum is computed for.
        #[arg(long)]
        user: String,
        /// Write here instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum InspectSort {
    Size,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Json,
    Pretty,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let limits = Limits::default();

    match cli.command {
        Command::Inspect {
            record_path,
            user,
            glob,
            sort,
            limit,
            format,
        } => {
            let paths = if record_path.is_dir() {
                let entries = collect_record_entries(&record_path, glob.as_deref())?;
                let mut entries = maybe_sort_entries(entries, sort);
                let limit = limit.or(sort.map(|InspectSort::Size| 10));
                if let Some(limit) = limit {
                    entries.truncate(limit);
                }
                entries.into_iter().map(|entry| entry.path).collect()
            } else {
                vec![record_path]
            };
            let many = paths.len() > 1;
            for path in paths {
                let raw = load_record(&path)?;
                let report = inspect_course(&raw, user.as_deref(), &limits)
                    .with_context(|| format!("inspect {}", path.display()))?;
                match format {
                    OutputFormat::Json => {
                        let json =
                            serde_json::to_string_pretty(&report).context("serialize json")?;
                        println!("{json}");
                    }
                    OutputFormat::Pretty => {
                        if many {
                            println!("== {} ==", path.display());
                        }
                        print!("{}", format_report_pretty(&report));
                    }
                }
            }
        }
        Command::Decode { record_file } => {
            let raw = load_record(&record_file)?;
            let output = decode_course_json(&raw, &limits)?;
            let json = serde_json::to_string_pretty(&output).context("serialize json")?;
            println!("{json}");
        }
        Command::Reencode {
            record_file,
            user,
            output,
        } => {
            let raw = load_record(&record_file)?;
            let record = reencode_course(&raw, &user, &limits)?;
            match output {
                Some(path) => fs::write(&path, record)
                    .with_context(|| format!("write record {}", path.display()))?,
                None => println!("{record}"),
            }
        }
    }
    Ok(())
}

/// Reads a record file, dropping a trailing line ending.
fn load_record(path: &Path) -> Result<String> {
    let mut raw =
        fs::read_to_string(path).with_context(|| format!("read record {}", path.display()))?;
    let trimmed = raw.trim_end_matches(['\r', '\n']).len();
    raw.truncate(trimmed);
    log::debug!("read {} bytes from {}", raw.len(), path.display());
    Ok(raw)
}

struct RecordEntry {
    path: PathBuf,
    size: u64,
}

fn collect_record_entries(dir: &Path, glob: Option<&str>) -> Result<Vec<RecordEntry>> {
    let mut entries = Vec::new();
    let pattern = match glob {
        Some(value) => Some(Pattern::new(value).context("invalid glob pattern")?),
        None => None,
    };

    for entry in fs::read_dir(dir).with_context(|| format!("read dir {}", dir.display()))? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Some(pattern) = &pattern {
            let matches_name = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| pattern.matches(name));
            if !matches_name && !pattern.matches_path(&path) {
                continue;
            }
        }
        let size = entry.metadata()?.len();
        entries.push(RecordEntry { path, size });
    }
    entries.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(entries)
}

fn maybe_sort_entries(
    mut entries: Vec<RecordEntry>,
    sort: Option<InspectSort>,
) -> Vec<RecordEntry> {
    if let Some(InspectSort::Size) = sort {
        entries.sort_by(|a, b| b.size.cmp(&a.size).then_with(|| a.path.cmp(&b.path)));
    }
    entries
}
