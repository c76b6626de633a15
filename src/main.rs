use safarikai::cedict;
use safarikai::config::{self, Status};
use safarikai::entry::DictEntry;
use safarikai::pinyin;
use safarikai::popup;

use clap::{Parser, Subcommand};
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, anyhow};

#[derive(Parser)]
#[command(name = "Safarikai Tool")]
#[command(version = "0.1.0")]
#[command(about = "Pinyin tone marks, CC-CEDICT entries and lookup popup rendering", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert pinyin with tone numbers to tone marks, reads stdin line by line if no pinyin is given
    Convert {
        /// Pinyin such as "ni3 hao3"
        pinyin: Vec<String>,
    },
    /// Parse a CC-CEDICT file and print the entries as JSON
    Cedict {
        /// Input file, cedict_ts.u8
        input_file: PathBuf,

        /// Only read the first entries
        #[arg(short, long)]
        limit: Option<usize>,

        /// Write pinyin with tone marks instead of tone numbers
        #[arg(short, long)]
        marks: bool,
    },
    /// Render lookup results (JSON array of entries) as popup HTML
    Render {
        /// Input file with the entries as returned by the lookup service
        entries_file: PathBuf,

        /// Status as .json file (options of the extension)
        #[arg(short, long)]
        status: Option<PathBuf>,

        /// Leave out the translation
        #[arg(long)]
        no_translation: bool,
    },
}

fn convert(pinyin: &[String]) -> anyhow::Result<()> {
    let mut out = BufWriter::new(io::stdout().lock());
    if pinyin.is_empty() {
        for line in io::stdin().lock().lines() {
            writeln!(out, "{}", pinyin::convert(&line?))?;
        }
    } else {
        for p in pinyin {
            writeln!(out, "{}", pinyin::convert(p))?;
        }
    }
    out.flush()?;
    Ok(())
}

fn read_cedict(path: &Path, limit: Option<usize>, marks: bool) -> anyhow::Result<bool> {
    let file = File::open(path).context(format!("Could not open cedict file {}", path.display()))?;
    let report = cedict::read_cedict(BufReader::new(file), limit)
        .context(format!("Could not read cedict file {}", path.display()))?;

    let entries: Vec<DictEntry> = report
        .entries
        .iter()
        .map(|line| {
            let mut entry = line.to_entry();
            if marks {
                entry.pinyin = entry.pinyin_marks();
            }
            entry
        })
        .collect();
    let mut out = BufWriter::new(io::stdout().lock());
    serde_json::to_writer_pretty(&mut out, &entries)?;
    writeln!(out)?;
    out.flush()?;

    for err in &report.errors {
        eprintln!("{err}");
    }
    Ok(report.errors.is_empty())
}

fn render(path: &Path, status_path: Option<&Path>, no_translation: bool) -> anyhow::Result<()> {
    let status = match status_path {
        Some(p) => config::load_status(p)?,
        None => Status::default(),
    };
    let s = fs::read_to_string(path).context(format!("Could not open entries file {}", path.display()))?;
    let entries: Vec<DictEntry> =
        serde_json::from_str(&s).context(format!("Invalid entries file {}", path.display()))?;

    let show_translation = status.show_translation && !no_translation;
    match popup::render_results(&entries, show_translation) {
        Some(html) => println!("<div id='{}'>{}</div>", config::POPUP_ID, html),
        None => log::info!("no entries, nothing to show"),
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match &cli.command {
        Command::Convert { pinyin } => convert(pinyin),
        Command::Cedict {
            input_file,
            limit,
            marks,
        } => {
            if read_cedict(input_file, *limit, *marks)? {
                Ok(())
            } else {
                Err(anyhow!("Failure!"))
            }
        }
        Command::Render {
            entries_file,
            status,
            no_translation,
        } => render(entries_file, status.as_deref(), *no_translation),
    }
}
