use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use vitalscore::engine::derive_marker_scores;
use vitalscore::input::{collect_metric_values, load_reading_file};
use vitalscore::report::text::render_report_text;
use vitalscore::report::{build_report, render_json};
use vitalscore::{catalog, logging};

#[derive(Debug, Parser)]
#[command(name = "vitalscore", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compute domain and lifestyle category scores from a reading file.
    Score {
        /// JSON file with raw readings, optional marker scores, and
        /// optional wearable samples.
        #[arg(long)]
        input: PathBuf,
        /// Output directory; reports go to stdout when omitted.
        #[arg(long)]
        out: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Text,
    Both,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    logging::init().map_err(|e| e as Box<dyn std::error::Error>)?;
    catalog::validate()?;

    let cli = Cli::parse();
    match cli.command {
        Command::Score { input, out, format } => score(&input, out.as_deref(), format),
    }
}

fn score(
    input: &std::path::Path,
    out: Option<&std::path::Path>,
    format: Format,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = load_reading_file(input)?;
    let readings = collect_metric_values(&file);
    // Explicit marker scores win; otherwise derive them from the raw blood
    // readings so a plain panel still feeds the category engine.
    let marker_scores: std::collections::HashMap<_, _> = if file.marker_scores.is_empty() {
        derive_marker_scores(&readings)
    } else {
        file.marker_scores.iter().map(|(&k, &v)| (k, v)).collect()
    };

    let report = build_report(&readings, &marker_scores);

    let json = matches!(format, Format::Json | Format::Both);
    let text = matches!(format, Format::Text | Format::Both);

    match out {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            if json {
                std::fs::write(dir.join("scores.json"), render_json(&report)?)?;
            }
            if text {
                std::fs::write(dir.join("scores.txt"), render_report_text(&report))?;
            }
        }
        None => {
            if json {
                println!("{}", render_json(&report)?);
            }
            if text {
                print!("{}", render_report_text(&report));
            }
        }
    }

    Ok(())
}
