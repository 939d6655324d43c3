use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use imgsheet::convert::{self, ImageFailure, Outcome, OutputMode, Progress, Reporter};
use imgsheet::input::{DEFAULT_START_COLUMN, DEFAULT_START_ROW, FormInput};
use imgsheet::logging;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Folder containing the .jpg, .jpeg and .png files
    folder: PathBuf,

    /// Output file; a .csv extension writes names and paths instead of images
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Row of the first image (1-based)
    #[arg(long, short = 'r', default_value = DEFAULT_START_ROW)]
    start_row: String,

    /// Column of the images (e.g. A, B, AA)
    #[arg(long, short = 'c', default_value = DEFAULT_START_COLUMN)]
    start_column: String,

    /// Write CSV output without asking for confirmation
    #[arg(long, short = 'y')]
    yes: bool,

    /// Print the conversion summary as JSON to stdout
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,
}

struct CliReporter {
    assume_yes: bool,
}

impl CliReporter {
    fn ask(&self, question: &str) -> bool {
        let stdin = io::stdin();
        if !stdin.is_terminal() {
            eprintln!("{question}");
            eprintln!("No terminal to confirm on; pass --yes to write the CSV file.");
            return false;
        }

        eprint!("{question} [y/N] ");
        let _ = io::stderr().flush();

        let mut answer = String::new();
        if stdin.lock().read_line(&mut answer).is_err() {
            return false;
        }

        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
    }
}

impl Reporter for CliReporter {
    fn confirm_table_mode(&mut self, _total: usize) -> bool {
        if self.assume_yes {
            return true;
        }

        self.ask("CSV files do not support images. Only filenames and paths will be saved. Proceed?")
    }

    fn progress(&mut self, progress: Progress<'_>) {
        let verb = match progress.mode {
            OutputMode::Table => "Writing entry",
            OutputMode::Spreadsheet => "Inserting image",
        };
        eprintln!("{} {} of {}...", verb, progress.index, progress.total);
    }

    fn image_failed(&mut self, failure: &ImageFailure) {
        eprintln!("Warning: Failed to insert {}: {}", failure.filename, failure.message);
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let form = FormInput {
        folder: cli.folder,
        start_row: cli.start_row,
        start_column: cli.start_column,
        output: cli.output,
    };
    let request = form.validate()?;

    let mut reporter = CliReporter {
        assume_yes: cli.yes,
    };

    let result = match convert::convert(&request, &mut reporter)? {
        Outcome::Completed(result) => result,
        Outcome::Cancelled => {
            eprintln!("Cancelled.");
            return Ok(());
        }
    };

    if cli.json {
        let json_string = serde_json::to_string_pretty(&result)
            .context("Failed to serialize conversion summary to JSON")?;
        println!("{}", json_string);
    }

    match result.mode {
        OutputMode::Table => eprintln!("CSV file saved successfully!"),
        OutputMode::Spreadsheet => eprintln!("Excel file saved successfully!"),
    }
    eprintln!(
        "{} of {} images written to {} ({} failed)",
        result.succeeded,
        result.attempted,
        result.output.display(),
        result.failed()
    );

    Ok(())
}
