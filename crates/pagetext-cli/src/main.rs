mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "pagetext",
    version,
    about = "Extract page text from PDFs, rebuilding lines from word boxes when the text layer is empty"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Overrides shared by every command that reads a PDF.
#[derive(clap::Args)]
struct OptionArgs {
    /// JSON file with extraction options
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Maximum word-center distance for chaining words into a line
    #[arg(long, value_name = "UNITS")]
    threshold: Option<f64>,

    /// Tolerance for merging adjacent pieces into one word
    #[arg(long, value_name = "UNITS")]
    word_tolerance: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the text of every page of a PDF
    Extract {
        /// Path to PDF file
        input_file: PathBuf,

        #[command(flatten)]
        options: OptionArgs,

        /// Output format: text (default) or json
        #[arg(short, long, default_value = "text")]
        output: String,

        /// Write output to a file instead of stdout
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Dump the word boxes of every page as JSON
    Words {
        /// Path to PDF file
        input_file: PathBuf,

        #[command(flatten)]
        options: OptionArgs,
    },
    /// Rebuild lines from a JSON array of word boxes
    Lines {
        /// Path to JSON file with `[{"text", "left", "top", "right", "bottom"}, ...]`
        words_file: PathBuf,

        #[command(flatten)]
        options: OptionArgs,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract {
            input_file,
            options,
            output,
            out,
        } => commands::extract::run(input_file, &options, &output, out),
        Commands::Words {
            input_file,
            options,
        } => commands::words::run(input_file, &options),
        Commands::Lines {
            words_file,
            options,
        } => commands::lines::run(words_file, &options),
    };

    if let Err(e) = result {
        eprintln!("{}", pagetext_core::describe_outcome(&Err(e)));
        std::process::exit(1);
    }
}
