use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "lund")]
#[command(about = "Lund: happy/sad sentiment prediction for social media posts", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding vectorizer.json and classifier.json
    #[arg(long, global = true, default_value = "models", env = "LUND_MODEL_DIR")]
    pub model_dir: PathBuf,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Predict the sentiment of a single post
    Predict {
        /// The post text (or a file path, or stdin if not provided)
        text: Option<String>,

        /// Output format: json, jsonl, text
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Print only the label
        #[arg(short, long)]
        quiet: bool,
    },

    /// Predict every line of a text-based file (.txt, .csv, .docx, .pdf)
    File {
        /// Path to the file
        path: PathBuf,

        /// Output format: json, jsonl, text
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Print only the labels
        #[arg(short, long)]
        quiet: bool,
    },

    /// Extract text from an image (png, jpg) via OCR and predict it
    Image {
        /// Path to the image
        path: PathBuf,

        /// Do not echo the extracted text before the prediction
        #[arg(long)]
        no_echo: bool,

        /// Output format: json, jsonl, text
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Print only the label
        #[arg(short, long)]
        quiet: bool,
    },

    /// Interactive prediction loop
    Repl {
        /// Disable the :file channel
        #[arg(long)]
        no_files: bool,

        /// Disable the :image channel
        #[arg(long)]
        no_images: bool,
    },
}

/// Convert verbosity count to log level string
pub fn verbosity_to_log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
