//! Interactive prediction loop.
//!
//! One presentation layer for all input channels: typed posts are predicted
//! directly, `:file` and `:image` route to the batch and OCR flows. Channels
//! can be switched off so a deployment can expose only what it wants, instead
//! of shipping near-duplicate frontends per input kind.

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Result;
use colored::*;

use lund::SentimentModel;

use crate::commands::{display, file, image, predict};

/// Which input channels the loop accepts beyond typed text.
#[derive(Debug, Clone, Copy)]
pub struct Channels {
    pub files: bool,
    pub images: bool,
}

pub fn run(model: &SentimentModel, channels: Channels) -> Result<()> {
    print_banner(channels);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("{} ", ">".cyan());
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let input = line.trim();

        match input {
            "" => continue,
            ":q" | ":quit" | ":exit" => break,
            ":help" => print_help(channels),
            _ if input == ":file" || input.starts_with(":file ") => {
                handle_file(model, channels, argument(input, ":file"))
            }
            _ if input == ":image" || input.starts_with(":image ") => {
                handle_image(model, channels, argument(input, ":image"))
            }
            _ if input.starts_with(':') => {
                eprintln!(
                    "{} unknown command '{}'; try :help",
                    "warning:".yellow(),
                    input
                );
            }
            text => {
                // Per-request boundary: a prediction never takes the loop down.
                if let Err(e) = predict::run(model, Some(text), "text", false) {
                    report(e);
                }
            }
        }
    }

    Ok(())
}

fn handle_file(model: &SentimentModel, channels: Channels, path: Option<&str>) {
    if !channels.files {
        eprintln!(
            "{} file input is disabled (--no-files)",
            "warning:".yellow()
        );
        return;
    }
    let Some(path) = path else {
        eprintln!("usage: :file <path>");
        return;
    };
    if let Err(e) = file::run(model, Path::new(path), "text", false) {
        report(e);
    }
}

fn handle_image(model: &SentimentModel, channels: Channels, path: Option<&str>) {
    if !channels.images {
        eprintln!(
            "{} image input is disabled (--no-images)",
            "warning:".yellow()
        );
        return;
    }
    let Some(path) = path else {
        eprintln!("usage: :image <path>");
        return;
    };
    if let Err(e) = image::run(model, Path::new(path), false, "text", false) {
        report(e);
    }
}

/// Everything after the command word, or None if blank.
fn argument<'a>(input: &'a str, command: &str) -> Option<&'a str> {
    let rest = input[command.len()..].trim();
    if rest.is_empty() {
        None
    } else {
        Some(rest)
    }
}

fn report(e: anyhow::Error) {
    eprintln!("{} {:#}", "error:".red(), e);
}

fn print_banner(channels: Channels) {
    eprintln!("{}", display::separator(48));
    eprintln!("Lund - type a post to predict its sentiment");
    print_help(channels);
    eprintln!("{}", display::separator(48));
}

fn print_help(channels: Channels) {
    if channels.files {
        eprintln!("  :file <path>   classify a .txt/.csv/.docx/.pdf file");
    }
    if channels.images {
        eprintln!("  :image <path>  OCR an image and classify the text");
    }
    eprintln!("  :quit          exit");
}
