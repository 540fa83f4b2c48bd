mod commands;

use anyhow::{Context, Result};
use clap::Parser;

use lund::SentimentModel;
use lund_cli::{verbosity_to_log_level, Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(verbosity_to_log_level(cli.verbose)),
    )
    .init();

    // The single startup step with the single fatal failure mode: without both
    // artifacts there is nothing to serve. Everything after this is
    // per-request.
    let model = SentimentModel::load(&cli.model_dir)
        .with_context(|| format!("failed to load model from '{}'", cli.model_dir.display()))?;

    match cli.command {
        Commands::Predict {
            text,
            format,
            quiet,
        } => commands::predict::run(&model, text.as_deref(), &format, quiet),

        Commands::File {
            path,
            format,
            quiet,
        } => commands::file::run(&model, &path, &format, quiet),

        Commands::Image {
            path,
            no_echo,
            format,
            quiet,
        } => commands::image::run(&model, &path, no_echo, &format, quiet),

        Commands::Repl {
            no_files,
            no_images,
        } => commands::repl::run(
            &model,
            commands::repl::Channels {
                files: !no_files,
                images: !no_images,
            },
        ),
    }
}
