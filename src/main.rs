//! Blogsplice - regenerates a static blog's indexes, feed and sitemap from
//! pre-rendered HTML posts.

mod cli;
mod config;
mod generator;
mod logger;
mod post;
mod render;
mod splice;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands, build::build_site};
use config::SiteConfig;
use std::process::ExitCode;
use utils::plural_count;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose());

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = SiteConfig::load(cli)?;

    match &cli.command {
        Commands::Build { .. } => {
            let report = build_site(&config)?;
            logger::warnings_block(&report.warnings);
            log!(
                "build";
                "done: {}, {}",
                plural_count(report.posts.len(), "post"),
                plural_count(report.warnings.len(), "warning")
            );
            Ok(())
        }
    }
}
