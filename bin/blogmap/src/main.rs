//! blogmap CLI
//!
//! Regenerates a site's sitemap.xml from its blog content directory.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;
use color_eyre::eyre::Result;

/// Command-line interface for blogmap.
#[derive(Parser)]
#[command(
    name = "blogmap",
    version,
    about = "Regenerate sitemap.xml from a blog content directory"
)]
struct Cli {
    /// Path to configuration file [default: blogmap.toml, if present]
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Defaults to `generate` when omitted
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Write the sitemap
    Generate {
        /// Directory holding the post files
        #[arg(long)]
        content_dir: Option<PathBuf>,
        /// Sitemap file to overwrite
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Override site base URL (e.g., https://example.com)
        #[arg(long)]
        base_url: Option<String>,
        /// Stamp entries with this date instead of today
        #[arg(long, value_name = "YYYY-MM-DD")]
        date: Option<NaiveDate>,
    },
    /// Validate configuration and content
    Check {
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    blogmap::init_tracing(cli.verbose);

    let config = cli.config.as_deref();
    match cli.command {
        None => {
            blogmap::cmd::generate::run(config, None, None, None, None)?;
        }
        Some(Commands::Generate {
            content_dir,
            output,
            base_url,
            date,
        }) => {
            blogmap::cmd::generate::run(
                config,
                content_dir.as_deref(),
                output.as_deref(),
                base_url.as_deref(),
                date,
            )?;
        }
        Some(Commands::Check { strict }) => {
            blogmap::cmd::check::run(config, strict)?;
        }
    }

    Ok(())
}
