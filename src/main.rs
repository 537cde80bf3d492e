//! Emergency Resource Directory - Entry Point

use clap::Parser;
use resdir::catalog::ScreenKind;
use resdir::model::AppError;
use resdir::output::OutputFormat;
use resdir::view::{ColorConfig, RunOptions};
use std::path::PathBuf;
use tracing::info;

/// Emergency Resource Directory - search firefighter units, medical supplies and shelters
#[derive(Parser, Debug)]
#[command(name = "resdir")]
#[command(version)]
#[command(about = "Searchable directory of emergency resources")]
pub struct Args {
    /// Screen to open (directory or extended)
    #[arg(long)]
    pub screen: Option<ScreenKind>,

    /// Start with this search query (used verbatim, whitespace included)
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Print matching resources and exit instead of starting the TUI
    #[arg(short, long)]
    pub print: bool,

    /// Print matching resources as JSON and exit
    #[arg(long)]
    pub json: bool,

    /// Show the key binding overlay on startup
    #[arg(long = "help-overlay")]
    pub help_overlay: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Output format when running non-interactively.
    fn output_format(&self) -> Option<OutputFormat> {
        if self.json {
            Some(OutputFormat::Json)
        } else if self.print {
            Some(OutputFormat::Plain)
        } else {
            None
        }
    }
}

fn main() -> Result<(), AppError> {
    run(Args::parse())
}

fn run(args: Args) -> Result<(), AppError> {
    // Set NO_COLOR env var if --no-color flag is passed
    if args.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = resdir::config::load_config_with_precedence(args.config.clone())?;
        let merged = resdir::config::merge_config(config_file);
        let with_env = resdir::config::apply_env_overrides(merged)?;

        // Flags only override when explicitly set
        let help_override = if args.help_overlay { Some(true) } else { None };
        resdir::config::apply_cli_overrides(with_env, args.screen, help_override)
    };

    resdir::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    if let Some(format) = args.output_format() {
        let mut stdout = std::io::stdout().lock();
        resdir::output::print_matches(&mut stdout, config.screen, &args.query, format)?;
        return Ok(());
    }

    let options = RunOptions {
        screen: config.screen,
        query: args.query,
        show_help: config.show_help,
        colors: ColorConfig::from_env_and_args(args.no_color),
    };
    resdir::view::run(&options)?;

    Ok(())
}
