//! configforge - merge, validate, encrypt and decrypt .env files
//!
//! Entry point for the configforge CLI application.

use std::env;
use std::process::ExitCode;

use anyhow::{Context as _, Result};
use colored::Colorize;
use tracing::debug;

use configforge::cli::{Cli, Command};
use configforge::commands::{run_config, run_crypt, run_merge, run_validate, Context};
use configforge::config::{load_config, ColorMode, Config};
use configforge::crypto::Direction;
use configforge::error::{exit_code, ForgeError};
use configforge::prompt::TerminalPrompt;
use configforge::utils::{global_config_file, local_config_file};
use configforge::{logging, ui};

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(err) => {
            if let Some(forge_err) = err.downcast_ref::<ForgeError>() {
                if forge_err.is_cancellation() {
                    eprintln!("{}", forge_err.to_string().yellow());
                } else {
                    eprintln!("{} {forge_err}", "Error:".red().bold());
                }
                return ExitCode::from(forge_err.exit_code() as u8);
            }
            eprintln!("{} {err:#}", "Error:".red().bold());
            ExitCode::from(exit_code::GENERAL_ERROR as u8)
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse_args();
    logging::init(cli.debug);

    // Handle shell completions early
    if let Command::Completions { shell } = cli.command {
        Cli::generate_completions(shell);
        return Ok(exit_code::SUCCESS);
    }

    debug!(version = env!("CARGO_PKG_VERSION"), ?cli, "starting");

    let working_dir = env::current_dir().context("Failed to determine working directory")?;
    debug!(
        global_config = ?global_config_file(),
        local_config = ?local_config_file(&working_dir),
        "config locations"
    );

    let config = if cli.no_config {
        Config::default()
    } else {
        load_config(cli.config.as_deref(), &working_dir)?
    };

    let color = if cli.no_color {
        ColorMode::Never
    } else {
        config.appearance.color_mode()
    };
    ui::configure_colors(color);
    ui::print_banner(config.appearance.show_banner());

    let mut ctx = Context {
        config,
        assume_yes: cli.yes,
        working_dir,
        prompt: TerminalPrompt::stdio(),
        out: std::io::stdout(),
    };

    match &cli.command {
        Command::Merge(args) => run_merge(args, &mut ctx)?,
        Command::Validate(args) => run_validate(args, &mut ctx)?,
        Command::Encrypt(args) => run_crypt(Direction::Encrypt, args, &mut ctx)?,
        Command::Decrypt(args) => run_crypt(Direction::Decrypt, args, &mut ctx)?,
        Command::Config(args) => run_config(args, &mut ctx)?,
        Command::Completions { .. } => {}
    }

    Ok(exit_code::SUCCESS)
}
