//! CLI argument definitions for configforge.
//!
//! Uses clap with derive macros for argument parsing.
//!
//! # Example
//!
//! ```no_run
//! use configforge::cli::Cli;
//!
//! let cli = Cli::parse_args();
//! println!("Debug: {}", cli.debug);
//! ```

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};

use crate::dotenv::ConflictPolicy;

/// Environment variable read for `--key`.
pub const KEY_ENV: &str = "CONFIGFORGE_KEY";

/// Merge, validate, encrypt and decrypt .env files.
#[derive(Parser, Debug)]
#[command(name = "configforge")]
#[command(
    author,
    version,
    about = "Merge, validate, encrypt and decrypt .env files",
    long_about = None
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Ignore config files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Answer yes to overwrite confirmations
    #[arg(short = 'y', long, global = true)]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Merge multiple .env files into one
    Merge(MergeArgs),
    /// Validate .env files against a JSON schema of required keys
    Validate(ValidateArgs),
    /// Encrypt .env files with a passphrase
    Encrypt(CryptArgs),
    /// Decrypt files produced by `encrypt`
    Decrypt(CryptArgs),
    /// Print the effective configuration
    Config(ConfigArgs),
    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CliShell,
    },
}

/// Arguments for `merge`.
#[derive(Args, Debug, Clone)]
pub struct MergeArgs {
    /// Files to merge, in order
    #[arg(required = true, value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Line written after every merged variable
    #[arg(short, long, value_name = "SEP", allow_hyphen_values = true)]
    pub separator: Option<String>,

    /// Destination file [default: .env.merged]
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// How to resolve conflicting values [default: prompt]
    #[arg(long, value_name = "POLICY", value_enum)]
    pub on_conflict: Option<CliConflictPolicy>,
}

/// Arguments for `validate`.
#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Files to validate
    #[arg(required = true, value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// JSON schema file [default: config.schema.json]
    #[arg(long, value_name = "PATH")]
    pub schema: Option<PathBuf>,
}

/// Arguments for `encrypt` and `decrypt`.
#[derive(Args, Debug, Clone)]
pub struct CryptArgs {
    /// Files to process
    #[arg(required = true, value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Passphrase
    #[arg(short, long, value_name = "KEY", env = KEY_ENV, hide_env_values = true)]
    pub key: String,
}

/// Arguments for `config`.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Print a commented example instead of the effective config
    #[arg(long)]
    pub example: bool,
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CliShell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    Powershell,
    /// Elvish shell
    Elvish,
}

/// Conflict policy for CLI parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CliConflictPolicy {
    /// Ask for every conflict.
    Prompt,
    /// Keep the first value.
    KeepExisting,
    /// Take the later value.
    UseNew,
    /// Abort on the first conflict.
    Fail,
}

impl From<CliConflictPolicy> for ConflictPolicy {
    fn from(policy: CliConflictPolicy) -> Self {
        match policy {
            CliConflictPolicy::Prompt => ConflictPolicy::Prompt,
            CliConflictPolicy::KeepExisting => ConflictPolicy::KeepExisting,
            CliConflictPolicy::UseNew => ConflictPolicy::UseNew,
            CliConflictPolicy::Fail => ConflictPolicy::Fail,
        }
    }
}

impl MergeArgs {
    /// The conflict policy given on the command line, if any.
    pub fn policy_override(&self) -> Option<ConflictPolicy> {
        self.on_conflict.map(Into::into)
    }
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Generate shell completions and write to stdout.
    pub fn generate_completions(shell: CliShell) {
        let mut cmd = Cli::command();
        let shell = match shell {
            CliShell::Bash => Shell::Bash,
            CliShell::Zsh => Shell::Zsh,
            CliShell::Fish => Shell::Fish,
            CliShell::Powershell => Shell::PowerShell,
            CliShell::Elvish => Shell::Elvish,
        };
        generate(shell, &mut cmd, "configforge", &mut std::io::stdout());
    }
}
