//! Build script for configforge.
//!
//! Generates a man page using clap_mangen.

use std::env;
use std::fs;
use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

/// Minimal CLI struct for man page generation.
///
/// This duplicates the CLI definition to avoid build dependency issues.
#[derive(Parser)]
#[command(name = "configforge")]
#[command(
    author,
    version,
    about = "Merge, validate, encrypt and decrypt .env files"
)]
#[command(
    long_about = "configforge merges several .env files into one, asking which value to keep \
    whenever a variable is declared twice with different values.\n\n\
    It also validates files against a JSON list of required variables and encrypts or \
    decrypts files with a passphrase."
)]
struct Cli {
    /// Path to config file
    #[arg(short, long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Ignore config files
    #[arg(long, global = true)]
    no_config: bool,

    /// Enable debug output
    #[arg(long, global = true)]
    debug: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Answer yes to overwrite confirmations
    #[arg(short = 'y', long, global = true)]
    yes: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Merge multiple .env files into one
    Merge {
        /// Files to merge, in order
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Line written after every merged variable
        #[arg(short, long, allow_hyphen_values = true)]
        separator: Option<String>,
        /// Destination file [default: .env.merged]
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// How to resolve conflicting values [default: prompt]
        #[arg(long, value_enum)]
        on_conflict: Option<Policy>,
    },
    /// Validate .env files against a JSON schema of required keys
    Validate {
        /// Files to validate
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// JSON schema file [default: config.schema.json]
        #[arg(long)]
        schema: Option<PathBuf>,
    },
    /// Encrypt .env files with a passphrase
    Encrypt(Crypt),
    /// Decrypt files produced by `encrypt`
    Decrypt(Crypt),
    /// Print the effective configuration
    Config {
        /// Print a commented example instead of the effective config
        #[arg(long)]
        example: bool,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args)]
struct Crypt {
    /// Files to process
    #[arg(required = true)]
    files: Vec<PathBuf>,
    /// Passphrase (or CONFIGFORGE_KEY)
    #[arg(short, long)]
    key: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Policy {
    Prompt,
    KeepExisting,
    UseNew,
    Fail,
}

#[derive(Clone, Copy, ValueEnum)]
enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
    Elvish,
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=CONFIGFORGE_GEN_MANPAGE");

    // Only generate man pages for release builds or when explicitly requested
    let profile = env::var("PROFILE").unwrap_or_default();
    if profile != "release" && env::var("CONFIGFORGE_GEN_MANPAGE").is_err() {
        return;
    }

    let out_dir = match env::var_os("OUT_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => return,
    };

    let man = clap_mangen::Man::new(Cli::command());
    let mut buffer = Vec::new();
    if let Err(e) = man.render(&mut buffer) {
        println!("cargo:warning=failed to render man page: {e}");
        return;
    }

    let man_path = out_dir.join("configforge.1");
    if let Err(e) = fs::write(&man_path, buffer) {
        println!("cargo:warning=failed to write man page: {e}");
        return;
    }

    // Also copy to docs directory for distribution
    if let Some(manifest_dir) = env::var_os("CARGO_MANIFEST_DIR") {
        let docs_dir = PathBuf::from(manifest_dir).join("docs");
        if docs_dir.exists() {
            let _ = fs::copy(&man_path, docs_dir.join("configforge.1"));
        }
    }
}
