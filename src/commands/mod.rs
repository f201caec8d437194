//! Subcommand implementations.
//!
//! Each command takes its parsed arguments and a [`Context`] carrying the
//! loaded config, the operator prompt and the output stream, so the whole
//! flow can run against in-memory streams in tests.

mod config;
mod crypt;
mod merge;
mod validate;

use std::io::Write;
use std::path::PathBuf;

use crate::config::Config;
use crate::prompt::Prompt;

pub use config::run_config;
pub use crypt::run_crypt;
pub use merge::run_merge;
pub use validate::run_validate;

/// Shared state for a single command run.
#[derive(Debug)]
pub struct Context<P, W> {
    /// Effective configuration.
    pub config: Config,
    /// Skip overwrite confirmations.
    pub assume_yes: bool,
    /// Directory relative paths are resolved against.
    pub working_dir: PathBuf,
    /// Operator prompt.
    pub prompt: P,
    /// Destination of command output.
    pub out: W,
}

impl<P: Prompt, W: Write> Context<P, W> {
    /// Ask before overwriting, unless `--yes` was given.
    fn confirm_overwrite(&mut self, message: &str) -> crate::error::Result<bool> {
        if self.assume_yes {
            return Ok(true);
        }
        self.prompt.confirm(message, false)
    }

    /// Write one line of output. Failures to print never fail the command.
    fn say(&mut self, line: &str) {
        let _ = writeln!(self.out, "{line}");
    }
}
