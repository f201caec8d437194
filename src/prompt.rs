//! Blocking operator prompts.
//!
//! Prompts are written to stderr and answers read line by line, so stdout
//! stays usable for piped output.

use std::io::{self, BufRead, Stderr, StdinLock, Write};

use colored::Colorize;

use crate::error::{ForgeError, Result};

/// Operator interaction used by commands and the interactive resolver.
pub trait Prompt {
    /// Ask a yes/no question. An empty answer selects `default`.
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool>;

    /// Ask the operator to pick one of `options`, returning its index.
    fn choose(&mut self, message: &str, options: &[String]) -> Result<usize>;
}

impl<P: Prompt + ?Sized> Prompt for &mut P {
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool> {
        (**self).confirm(message, default)
    }

    fn choose(&mut self, message: &str, options: &[String]) -> Result<usize> {
        (**self).choose(message, options)
    }
}

/// Line-oriented prompt over any reader/writer pair.
#[derive(Debug)]
pub struct TerminalPrompt<R, W> {
    input: R,
    output: W,
}

impl TerminalPrompt<StdinLock<'static>, Stderr> {
    /// Prompt on the process stdin/stderr.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    /// Create a prompt over the given streams.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the prompt and return the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{question}").map_err(prompt_io)?;
        self.output.flush().map_err(prompt_io)?;

        let mut answer = String::new();
        let read = self.input.read_line(&mut answer).map_err(prompt_io)?;
        if read == 0 {
            return Err(ForgeError::Prompt {
                message: "input stream closed before an answer was given".to_string(),
            });
        }

        Ok(answer.trim().to_string())
    }
}

impl<R: BufRead, W: Write> Prompt for TerminalPrompt<R, W> {
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool> {
        let hint = if default { "(Y/n)" } else { "(y/N)" };
        let question = format!("{} {} {} ", "?".green().bold(), message.bold(), hint.dimmed());

        loop {
            let answer = self.ask(&question)?;
            match answer.to_lowercase().as_str() {
                "" => return Ok(default),
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => {
                    writeln!(self.output, "{}", "Please answer y or n.".yellow()).map_err(prompt_io)?;
                }
            }
        }
    }

    fn choose(&mut self, message: &str, options: &[String]) -> Result<usize> {
        if options.is_empty() {
            return Err(ForgeError::Prompt {
                message: "no options to choose from".to_string(),
            });
        }

        writeln!(self.output, "{} {}", "?".green().bold(), message.bold()).map_err(prompt_io)?;
        for (i, option) in options.iter().enumerate() {
            writeln!(self.output, "  {}) {}", (i + 1).to_string().cyan(), option)
                .map_err(prompt_io)?;
        }

        let question = format!("{} ", format!("Select [1-{}]:", options.len()).dimmed());
        loop {
            let answer = self.ask(&question)?;
            match answer.parse::<usize>() {
                Ok(n) if (1..=options.len()).contains(&n) => return Ok(n - 1),
                _ => {
                    writeln!(
                        self.output,
                        "{}",
                        format!("Please enter a number between 1 and {}.", options.len()).yellow()
                    )
                    .map_err(prompt_io)?;
                }
            }
        }
    }
}

fn prompt_io(err: io::Error) -> ForgeError {
    ForgeError::Prompt {
        message: err.to_string(),
    }
}
