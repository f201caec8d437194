//! Conflict resolution policies.

use std::collections::VecDeque;

use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::error::{ForgeError, Result};
use crate::prompt::Prompt;

/// Decides which value survives when a key is re-declared differently.
///
/// Resolvers only return the chosen value; the caller owns the mapping.
pub trait ConflictResolver {
    /// Choose between the value already merged and the incoming one.
    fn resolve(&mut self, key: &str, existing: &str, incoming: &str) -> Result<String>;
}

impl<R: ConflictResolver + ?Sized> ConflictResolver for &mut R {
    fn resolve(&mut self, key: &str, existing: &str, incoming: &str) -> Result<String> {
        (**self).resolve(key, existing, incoming)
    }
}

impl<R: ConflictResolver + ?Sized> ConflictResolver for Box<R> {
    fn resolve(&mut self, key: &str, existing: &str, incoming: &str) -> Result<String> {
        (**self).resolve(key, existing, incoming)
    }
}

/// How conflicts are resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConflictPolicy {
    /// Ask the operator for every conflict.
    #[default]
    Prompt,
    /// First declaration wins.
    KeepExisting,
    /// Last declaration wins.
    UseNew,
    /// Abort the merge on the first conflict.
    Fail,
}

/// One of the two candidate values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Keep the value already merged.
    KeepExisting,
    /// Take the incoming value.
    UseNew,
}

impl Choice {
    /// Pick the matching candidate.
    pub fn pick(self, existing: &str, incoming: &str) -> String {
        match self {
            Choice::KeepExisting => existing.to_string(),
            Choice::UseNew => incoming.to_string(),
        }
    }
}

/// Always keeps the value that was merged first.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeepExisting;

impl ConflictResolver for KeepExisting {
    fn resolve(&mut self, _key: &str, existing: &str, _incoming: &str) -> Result<String> {
        Ok(existing.to_string())
    }
}

/// Always takes the later value.
#[derive(Debug, Clone, Copy, Default)]
pub struct UseNew;

impl ConflictResolver for UseNew {
    fn resolve(&mut self, _key: &str, _existing: &str, incoming: &str) -> Result<String> {
        Ok(incoming.to_string())
    }
}

/// Refuses every conflict.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailOnConflict;

impl ConflictResolver for FailOnConflict {
    fn resolve(&mut self, key: &str, existing: &str, incoming: &str) -> Result<String> {
        Err(ForgeError::UnresolvedConflict {
            key: key.to_string(),
            existing: existing.to_string(),
            incoming: incoming.to_string(),
        })
    }
}

/// Replays a fixed sequence of choices.
#[derive(Debug, Clone, Default)]
pub struct Scripted {
    choices: VecDeque<Choice>,
    asked: Vec<String>,
}

impl Scripted {
    /// Create a resolver answering with `choices` in order.
    pub fn new(choices: impl IntoIterator<Item = Choice>) -> Self {
        Self {
            choices: choices.into_iter().collect(),
            asked: Vec::new(),
        }
    }

    /// Keys this resolver was asked about, in order.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }
}

impl ConflictResolver for Scripted {
    fn resolve(&mut self, key: &str, existing: &str, incoming: &str) -> Result<String> {
        self.asked.push(key.to_string());
        let choice = self.choices.pop_front().ok_or_else(|| ForgeError::Prompt {
            message: format!("no scripted answer left for \"{key}\""),
        })?;
        Ok(choice.pick(existing, incoming))
    }
}

/// Asks the operator through a [`Prompt`].
#[derive(Debug)]
pub struct Interactive<P> {
    prompt: P,
}

impl<P: Prompt> Interactive<P> {
    /// Create an interactive resolver.
    pub fn new(prompt: P) -> Self {
        Self { prompt }
    }
}

impl<P: Prompt> ConflictResolver for Interactive<P> {
    fn resolve(&mut self, key: &str, existing: &str, incoming: &str) -> Result<String> {
        let message = format!(
            "{} for {}. Which value do you want to keep?",
            "Conflict detected".bright_red(),
            format!("\"{key}\"").blue()
        );
        let options = [
            format!("Keep existing value: {existing}"),
            format!("Use new value: {incoming}"),
        ];

        let choice = match self.prompt.choose(&message, &options)? {
            0 => Choice::KeepExisting,
            _ => Choice::UseNew,
        };
        Ok(choice.pick(existing, incoming))
    }
}

/// Build the resolver for `policy`; only [`ConflictPolicy::Prompt`] uses `prompt`.
pub fn resolver_for<'a, P: Prompt + 'a>(
    policy: ConflictPolicy,
    prompt: P,
) -> Box<dyn ConflictResolver + 'a> {
    match policy {
        ConflictPolicy::Prompt => Box::new(Interactive::new(prompt)),
        ConflictPolicy::KeepExisting => Box::new(KeepExisting),
        ConflictPolicy::UseNew => Box::new(UseNew),
        ConflictPolicy::Fail => Box::new(FailOnConflict),
    }
}
