//! Command routing
//!
//! Turns a chat message such as `!roll Attack Hero` into an [`Invocation`]. Messages
//! that do not start with the prefix, or name no known command, are not routed.
//! Arguments are separated by whitespace; double quotes group words into one argument
//! (`!link <url> "My Hero"`). Extra arguments are ignored.

use std::fmt;

use crate::error::{CommandError, CommandResult};

/// Commands the bot understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Link,
    Roll,
    Help,
}

impl CommandKind {
    /// All commands, in help order
    pub const ALL: [CommandKind; 3] = [CommandKind::Link, CommandKind::Roll, CommandKind::Help];

    /// Name typed after the prefix
    pub fn name(self) -> &'static str {
        match self {
            CommandKind::Link => "link",
            CommandKind::Roll => "roll",
            CommandKind::Help => "help",
        }
    }

    /// Name and arguments, without the prefix
    pub fn usage(self) -> &'static str {
        match self {
            CommandKind::Link => "link <url> <sheetName>",
            CommandKind::Roll => "roll <command> <sheetName>",
            CommandKind::Help => "help",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            CommandKind::Link => "Links a Google Sheet to you under a short name.",
            CommandKind::Roll => "Fetches a formula from a linked sheet and rolls the dice.",
            CommandKind::Help => "Shows this message.",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A routed command with its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Link { url: String, sheet: String },
    Roll { command: String, sheet: String },
    Help,
}

impl Invocation {
    pub fn kind(&self) -> CommandKind {
        match self {
            Invocation::Link { .. } => CommandKind::Link,
            Invocation::Roll { .. } => CommandKind::Roll,
            Invocation::Help => CommandKind::Help,
        }
    }
}

/// Recognizes prefixed commands in message text
#[derive(Debug, Clone)]
pub struct CommandRouter {
    prefix: String,
}

impl CommandRouter {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Route a message
    ///
    /// Returns `None` when the message is not a command for this bot, and
    /// `Some(Err(CommandError::Usage { .. }))` when a known command lacks arguments.
    ///
    /// # Example
    /// ```rust
    /// use sheetroll::{CommandRouter, Invocation};
    ///
    /// let router = CommandRouter::new("!");
    /// let invocation = router.route("!roll Attack Hero").unwrap().unwrap();
    /// assert_eq!(
    ///     invocation,
    ///     Invocation::Roll { command: "Attack".into(), sheet: "Hero".into() }
    /// );
    /// assert!(router.route("hello there").is_none());
    /// ```
    pub fn route(&self, content: &str) -> Option<CommandResult<Invocation>> {
        let rest = content.trim_start().strip_prefix(self.prefix.as_str())?;
        if rest.starts_with(char::is_whitespace) {
            return None;
        }

        let mut args = split_arguments(rest).into_iter();
        let kind = CommandKind::from_name(&args.next()?)?;

        let mut next = || args.next();
        let invocation = match kind {
            CommandKind::Link => match (next(), next()) {
                (Some(url), Some(sheet)) => Invocation::Link { url, sheet },
                _ => return Some(Err(CommandError::Usage { command: kind })),
            },
            CommandKind::Roll => match (next(), next()) {
                (Some(command), Some(sheet)) => Invocation::Roll { command, sheet },
                _ => return Some(Err(CommandError::Usage { command: kind })),
            },
            CommandKind::Help => Invocation::Help,
        };

        Some(Ok(invocation))
    }

    /// Help text listing every command
    pub fn help_text(&self) -> String {
        let mut text = String::from("Commands:\n");
        for kind in CommandKind::ALL {
            text.push_str(&format!(
                "`{}{}` - {}\n",
                self.prefix,
                kind.usage(),
                kind.description()
            ));
        }
        text.push_str(&format!(
            "Formula functions: {}\n",
            sheetroll_formula::function_names().join(", ")
        ));
        text
    }
}

impl Default for CommandRouter {
    fn default() -> Self {
        Self::new("!")
    }
}

/// Split command arguments on whitespace, keeping double-quoted text together
pub fn split_arguments(text: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_arg = false;

    for c in text.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                has_arg = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_arg {
                    args.push(std::mem::take(&mut current));
                    has_arg = false;
                }
            }
            c => {
                current.push(c);
                has_arg = true;
            }
        }
    }

    if has_arg {
        args.push(current);
    }

    args
}
