//! Command handlers
//!
//! [`Commands`] owns the link store and the sheet fetcher and implements the bot's
//! commands on top of them. Handlers return [`CommandResult`]s; [`Commands::handle_message`]
//! turns any outcome into the text sent back to the user.

use std::fmt;

use sheetroll_formula::format_number;
use sheetroll_sheets::{extract_sheet_id, SheetFetcher, SheetId, SheetRow, SheetsError};

use crate::error::{CommandError, CommandResult};
use crate::lookup::{lookup_and_resolve, LookupError, ResolvedFormula};
use crate::router::{CommandRouter, Invocation};
use crate::store::{LinkStore, UserId};

/// Outcome of a successful `roll`
#[derive(Debug, Clone, PartialEq)]
pub struct RollReport {
    /// Command name as the user typed it
    pub command: String,
    /// Sheet name as the user typed it
    pub sheet: String,
    pub resolved: ResolvedFormula,
}

impl fmt::Display for RollReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let roll = match self.resolved.roll {
            Some(roll) => roll.to_string(),
            None => "None".to_string(),
        };
        write!(
            f,
            "`{}` from `{}` → Formula: `{}` | Roll: `{}` | Result: `{}`",
            self.command,
            self.sheet,
            self.resolved.formula,
            roll,
            format_number(self.resolved.result)
        )
    }
}

/// The bot's command set
pub struct Commands<S, F> {
    store: S,
    fetcher: F,
    router: CommandRouter,
}

impl<S: LinkStore, F: SheetFetcher> Commands<S, F> {
    /// Create handlers using the default `!` prefix
    pub fn new(store: S, fetcher: F) -> Self {
        Self {
            store,
            fetcher,
            router: CommandRouter::default(),
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.router = CommandRouter::new(prefix);
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Link a spreadsheet to `user` under `sheet`
    ///
    /// Re-linking an existing name replaces the previous sheet.
    pub fn link(&self, user: UserId, url: &str, sheet: &str) -> CommandResult<SheetId> {
        let id = extract_sheet_id(url).ok_or_else(|| CommandError::InvalidSheetUrl {
            url: url.to_string(),
        })?;

        match self.store.put(user, sheet, id.clone()) {
            Some(previous) => {
                tracing::info!("User {user} re-linked sheet '{sheet}' from {previous} to {id}")
            }
            None => tracing::info!("User {user} linked sheet '{sheet}' to {id}"),
        }

        Ok(id)
    }

    /// Look up `command` in the user's sheet named `sheet` and roll its formula
    pub async fn roll(
        &self,
        user: UserId,
        command: &str,
        sheet: &str,
    ) -> CommandResult<RollReport> {
        let id = self
            .store
            .get(user, sheet)
            .ok_or_else(|| CommandError::UnknownSheetLink {
                user,
                sheet: sheet.to_string(),
            })?;

        let retrieval_failure = |source| CommandError::RetrievalFailure {
            sheet: sheet.to_string(),
            source,
        };

        let rows = self.fetcher.fetch(&id).await.map_err(retrieval_failure)?;
        if rows.is_empty() {
            return Err(retrieval_failure(SheetsError::Empty));
        }

        let resolved = resolve_rows(&rows, command).map_err(|source| CommandError::Lookup {
            sheet: sheet.to_string(),
            source,
        })?;

        Ok(RollReport {
            command: command.to_string(),
            sheet: sheet.to_string(),
            resolved,
        })
    }

    /// Run a routed command and render its successful reply
    pub async fn dispatch(&self, user: UserId, invocation: &Invocation) -> CommandResult<String> {
        match invocation {
            Invocation::Link { url, sheet } => {
                self.link(user, url, sheet)?;
                Ok(format!("Google Sheet `{sheet}` linked successfully!"))
            }
            Invocation::Roll { command, sheet } => {
                let report = self.roll(user, command, sheet).await?;
                Ok(report.to_string())
            }
            Invocation::Help => Ok(self.router.help_text()),
        }
    }

    /// Route and run a chat message, returning the reply to send
    ///
    /// Returns `None` for messages that are not commands. Command errors become user
    /// messages; they are logged but never propagated.
    pub async fn handle_message(&self, user: UserId, content: &str) -> Option<String> {
        let routed = self.router.route(content)?;

        let outcome = match routed {
            Ok(invocation) => self.dispatch(user, &invocation).await,
            Err(err) => Err(err),
        };

        Some(match outcome {
            Ok(reply) => reply,
            Err(err) => {
                tracing::warn!("Command from user {user} failed: {err}");
                err.user_message(self.router.prefix())
            }
        })
    }
}

// The thread RNG is not Send, so it must not live across an await point
fn resolve_rows(rows: &[SheetRow], command: &str) -> Result<ResolvedFormula, LookupError> {
    lookup_and_resolve(rows, command, &mut rand::thread_rng())
}
