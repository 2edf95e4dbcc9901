//! Command error types

use sheetroll_dice::DiceError;
use sheetroll_sheets::SheetsError;
use thiserror::Error;

use crate::lookup::LookupError;
use crate::router::CommandKind;
use crate::store::UserId;

/// Result type for command handlers
pub type CommandResult<T> = std::result::Result<T, CommandError>;

/// Errors a chat command can end in
///
/// Every variant is reported back to the user who ran the command; see
/// [`CommandError::user_message`].
#[derive(Debug, Error)]
pub enum CommandError {
    /// The link does not contain a spreadsheet identifier
    #[error("Invalid spreadsheet link: {url}")]
    InvalidSheetUrl { url: String },

    /// The user has no sheet linked under that name
    #[error("User {user} has no sheet linked as '{sheet}'")]
    UnknownSheetLink { user: UserId, sheet: String },

    /// The sheet could not be retrieved
    #[error("Failed to retrieve sheet '{sheet}': {source}")]
    RetrievalFailure {
        sheet: String,
        #[source]
        source: SheetsError,
    },

    /// Lookup or evaluation of the requested formula failed
    #[error("In sheet '{sheet}': {source}")]
    Lookup {
        sheet: String,
        #[source]
        source: LookupError,
    },

    /// Missing arguments
    #[error("Missing arguments for {command}")]
    Usage { command: CommandKind },
}

impl CommandError {
    /// Short message for the user who ran the command
    ///
    /// `prefix` is the command prefix, used when the message suggests a command.
    pub fn user_message(&self, prefix: &str) -> String {
        match self {
            CommandError::InvalidSheetUrl { .. } => {
                "Invalid Google Sheets link. Please provide a valid link.".to_string()
            }
            CommandError::UnknownSheetLink { sheet, .. } => format!(
                "You haven't linked a sheet named `{sheet}`! Use `{prefix}link [URL] SheetName` to add it."
            ),
            CommandError::RetrievalFailure { sheet, .. } => {
                format!("Failed to retrieve data from `{sheet}`.")
            }
            CommandError::Lookup { sheet, source } => match source {
                LookupError::CommandNotFound { command } => format!(
                    "Command `{command}` not found in `{sheet}`. Make sure it exists in Column A!"
                ),
                LookupError::InvalidDiceNotation {
                    formula,
                    source: DiceError::TooManyDice { max, .. },
                } => format!(
                    "Too many dice in formula: `{formula}`. A single roll can throw at most {max} dice."
                ),
                LookupError::InvalidDiceNotation { formula, .. } => {
                    format!("Invalid dice notation in formula: `{formula}`")
                }
                LookupError::FormulaEvaluation { source, .. } => {
                    format!("Error in formula: {source}")
                }
            },
            CommandError::Usage { command } => {
                format!("Usage: `{prefix}{}`", command.usage())
            }
        }
    }
}
