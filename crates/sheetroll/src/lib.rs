//! # sheetroll
//!
//! Roll spreadsheet-defined dice formulas from chat commands.
//!
//! Users link a Google Sheet under a short name, then ask for a command by name. The
//! sheet's row for that command holds an arithmetic formula in its third column; the
//! first dice token in it (`1d20+5`) is rolled, substituted and the formula evaluated.
//!
//! ## Features
//!
//! - Per-user sheet links ([`LinkStore`], [`InMemoryLinkStore`])
//! - Command routing with a configurable prefix ([`CommandRouter`])
//! - Formula lookup and dice substitution ([`lookup_and_resolve`])
//! - Chat-ready replies for every outcome ([`Commands::handle_message`])
//!
//! ## Example
//!
//! ```rust,no_run
//! use sheetroll::prelude::*;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let fetcher = HttpSheetFetcher::new(FetchOptions::default())?;
//! let commands = Commands::new(InMemoryLinkStore::new(), fetcher);
//! let user = UserId::new(42);
//!
//! commands
//!     .handle_message(user, "!link https://docs.google.com/spreadsheets/d/abc123/edit Hero")
//!     .await;
//! if let Some(reply) = commands.handle_message(user, "!roll Attack Hero").await {
//!     println!("{reply}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod commands;
pub mod error;
pub mod lookup;
pub mod prelude;
pub mod router;
pub mod store;

pub use commands::{Commands, RollReport};
pub use error::{CommandError, CommandResult};
pub use lookup::{
    find_formula, lookup_and_resolve, resolve_formula, LookupError, ResolvedFormula,
    FORMULA_COLUMN, NAME_COLUMN,
};
pub use router::{split_arguments, CommandKind, CommandRouter, Invocation};
pub use store::{InMemoryLinkStore, LinkStore, UserId};

// Re-export the building blocks
pub use sheetroll_dice::{DiceError, DiceExpression};
pub use sheetroll_formula::{evaluate_str, format_number, FormulaError};
pub use sheetroll_sheets::{
    extract_sheet_id, FetchOptions, HttpSheetFetcher, SheetFetcher, SheetId, SheetRow,
    SheetsError, SheetsResult, DEFAULT_CSV_URL_TEMPLATE,
};
