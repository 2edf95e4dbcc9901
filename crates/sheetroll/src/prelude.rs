//! Prelude module - common imports for sheetroll users
//!
//! ```rust
//! use sheetroll::prelude::*;
//! ```

pub use crate::{
    CommandError,
    CommandResult,
    CommandRouter,
    Commands,
    FetchOptions,
    HttpSheetFetcher,
    InMemoryLinkStore,
    Invocation,
    LinkStore,
    RollReport,
    SheetFetcher,
    SheetId,
    SheetRow,
    UserId,
};
