//! User sheet links
//!
//! A [`LinkStore`] remembers which spreadsheet each user registered under a short
//! name. Links are keyed by user first, so users never see or overwrite each other's
//! names.

use std::collections::HashMap;
use std::fmt;
use std::sync::{PoisonError, RwLock};

use sheetroll_sheets::SheetId;

/// Identity of a chat user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(u64);

impl UserId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Storage for `(user, sheet name) -> sheet` links
///
/// Sheet names are compared exactly (case-sensitive). Writing an existing key replaces
/// the previous link.
pub trait LinkStore: Send + Sync {
    /// Look up the sheet a user linked under `name`
    fn get(&self, user: UserId, name: &str) -> Option<SheetId>;

    /// Link `name` to `sheet` for a user, returning the link it replaced
    fn put(&self, user: UserId, name: &str, sheet: SheetId) -> Option<SheetId>;
}

/// Process-lifetime link store backed by a map
#[derive(Debug, Default)]
pub struct InMemoryLinkStore {
    links: RwLock<HashMap<UserId, HashMap<String, SheetId>>>,
}

impl InMemoryLinkStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LinkStore for InMemoryLinkStore {
    fn get(&self, user: UserId, name: &str) -> Option<SheetId> {
        let links = self.links.read().unwrap_or_else(PoisonError::into_inner);
        links.get(&user)?.get(name).cloned()
    }

    fn put(&self, user: UserId, name: &str, sheet: SheetId) -> Option<SheetId> {
        let mut links = self.links.write().unwrap_or_else(PoisonError::into_inner);
        links
            .entry(user)
            .or_default()
            .insert(name.to_string(), sheet)
    }
}
