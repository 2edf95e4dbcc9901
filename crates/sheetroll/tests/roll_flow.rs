//! Link and roll through the public API with an in-memory sheet source

use std::collections::HashMap;

use pretty_assertions::assert_eq;
use sheetroll::prelude::*;
use sheetroll::{LookupError, SheetsError, SheetsResult};

/// Sheets keyed by identifier; unknown identifiers answer 404
#[derive(Default)]
struct MemorySheets {
    sheets: HashMap<String, Vec<SheetRow>>,
}

impl MemorySheets {
    fn with_sheet(mut self, id: &str, data: &[&[&str]]) -> Self {
        let rows = data
            .iter()
            .map(|fields| fields.iter().copied().collect())
            .collect();
        self.sheets.insert(id.to_string(), rows);
        self
    }
}

impl SheetFetcher for MemorySheets {
    async fn fetch(&self, id: &SheetId) -> SheetsResult<Vec<SheetRow>> {
        self.sheets
            .get(id.as_str())
            .cloned()
            .ok_or_else(|| SheetsError::Status {
                status: 404,
                url: format!("memory://{id}"),
            })
    }
}

fn sheet_url(id: &str) -> String {
    format!("https://docs.google.com/spreadsheets/d/{id}/edit#gid=0")
}

fn bot() -> Commands<InMemoryLinkStore, MemorySheets> {
    let sheets = MemorySheets::default()
        .with_sheet(
            "HERO-1",
            &[
                &["Command", "Notes", "Formula"],
                &["Attack", "sword", "1d8+3"],
                &["Fireball", "", "8d6"],
                &["Sneak", "", "2 * (1d4) + 1"],
                &["Rest", "", "10 / 4"],
                &["Broken", "", "1d0"],
                &["Horde", "", "1500d6"],
                &["Typo", "", "2 + "],
            ],
        )
        .with_sheet("VILLAIN_2", &[&["Attack", "", "1d20-1"]]);

    Commands::new(InMemoryLinkStore::new(), sheets)
}

const ALICE: UserId = UserId::new(100);
const BOB: UserId = UserId::new(200);

#[tokio::test]
async fn test_link_then_roll() {
    let bot = bot();
    bot.link(ALICE, &sheet_url("HERO-1"), "Hero").unwrap();

    for _ in 0..50 {
        let report = bot.roll(ALICE, "attack", "Hero").await.unwrap();
        let roll = report.resolved.roll.unwrap();
        assert!((4..=11).contains(&roll), "rolled {roll}");
        assert_eq!(report.resolved.result, roll as f64);
    }
}

#[tokio::test]
async fn test_dice_inside_arithmetic() {
    let bot = bot();
    bot.link(ALICE, &sheet_url("HERO-1"), "Hero").unwrap();

    for _ in 0..50 {
        let report = bot.roll(ALICE, "SNEAK", "Hero").await.unwrap();
        let r = report.resolved.roll.unwrap();
        assert!((1..=4).contains(&r));
        assert_eq!(report.resolved.result, (2 * r + 1) as f64);
    }
}

#[tokio::test]
async fn test_fractional_result_reply() {
    let bot = bot();
    bot.link(ALICE, &sheet_url("HERO-1"), "Hero").unwrap();

    let reply = bot.handle_message(ALICE, "!roll Rest Hero").await.unwrap();
    assert_eq!(
        reply,
        "`Rest` from `Hero` → Formula: `10 / 4` | Roll: `None` | Result: `2.5`"
    );
}

#[tokio::test]
async fn test_links_are_per_user() {
    let bot = bot();
    bot.link(ALICE, &sheet_url("HERO-1"), "S1").unwrap();

    let err = bot.roll(BOB, "Attack", "S1").await.unwrap_err();
    assert!(matches!(err, CommandError::UnknownSheetLink { user, .. } if user == BOB));

    bot.link(BOB, &sheet_url("VILLAIN_2"), "S1").unwrap();
    let report = bot.roll(BOB, "Attack", "S1").await.unwrap();
    assert!((0..=19).contains(&report.resolved.roll.unwrap()));
    // Alice's link is untouched
    let report = bot.roll(ALICE, "Attack", "S1").await.unwrap();
    assert!((4..=11).contains(&report.resolved.roll.unwrap()));
}

#[tokio::test]
async fn test_relinking_replaces_sheet() {
    let bot = bot();
    bot.link(ALICE, &sheet_url("HERO-1"), "Main").unwrap();
    bot.link(ALICE, &sheet_url("VILLAIN_2"), "Main").unwrap();

    let err = bot.roll(ALICE, "Fireball", "Main").await.unwrap_err();
    assert!(matches!(
        err,
        CommandError::Lookup {
            source: LookupError::CommandNotFound { .. },
            ..
        }
    ));
}

#[tokio::test]
async fn test_failure_replies() {
    let bot = bot();

    let cases = [
        (
            "!link https://example.com/not-a-sheet Hero",
            "Invalid Google Sheets link. Please provide a valid link.",
        ),
        (
            "!roll Attack Hero",
            "You haven't linked a sheet named `Hero`! Use `!link [URL] SheetName` to add it.",
        ),
    ];
    for (message, expected) in cases {
        assert_eq!(bot.handle_message(ALICE, message).await.unwrap(), expected);
    }

    bot.link(ALICE, &sheet_url("HERO-1"), "Hero").unwrap();
    bot.link(ALICE, &sheet_url("MISSING"), "Gone").unwrap();

    let cases = [
        (
            "!roll Dance Hero",
            "Command `Dance` not found in `Hero`. Make sure it exists in Column A!",
        ),
        (
            "!roll Broken Hero",
            "Invalid dice notation in formula: `1d0`",
        ),
        (
            "!roll Horde Hero",
            "Too many dice in formula: `1500d6`. A single roll can throw at most 1000 dice.",
        ),
        (
            "!roll Typo Hero",
            "Error in formula: Parse error: Unexpected end of input",
        ),
        ("!roll Attack Gone", "Failed to retrieve data from `Gone`."),
    ];
    for (message, expected) in cases {
        assert_eq!(bot.handle_message(ALICE, message).await.unwrap(), expected);
    }
}
