//! Console adapter
//!
//! Reads one message per line and writes each reply on its own line, as if every line
//! were sent by the same chat user. Useful for trying sheets without a bot token.

use anyhow::{Context, Result};
use sheetroll::{Commands, LinkStore, SheetFetcher, UserId};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// Run commands from `input` until end of input
pub async fn run<S, F, R, W>(
    commands: &Commands<S, F>,
    user: UserId,
    input: R,
    mut output: W,
) -> Result<()>
where
    S: LinkStore,
    F: SheetFetcher,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();

    while let Some(line) = lines.next_line().await.context("Failed to read input")? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match commands.handle_message(user, line).await {
            Some(reply) => {
                output
                    .write_all(format!("{reply}\n").as_bytes())
                    .await
                    .context("Failed to write reply")?;
                output.flush().await.context("Failed to write reply")?;
            }
            None => tracing::debug!("Ignoring non-command input: {line}"),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sheetroll::{InMemoryLinkStore, SheetId, SheetRow, SheetsResult};

    struct OneSheet;

    impl SheetFetcher for OneSheet {
        async fn fetch(&self, _id: &SheetId) -> SheetsResult<Vec<SheetRow>> {
            Ok(vec![["Heal", "", "4 + 2"].into_iter().collect()])
        }
    }

    #[tokio::test]
    async fn test_console_session() {
        let commands = Commands::new(InMemoryLinkStore::new(), OneSheet);
        let input = "\
!link https://docs.google.com/spreadsheets/d/XYZ/edit Cleric

just chatting
!roll heal Cleric
";
        let mut output = Vec::new();

        run(&commands, UserId::new(7), input.as_bytes(), &mut output)
            .await
            .unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Google Sheet `Cleric` linked successfully!\n\
             `heal` from `Cleric` → Formula: `4 + 2` | Roll: `None` | Result: `6`\n"
        );
    }
}
