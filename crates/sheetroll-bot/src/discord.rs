//! Discord adapter

use anyhow::{Context as _, Result};
use serenity::all::{Context, EventHandler, GatewayIntents, Message, Ready};
use serenity::async_trait;
use serenity::Client;
use sheetroll::{Commands, HttpSheetFetcher, InMemoryLinkStore, UserId};

pub type BotCommands = Commands<InMemoryLinkStore, HttpSheetFetcher>;

struct Handler {
    commands: BotCommands,
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        tracing::info!("Logged in as {}", ready.user.name);
    }

    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.bot {
            return;
        }

        let user = UserId::new(msg.author.id.get());
        let Some(reply) = self.commands.handle_message(user, &msg.content).await else {
            return;
        };

        if let Err(err) = msg.channel_id.say(&ctx.http, reply).await {
            tracing::warn!("Failed to reply in channel {}: {err}", msg.channel_id);
        }
    }
}

/// Connect to Discord and serve commands until the connection ends
pub async fn serve(token: &str, commands: BotCommands) -> Result<()> {
    let intents = GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let mut client = Client::builder(token, intents)
        .event_handler(Handler { commands })
        .await
        .context("Failed to create Discord client")?;

    client.start().await.context("Discord connection failed")?;
    Ok(())
}
