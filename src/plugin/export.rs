use crate::{event::*, helper::MessageHelper, plugin::*};
use anyhow::Result;
use serenity::all::{CreateAttachment, CreateMessage, Message};
use std::path::PathBuf;

/// Owner-only raw dumps of the persisted store files
pub struct Export;

#[serenity::async_trait]
impl Plugin for Export {
    fn name(&self) -> &'static str {
        "export"
    }

    async fn usage(&self, ctx: &Context) -> Option<String> {
        let prefix = &ctx.cfg.read().await.general.command_prefix;
        Some(format!(
            "{p}export-words - raw words file (bot owner only)\n\
             {p}export-stats - raw stats file (bot owner only)",
            p = prefix
        ))
    }

    async fn handle(&self, ctx: &Context, event: &Event) -> Result<EventHandled> {
        if let Some((msg, _)) = event.is_bot_cmd(ctx, "export-words").await {
            let path = crate::lexicon::Lexicon::path()?;
            return export_file(ctx, msg, path, "words.json").await;
        }
        if let Some((msg, _)) = event.is_bot_cmd(ctx, "export-stats").await {
            let path = crate::counters::CounterStore::path()?;
            return export_file(ctx, msg, path, "stats.json").await;
        }

        Ok(EventHandled::No)
    }
}

async fn export_file(
    ctx: &Context<'_>,
    msg: &Message,
    path: PathBuf,
    file_name: &str,
) -> Result<EventHandled> {
    if !msg.is_from_owner(ctx).await {
        msg.reply(ctx.cache_http, "Only bot owners can use this command.")
            .await?;
        return Ok(EventHandled::Yes);
    }

    // A failed read is reported to the invoker rather than treated as a plugin error.
    match tokio::fs::read(&path).await {
        Ok(data) => {
            let attachment = CreateAttachment::bytes(data, file_name);
            let message = CreateMessage::new().add_file(attachment);
            msg.channel_id.send_message(ctx.cache_http, message).await?;
        }
        Err(e) => {
            msg.reply(
                ctx.cache_http,
                format!("Could not read `{}`: {}", file_name, e),
            )
            .await?;
        }
    }

    Ok(EventHandled::Yes)
}
