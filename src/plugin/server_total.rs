use crate::{event::*, plugin::*};
use anyhow::Result;

pub struct ServerTotal;

#[serenity::async_trait]
impl Plugin for ServerTotal {
    fn name(&self) -> &'static str {
        "server-total"
    }

    async fn usage(&self, ctx: &Context) -> Option<String> {
        let prefix = &ctx.cfg.read().await.general.command_prefix;
        Some(format!(
            "{}{} - total tracked words said on this server",
            prefix,
            self.name()
        ))
    }

    async fn handle(&self, ctx: &Context, event: &Event) -> Result<EventHandled> {
        let Some((msg, _)) = event.is_bot_cmd(ctx, self.name()).await else {
            return Ok(EventHandled::No);
        };

        let Some(guild_id) = msg.guild_id else {
            msg.reply(ctx.cache_http, "This command can only be used in a server.")
                .await?;
            return Ok(EventHandled::Yes);
        };
        let server_id = guild_id.to_string();

        {
            let mut counters = ctx.counters.write().await;
            if counters.ensure_server(&server_id) {
                counters.save().await?;
            }
        }

        let total = ctx.counters.read().await.total(&server_id);
        msg.reply(
            ctx.cache_http,
            format!("Total tracked words on this server: **{}**", total),
        )
        .await?;
        Ok(EventHandled::Yes)
    }
}
