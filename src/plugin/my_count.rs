use crate::{event::*, plugin::*};
use anyhow::Result;

pub struct MyCount;

#[serenity::async_trait]
impl Plugin for MyCount {
    fn name(&self) -> &'static str {
        "my-count"
    }

    async fn usage(&self, ctx: &Context) -> Option<String> {
        let prefix = &ctx.cfg.read().await.general.command_prefix;
        Some(format!(
            "{}{} - show how many tracked words you have said here",
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

        let reply = {
            let counters = ctx.counters.read().await;
            match counters.member_count(&server_id, &msg.author.id.to_string()) {
                Some(count) => format!("You have said **{}** tracked word(s) on this server.", count),
                None => "You haven't said any tracked words on this server yet.".to_owned(),
            }
        };

        msg.reply(ctx.cache_http, reply).await?;
        Ok(EventHandled::Yes)
    }
}
