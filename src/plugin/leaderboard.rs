use crate::{event::*, plugin::*};
use anyhow::Result;

const DEFAULT_LIMIT: usize = 10;
const MIN_LIMIT: usize = 1;
const MAX_LIMIT: usize = 25;

pub struct Leaderboard;

#[serenity::async_trait]
impl Plugin for Leaderboard {
    fn name(&self) -> &'static str {
        "leaderboard"
    }

    async fn usage(&self, ctx: &Context) -> Option<String> {
        let prefix = &ctx.cfg.read().await.general.command_prefix;
        Some(format!(
            "{}{} [limit] - top members by tracked words, plus the server total",
            prefix,
            self.name()
        ))
    }

    async fn handle(&self, ctx: &Context, event: &Event) -> Result<EventHandled> {
        let Some((msg, args)) = event.is_bot_cmd(ctx, self.name()).await else {
            return Ok(EventHandled::No);
        };

        let Some(guild_id) = msg.guild_id else {
            msg.reply(ctx.cache_http, "This command can only be used in a server.")
                .await?;
            return Ok(EventHandled::Yes);
        };
        let server_id = guild_id.to_string();
        let limit = parse_limit(args);

        {
            let mut counters = ctx.counters.write().await;
            if counters.ensure_server(&server_id) {
                counters.save().await?;
            }
        }

        let reply = {
            let counters = ctx.counters.read().await;
            let top = counters.top(&server_id, limit);

            if top.is_empty() {
                "Nobody has said any tracked words on this server yet.".to_owned()
            } else {
                let mut reply = String::from("**Top members by tracked words:**\n");
                for (place, (_member_id, member)) in top.iter().enumerate() {
                    reply.push_str(&format!(
                        "**{}. {}** — {}\n",
                        place + 1,
                        member.display_name,
                        member.count
                    ));
                }
                reply.push_str(&format!("Server total: **{}**", counters.total(&server_id)));
                reply
            }
        };

        msg.reply(ctx.cache_http, reply).await?;
        Ok(EventHandled::Yes)
    }
}

// Missing or unparsable limit falls back to the default; numeric input is clamped.
fn parse_limit(args: &str) -> usize {
    match args.split_whitespace().next() {
        None => DEFAULT_LIMIT,
        Some(arg) => match arg.parse::<usize>() {
            Ok(limit) => limit.clamp(MIN_LIMIT, MAX_LIMIT),
            Err(_) => DEFAULT_LIMIT,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_defaults_and_clamps() {
        assert_eq!(parse_limit(""), 10);
        assert_eq!(parse_limit("nonsense"), 10);
        assert_eq!(parse_limit("5"), 5);
        assert_eq!(parse_limit("0"), 1);
        assert_eq!(parse_limit("100"), 25);
    }
}
