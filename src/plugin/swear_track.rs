use crate::{event::*, helper::UserHelper, plugin::*};
use anyhow::Result;
use serenity::all::ReactionType;

/// Detects tracked words in guild messages and updates the counters.
pub struct SwearTrack;

#[serenity::async_trait]
impl Plugin for SwearTrack {
    fn name(&self) -> &'static str {
        "swear_track"
    }

    async fn usage(&self, _ctx: &Context) -> Option<String> {
        None
    }

    async fn handle(&self, ctx: &Context, event: &Event) -> Result<EventHandled> {
        let Event::Message(msg) = event else {
            return Ok(EventHandled::No);
        };

        // Counters are scoped per guild; DMs are not tracked.
        let Some(guild_id) = msg.guild_id else {
            return Ok(EventHandled::No);
        };

        let matches = {
            let lexicon = ctx.lexicon.read().await;
            crate::matcher::count_matches(&msg.content, lexicon.words())
        };
        if matches == 0 {
            return Ok(EventHandled::No);
        }

        let display_name = msg.author.nick_in_guild(ctx, msg.guild_id).await;

        {
            let mut counters = ctx.counters.write().await;
            counters.record(
                &guild_id.to_string(),
                &msg.author.id.to_string(),
                &display_name,
                matches as u64,
            );
            counters.save().await?;
        }

        // Acknowledge the detection.  Best effort: a failed reaction must not affect the
        // recorded counts or any later reply.
        let reaction = ReactionType::Unicode("\u{1F9E0}".to_owned()); // unicode brain
        let _ = msg.react(ctx.cache_http, reaction).await;

        // Let the command plugins see this message too.
        Ok(EventHandled::No)
    }
}
