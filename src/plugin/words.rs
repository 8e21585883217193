use crate::{
    event::*,
    helper::MessageHelper,
    lexicon::{AddOutcome, RemoveOutcome},
    plugin::*,
};
use anyhow::Result;
use serenity::all::Message;

/// Manage and show the tracked-word list
pub struct Words;

#[serenity::async_trait]
impl Plugin for Words {
    fn name(&self) -> &'static str {
        "words"
    }

    async fn usage(&self, ctx: &Context) -> Option<String> {
        let prefix = &ctx.cfg.read().await.general.command_prefix;
        Some(format!(
            "{p}add-word <word> - track a word (admin only)\n\
             {p}remove-word <word> - stop tracking a word (admin only)\n\
             {p}list-words - show all tracked words",
            p = prefix
        ))
    }

    async fn handle(&self, ctx: &Context, event: &Event) -> Result<EventHandled> {
        if let Some((msg, args)) = event.is_bot_cmd(ctx, "add-word").await {
            return add_word(ctx, msg, args).await;
        }
        if let Some((msg, args)) = event.is_bot_cmd(ctx, "remove-word").await {
            return remove_word(ctx, msg, args).await;
        }
        if let Some((msg, _)) = event.is_bot_cmd(ctx, "list-words").await {
            return list_words(ctx, msg).await;
        }

        Ok(EventHandled::No)
    }
}

/// Word-list mutation requires the Administrator permission in the guild the command was
/// issued from.  Replies to the user and returns false when the requirement is not met.
async fn require_admin(ctx: &Context<'_>, msg: &Message) -> Result<bool> {
    if msg.guild_id.is_none() {
        msg.reply(ctx.cache_http, "This command can only be used in a server.")
            .await?;
        return Ok(false);
    }

    if !msg.is_from_admin(ctx) {
        msg.reply(ctx.cache_http, "Only server admins can use this command.")
            .await?;
        return Ok(false);
    }

    Ok(true)
}

async fn add_word(ctx: &Context<'_>, msg: &Message, args: &str) -> Result<EventHandled> {
    if !require_admin(ctx, msg).await? {
        return Ok(EventHandled::Yes);
    }

    let Some(word) = args.split_whitespace().next() else {
        let prefix = ctx.cfg.read().await.general.command_prefix.clone();
        msg.reply(ctx.cache_http, format!("Usage: {}add-word <word>", prefix))
            .await?;
        return Ok(EventHandled::Yes);
    };

    let reply = {
        let mut lexicon = ctx.lexicon.write().await;
        match lexicon.insert(word) {
            AddOutcome::Added => {
                lexicon.save().await?;
                format!("Now tracking **{}**.", word.to_lowercase())
            }
            AddOutcome::AlreadyPresent => format!("`{}` is already tracked.", word),
        }
    };

    msg.reply(ctx.cache_http, reply).await?;
    Ok(EventHandled::Yes)
}

async fn remove_word(ctx: &Context<'_>, msg: &Message, args: &str) -> Result<EventHandled> {
    if !require_admin(ctx, msg).await? {
        return Ok(EventHandled::Yes);
    }

    let Some(word) = args.split_whitespace().next() else {
        let prefix = ctx.cfg.read().await.general.command_prefix.clone();
        msg.reply(
            ctx.cache_http,
            format!("Usage: {}remove-word <word>", prefix),
        )
        .await?;
        return Ok(EventHandled::Yes);
    };

    let reply = {
        let mut lexicon = ctx.lexicon.write().await;
        match lexicon.remove(word) {
            RemoveOutcome::Removed => {
                lexicon.save().await?;
                format!("No longer tracking **{}**.", word.to_lowercase())
            }
            RemoveOutcome::NotPresent => format!("`{}` is not tracked.", word),
        }
    };

    msg.reply(ctx.cache_http, reply).await?;
    Ok(EventHandled::Yes)
}

async fn list_words(ctx: &Context<'_>, msg: &Message) -> Result<EventHandled> {
    if msg.guild_id.is_none() {
        msg.reply(ctx.cache_http, "This command can only be used in a server.")
            .await?;
        return Ok(EventHandled::Yes);
    }

    let reply = {
        let lexicon = ctx.lexicon.read().await;
        if lexicon.words().is_empty() {
            "No words are tracked right now.".to_owned()
        } else {
            // BTreeSet iteration is already lexicographic
            let listed: Vec<&str> = lexicon.words().iter().map(String::as_str).collect();
            format!("Tracked words: {}", listed.join(", "))
        }
    };

    msg.reply(ctx.cache_http, reply).await?;
    Ok(EventHandled::Yes)
}
