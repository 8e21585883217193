//! The Serenity crate we're using for the Discord API is designed around callbacks to handle
//! events.  However, this does not mesh well with our plugin framework here.  To resolve this,
//! this module translates the callbacks to a distinct Event enum.

use crate::{context::Context, log_internal};
use serenity::all::{Message, Ready};

/// A Discord event
pub enum Event {
    Ready(Ready),
    Message(Message),
}

impl Event {
    // When an event occurs, iterate over all the plugins to see if any can/should handle it.
    pub async fn handle(self, ctx: Context<'_>) {
        for plugin in crate::plugin::plugins() {
            match plugin.handle(&ctx, &self).await {
                Ok(EventHandled::Yes) => return,
                Ok(EventHandled::No) => continue,
                Err(err) => log_internal!("Error in plugin {}: {}", plugin.name(), err),
            }
        }
    }

    /// Check if a message should be interpreted as a bot command, e.g. `;leaderboard 5` for the
    /// command named `leaderboard` under the configured prefix `;`.  Returns the message and the
    /// argument remainder after the command word.
    pub async fn is_bot_cmd<'a>(
        &'a self,
        ctx: &Context<'_>,
        cmd: &str,
    ) -> Option<(&'a Message, &'a str)> {
        let Event::Message(msg) = self else {
            return None;
        };

        let prefix = ctx.cfg.read().await.general.command_prefix.clone();
        let rest = msg.content.trim_start().strip_prefix(&prefix)?;

        let (word, args) = match rest.split_once(char::is_whitespace) {
            Some((word, args)) => (word, args),
            None => (rest, ""),
        };

        if word == cmd {
            Some((msg, args.trim()))
        } else {
            None
        }
    }
}

pub enum EventHandled {
    Yes,
    No,
}
