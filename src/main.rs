mod config;
mod context;
mod counters;
mod event;
mod handler;
mod helper;
mod lexicon;
mod logging;
mod matcher;
mod plugin;
mod store;

use serenity::{all::GatewayIntents, Client};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = crate::config::Config::load().await?;
    let token = cfg.general.discord_token.clone();
    let lexicon = crate::lexicon::Lexicon::load().await?;
    let counters = crate::counters::CounterStore::load().await?;
    let handler = handler::Handler::new(cfg, lexicon, counters);

    // Things we want discord to tell us about.
    let intents = GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    Client::builder(&token, intents)
        .event_handler(handler)
        .await?
        .start()
        .await
        .map_err(Into::into)
}
