use crate::{
    config::Config, context::Context, counters::CounterStore, event::Event, lexicon::Lexicon,
};
use serenity::all::{Message, Ready};
use tokio::sync::RwLock;

/// Discord event handler
pub struct Handler {
    cfg: RwLock<Config>,
    lexicon: RwLock<Lexicon>,
    counters: RwLock<CounterStore>,
}

impl<'a> Handler {
    pub fn new(cfg: Config, lexicon: Lexicon, counters: CounterStore) -> Self {
        Self {
            cfg: RwLock::new(cfg),
            lexicon: RwLock::new(lexicon),
            counters: RwLock::new(counters),
        }
    }

    fn ctx(&'a self, discord_ctx: &'a serenity::all::Context) -> Context<'a> {
        Context {
            cfg: &self.cfg,
            lexicon: &self.lexicon,
            counters: &self.counters,
            cache: &discord_ctx.cache,
            http: &discord_ctx.http,
            cache_http: discord_ctx,
        }
    }
}

#[serenity::async_trait]
impl serenity::all::EventHandler for Handler {
    async fn ready(&self, discord_ctx: serenity::all::Context, ready: Ready) {
        Event::Ready(ready).handle(self.ctx(&discord_ctx)).await;
    }

    async fn message(&self, discord_ctx: serenity::all::Context, msg: Message) {
        Event::Message(msg).handle(self.ctx(&discord_ctx)).await;
    }
}
