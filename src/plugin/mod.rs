use crate::event::EventHandled;
use anyhow::Result;

pub use crate::context::Context;

mod debug;
mod export;
mod help;
mod ignore_bots;
mod leaderboard;
mod my_count;
mod server_total;
mod swear_track;
mod words;

#[serenity::async_trait]
pub trait Plugin: Sync + Send {
    /// Plugin name.  Used for debug
    fn name(&self) -> &'static str;
    /// Help message line.  None if no help message
    async fn usage(&self, ctx: &Context) -> Option<String>;
    /// Potentially handle event.  Returns:
    /// - Ok(EventHandled::Yes) if the event has been handled and no other plugin should attempt to
    ///   handle it
    /// - Ok(EventHandled::No) if another plugin should attempt to handle the event
    /// - Err if an error occurred
    async fn handle(&self, ctx: &Context, event: &crate::event::Event) -> Result<EventHandled>;
}

/// Ordered list of available plugins
pub fn plugins() -> Vec<Box<dyn Plugin>> {
    use crate::plugin::*;

    vec![
        // Core bot operations
        Box::new(debug::Debug),
        Box::new(ignore_bots::IgnoreBots),
        // Detection observes every guild message and passes it through, so a tracked word
        // inside a command message still counts.  Keep ahead of the command plugins.
        Box::new(swear_track::SwearTrack),
        Box::new(help::Help),
        // Reports
        Box::new(my_count::MyCount),
        Box::new(leaderboard::Leaderboard),
        Box::new(server_total::ServerTotal),
        // Administration
        Box::new(words::Words),
        Box::new(export::Export),
    ]
}
