use serenity::all::{Client, GatewayIntents};

use crate::{bot::handler::Handler, config::Config, error::AppError, state::AppState};

/// Builds the Discord bot client without connecting it.
///
/// Only slash commands are handled, so the unprivileged `GUILDS` intent is enough. The
/// returned client exposes its shard manager, which `main` uses to stop the bot.
///
/// # Arguments
/// - `config` - Application configuration holding the bot token
/// - `state` - Shared application state handed to the event handler
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError::DiscordErr)` - Client construction failed
pub async fn init_bot(config: &Config, state: AppState) -> Result<Client, AppError> {
    let intents = GatewayIntents::GUILDS;

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(Handler::new(state))
        .await?;

    Ok(client)
}

/// Runs the bot until its shards are shut down.
///
/// Should be called from within a spawned task since it only returns once the gateway
/// connection ends.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot");

    client.start().await?;

    Ok(())
}
