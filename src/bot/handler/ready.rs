//! Ready event handler.
//!
//! Fired once per gateway connection after the handshake. Registers the global slash
//! commands so they stay in sync with the running build.

use serenity::all::{Command, Context, Ready};

use crate::bot::command;

/// Logs the connection and registers the global slash commands.
///
/// A failed registration is logged; previously registered commands keep working.
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    match Command::set_global_commands(&ctx.http, command::all()).await {
        Ok(commands) => tracing::info!("Registered {} slash commands", commands.len()),
        Err(e) => tracing::error!("Failed to register slash commands: {:?}", e),
    }
}
