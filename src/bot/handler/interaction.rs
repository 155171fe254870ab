use serenity::all::{CommandInteraction, Context, EditInteractionResponse, Interaction};

use crate::{
    bot::command::{self, character, progress},
    state::AppState,
};

const FAILURE_MESSAGE: &str =
    "Something went wrong while handling this command. Please try again later.";

/// Dispatches slash commands to their handlers.
///
/// Errors are logged with full detail; the user only sees a generic message.
pub async fn handle_interaction_create(state: &AppState, ctx: Context, interaction: Interaction) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    tracing::debug!(
        "Received /{} from {}",
        command.data.name,
        command.user.name
    );

    let result = match command.data.name.as_str() {
        character::NAME => character::run(&ctx, state, &command).await,
        progress::NAME => progress::run(&ctx, state, &command).await,
        other => {
            tracing::warn!("Received unknown command /{}", other);
            return;
        }
    };

    if let Err(e) = result {
        tracing::error!("Failed to handle /{}: {}", command.data.name, e);
        report_failure(&ctx, &command).await;
    }
}

async fn report_failure(ctx: &Context, command: &CommandInteraction) {
    let response = EditInteractionResponse::new().content(FAILURE_MESSAGE);

    if let Err(e) = command::respond(ctx, command, response).await {
        tracing::error!("Failed to report command failure: {}", e);
    }
}

