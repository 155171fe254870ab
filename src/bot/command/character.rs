use serenity::all::{CommandInteraction, Context, CreateCommand, EditInteractionResponse};

use crate::{
    bot::command::{format, name_argument, name_option, respond},
    error::AppError,
    service::character::CharacterService,
    state::AppState,
};

pub const NAME: &str = "character";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Show a character's guild, level and resets")
        .add_option(name_option())
}

/// Handles `/character name`.
///
/// Runs the cached lookup, which may search every guild ranking.
pub async fn run(
    ctx: &Context,
    state: &AppState,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    command.defer(&ctx.http).await?;

    let Some(name) = name_argument(command) else {
        let response = EditInteractionResponse::new().content(format::MISSING_NAME_MESSAGE);
        return respond(ctx, command, response).await;
    };

    let service = CharacterService::new(&state.db, &state.lookup);

    let response = match service.lookup(&name).await {
        Some(lookup) => EditInteractionResponse::new().embed(format::character_embed(&lookup)?),
        None => EditInteractionResponse::new().content(format::not_found_message(&name)),
    };

    respond(ctx, command, response).await
}
