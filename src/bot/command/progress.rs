use serenity::all::{CommandInteraction, Context, CreateCommand, EditInteractionResponse};

use crate::{
    bot::command::{format, name_argument, name_option, respond},
    error::AppError,
    service::trend::TrendService,
    state::AppState,
};

pub const NAME: &str = "progress";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Show a character's leveling speed and reset projections")
        .add_option(name_option())
}

/// Handles `/progress name`.
///
/// Reads stored history only. Characters that were never looked up are reported as
/// untracked.
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

    let response = match TrendService::new(&state.db).get_progress(&name).await? {
        Some(progress) => EditInteractionResponse::new().embed(format::progress_embed(&progress)?),
        None => EditInteractionResponse::new().content(format::untracked_message(&name)),
    };

    respond(ctx, command, response).await
}
