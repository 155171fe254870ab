//! Slash commands.
//!
//! Each command module exposes its `NAME`, a `register()` definition and a `run()` handler.
//! Handlers defer the interaction before doing any work, since a ranking search can take
//! longer than Discord's acknowledgement window, and answer by editing the deferred reply.

pub mod character;
pub mod format;
pub mod progress;

use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    EditInteractionResponse,
};

use crate::error::AppError;

const NAME_OPTION: &str = "name";
const MAX_NAME_LENGTH: u16 = 32;

/// Definitions of every slash command, registered on ready.
pub fn all() -> Vec<CreateCommand> {
    vec![character::register(), progress::register()]
}

/// Required `name` option shared by all commands.
fn name_option() -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::String, NAME_OPTION, "Character name")
        .required(true)
        .max_length(MAX_NAME_LENGTH)
}

/// Reads the trimmed `name` option, `None` when absent or blank.
fn name_argument(command: &CommandInteraction) -> Option<String> {
    command
        .data
        .options
        .iter()
        .find(|option| option.name == NAME_OPTION)
        .and_then(|option| option.value.as_str())
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}

/// Replaces the deferred reply of `command` with `response`.
pub async fn respond(
    ctx: &Context,
    command: &CommandInteraction,
    response: EditInteractionResponse,
) -> Result<(), AppError> {
    command.edit_response(&ctx.http, response).await?;

    Ok(())
}
