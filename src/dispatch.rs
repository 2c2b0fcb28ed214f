//! Command Dispatch
//!
//! Every user action builds a `Command`; one dispatcher performs the HTTP
//! call, reports failure, and triggers the list refresh on success. Keeps
//! the components free of per-button request wiring.

use web_sys::console;

use crate::api;
use crate::context::AppContext;
use crate::models::RecipePayload;

/// A user-triggered mutation of the recipe collection
#[derive(Debug, Clone)]
pub enum Command {
    CreateRecipe(RecipePayload),
    UpdateRecipe(u32, RecipePayload),
    DeleteRecipe(u32),
}

impl Command {
    fn verb(&self) -> &'static str {
        match self {
            Command::CreateRecipe(_) => "adding",
            Command::UpdateRecipe(..) => "updating",
            Command::DeleteRecipe(_) => "deleting",
        }
    }
}

pub async fn dispatch(ctx: AppContext, command: Command) {
    let verb = command.verb();

    let outcome = match command {
        Command::CreateRecipe(payload) => api::create_recipe(&payload).await.map(|recipe| {
            console::log_1(&format!("[API] Recipe added: {}", recipe.name).into());
        }),
        Command::UpdateRecipe(id, payload) => api::update_recipe(id, &payload).await.map(|recipe| {
            console::log_1(&format!("[API] Recipe {} updated: {}", id, recipe.name).into());
        }),
        Command::DeleteRecipe(id) => api::delete_recipe(id).await.map(|_| {
            console::log_1(&format!("[API] Recipe {} deleted", id).into());
        }),
    };

    match outcome {
        Ok(()) => ctx.reload(),
        Err(err) => {
            console::error_1(&format!("[API] Error {} recipe: {}", verb, err).into());
            ctx.show_error(format!("Error {} recipe. Please try again later.", verb));
        }
    }
}
