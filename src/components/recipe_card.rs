//! Recipe Card Component
//!
//! One rendered recipe entry. Starts in display mode with delete and edit
//! buttons; the edit button swaps the card body for the inline edit form.
//! There is no cancel out of editing, a full list refresh rebuilds the card
//! in display mode.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::EditRecipeForm;
use crate::context::AppContext;
use crate::dispatch::{self, Command};
use crate::ingredients::ingredient_line;
use crate::models::Recipe;

#[component]
pub fn RecipeCard(recipe: Recipe) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (editing, set_editing) = signal(false);
    let (confirm_delete, set_confirm_delete) = signal(false);

    let id = recipe.id;
    let name = recipe.name.clone();
    let ingredient_line = ingredient_line(&recipe.ingredients);

    let delete_recipe = move |_| {
        set_confirm_delete.set(false);
        if let Some(id) = id {
            spawn_local(dispatch::dispatch(ctx, Command::DeleteRecipe(id)));
        }
    };

    view! {
        <div class="recipe-card">
            <Show when=move || !editing.get()>
                <h3>{name.clone()}</h3>
                <p>{ingredient_line.clone()}</p>
                <div class="card-actions">
                    <Show when=move || !confirm_delete.get()>
                        <button
                            class="delete-button"
                            on:click=move |_| set_confirm_delete.set(true)
                        >
                            "Delete"
                        </button>
                    </Show>
                    <Show when=move || confirm_delete.get()>
                        <span class="delete-confirm">
                            <span class="delete-confirm-text">"Delete this recipe?"</span>
                            <button class="confirm-btn" on:click=delete_recipe>
                                "✓"
                            </button>
                            <button
                                class="cancel-btn"
                                on:click=move |_| set_confirm_delete.set(false)
                            >
                                "✗"
                            </button>
                        </span>
                    </Show>
                    <button class="edit-button" on:click=move |_| set_editing.set(true)>
                        "Edit"
                    </button>
                </div>
            </Show>
            <Show when=move || editing.get()>
                <EditRecipeForm
                    recipe=recipe.clone()
                    on_saved=Callback::new(move |_| set_editing.set(false))
                />
            </Show>
        </div>
    }
}
