//! Inline Edit Form Component
//!
//! Replaces a recipe card's content while editing, pre-filled with the
//! current name and comma-joined ingredients.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::context::AppContext;
use crate::dispatch::{self, Command};
use crate::ingredients::{join_ingredients, parse_ingredients};
use crate::models::{Recipe, RecipePayload};

#[component]
pub fn EditRecipeForm(recipe: Recipe, #[prop(into)] on_saved: Callback<()>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (name, set_name) = signal(recipe.name.clone());
    let (raw_ingredients, set_raw_ingredients) = signal(join_ingredients(&recipe.ingredients));
    let id = recipe.id;

    let save_recipe = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = id else { return };
        let payload = RecipePayload {
            name: name.get(),
            ingredients: parse_ingredients(&raw_ingredients.get()),
        };
        spawn_local(dispatch::dispatch(ctx, Command::UpdateRecipe(id, payload)));
        on_saved.run(());
    };

    view! {
        <form class="edit-recipe-form" on:submit=save_recipe>
            <label for="edit-name">"Name:"</label>
            <input
                type="text"
                id="edit-name"
                required
                prop:value=move || name.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_name.set(input.value());
                }
            />

            <label for="edit-ingredients">"Ingredients:"</label>
            <textarea
                id="edit-ingredients"
                required
                prop:value=move || raw_ingredients.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                    set_raw_ingredients.set(input.value());
                }
            />

            <button type="submit">"Update"</button>
        </form>
    }
}
