//! New Recipe Form Component
//!
//! Form for creating a recipe from a name and comma-separated ingredient text.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::context::AppContext;
use crate::dispatch::{self, Command};
use crate::ingredients::parse_ingredients;
use crate::models::RecipePayload;

#[component]
pub fn NewRecipeForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (name, set_name) = signal(String::new());
    let (raw_ingredients, set_raw_ingredients) = signal(String::new());

    let create_recipe = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let payload = RecipePayload {
            name: name.get(),
            ingredients: parse_ingredients(&raw_ingredients.get()),
        };
        spawn_local(dispatch::dispatch(ctx, Command::CreateRecipe(payload)));
        // Cleared right away, without waiting for the server
        set_name.set(String::new());
        set_raw_ingredients.set(String::new());
    };

    view! {
        <form id="recipe-form" class="recipe-form" on:submit=create_recipe>
            <label for="recipe-name">"Name:"</label>
            <input
                type="text"
                id="recipe-name"
                required
                prop:value=move || name.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_name.set(input.value());
                }
            />

            <label for="ingredients">"Ingredients (comma separated):"</label>
            <input
                type="text"
                id="ingredients"
                required
                prop:value=move || raw_ingredients.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_raw_ingredients.set(input.value());
                }
            />

            <button type="submit">"Add Recipe"</button>
        </form>
    }
}
