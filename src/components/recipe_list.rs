//! Recipe List Component
//!
//! Renders one card per recipe, in server order. The render is not keyed:
//! every refresh rebuilds all cards, so stale entries (and any open edit
//! form) never survive a re-render.

use leptos::prelude::*;

use crate::components::RecipeCard;
use crate::models::Recipe;

#[component]
pub fn RecipeList(recipes: ReadSignal<Vec<Recipe>>) -> impl IntoView {
    view! {
        <div id="recipe-display" class="recipe-display">
            {move || {
                recipes
                    .get()
                    .into_iter()
                    .map(|recipe| view! { <RecipeCard recipe=recipe /> })
                    .collect_view()
            }}
        </div>
    }
}
