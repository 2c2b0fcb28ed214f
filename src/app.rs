//! Recipe Book App
//!
//! Root component: owns the recipe list state and the load effect.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{ErrorBanner, NewRecipeForm, RecipeList};
use crate::context::AppContext;
use crate::models::Recipe;

#[component]
pub fn App() -> impl IntoView {
    let (recipes, set_recipes) = signal(Vec::<Recipe>::new());
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (error_message, set_error_message) = signal::<Option<String>>(None);

    let ctx = AppContext::new(
        (reload_trigger, set_reload_trigger),
        (error_message, set_error_message),
    );
    provide_context(ctx);

    // Fetch the whole list on mount and after every mutation
    Effect::new(move |_| {
        let generation = ctx.reload_trigger.get();
        spawn_local(async move {
            let result = api::list_recipes().await;
            // A newer reload superseded this fetch; drop the stale response
            if ctx.reload_trigger.get_untracked() != generation {
                return;
            }
            match result {
                Ok(loaded) => {
                    web_sys::console::log_1(
                        &format!("[APP] Loaded {} recipes", loaded.len()).into(),
                    );
                    set_recipes.set(loaded);
                    ctx.clear_error();
                }
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[APP] Error fetching recipes: {}", err).into(),
                    );
                    ctx.show_error("Error fetching recipes. Please try again later.");
                }
            }
        });
    });

    view! {
        <main class="app-layout">
            <h1>"Recipe Book"</h1>

            <ErrorBanner />

            <NewRecipeForm />

            <RecipeList recipes=recipes />

            <p class="recipe-count">{move || format!("{} recipes", recipes.get().len())}</p>
        </main>
    }
}
