//! UI Components
//!
//! Leptos components for the recipe book.

mod edit_recipe_form;
mod error_banner;
mod new_recipe_form;
mod recipe_card;
mod recipe_list;

pub use edit_recipe_form::EditRecipeForm;
pub use error_banner::ErrorBanner;
pub use new_recipe_form::NewRecipeForm;
pub use recipe_card::RecipeCard;
pub use recipe_list::RecipeList;
