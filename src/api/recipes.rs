//! Recipe Operations
//!
//! One wrapper per server operation. Mutating requests serialize a
//! `RecipePayload` body; the server owns the id.

use super::{fetch_json, recipes_url};
use crate::models::{Recipe, RecipePayload};

pub async fn list_recipes() -> Result<Vec<Recipe>, String> {
    let json = fetch_json("GET", &recipes_url(None), None).await?;
    serde_wasm_bindgen::from_value(json).map_err(|e| e.to_string())
}

pub async fn create_recipe(payload: &RecipePayload) -> Result<Recipe, String> {
    let body = serde_json::to_string(payload).map_err(|e| e.to_string())?;
    let json = fetch_json("POST", &recipes_url(None), Some(body)).await?;
    serde_wasm_bindgen::from_value(json).map_err(|e| e.to_string())
}

pub async fn update_recipe(id: u32, payload: &RecipePayload) -> Result<Recipe, String> {
    let body = serde_json::to_string(payload).map_err(|e| e.to_string())?;
    let json = fetch_json("PUT", &recipes_url(Some(id)), Some(body)).await?;
    serde_wasm_bindgen::from_value(json).map_err(|e| e.to_string())
}

pub async fn delete_recipe(id: u32) -> Result<(), String> {
    // The server answers with a JSON body; nobody reads it.
    let _ = fetch_json("DELETE", &recipes_url(Some(id)), None).await?;
    Ok(())
}
