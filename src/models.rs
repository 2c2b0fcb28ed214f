//! Frontend Models
//!
//! Data structures matching the recipe API's JSON shapes.

use serde::{Deserialize, Serialize};

/// Recipe record as the server returns it
///
/// `id` is assigned server-side and absent until the recipe is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub name: String,
    pub ingredients: Vec<String>,
}

/// Request body for create and update: `{name, ingredients}` only,
/// the server owns the id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipePayload {
    pub name: String,
    pub ingredients: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_serializes_name_and_ingredients_only() {
        let payload = RecipePayload {
            name: "Pancakes".to_string(),
            ingredients: vec!["flour".to_string(), "milk".to_string()],
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "Pancakes", "ingredients": ["flour", "milk"]})
        );
    }

    #[test]
    fn test_unsaved_recipe_omits_id_key() {
        let recipe = Recipe {
            id: None,
            name: "Toast".to_string(),
            ingredients: vec!["bread".to_string()],
        };
        let json = serde_json::to_value(&recipe).unwrap();
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_recipe_deserializes_with_and_without_id() {
        let saved: Recipe =
            serde_json::from_str(r#"{"id":7,"name":"Soup","ingredients":["water"]}"#).unwrap();
        assert_eq!(saved.id, Some(7));
        assert_eq!(saved.name, "Soup");

        let unsaved: Recipe =
            serde_json::from_str(r#"{"name":"Soup","ingredients":[]}"#).unwrap();
        assert_eq!(unsaved.id, None);
        assert!(unsaved.ingredients.is_empty());
    }
}
