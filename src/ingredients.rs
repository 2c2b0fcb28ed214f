//! Ingredient Text Utilities
//!
//! Helpers for converting between the raw comma-separated ingredient text the
//! forms hold and the ingredient list the API stores.

/// Split raw form text into an ingredient list.
///
/// Splits on commas and trims each piece. Empty pieces are kept, so a
/// trailing comma yields a trailing empty ingredient.
pub fn parse_ingredients(raw: &str) -> Vec<String> {
    raw.split(',').map(|piece| piece.trim().to_string()).collect()
}

/// Join an ingredient list back into display/prefill text.
pub fn join_ingredients(ingredients: &[String]) -> String {
    ingredients.join(", ")
}

/// The ingredient line shown on a recipe card.
pub fn ingredient_line(ingredients: &[String]) -> String {
    format!("Ingredients: {}", join_ingredients(ingredients))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_each_piece() {
        assert_eq!(
            parse_ingredients("flour, milk ,  eggs"),
            vec!["flour", "milk", "eggs"]
        );
    }

    #[test]
    fn test_parse_keeps_empty_pieces() {
        // Trailing comma is a deliberate edge case: it produces an empty
        // ingredient rather than being filtered out.
        assert_eq!(parse_ingredients("a, b ,c,"), vec!["a", "b", "c", ""]);
        assert_eq!(parse_ingredients("a,,b"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_parse_empty_input_yields_single_empty_piece() {
        assert_eq!(parse_ingredients(""), vec![""]);
    }

    #[test]
    fn test_join_uses_comma_space() {
        let list = vec!["flour".to_string(), "water".to_string()];
        assert_eq!(join_ingredients(&list), "flour, water");
        assert_eq!(join_ingredients(&[]), "");
    }

    #[test]
    fn test_ingredient_line_prefixes_and_preserves_order() {
        let list = vec!["butter".to_string(), "apples".to_string(), "sugar".to_string()];
        assert_eq!(ingredient_line(&list), "Ingredients: butter, apples, sugar");
        assert_eq!(ingredient_line(&[]), "Ingredients: ");
    }

    #[test]
    fn test_parse_join_round_trip_for_trimmed_lists() {
        let list = vec!["salt".to_string(), "pepper".to_string(), "oil".to_string()];
        assert_eq!(parse_ingredients(&join_ingredients(&list)), list);
    }
}
