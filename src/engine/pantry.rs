use tracing::info;

use crate::engine::constants::MIN_PANTRY_FRAGMENT_LEN;
use crate::engine::costing::{cost_recipe, CostingConfig};
use crate::models::{PriceCatalog, Recipe, RecipeCatalog, RecipeCostResult};
use crate::state::Session;

/// A recipe scored by how many of its base ingredients the user already has.
#[derive(Debug, Clone)]
pub struct PantryMatch<'a> {
    pub recipe: &'a Recipe,
    pub score: usize,
    /// Number of base ingredients, for "2 of 3" displays.
    pub total: usize,
    pub matched: Vec<String>,
    /// Shown alongside the match; never used to filter.
    pub cost: RecipeCostResult,
}

/// Split comma-separated pantry input into lowercase fragments.
///
/// Fragments shorter than [`MIN_PANTRY_FRAGMENT_LEN`] characters after
/// trimming are dropped. Blank input yields no fragments.
pub fn parse_pantry_input(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|part| part.trim().to_lowercase())
        .filter(|part| part.chars().count() >= MIN_PANTRY_FRAGMENT_LEN)
        .collect()
}

/// Base ingredient items of `recipe` that contain any fragment.
pub fn matching_ingredients(recipe: &Recipe, fragments: &[String]) -> Vec<String> {
    recipe
        .base_ingredients
        .iter()
        .filter(|ingredient| {
            let item = ingredient.item.to_lowercase();
            fragments.iter().any(|fragment| item.contains(fragment.as_str()))
        })
        .map(|ingredient| ingredient.item.clone())
        .collect()
}

/// Rank recipes by pantry overlap, best first; ties keep catalog order.
///
/// Recipes with no overlap are dropped. Costing honors the session's premium
/// mode and person count but no budget applies.
pub fn match_pantry<'a>(
    recipes: &'a RecipeCatalog,
    prices: &PriceCatalog,
    session: &Session,
    input: &str,
    config: &CostingConfig,
) -> Vec<PantryMatch<'a>> {
    let fragments = parse_pantry_input(input);
    if fragments.is_empty() {
        return Vec::new();
    }

    let mut matches: Vec<PantryMatch<'a>> = recipes
        .recipes()
        .iter()
        .filter_map(|recipe| {
            let matched = matching_ingredients(recipe, &fragments);
            if matched.is_empty() {
                return None;
            }
            Some(PantryMatch {
                recipe,
                score: matched.len(),
                total: recipe.base_ingredients.len(),
                matched,
                cost: cost_recipe(recipe, prices, session, config),
            })
        })
        .collect();

    matches.sort_by(|a, b| b.score.cmp(&a.score));

    info!(
        fragments = fragments.len(),
        matches = matches.len(),
        "pantry match finished"
    );

    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Ingredient;

    fn recipe(name: &str, items: &[&str]) -> Recipe {
        Recipe {
            name: name.to_string(),
            tags: vec![],
            base_ingredients: items.iter().map(|i| Ingredient::new(*i, 0.1, "kg")).collect(),
            premium_rules: vec![],
            image: None,
        }
    }

    #[test]
    fn test_parse_pantry_input() {
        assert_eq!(
            parse_pantry_input(" Egg, MILK ,, ml, ab "),
            vec!["egg".to_string(), "milk".to_string()]
        );
        assert!(parse_pantry_input("   ").is_empty());
        assert!(parse_pantry_input("").is_empty());
    }

    #[test]
    fn test_short_fragment_does_not_match() {
        let r = recipe("Pancake", &["Egg", "Flour", "Milk"]);
        let fragments = parse_pantry_input("ml");
        assert!(matching_ingredients(&r, &fragments).is_empty());
    }

    #[test]
    fn test_score_and_ordering() {
        let recipes = RecipeCatalog::new(vec![
            recipe("Omelette", &["Egg", "Butter"]),
            recipe("Pancake", &["Egg", "Flour", "Milk"]),
            recipe("Salad", &["Tomato", "Cucumber"]),
            recipe("Boiled Egg", &["Egg"]),
        ]);
        let matches = match_pantry(
            &recipes,
            &PriceCatalog::default(),
            &Session::default(),
            "egg, milk",
            &CostingConfig::default(),
        );

        let ranked: Vec<(&str, usize)> = matches
            .iter()
            .map(|m| (m.recipe.name.as_str(), m.score))
            .collect();
        assert_eq!(
            ranked,
            vec![("Pancake", 2), ("Omelette", 1), ("Boiled Egg", 1)]
        );
        assert_eq!(matches[0].total, 3);
    }

    #[test]
    fn test_blank_input_matches_nothing() {
        let recipes = RecipeCatalog::new(vec![recipe("Pancake", &["Egg"])]);
        let matches = match_pantry(
            &recipes,
            &PriceCatalog::default(),
            &Session::default(),
            " , ",
            &CostingConfig::default(),
        );
        assert!(matches.is_empty());
    }
}
