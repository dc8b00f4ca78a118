use tracing::debug;

use crate::models::{Ingredient, Recipe, SubstitutionRule};

/// Build the ingredient list a recipe actually needs in the given mode.
///
/// The result is always a fresh copy; the catalog recipe is never touched.
/// With premium mode on, rules apply in declaration order: `Replace`
/// overwrites the first exact `item` match in place (no match is a no-op),
/// `Add` appends.
pub fn effective_ingredients(recipe: &Recipe, premium: bool) -> Vec<Ingredient> {
    let mut ingredients = recipe.base_ingredients.clone();

    if !premium || recipe.premium_rules.is_empty() {
        return ingredients;
    }

    for rule in &recipe.premium_rules {
        match rule {
            SubstitutionRule::Replace { target, ingredient } => {
                match ingredients.iter_mut().find(|i| i.item == *target) {
                    Some(slot) => *slot = ingredient.clone(),
                    None => debug!(
                        recipe = %recipe.name,
                        target = %target,
                        "premium replace target not in recipe, skipping"
                    ),
                }
            }
            SubstitutionRule::Add { ingredient } => ingredients.push(ingredient.clone()),
        }
    }

    ingredients
}
