use std::cmp::Ordering;

use tracing::info;

use crate::engine::costing::{cost_recipe, CostingConfig};
use crate::models::{round2, PriceCatalog, Recipe, RecipeCatalog, RecipeCostResult};
use crate::state::Session;

/// A recipe that fits the budget, with its costing.
#[derive(Debug, Clone)]
pub struct RankedRecipe<'a> {
    pub recipe: &'a Recipe,
    pub cost: RecipeCostResult,
}

/// Recipes whose meal total fits `per_person_budget × persons`, cheapest first.
///
/// Recipes outside the session profile are skipped before costing. The
/// comparison uses the display-rounded meal total so a recipe shown at the
/// budget is never excluded by a fraction of a cent. Ties keep catalog
/// order. An empty list means nothing qualified.
pub fn filter_by_budget<'a>(
    recipes: &'a RecipeCatalog,
    prices: &PriceCatalog,
    session: &Session,
    per_person_budget: f64,
    config: &CostingConfig,
) -> Vec<RankedRecipe<'a>> {
    let total_budget = per_person_budget * session.persons_f64();

    let mut affordable: Vec<RankedRecipe<'a>> = recipes
        .recipes()
        .iter()
        .filter(|recipe| session.profile.admits(recipe))
        .map(|recipe| RankedRecipe {
            recipe,
            cost: cost_recipe(recipe, prices, session, config),
        })
        .filter(|ranked| round2(ranked.cost.meal_total) <= total_budget)
        .collect();

    affordable.sort_by(|a, b| {
        a.cost
            .meal_total
            .partial_cmp(&b.cost.meal_total)
            .unwrap_or(Ordering::Equal)
    });

    info!(
        profile = %session.profile,
        persons = session.persons,
        premium = session.premium,
        total_budget,
        matches = affordable.len(),
        "budget filter finished"
    );

    affordable
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Ingredient, PriceRecord};
    use crate::state::Profile;

    fn prices() -> PriceCatalog {
        PriceCatalog::new(vec![
            PriceRecord {
                name: "Rice".to_string(),
                brand: "A".to_string(),
                title: "Rice 1 kg".to_string(),
                price: 40.0,
                unit: "kg".to_string(),
                unit_price: Some(40.0),
                campaign: String::new(),
            },
            PriceRecord {
                name: "Beef".to_string(),
                brand: "B".to_string(),
                title: "Beef 500g".to_string(),
                price: 250.0,
                unit: "kg".to_string(),
                unit_price: Some(500.0),
                campaign: String::new(),
            },
        ])
    }

    fn recipe(name: &str, tags: &[&str], ingredients: Vec<Ingredient>) -> Recipe {
        Recipe {
            name: name.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            base_ingredients: ingredients,
            premium_rules: vec![],
            image: None,
        }
    }

    fn catalog() -> RecipeCatalog {
        RecipeCatalog::new(vec![
            recipe("Steak", &["protein"], vec![Ingredient::new("Beef", 0.2, "kg")]),
            recipe("Pilaf", &["student"], vec![Ingredient::new("Rice", 0.1, "kg")]),
            recipe(
                "Beef Pilaf",
                &["protein", "student"],
                vec![Ingredient::new("Rice", 0.1, "kg"), Ingredient::new("Beef", 0.1, "kg")],
            ),
        ])
    }

    #[test]
    fn test_sorted_cheapest_first() {
        let recipes = catalog();
        let ranked = filter_by_budget(
            &recipes,
            &prices(),
            &Session::default(),
            1000.0,
            &CostingConfig::default(),
        );
        let names: Vec<&str> = ranked.iter().map(|r| r.recipe.name.as_str()).collect();
        assert_eq!(names, vec!["Pilaf", "Beef Pilaf", "Steak"]);
    }

    #[test]
    fn test_budget_scales_with_persons() {
        let recipes = catalog();
        // Steak costs 100 per person; budget 60 per person
        let session = Session::default().with_persons(2);
        let config = CostingConfig::default();
        let ranked = filter_by_budget(&recipes, &prices(), &session, 60.0, &config);
        let names: Vec<&str> = ranked.iter().map(|r| r.recipe.name.as_str()).collect();
        assert_eq!(names, vec!["Pilaf", "Beef Pilaf"]);
    }

    #[test]
    fn test_profile_prefilter() {
        let recipes = catalog();
        let session = Session::default().with_profile(Profile::Tag("protein".to_string()));
        let config = CostingConfig::default();
        let ranked = filter_by_budget(&recipes, &prices(), &session, 1000.0, &config);
        let names: Vec<&str> = ranked.iter().map(|r| r.recipe.name.as_str()).collect();
        assert_eq!(names, vec!["Beef Pilaf", "Steak"]);
    }

    #[test]
    fn test_nothing_affordable_is_empty() {
        let recipes = catalog();
        let ranked = filter_by_budget(
            &recipes,
            &prices(),
            &Session::default(),
            1.0,
            &CostingConfig::default(),
        );
        assert!(ranked.is_empty());
    }
}
