pub mod budget;
pub mod constants;
pub mod costing;
pub mod packaging;
pub mod pantry;
pub mod resolver;
pub mod substitution;

pub use budget::{filter_by_budget, RankedRecipe};
pub use constants::*;
pub use costing::{compute_yield, cost_line, cost_recipe, effective_unit_price, CostingConfig};
pub use packaging::{infer_package_size, packages_needed, quantize};
pub use pantry::{match_pantry, matching_ingredients, parse_pantry_input, PantryMatch};
pub use resolver::resolve;
pub use substitution::effective_ingredients;

use crate::models::{PriceCatalog, Recipe, RecipeCatalog, RecipeCostResult};
use crate::state::Session;

/// Read-only view over both catalogs plus costing parameters.
///
/// Every call takes the session explicitly and returns freshly allocated
/// results.
pub struct MenuEngine<'a> {
    prices: &'a PriceCatalog,
    recipes: &'a RecipeCatalog,
    config: CostingConfig,
}

impl<'a> MenuEngine<'a> {
    pub fn new(prices: &'a PriceCatalog, recipes: &'a RecipeCatalog) -> Self {
        Self::with_config(prices, recipes, CostingConfig::default())
    }

    pub fn with_config(
        prices: &'a PriceCatalog,
        recipes: &'a RecipeCatalog,
        config: CostingConfig,
    ) -> Self {
        Self {
            prices,
            recipes,
            config,
        }
    }

    pub fn prices(&self) -> &'a PriceCatalog {
        self.prices
    }

    pub fn recipes(&self) -> &'a RecipeCatalog {
        self.recipes
    }

    pub fn cost(&self, recipe: &Recipe, session: &Session) -> RecipeCostResult {
        cost_recipe(recipe, self.prices, session, &self.config)
    }

    pub fn affordable(&self, session: &Session, per_person_budget: f64) -> Vec<RankedRecipe<'a>> {
        filter_by_budget(
            self.recipes,
            self.prices,
            session,
            per_person_budget,
            &self.config,
        )
    }

    pub fn pantry(&self, session: &Session, input: &str) -> Vec<PantryMatch<'a>> {
        match_pantry(self.recipes, self.prices, session, input, &self.config)
    }
}
