use tracing::debug;

use crate::engine::constants::*;
use crate::engine::packaging::{infer_package_size, quantize};
use crate::engine::resolver::resolve;
use crate::engine::substitution::effective_ingredients;
use crate::models::{
    Ingredient, PriceCatalog, PriceRecord, Recipe, RecipeCostResult, ResolvedLine, YieldInfo,
};
use crate::state::Session;

/// Purchased/needed ratios this close below a whole number count as reaching it.
const YIELD_RATIO_TOLERANCE: f64 = 1e-9;

/// Tunable costing parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct CostingConfig {
    /// Portion cost charged per person for an unresolved ingredient.
    pub fallback_penalty: f64,
}

impl Default for CostingConfig {
    fn default() -> Self {
        Self {
            fallback_penalty: FALLBACK_PENALTY_PER_PERSON,
        }
    }
}

/// Price of one unit of `record.unit`.
///
/// Uses the catalog unit price when it parsed; otherwise derives it from the
/// package price and the size hinted by the title.
pub fn effective_unit_price(record: &PriceRecord) -> f64 {
    match record.unit_price.filter(|p| p.is_finite() && *p >= 0.0) {
        Some(price) => price,
        None => record.price.max(0.0) / infer_package_size(&record.title, &record.unit),
    }
}

/// Cost one ingredient for `persons` people.
pub fn cost_line(
    ingredient: &Ingredient,
    prices: &PriceCatalog,
    persons: f64,
    config: &CostingConfig,
) -> ResolvedLine {
    let needed = ingredient.qty.max(0.0) * persons;

    match resolve(ingredient, prices) {
        Some(record) => {
            // nothing needed, nothing bought
            let package = (needed > 0.0).then(|| quantize(record, needed));
            let portion_cost = effective_unit_price(record) * needed;
            debug!(
                item = %ingredient.item,
                brand = %record.brand,
                needed,
                packages = package.as_ref().map_or(0, |p| p.count),
                portion_cost,
                "resolved ingredient"
            );
            ResolvedLine {
                ingredient: ingredient.clone(),
                record: Some(record.clone()),
                portion_cost,
                package,
                needed,
            }
        }
        None => {
            debug!(item = %ingredient.item, "no price found, applying fallback penalty");
            ResolvedLine {
                ingredient: ingredient.clone(),
                record: None,
                portion_cost: config.fallback_penalty * persons,
                package: None,
                needed,
            }
        }
    }
}

/// Yield over resolved lines: the smallest `floor(purchased / needed)`.
///
/// The first line reaching the minimum is the limiting ingredient. With no
/// purchased line the count is [`UNBOUNDED_YIELD`] and there is no limiting
/// ingredient. Lines with a zero need buy no package, so this happens only
/// when the shopping list is empty.
pub fn compute_yield(lines: &[ResolvedLine]) -> YieldInfo {
    let mut best: Option<(u32, &ResolvedLine)> = None;

    for line in lines.iter().filter(|l| l.package.is_some() && l.needed > 0.0) {
        let times = (line.purchased() / line.needed + YIELD_RATIO_TOLERANCE)
            .floor()
            .max(0.0);
        let times = times.min(u32::MAX as f64) as u32;
        match best {
            Some((current, _)) if times >= current => {}
            _ => best = Some((times, line)),
        }
    }

    match best {
        Some((count, line)) => YieldInfo {
            count,
            limiting_ingredient: Some(line.ingredient.item.clone()),
        },
        None => YieldInfo {
            count: UNBOUNDED_YIELD,
            limiting_ingredient: None,
        },
    }
}

/// Cost a full recipe for the session's person count and premium mode.
///
/// Totals accumulate unrounded; see [`RecipeCostResult::to_report`] for the
/// display view.
pub fn cost_recipe(
    recipe: &Recipe,
    prices: &PriceCatalog,
    session: &Session,
    config: &CostingConfig,
) -> RecipeCostResult {
    let persons = session.persons_f64();

    let lines: Vec<ResolvedLine> = effective_ingredients(recipe, session.premium)
        .iter()
        .map(|ingredient| cost_line(ingredient, prices, persons, config))
        .collect();

    let meal_total: f64 = lines.iter().map(|l| l.portion_cost).sum();
    let shopping_total: f64 = lines.iter().map(ResolvedLine::package_cost).sum();
    let yield_info = compute_yield(&lines);

    RecipeCostResult {
        meal_total,
        shopping_total,
        lines,
        yield_info,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Profile;

    fn record(
        name: &str,
        title: &str,
        price: f64,
        unit: &str,
        unit_price: Option<f64>,
    ) -> PriceRecord {
        PriceRecord {
            name: name.to_string(),
            brand: "Brand".to_string(),
            title: title.to_string(),
            price,
            unit: unit.to_string(),
            unit_price,
            campaign: String::new(),
        }
    }

    fn recipe(ingredients: Vec<Ingredient>) -> Recipe {
        Recipe {
            name: "Test".to_string(),
            tags: vec![],
            base_ingredients: ingredients,
            premium_rules: vec![],
            image: None,
        }
    }

    #[test]
    fn test_effective_unit_price_derived_from_title() {
        let eggs = record("Egg", "Yumurta 30'lu", 99.0, "adet", None);
        assert!((effective_unit_price(&eggs) - 3.3).abs() < 1e-9);

        let rice = record("Rice", "Rice 1 kg", 40.0, "kg", Some(38.0));
        assert_eq!(effective_unit_price(&rice), 38.0);
    }

    #[test]
    fn test_yield_limited_by_scarcest() {
        let prices = PriceCatalog::new(vec![
            record("Rice", "Rice 1 kg", 40.0, "kg", Some(40.0)),
            record("Butter", "Butter 250g", 60.0, "kg", Some(240.0)),
        ]);
        let r = recipe(vec![
            Ingredient::new("Rice", 0.2, "kg"),
            Ingredient::new("Butter", 0.1, "kg"),
        ]);
        let result = cost_recipe(&r, &prices, &Session::default(), &CostingConfig::default());

        // rice: 1.0 / 0.2 = 5, butter: 0.25 / 0.1 = 2
        assert_eq!(result.yield_info.count, 2);
        assert_eq!(result.yield_info.limiting_ingredient.as_deref(), Some("Butter"));
    }

    #[test]
    fn test_yield_unknown_when_nothing_resolves() {
        let prices = PriceCatalog::new(vec![]);
        let r = recipe(vec![Ingredient::new("Saffron", 0.01, "g")]);
        let result = cost_recipe(&r, &prices, &Session::default(), &CostingConfig::default());

        assert_eq!(result.yield_info.count, UNBOUNDED_YIELD);
        assert!(result.yield_info.is_unknown());
        assert_eq!(result.shopping_total, 0.0);
    }

    #[test]
    fn test_premium_mode_changes_ingredients_not_brand() {
        let prices = PriceCatalog::new(vec![
            record("Oil", "Oil 1 lt", 100.0, "lt", Some(100.0)),
            record("Butter", "Butter 1 kg", 300.0, "kg", Some(300.0)),
            record("Butter", "Fancy Butter 1 kg", 500.0, "kg", Some(500.0)),
        ]);
        let mut r = recipe(vec![Ingredient::new("Oil", 0.1, "lt")]);
        r.premium_rules = vec![crate::models::SubstitutionRule::Replace {
            target: "Oil".to_string(),
            ingredient: Ingredient::new("Butter", 0.1, "kg"),
        }];

        let session = Session::new(Profile::All, 1, true);
        let result = cost_recipe(&r, &prices, &session, &CostingConfig::default());

        assert_eq!(result.lines.len(), 1);
        let record = result.lines[0].record.as_ref().unwrap();
        assert_eq!(record.title, "Butter 1 kg");
        assert!((result.meal_total - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_custom_penalty() {
        let prices = PriceCatalog::new(vec![]);
        let r = recipe(vec![Ingredient::new("Saffron", 0.01, "g")]);
        let config = CostingConfig {
            fallback_penalty: 12.5,
        };
        let session = Session::default().with_persons(4);
        let result = cost_recipe(&r, &prices, &session, &config);
        assert!((result.meal_total - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_quantity_buys_nothing() {
        let prices = PriceCatalog::new(vec![
            record("Rice", "Rice 1 kg", 40.0, "kg", Some(40.0)),
            record("Salt", "Salt 1 kg", 10.0, "kg", Some(10.0)),
        ]);

        let session = Session::default();
        let config = CostingConfig::default();

        let only_zero = recipe(vec![Ingredient::new("Rice", 0.0, "kg")]);
        let result = cost_recipe(&only_zero, &prices, &session, &config);
        assert!(result.lines[0].is_resolved());
        assert!(result.lines[0].package.is_none());
        assert_eq!(result.shopping_total, 0.0);
        assert!(result.shopping_list().is_empty());
        assert_eq!(result.yield_info.count, UNBOUNDED_YIELD);

        let mixed = recipe(vec![
            Ingredient::new("Rice", 0.0, "kg"),
            Ingredient::new("Salt", 0.25, "kg"),
        ]);
        let result = cost_recipe(&mixed, &prices, &session, &config);
        assert_eq!(result.shopping_total, 10.0);
        assert_eq!(result.yield_info.count, 4);
        assert_eq!(result.yield_info.limiting_ingredient.as_deref(), Some("Salt"));
    }
}
