use serde::Serialize;

use crate::models::{Ingredient, PriceRecord};

/// Round to two decimal places for display.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Whole packages bought to cover one ingredient.
#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    /// Inferred size of one package, in the price record's unit.
    pub size: f64,
    pub count: u32,
    pub cost: f64,
    /// `size * count`.
    pub purchased: f64,
}

/// One effective ingredient after resolution and costing.
#[derive(Debug, Clone)]
pub struct ResolvedLine {
    pub ingredient: Ingredient,
    pub record: Option<PriceRecord>,
    /// Cost of the amount actually consumed (unit price × needed).
    pub portion_cost: f64,
    /// `None` for unresolved lines.
    pub package: Option<Package>,
    /// Ingredient qty × person count.
    pub needed: f64,
}

impl ResolvedLine {
    pub fn is_resolved(&self) -> bool {
        self.record.is_some()
    }

    pub fn package_cost(&self) -> f64 {
        self.package.as_ref().map(|p| p.cost).unwrap_or(0.0)
    }

    pub fn purchased(&self) -> f64 {
        self.package.as_ref().map(|p| p.purchased).unwrap_or(0.0)
    }
}

/// How many times one full purchase covers the recipe.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YieldInfo {
    pub count: u32,
    pub limiting_ingredient: Option<String>,
}

impl YieldInfo {
    /// True when nothing was purchased and the count is the "unknown" sentinel.
    pub fn is_unknown(&self) -> bool {
        self.limiting_ingredient.is_none()
    }
}

/// Breakdown row for the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownEntry {
    pub name: String,
    pub brand: Option<String>,
    pub cost: f64,
    pub amount: f64,
    pub unit: String,
    pub resolved: bool,
}

/// Shopping list row for the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShoppingItem {
    pub title: String,
    pub brand: String,
    /// Total paid for all packages of this item.
    pub price: f64,
    pub packages: u32,
    pub needed: f64,
    pub unit: String,
}

/// Costing output for one recipe. Totals are unrounded.
#[derive(Debug, Clone)]
pub struct RecipeCostResult {
    pub meal_total: f64,
    pub shopping_total: f64,
    pub lines: Vec<ResolvedLine>,
    pub yield_info: YieldInfo,
}

impl RecipeCostResult {
    pub fn display_meal_total(&self) -> f64 {
        round2(self.meal_total)
    }

    pub fn display_shopping_total(&self) -> f64 {
        round2(self.shopping_total)
    }

    /// Per-line portion costs, rounded for display.
    pub fn breakdown(&self) -> Vec<BreakdownEntry> {
        self.lines
            .iter()
            .map(|line| BreakdownEntry {
                name: line.ingredient.item.clone(),
                brand: line.record.as_ref().map(|r| r.brand.clone()),
                cost: round2(line.portion_cost),
                amount: round2(line.needed),
                unit: line.ingredient.unit.clone(),
                resolved: line.is_resolved(),
            })
            .collect()
    }

    /// Purchasable items with package costs, rounded for display.
    pub fn shopping_list(&self) -> Vec<ShoppingItem> {
        self.lines
            .iter()
            .filter_map(|line| {
                let record = line.record.as_ref()?;
                let package = line.package.as_ref()?;
                Some(ShoppingItem {
                    title: record.title.clone(),
                    brand: record.brand.clone(),
                    price: round2(package.cost),
                    packages: package.count,
                    needed: round2(line.needed),
                    unit: record.unit.clone(),
                })
            })
            .collect()
    }

    /// Names of ingredients with no matching price.
    pub fn unresolved(&self) -> Vec<&str> {
        self.lines
            .iter()
            .filter(|l| !l.is_resolved())
            .map(|l| l.ingredient.item.as_str())
            .collect()
    }

    pub fn to_report(&self) -> CostReport {
        CostReport {
            meal_total: self.display_meal_total(),
            shopping_total: self.display_shopping_total(),
            breakdown: self.breakdown(),
            shopping_list: self.shopping_list(),
            yield_info: self.yield_info.clone(),
        }
    }
}

/// Serializable, display-rounded view of a [`RecipeCostResult`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostReport {
    pub meal_total: f64,
    pub shopping_total: f64,
    pub breakdown: Vec<BreakdownEntry>,
    pub shopping_list: Vec<ShoppingItem>,
    #[serde(rename = "yield")]
    pub yield_info: YieldInfo,
}
