pub mod cost;
pub mod lenient;
pub mod price;
pub mod recipe;

pub use cost::{
    round2, BreakdownEntry, CostReport, Package, RecipeCostResult, ResolvedLine, ShoppingItem,
    YieldInfo,
};
pub use price::{PriceCatalog, PriceRecord};
pub use recipe::{Ingredient, Recipe, RecipeCatalog, SubstitutionRule};
