use std::path::Path;

use serde::Serialize;

use crate::engine::{PantryMatch, RankedRecipe};
use crate::error::Result;
use crate::models::{round2, CostReport, Recipe, RecipeCostResult};

/// Serializable result row handed to external renderers.
#[derive(Debug, Clone, Serialize)]
pub struct RecipeReport {
    pub name: String,
    pub tags: Vec<String>,
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pantry_score: Option<usize>,
    pub cost: CostReport,
}

impl RecipeReport {
    pub fn new(recipe: &Recipe, cost: &RecipeCostResult) -> Self {
        Self {
            name: recipe.name.clone(),
            tags: recipe.tags.clone(),
            image: recipe.image.clone(),
            pantry_score: None,
            cost: cost.to_report(),
        }
    }
}

pub fn ranked_reports(ranked: &[RankedRecipe]) -> Vec<RecipeReport> {
    ranked
        .iter()
        .map(|r| RecipeReport::new(r.recipe, &r.cost))
        .collect()
}

pub fn pantry_reports(matches: &[PantryMatch]) -> Vec<RecipeReport> {
    matches
        .iter()
        .map(|m| RecipeReport {
            pantry_score: Some(m.score),
            ..RecipeReport::new(m.recipe, &m.cost)
        })
        .collect()
}

/// Pretty JSON for a list of reports.
pub fn reports_to_json(reports: &[RecipeReport]) -> Result<String> {
    Ok(serde_json::to_string_pretty(reports)?)
}

/// Write a recipe's shopping list to a CSV file.
pub fn write_shopping_csv(cost: &RecipeCostResult, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["title", "brand", "packages", "price", "needed", "unit"])?;

    for item in cost.shopping_list() {
        wtr.write_record([
            item.title,
            item.brand,
            item.packages.to_string(),
            format!("{:.2}", item.price),
            format!("{:.2}", item.needed),
            item.unit,
        ])?;
    }

    wtr.write_record([
        "TOTAL".to_string(),
        String::new(),
        String::new(),
        format!("{:.2}", round2(cost.shopping_total)),
        String::new(),
        String::new(),
    ])?;

    wtr.flush()?;
    Ok(())
}
