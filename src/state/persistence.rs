use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::error::Result;
use crate::models::{PriceCatalog, PriceRecord, Recipe, RecipeCatalog};

/// Scrape output: the product list wrapped with its date and market.
#[derive(Deserialize)]
struct PriceEnvelope {
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    market: Option<String>,
    products: Vec<PriceRecord>,
}

/// Parse a price catalog from JSON text.
///
/// Accepts a bare record list or a `{date, market, products}` envelope.
/// Negative prices are logged and clamped to zero.
pub fn parse_prices(content: &str) -> Result<PriceCatalog> {
    let value: Value = serde_json::from_str(content)?;

    let (mut products, date, market) = if value.is_array() {
        let products: Vec<PriceRecord> = serde_json::from_value(value)?;
        (products, None, None)
    } else {
        let envelope: PriceEnvelope = serde_json::from_value(value)?;
        (envelope.products, envelope.date, envelope.market)
    };

    for record in &mut products {
        if record.price <= 0.0 {
            warn!(name = %record.name, title = %record.title, "price record has no usable price");
            record.price = record.price.max(0.0);
        }
    }

    Ok(PriceCatalog::new(products).with_source(date, market))
}

/// Parse a recipe catalog from JSON text.
///
/// Ingredients with a non-positive quantity are kept but logged; the engine
/// treats them as needing nothing.
pub fn parse_recipes(content: &str) -> Result<RecipeCatalog> {
    let recipes: Vec<Recipe> = serde_json::from_str(content)?;

    for recipe in &recipes {
        for ingredient in &recipe.base_ingredients {
            if ingredient.qty <= 0.0 {
                warn!(
                    recipe = %recipe.name,
                    item = %ingredient.item,
                    qty = ingredient.qty,
                    "ingredient quantity is not positive"
                );
            }
        }
    }

    Ok(RecipeCatalog::new(recipes))
}

/// Load the price catalog from a JSON file.
pub fn load_prices<P: AsRef<Path>>(path: P) -> Result<PriceCatalog> {
    let content = fs::read_to_string(&path)?;
    let catalog = parse_prices(&content)?;
    info!(path = %path.as_ref().display(), records = catalog.len(), "loaded price catalog");
    Ok(catalog)
}

/// Load the recipe catalog from a JSON file.
pub fn load_recipes<P: AsRef<Path>>(path: P) -> Result<RecipeCatalog> {
    let content = fs::read_to_string(&path)?;
    let catalog = parse_recipes(&content)?;
    info!(path = %path.as_ref().display(), recipes = catalog.len(), "loaded recipe catalog");
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_enveloped_prices() {
        let json = r#"{
            "date": "2024-02-07",
            "market": "Migros",
            "products": [
                {"name": "yumurta", "found_title": "Yumurta 30'lu", "price": 99.5, "unit": "adet", "campaign": "Kampanya Var"},
                {"name": "süt", "brand": "Pınar", "title": "Süt 1 L", "price": "32,50", "unit": "lt", "unit_price": 32.5}
            ]
        }"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let catalog = load_prices(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.market.as_deref(), Some("Migros"));
        assert_eq!(catalog.date.as_deref(), Some("2024-02-07"));
        assert!(catalog.records()[0].has_campaign());
        assert_eq!(catalog.records_named("SÜT").count(), 1);
    }

    #[test]
    fn test_load_bare_prices() {
        let json = r#"[{"name": "Rice", "brand": "A", "title": "Rice 1 kg", "price": 40, "unit": "kg", "unit_price": 40}]"#;
        let catalog = parse_prices(json).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.market.is_none());
    }

    #[test]
    fn test_load_recipes() {
        let json = r#"[
            {
                "name": "Fried Eggs",
                "tags": ["student"],
                "base_ingredients": [
                    {"item": "Egg", "qty": 2, "unit": "adet"},
                    {"item": "Oil", "qty": 0.1, "unit": "lt"}
                ],
                "luxury_additions": [
                    {"replace": "Oil", "item": "Butter", "qty": 0.15, "unit": "kg"},
                    {"add": true, "item": "Sucuk", "qty": 0.05, "unit": "kg"}
                ],
                "image": "eggs.jpg"
            }
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let catalog = load_recipes(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        let recipe = &catalog.recipes()[0];
        assert_eq!(recipe.premium_rules.len(), 2);
        assert_eq!(recipe.image.as_deref(), Some("eggs.jpg"));
    }

    #[test]
    fn test_rule_without_variant_fails_load() {
        let json = r#"[{"name": "X", "base_ingredients": [], "luxury_additions": [{"item": "Y", "qty": 1, "unit": "kg"}]}]"#;
        assert!(parse_recipes(json).is_err());
    }

    #[test]
    fn test_negative_price_clamped_to_zero() {
        let json = r#"[{"name": "Rice", "title": "Rice 1 kg", "price": "-40", "unit": "kg"}]"#;
        let catalog = parse_prices(json).unwrap();
        assert_eq!(catalog.records()[0].price, 0.0);
    }

    #[test]
    fn test_bad_product_error_names_field() {
        let json = r#"{"market": "Migros", "products": [{"brand": "A", "price": 10}]}"#;
        let err = parse_prices(json).unwrap_err();
        assert!(err.to_string().contains("name"), "{}", err);

        let bare = r#"[{"brand": "A", "price": 10}]"#;
        let err = parse_prices(bare).unwrap_err();
        assert!(err.to_string().contains("name"), "{}", err);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_prices("/definitely/not/here.json");
        assert!(matches!(result, Err(crate::error::MenuError::Io(_))));
    }
}
