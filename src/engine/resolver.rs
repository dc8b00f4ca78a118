use std::cmp::Ordering;

use crate::engine::constants::UNPARSEABLE_UNIT_PRICE;
use crate::models::{Ingredient, PriceCatalog, PriceRecord};

/// Sort key for a record: its unit price, or a large sentinel when unparseable.
fn unit_price_key(record: &PriceRecord) -> f64 {
    record
        .unit_price
        .filter(|p| p.is_finite() && *p >= 0.0)
        .unwrap_or(UNPARSEABLE_UNIT_PRICE)
}

/// Pick the price record for one effective ingredient.
///
/// Candidates are records whose name equals the ingredient's item ignoring
/// case. The cheapest by unit price wins; ties keep catalog order. Premium
/// mode does not change this choice.
pub fn resolve<'a>(ingredient: &Ingredient, catalog: &'a PriceCatalog) -> Option<&'a PriceRecord> {
    let mut candidates: Vec<&PriceRecord> = catalog.records_named(&ingredient.item).collect();

    // stable: equal keys stay in catalog order
    candidates.sort_by(|a, b| {
        unit_price_key(a)
            .partial_cmp(&unit_price_key(b))
            .unwrap_or(Ordering::Equal)
    });

    candidates.first().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, brand: &str, unit_price: Option<f64>) -> PriceRecord {
        PriceRecord {
            name: name.to_string(),
            brand: brand.to_string(),
            title: format!("{} 1 kg", name),
            price: unit_price.unwrap_or(10.0),
            unit: "kg".to_string(),
            unit_price,
            campaign: String::new(),
        }
    }

    #[test]
    fn test_picks_cheapest_unit_price() {
        let catalog = PriceCatalog::new(vec![
            record("Rice", "Premium", Some(80.0)),
            record("rice", "Budget", Some(35.0)),
            record("Rice", "Mid", Some(50.0)),
        ]);
        let found = resolve(&Ingredient::new("RICE", 0.2, "kg"), &catalog).unwrap();
        assert_eq!(found.brand, "Budget");
    }

    #[test]
    fn test_exact_name_not_substring() {
        let catalog = PriceCatalog::new(vec![record("Brown Rice", "A", Some(10.0))]);
        assert!(resolve(&Ingredient::new("Rice", 0.2, "kg"), &catalog).is_none());
    }

    #[test]
    fn test_unparseable_unit_price_sorts_last() {
        let catalog = PriceCatalog::new(vec![
            record("Oil", "Unknown", None),
            record("Oil", "Known", Some(120.0)),
        ]);
        let found = resolve(&Ingredient::new("Oil", 0.1, "lt"), &catalog).unwrap();
        assert_eq!(found.brand, "Known");

        let only_unknown = PriceCatalog::new(vec![record("Oil", "Unknown", None)]);
        let found = resolve(&Ingredient::new("Oil", 0.1, "lt"), &only_unknown).unwrap();
        assert_eq!(found.brand, "Unknown");
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let catalog = PriceCatalog::new(vec![
            record("Milk", "First", Some(30.0)),
            record("Milk", "Second", Some(30.0)),
        ]);
        let found = resolve(&Ingredient::new("milk", 1.0, "lt"), &catalog).unwrap();
        assert_eq!(found.brand, "First");
    }
}
