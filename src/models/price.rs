use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::lenient;

/// One store listing for a catalog ingredient.
///
/// Several records may share a `name` (different brands or sizes). The
/// `title` is the free-text package description and carries size hints such
/// as "500g" or "30'lu".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    #[serde(deserialize_with = "lenient::loose_string")]
    pub name: String,

    #[serde(default, deserialize_with = "lenient::loose_string")]
    pub brand: String,

    #[serde(default, alias = "found_title", deserialize_with = "lenient::loose_string")]
    pub title: String,

    /// Shelf price of one package.
    #[serde(default, deserialize_with = "lenient::number_or_zero")]
    pub price: f64,

    #[serde(default, deserialize_with = "lenient::loose_string")]
    pub unit: String,

    /// Price of one `unit`. `None` when the source value was missing or unparseable.
    #[serde(default, deserialize_with = "lenient::optional_number")]
    pub unit_price: Option<f64>,

    #[serde(default, deserialize_with = "lenient::loose_string")]
    pub campaign: String,
}

impl PriceRecord {
    /// Canonical key for lookups (lowercase, trimmed name).
    pub fn key(&self) -> String {
        self.name.trim().to_lowercase()
    }

    pub fn has_campaign(&self) -> bool {
        !self.campaign.trim().is_empty()
    }
}

/// Session-scoped, read-only collection of price records.
#[derive(Debug, Clone, Default)]
pub struct PriceCatalog {
    pub date: Option<String>,
    pub market: Option<String>,
    records: Vec<PriceRecord>,
    /// Record indices keyed by lowercase name, in catalog order.
    by_name: HashMap<String, Vec<usize>>,
}

impl PriceCatalog {
    pub fn new(records: Vec<PriceRecord>) -> Self {
        let mut by_name: HashMap<String, Vec<usize>> = HashMap::new();
        for (idx, record) in records.iter().enumerate() {
            by_name.entry(record.key()).or_default().push(idx);
        }
        Self {
            date: None,
            market: None,
            records,
            by_name,
        }
    }

    pub fn with_source(mut self, date: Option<String>, market: Option<String>) -> Self {
        self.date = date;
        self.market = market;
        self
    }

    /// All records whose name equals `name`, ignoring case. Catalog order.
    pub fn records_named<'a>(
        &'a self,
        name: &str,
    ) -> impl Iterator<Item = &'a PriceRecord> + use<'a> {
        self.by_name
            .get(&name.trim().to_lowercase())
            .into_iter()
            .flatten()
            .map(move |&idx| &self.records[idx])
    }

    pub fn records(&self) -> &[PriceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
