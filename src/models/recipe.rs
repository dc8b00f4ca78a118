use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::MenuError;
use crate::models::lenient;

/// One ingredient line: `qty` is the amount needed for a single person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(deserialize_with = "lenient::loose_string")]
    pub item: String,

    #[serde(default, alias = "qty_algo", deserialize_with = "lenient::number_or_zero")]
    pub qty: f64,

    #[serde(default, alias = "unit_type", deserialize_with = "lenient::loose_string")]
    pub unit: String,
}

impl Ingredient {
    pub fn new(item: impl Into<String>, qty: f64, unit: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            qty,
            unit: unit.into(),
        }
    }

    /// Canonical key for lookups (lowercase item).
    pub fn key(&self) -> String {
        self.item.trim().to_lowercase()
    }
}

/// A premium-mode rule. Exactly one variant per rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRule", into = "RawRule")]
pub enum SubstitutionRule {
    /// Overwrite the first ingredient whose item equals `target`.
    Replace { target: String, ingredient: Ingredient },
    /// Append to the end of the list.
    Add { ingredient: Ingredient },
}

impl SubstitutionRule {
    pub fn ingredient(&self) -> &Ingredient {
        match self {
            SubstitutionRule::Replace { ingredient, .. } => ingredient,
            SubstitutionRule::Add { ingredient } => ingredient,
        }
    }
}

/// Catalog wire shape: `{replace?: "Oil", add?: true, item, qty, unit}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    replace: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    add: Option<Value>,

    #[serde(flatten)]
    ingredient: Ingredient,
}

fn is_flag_set(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.trim().is_empty(),
        _ => true,
    }
}

impl TryFrom<RawRule> for SubstitutionRule {
    type Error = MenuError;

    fn try_from(raw: RawRule) -> Result<Self, Self::Error> {
        if let Some(target) = raw.replace.filter(|t| !t.trim().is_empty()) {
            return Ok(SubstitutionRule::Replace {
                target,
                ingredient: raw.ingredient,
            });
        }

        if raw.add.as_ref().is_some_and(is_flag_set) {
            return Ok(SubstitutionRule::Add {
                ingredient: raw.ingredient,
            });
        }

        Err(MenuError::InvalidCatalog(format!(
            "premium rule for '{}' has neither 'replace' nor 'add'",
            raw.ingredient.item
        )))
    }
}

impl From<SubstitutionRule> for RawRule {
    fn from(rule: SubstitutionRule) -> Self {
        match rule {
            SubstitutionRule::Replace { target, ingredient } => RawRule {
                replace: Some(target),
                add: None,
                ingredient,
            },
            SubstitutionRule::Add { ingredient } => RawRule {
                replace: None,
                add: Some(Value::Bool(true)),
                ingredient,
            },
        }
    }
}

/// An immutable recipe definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(alias = "ingredients")]
    pub base_ingredients: Vec<Ingredient>,

    #[serde(default, rename = "luxury_additions", alias = "premium_rules")]
    pub premium_rules: Vec<SubstitutionRule>,

    /// Opaque image reference for the renderer.
    #[serde(default)]
    pub image: Option<String>,
}

impl Recipe {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

/// Session-scoped, read-only collection of recipes in catalog order.
#[derive(Debug, Clone, Default)]
pub struct RecipeCatalog {
    recipes: Vec<Recipe>,
}

impl RecipeCatalog {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Get a recipe by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&Recipe> {
        let wanted = name.trim().to_lowercase();
        self.recipes.iter().find(|r| r.name.to_lowercase() == wanted)
    }

    /// Every distinct tag in first-seen order.
    pub fn tags(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for tag in self.recipes.iter().flat_map(|r| r.tags.iter()) {
            if !seen.iter().any(|s| s.eq_ignore_ascii_case(tag)) {
                seen.push(tag.clone());
            }
        }
        seen
    }

    /// Every distinct base or premium ingredient name, lowercase and sorted.
    pub fn ingredient_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .recipes
            .iter()
            .flat_map(|r| {
                r.base_ingredients
                    .iter()
                    .chain(r.premium_rules.iter().map(SubstitutionRule::ingredient))
            })
            .map(Ingredient::key)
            .collect();
        names.sort();
        names.dedup();
        names
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
