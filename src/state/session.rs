use std::fmt;

use crate::engine::constants::{DEFAULT_PERSONS, MAX_PERSONS};
use crate::error::{MenuError, Result};
use crate::models::lenient::parse_number;
use crate::models::Recipe;

/// Which recipes a user is browsing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Profile {
    #[default]
    All,
    Tag(String),
}

impl Profile {
    /// "all" (or blank) means no tag filter.
    pub fn parse(raw: &str) -> Self {
        let tag = raw.trim();
        if tag.is_empty() || tag.eq_ignore_ascii_case("all") {
            Profile::All
        } else {
            Profile::Tag(tag.to_string())
        }
    }

    pub fn admits(&self, recipe: &Recipe) -> bool {
        match self {
            Profile::All => true,
            Profile::Tag(tag) => recipe.has_tag(tag),
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Profile::All => write!(f, "all"),
            Profile::Tag(tag) => write!(f, "{}", tag),
        }
    }
}

/// The user's current choices, passed explicitly into every engine call.
///
/// Changing a choice produces a new value; nothing is shared between runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub profile: Profile,
    pub persons: u32,
    pub premium: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            profile: Profile::All,
            persons: DEFAULT_PERSONS,
            premium: false,
        }
    }
}

impl Session {
    pub fn new(profile: Profile, persons: u32, premium: bool) -> Self {
        Self {
            profile,
            persons: persons.max(1),
            premium,
        }
    }

    pub fn with_profile(self, profile: Profile) -> Self {
        Self { profile, ..self }
    }

    pub fn with_persons(self, persons: u32) -> Self {
        Self {
            persons: persons.max(1),
            ..self
        }
    }

    pub fn with_premium(self, premium: bool) -> Self {
        Self { premium, ..self }
    }

    pub fn persons_f64(&self) -> f64 {
        self.persons as f64
    }
}

/// Validate a per-person budget typed by the user.
///
/// Accepts comma decimals and a trailing "TL". Rejects blanks, non-numbers,
/// and negatives with [`MenuError::InvalidBudget`].
pub fn parse_budget(raw: &str) -> Result<f64> {
    let value = parse_number(raw)
        .ok_or_else(|| MenuError::InvalidBudget(format!("'{}' is not a number", raw.trim())))?;

    if value < 0.0 {
        return Err(MenuError::InvalidBudget(format!(
            "budget must not be negative (got {})",
            value
        )));
    }

    Ok(value)
}

/// Validate a household size typed by the user.
pub fn parse_persons(raw: &str) -> Result<u32> {
    let persons: u32 = raw
        .trim()
        .parse()
        .map_err(|_| MenuError::InvalidInput(format!("'{}' is not a person count", raw.trim())))?;

    if persons == 0 || persons > MAX_PERSONS {
        return Err(MenuError::InvalidInput(format!(
            "person count must be between 1 and {}",
            MAX_PERSONS
        )));
    }

    Ok(persons)
}
