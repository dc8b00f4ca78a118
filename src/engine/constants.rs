/// Cost charged per person for an ingredient with no matching price.
///
/// Keeps recipes with unknown ingredients from looking falsely cheap.
pub const FALLBACK_PENALTY_PER_PERSON: f64 = 50.0;

/// Yield reported when no ingredient resolved to a purchasable price.
/// Read as "yield unknown", not "infinite".
pub const UNBOUNDED_YIELD: u32 = 999;

/// Sort key for records whose unit price could not be parsed.
pub const UNPARSEABLE_UNIT_PRICE: f64 = f64::MAX;

/// Package size assumed when the title carries no usable size hint.
pub const DEFAULT_PACKAGE_SIZE: f64 = 1.0;

/// Pantry fragments shorter than this are ignored.
pub const MIN_PANTRY_FRAGMENT_LEN: usize = 3;

/// Household size when none is given.
pub const DEFAULT_PERSONS: u32 = 1;

/// Upper bound on household size accepted from user input.
pub const MAX_PERSONS: u32 = 50;

// ─────────────────────────────────────────────────────────────────────────────
// Unit vocabulary used by package-size inference
// ─────────────────────────────────────────────────────────────────────────────

/// Mass unit spellings and their size in grams.
pub const MASS_UNITS: &[(&str, f64)] = &[("kg", 1000.0), ("gr", 1.0), ("g", 1.0)];

/// Volume unit spellings and their size in millilitres.
pub const VOLUME_UNITS: &[(&str, f64)] = &[
    ("lt", 1000.0),
    ("l", 1000.0),
    ("ml", 1.0),
    ("cl", 10.0),
];

/// Piece unit spellings.
pub const COUNT_UNITS: &[&str] = &["adet", "pcs", "piece", "pieces", "ad"];

/// Suffixes that mark a pack count in titles ("30'lu", "10lu", "6'lı").
pub const COUNT_SUFFIXES: &[&str] = &[
    "'lu", "'li", "'lı", "'lü", "lu", "li", "lı", "lü", "adet", "x",
];

// ─────────────────────────────────────────────────────────────────────────────
// Display
// ─────────────────────────────────────────────────────────────────────────────

/// Currency suffix for rendered amounts.
pub const CURRENCY: &str = "TL";

/// Number of fuzzy suggestions offered for an unknown pantry item.
pub const MAX_SUGGESTIONS: usize = 5;

/// Minimum Jaro-Winkler similarity for a pantry suggestion.
pub const SUGGESTION_THRESHOLD: f64 = 0.8;
