use crate::engine::constants::*;
use crate::models::{Package, PriceRecord};

/// Needed/size ratios within this distance above a whole number round down.
const PACKAGE_RATIO_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dimension {
    Mass,
    Volume,
    Count,
}

/// A unit spelling resolved to its dimension and size in the base unit
/// (grams, millilitres, or pieces).
#[derive(Debug, Clone, Copy, PartialEq)]
struct UnitSpec {
    dimension: Dimension,
    factor: f64,
}

fn parse_unit(raw: &str) -> Option<UnitSpec> {
    let unit = raw.trim().trim_end_matches('.').to_lowercase();

    if let Some(&(_, factor)) = MASS_UNITS.iter().find(|(name, _)| *name == unit) {
        return Some(UnitSpec {
            dimension: Dimension::Mass,
            factor,
        });
    }
    if let Some(&(_, factor)) = VOLUME_UNITS.iter().find(|(name, _)| *name == unit) {
        return Some(UnitSpec {
            dimension: Dimension::Volume,
            factor,
        });
    }
    if COUNT_UNITS.contains(&unit.as_str()) {
        return Some(UnitSpec {
            dimension: Dimension::Count,
            factor: 1.0,
        });
    }
    None
}

/// A number found in a title and the word glued to (or following) it.
#[derive(Debug, Clone, PartialEq)]
struct SizeHint {
    amount: f64,
    suffix: String,
}

fn is_suffix_char(c: char) -> bool {
    c.is_alphabetic() || c == '\'' || c == '’'
}

/// Scan a title for `<number>[ ]<suffix>` pairs, in order.
///
/// Accepts comma or dot decimals ("1,5 kg"). The suffix is the run of letters
/// and apostrophes after the number, lowercased; empty for a bare number.
fn scan_size_hints(title: &str) -> Vec<SizeHint> {
    let chars: Vec<char> = title.chars().collect();
    let mut hints = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        if !chars[i].is_ascii_digit() {
            i += 1;
            continue;
        }

        let start = i;
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
        }
        let has_fraction = i + 1 < chars.len()
            && (chars[i] == ',' || chars[i] == '.')
            && chars[i + 1].is_ascii_digit();
        if has_fraction {
            i += 1;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
        }
        let number: String = chars[start..i]
            .iter()
            .map(|&c| if c == ',' { '.' } else { c })
            .collect();

        let mut j = i;
        while j < chars.len() && chars[j] == ' ' {
            j += 1;
        }
        let suffix_start = j;
        while j < chars.len() && is_suffix_char(chars[j]) {
            j += 1;
        }
        let suffix: String = chars[suffix_start..j]
            .iter()
            .map(|&c| if c == '’' { '\'' } else { c })
            .collect::<String>()
            .to_lowercase();

        if let Ok(amount) = number.parse::<f64>() {
            hints.push(SizeHint { amount, suffix });
        }
    }

    hints
}

fn is_count_marker(suffix: &str) -> bool {
    COUNT_SUFFIXES.contains(&suffix) || COUNT_UNITS.contains(&suffix)
}

/// Size of one package for a mass or volume record, in the record's unit.
///
/// A preceding "4x" multiplies the size ("4x250g" under kg is 1.0).
fn measured_size(hints: &[SizeHint], unit: UnitSpec) -> Option<f64> {
    let mut multiplier = 1.0;
    for hint in hints {
        if hint.suffix == "x" && hint.amount > 0.0 {
            multiplier = hint.amount;
            continue;
        }
        if let Some(spec) = parse_unit(&hint.suffix) {
            if spec.dimension == unit.dimension && hint.amount > 0.0 {
                return Some(multiplier * hint.amount * spec.factor / unit.factor);
            }
        }
        multiplier = 1.0;
    }
    None
}

/// Pieces per package for a count record.
fn counted_size(hints: &[SizeHint]) -> Option<f64> {
    let positive = || hints.iter().filter(|h| h.amount > 0.0);

    positive()
        .find(|h| is_count_marker(&h.suffix))
        .or_else(|| positive().find(|h| parse_unit(&h.suffix).is_none()))
        .map(|h| h.amount)
}

/// Infer one package's size, in `unit`, from a free-text package title.
///
/// Best effort: "500g" under `kg` is 0.5, "200ml" under `lt` is 0.2, "30'lu"
/// under `adet` is 30. Returns [`DEFAULT_PACKAGE_SIZE`] when the unit is
/// unknown or the title has no usable hint.
pub fn infer_package_size(title: &str, unit: &str) -> f64 {
    let Some(spec) = parse_unit(unit) else {
        return DEFAULT_PACKAGE_SIZE;
    };

    let hints = scan_size_hints(title);
    let size = match spec.dimension {
        Dimension::Mass | Dimension::Volume => measured_size(&hints, spec),
        Dimension::Count => counted_size(&hints),
    };

    size.filter(|s| s.is_finite() && *s > 0.0)
        .unwrap_or(DEFAULT_PACKAGE_SIZE)
}

/// Number of whole packages of `size` needed to cover `needed`.
///
/// Always at least one.
pub fn packages_needed(needed: f64, size: f64) -> u32 {
    if needed <= size || size <= 0.0 {
        return 1;
    }
    let ratio = needed / size;
    (ratio - PACKAGE_RATIO_TOLERANCE).ceil().max(1.0) as u32
}

/// Quantize `needed` (already scaled by person count) into whole packages of `record`.
pub fn quantize(record: &PriceRecord, needed: f64) -> Package {
    let size = infer_package_size(&record.title, &record.unit);
    let count = packages_needed(needed, size);
    Package {
        size,
        count,
        cost: record.price.max(0.0) * count as f64,
        purchased: size * count as f64,
    }
}
