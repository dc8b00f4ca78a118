use crate::engine::constants::CURRENCY;
use crate::engine::{PantryMatch, RankedRecipe};
use crate::models::{BreakdownEntry, PriceCatalog, Recipe, RecipeCostResult};
use crate::state::Session;

fn format_money(value: f64) -> String {
    format!("{:.2} {}", value, CURRENCY)
}

fn describe_session(session: &Session) -> String {
    format!(
        "profile: {}, persons: {}, premium: {}",
        session.profile,
        session.persons,
        if session.premium { "on" } else { "off" }
    )
}

/// Widest ingredient name in characters, so "sıvı yağ" pads like "oil".
fn name_column_width(breakdown: &[BreakdownEntry]) -> usize {
    breakdown
        .iter()
        .map(|b| b.name.chars().count())
        .max()
        .unwrap_or(10)
}

/// Print one recipe card: totals, per-ingredient costs, and yield.
pub fn display_recipe_card(recipe: &Recipe, cost: &RecipeCostResult) {
    let tags = recipe
        .tags
        .iter()
        .map(|t| format!("#{}", t))
        .collect::<Vec<_>>()
        .join(" ");

    println!("┌─ {}  {}", recipe.name, tags);
    println!("│  Meal cost:     {}", format_money(cost.display_meal_total()));
    println!("│  Shopping cost: {}", format_money(cost.display_shopping_total()));

    let breakdown = cost.breakdown();
    let width = name_column_width(&breakdown);
    for entry in &breakdown {
        let marker = if entry.resolved { "" } else { "  (no price, estimated)" };
        let brand = entry
            .brand
            .as_deref()
            .filter(|b| !b.is_empty())
            .map(|b| format!(" [{}]", b))
            .unwrap_or_default();
        println!(
            "│    {:<width$} {:>7} {:<5}{:>12}{}{}",
            entry.name,
            entry.amount,
            entry.unit,
            format_money(entry.cost),
            brand,
            marker,
            width = width
        );
    }

    if cost.yield_info.is_unknown() {
        println!("│  Yield: unknown (nothing purchasable)");
    } else {
        println!(
            "│  Yield: {} time(s), limited by {}",
            cost.yield_info.count,
            cost.yield_info.limiting_ingredient.as_deref().unwrap_or("-")
        );
    }
    println!("└─");
}

/// Print budget filter results.
pub fn display_ranked(ranked: &[RankedRecipe], session: &Session, per_person_budget: f64) {
    println!();
    println!(
        "=== Recipes within {} per person ({}) ===",
        format_money(per_person_budget),
        describe_session(session)
    );
    println!();

    if ranked.is_empty() {
        println!("No recipes fit this budget. Try a higher budget or another profile.");
        println!();
        return;
    }

    for entry in ranked {
        display_recipe_card(entry.recipe, &entry.cost);
        println!();
    }
}

/// Print pantry match results.
pub fn display_pantry(matches: &[PantryMatch], session: &Session) {
    println!();
    println!("=== Pantry matches ({}) ===", describe_session(session));
    println!();

    if matches.is_empty() {
        println!("No recipe uses any of those ingredients.");
        println!();
        return;
    }

    for m in matches {
        println!(
            "{} of {} ingredients on hand: {}",
            m.score,
            m.total,
            m.matched.join(", ")
        );
        display_recipe_card(m.recipe, &m.cost);
        println!();
    }
}

/// Print the shopping list for one recipe.
pub fn display_shopping_list(recipe: &Recipe, cost: &RecipeCostResult) {
    println!();
    println!("=== Shopping list: {} ===", recipe.name);
    println!();

    let items = cost.shopping_list();
    if items.is_empty() {
        println!("Nothing purchasable in the price catalog.");
    }
    for item in &items {
        println!(
            "  {} x {} ({}) - {}  [need {} {}]",
            item.packages,
            item.title,
            item.brand,
            format_money(item.price),
            item.needed,
            item.unit
        );
    }

    let missing = cost.unresolved();
    if !missing.is_empty() {
        println!();
        println!("  Not in catalog: {}", missing.join(", "));
    }

    println!();
    println!("Total: {}", format_money(cost.display_shopping_total()));
    println!();
}

/// Print the price catalog as a compact ticker.
pub fn display_prices(prices: &PriceCatalog) {
    println!();
    match (&prices.market, &prices.date) {
        (Some(market), Some(date)) => println!("=== Prices: {} ({}) ===", market, date),
        (Some(market), None) => println!("=== Prices: {} ===", market),
        _ => println!("=== Prices ==="),
    }
    println!();

    for record in prices.records() {
        let unit_price = record
            .unit_price
            .map(|p| format!("  ({}/{})", format_money(p), record.unit))
            .unwrap_or_default();
        let campaign = if record.has_campaign() { "  *campaign*" } else { "" };
        println!(
            "  {}: {} - {}{}{}",
            record.name,
            record.title,
            format_money(record.price),
            unit_price,
            campaign
        );
    }
    println!();
}
