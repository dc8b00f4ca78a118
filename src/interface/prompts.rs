use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::engine::constants::{MAX_SUGGESTIONS, SUGGESTION_THRESHOLD};
use crate::engine::parse_pantry_input;
use crate::error::Result;
use crate::state::{parse_budget, parse_persons, Profile, Session};

/// Prompt for the per-person budget. Invalid input is reported and asked again.
pub fn prompt_budget() -> Result<f64> {
    loop {
        let input: String = Input::new()
            .with_prompt("Budget per person (TL)")
            .default("100".to_string())
            .interact_text()?;

        match parse_budget(&input) {
            Ok(budget) => return Ok(budget),
            Err(e) => println!("{}", e),
        }
    }
}

/// Prompt for household size.
pub fn prompt_persons(default: u32) -> Result<u32> {
    loop {
        let input: String = Input::new()
            .with_prompt("How many people are eating?")
            .default(default.to_string())
            .interact_text()?;

        match parse_persons(&input) {
            Ok(persons) => return Ok(persons),
            Err(e) => println!("{}", e),
        }
    }
}

/// Prompt for a profile among the catalog's tags.
pub fn prompt_profile(tags: &[String], current: &Profile) -> Result<Profile> {
    let mut options = vec!["all".to_string()];
    options.extend(tags.iter().cloned());

    let default = match current {
        Profile::All => 0,
        Profile::Tag(tag) => options
            .iter()
            .position(|o| o.eq_ignore_ascii_case(tag))
            .unwrap_or(0),
    };

    let selection = Select::new()
        .with_prompt("Profile")
        .items(&options)
        .default(default)
        .interact()?;

    Ok(Profile::parse(&options[selection]))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect a full session from the user, starting from `current`.
pub fn collect_session(tags: &[String], current: &Session) -> Result<Session> {
    let profile = prompt_profile(tags, &current.profile)?;
    let persons = prompt_persons(current.persons)?;
    let premium = prompt_yes_no("Premium ingredients?", current.premium)?;
    Ok(Session::new(profile, persons, premium))
}

/// Catalog ingredient names resembling `fragment`, best first.
pub fn suggest_ingredients(fragment: &str, known: &[String]) -> Vec<String> {
    let needle = fragment.to_lowercase();
    let mut candidates: Vec<(&String, f64)> = known
        .iter()
        .map(|name| (name, jaro_winkler(name, &needle)))
        .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    candidates
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(name, _)| name.clone())
        .collect()
}

/// Prompt for pantry contents, offering catalog names for unknown items.
///
/// Returns comma-joined fragments ready for pantry matching.
pub fn prompt_pantry(known: &[String]) -> Result<String> {
    let input: String = Input::new()
        .with_prompt("What do you have at home? (comma separated)")
        .allow_empty(true)
        .interact_text()?;

    let mut accepted = Vec::new();

    for fragment in parse_pantry_input(&input) {
        if known.iter().any(|name| name.contains(fragment.as_str())) {
            accepted.push(fragment);
            continue;
        }

        let suggestions = suggest_ingredients(&fragment, known);
        if suggestions.is_empty() {
            println!("No recipe uses '{}'", fragment);
            continue;
        }

        let mut options = suggestions.clone();
        options.push(format!("Keep '{}'", fragment));

        let selection = Select::new()
            .with_prompt(format!("Did you mean one of these instead of '{}'?", fragment))
            .items(&options)
            .default(0)
            .interact()?;

        if selection < suggestions.len() {
            accepted.push(suggestions[selection].clone());
        } else {
            accepted.push(fragment);
        }
    }

    Ok(accepted.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggest_ingredients() {
        let known = vec![
            "domates".to_string(),
            "patates".to_string(),
            "yumurta".to_string(),
        ];
        let suggestions = suggest_ingredients("Domatse", &known);
        assert_eq!(suggestions.first().map(String::as_str), Some("domates"));
        assert!(suggest_ingredients("xyz", &known).is_empty());
    }
}
