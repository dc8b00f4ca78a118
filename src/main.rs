use std::path::Path;

use clap::Parser;
use tracing::debug;

use budget_menu_rs::cli::{Cli, Command, SessionArgs};
use budget_menu_rs::engine::{CostingConfig, MenuEngine};
use budget_menu_rs::error::{MenuError, Result};
use budget_menu_rs::interface::{
    collect_session, display_pantry, display_prices, display_ranked, display_shopping_list,
    pantry_reports, prompt_budget, prompt_pantry, prompt_yes_no, ranked_reports, reports_to_json,
    write_shopping_csv, RecipeReport,
};
use budget_menu_rs::logging;
use budget_menu_rs::models::{PriceCatalog, RecipeCatalog};
use budget_menu_rs::state::{load_prices, load_recipes, parse_budget, Profile, Session};

fn main() {
    logging::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    let prices = load_prices(&cli.prices)?;
    let recipes = load_recipes(&cli.recipes)?;

    let config = match cli.penalty {
        Some(penalty) if penalty.is_finite() && penalty >= 0.0 => CostingConfig {
            fallback_penalty: penalty,
        },
        Some(penalty) => {
            return Err(MenuError::InvalidInput(format!(
                "penalty must be a non-negative number (got {})",
                penalty
            )))
        }
        None => CostingConfig::default(),
    };
    debug!(?config, "costing configuration");

    let engine = MenuEngine::with_config(&prices, &recipes, config);

    match command {
        Command::Budget {
            budget,
            profile,
            session,
        } => cmd_budget(&engine, &budget, &profile, &session),
        Command::Pantry { items, session } => cmd_pantry(&engine, &items, &session),
        Command::Shop {
            recipe,
            csv,
            session,
        } => cmd_shop(&engine, &recipe, csv.as_deref(), &session),
        Command::Prices => {
            display_prices(&prices);
            Ok(())
        }
        Command::Interactive => cmd_interactive(&engine),
    }
}

fn session_from_args(profile: Profile, args: &SessionArgs) -> Session {
    Session::new(profile, args.persons, args.premium)
}

fn print_json(reports: &[RecipeReport]) -> Result<()> {
    println!("{}", reports_to_json(reports)?);
    Ok(())
}

/// List recipes within a per-person budget.
fn cmd_budget(engine: &MenuEngine, budget: &str, profile: &str, args: &SessionArgs) -> Result<()> {
    // Validate before any costing runs
    let per_person = parse_budget(budget)?;
    let session = session_from_args(Profile::parse(profile), args);

    let ranked = engine.affordable(&session, per_person);

    if args.json {
        return print_json(&ranked_reports(&ranked));
    }
    display_ranked(&ranked, &session, per_person);
    Ok(())
}

/// Rank recipes by pantry overlap.
fn cmd_pantry(engine: &MenuEngine, items: &str, args: &SessionArgs) -> Result<()> {
    let session = session_from_args(Profile::All, args);
    let matches = engine.pantry(&session, items);

    if args.json {
        return print_json(&pantry_reports(&matches));
    }
    display_pantry(&matches, &session);
    Ok(())
}

/// Show (and optionally export) one recipe's shopping list.
fn cmd_shop(
    engine: &MenuEngine,
    name: &str,
    csv_path: Option<&str>,
    args: &SessionArgs,
) -> Result<()> {
    let recipe = engine
        .recipes()
        .get(name)
        .ok_or_else(|| MenuError::RecipeNotFound(name.to_string()))?;

    let session = session_from_args(Profile::All, args);
    let cost = engine.cost(recipe, &session);

    if args.json {
        print_json(&[RecipeReport::new(recipe, &cost)])?;
    } else {
        display_shopping_list(recipe, &cost);
    }

    if let Some(path) = csv_path {
        write_shopping_csv(&cost, Path::new(path))?;
        println!("Shopping list written to {}", path);
    }

    Ok(())
}

/// Prompt-driven loop: each round recomputes from the catalogs.
fn cmd_interactive(engine: &MenuEngine) -> Result<()> {
    let prices: &PriceCatalog = engine.prices();
    let recipes: &RecipeCatalog = engine.recipes();

    println!(
        "Loaded {} prices and {} recipes",
        prices.len(),
        recipes.len()
    );
    if recipes.is_empty() {
        println!("No recipes to choose from.");
        return Ok(());
    }

    let tags = recipes.tags();
    let known_ingredients = recipes.ingredient_names();
    let mut session = Session::default();

    loop {
        session = collect_session(&tags, &session)?;

        let use_pantry =
            prompt_yes_no("Search by what you have at home instead of budget?", false)?;
        if use_pantry {
            let items = prompt_pantry(&known_ingredients)?;
            let matches = engine.pantry(&session, &items);
            display_pantry(&matches, &session);
        } else {
            let budget = prompt_budget()?;
            let ranked = engine.affordable(&session, budget);
            display_ranked(&ranked, &session, budget);
        }

        if !prompt_yes_no("Search again?", true)? {
            break;
        }
    }

    Ok(())
}
