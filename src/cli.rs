use clap::{Args, Parser, Subcommand};

/// BudgetMenu: find recipes you can afford from real store prices.
#[derive(Parser, Debug)]
#[command(name = "budget_menu")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the price catalog JSON file.
    #[arg(long, global = true, default_value = "data/prices.json")]
    pub prices: String,

    /// Path to the recipe catalog JSON file.
    #[arg(long, global = true, default_value = "data/recipes.json")]
    pub recipes: String,

    /// Cost charged per person for an ingredient with no known price.
    #[arg(long, global = true)]
    pub penalty: Option<f64>,
}

/// Household and mode options shared by costing commands.
#[derive(Args, Debug, Clone)]
pub struct SessionArgs {
    /// Number of people eating.
    #[arg(
        short = 'n',
        long,
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..=50)
    )]
    pub persons: u32,

    /// Apply premium ingredient substitutions.
    #[arg(long)]
    pub premium: bool,

    /// Print results as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// List recipes that fit a per-person budget, cheapest first.
    Budget {
        /// Budget per person (accepts "99,50").
        budget: String,

        /// Only recipes with this tag ("all" for every recipe).
        #[arg(short, long, default_value = "all")]
        profile: String,

        #[command(flatten)]
        session: SessionArgs,
    },

    /// Rank recipes by how many of your ingredients they use.
    Pantry {
        /// Comma-separated ingredients you already have.
        items: String,

        #[command(flatten)]
        session: SessionArgs,
    },

    /// Show the shopping list for one recipe.
    Shop {
        /// Recipe name (case-insensitive).
        recipe: String,

        /// Also write the list to this CSV file.
        #[arg(long)]
        csv: Option<String>,

        #[command(flatten)]
        session: SessionArgs,
    },

    /// Show the loaded price catalog.
    Prices,

    /// Answer prompts for budget, profile, and household size.
    #[default]
    Interactive,
}
