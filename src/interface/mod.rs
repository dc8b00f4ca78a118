pub mod export;
pub mod prompts;
pub mod render;

pub use export::{
    pantry_reports, ranked_reports, reports_to_json, write_shopping_csv, RecipeReport,
};
pub use prompts::{
    collect_session, prompt_budget, prompt_pantry, prompt_persons, prompt_profile, prompt_yes_no,
    suggest_ingredients,
};
pub use render::{
    display_pantry, display_prices, display_ranked, display_recipe_card, display_shopping_list,
};
