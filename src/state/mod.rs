mod persistence;
mod session;

pub use persistence::{load_prices, load_recipes, parse_prices, parse_recipes};
pub use session::{parse_budget, parse_persons, Profile, Session};
