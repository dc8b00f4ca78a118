pub mod cli;
pub mod engine;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod state;

pub use engine::MenuEngine;
pub use error::{MenuError, Result};
pub use models::{PriceCatalog, Recipe, RecipeCatalog, RecipeCostResult};
pub use state::Session;
